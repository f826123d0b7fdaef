pub mod account;
pub mod asset;
pub mod binary;
pub mod contract;
pub mod entity;
pub mod pool;

use std::fmt;

// Re-export commonly used types
pub use account::Account;
pub use asset::{Asset, AssetShape};
pub use binary::Binary;
pub use contract::Contract;
pub use entity::Entity;
pub use pool::Pool;

/// The six record kinds held in a chain's registry directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum RecordKind {
    Account,
    Asset,
    Binary,
    Contract,
    Entity,
    Pool,
}

impl RecordKind {
    pub const ALL: [RecordKind; 6] = [
        RecordKind::Account,
        RecordKind::Asset,
        RecordKind::Binary,
        RecordKind::Contract,
        RecordKind::Entity,
        RecordKind::Pool,
    ];

    /// Lowercase name used in file names and messages
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Account => "account",
            RecordKind::Asset => "asset",
            RecordKind::Binary => "binary",
            RecordKind::Contract => "contract",
            RecordKind::Entity => "entity",
            RecordKind::Pool => "pool",
        }
    }

    /// File holding this kind inside a chain directory (e.g. `account.json`)
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }

    /// Human name of the identifying field, as used in error messages
    pub fn identifier_label(&self) -> &'static str {
        match self {
            RecordKind::Entity => "name",
            _ => "ID",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behaviour shared by every registry record
///
/// Records are immutable snapshots; both engines only ever borrow them.
pub trait Record {
    const KIND: RecordKind;

    /// Value of the identifying field (`id`, or `name` for entities)
    fn identifier(&self) -> &str;

    /// Whether every field required for this record's shape is non-empty
    fn is_minimally_populated(&self) -> bool;

    /// Name of the referenced entity, if the kind carries one and it is set
    fn entity(&self) -> Option<&str> {
        None
    }
}

/// Returns `Some(value)` unless the string is empty
pub(crate) fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests;
