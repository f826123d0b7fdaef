use serde::{Deserialize, Serialize};

use super::{Record, RecordKind, non_empty};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Account {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub entity: String,

    /// May be empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
}

impl Record for Account {
    const KIND: RecordKind = RecordKind::Account;

    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_minimally_populated(&self) -> bool {
        !self.id.is_empty() && !self.entity.is_empty()
    }

    fn entity(&self) -> Option<&str> {
        non_empty(&self.entity)
    }
}
