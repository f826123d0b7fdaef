use serde::{Deserialize, Serialize};

use super::{Record, RecordKind, non_empty};

/// A deployed code binary (e.g. a wasm code id) and who uploaded it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Binary {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub entity: String,

    #[serde(default)]
    pub label: String,
}

impl Record for Binary {
    const KIND: RecordKind = RecordKind::Binary;

    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_minimally_populated(&self) -> bool {
        !self.id.is_empty() && !self.entity.is_empty() && !self.label.is_empty()
    }

    fn entity(&self) -> Option<&str> {
        non_empty(&self.entity)
    }
}
