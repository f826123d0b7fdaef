use serde::{Deserialize, Serialize};

use super::{Record, RecordKind};

/// An organisation issuing or operating registry resources. Its name is its id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entity {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub website: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub telegram: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub twitter: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub discord: String,
}

impl Record for Entity {
    const KIND: RecordKind = RecordKind::Entity;

    fn identifier(&self) -> &str {
        &self.name
    }

    fn is_minimally_populated(&self) -> bool {
        !self.name.is_empty()
    }
}
