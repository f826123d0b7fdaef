//! Resolved settings for one run of the CLI

use std::path::PathBuf;

use crate::fetch::DEFAULT_BASE_URL;
use crate::ordering::{AssetOrder, OrderingOptions};
use crate::validation::ValidationOptions;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Registry root holding one directory per chain
    pub root: PathBuf,

    /// Upstream location of the registry, for `fetch`
    pub base_url: String,

    /// Order assets by entity, then name, then id instead of by id alone
    pub legacy_asset_order: bool,

    /// Fail validation on entities no other record references
    pub check_unused_entities: bool,

    /// Verification tx markers exempt from the tx hash rules
    pub permissioned_markers: Option<Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            base_url: DEFAULT_BASE_URL.to_string(),
            legacy_asset_order: false,
            check_unused_entities: true,
            permissioned_markers: None,
        }
    }
}

impl Settings {
    pub fn ordering_options(&self) -> OrderingOptions {
        OrderingOptions {
            asset_order: if self.legacy_asset_order {
                AssetOrder::EntityGrouped
            } else {
                AssetOrder::ById
            },
        }
    }

    pub fn validation_options(&self) -> ValidationOptions {
        match &self.permissioned_markers {
            Some(markers) => ValidationOptions {
                permissioned_markers: markers.clone(),
            },
            None => ValidationOptions::default(),
        }
    }
}
