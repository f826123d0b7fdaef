//! Tie-break chains for each record kind

use super::{AssetOrder, CanonicalOrder, OrderingOptions, SortKey};
use crate::models::{Account, Asset, Binary, Contract, Entity, Pool};

impl CanonicalOrder for Account {
    fn sort_keys(&self, _options: &OrderingOptions) -> Vec<SortKey<'_>> {
        vec![
            SortKey::Text(&self.entity),
            SortKey::Text(&self.label),
            SortKey::Text(&self.id),
        ]
    }
}

impl CanonicalOrder for Contract {
    fn sort_keys(&self, _options: &OrderingOptions) -> Vec<SortKey<'_>> {
        vec![
            SortKey::Text(&self.entity),
            SortKey::Text(&self.label),
            SortKey::Text(&self.id),
        ]
    }
}

impl CanonicalOrder for Entity {
    fn sort_keys(&self, _options: &OrderingOptions) -> Vec<SortKey<'_>> {
        vec![SortKey::Text(&self.name)]
    }
}

impl CanonicalOrder for Binary {
    fn sort_keys(&self, _options: &OrderingOptions) -> Vec<SortKey<'_>> {
        vec![SortKey::Numeric(&self.id)]
    }
}

impl CanonicalOrder for Pool {
    fn sort_keys(&self, _options: &OrderingOptions) -> Vec<SortKey<'_>> {
        vec![
            SortKey::Text(&self.dex),
            SortKey::Text(&self.pool_type),
            SortKey::Text(&self.id),
        ]
    }
}

impl CanonicalOrder for Asset {
    fn sort_keys(&self, options: &OrderingOptions) -> Vec<SortKey<'_>> {
        match options.asset_order {
            AssetOrder::ById => vec![SortKey::Text(&self.id)],
            // Entity-less assets all tie on the empty entity, leaving name then id
            AssetOrder::EntityGrouped => vec![
                SortKey::PresentFirst(!self.entity.is_empty()),
                SortKey::Text(&self.entity),
                SortKey::Text(&self.name),
                SortKey::Text(&self.id),
            ],
        }
    }
}
