use serde::{Deserialize, Serialize};

use super::{Record, RecordKind, non_empty};

/// Values of the asset `type` field
pub mod asset_type {
    pub const NATIVE: &str = "native";
    pub const IBC: &str = "ibc";
    pub const CW20: &str = "cw20";
    pub const CW721: &str = "cw721";
    pub const TOKEN_FACTORY: &str = "tokenfactory";
}

/// The two disjoint field layouts an asset record can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetShape {
    /// Display metadata (name, symbol, decimals) lives on this record
    Standard,
    /// Bridged over IBC; described only by where it came from
    Bridged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Asset {
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub entity: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub symbol: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub decimals: String,

    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub asset_type: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub circ_supply: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub circ_supply_api: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub total_supply: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub total_supply_api: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,

    #[serde(rename = "coinmarketcap", default, skip_serializing_if = "String::is_empty")]
    pub coin_market_cap: String,

    #[serde(rename = "coingecko", default, skip_serializing_if = "String::is_empty")]
    pub coin_gecko: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub verification_tx: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub origin_chain_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub origin_id: String,
}

impl Asset {
    /// Bridged assets are tagged explicitly by `type`; the id is never inspected.
    pub fn shape(&self) -> AssetShape {
        if self.asset_type == asset_type::IBC {
            AssetShape::Bridged
        } else {
            AssetShape::Standard
        }
    }

    pub fn is_bridged(&self) -> bool {
        self.shape() == AssetShape::Bridged
    }

    /// Wire names of required fields that are empty for this record's shape
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required = match self.shape() {
            AssetShape::Bridged => vec![
                ("id", self.id.as_str()),
                ("origin_chain_id", self.origin_chain_id.as_str()),
                ("origin_id", self.origin_id.as_str()),
            ],
            AssetShape::Standard => vec![
                ("id", self.id.as_str()),
                ("name", self.name.as_str()),
                ("symbol", self.symbol.as_str()),
                ("decimals", self.decimals.as_str()),
                ("type", self.asset_type.as_str()),
            ],
        };

        required
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Wire names of fields that are set but not allowed for this record's shape
    pub fn forbidden_fields(&self) -> Vec<&'static str> {
        let forbidden = match self.shape() {
            AssetShape::Bridged => vec![
                ("name", self.name.as_str()),
                ("symbol", self.symbol.as_str()),
                ("decimals", self.decimals.as_str()),
                ("circ_supply", self.circ_supply.as_str()),
                ("circ_supply_api", self.circ_supply_api.as_str()),
                ("total_supply", self.total_supply.as_str()),
                ("total_supply_api", self.total_supply_api.as_str()),
                ("icon", self.icon.as_str()),
                ("coinmarketcap", self.coin_market_cap.as_str()),
                ("coingecko", self.coin_gecko.as_str()),
                ("verification_tx", self.verification_tx.as_str()),
            ],
            AssetShape::Standard => vec![
                ("origin_chain_id", self.origin_chain_id.as_str()),
                ("origin_id", self.origin_id.as_str()),
            ],
        };

        forbidden
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, _)| field)
            .collect()
    }
}

impl Record for Asset {
    const KIND: RecordKind = RecordKind::Asset;

    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_minimally_populated(&self) -> bool {
        self.missing_fields().is_empty() && self.forbidden_fields().is_empty()
    }

    fn entity(&self) -> Option<&str> {
        non_empty(&self.entity)
    }
}
