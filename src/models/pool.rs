use serde::{Deserialize, Serialize};

use super::{Record, RecordKind};

/// Exchange names seen in the registry
pub mod dex {
    pub const ASTROPORT: &str = "Astroport";
    pub const TERRASWAP: &str = "Terraswap";
    pub const TFM: &str = "TFM";
    pub const PHOENIX: &str = "Phoenix";
    pub const WHITE_WHALE: &str = "White Whale";
    pub const OSMOSIS: &str = "Osmosis";
    pub const FORTIS: &str = "Fortis";
    pub const LOOP: &str = "Loop";
    pub const MARBLE_FINANCE: &str = "MarbleFinance";
    pub const WYND: &str = "Wynd";
    pub const JUNOSWAP: &str = "Junoswap";
    pub const FIN: &str = "FIN";

    pub const ALL: [&str; 12] = [
        ASTROPORT,
        TERRASWAP,
        TFM,
        PHOENIX,
        WHITE_WHALE,
        OSMOSIS,
        FORTIS,
        LOOP,
        MARBLE_FINANCE,
        WYND,
        JUNOSWAP,
        FIN,
    ];
}

/// Pool curve types
pub mod pool_type {
    pub const XYK: &str = "xyk";
    pub const STABLE: &str = "stable";
    pub const ORDERBOOK: &str = "orderbook";
    pub const BALANCER_V1: &str = "balancerV1";
}

/// A liquidity pair or basket on a named exchange
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pool {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub asset_ids: Vec<String>,

    #[serde(default)]
    pub dex: String,

    #[serde(rename = "type", default)]
    pub pool_type: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lp_token_id: String,
}

impl Record for Pool {
    const KIND: RecordKind = RecordKind::Pool;

    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_minimally_populated(&self) -> bool {
        !self.id.is_empty()
            && self.asset_ids.len() >= 2
            && !self.asset_ids[0].is_empty()
            && !self.asset_ids[1].is_empty()
            && !self.dex.is_empty()
            && !self.pool_type.is_empty()
    }
}
