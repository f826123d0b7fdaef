use super::asset::asset_type;
use super::*;

fn standard_asset() -> Asset {
    Asset {
        id: "uluna".to_string(),
        name: "Luna".to_string(),
        symbol: "LUNA".to_string(),
        decimals: "6".to_string(),
        asset_type: asset_type::NATIVE.to_string(),
        ..Default::default()
    }
}

fn bridged_asset() -> Asset {
    Asset {
        id: "ibc/B3504E092456BA618CC28AC671A71FB08C6CA0FD0BE7C8A5B5A3E2DD933CC9E4".to_string(),
        asset_type: asset_type::IBC.to_string(),
        origin_chain_id: "axelar-dojo-1".to_string(),
        origin_id: "uusdc".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_account_requires_id_and_entity_but_not_label() {
    let account = Account {
        id: "terra1abc".to_string(),
        entity: "Astroport".to_string(),
        label: String::new(),
    };
    assert!(account.is_minimally_populated());

    let missing_entity = Account {
        entity: String::new(),
        ..account.clone()
    };
    assert!(!missing_entity.is_minimally_populated());
}

#[test]
fn test_contract_and_binary_require_label() {
    let contract = Contract {
        id: "terra1xyz".to_string(),
        entity: "Astroport".to_string(),
        label: String::new(),
    };
    assert!(!contract.is_minimally_populated());

    let binary = Binary {
        id: "42".to_string(),
        entity: "Astroport".to_string(),
        label: "Pair".to_string(),
    };
    assert!(binary.is_minimally_populated());
}

#[test]
fn test_entity_only_needs_name() {
    let entity = Entity {
        name: "Astroport".to_string(),
        ..Default::default()
    };
    assert!(entity.is_minimally_populated());
    assert_eq!(entity.identifier(), "Astroport");
    assert!(!Entity::default().is_minimally_populated());
}

#[test]
fn test_pool_needs_two_non_empty_asset_ids() {
    let pool = Pool {
        id: "pool1".to_string(),
        asset_ids: vec!["uluna".to_string(), "uusd".to_string()],
        dex: pool::dex::ASTROPORT.to_string(),
        pool_type: pool::pool_type::XYK.to_string(),
        lp_token_id: String::new(),
    };
    assert!(pool.is_minimally_populated());

    let single = Pool {
        asset_ids: vec!["uluna".to_string()],
        ..pool.clone()
    };
    assert!(!single.is_minimally_populated());

    let blank_second = Pool {
        asset_ids: vec!["uluna".to_string(), String::new(), "uusd".to_string()],
        ..pool
    };
    assert!(!blank_second.is_minimally_populated());
}

#[test]
fn test_asset_shape_is_decided_by_type_tag_only() {
    assert_eq!(standard_asset().shape(), AssetShape::Standard);
    assert_eq!(bridged_asset().shape(), AssetShape::Bridged);

    // An ibc/ prefixed id without the tag is still a standard asset
    let untagged = Asset {
        id: "ibc/ABCDEF".to_string(),
        ..standard_asset()
    };
    assert_eq!(untagged.shape(), AssetShape::Standard);
}

#[test]
fn test_standard_asset_population() {
    let asset = standard_asset();
    assert!(asset.is_minimally_populated());
    assert!(asset.missing_fields().is_empty());

    let no_symbol = Asset {
        symbol: String::new(),
        decimals: String::new(),
        ..standard_asset()
    };
    assert_eq!(no_symbol.missing_fields(), vec!["symbol", "decimals"]);
    assert!(!no_symbol.is_minimally_populated());

    let with_origin = Asset {
        origin_id: "uatom".to_string(),
        ..standard_asset()
    };
    assert_eq!(with_origin.forbidden_fields(), vec!["origin_id"]);
    assert!(!with_origin.is_minimally_populated());
}

#[test]
fn test_bridged_asset_population() {
    let asset = bridged_asset();
    assert!(asset.is_minimally_populated());

    let with_display = Asset {
        symbol: "USDC".to_string(),
        icon: "https://example.com/usdc.png".to_string(),
        ..bridged_asset()
    };
    assert_eq!(with_display.forbidden_fields(), vec!["symbol", "icon"]);
    assert!(!with_display.is_minimally_populated());

    let no_origin = Asset {
        origin_chain_id: String::new(),
        ..bridged_asset()
    };
    assert_eq!(no_origin.missing_fields(), vec!["origin_chain_id"]);
}

#[test]
fn test_bridged_asset_may_carry_entity() {
    let asset = Asset {
        entity: "Axelar".to_string(),
        ..bridged_asset()
    };
    assert!(asset.is_minimally_populated());
    assert_eq!(asset.entity(), Some("Axelar"));
    assert_eq!(standard_asset().entity(), None);
}

#[test]
fn test_asset_wire_names() {
    let json = r#"{
        "id": "cw20:terra1abc",
        "entity": "Astroport",
        "name": "Astro",
        "symbol": "ASTRO",
        "decimals": "6",
        "type": "cw20",
        "circ_supply_api": "https://example.com/circ",
        "coinmarketcap": "https://coinmarketcap.com/currencies/astroport",
        "coingecko": "https://www.coingecko.com/en/coins/astroport"
    }"#;
    let asset: Asset = serde_json::from_str(json).unwrap();

    assert_eq!(asset.asset_type, asset_type::CW20);
    assert_eq!(asset.circ_supply_api, "https://example.com/circ");
    assert!(asset.coin_market_cap.contains("coinmarketcap"));

    let out = serde_json::to_value(&asset).unwrap();
    assert_eq!(out["type"], "cw20");
    assert!(out.get("total_supply").is_none());
    assert!(out.get("origin_id").is_none());
}

#[test]
fn test_missing_fields_decode_as_empty() {
    let account: Account = serde_json::from_str(r#"{"id": "terra1abc"}"#).unwrap();
    assert_eq!(account.entity, "");
    assert!(!account.is_minimally_populated());
}

#[test]
fn test_unknown_fields_are_rejected() {
    let result: Result<Contract, _> =
        serde_json::from_str(r#"{"id": "a", "entity": "b", "label": "c", "extra": "d"}"#);
    assert!(result.is_err());
}

#[test]
fn test_record_kind_file_names() {
    assert_eq!(RecordKind::Account.file_name(), "account.json");
    assert_eq!(RecordKind::Pool.to_string(), "pool");
    assert_eq!(RecordKind::Entity.identifier_label(), "name");
    assert_eq!(RecordKind::ALL.len(), 6);
}
