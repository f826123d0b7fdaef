//! Batches parsed from registry JSON, run through the public validation
//! and ordering API the way an embedding service would.

use yacar::loader::parse_batch;
use yacar::models::{Account, Asset, Binary, Contract, Entity, Pool};
use yacar::ordering::{OrderingEngine, OrderingOptions};
use yacar::validation::{ErrorCategory, ValidationContext, Validator};

fn validator() -> Validator {
    Validator::default()
}

fn ordering() -> OrderingEngine {
    OrderingEngine::new(OrderingOptions::default()).unwrap()
}

#[test]
fn asset_id_equal_to_name_is_rejected() {
    let assets: Vec<Asset> = parse_batch(
        r#"[{"id": "uusd", "name": "uusd", "symbol": "UUSD", "decimals": "6", "type": "native"}]"#,
    )
    .unwrap();

    let err = validator()
        .validate(&assets, &ValidationContext::new())
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::SemanticField);
    assert_eq!(err.index(), 0);
    assert_eq!(err.identifier(), "uusd");
    assert!(err.reason().contains("cannot be the asset ID"));
}

#[test]
fn asset_symbol_longer_than_twenty_characters_is_rejected() {
    let assets: Vec<Asset> = parse_batch(
        r#"[{"id": "a1", "name": "Token A", "symbol": "AAAAAAAAAAAAAAAAAAAAAA", "decimals": "6", "type": "native"}]"#,
    )
    .unwrap();

    let err = validator()
        .validate(&assets, &ValidationContext::new())
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::SemanticField);
    assert!(err.reason().contains("cannot be longer than 20 characters"));
}

#[test]
fn duplicate_pool_is_reported_at_second_occurrence() {
    let pools: Vec<Pool> = parse_batch(
        r#"[
            {"id": "p1", "asset_ids": ["a", "b"], "dex": "Astroport", "type": "xyk"},
            {"id": "p1", "asset_ids": ["c", "d"], "dex": "Astroport", "type": "xyk"}
        ]"#,
    )
    .unwrap();

    let err = validator()
        .validate(&pools, &ValidationContext::new())
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::DuplicateIdentifier);
    assert_eq!(err.index(), 1);
    assert_eq!(err.identifier(), "p1");
}

#[test]
fn accounts_with_tied_entity_order_by_label() {
    let accounts: Vec<Account> = parse_batch(
        r#"[
            {"id": "acc2", "entity": "X", "label": "B"},
            {"id": "acc1", "entity": "X", "label": "A"}
        ]"#,
    )
    .unwrap();

    let sorted = ordering().canonical_order(&accounts);
    let ids: Vec<_> = sorted.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["acc1", "acc2"]);
}

#[test]
fn circ_supply_literal_and_api_are_mutually_exclusive() {
    let assets: Vec<Asset> = parse_batch(
        r#"[{"id": "a1", "name": "Token A", "symbol": "TKA", "decimals": "6", "type": "native",
             "circ_supply": "100", "circ_supply_api": "https://x"}]"#,
    )
    .unwrap();

    let err = validator()
        .validate(&assets, &ValidationContext::new())
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::SemanticField);
    assert!(err.reason().contains("but not both"));
}

#[test]
fn empty_batches_pass_and_stay_empty() {
    let validator = validator();
    let ordering = ordering();
    let context = ValidationContext::new();

    macro_rules! check_empty {
        ($($ty:ty),*) => {$(
            let batch: Vec<$ty> = parse_batch("[]").unwrap();
            assert!(validator.validate(&batch, &context).is_ok());
            assert!(ordering.canonical_order(&batch).is_empty());
        )*};
    }

    check_empty!(Account, Asset, Binary, Contract, Entity, Pool);
}

#[test]
fn asset_with_unknown_entity_is_referential() {
    let entities: Vec<Entity> = parse_batch(r#"[{"name": "Terra"}]"#).unwrap();
    let assets: Vec<Asset> = parse_batch(
        r#"[{"id": "a1", "entity": "Acme", "name": "Token A", "symbol": "TKA", "decimals": "6", "type": "cw20"}]"#,
    )
    .unwrap();

    let context = ValidationContext::new().with_entities(&entities);
    let err = validator().validate(&assets, &context).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Referential);
    assert!(err.reason().contains("entity 'Acme' does not exist"));
}

#[test]
fn ordering_parsed_batch_is_idempotent() {
    let contracts: Vec<Contract> = parse_batch(
        r#"[
            {"id": "terra1c", "entity": "Terra", "label": "Staking"},
            {"id": "terra1b", "entity": "astroport", "label": "Router"},
            {"id": "terra1a", "entity": "Astroport", "label": "Factory"}
        ]"#,
    )
    .unwrap();

    let ordering = ordering();
    let once = ordering.canonical_order(&contracts);
    let twice = ordering.canonical_order(&once);
    assert_eq!(once, twice);
    assert!(ordering.is_canonical(&once));
    assert_eq!(once[2].id, "terra1c");
}
