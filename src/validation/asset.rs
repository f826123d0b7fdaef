//! Asset field rules

use std::collections::HashSet;

use super::error::{ValidationError, Violation};
use super::validator::{FieldRule, Validate, ValidationContext, ValidationOptions};
use crate::models::{Asset, AssetShape, Record};

pub const MAX_SYMBOL_LEN: usize = 20;

/// Length in bytes of a transaction hash
pub const TX_HASH_LEN: usize = 32;

impl Validate for Asset {
    fn structural_violation(&self) -> Option<Violation> {
        let prefix = match self.shape() {
            AssetShape::Bridged => "IBC asset",
            AssetShape::Standard => "asset",
        };

        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Some(Violation::structural(format!(
                "{prefix} ID '{}' is not minimally populated (missing: {})",
                self.id,
                missing.join(", ")
            )));
        }

        let forbidden = self.forbidden_fields();
        if !forbidden.is_empty() {
            return Some(Violation::structural(format!(
                "{prefix} ID '{}' contains invalid fields: {}",
                self.id,
                forbidden.join(", ")
            )));
        }

        None
    }

    fn field_rules() -> Vec<FieldRule<Self>> {
        vec![
            check_display_fields as FieldRule<Self>,
            check_circ_supply,
            check_total_supply,
        ]
    }

    fn check_batch(
        batch: &[Self],
        _context: &ValidationContext<'_>,
        options: &ValidationOptions,
    ) -> Result<(), ValidationError> {
        check_verification_txs(batch, options)
    }
}

fn check_display_fields(asset: &Asset, _options: &ValidationOptions) -> Option<Violation> {
    if asset.is_bridged() {
        return None;
    }

    if asset.id == asset.name {
        return Some(Violation::semantic(format!(
            "asset name for {} cannot be the asset ID",
            asset.id
        )));
    }

    if asset.id == asset.symbol {
        return Some(Violation::semantic(format!(
            "asset symbol for {} cannot be the asset ID",
            asset.id
        )));
    }

    if asset.symbol.chars().count() > MAX_SYMBOL_LEN {
        return Some(Violation::semantic(format!(
            "asset symbol for {} cannot be longer than {MAX_SYMBOL_LEN} characters",
            asset.id
        )));
    }

    if asset.decimals.parse::<u32>().is_err() {
        return Some(Violation::semantic(format!(
            "asset decimals for {} must be an unsigned integer, got '{}'",
            asset.id, asset.decimals
        )));
    }

    None
}

fn check_circ_supply(asset: &Asset, _options: &ValidationOptions) -> Option<Violation> {
    check_supply(asset, "circ_supply", &asset.circ_supply, &asset.circ_supply_api)
}

fn check_total_supply(asset: &Asset, _options: &ValidationOptions) -> Option<Violation> {
    check_supply(asset, "total_supply", &asset.total_supply, &asset.total_supply_api)
}

/// A supply is either a literal or an API pointer, and literals are positive
fn check_supply(asset: &Asset, field: &str, literal: &str, api: &str) -> Option<Violation> {
    if !literal.is_empty() && !api.is_empty() {
        return Some(Violation::semantic(format!(
            "[{}] either '{field}' or '{field}_api' must be specified, but not both",
            asset.id
        )));
    }

    if !literal.is_empty() && !is_positive_number(literal) {
        return Some(Violation::semantic(format!(
            "[{}] '{field}' must be a number greater than 0, got '{literal}'",
            asset.id
        )));
    }

    None
}

fn is_positive_number(value: &str) -> bool {
    matches!(value.parse::<f64>(), Ok(parsed) if parsed.is_finite() && parsed > 0.0)
}

/// Verification txs that are not permissioned markers must be distinct tx hashes
fn check_verification_txs(
    batch: &[Asset],
    options: &ValidationOptions,
) -> Result<(), ValidationError> {
    let mut seen: HashSet<Vec<u8>> = HashSet::new();

    for (index, asset) in batch.iter().enumerate() {
        let tx = asset.verification_tx.as_str();
        if tx.is_empty() || options.is_permissioned(tx) {
            continue;
        }

        let bytes = match hex::decode(tx) {
            Ok(bytes) if bytes.len() == TX_HASH_LEN => bytes,
            _ => {
                return Err(ValidationError::from_violation(
                    Violation::semantic(format!(
                        "invalid asset tx hash for {}: expected {TX_HASH_LEN} hex-encoded bytes, got '{tx}'",
                        asset.id
                    )),
                    Asset::KIND,
                    index,
                    asset.identifier(),
                ));
            }
        };

        if !seen.insert(bytes) {
            return Err(ValidationError::from_violation(
                Violation::semantic(format!(
                    "duplicate asset tx hash for {}: {tx}",
                    asset.id
                )),
                Asset::KIND,
                index,
                asset.identifier(),
            ));
        }
    }

    Ok(())
}
