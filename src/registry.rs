//! All six batches of one chain, validated and ordered together

use miette::Diagnostic;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Account, Asset, Binary, Contract, Entity, Pool, Record, RecordKind};
use crate::ordering::{CanonicalOrder, OrderingEngine};
use crate::validation::{Validate, ValidationContext, ValidationError, Validator};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("chain '{chain}' failed validation in {}", .source.kind().file_name())]
pub struct RegistryError {
    pub chain: String,
    #[source]
    pub source: ValidationError,
}

// Surface the inner rule's code and help on the chain-level report
impl Diagnostic for RegistryError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.source.code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.source.help()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainRegistry {
    pub chain: String,
    pub accounts: Vec<Account>,
    pub assets: Vec<Asset>,
    pub binaries: Vec<Binary>,
    pub contracts: Vec<Contract>,
    pub entities: Vec<Entity>,
    pub pools: Vec<Pool>,
}

impl ChainRegistry {
    pub fn new(chain: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            ..Default::default()
        }
    }

    pub fn len(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Account => self.accounts.len(),
            RecordKind::Asset => self.assets.len(),
            RecordKind::Binary => self.binaries.len(),
            RecordKind::Contract => self.contracts.len(),
            RecordKind::Entity => self.entities.len(),
            RecordKind::Pool => self.pools.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        RecordKind::ALL.iter().all(|kind| self.len(*kind) == 0)
    }

    /// Entity names referenced by any account, asset, binary or contract
    pub fn used_entities(&self) -> BTreeSet<String> {
        fn collect<R: Record>(records: &[R], used: &mut BTreeSet<String>) {
            used.extend(records.iter().filter_map(|r| r.entity()).map(str::to_string));
        }

        let mut used = BTreeSet::new();
        collect(&self.accounts, &mut used);
        collect(&self.assets, &mut used);
        collect(&self.binaries, &mut used);
        collect(&self.contracts, &mut used);
        used
    }

    /// Validate every batch, entities last so their usage is known
    pub fn validate(
        &self,
        validator: &Validator,
        check_unused_entities: bool,
    ) -> Result<(), RegistryError> {
        let context = ValidationContext::new().with_entities(&self.entities);

        self.validate_batch(validator, &self.accounts, &context)?;
        self.validate_batch(validator, &self.assets, &context)?;
        self.validate_batch(validator, &self.binaries, &context)?;
        self.validate_batch(validator, &self.contracts, &context)?;
        self.validate_batch(validator, &self.pools, &context)?;

        let used = self.used_entities();
        let entity_context = if check_unused_entities {
            ValidationContext::new().with_used_entities(&used)
        } else {
            ValidationContext::new()
        };
        self.validate_batch(validator, &self.entities, &entity_context)?;

        info!("✓ Chain {} validated", self.chain);
        Ok(())
    }

    fn validate_batch<R: Validate>(
        &self,
        validator: &Validator,
        batch: &[R],
        context: &ValidationContext<'_>,
    ) -> Result<(), RegistryError> {
        validator
            .validate(batch, context)
            .map_err(|source| RegistryError {
                chain: self.chain.clone(),
                source,
            })
    }

    /// A copy with every batch in canonical order
    pub fn canonicalize(&self, ordering: &OrderingEngine) -> ChainRegistry {
        debug!("Ordering chain {}", self.chain);

        ChainRegistry {
            chain: self.chain.clone(),
            accounts: ordering.canonical_order(&self.accounts),
            assets: ordering.canonical_order(&self.assets),
            binaries: ordering.canonical_order(&self.binaries),
            contracts: ordering.canonical_order(&self.contracts),
            entities: ordering.canonical_order(&self.entities),
            pools: ordering.canonical_order(&self.pools),
        }
    }

    /// Kinds whose batch is not already in canonical order
    pub fn out_of_order(&self, ordering: &OrderingEngine) -> Vec<RecordKind> {
        fn check<R: CanonicalOrder>(
            ordering: &OrderingEngine,
            batch: &[R],
            out: &mut Vec<RecordKind>,
        ) {
            if !ordering.is_canonical(batch) {
                out.push(R::KIND);
            }
        }

        let mut out = Vec::new();
        check(ordering, &self.accounts, &mut out);
        check(ordering, &self.assets, &mut out);
        check(ordering, &self.binaries, &mut out);
        check(ordering, &self.contracts, &mut out);
        check(ordering, &self.entities, &mut out);
        check(ordering, &self.pools, &mut out);
        out
    }
}
