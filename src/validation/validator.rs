use std::collections::{BTreeSet, HashSet};
use tracing::debug;

use super::error::{ErrorCategory, ValidationError, Violation};
use crate::models::{Entity, Record, pool::dex};

/// A per-record rule, run as its own left-to-right pass over the batch
pub type FieldRule<R> = fn(&R, &ValidationOptions) -> Option<Violation>;

/// A record kind the validator knows how to check
///
/// The validator drives every kind through the same passes: structure,
/// identifier uniqueness, each of [`Validate::field_rules`] in order, entity
/// references, then [`Validate::check_batch`].
pub trait Validate: Record + Sized {
    /// Why this record fails its shape, if it does
    fn structural_violation(&self) -> Option<Violation> {
        if self.is_minimally_populated() {
            None
        } else {
            Some(Violation::structural(format!(
                "{} {} '{}' is not minimally populated",
                Self::KIND,
                Self::KIND.identifier_label(),
                self.identifier()
            )))
        }
    }

    fn field_rules() -> Vec<FieldRule<Self>> {
        Vec::new()
    }

    /// Rules that need to see the whole batch at once
    fn check_batch(
        _batch: &[Self],
        _context: &ValidationContext<'_>,
        _options: &ValidationOptions,
    ) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Companion batches a validation call may cross-check against
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationContext<'a> {
    pub entities: Option<&'a [Entity]>,
    pub used_entities: Option<&'a BTreeSet<String>>,
}

impl<'a> ValidationContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `entity` fields against this batch
    pub fn with_entities(mut self, entities: &'a [Entity]) -> Self {
        self.entities = Some(entities);
        self
    }

    /// Reject entities whose name is not in this set
    pub fn with_used_entities(mut self, used: &'a BTreeSet<String>) -> Self {
        self.used_entities = Some(used);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Verification tx values that name a permissioned market instead of a tx
    pub permissioned_markers: Vec<String>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            permissioned_markers: dex::ALL.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl ValidationOptions {
    pub fn is_permissioned(&self, marker: &str) -> bool {
        self.permissioned_markers.iter().any(|m| m == marker)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Check a batch, reporting the first violation
    ///
    /// Passes run in a fixed order and each scans the batch from the front,
    /// so the same input always yields the same error.
    pub fn validate<R: Validate>(
        &self,
        batch: &[R],
        context: &ValidationContext<'_>,
    ) -> Result<(), ValidationError> {
        if batch.is_empty() {
            debug!("Empty {} batch, nothing to validate", R::KIND);
            return Ok(());
        }

        debug!("Validating {} {} records", batch.len(), R::KIND);

        self.run_pass(batch, |record, _| record.structural_violation())?;
        self.check_unique_identifiers(batch)?;

        for rule in R::field_rules() {
            self.run_pass(batch, rule)?;
        }

        if let Some(entities) = context.entities {
            self.check_entity_references(batch, entities)?;
        }

        R::check_batch(batch, context, &self.options)
    }

    fn run_pass<R: Validate>(
        &self,
        batch: &[R],
        rule: impl Fn(&R, &ValidationOptions) -> Option<Violation>,
    ) -> Result<(), ValidationError> {
        for (index, record) in batch.iter().enumerate() {
            if let Some(violation) = rule(record, &self.options) {
                return Err(ValidationError::from_violation(
                    violation,
                    R::KIND,
                    index,
                    record.identifier(),
                ));
            }
        }

        Ok(())
    }

    fn check_unique_identifiers<R: Validate>(&self, batch: &[R]) -> Result<(), ValidationError> {
        let mut seen: HashSet<&str> = HashSet::new();

        for (index, record) in batch.iter().enumerate() {
            let identifier = record.identifier();
            if !seen.insert(identifier) {
                return Err(ValidationError::new(
                    ErrorCategory::DuplicateIdentifier,
                    R::KIND,
                    index,
                    identifier,
                    format!(
                        "duplicate {} {}: {}",
                        R::KIND,
                        R::KIND.identifier_label(),
                        identifier
                    ),
                ));
            }
        }

        Ok(())
    }

    fn check_entity_references<R: Validate>(
        &self,
        batch: &[R],
        entities: &[Entity],
    ) -> Result<(), ValidationError> {
        let known: HashSet<&str> = entities.iter().map(|e| e.name.as_str()).collect();

        for (index, record) in batch.iter().enumerate() {
            if let Some(entity) = record.entity()
                && !known.contains(entity)
            {
                return Err(ValidationError::new(
                    ErrorCategory::Referential,
                    R::KIND,
                    index,
                    record.identifier(),
                    format!(
                        "[{}] entity '{}' does not exist",
                        record.identifier(),
                        entity
                    ),
                ));
            }
        }

        Ok(())
    }
}
