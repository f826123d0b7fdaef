//! Rule sets for the kinds with no field rules of their own, and entities

use super::error::{ErrorCategory, ValidationError};
use super::validator::{Validate, ValidationContext, ValidationOptions};
use crate::models::{Account, Binary, Contract, Entity, Pool, Record};

impl Validate for Account {}

impl Validate for Binary {}

impl Validate for Contract {}

impl Validate for Pool {}

impl Validate for Entity {
    /// Every declared entity must be referenced somewhere, when the caller
    /// knows which names are in use
    fn check_batch(
        batch: &[Self],
        context: &ValidationContext<'_>,
        _options: &ValidationOptions,
    ) -> Result<(), ValidationError> {
        let Some(used) = context.used_entities else {
            return Ok(());
        };

        for (index, entity) in batch.iter().enumerate() {
            if !used.contains(&entity.name) {
                return Err(ValidationError::new(
                    ErrorCategory::Referential,
                    Self::KIND,
                    index,
                    entity.identifier(),
                    format!("unused entity: {}", entity.name),
                ));
            }
        }

        Ok(())
    }
}
