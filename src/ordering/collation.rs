//! Locale-aware string comparison backed by ICU4X collation data

use icu_collator::{Collator, CollatorOptions, Numeric, Strength};
use icu_locid::locale;
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
#[error("failed to load en-US collation data: {message}")]
pub struct CollationError {
    message: String,
}

/// The pair of en-US collators every ordering uses
///
/// `text` compares at tertiary strength, so accents and case both matter but
/// only after base letters. `numeric` additionally compares runs of digits by
/// value, which puts `item2` before `item10`.
pub struct Collation {
    text: Collator,
    numeric: Collator,
}

impl Collation {
    pub fn en_us() -> Result<Self, CollationError> {
        Ok(Self {
            text: Self::build(Numeric::Off)?,
            numeric: Self::build(Numeric::On)?,
        })
    }

    fn build(numeric: Numeric) -> Result<Collator, CollationError> {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        options.numeric = Some(numeric);

        Collator::try_new(&locale!("en-US").into(), options).map_err(|e| CollationError {
            message: format!("{e:?}"),
        })
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.text.compare(left, right)
    }

    pub fn compare_numeric(&self, left: &str, right: &str) -> Ordering {
        self.numeric.compare(left, right)
    }
}
