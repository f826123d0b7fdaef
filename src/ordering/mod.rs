//! Canonical ordering of record batches
//!
//! Every kind describes its tie-break chain as a list of [`SortKey`]s; one
//! comparator walks those lists, so per-kind code never repeats the control flow.

mod collation;
mod keys;


use std::cmp;
use tracing::debug;

pub use collation::{Collation, CollationError};

use crate::models::Record;

/// One link of a tie-break chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey<'a> {
    /// Collated text
    Text(&'a str),
    /// Collated text with digit runs compared by value
    Numeric(&'a str),
    /// Records for which this is `true` sort first
    PresentFirst(bool),
}

impl SortKey<'_> {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Text(_) => 0,
            SortKey::Numeric(_) => 1,
            SortKey::PresentFirst(_) => 2,
        }
    }
}

/// How asset batches are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssetOrder {
    /// By id only
    #[default]
    ById,
    /// Legacy: entity-bearing assets first, grouped by entity, then name, then id
    EntityGrouped,
}

#[derive(Debug, Clone, Default)]
pub struct OrderingOptions {
    pub asset_order: AssetOrder,
}

/// A record kind that knows its canonical tie-break chain
pub trait CanonicalOrder: Record {
    fn sort_keys(&self, options: &OrderingOptions) -> Vec<SortKey<'_>>;
}

pub struct OrderingEngine {
    collation: Collation,
    options: OrderingOptions,
}

impl OrderingEngine {
    pub fn new(options: OrderingOptions) -> Result<Self, CollationError> {
        Ok(Self {
            collation: Collation::en_us()?,
            options,
        })
    }

    pub fn options(&self) -> &OrderingOptions {
        &self.options
    }

    /// Three-way comparison of two records of the same kind
    pub fn compare<R: CanonicalOrder>(&self, a: &R, b: &R) -> cmp::Ordering {
        self.compare_keys(&a.sort_keys(&self.options), &b.sort_keys(&self.options))
    }

    /// Returns a new sequence in canonical order; ties keep their input order
    pub fn canonical_order<R: CanonicalOrder + Clone>(&self, batch: &[R]) -> Vec<R> {
        let keys: Vec<Vec<SortKey<'_>>> = batch
            .iter()
            .map(|record| record.sort_keys(&self.options))
            .collect();

        let mut indices: Vec<usize> = (0..batch.len()).collect();
        indices.sort_by(|&a, &b| self.compare_keys(&keys[a], &keys[b]));

        debug!("Ordered {} {} records", batch.len(), R::KIND);
        indices.into_iter().map(|i| batch[i].clone()).collect()
    }

    /// Whether the batch already is in canonical order
    pub fn is_canonical<R: CanonicalOrder>(&self, batch: &[R]) -> bool {
        batch
            .windows(2)
            .all(|pair| self.compare(&pair[0], &pair[1]) != cmp::Ordering::Greater)
    }

    fn compare_keys(&self, a: &[SortKey<'_>], b: &[SortKey<'_>]) -> cmp::Ordering {
        for (left, right) in a.iter().zip(b) {
            let ord = match (left, right) {
                (SortKey::Text(l), SortKey::Text(r)) => self.collation.compare(l, r),
                (SortKey::Numeric(l), SortKey::Numeric(r)) => {
                    self.collation.compare_numeric(l, r)
                }
                (SortKey::PresentFirst(l), SortKey::PresentFirst(r)) => r.cmp(l),
                _ => left.rank().cmp(&right.rank()),
            };

            if ord != cmp::Ordering::Equal {
                return ord;
            }
        }

        a.len().cmp(&b.len())
    }
}
