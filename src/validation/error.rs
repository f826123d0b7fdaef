use miette::Diagnostic;
use thiserror::Error;

use crate::models::RecordKind;

/// The four ways a batch can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A required field is empty or a forbidden field is set
    Structural,
    /// Two records share an identifying field
    DuplicateIdentifier,
    /// An entity reference does not resolve, or an entity is never referenced
    Referential,
    /// Any other field rule (name/symbol clashes, supplies, tx hashes)
    SemanticField,
}

/// A rule broken by one record, before it is tied to a position in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub category: ErrorCategory,
    pub reason: String,
}

impl Violation {
    pub fn new(category: ErrorCategory, reason: impl Into<String>) -> Self {
        Self {
            category,
            reason: reason.into(),
        }
    }

    pub fn structural(reason: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Structural, reason)
    }

    pub fn semantic(reason: impl Into<String>) -> Self {
        Self::new(ErrorCategory::SemanticField, reason)
    }
}

/// The first violation found in a batch
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{kind} record {index}: {reason}")]
    #[diagnostic(
        code(yacar::structural),
        help("fill in every required field and drop fields this record's shape does not allow")
    )]
    Structural {
        kind: RecordKind,
        index: usize,
        identifier: String,
        reason: String,
    },

    #[error("{kind} record {index}: {reason}")]
    #[diagnostic(
        code(yacar::duplicate_identifier),
        help("identifiers must be unique within a batch; merge or remove the later record")
    )]
    DuplicateIdentifier {
        kind: RecordKind,
        index: usize,
        identifier: String,
        reason: String,
    },

    #[error("{kind} record {index}: {reason}")]
    #[diagnostic(
        code(yacar::referential),
        help("every referenced entity must exist in entity.json, and every entity there must be referenced")
    )]
    Referential {
        kind: RecordKind,
        index: usize,
        identifier: String,
        reason: String,
    },

    #[error("{kind} record {index}: {reason}")]
    #[diagnostic(code(yacar::semantic_field))]
    SemanticField {
        kind: RecordKind,
        index: usize,
        identifier: String,
        reason: String,
    },
}

impl ValidationError {
    pub fn new(
        category: ErrorCategory,
        kind: RecordKind,
        index: usize,
        identifier: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let identifier = identifier.into();
        let reason = reason.into();

        match category {
            ErrorCategory::Structural => Self::Structural {
                kind,
                index,
                identifier,
                reason,
            },
            ErrorCategory::DuplicateIdentifier => Self::DuplicateIdentifier {
                kind,
                index,
                identifier,
                reason,
            },
            ErrorCategory::Referential => Self::Referential {
                kind,
                index,
                identifier,
                reason,
            },
            ErrorCategory::SemanticField => Self::SemanticField {
                kind,
                index,
                identifier,
                reason,
            },
        }
    }

    pub(crate) fn from_violation(
        violation: Violation,
        kind: RecordKind,
        index: usize,
        identifier: &str,
    ) -> Self {
        Self::new(violation.category, kind, index, identifier, violation.reason)
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Structural { .. } => ErrorCategory::Structural,
            Self::DuplicateIdentifier { .. } => ErrorCategory::DuplicateIdentifier,
            Self::Referential { .. } => ErrorCategory::Referential,
            Self::SemanticField { .. } => ErrorCategory::SemanticField,
        }
    }

    /// 0-based position of the offending record in the input batch
    pub fn index(&self) -> usize {
        self.parts().1
    }

    pub fn kind(&self) -> RecordKind {
        self.parts().0
    }

    /// Identifying field of the offending record (may be empty)
    pub fn identifier(&self) -> &str {
        self.parts().2
    }

    pub fn reason(&self) -> &str {
        self.parts().3
    }

    fn parts(&self) -> (RecordKind, usize, &str, &str) {
        match self {
            Self::Structural {
                kind,
                index,
                identifier,
                reason,
            }
            | Self::DuplicateIdentifier {
                kind,
                index,
                identifier,
                reason,
            }
            | Self::Referential {
                kind,
                index,
                identifier,
                reason,
            }
            | Self::SemanticField {
                kind,
                index,
                identifier,
                reason,
            } => (*kind, *index, identifier, reason),
        }
    }
}
