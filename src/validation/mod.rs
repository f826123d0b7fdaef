mod asset;
mod error;
mod kinds;
mod validator;


pub use asset::{MAX_SYMBOL_LEN, TX_HASH_LEN};
pub use error::{ErrorCategory, ValidationError, Violation};
pub use validator::{FieldRule, Validate, ValidationContext, ValidationOptions, Validator};
