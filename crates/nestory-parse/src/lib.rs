//! Value parsers converting free-text spreadsheet cells into typed values.
//!
//! Every parser follows the same contract: absence is not an error.
//! Empty input and invalid-but-present input both yield "no value";
//! whether a missing value matters is the caller's decision.

pub mod condition;
pub mod currency;
pub mod date;
pub mod quantity;

pub use condition::normalize_condition;
pub use currency::parse_amount;
pub use date::{DATE_FORMATS, parse_date};
pub use quantity::parse_quantity;
