//! Data model for the Nestory interchange engine.
//!
//! Everything here is a flat, serializable value type: canonical records
//! carry denormalized names and stable UUIDs instead of references into the
//! live object graph, so archives survive round-trips without requiring the
//! graph to be reloaded in any particular order.

pub mod archive;
pub mod condition;
pub mod field;
pub mod record;
pub mod report;

pub use archive::Archive;
pub use condition::ItemCondition;
pub use field::{FieldKind, TargetField};
pub use record::{CategoryRecord, DEFAULT_CURRENCY, ItemRecord, ReceiptRecord, RoomRecord};
pub use report::{ImportError, ImportErrorKind, ImportReport};
