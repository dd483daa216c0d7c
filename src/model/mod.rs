//! Employee Model
//!
//! Raw input records and the people they become once placed in the tree.

pub mod person;
pub mod record;

pub use person::{Person, PersonId};
pub use record::{parse_records, read_records, Record};
