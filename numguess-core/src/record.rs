//! Key-value records emitted by environments and evaluators.
//!
//! ```rust
//! use numguess_core::record::{Record, RecordValue};
//!
//! let mut record = Record::from_scalar("Episode return", -3.0);
//! record.insert("Target", RecordValue::Scalar(42.0));
//! assert_eq!(record.get_scalar("Target").unwrap(), 42.0);
//! ```
mod base;

pub use base::{Record, RecordValue};
