//! Domain layer for the jobboard plugin.
//!
//! Core types independent of Zellij and of the rendering layer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`job`]: Job records, positional ids and lookup tables
//! - [`catalog`]: The read-only catalog store
//!
//! # Examples
//!
//! ```
//! use jobboard::domain::{Catalog, LookupEntry, LookupTable};
//!
//! let catalog = Catalog::new(
//!     vec![],
//!     LookupTable::new(vec![LookupEntry::new(1, "Bachelor")]),
//!     LookupTable::default(),
//! );
//! assert!(catalog.is_empty());
//! ```

pub mod catalog;
pub mod error;
pub mod job;

pub use catalog::Catalog;
pub use error::{JobBoardError, Result};
pub use job::{JobId, JobRecord, LookupEntry, LookupTable, UNSPECIFIED_LABEL};
