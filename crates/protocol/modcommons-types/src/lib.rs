//! Data structures for the module commons.
//!
//! This crate provides the record types shared by every modcommons crate.
//! It contains no business logic, only type definitions with
//! serialization support.
//!
//! # Module Organization
//!
//! - [`record`] - Module records, drafts and field values
//! - [`link`] - Module links (key plus optional version)
//! - [`constants`] - Shared constants (limits, license, subtypes)
//! - [`error`] - The main error type
//!
//! # Example
//!
//! ```
//! use modcommons_types::{ModuleDraft, ModuleLink, ModuleType};
//!
//! let draft = ModuleDraft::new(ModuleType::Content)
//!     .with_title("Reproducibility of thermal models")
//!     .with_description("A replication attempt");
//!
//! assert_eq!(draft.module_type, ModuleType::Content);
//!
//! let link = ModuleLink::parse(&format!("mod://{}+3", "ab".repeat(32))).unwrap();
//! assert_eq!(link.version, Some(3));
//! ```

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod error;
pub mod link;
pub mod record;

pub use constants::*;
pub use error::{Error, Result};
pub use link::ModuleLink;
pub use record::{FieldValue, ModuleDraft, ModuleRecord, ModuleType};
