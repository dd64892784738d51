//! Module SDK boundary.
//!
//! Everything above this crate talks to module storage through the
//! [`ModuleSdk`] trait, which mirrors the surface of the external
//! module-commons SDK: session lifecycle (`ready`/`destroy`), record
//! CRUD, enumeration, and the publish/follow relationship operations.
//!
//! [`LocalVault`] is the bundled implementation: one directory per
//! module under an environment directory, with the record persisted as
//! `module.json` next to the module's files. It does no networking and
//! no cross-process coordination; replication belongs to a real SDK
//! behind the same trait.
//!
//! # Storage Layout
//!
//! ```text
//! ~/.modcommons/
//! ├── config.json              # CLI config store (owned by the CLI)
//! └── {key}/                   # one directory per module, hex key
//!     ├── module.json          # the ModuleRecord
//!     └── ...                  # the module's files
//! ```

pub mod vault;

pub use vault::LocalVault;

use modcommons_types::{FieldValue, ModuleDraft, ModuleLink, ModuleRecord, Result};

/// The operations this tool requires from a module SDK.
///
/// All mutating operations bump the target record's `version`.
pub trait ModuleSdk {
    /// Open the session; must be called before any other operation.
    fn ready(&mut self) -> Result<()>;

    /// Close the session and release resources.
    fn destroy(&mut self) -> Result<()>;

    /// Create a new writable module from a draft.
    fn init(&mut self, draft: ModuleDraft) -> Result<ModuleRecord>;

    /// Fetch a record. Fails with `NotFound` for unknown keys.
    fn get(&self, link: &ModuleLink) -> Result<ModuleRecord>;

    /// Merge the given fields into a stored record. Keys are canonical
    /// (storage) keys; callers are expected to have applied policy.
    fn set(&mut self, url: &str, fields: Vec<(String, FieldValue)>) -> Result<()>;

    /// Enumerate all local modules.
    fn list(&self) -> Result<Vec<ModuleRecord>>;

    /// Enumerate local content modules.
    fn list_content(&self) -> Result<Vec<ModuleRecord>>;

    /// Enumerate local profile modules.
    fn list_profiles(&self) -> Result<Vec<ModuleRecord>>;

    /// Add a content module, at its current version, to a profile's
    /// `contents`.
    fn publish(&mut self, content: &ModuleLink, profile_url: &str) -> Result<()>;

    /// Remove a content entry from a profile's `contents`.
    fn unpublish(&mut self, content: &ModuleLink, profile_url: &str) -> Result<()>;

    /// Legacy spelling of [`ModuleSdk::publish`].
    fn register(&mut self, content: &ModuleLink, profile_url: &str) -> Result<()>;

    /// Add a target profile to a writable profile's `follows`.
    fn follow(&mut self, profile_url: &str, target: &ModuleLink) -> Result<()>;

    /// Remove a target profile from a writable profile's `follows`.
    fn unfollow(&mut self, profile_url: &str, target: &ModuleLink) -> Result<()>;

    /// Fetch a module by key and optional version, optionally
    /// downloading its files.
    fn clone_module(
        &mut self,
        key: &str,
        version: Option<u64>,
        download: bool,
    ) -> Result<ModuleRecord>;

    /// Delete a writable content module.
    fn delete(&mut self, url: &str) -> Result<()>;
}
