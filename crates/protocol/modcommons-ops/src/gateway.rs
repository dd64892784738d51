//! The metadata gateway.

use serde_json::{Map, Value};
use tracing::debug;

use modcommons_sdk::ModuleSdk;
use modcommons_types::{
    Error, FieldValue, ModuleDraft, ModuleLink, ModuleRecord, Result,
};
use modcommons_valid::{allowed_keys, validate_field};

use crate::transform::{export_field, export_record, import_key};

/// A partial update: a target module plus the fields to change,
/// spelled with external keys (`name` for profiles).
#[derive(Debug, Clone)]
pub struct ModuleUpdate {
    /// Target module, in any accepted link form.
    pub url: String,
    /// Ordered `(key, value)` pairs to merge into the record.
    pub fields: Vec<(String, FieldValue)>,
}

impl ModuleUpdate {
    /// Start an update of the given module.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field to the update.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

/// Single choke point between the CLI and the module SDK.
///
/// Holds the open session; create with [`MetadataGateway::open`] and
/// release with [`MetadataGateway::close`].
pub struct MetadataGateway {
    sdk: Box<dyn ModuleSdk>,
}

impl MetadataGateway {
    /// Open a session over the given SDK (calls `ready`).
    pub fn open(mut sdk: Box<dyn ModuleSdk>) -> Result<Self> {
        sdk.ready()?;
        Ok(Self { sdk })
    }

    /// Close the session (calls `destroy`).
    pub fn close(&mut self) -> Result<()> {
        self.sdk.destroy()
    }

    /// Fetch a record by link or raw key.
    pub fn get(&self, url: &str) -> Result<ModuleRecord> {
        let link = ModuleLink::parse(url)?;
        self.sdk.get(&link)
    }

    /// Export a record as its presentation JSON (renaming applied).
    pub fn export(&self, record: &ModuleRecord) -> Map<String, Value> {
        export_record(record)
    }

    /// Apply a partial update.
    ///
    /// Pipeline: normalize link, fetch current record, drop unchanged
    /// fields, enforce the allowed-key policy, run field validators,
    /// rename external keys to storage keys, forward to the SDK. A
    /// rejected update never reaches the SDK, and an update with no
    /// effective changes is a successful no-op.
    pub fn set(&mut self, update: ModuleUpdate) -> Result<()> {
        let link = ModuleLink::parse(&update.url)?;
        let current = self.sdk.get(&link)?;
        let allowed = allowed_keys(current.module_type);

        let mut changed: Vec<(String, FieldValue)> = Vec::new();
        for (key, value) in update.fields {
            if export_field(&current, &key).as_ref() == Some(&value) {
                continue;
            }
            if !allowed.contains(&key.as_str()) {
                return Err(Error::InvalidKey {
                    key,
                    allowed: allowed.iter().map(|k| k.to_string()).collect(),
                });
            }
            validate_field(&key, &value).map_err(Error::Validation)?;
            let canonical = import_key(current.module_type, &key).to_string();
            changed.push((canonical, value));
        }

        if changed.is_empty() {
            return Ok(());
        }
        debug!(url = %link.key, keys = ?changed.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(), "applying update");
        self.sdk.set(&link.key, changed)
    }

    /// Create a module. Profile invariants (single writable profile,
    /// profile-before-content) are the caller's responsibility.
    pub fn init(&mut self, draft: ModuleDraft) -> Result<ModuleRecord> {
        self.sdk.init(draft)
    }

    /// Enumerate all local modules.
    pub fn list(&self) -> Result<Vec<ModuleRecord>> {
        self.sdk.list()
    }

    /// Enumerate local content modules.
    pub fn list_content(&self) -> Result<Vec<ModuleRecord>> {
        self.sdk.list_content()
    }

    /// Enumerate local profile modules.
    pub fn list_profiles(&self) -> Result<Vec<ModuleRecord>> {
        self.sdk.list_profiles()
    }

    /// The writable profile (the local identity), if one exists.
    pub fn local_profile(&self) -> Result<Option<ModuleRecord>> {
        Ok(self
            .list_profiles()?
            .into_iter()
            .find(|profile| profile.writable))
    }

    /// Publish content, at its current version, to a profile.
    pub fn publish(&mut self, content: &str, profile: &str) -> Result<()> {
        let content = ModuleLink::parse(content)?;
        let profile = ModuleLink::parse(profile)?;
        self.sdk.publish(&content, &profile.key)
    }

    /// Remove content from a profile's publications.
    pub fn unpublish(&mut self, content: &str, profile: &str) -> Result<()> {
        let content = ModuleLink::parse(content)?;
        let profile = ModuleLink::parse(profile)?;
        self.sdk.unpublish(&content, &profile.key)
    }

    /// Legacy spelling of [`MetadataGateway::publish`].
    pub fn register(&mut self, content: &str, profile: &str) -> Result<()> {
        let content = ModuleLink::parse(content)?;
        let profile = ModuleLink::parse(profile)?;
        self.sdk.register(&content, &profile.key)
    }

    /// Follow a target profile from the given writable profile.
    pub fn follow(&mut self, profile_url: &str, target: &str) -> Result<()> {
        let profile = ModuleLink::parse(profile_url)?;
        let target = ModuleLink::parse(target)?;
        self.sdk.follow(&profile.key, &target)
    }

    /// Stop following a target profile.
    pub fn unfollow(&mut self, profile_url: &str, target: &str) -> Result<()> {
        let profile = ModuleLink::parse(profile_url)?;
        let target = ModuleLink::parse(target)?;
        self.sdk.unfollow(&profile.key, &target)
    }

    /// Fetch a module by key and optional version without its files.
    pub fn clone_module(&mut self, key: &str, version: Option<u64>) -> Result<ModuleRecord> {
        let link = ModuleLink::parse(key)?;
        self.sdk.clone_module(&link.key, version.or(link.version), false)
    }

    /// Delete a writable content module.
    pub fn delete(&mut self, url: &str) -> Result<()> {
        let link = ModuleLink::parse(url)?;
        self.sdk.delete(&link.key)
    }
}
