//! Filesystem-backed module vault.

use std::fs;
use std::path::{Path, PathBuf};

use rand::RngCore;
use tracing::debug;

use modcommons_types::{
    Error, FieldValue, ModuleDraft, ModuleLink, ModuleRecord, ModuleType, Result,
};

use crate::ModuleSdk;

/// Filename of the persisted record inside a module directory.
pub const RECORD_FILE: &str = "module.json";

/// Local, single-process module store.
///
/// Stores each module in `<base_dir>/<key>/`, the record serialized as
/// JSON. Versions are bumped on every successful mutation.
pub struct LocalVault {
    base_dir: PathBuf,
    ready: bool,
}

impl LocalVault {
    /// Create a vault rooted at `base_dir`. Nothing is touched on disk
    /// until [`ModuleSdk::ready`] is called.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ready: false,
        }
    }

    /// The environment directory this vault is rooted at.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding the given module's record and files.
    pub fn module_dir(&self, key: &str) -> PathBuf {
        self.base_dir.join(key)
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.module_dir(key).join(RECORD_FILE)
    }

    fn check_ready(&self) -> Result<()> {
        if !self.ready {
            return Err(Error::user("Session not ready"));
        }
        Ok(())
    }

    fn load(&self, key: &str) -> Result<ModuleRecord> {
        let path = self.record_path(key);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound(key.to_string()))
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&text)?)
    }

    fn store(&self, record: &ModuleRecord) -> Result<()> {
        let dir = self.module_dir(&record.url);
        fs::create_dir_all(&dir)?;
        let text = serde_json::to_string_pretty(record)?;
        fs::write(self.record_path(&record.url), text)?;
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<ModuleRecord>> {
        let mut records = Vec::new();
        let entries = match fs::read_dir(&self.base_dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(records),
            Err(err) => return Err(err.into()),
        };
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let key = entry.file_name().to_string_lossy().to_string();
            if self.record_path(&key).exists() {
                records.push(self.load(&key)?);
            }
        }
        // Directory order is filesystem-dependent; keep enumeration stable.
        records.sort_by(|a, b| a.url.cmp(&b.url));
        Ok(records)
    }

    fn require_writable(record: &ModuleRecord) -> Result<()> {
        if !record.writable {
            return Err(Error::user(format!(
                "Module {} is not writable",
                record.url
            )));
        }
        Ok(())
    }

    fn generate_key() -> String {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl ModuleSdk for LocalVault {
    fn ready(&mut self) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        self.ready = true;
        Ok(())
    }

    fn destroy(&mut self) -> Result<()> {
        self.ready = false;
        Ok(())
    }

    fn init(&mut self, draft: ModuleDraft) -> Result<ModuleRecord> {
        self.check_ready()?;
        let key = Self::generate_key();
        let record = draft.into_record(key);
        self.store(&record)?;
        debug!(url = %record.url, module_type = %record.module_type, "module created");
        Ok(record)
    }

    fn get(&self, link: &ModuleLink) -> Result<ModuleRecord> {
        self.check_ready()?;
        self.load(&link.key)
    }

    fn set(&mut self, url: &str, fields: Vec<(String, FieldValue)>) -> Result<()> {
        self.check_ready()?;
        let mut record = self.load(url)?;
        Self::require_writable(&record)?;
        for (key, value) in fields {
            if !record.apply(&key, value) {
                return Err(Error::user(format!("Invalid value for key \"{}\"", key)));
            }
        }
        record.version += 1;
        self.store(&record)?;
        debug!(url = %url, version = record.version, "module updated");
        Ok(())
    }

    fn list(&self) -> Result<Vec<ModuleRecord>> {
        self.check_ready()?;
        self.load_all()
    }

    fn list_content(&self) -> Result<Vec<ModuleRecord>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(ModuleRecord::is_content)
            .collect())
    }

    fn list_profiles(&self) -> Result<Vec<ModuleRecord>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(ModuleRecord::is_profile)
            .collect())
    }

    fn publish(&mut self, content: &ModuleLink, profile_url: &str) -> Result<()> {
        self.check_ready()?;
        let content_record = self.load(&content.key)?;
        if !content_record.is_content() {
            return Err(Error::user("Only content modules can be published"));
        }
        let mut profile = self.load(profile_url)?;
        if !profile.is_profile() {
            return Err(Error::user("Can only publish to a profile module"));
        }
        Self::require_writable(&profile)?;

        let version = content.version.unwrap_or(content_record.version);
        let entry = ModuleLink::new(&content_record.url)
            .with_version(version)
            .versioned_key();
        if profile.contents.contains(&entry) {
            return Err(Error::user("Already published"));
        }
        profile.contents.push(entry);
        profile.version += 1;
        self.store(&profile)?;
        debug!(content = %content.key, profile = %profile_url, "content published");
        Ok(())
    }

    fn unpublish(&mut self, content: &ModuleLink, profile_url: &str) -> Result<()> {
        self.check_ready()?;
        let mut profile = self.load(profile_url)?;
        Self::require_writable(&profile)?;

        let exact = content.versioned_key();
        let before = profile.contents.len();
        profile.contents.retain(|entry| {
            entry != &exact && entry.split('+').next() != Some(content.key.as_str())
        });
        if profile.contents.len() == before {
            return Err(Error::user("Not published to this profile"));
        }
        profile.version += 1;
        self.store(&profile)
    }

    fn register(&mut self, content: &ModuleLink, profile_url: &str) -> Result<()> {
        self.publish(content, profile_url)
    }

    fn follow(&mut self, profile_url: &str, target: &ModuleLink) -> Result<()> {
        self.check_ready()?;
        let mut profile = self.load(profile_url)?;
        Self::require_writable(&profile)?;
        if target.key == profile.url {
            return Err(Error::user("A profile cannot follow itself"));
        }

        let entry = target.versioned_key();
        if profile.follows.contains(&entry) {
            return Err(Error::user("Already following"));
        }
        profile.follows.push(entry);
        profile.version += 1;
        self.store(&profile)
    }

    fn unfollow(&mut self, profile_url: &str, target: &ModuleLink) -> Result<()> {
        self.check_ready()?;
        let mut profile = self.load(profile_url)?;
        Self::require_writable(&profile)?;

        let exact = target.versioned_key();
        let before = profile.follows.len();
        profile.follows.retain(|entry| {
            entry != &exact && entry.split('+').next() != Some(target.key.as_str())
        });
        if profile.follows.len() == before {
            return Err(Error::user("Not following this profile"));
        }
        profile.version += 1;
        self.store(&profile)
    }

    fn clone_module(
        &mut self,
        key: &str,
        _version: Option<u64>,
        _download: bool,
    ) -> Result<ModuleRecord> {
        // Local vault holds a single (latest) copy of each module.
        self.check_ready()?;
        self.load(key)
    }

    fn delete(&mut self, url: &str) -> Result<()> {
        self.check_ready()?;
        let record = self.load(url)?;
        Self::require_writable(&record)?;
        if record.module_type == ModuleType::Profile {
            return Err(Error::user("Profile modules cannot be deleted"));
        }
        fs::remove_dir_all(self.module_dir(url))?;
        debug!(url = %url, "module deleted");
        Ok(())
    }
}
