//! Per-invocation state: environment, config and the open vault.

use std::path::{Path, PathBuf};

use tracing::debug;

use modcommons_ops::MetadataGateway;
use modcommons_sdk::LocalVault;
use modcommons_types::ModuleLink;

use crate::config_store::ConfigStore;
use crate::error::{CliError, CliResult};

/// Everything an action handler may touch.
///
/// The vault is opened lazily by the dispatcher for actions that need
/// it and closed unconditionally afterwards, so handlers never manage
/// the session lifecycle themselves.
pub struct Session {
    env: PathBuf,
    /// Skip confirmation prompts.
    pub yes: bool,
    /// CLI settings store.
    pub config: ConfigStore,
    vault: Option<MetadataGateway>,
}

impl Session {
    pub fn new(env: PathBuf, yes: bool) -> Self {
        let config = ConfigStore::new(env.join("config.json"));
        Self {
            env,
            yes,
            config,
            vault: None,
        }
    }

    /// The environment directory modules live under.
    pub fn env(&self) -> &Path {
        &self.env
    }

    /// Directory holding the given module's files.
    pub fn module_dir(&self, url: &str) -> CliResult<PathBuf> {
        let link = ModuleLink::parse(url)?;
        Ok(self.env.join(link.key))
    }

    /// Open the vault session. Idempotent.
    pub fn open_vault(&mut self) -> CliResult<()> {
        if self.vault.is_none() {
            debug!(env = %self.env.display(), "opening vault");
            let sdk = LocalVault::new(self.env.clone());
            self.vault = Some(MetadataGateway::open(Box::new(sdk))?);
        }
        Ok(())
    }

    /// Close the vault session, if open. Idempotent.
    pub fn close_vault(&mut self) -> CliResult<()> {
        if let Some(mut vault) = self.vault.take() {
            debug!("closing vault");
            vault.close()?;
        }
        Ok(())
    }

    /// True while a vault session is open.
    pub fn vault_open(&self) -> bool {
        self.vault.is_some()
    }

    /// Borrow the open vault.
    pub fn vault(&self) -> CliResult<&MetadataGateway> {
        self.vault
            .as_ref()
            .ok_or_else(|| CliError::user("No open vault session"))
    }

    /// Mutably borrow the open vault.
    pub fn vault_mut(&mut self) -> CliResult<&mut MetadataGateway> {
        self.vault
            .as_mut()
            .ok_or_else(|| CliError::user("No open vault session"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_vault_lifecycle() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(dir.path().to_path_buf(), false);
        assert!(!session.vault_open());
        assert!(session.vault().is_err());

        session.open_vault().unwrap();
        assert!(session.vault_open());
        assert!(session.vault().is_ok());

        // Reopening is a no-op, closing twice is fine.
        session.open_vault().unwrap();
        session.close_vault().unwrap();
        assert!(!session.vault_open());
        session.close_vault().unwrap();
    }

    #[test]
    fn test_module_dir() {
        let dir = TempDir::new().unwrap();
        let session = Session::new(dir.path().to_path_buf(), false);
        let key = "ab".repeat(32);
        let path = session.module_dir(&format!("mod://{}+2", key)).unwrap();
        assert_eq!(path, dir.path().join(key));
        assert!(session.module_dir("nope").is_err());
    }
}
