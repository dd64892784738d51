//! Delete a writable content module.

use modcommons_types::ModuleRecord;

use crate::error::{CliError, CliResult};
use crate::output::{self, display_title};
use crate::prompt::{self, Choice};
use crate::resolve::Inputs;
use crate::session::Session;

/// Pick a writable content module.
pub fn resolve_hash(session: &mut Session, _inputs: &Inputs) -> CliResult<String> {
    let modules: Vec<ModuleRecord> = session
        .vault()?
        .list_content()?
        .into_iter()
        .filter(|m| m.writable)
        .collect();
    if modules.is_empty() {
        return Err(CliError::user("No writable content modules"));
    }
    let choices = modules
        .iter()
        .map(|m| Choice::new(display_title(&m.title), m.url.clone()))
        .collect();
    prompt::select("Select a module to delete", choices)
}

pub fn handler(session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    let hash = inputs.require("hash")?;
    let record = session.vault()?.get(hash)?;

    if !session.yes {
        let message = format!("Delete \"{}\"?", display_title(&record.title));
        if !prompt::confirm(&message, false)? {
            return Err(CliError::user("Delete not confirmed"));
        }
    }

    session.vault_mut()?.delete(hash)?;
    Ok(output::success("Module deleted"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use modcommons_types::{ModuleDraft, ModuleType};
    use tempfile::TempDir;

    fn session() -> (TempDir, Session) {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(dir.path().to_path_buf(), true);
        session.open_vault().unwrap();
        (dir, session)
    }

    fn hash_input(hash: &str) -> Inputs {
        let mut inputs = Inputs::default();
        inputs.set("hash", Some(hash.to_string()));
        inputs
    }

    #[test]
    fn test_delete_content() {
        let (_dir, mut session) = session();
        let record = session
            .vault_mut()
            .unwrap()
            .init(ModuleDraft::new(ModuleType::Content).with_title("t"))
            .unwrap();

        handler(&mut session, &hash_input(&record.url)).unwrap();
        assert!(session.vault().unwrap().get(&record.url).is_err());
    }

    #[test]
    fn test_profile_not_deletable() {
        let (_dir, mut session) = session();
        let record = session
            .vault_mut()
            .unwrap()
            .init(ModuleDraft::new(ModuleType::Profile).with_title("Jo"))
            .unwrap();

        assert!(handler(&mut session, &hash_input(&record.url)).is_err());
        assert!(session.vault().unwrap().get(&record.url).is_ok());
    }

    #[test]
    fn test_resolver_requires_content() {
        let (_dir, mut session) = session();
        let result = resolve_hash(&mut session, &Inputs::default());
        match result {
            Err(CliError::User(msg)) => assert_eq!(msg, "No writable content modules"),
            other => panic!("expected user error, got {:?}", other),
        }
    }
}
