//! Publish content, at its current version, to a profile.

use std::path::Path;

use modcommons_types::ModuleRecord;

use crate::error::{CliError, CliResult};
use crate::output::{self, display_title};
use crate::prompt::{self, Choice};
use crate::resolve::Inputs;
use crate::session::Session;

/// Pick a publishable content module: writable, titled, and with a
/// main file that exists on disk.
pub fn resolve_content(session: &mut Session, _inputs: &Inputs) -> CliResult<String> {
    let vault = session.vault()?;
    let content = vault.list_content()?;
    if content.is_empty() {
        return Err(CliError::user("No content modules"));
    }
    if vault.list_profiles()?.is_empty() {
        return Err(CliError::user("No profile modules"));
    }
    let choices = eligible_choices(session.env(), &content);
    if choices.is_empty() {
        return Err(CliError::user(
            "No content modules with a title and existing main file",
        ));
    }
    prompt::select("Select content to publish", choices)
}

/// Pick a writable profile.
pub fn resolve_profile(session: &mut Session, _inputs: &Inputs) -> CliResult<String> {
    let profiles: Vec<ModuleRecord> = session
        .vault()?
        .list_profiles()?
        .into_iter()
        .filter(|m| m.writable)
        .collect();
    if profiles.is_empty() {
        return Err(CliError::user("No writable profile modules"));
    }
    let choices = profiles
        .iter()
        .map(|m| Choice::new(display_title(&m.title), m.url.clone()))
        .collect();
    prompt::select("Select a profile", choices)
}

/// Content eligible for publication, as menu choices.
pub fn eligible_choices(env: &Path, modules: &[ModuleRecord]) -> Vec<Choice> {
    modules
        .iter()
        .filter(|m| m.writable && !m.title.is_empty() && !m.main.is_empty())
        .filter(|m| env.join(&m.url).join(&m.main).is_file())
        .map(|m| Choice::new(display_title(&m.title), m.url.clone()))
        .collect()
}

pub fn handler(session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    let content_url = inputs.require("content")?.to_string();
    let profile_url = inputs.require("profile")?.to_string();

    let vault = session.vault()?;
    let content = vault.get(&content_url)?;
    let profile = vault.get(&profile_url)?;

    session.vault_mut()?.publish(&content_url, &profile_url)?;
    Ok(output::success(format!(
        "\"{}\" (version {}) published to \"{}\"",
        display_title(&content.title),
        content.version,
        display_title(&profile.title)
    )))
}

/// Non-interactive twin of [`handler`]: both urls must be given.
pub fn register_handler(session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    let content_url = inputs.require("content")?.to_string();
    let profile_url = inputs.require("profile")?.to_string();

    let vault = session.vault()?;
    let content = vault.get(&content_url)?;
    let profile = vault.get(&profile_url)?;

    session.vault_mut()?.register(&content_url, &profile_url)?;
    Ok(output::success(format!(
        "\"{}\" (version {}) registered to \"{}\"",
        display_title(&content.title),
        content.version,
        display_title(&profile.title)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use modcommons_types::{ModuleDraft, ModuleType};
    use std::fs;
    use tempfile::TempDir;

    fn session() -> (TempDir, Session) {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(dir.path().to_path_buf(), true);
        session.open_vault().unwrap();
        (dir, session)
    }

    fn init(session: &mut Session, draft: ModuleDraft) -> modcommons_types::ModuleRecord {
        session.vault_mut().unwrap().init(draft).unwrap()
    }

    fn pair_inputs(content: &str, profile: &str) -> Inputs {
        let mut inputs = Inputs::default();
        inputs.set("content", Some(content.to_string()));
        inputs.set("profile", Some(profile.to_string()));
        inputs
    }

    #[test]
    fn test_eligibility_requires_existing_main_file() {
        let (dir, mut session) = session();
        let titled = init(
            &mut session,
            ModuleDraft::new(ModuleType::Content)
                .with_title("t")
                .with_main("main.txt"),
        );
        let untitled = init(
            &mut session,
            ModuleDraft::new(ModuleType::Content).with_main("main.txt"),
        );
        let no_main = init(
            &mut session,
            ModuleDraft::new(ModuleType::Content).with_title("t2"),
        );

        // Main file only exists for the first module.
        fs::write(dir.path().join(&titled.url).join("main.txt"), "x").unwrap();

        let modules = session.vault().unwrap().list_content().unwrap();
        let choices = eligible_choices(session.env(), &modules);
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].value, titled.url);
        assert_ne!(choices[0].value, untitled.url);
        assert_ne!(choices[0].value, no_main.url);
    }

    #[test]
    fn test_publish_and_duplicate() {
        let (_dir, mut session) = session();
        let content = init(
            &mut session,
            ModuleDraft::new(ModuleType::Content).with_title("t"),
        );
        let profile = init(
            &mut session,
            ModuleDraft::new(ModuleType::Profile).with_title("Jo"),
        );

        let output = handler(&mut session, &pair_inputs(&content.url, &profile.url)).unwrap();
        assert!(output.contains("version 1"));

        let loaded = session.vault().unwrap().get(&profile.url).unwrap();
        assert_eq!(loaded.contents, vec![format!("{}+1", content.url)]);

        let result = handler(&mut session, &pair_inputs(&content.url, &profile.url));
        assert!(result.is_err());
    }

    #[test]
    fn test_register_requires_both_urls() {
        let (_dir, mut session) = session();
        let content = init(
            &mut session,
            ModuleDraft::new(ModuleType::Content).with_title("t"),
        );
        let profile = init(
            &mut session,
            ModuleDraft::new(ModuleType::Profile).with_title("Jo"),
        );

        let mut only_content = Inputs::default();
        only_content.set("content", Some(content.url.clone()));
        assert!(register_handler(&mut session, &only_content).is_err());

        register_handler(&mut session, &pair_inputs(&content.url, &profile.url)).unwrap();
        let loaded = session.vault().unwrap().get(&profile.url).unwrap();
        assert_eq!(loaded.contents, vec![format!("{}+1", content.url)]);
    }

    #[test]
    fn test_resolver_needs_both_types() {
        let (_dir, mut session) = session();
        let result = resolve_content(&mut session, &Inputs::default());
        match result {
            Err(CliError::User(msg)) => assert_eq!(msg, "No content modules"),
            other => panic!("expected user error, got {:?}", other),
        }

        init(
            &mut session,
            ModuleDraft::new(ModuleType::Content).with_title("t"),
        );
        let result = resolve_content(&mut session, &Inputs::default());
        match result {
            Err(CliError::User(msg)) => assert_eq!(msg, "No profile modules"),
            other => panic!("expected user error, got {:?}", other),
        }
    }
}
