//! Remove content from a profile's publications.

use modcommons_ops::MetadataGateway;
use modcommons_types::ModuleRecord;

use crate::error::{CliError, CliResult};
use crate::output::{self, display_title};
use crate::prompt::{self, Choice};
use crate::resolve::Inputs;
use crate::session::Session;

/// Pick a writable profile to unpublish from.
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

/// Pick one of the profile's published entries. Depends on the
/// `profile` input resolved before this one.
pub fn resolve_content(session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    let profile_url = inputs.require("profile")?.to_string();
    let choices = published_choices(session.vault_mut()?, &profile_url)?;
    if choices.is_empty() {
        return Err(CliError::user("Nothing published to this profile"));
    }
    prompt::select("Select content to unpublish", choices)
}

/// The profile's `contents` entries as menu choices, labelled with the
/// published module's title and pinned version where resolvable.
pub fn published_choices(
    vault: &mut MetadataGateway,
    profile_url: &str,
) -> CliResult<Vec<Choice>> {
    let profile = vault.get(profile_url)?;
    let mut choices = Vec::new();
    for entry in &profile.contents {
        let label = match vault.clone_module(entry, None) {
            Ok(record) => entry_label(&record.title, entry),
            Err(_) => entry.clone(),
        };
        choices.push(Choice::new(label, entry.clone()));
    }
    Ok(choices)
}

fn entry_label(title: &str, entry: &str) -> String {
    match entry.split_once('+') {
        Some((_, version)) => format!("{} (v{})", display_title(title), version),
        None => display_title(title),
    }
}

pub fn handler(session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    let profile_url = inputs.require("profile")?.to_string();
    let content_url = inputs.require("content")?.to_string();

    let vault = session.vault()?;
    let profile = vault.get(&profile_url)?;
    let content = vault.get(&content_url)?;

    session.vault_mut()?.unpublish(&content_url, &profile_url)?;
    Ok(output::success(format!(
        "\"{}\" unpublished from \"{}\"",
        display_title(&content.title),
        display_title(&profile.title)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use modcommons_types::{ModuleDraft, ModuleType};
    use tempfile::TempDir;

    fn published_session() -> (TempDir, Session, String, String) {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(dir.path().to_path_buf(), true);
        session.open_vault().unwrap();
        let vault = session.vault_mut().unwrap();
        let content = vault
            .init(ModuleDraft::new(ModuleType::Content).with_title("A result"))
            .unwrap();
        let profile = vault
            .init(ModuleDraft::new(ModuleType::Profile).with_title("Jo"))
            .unwrap();
        vault.publish(&content.url, &profile.url).unwrap();
        (dir, session, content.url, profile.url)
    }

    fn pair_inputs(profile: &str, content: &str) -> Inputs {
        let mut inputs = Inputs::default();
        inputs.set("profile", Some(profile.to_string()));
        inputs.set("content", Some(content.to_string()));
        inputs
    }

    #[test]
    fn test_published_choices_carry_title_and_version() {
        let (_dir, mut session, content, profile) = published_session();
        let choices =
            published_choices(session.vault_mut().unwrap(), &profile).unwrap();
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].label, "A result (v1)");
        assert_eq!(choices[0].value, format!("{}+1", content));
    }

    #[test]
    fn test_unpublish() {
        let (_dir, mut session, content, profile) = published_session();
        handler(&mut session, &pair_inputs(&profile, &content)).unwrap();
        let loaded = session.vault().unwrap().get(&profile).unwrap();
        assert!(loaded.contents.is_empty());

        // Nothing left to unpublish.
        let result = handler(&mut session, &pair_inputs(&profile, &content));
        assert!(result.is_err());
    }

    #[test]
    fn test_unpublish_accepts_versioned_entry() {
        let (_dir, mut session, content, profile) = published_session();
        let entry = format!("{}+1", content);
        handler(&mut session, &pair_inputs(&profile, &entry)).unwrap();
        let loaded = session.vault().unwrap().get(&profile).unwrap();
        assert!(loaded.contents.is_empty());
    }
}
