//! Stop following a profile.

use modcommons_ops::MetadataGateway;
use modcommons_types::ModuleLink;

use crate::error::{CliError, CliResult};
use crate::output::{self, display_title};
use crate::prompt::{self, Choice};
use crate::resolve::Inputs;
use crate::session::Session;

/// Pick one of the local profile's followed entries.
pub fn resolve_url(session: &mut Session, _inputs: &Inputs) -> CliResult<String> {
    let local = session
        .vault()?
        .local_profile()?
        .ok_or_else(|| CliError::user("Please create your profile first"))?;
    if local.follows.is_empty() {
        return Err(CliError::user("Not following anyone"));
    }
    let choices = follow_choices(session.vault_mut()?, &local.follows)?;
    prompt::select("Select a profile to unfollow", choices)
}

/// The `follows` entries as menu choices, labelled with the followed
/// profile's name where resolvable.
pub fn follow_choices(
    vault: &mut MetadataGateway,
    entries: &[String],
) -> CliResult<Vec<Choice>> {
    let mut choices = Vec::new();
    for entry in entries {
        let label = match vault.clone_module(entry, None) {
            Ok(record) => display_title(&record.title),
            Err(_) => entry.clone(),
        };
        choices.push(Choice::new(label, entry.clone()));
    }
    Ok(choices)
}

pub fn handler(session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    let target = inputs.require("url")?.to_string();
    let local = session
        .vault()?
        .local_profile()?
        .ok_or_else(|| CliError::user("Please create your profile first"))?;
    if local.follows.is_empty() {
        return Err(CliError::user("Not following anyone"));
    }

    session.vault_mut()?.unfollow(&local.url, &target)?;

    let link = ModuleLink::parse(&target)?;
    Ok(output::success(format!(
        "\"{}\" stopped following {}",
        display_title(&local.title),
        link
    )))
}
