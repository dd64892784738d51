//! Follow another profile from the local profile.

use modcommons_types::ModuleLink;

use crate::error::{CliError, CliResult};
use crate::output::{self, display_title};
use crate::resolve::Inputs;
use crate::session::Session;

/// Following needs an explicit target; there is nothing sensible to
/// offer in a menu.
pub fn resolve_url(_session: &mut Session, _inputs: &Inputs) -> CliResult<String> {
    Err(CliError::user("Profile url required"))
}

pub fn handler(session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    let target = inputs.require("url")?.to_string();
    let local = session
        .vault()?
        .local_profile()?
        .ok_or_else(|| CliError::user("Please create your profile first"))?;

    session.vault_mut()?.follow(&local.url, &target)?;

    let link = ModuleLink::parse(&target)?;
    Ok(output::success(format!(
        "\"{}\" is now following {}",
        display_title(&local.title),
        link
    )))
}
