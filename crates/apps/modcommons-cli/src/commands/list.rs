//! List local writable modules of one type.

use modcommons_types::link::present_url;
use modcommons_types::ModuleType;

use crate::error::CliResult;
use crate::output::display_title;
use crate::prompt::{self, Choice};
use crate::resolve::Inputs;
use crate::session::Session;

pub fn resolve_type(_session: &mut Session, _inputs: &Inputs) -> CliResult<String> {
    prompt::select(
        "Pick a module type",
        vec![
            Choice::new("Content", "content"),
            Choice::new("Profile", "profile"),
        ],
    )
}

pub fn handler(session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    let module_type: ModuleType = inputs.require("type")?.parse()?;
    let vault = session.vault()?;
    let modules = match module_type {
        ModuleType::Content => vault.list_content()?,
        ModuleType::Profile => vault.list_profiles()?,
    };

    let lines: Vec<String> = modules
        .iter()
        .filter(|m| m.writable)
        .map(|m| format!("{}  {}", display_title(&m.title), present_url(&m.url)))
        .collect();
    Ok(lines.join("\n"))
}
