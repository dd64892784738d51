//! Create a content or profile module.

use tracing::debug;

use modcommons_types::constants::{LICENSE_URL, SUBTYPES};
use modcommons_types::link::present_url;
use modcommons_types::{ModuleDraft, ModuleType};
use modcommons_valid::{validate_name, validate_title};

use crate::error::{CliError, CliResult};
use crate::output;
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
    let local = session.vault()?.local_profile()?;

    // Profile-before-content, and at most one local profile.
    let authors = match module_type {
        ModuleType::Profile => {
            if local.is_some() {
                return Err(CliError::user("A local profile already exists"));
            }
            Vec::new()
        }
        ModuleType::Content => {
            let profile = local
                .ok_or_else(|| CliError::user("Please create your profile first"))?;
            vec![profile.url]
        }
    };

    let title = match module_type {
        ModuleType::Content => match non_empty(inputs.get("title")) {
            Some(value) => value,
            None => prompt::text("Title", None, Some(validate_title))?,
        },
        ModuleType::Profile => match non_empty(inputs.get("name")) {
            Some(value) => value,
            None => prompt::text("Name", None, Some(validate_name))?,
        },
    };
    let description = match inputs.get("description") {
        Some(value) => value.to_string(),
        None => prompt::text("Description", None, None)?,
    };
    let subtype = match module_type {
        ModuleType::Content => match non_empty(inputs.get("subtype")) {
            Some(value) => value,
            None => {
                let choices = SUBTYPES
                    .iter()
                    .map(|(id, label)| Choice::new(*label, *id))
                    .collect();
                prompt::select("Select a subtype", choices)?
            }
        },
        ModuleType::Profile => String::new(),
    };

    if !session.yes {
        let message = format!("License: {}", LICENSE_URL);
        if !prompt::confirm(&message, false)? {
            return Err(CliError::user("License not confirmed"));
        }
    }

    let draft = ModuleDraft::new(module_type)
        .with_title(title)
        .with_description(description)
        .with_subtype(subtype)
        .with_authors(authors);
    let record = session.vault_mut()?.init(draft)?;
    debug!(url = %record.url, module_type = %module_type, "module created");

    Ok(format!(
        "{}\n{}",
        output::success("Module created"),
        present_url(&record.url)
    ))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
