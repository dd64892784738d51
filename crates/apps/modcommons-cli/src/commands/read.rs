//! Read module metadata.

use colored::Colorize;
use serde_json::Value;

use modcommons_ops::MetadataGateway;
use modcommons_types::constants::subtype_label;
use modcommons_types::link::present_url;
use modcommons_types::{ModuleRecord, ModuleType};

use crate::error::CliResult;
use crate::output::{display_title, CROSS};
use crate::prompt::{self, Choice};
use crate::resolve::Inputs;
use crate::session::Session;

/// Pick any local module.
pub fn resolve_hash(session: &mut Session, _inputs: &Inputs) -> CliResult<String> {
    let modules = session.vault()?.list()?;
    let choices: Vec<Choice> = modules
        .iter()
        .map(|m| {
            Choice::new(
                format!("{} [{}]", display_title(&m.title), m.module_type),
                m.url.clone(),
            )
        })
        .collect();
    prompt::select("Select a module", choices)
}

pub fn handler(session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    let hash = inputs.require("hash")?;
    let vault = session.vault()?;
    let record = vault.get(hash)?;

    if let Some(key) = inputs.get("key") {
        let exported = vault.export(&record);
        let value = exported.get(key).cloned().unwrap_or(Value::Null);
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    render(vault, &record)
}

fn header(record: &ModuleRecord) -> String {
    let kind = match record.module_type {
        ModuleType::Profile => "Profile",
        ModuleType::Content => subtype_label(&record.subtype).unwrap_or("Unknown"),
    };
    format!("{} - {}", display_title(&record.title).cyan().bold(), kind)
}

fn render(vault: &MetadataGateway, record: &ModuleRecord) -> CliResult<String> {
    let mut lines = vec![header(record)];

    if record.is_content() {
        if record.authors.is_empty() {
            lines.push("Anonymous".italic().to_string());
        } else {
            let names: Vec<String> = record
                .authors
                .iter()
                .map(|author| {
                    vault
                        .get(author)
                        .map(|profile| profile.title)
                        .unwrap_or_else(|_| author.clone())
                })
                .collect();
            lines.push(names.join(", ").italic().to_string());
        }
    }

    lines.push(String::new());
    lines.push(present_url(&record.url).underline().to_string());
    if record.is_content() {
        if !record.parents.is_empty() {
            lines.push("Parents:".bold().to_string());
            for parent in &record.parents {
                lines.push(format!(" - {}", parent));
            }
        }
    } else if !record.follows.is_empty() {
        lines.push("Follows:".bold().to_string());
        for entry in &record.follows {
            lines.push(format!(" - {}", entry));
        }
    }

    lines.push(String::new());
    if record.description.is_empty() {
        lines.push("No description".dimmed().to_string());
    } else {
        lines.push(record.description.clone());
    }

    lines.push(String::new());
    if record.main.is_empty() {
        lines.push(format!("main: {}", CROSS.red()));
    } else {
        lines.push(format!("main: {}", record.main));
    }

    if record.is_profile() && !record.contents.is_empty() {
        lines.push("contents:".to_string());
        for entry in &record.contents {
            match vault.get(entry) {
                Ok(content) => {
                    lines.push(format!(" - {}", header(&content)));
                    lines.push(format!("   {}", present_url(&content.url).underline()));
                }
                Err(_) => lines.push(format!(" - {}", entry)),
            }
        }
    }

    Ok(lines.join("\n"))
}
