//! Update module metadata, one field or interactively.

use std::path::Path;

use walkdir::WalkDir;

use modcommons_ops::ModuleUpdate;
use modcommons_sdk::vault::RECORD_FILE;
use modcommons_types::constants::SUBTYPES;
use modcommons_types::{FieldValue, ModuleRecord, ModuleType};
use modcommons_valid::{validate_name, validate_title};

use crate::error::{CliError, CliResult};
use crate::output::{self, display_title};
use crate::prompt::{self, Choice};
use crate::resolve::Inputs;
use crate::session::Session;

/// Pick a writable module.
pub fn resolve_hash(session: &mut Session, _inputs: &Inputs) -> CliResult<String> {
    let modules: Vec<ModuleRecord> = session
        .vault()?
        .list()?
        .into_iter()
        .filter(|m| m.writable)
        .collect();
    if modules.is_empty() {
        return Err(CliError::user("No writable modules"));
    }
    let choices = modules
        .iter()
        .map(|m| {
            Choice::new(
                format!("{} [{}]", display_title(&m.title), m.module_type),
                m.url.clone(),
            )
        })
        .collect();
    prompt::select("Select a module to update", choices)
}

pub fn handler(session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    let hash = inputs.require("hash")?.to_string();

    if let Some(key) = inputs.get("key") {
        let raw = inputs.get("value").unwrap_or("");
        let value = if matches!(key, "parents" | "follows") {
            FieldValue::List(split_list(raw))
        } else {
            FieldValue::Text(raw.to_string())
        };
        session
            .vault_mut()?
            .set(ModuleUpdate::new(&hash).field(key, value))?;
        return Ok(output::success("Module updated"));
    }

    interactive(session, &hash)
}

/// Walk every updatable field, pre-filled with the current value.
fn interactive(session: &mut Session, hash: &str) -> CliResult<String> {
    let record = session.vault()?.get(hash)?;
    let mut update = ModuleUpdate::new(hash);

    match record.module_type {
        ModuleType::Content => {
            let title = prompt::text("Title", Some(&record.title), Some(validate_title))?;
            update = update.field("title", title);
        }
        ModuleType::Profile => {
            let name = prompt::text("Name", Some(&record.title), Some(validate_name))?;
            update = update.field("name", name);
        }
    }

    let description = prompt::text("Description", Some(&record.description), None)?;
    update = update.field("description", description);

    let dir = session.module_dir(hash)?;
    let files = module_files(&dir)?;
    if files.is_empty() {
        eprintln!("{}", output::info("No main file to set available"));
    } else {
        let initial = files.iter().position(|f| *f == record.main).unwrap_or(0);
        let choices = files
            .iter()
            .map(|f| Choice::new(f.as_str(), f.as_str()))
            .collect();
        let main = prompt::select_at("Main file", choices, initial)?;
        update = update.field("main", main);
    }

    if record.is_content() {
        let initial = SUBTYPES
            .iter()
            .position(|(id, _)| *id == record.subtype)
            .unwrap_or(0);
        let choices = SUBTYPES
            .iter()
            .map(|(id, label)| Choice::new(*label, *id))
            .collect();
        let subtype = prompt::select_at("Subtype", choices, initial)?;
        update = update.field("subtype", subtype);

        let others: Vec<ModuleRecord> = session
            .vault()?
            .list_content()?
            .into_iter()
            .filter(|m| m.url != record.url)
            .collect();
        if !others.is_empty() {
            let selected = others
                .iter()
                .map(|m| {
                    record
                        .parents
                        .iter()
                        .any(|p| p.split('+').next() == Some(m.url.as_str()))
                })
                .collect();
            let choices = others
                .iter()
                .map(|m| Choice::new(display_title(&m.title), m.url.clone()))
                .collect();
            let parents = prompt::multi_select("Parents", choices, selected)?;
            update = update.field("parents", FieldValue::List(parents));
        }
    }

    session.vault_mut()?.set(update)?;
    Ok(output::success("Module updated"))
}

/// A comma-separated list argument, entries trimmed, empties dropped.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Files inside a module directory, relative paths, record and
/// dotfiles excluded.
fn module_files(dir: &Path) -> CliResult<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !e.file_name().to_string_lossy().starts_with('.'));
    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.depth() == 1 && entry.file_name().to_str() == Some(RECORD_FILE) {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(dir) {
            files.push(relative.to_string_lossy().to_string());
        }
    }
    files.sort();
    Ok(files)
}
