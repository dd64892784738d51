//! Shell completion scripts.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use crate::prompt::{self, Choice};
use crate::resolve::Inputs;
use crate::session::Session;

const SHELLS: &[(&str, Shell)] = &[
    ("bash", Shell::Bash),
    ("zsh", Shell::Zsh),
    ("fish", Shell::Fish),
    ("powershell", Shell::PowerShell),
    ("elvish", Shell::Elvish),
];

pub fn resolve_shell(_session: &mut Session, _inputs: &Inputs) -> CliResult<String> {
    let choices = SHELLS
        .iter()
        .map(|(name, _)| Choice::new(*name, *name))
        .collect();
    prompt::select("Pick a shell", choices)
}

pub fn handler(_session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    let name = inputs.require("shell")?;
    let shell = parse_shell(name)?;

    let mut command = Cli::command();
    let mut buffer = Vec::new();
    generate(shell, &mut command, "modcommons", &mut buffer);
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn parse_shell(name: &str) -> CliResult<Shell> {
    let lower = name.to_lowercase();
    SHELLS
        .iter()
        .find(|(known, _)| *known == lower)
        .map(|(_, shell)| *shell)
        .ok_or_else(|| {
            let known: Vec<&str> = SHELLS.iter().map(|(name, _)| *name).collect();
            CliError::user(format!(
                "Unsupported shell \"{}\", expected one of {}",
                name,
                known.join(", ")
            ))
        })
}
