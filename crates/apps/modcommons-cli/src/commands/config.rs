//! Read or write CLI settings.

use crate::error::{CliError, CliResult};
use crate::output;
use crate::resolve::Inputs;
use crate::session::Session;

/// Known settings as `(key, description)` pairs.
const SETTINGS: &[(&str, &str)] = &[(
    "vault_url",
    "Remote vault endpoint used for web publication",
)];

pub fn handler(session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    let key = match inputs.get("key") {
        Some(key) if SETTINGS.iter().any(|(k, _)| *k == key) => key,
        _ => return Err(available()),
    };

    match inputs.get("value") {
        Some(value) => {
            session.config.set(key, value)?;
            Ok(output::success("Configuration updated"))
        }
        None => Ok(session.config.get(key).unwrap_or_default()),
    }
}

fn available() -> CliError {
    let keys: Vec<&str> = SETTINGS.iter().map(|(k, _)| *k).collect();
    CliError::user(format!("Available settings: {}", keys.join(", ")))
}
