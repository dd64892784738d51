//! Action dispatch.

use tracing::debug;

use crate::actions::{self, Action};
use crate::cli::{default_env_dir, Cli};
use crate::error::{CliError, CliResult};
use crate::prompt::{self, Choice};
use crate::resolve::resolve_inputs;
use crate::session::Session;

/// Run one invocation: select an action, resolve its inputs, execute
/// it, and tear the vault session down whatever happened.
pub fn run(cli: Cli) -> CliResult<()> {
    let env = cli.env.clone().unwrap_or_else(default_env_dir);
    let mut session = Session::new(env, cli.yes);

    let name = match cli.action.clone() {
        Some(name) => name,
        None => select_action()?,
    };
    let action = actions::lookup(&name).ok_or_else(|| unknown_action(&name))?;
    debug!(action = action.name, "dispatching");

    if action.requires_vault {
        session.open_vault()?;
    }
    let result = execute(action, &cli, &mut session);
    let closed = session.close_vault();

    let output = result?;
    closed?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

fn execute(action: &Action, cli: &Cli, session: &mut Session) -> CliResult<String> {
    let inputs = resolve_inputs(action, &cli.input, session, cli.seed_inputs())?;
    (action.handler)(session, &inputs)
}

fn select_action() -> CliResult<String> {
    let choices = actions::visible()
        .map(|action| Choice::new(action.title, action.name))
        .collect();
    prompt::select("Pick an action", choices)
}

fn unknown_action(name: &str) -> CliError {
    let known: Vec<&str> = actions::registry().iter().map(|a| a.name).collect();
    CliError::user(format!(
        "Unknown action \"{}\", expected one of {}",
        name,
        known.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use modcommons_ops::MetadataGateway;
    use modcommons_sdk::LocalVault;
    use std::path::Path;
    use tempfile::TempDir;

    fn invoke(dir: &Path, action: &str, input: &[&str]) -> CliResult<()> {
        run(Cli {
            action: Some(action.to_string()),
            input: input.iter().map(|s| s.to_string()).collect(),
            env: Some(dir.to_path_buf()),
            yes: true,
            ..Default::default()
        })
    }

    fn gateway(dir: &Path) -> MetadataGateway {
        MetadataGateway::open(Box::new(LocalVault::new(dir))).unwrap()
    }

    #[test]
    fn test_unknown_action_is_user_error() {
        let dir = TempDir::new().unwrap();
        let result = invoke(dir.path(), "frobnicate", &[]);
        match result {
            Err(CliError::User(msg)) => assert!(msg.contains("frobnicate")),
            other => panic!("expected user error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_update_delete_flow() {
        let dir = TempDir::new().unwrap();

        // Flags satisfy the create wizard, --yes skips the license prompt.
        run(Cli {
            action: Some("create".to_string()),
            input: vec!["profile".to_string()],
            env: Some(dir.path().to_path_buf()),
            yes: true,
            name: Some("Jo".to_string()),
            description: Some("about me".to_string()),
            ..Default::default()
        })
        .unwrap();
        run(Cli {
            action: Some("create".to_string()),
            input: vec!["content".to_string()],
            env: Some(dir.path().to_path_buf()),
            yes: true,
            title: Some("A result".to_string()),
            description: Some("d".to_string()),
            subtype: Some("theory".to_string()),
            ..Default::default()
        })
        .unwrap();

        let gw = gateway(dir.path());
        let content = &gw.list_content().unwrap()[0];
        let profile = gw.local_profile().unwrap().unwrap();
        assert_eq!(content.title, "A result");
        assert_eq!(content.authors, vec![profile.url.clone()]);

        invoke(dir.path(), "update", &[&content.url, "title", "Better"]).unwrap();
        assert_eq!(gw.get(&content.url).unwrap().title, "Better");

        invoke(dir.path(), "delete", &[&content.url]).unwrap();
        assert!(gw.get(&content.url).is_err());
    }

    #[test]
    fn test_update_unknown_key_reports_allowed_set() {
        let dir = TempDir::new().unwrap();
        run(Cli {
            action: Some("create".to_string()),
            input: vec!["profile".to_string()],
            env: Some(dir.path().to_path_buf()),
            yes: true,
            name: Some("Jo".to_string()),
            description: Some("".to_string()),
            ..Default::default()
        })
        .unwrap();
        let url = gateway(dir.path()).local_profile().unwrap().unwrap().url;

        let result = invoke(dir.path(), "update", &[&url, "beep", "boop"]);
        match result {
            Err(err) => {
                let msg = err.to_string();
                assert!(msg.contains("beep"));
                assert!(msg.contains("only allowed to update keys"));
            }
            Ok(()) => panic!("expected rejection"),
        }
    }

    #[test]
    fn test_path_action_prints_without_module() {
        // `path` only derives a directory; the module need not exist.
        let dir = TempDir::new().unwrap();
        let key = "ab".repeat(32);
        invoke(dir.path(), "path", &[&key]).unwrap();
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = TempDir::new().unwrap();
        invoke(dir.path(), "config", &["vault_url", "https://vault.example"]).unwrap();
        invoke(dir.path(), "config", &["vault_url"]).unwrap();
        assert!(invoke(dir.path(), "config", &["nope", "x"]).is_err());
    }
}
