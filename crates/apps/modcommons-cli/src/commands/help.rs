//! Describe actions.

use crate::actions;
use crate::error::{CliError, CliResult};
use crate::resolve::Inputs;
use crate::session::Session;

pub fn handler(_session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    if let Some(name) = inputs.get("action") {
        let action = actions::lookup(name)
            .ok_or_else(|| CliError::user(format!("Unknown action \"{}\"", name)))?;
        return Ok(format!("{}\n  {}", action.title, action.help));
    }

    let lines: Vec<String> = actions::visible()
        .map(|action| format!("{:<12}{}", action.name, action.title))
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(action: Option<&str>) -> CliResult<String> {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(dir.path().to_path_buf(), false);
        let mut inputs = Inputs::default();
        inputs.set("action", action.map(str::to_string));
        handler(&mut session, &inputs)
    }

    #[test]
    fn test_lists_visible_actions() {
        let output = run(None).unwrap();
        assert!(output.contains("create"));
        assert!(output.contains("unfollow"));
        // Unlisted actions stay out of the listing.
        assert!(!output.contains("config"));
    }

    #[test]
    fn test_describes_one_action() {
        let output = run(Some("publish")).unwrap();
        assert!(output.contains("publish [content] [profile]"));
    }

    #[test]
    fn test_unknown_action() {
        assert!(run(Some("frobnicate")).is_err());
    }
}
