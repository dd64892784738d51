//! Print the directory a module is stored in.

use crate::error::CliResult;
use crate::prompt;
use crate::resolve::Inputs;
use crate::session::Session;

/// Plain text prompt; the handler validates the link.
pub fn resolve_hash(_session: &mut Session, _inputs: &Inputs) -> CliResult<String> {
    prompt::text("Hash", None, None)
}

pub fn handler(session: &mut Session, inputs: &Inputs) -> CliResult<String> {
    let hash = inputs.require("hash")?;
    let dir = session.module_dir(hash)?;
    Ok(dir.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_is_env_plus_key() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(dir.path().to_path_buf(), false);
        let key = "ab".repeat(32);

        let mut inputs = Inputs::default();
        inputs.set("hash", Some(format!("mod://{}+4", key)));
        let output = handler(&mut session, &inputs).unwrap();
        assert_eq!(output, dir.path().join(key).display().to_string());
    }

    #[test]
    fn test_invalid_link_rejected() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(dir.path().to_path_buf(), false);
        let mut inputs = Inputs::default();
        inputs.set("hash", Some("not-a-key".to_string()));
        assert!(handler(&mut session, &inputs).is_err());
    }
}
