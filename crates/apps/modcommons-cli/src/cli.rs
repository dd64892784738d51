//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;

use crate::resolve::Inputs;

/// Manage content and profile modules in the module commons.
#[derive(Parser, Debug, Default)]
#[command(
    name = "modcommons",
    version,
    about = "Manage content and profile modules in the module commons",
    long_about = "Manage content and profile modules in the module commons.\n\n\
        Run without arguments for the interactive action menu. Any input an \
        action needs and does not receive on the command line is prompted for."
)]
pub struct Cli {
    /// Action to run; omit for the interactive menu
    pub action: Option<String>,

    /// Positional inputs for the action, in the action's declared order
    pub input: Vec<String>,

    /// Environment directory holding modules and config
    #[arg(short, long, env = "MODCOMMONS_ENV")]
    pub env: Option<PathBuf>,

    /// Assume yes for every confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Title for a new content module
    #[arg(long)]
    pub title: Option<String>,

    /// Name for a new profile module
    #[arg(long)]
    pub name: Option<String>,

    /// Description for a new module
    #[arg(long)]
    pub description: Option<String>,

    /// Subtype id for a new content module
    #[arg(long)]
    pub subtype: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Seed the input table from named flags. Flags cover the create
    /// wizard's fields; everything else travels as positionals.
    pub fn seed_inputs(&self) -> Inputs {
        let mut inputs = Inputs::default();
        inputs.set("title", self.title.clone());
        inputs.set("name", self.name.clone());
        inputs.set("description", self.description.clone());
        inputs.set("subtype", self.subtype.clone());
        inputs
    }
}

/// Default environment directory when `--env` and `MODCOMMONS_ENV` are
/// both absent: the platform data dir, falling back to `~/.modcommons`.
pub fn default_env_dir() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("org", "modcommons", "modcommons") {
        return dirs.data_dir().to_path_buf();
    }
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".modcommons")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_action_and_positionals() {
        let cli = Cli::parse_from(["modcommons", "update", "abc", "title", "New title"]);
        assert_eq!(cli.action.as_deref(), Some("update"));
        assert_eq!(cli.input, vec!["abc", "title", "New title"]);
    }

    #[test]
    fn test_flags_seed_inputs() {
        let cli = Cli::parse_from([
            "modcommons",
            "create",
            "content",
            "--title",
            "t",
            "--description",
            "",
        ]);
        let inputs = cli.seed_inputs();
        assert_eq!(inputs.get("title"), Some("t"));
        assert_eq!(inputs.get("description"), Some(""));
        assert_eq!(inputs.get("name"), None);
    }

    #[test]
    fn test_default_env_dir_is_absolute() {
        assert!(default_env_dir().is_absolute());
    }
}
