//! The static action registry.
//!
//! Registration order is presentation order: the interactive menu and
//! the help listing show visible actions exactly as they appear here.

use crate::commands;
use crate::error::CliResult;
use crate::resolve::Inputs;
use crate::session::Session;

/// Runs an action once its inputs are resolved.
pub type Handler = fn(&mut Session, &Inputs) -> CliResult<String>;

/// Produces a missing input value, usually interactively. Sees every
/// input resolved before it.
pub type Resolver = fn(&mut Session, &Inputs) -> CliResult<String>;

/// One declared input of an action.
pub struct InputSpec {
    pub name: &'static str,
    pub resolve: Option<Resolver>,
}

/// A dispatchable action.
pub struct Action {
    /// Invocation name, also the positional on the command line.
    pub name: &'static str,
    /// Menu label.
    pub title: &'static str,
    /// One-line usage summary.
    pub help: &'static str,
    /// Hidden from the menu and the action listing, still invocable.
    pub unlisted: bool,
    /// Dispatcher opens the vault session before running this action.
    pub requires_vault: bool,
    /// Declared inputs, in resolution order.
    pub input: &'static [InputSpec],
    pub handler: Handler,
}

static ACTIONS: &[Action] = &[
    Action {
        name: "create",
        title: "Create a module",
        help: "create [content|profile] - create a new module",
        unlisted: false,
        requires_vault: true,
        input: &[InputSpec {
            name: "type",
            resolve: Some(commands::create::resolve_type),
        }],
        handler: commands::create::handler,
    },
    Action {
        name: "read",
        title: "Read metadata",
        help: "read [hash] [key] - print a module's metadata as JSON",
        unlisted: false,
        requires_vault: true,
        input: &[
            InputSpec {
                name: "hash",
                resolve: Some(commands::read::resolve_hash),
            },
            InputSpec {
                name: "key",
                resolve: None,
            },
        ],
        handler: commands::read::handler,
    },
    Action {
        name: "update",
        title: "Update metadata",
        help: "update [hash] [key value] - update one field, or all interactively",
        unlisted: false,
        requires_vault: true,
        input: &[
            InputSpec {
                name: "hash",
                resolve: Some(commands::update::resolve_hash),
            },
            InputSpec {
                name: "key",
                resolve: None,
            },
            InputSpec {
                name: "value",
                resolve: None,
            },
        ],
        handler: commands::update::handler,
    },
    Action {
        name: "delete",
        title: "Delete a content module",
        help: "delete [hash] - remove a writable content module",
        unlisted: false,
        requires_vault: true,
        input: &[InputSpec {
            name: "hash",
            resolve: Some(commands::delete::resolve_hash),
        }],
        handler: commands::delete::handler,
    },
    Action {
        name: "path",
        title: "Print a module's path",
        help: "path [hash] - print the directory a module is stored in",
        unlisted: true,
        requires_vault: false,
        input: &[InputSpec {
            name: "hash",
            resolve: Some(commands::path::resolve_hash),
        }],
        handler: commands::path::handler,
    },
    Action {
        name: "list",
        title: "List writable modules",
        help: "list [content|profile] - list local writable modules",
        unlisted: true,
        requires_vault: true,
        input: &[InputSpec {
            name: "type",
            resolve: Some(commands::list::resolve_type),
        }],
        handler: commands::list::handler,
    },
    Action {
        name: "publish",
        title: "Publish content to a profile",
        help: "publish [content] [profile] - add content, at its current version, to a profile",
        unlisted: false,
        requires_vault: true,
        input: &[
            InputSpec {
                name: "content",
                resolve: Some(commands::publish::resolve_content),
            },
            InputSpec {
                name: "profile",
                resolve: Some(commands::publish::resolve_profile),
            },
        ],
        handler: commands::publish::handler,
    },
    Action {
        name: "register",
        title: "Register content to a profile",
        help: "register <content> <profile> - non-interactive publish",
        unlisted: true,
        requires_vault: true,
        input: &[
            InputSpec {
                name: "content",
                resolve: None,
            },
            InputSpec {
                name: "profile",
                resolve: None,
            },
        ],
        handler: commands::publish::register_handler,
    },
    Action {
        name: "unpublish",
        title: "Unpublish content from a profile",
        help: "unpublish [profile] [content] - remove content from a profile",
        unlisted: false,
        requires_vault: true,
        input: &[
            InputSpec {
                name: "profile",
                resolve: Some(commands::unpublish::resolve_profile),
            },
            InputSpec {
                name: "content",
                resolve: Some(commands::unpublish::resolve_content),
            },
        ],
        handler: commands::unpublish::handler,
    },
    Action {
        name: "follow",
        title: "Follow a profile",
        help: "follow [url] - follow another profile from your local profile",
        unlisted: false,
        requires_vault: true,
        input: &[InputSpec {
            name: "url",
            resolve: Some(commands::follow::resolve_url),
        }],
        handler: commands::follow::handler,
    },
    Action {
        name: "unfollow",
        title: "Unfollow a profile",
        help: "unfollow [url] - stop following a profile",
        unlisted: false,
        requires_vault: true,
        input: &[InputSpec {
            name: "url",
            resolve: Some(commands::unfollow::resolve_url),
        }],
        handler: commands::unfollow::handler,
    },
    Action {
        name: "config",
        title: "Configure",
        help: "config [key] [value] - read or write a CLI setting",
        unlisted: true,
        requires_vault: false,
        input: &[
            InputSpec {
                name: "key",
                resolve: None,
            },
            InputSpec {
                name: "value",
                resolve: None,
            },
        ],
        handler: commands::config::handler,
    },
    Action {
        name: "completions",
        title: "Shell completions",
        help: "completions [shell] - print a shell completion script",
        unlisted: true,
        requires_vault: false,
        input: &[InputSpec {
            name: "shell",
            resolve: Some(commands::completions::resolve_shell),
        }],
        handler: commands::completions::handler,
    },
    Action {
        name: "help",
        title: "Help",
        help: "help [action] - describe an action, or list them all",
        unlisted: true,
        requires_vault: false,
        input: &[InputSpec {
            name: "action",
            resolve: None,
        }],
        handler: commands::help::handler,
    },
];

/// All registered actions, in registration order.
pub fn registry() -> &'static [Action] {
    ACTIONS
}

/// Find an action by invocation name.
pub fn lookup(name: &str) -> Option<&'static Action> {
    ACTIONS.iter().find(|action| action.name == name)
}

/// Actions shown in the menu, in registration order.
pub fn visible() -> impl Iterator<Item = &'static Action> {
    ACTIONS.iter().filter(|action| !action.unlisted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = registry().iter().map(|a| a.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), registry().len());
    }

    #[test]
    fn test_menu_order_is_registration_order() {
        let visible: Vec<_> = visible().map(|a| a.name).collect();
        assert_eq!(
            visible,
            vec![
                "create",
                "read",
                "update",
                "delete",
                "publish",
                "unpublish",
                "follow",
                "unfollow"
            ]
        );
    }

    #[test]
    fn test_lookup_finds_unlisted_actions() {
        assert!(lookup("path").is_some());
        assert!(lookup("config").is_some());
        assert!(lookup("nope").is_none());
    }

    #[test]
    fn test_vault_requirements() {
        assert!(lookup("create").unwrap().requires_vault);
        assert!(!lookup("path").unwrap().requires_vault);
        assert!(!lookup("config").unwrap().requires_vault);
        assert!(!lookup("completions").unwrap().requires_vault);
    }
}
