//! Interactive CLI for the module commons.
//!
//! The binary is a thin action dispatcher: a static [`actions`] registry
//! maps action names to input declarations and handlers, [`resolve`]
//! fills missing inputs from positionals, flags and interactive
//! resolvers, and [`dispatch`] runs the selected handler inside a vault
//! session that is always torn down, success or failure.

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config_store;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod prompt;
pub mod resolve;
pub mod session;

pub use cli::Cli;
pub use error::{CliError, CliResult};
