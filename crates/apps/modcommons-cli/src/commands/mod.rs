//! Action handlers and their interactive resolvers.

pub mod completions;
pub mod config;
pub mod create;
pub mod delete;
pub mod follow;
pub mod help;
pub mod list;
pub mod path;
pub mod publish;
pub mod read;
pub mod unfollow;
pub mod unpublish;
pub mod update;
