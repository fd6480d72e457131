//! Fonty command line front end

pub mod cli;
pub mod commands;

pub use cli::{AdaptArgs, Cli, Commands, UrlArgs};
