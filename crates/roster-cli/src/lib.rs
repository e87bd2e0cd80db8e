//! Command-line front end for the Roster employee manager.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod settings;
