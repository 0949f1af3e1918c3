pub mod cli;
pub mod commands;
pub mod delivery;
pub mod error;
pub mod logging;
pub mod output;
pub mod settings;
pub mod source;
