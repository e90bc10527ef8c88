/// CLI layer: argument parsing, dispatch and result reporting.
pub mod args;
pub mod commands;
pub mod output;

pub use args::{Cli, Command};
pub use commands::dispatch;
pub use output::{write_error, write_success};
