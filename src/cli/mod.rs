//! Command-line surface: argument parsing and print mode.

mod args;
pub mod print;
mod prompts;

pub use args::Cli;
