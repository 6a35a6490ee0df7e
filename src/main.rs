use std::process::ExitCode;

use clap::Parser;
use tracing::error;

mod cli;
mod clipboard;
mod config;
mod error;
mod exits;
mod logging;
mod rand;
mod secret;
mod terminal;
mod theme;
mod tui;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let _log_guard = match logging::init(cli.log_dir.as_deref(), &cli.log_level, cli.print) {
        Ok(guard) => guard,
        Err(e) => {
            terminal::print_error(&e.to_string());
            None
        }
    };

    let result = if cli.print {
        cli::print::run(&cli)
    } else {
        cli.configuration()
            .and_then(|config| tui::run(config, &*cli.color_scheme()))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "exiting with error");
            terminal::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
