//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{Configuration, Length};
use crate::error::Result;
use crate::secret::CharClasses;
use crate::theme::{ColorSchemeQuery, TerminalColorScheme, Theme};

#[derive(Debug, Parser)]
#[command(
    name = "secretgen",
    version,
    about = "Random secret generator with a live terminal panel"
)]
pub struct Cli {
    /// Secret length
    #[arg(short, long, env = "SECRETGEN_LENGTH", default_value_t = 8,
          value_parser = clap::value_parser!(u8).range(4..=50))]
    pub length: u8,

    /// Include A-Z
    #[arg(long, env = "SECRETGEN_UPPERCASE", default_value_t = false, action = ArgAction::Set)]
    pub uppercase: bool,

    /// Include a-z
    #[arg(long, env = "SECRETGEN_LOWERCASE", default_value_t = true, action = ArgAction::Set)]
    pub lowercase: bool,

    /// Include 0-9
    #[arg(long, env = "SECRETGEN_NUMBERS", default_value_t = false, action = ArgAction::Set)]
    pub numbers: bool,

    /// Include symbols
    #[arg(long, env = "SECRETGEN_SPECIAL", default_value_t = true, action = ArgAction::Set)]
    pub special: bool,

    /// Start in this theme instead of following COLORFGBG
    #[arg(long, env = "SECRETGEN_THEME", value_enum)]
    pub theme: Option<Theme>,

    /// Print secrets to stdout instead of opening the panel
    #[arg(short, long)]
    pub print: bool,

    /// Number of secrets to print
    #[arg(short, long, default_value_t = 1, requires = "print")]
    pub number: usize,

    /// Also copy the last printed secret to the clipboard
    #[arg(short = 'b', long = "board", requires = "print")]
    pub copy: bool,

    /// Write logs to secretgen.log in this directory
    #[arg(long, env = "SECRETGEN_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log filter, overridden by SECRETGEN_LOG
    #[arg(long, env = "SECRETGEN_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn configuration(&self) -> Result<Configuration> {
        Ok(Configuration {
            length: Length::new(self.length as usize)?,
            classes: CharClasses {
                uppercase: self.uppercase,
                lowercase: self.lowercase,
                numbers: self.numbers,
                special: self.special,
            },
        })
    }

    /// Host theme query: `--theme` if given, else the terminal's colours.
    pub fn color_scheme(&self) -> Box<dyn ColorSchemeQuery> {
        match self.theme {
            Some(theme) => Box::new(theme),
            None => Box::new(TerminalColorScheme::from_env()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("secretgen").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_give_default_configuration() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.configuration().unwrap(), Configuration::default());
        assert!(!cli.print);
        assert_eq!(cli.number, 1);
    }

    #[test]
    fn class_flags_take_values() {
        let cli = parse(&["--uppercase", "true", "--special", "false", "-l", "20"]).unwrap();
        let config = cli.configuration().unwrap();
        assert_eq!(config.length.get(), 20);
        assert!(config.classes.uppercase && config.classes.lowercase);
        assert!(!config.classes.special);
    }

    #[test]
    fn length_outside_range_is_rejected() {
        assert!(parse(&["-l", "3"]).is_err());
        assert!(parse(&["-l", "51"]).is_err());
        assert!(parse(&["-l", "50"]).is_ok());
    }

    #[test]
    fn print_options_need_print() {
        assert!(parse(&["-n", "5"]).is_err());
        assert!(parse(&["-b"]).is_err());
        let cli = parse(&["-p", "-n", "5", "-b"]).unwrap();
        assert!(cli.print && cli.copy);
        assert_eq!(cli.number, 5);
    }

    #[test]
    fn explicit_theme_wins() {
        let cli = parse(&["--theme", "dark"]).unwrap();
        assert!(cli.color_scheme().prefers_dark());
        let cli = parse(&["--theme", "light"]).unwrap();
        assert!(!cli.color_scheme().prefers_dark());
    }
}
