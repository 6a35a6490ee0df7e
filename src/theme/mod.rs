//! Light/dark theme selection.
//!
//! The host preference is read once, through an injected query, when the
//! controller is built. Nothing is persisted.

mod palette;

use std::env;

use clap::ValueEnum;
use tracing::info;

pub use palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::LIGHT,
            Theme::Dark => Palette::DARK,
        }
    }
}

/// Host capability: does the user prefer a dark color scheme?
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> bool;
}

/// An explicit theme (from `--theme`) answers the query directly.
impl ColorSchemeQuery for Theme {
    fn prefers_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

/// Terminal preference from `COLORFGBG` ("fg;bg" or "fg;default;bg").
pub struct TerminalColorScheme {
    colorfgbg: Option<String>,
}

impl TerminalColorScheme {
    pub fn new(colorfgbg: Option<String>) -> Self {
        Self { colorfgbg }
    }

    pub fn from_env() -> Self {
        Self::new(env::var("COLORFGBG").ok())
    }
}

impl ColorSchemeQuery for TerminalColorScheme {
    /// Background indexes 0-6 and 8 are the dark half of the 16-colour
    /// palette. Anything unparseable counts as light.
    fn prefers_dark(&self) -> bool {
        let Some(value) = self.colorfgbg.as_deref() else {
            return false;
        };
        match value.rsplit(';').next().map(str::trim).map(str::parse::<u8>) {
            Some(Ok(bg)) => bg <= 6 || bg == 8,
            _ => false,
        }
    }
}

pub struct ThemeController {
    theme: Theme,
}

impl ThemeController {
    pub fn new(query: &dyn ColorSchemeQuery) -> Self {
        let theme = if query.prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        };
        Self { theme }
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        info!(theme = self.theme.label(), "theme switched");
        self.theme
    }
}
