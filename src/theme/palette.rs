//! ANSI colour sets for the two themes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub dim: &'static str,
    pub accent: &'static str,
    pub copied: &'static str,
    pub error: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: "\x1b[48;5;255m",
        text: "\x1b[38;5;236m",
        dim: "\x1b[38;5;245m",
        accent: "\x1b[38;5;30m",
        copied: "\x1b[38;5;23m",
        error: "\x1b[38;5;160m",
    };

    pub const DARK: Palette = Palette {
        background: "\x1b[48;5;235m",
        text: "\x1b[38;5;252m",
        dim: "\x1b[38;5;242m",
        accent: "\x1b[38;5;43m",
        copied: "\x1b[38;5;30m",
        error: "\x1b[38;5;9m",
    };

    /// `text` in `color`, returning to the base text colour.
    pub fn paint(&self, color: &str, text: &str) -> String {
        format!("{color}{text}{}", self.text)
    }
}
