//! Character pools and secret generation.

mod charset;
mod generate;

use std::fmt;

use zeroize::Zeroizing;

pub use charset::{CharClass, CharClasses, Pool};
pub use generate::generate;

/// A generated secret. Wiped from memory on drop.
pub struct Secret(Zeroizing<String>);

impl Secret {
    pub fn new(value: String) -> Self {
        Secret(Zeroizing::new(value))
    }

    pub fn empty() -> Self {
        Self::new(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters. Pools are ASCII so this equals the byte length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(<{} chars>)", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_redacted() {
        let secret = Secret::new("hunter22".to_string());
        let shown = format!("{secret:?}");
        assert!(!shown.contains("hunter22"));
        assert_eq!(shown, "Secret(<8 chars>)");
    }

    #[test]
    fn empty_secret() {
        let secret = Secret::empty();
        assert!(secret.is_empty());
        assert_eq!(secret.as_str(), "");
    }
}
