//! Character pool building for secret generation.

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// One of the four selectable character classes, in pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Special,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Numbers => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Uppercase",
            CharClass::Lowercase => "Lowercase",
            CharClass::Numbers => "Numbers",
            CharClass::Special => "Special Characters",
        }
    }
}

/// Inclusion flags for the four character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
}

impl CharClasses {
    #[cfg(test)]
    pub fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            numbers: false,
            special: false,
        }
    }

    pub fn get(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Numbers => self.numbers,
            CharClass::Special => self.special,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        let flag = match class {
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Numbers => &mut self.numbers,
            CharClass::Special => &mut self.special,
        };
        *flag = enabled;
    }

    pub fn enabled(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.get(*c))
    }
}

impl Default for CharClasses {
    fn default() -> Self {
        Self {
            uppercase: false,
            lowercase: true,
            numbers: false,
            special: true,
        }
    }
}

/// The characters eligible for sampling. ASCII only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool(Vec<u8>);

impl Pool {
    /// Concatenate the enabled classes in fixed order. No class enabled gives
    /// an empty pool.
    pub fn build(classes: &CharClasses) -> Self {
        let mut chars = Vec::with_capacity(
            classes.enabled().map(|c| c.chars().len()).sum::<usize>(),
        );
        for class in classes.enabled() {
            chars.extend_from_slice(class.chars());
        }
        Pool(chars)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.0.contains(&(c as u8))
    }
}
