//! Live configuration with its derived pool and secret.
//!
//! Every setter recomputes synchronously, so `secret()` always matches
//! `configuration()`.

use tracing::debug;

use super::{Configuration, Length};
use crate::rand::RandomSource;
use crate::secret::{self, CharClass, Pool, Secret};

pub struct ConfigurationState<R> {
    config: Configuration,
    pool: Pool,
    secret: Secret,
    rng: R,
}

impl<R: RandomSource> ConfigurationState<R> {
    pub fn new(config: Configuration, mut rng: R) -> Self {
        let pool = Pool::build(&config.classes);
        let secret = secret::generate(&pool, config.length.get(), &mut rng);
        Self {
            config,
            pool,
            secret,
            rng,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    pub fn set_length(&mut self, length: Length) {
        self.config.length = length;
        self.recompute();
    }

    pub fn step_length(&mut self, delta: isize) {
        self.set_length(self.config.length.step(delta));
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        self.config.classes.set(class, enabled);
        self.recompute();
    }

    pub fn toggle_class(&mut self, class: CharClass) {
        let enabled = !self.config.classes.get(class);
        self.set_class(class, enabled);
    }

    /// New secret from the unchanged configuration.
    pub fn regenerate(&mut self) {
        self.recompute();
    }

    fn recompute(&mut self) {
        self.pool = Pool::build(&self.config.classes);
        self.secret = secret::generate(&self.pool, self.config.length.get(), &mut self.rng);
        debug!(
            length = self.config.length.get(),
            pool = self.pool.len(),
            "secret regenerated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::Rand;
    use crate::rand::tests::Scripted;
    use crate::secret::CharClasses;

    fn state() -> ConfigurationState<Rand> {
        ConfigurationState::new(Configuration::default(), Rand::new())
    }

    fn assert_consistent<R: RandomSource>(state: &ConfigurationState<R>) {
        let expected = Pool::build(&state.configuration().classes);
        assert_eq!(state.pool(), &expected);
        if expected.is_empty() {
            assert!(state.secret().is_empty());
        } else {
            assert_eq!(state.secret().len(), state.configuration().length.get());
            assert!(state.secret().as_str().chars().all(|c| expected.contains(c)));
        }
    }

    #[test]
    fn initial_secret_matches_defaults() {
        let s = state();
        assert_eq!(s.secret().len(), 8);
        assert_consistent(&s);
    }

    #[test]
    fn every_length_is_honoured() {
        let mut s = state();
        for n in Length::MIN..=Length::MAX {
            s.set_length(Length::new(n).unwrap());
            assert_eq!(s.secret().len(), n);
        }
    }

    #[test]
    fn each_flag_change_recomputes() {
        let mut s = state();
        for class in CharClass::ALL {
            s.toggle_class(class);
            assert_consistent(&s);
            s.toggle_class(class);
            assert_consistent(&s);
        }
    }

    #[test]
    fn enabling_numbers_only_samples_digits() {
        let mut s = state();
        s.set_class(CharClass::Lowercase, false);
        s.set_class(CharClass::Special, false);
        s.set_class(CharClass::Numbers, true);
        assert_eq!(s.pool().as_bytes(), b"0123456789");
        assert!(s.secret().as_str().bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn all_flags_off_is_not_fatal() {
        let mut s = state();
        for class in CharClass::ALL {
            s.set_class(class, false);
        }
        assert_eq!(s.configuration().classes, CharClasses::none());
        assert!(s.pool().is_empty());
        assert!(s.secret().is_empty());
        s.regenerate();
        assert!(s.secret().is_empty());
    }

    #[test]
    fn regenerate_replaces_secret() {
        // Two scripted passes over the digit pool give different strings.
        let config = Configuration {
            length: Length::new(4).unwrap(),
            classes: CharClasses {
                uppercase: false,
                lowercase: false,
                numbers: true,
                special: false,
            },
        };
        let mut s = ConfigurationState::new(config, Scripted::new(&[1, 2, 3, 4, 5, 6, 7, 8]));
        assert_eq!(s.secret().as_str(), "1234");
        s.regenerate();
        assert_eq!(s.secret().as_str(), "5678");
    }

    #[test]
    fn step_length_saturates_and_recomputes() {
        let mut s = state();
        s.set_length(Length::max());
        s.step_length(1);
        assert_eq!(s.secret().len(), Length::MAX);
        s.step_length(-100);
        assert_eq!(s.secret().len(), Length::MIN);
    }
}
