//! Secret generation.

use tracing::warn;

use super::{Pool, Secret};
use crate::rand::RandomSource;

/// Draw `length` characters from `pool`, uniformly and with replacement.
///
/// An empty pool has nothing to draw from and yields the empty secret.
pub fn generate<R: RandomSource + ?Sized>(pool: &Pool, length: usize, rng: &mut R) -> Secret {
    if pool.is_empty() {
        warn!(length, "no character classes enabled, secret is empty");
        return Secret::empty();
    }

    let chars = pool.as_bytes();
    let mut buf = String::with_capacity(length);
    for _ in 0..length {
        let c = chars[rng.below(chars.len())] as char;
        debug_assert!(pool.contains(c));
        buf.push(c);
    }
    Secret::new(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::Rand;
    use crate::rand::tests::Scripted;
    use crate::secret::{CharClass, CharClasses};
    use proptest::prelude::*;

    #[test]
    fn picks_indexes_from_the_source() {
        let pool = Pool::build(&CharClasses {
            uppercase: false,
            lowercase: false,
            numbers: true,
            special: false,
        });
        let mut rng = Scripted::new(&[0, 9, 3, 13]);
        assert_eq!(generate(&pool, 4, &mut rng).as_str(), "0933");
    }

    #[test]
    fn empty_pool_gives_empty_secret() {
        let pool = Pool::build(&CharClasses::none());
        let mut rng = Rand::new();
        let secret = generate(&pool, 12, &mut rng);
        assert!(secret.is_empty());
        assert_eq!(secret.len(), 0);
    }

    #[test]
    fn single_class_only_samples_that_class() {
        for class in CharClass::ALL {
            let mut classes = CharClasses::none();
            classes.set(class, true);
            let pool = Pool::build(&classes);
            let secret = generate(&pool, 50, &mut Rand::new());
            assert!(secret.as_str().bytes().all(|b| class.chars().contains(&b)));
        }
    }

    proptest! {
        #[test]
        fn length_and_membership_hold(
            u: bool, l: bool, n: bool, s: bool, length in 4usize..=50
        ) {
            let classes = CharClasses { uppercase: u, lowercase: l, numbers: n, special: s };
            prop_assume!(classes.enabled().count() > 0);
            let pool = Pool::build(&classes);
            let secret = generate(&pool, length, &mut Rand::new());
            prop_assert_eq!(secret.len(), length);
            prop_assert!(secret.as_str().chars().all(|c| pool.contains(c)));
        }
    }
}
