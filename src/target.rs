//! Hidden target generation.

use rand::{Rng, seq::SliceRandom};

use crate::{config::MatchPolicy, digits::DigitString};

/// Draws a target of `digit_count` digits.
///
/// `Unique` takes the head of a shuffled `0..=9`, so no digit repeats and
/// every digit is equally likely at every index. `Multiset` draws each
/// index independently.
pub fn generate<R: Rng + ?Sized>(digit_count: usize, policy: MatchPolicy, rng: &mut R) -> DigitString {
    let digits = match policy {
        MatchPolicy::Unique => {
            let mut pool: Vec<u8> = (0..10).collect();
            pool.shuffle(rng);
            pool.truncate(digit_count);
            pool
        }
        MatchPolicy::Multiset => (0..digit_count).map(|_| rng.random_range(0..10u8)).collect(),
    };

    DigitString::from_digits(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_unique_targets_never_repeat() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 3..=6 {
            for _ in 0..200 {
                let target = generate(n, MatchPolicy::Unique, &mut rng);
                assert_eq!(target.len(), n);
                assert!(!target.has_repeats(), "repeat in {}", target);
            }
        }
    }

    #[test]
    fn test_multiset_targets_eventually_repeat() {
        let mut rng = StdRng::seed_from_u64(11);
        let repeated = (0..500)
            .map(|_| generate(6, MatchPolicy::Multiset, &mut rng))
            .any(|t| t.has_repeats());
        assert!(repeated);
    }

    #[test]
    fn test_every_digit_appears() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 10];
        for _ in 0..200 {
            for &d in generate(3, MatchPolicy::Unique, &mut rng).digits() {
                seen[d as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_same_seed_same_target() {
        let a = generate(5, MatchPolicy::Multiset, &mut StdRng::seed_from_u64(42));
        let b = generate(5, MatchPolicy::Multiset, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
