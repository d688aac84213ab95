//! Guess evaluation against the hidden target.

use serde::{Deserialize, Serialize};

use crate::{config::MatchPolicy, digits::DigitString};

/// Per-index feedback for a guess digit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionTag {
    /// Right digit, right index.
    Locked,
    /// Digit present elsewhere in the target.
    Unlocked,
    None,
}

/// Mode-independent outcome of comparing one guess with the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMatchResult {
    correct_positions: usize,
    tags: Vec<PositionTag>,
}

impl RawMatchResult {
    pub fn correct_positions(&self) -> usize {
        self.correct_positions
    }

    pub fn tags(&self) -> &[PositionTag] {
        &self.tags
    }

    pub fn digit_count(&self) -> usize {
        self.tags.len()
    }

    pub fn locked_count(&self) -> usize {
        self.count(PositionTag::Locked)
    }

    pub fn unlocked_count(&self) -> usize {
        self.count(PositionTag::Unlocked)
    }

    /// Every index locked.
    pub fn is_solved(&self) -> bool {
        self.correct_positions == self.tags.len()
    }

    fn count(&self, tag: PositionTag) -> usize {
        self.tags.iter().filter(|&&t| t == tag).count()
    }
}

/// Compares `guess` with `target`.
///
/// Both strings must have the same length and the guess must already obey
/// `policy`.
pub fn evaluate(target: &DigitString, guess: &DigitString, policy: MatchPolicy) -> RawMatchResult {
    debug_assert_eq!(target.len(), guess.len());

    match policy {
        MatchPolicy::Unique => evaluate_unique(target.digits(), guess.digits()),
        MatchPolicy::Multiset => evaluate_multiset(target.digits(), guess.digits()),
    }
}

// No digit occurs twice on either side, so a membership test is exact.
fn evaluate_unique(target: &[u8], guess: &[u8]) -> RawMatchResult {
    let mut correct_positions = 0;

    let tags = guess
        .iter()
        .zip(target)
        .map(|(g, t)| {
            if g == t {
                correct_positions += 1;
                PositionTag::Locked
            } else if target.contains(g) {
                PositionTag::Unlocked
            } else {
                PositionTag::None
            }
        })
        .collect();

    RawMatchResult {
        correct_positions,
        tags,
    }
}

// Each target index can credit at most one guess index.
fn evaluate_multiset(target: &[u8], guess: &[u8]) -> RawMatchResult {
    let n = guess.len();
    let mut tags = vec![PositionTag::None; n];
    let mut target_used = vec![false; n];
    let mut correct_positions = 0;

    // Exact pass
    for i in 0..n {
        if guess[i] == target[i] {
            tags[i] = PositionTag::Locked;
            target_used[i] = true;
            correct_positions += 1;
        }
    }

    // Displaced pass, first free target index wins
    for i in 0..n {
        if tags[i] == PositionTag::Locked {
            continue;
        }

        let free = (0..n).find(|&j| !target_used[j] && target[j] == guess[i]);
        if let Some(j) = free {
            tags[i] = PositionTag::Unlocked;
            target_used[j] = true;
        }
    }

    RawMatchResult {
        correct_positions,
        tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    use crate::target;

    use super::PositionTag::{Locked as L, None as N, Unlocked as U};

    fn eval(target: &str, guess: &str, policy: MatchPolicy) -> RawMatchResult {
        let t = DigitString::parse(target, target.len(), policy).unwrap();
        let g = DigitString::parse(guess, guess.len(), policy).unwrap();
        evaluate(&t, &g, policy)
    }

    #[test]
    fn test_exact_guess() {
        let r = eval("1234", "1234", MatchPolicy::Unique);
        assert_eq!(r.correct_positions(), 4);
        assert_eq!(r.tags(), &[L, L, L, L]);
        assert!(r.is_solved());
    }

    #[test]
    fn test_reversed_guess() {
        let r = eval("1234", "4321", MatchPolicy::Unique);
        assert_eq!(r.correct_positions(), 0);
        assert_eq!(r.tags(), &[U, U, U, U]);
    }

    #[test]
    fn test_partial_swap() {
        let r = eval("1234", "1243", MatchPolicy::Unique);
        assert_eq!(r.correct_positions(), 2);
        assert_eq!(r.tags(), &[L, L, U, U]);
    }

    #[test]
    fn test_no_overlap() {
        let r = eval("1234", "5678", MatchPolicy::Unique);
        assert_eq!(r.correct_positions(), 0);
        assert_eq!(r.tags(), &[N, N, N, N]);
    }

    #[test]
    fn test_repeating_digits_consume_once() {
        let r = eval("112", "211", MatchPolicy::Multiset);
        assert_eq!(r.tags(), &[U, L, U]);
        assert_eq!(r.correct_positions(), 1);
    }

    #[test]
    fn test_surplus_guess_digits_get_nothing() {
        // Only one 7 in the target: one credit, leftmost free guess index.
        let r = eval("7012", "3777", MatchPolicy::Multiset);
        assert_eq!(r.tags(), &[N, U, N, N]);

        // The locked 7 uses up the only 7.
        let r = eval("1724", "7777", MatchPolicy::Multiset);
        assert_eq!(r.tags(), &[N, L, N, N]);
        assert_eq!(r.correct_positions(), 1);
    }

    #[test]
    fn test_surplus_target_digits() {
        let r = eval("555", "512", MatchPolicy::Multiset);
        assert_eq!(r.tags(), &[L, N, N]);
    }

    #[test]
    fn test_policies_agree_on_unique_inputs() {
        let mut rng = StdRng::seed_from_u64(99);
        for n in 3..=6 {
            for _ in 0..300 {
                let t = target::generate(n, MatchPolicy::Unique, &mut rng);
                let g = target::generate(n, MatchPolicy::Unique, &mut rng);
                assert_eq!(
                    evaluate(&t, &g, MatchPolicy::Unique),
                    evaluate(&t, &g, MatchPolicy::Multiset),
                    "target {} guess {}",
                    t,
                    g
                );
            }
        }
    }

    #[test]
    fn test_result_invariants_hold() {
        let mut rng = StdRng::seed_from_u64(5);
        for n in 3..=6 {
            for _ in 0..500 {
                let t = target::generate(n, MatchPolicy::Multiset, &mut rng);
                let g = target::generate(n, MatchPolicy::Multiset, &mut rng);
                let r = evaluate(&t, &g, MatchPolicy::Multiset);

                assert_eq!(r.digit_count(), n);
                assert!(r.correct_positions() <= n);
                assert_eq!(r.locked_count(), r.correct_positions());
                assert!(r.locked_count() + r.unlocked_count() <= n);
                assert_eq!(r.is_solved(), t == g);
                assert_eq!(r, evaluate(&t, &g, MatchPolicy::Multiset));
            }
        }
    }
}
