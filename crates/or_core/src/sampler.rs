//! Unique random selection from a roster.
//!
//! The selection is drawn by shuffling a copy of the whole roster and
//! truncating, so both the chosen subset and its output order are uniform.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Operator, Roster};

/// Draw `count` distinct operators from `roster`, uniformly at random.
///
/// Runs an unbiased Fisher-Yates shuffle over a copy of the roster
/// (`SliceRandom::shuffle`), then keeps the first `count` entries. The
/// input roster is never mutated.
///
/// Degenerate inputs are defined, not errors:
/// - an empty roster yields an empty selection
/// - a roster smaller than `count` yields every operator it has, in
///   shuffled order, with a warning logged
/// - `count == 0` yields an empty selection
pub fn sample_unique<R: Rng + ?Sized>(
    roster: &Roster,
    count: usize,
    rng: &mut R,
) -> Vec<Operator> {
    if roster.is_empty() {
        return Vec::new();
    }

    let mut picked: Vec<Operator> = roster.operators().to_vec();
    picked.shuffle(rng);

    if picked.len() < count {
        log::warn!(
            "not enough operators ({}) to draw {}; returning all of them",
            picked.len(),
            count
        );
        return picked;
    }

    picked.truncate(count);
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn roster_of(len: usize) -> Roster {
        (0..len)
            .map(|i| Operator::new(format!("op-{i}"), format!("icons/op-{i}.png")))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn draws_exactly_count_operators() {
        let roster = roster_of(10);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let picked = sample_unique(&roster, 5, &mut rng);
        assert_eq!(picked.len(), 5);
    }

    #[test]
    fn selection_has_no_duplicates() {
        let roster = roster_of(10);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..100 {
            let picked = sample_unique(&roster, 5, &mut rng);
            let names: HashSet<&str> = picked.iter().map(|op| op.name.as_str()).collect();
            assert_eq!(names.len(), picked.len());
        }
    }

    #[test]
    fn undersized_roster_returns_every_operator_once() {
        let roster = roster_of(3);
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let picked = sample_unique(&roster, 5, &mut rng);
        assert_eq!(picked.len(), 3);

        let names: HashSet<&str> = picked.iter().map(|op| op.name.as_str()).collect();
        for op in roster.iter() {
            assert!(names.contains(op.name.as_str()));
        }
    }

    #[test]
    fn empty_roster_yields_empty_selection() {
        let roster = Roster::empty();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        assert!(sample_unique(&roster, 0, &mut rng).is_empty());
        assert!(sample_unique(&roster, 5, &mut rng).is_empty());
    }

    #[test]
    fn zero_count_yields_empty_selection() {
        let roster = roster_of(4);
        let mut rng = ChaCha8Rng::seed_from_u64(19);
        assert!(sample_unique(&roster, 0, &mut rng).is_empty());
    }

    #[test]
    fn input_roster_is_not_mutated() {
        let roster = roster_of(6);
        let before = roster.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let _ = sample_unique(&roster, 5, &mut rng);
        assert_eq!(roster, before);
    }

    #[test]
    fn same_seed_draws_same_selection() {
        let roster = roster_of(12);
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(
            sample_unique(&roster, 5, &mut a),
            sample_unique(&roster, 5, &mut b)
        );
    }

    /// Frequency check over a seeded run: with 10 operators and 5 picks,
    /// every operator should be included about half the time, and land in
    /// the first slot about a tenth of the time.
    #[test]
    fn selection_frequencies_are_roughly_uniform() {
        const TRIALS: usize = 10_000;
        let roster = roster_of(10);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let mut inclusion = vec![0usize; roster.len()];
        let mut first_slot = vec![0usize; roster.len()];
        for _ in 0..TRIALS {
            let picked = sample_unique(&roster, 5, &mut rng);
            for (i, op) in picked.iter().enumerate() {
                let idx: usize = op.name["op-".len()..].parse().unwrap();
                inclusion[idx] += 1;
                if i == 0 {
                    first_slot[idx] += 1;
                }
            }
        }

        for &hits in &inclusion {
            let freq = hits as f64 / TRIALS as f64;
            assert!((freq - 0.5).abs() < 0.05, "inclusion frequency {freq} off");
        }
        for &hits in &first_slot {
            let freq = hits as f64 / TRIALS as f64;
            assert!((freq - 0.1).abs() < 0.03, "first-slot frequency {freq} off");
        }
    }

    proptest! {
        #[test]
        fn selection_length_law(len in 0usize..40, count in 0usize..10, seed in any::<u64>()) {
            let roster = roster_of(len);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let picked = sample_unique(&roster, count, &mut rng);
            prop_assert_eq!(picked.len(), count.min(len));
        }

        #[test]
        fn selection_is_duplicate_free_subset(len in 0usize..40, count in 0usize..10, seed in any::<u64>()) {
            let roster = roster_of(len);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let picked = sample_unique(&roster, count, &mut rng);

            let names: HashSet<&str> = picked.iter().map(|op| op.name.as_str()).collect();
            prop_assert_eq!(names.len(), picked.len());
            for op in &picked {
                prop_assert!(roster.iter().any(|r| r == op));
            }
        }
    }
}
