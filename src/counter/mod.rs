// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Odometer-style choice counter.
//!
//! A candidate walk is encoded as a fixed-length sequence of digits, one per
//! edge traversal, each digit selecting which neighbor slot to take next.
//! The counter enumerates the whole decision space in base-`radix` counting
//! order (rightmost digit fastest) and supports one pruning primitive:
//! maxing out a suffix so the next increment carries past the entire subtree
//! below the current prefix.
//!
//! Pruning this way turns a depth-first subtree skip into a cheap suffix
//! mutation, with the actual skip work amortized into subsequent
//! [`ChoiceCounter::increment`] calls. No stack, no recursion.

/// Fixed-length mixed-radix counter over neighbor-slot choices.
///
/// Allocated once per search and mutated in place for its whole lifetime.
#[derive(Debug, Clone)]
pub struct ChoiceCounter {
    digits: Vec<u8>,
    radix: u8,
}

impl ChoiceCounter {
    /// Create a counter of `len` digits, each ranging over `0..radix`,
    /// initialized to all zeros.
    pub fn new(len: usize, radix: u8) -> Self {
        assert!(radix >= 2, "radix must be at least 2");
        Self {
            digits: vec![0; len],
            radix,
        }
    }

    /// The current digit sequence.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Advance to the next counter value in base-`radix` counting order.
    ///
    /// Finds the rightmost digit below its maximum, increments it, and
    /// resets every digit to its right to zero. Returns `false` exactly
    /// once, when every digit is already at its maximum: the space is
    /// exhausted.
    pub fn increment(&mut self) -> bool {
        let max = self.radix - 1;
        for i in (0..self.digits.len()).rev() {
            if self.digits[i] < max {
                self.digits[i] += 1;
                for digit in &mut self.digits[i + 1..] {
                    *digit = 0;
                }
                return true;
            }
        }
        false
    }

    /// Max out every digit at index >= `position`.
    ///
    /// Called when the walk prefix ending at `position` is provably dead:
    /// the next [`increment`](Self::increment) then carries into the digit
    /// before `position`, skipping every remaining suffix under the current
    /// prefix. Digits before `position` are never touched.
    pub fn prune_from(&mut self, position: usize) {
        let max = self.radix - 1;
        for digit in &mut self.digits[position..] {
            *digit = max;
        }
    }

    /// The lowest position holding a digit in the upper half of the radix,
    /// if any.
    ///
    /// A coarse progress indicator for the long icosahedron run: the
    /// enumeration advances leftward through the space, so this frontier
    /// creeps toward zero as the search proceeds.
    pub fn frontier(&self) -> Option<usize> {
        let mid = (self.radix - 1) / 2;
        self.digits.iter().position(|&d| d > mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_zero() {
        let counter = ChoiceCounter::new(5, 5);
        assert_eq!(counter.digits(), &[0, 0, 0, 0, 0]);
        assert_eq!(counter.len(), 5);
    }

    #[test]
    fn test_increment_counts_in_base_radix() {
        let mut counter = ChoiceCounter::new(3, 3);
        assert!(counter.increment());
        assert_eq!(counter.digits(), &[0, 0, 1]);
        assert!(counter.increment());
        assert_eq!(counter.digits(), &[0, 0, 2]);
        assert!(counter.increment());
        assert_eq!(counter.digits(), &[0, 1, 0]);
    }

    #[test]
    fn test_increment_visits_every_value_once() {
        let mut counter = ChoiceCounter::new(4, 3);
        let mut seen = vec![counter.digits().to_vec()];
        while counter.increment() {
            seen.push(counter.digits().to_vec());
        }
        assert_eq!(seen.len(), 3usize.pow(4));
        // Strictly increasing lexicographic order implies no repeats.
        for pair in seen.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(counter.digits(), &[2, 2, 2, 2]);
    }

    #[test]
    fn test_overflow_returns_false_exactly_once() {
        let mut counter = ChoiceCounter::new(2, 5);
        counter.prune_from(0);
        assert!(!counter.increment());
        assert_eq!(counter.digits(), &[4, 4]);
    }

    #[test]
    fn test_prune_from_maxes_suffix_only() {
        let mut counter = ChoiceCounter::new(5, 5);
        for _ in 0..7 {
            counter.increment();
        }
        assert_eq!(counter.digits(), &[0, 0, 0, 1, 2]);
        counter.prune_from(2);
        assert_eq!(counter.digits(), &[0, 0, 4, 4, 4]);
        assert!(counter.increment());
        assert_eq!(counter.digits(), &[0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_prune_at_position_zero_exhausts() {
        // Pruning the very first decision must roll the whole counter over
        // on the next increment, not crash or loop.
        let mut counter = ChoiceCounter::new(3, 5);
        assert!(counter.increment());
        counter.prune_from(0);
        assert!(!counter.increment());
    }

    #[test]
    fn test_prune_past_end_is_a_noop() {
        let mut counter = ChoiceCounter::new(3, 5);
        counter.increment();
        let before = counter.digits().to_vec();
        counter.prune_from(3);
        assert_eq!(counter.digits(), &before[..]);
    }

    fn as_value(digits: &[u8], radix: u8) -> u64 {
        digits
            .iter()
            .fold(0u64, |acc, &d| acc * u64::from(radix) + u64::from(d))
    }

    fn digit_vec(radix: u8, len: usize) -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0..radix, len)
    }

    proptest! {
        #[test]
        fn prop_increment_is_base_radix_successor(
            (radix, digits) in (2u8..6, 1usize..10)
                .prop_flat_map(|(r, l)| (Just(r), digit_vec(r, l))),
        ) {
            let mut counter = ChoiceCounter::new(digits.len(), radix);
            counter.digits.copy_from_slice(&digits);
            let before = as_value(&digits, radix);
            let space = u64::from(radix).pow(digits.len() as u32);
            if counter.increment() {
                prop_assert_eq!(as_value(counter.digits(), radix), before + 1);
            } else {
                prop_assert_eq!(before, space - 1);
            }
        }

        #[test]
        fn prop_prune_then_increment_skips_the_whole_subtree(
            (radix, digits, position) in (2u8..6, 1usize..10)
                .prop_flat_map(|(r, l)| (Just(r), digit_vec(r, l), 0..l)),
        ) {
            let mut counter = ChoiceCounter::new(digits.len(), radix);
            counter.digits.copy_from_slice(&digits);
            counter.prune_from(position);
            let pruned_prefix = digits[..position].to_vec();
            if counter.increment() {
                // The new value's prefix must be strictly greater than the
                // pruned prefix: nothing under it is ever revisited.
                prop_assert!(counter.digits()[..position] > pruned_prefix[..]);
            } else {
                // Overflow: the pruned prefix was already all-max.
                prop_assert!(pruned_prefix.iter().all(|&d| d == radix - 1));
            }
        }
    }
}
