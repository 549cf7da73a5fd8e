// Copyright 2022 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Jacobsthal numbers and the insertion order derived from them.

use tracing::trace;

/// The Jacobsthal numbers `0, 1, 1, 3, 5, 11, 21, ...`.
///
/// `J(k) = J(k - 1) + 2 * J(k - 2)`. Ends once the next value would overflow
/// `usize`.
#[derive(Clone, Debug)]
pub struct Jacobsthal {
    next: Option<usize>,
    after: Option<usize>,
}

impl Jacobsthal {
    /// Starts the sequence at `J(0)`.
    pub const fn new() -> Self {
        Self {
            next: Some(0),
            after: Some(1),
        }
    }
}

impl Default for Jacobsthal {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Jacobsthal {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let val = self.next?;
        let following = self
            .after
            .and_then(|after| val.checked_mul(2).and_then(|double| after.checked_add(double)));

        self.next = self.after;
        self.after = following;

        Some(val)
    }
}

/// Order in which the lesser members `0..n` are inserted.
///
/// Walks the blocks `(J(k - 1), J(k)]` for `k >= 2`, the last one clamped to
/// `n`, emitting each block's zero-based indices from the top down. Indices
/// no block reached (only ever `0`) follow in ascending order. The result is
/// always a permutation of `0..n`.
pub fn insertion_schedule(n: usize) -> Vec<usize> {
    let mut schedule = Vec::with_capacity(n);

    if n == 0 {
        return schedule;
    }

    let mut bounds = Vec::new();
    for j in Jacobsthal::new() {
        bounds.push(j);
        if j >= n {
            break;
        }
    }

    let mut emitted = vec![false; n];

    for block in bounds.windows(2).skip(1) {
        let (low, high) = (block[0], block[1].min(n));

        for i in (low..high).rev() {
            if !emitted[i] {
                emitted[i] = true;
                schedule.push(i);
            }
        }
    }

    schedule.extend((0..n).filter(|&i| !emitted[i]));

    trace!(n, blocks = bounds.len().saturating_sub(2), "insertion schedule");

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jacobsthal_numbers() {
        let vals: Vec<_> = Jacobsthal::new().take(10).collect();

        assert_eq!(vals, [0, 1, 1, 3, 5, 11, 21, 43, 85, 171]);
    }

    #[test]
    fn jacobsthal_ends_before_overflow() {
        let last = Jacobsthal::new().last().unwrap();

        assert!(last > usize::MAX / 4);
    }

    #[test]
    fn schedule_empty() {
        assert!(insertion_schedule(0).is_empty());
    }

    #[test]
    fn schedule_small() {
        assert_eq!(insertion_schedule(1), [0]);
        assert_eq!(insertion_schedule(2), [1, 0]);
        assert_eq!(insertion_schedule(3), [2, 1, 0]);
        assert_eq!(insertion_schedule(4), [2, 1, 3, 0]);
        assert_eq!(insertion_schedule(5), [2, 1, 4, 3, 0]);
    }

    #[test]
    fn schedule_blocks_descend() {
        assert_eq!(
            insertion_schedule(12),
            [2, 1, 4, 3, 10, 9, 8, 7, 6, 5, 11, 0]
        );
    }

    #[test]
    fn schedule_is_permutation() {
        for n in 0..600 {
            let mut schedule = insertion_schedule(n);

            assert_eq!(schedule.len(), n);

            schedule.sort_unstable();

            assert!(schedule.iter().copied().eq(0..n));
        }
    }
}
