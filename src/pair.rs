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

//! Pair formation.

use crate::{sequence::Sequence, Element};

/// Two input-adjacent elements, or the lone trailing one.
///
/// The members of [`Pair::Both`] are kept in input order; which one is the
/// greater is only decided when asked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pair {
    /// Two elements taken from positions `2k` and `2k + 1`.
    Both(Element, Element),
    /// The unpaired last element of an odd-length input.
    Straggler(Element),
}

impl Pair {
    /// The greater member, or the straggler's value.
    pub fn greater(self) -> Element {
        match self {
            Pair::Both(a, b) => a.max(b),
            Pair::Straggler(val) => val,
        }
    }

    /// The lesser member. Stragglers have none.
    pub fn lesser(self) -> Option<Element> {
        match self {
            Pair::Both(a, b) => Some(a.min(b)),
            Pair::Straggler(_) => None,
        }
    }

    /// Returns `true` for a one-element pair.
    pub fn is_straggler(self) -> bool {
        matches!(self, Pair::Straggler(_))
    }
}

/// Groups `input` into adjacent pairs, in input order.
pub fn form_pairs<P: Sequence<Pair>>(input: &[Element]) -> P {
    let mut pairs = P::default();

    for chunk in input.chunks(2) {
        let pair = match *chunk {
            [a, b] => Pair::Both(a, b),
            [val] => Pair::Straggler(val),
            _ => unreachable!(),
        };

        pairs.push_back(pair);
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linked::LinkedSeq;

    #[test]
    fn members_are_decided_lazily() {
        let pair = Pair::Both(3, 8);

        assert_eq!(pair, Pair::Both(3, 8));
        assert_eq!(pair.greater(), 8);
        assert_eq!(pair.lesser(), Some(3));
        assert_eq!(Pair::Both(8, 3).greater(), 8);
        assert!(!pair.is_straggler());
    }

    #[test]
    fn straggler_has_no_lesser() {
        let pair = Pair::Straggler(4);

        assert_eq!(pair.greater(), 4);
        assert_eq!(pair.lesser(), None);
        assert!(pair.is_straggler());
    }

    #[test]
    fn even_input() {
        let pairs: Vec<Pair> = form_pairs(&[5, 2, 9, 1]);

        assert_eq!(pairs, [Pair::Both(5, 2), Pair::Both(9, 1)]);
    }

    #[test]
    fn odd_input_leaves_straggler() {
        let pairs: Vec<Pair> = form_pairs(&[3, 1, 2]);

        assert_eq!(pairs, [Pair::Both(3, 1), Pair::Straggler(2)]);
    }

    #[test]
    fn empty_input() {
        let pairs: Vec<Pair> = form_pairs(&[]);

        assert!(pairs.is_empty());
    }

    #[test]
    fn linked_pairs_match_vec_pairs() {
        let input = [7, 4, 1, 0, 6];
        let vec: Vec<Pair> = form_pairs(&input);
        let list: LinkedSeq<Pair> = form_pairs(&input);

        assert_eq!(list.iter().collect::<Vec<_>>(), vec);
    }
}
