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

#![deny(missing_docs)]

//! # mergeinsort
//!
//! Merge-insertion sort of distinct non-negative integers, run over a vector
//! and over a doubly linked list, cross-checked and timed.
//!
//! Adjacent elements are paired, the greater members are sorted into a main
//! chain, and the lesser members are then inserted into it in an order
//! derived from the Jacobsthal numbers. An odd element out goes in last.
//!
//! # Usage
//!
//! ```
//! use mergeinsort::MergeInsertionSort;
//!
//! let mut vals: [u32; 5] = [5, 4, 1, 3, 2];
//!
//! vals.merge_insertion_sort();
//!
//! assert_eq!(vals, [1, 2, 3, 4, 5]);
//! ```

pub mod check;
mod error;
pub mod input;
pub mod jacobsthal;
pub mod linked;
pub mod pair;
pub mod sequence;

pub use error::{InputError, SortError};

use jacobsthal::insertion_schedule;
use linked::LinkedSeq;
use pair::Pair;
use sequence::Sequence;

/// A value being sorted.
pub type Element = u32;

/// Largest accepted element, `i32::MAX`.
pub const MAX_ELEMENT: Element = i32::MAX as Element;

/// Backing storage for one run of the engine.
pub trait Representation {
    /// Name used in logs.
    const NAME: &'static str;
    /// Holds the pair set.
    type Pairs: Sequence<Pair> + Send;
    /// Holds the main chain.
    type Chain: Sequence<Element> + Send;
}

/// `Vec`-backed run: binary-searched insertion, constant-time lookup.
#[derive(Clone, Copy, Debug)]
pub enum Positional {}

impl Representation for Positional {
    const NAME: &'static str = "vector";
    type Pairs = Vec<Pair>;
    type Chain = Vec<Element>;
}

/// Linked-list run: linearly scanned insertion, lookup by walking links.
#[derive(Clone, Copy, Debug)]
pub enum Linked {}

impl Representation for Linked {
    const NAME: &'static str = "linked list";
    type Pairs = LinkedSeq<Pair>;
    type Chain = LinkedSeq<Element>;
}

/// Sorts the two-element pairs by greater member and returns those members
/// as the main chain.
///
/// A trailing straggler is set aside for the sort and put back at the end of
/// `pairs` afterwards.
pub fn order_representatives<P, C>(pairs: &mut P) -> C
where
    P: Sequence<Pair>,
    C: Sequence<Element>,
{
    let straggler = match pairs.back() {
        Some(pair) if pair.is_straggler() => pairs.pop_back(),
        _ => None,
    };

    pairs.reorder_by_key(|pair| pair.greater());

    let mut chain = C::default();
    for pair in pairs.values() {
        chain.push_back(pair.greater());
    }

    if let Some(pair) = straggler {
        pairs.push_back(pair);
    }

    chain
}

/// Number of lesser members the insertion schedule covers: every
/// two-element pair but the first.
pub fn pending_insertions<P: Sequence<Pair>>(pairs: &P) -> usize {
    let straggler = pairs.back().is_some_and(Pair::is_straggler);

    (pairs.len() - usize::from(straggler)).saturating_sub(1)
}

/// Inserts every lesser member of `pairs`, then the straggler, into `chain`.
///
/// `pairs` must be ordered as [`order_representatives`] left it and `chain`
/// must be the chain it returned.
pub fn build_chain<P, C>(chain: &mut C, pairs: &P)
where
    P: Sequence<Pair>,
    C: Sequence<Element>,
{
    if let Some(lesser) = pairs.at(0).and_then(Pair::lesser) {
        chain.insert_sorted(lesser);
    }

    for i in insertion_schedule(pending_insertions(pairs)) {
        if let Some(lesser) = pairs.at(i + 1).and_then(Pair::lesser) {
            chain.insert_sorted(lesser);
        }
    }

    if let Some(Pair::Straggler(val)) = pairs.back() {
        chain.insert_sorted(val);
    }
}

/// Sorts `input` using the storage of `R`.
///
/// `input` must not contain duplicates.
pub fn sort_with<R: Representation>(input: &[Element]) -> R::Chain {
    let mut pairs: R::Pairs = pair::form_pairs(input);
    let mut chain: R::Chain = order_representatives(&mut pairs);

    build_chain(&mut chain, &pairs);

    chain
}

/// Merge-insertion sort extension trait.
pub trait MergeInsertionSort {
    /// Sorts the slice ascending. The values must be distinct.
    ///
    /// # Examples
    ///
    /// ```
    /// use mergeinsort::MergeInsertionSort;
    ///
    /// let mut vals: Vec<u32> = vec![3, 1, 2];
    ///
    /// vals.merge_insertion_sort();
    ///
    /// assert_eq!(vals, [1, 2, 3]);
    /// ```
    fn merge_insertion_sort(&mut self);
}

impl MergeInsertionSort for [Element] {
    fn merge_insertion_sort(&mut self) {
        let sorted = sort_with::<Positional>(self);

        self.copy_from_slice(&sorted);
    }
}
