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

//! The ordered-sequence capability the sorting engine is written against.

/// An ordered sequence of `Copy` values.
///
/// The engine only ever appends, removes the last value, looks values up by
/// position, reorders in place and inserts at an ascending position. Each
/// backing type decides how expensive those are.
pub trait Sequence<T: Copy>: Default {
    /// Number of values held.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `value` at the end.
    fn push_back(&mut self, value: T);

    /// Removes and returns the last value.
    fn pop_back(&mut self) -> Option<T>;

    /// The last value, if any.
    fn back(&self) -> Option<T>;

    /// The value at `index`, if in bounds.
    fn at(&self, index: usize) -> Option<T>;

    /// Reorders the values ascending by `key`.
    fn reorder_by_key<K, F>(&mut self, key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K;

    /// Inserts `value` before the first value that exceeds it, or at the end.
    ///
    /// Keeps an ascending sequence ascending.
    fn insert_sorted(&mut self, value: T)
    where
        T: Ord;

    /// Iterates the values front to back.
    fn values(&self) -> impl Iterator<Item = T> + '_;
}

impl<T: Copy> Sequence<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push_back(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn back(&self) -> Option<T> {
        <[T]>::last(self).copied()
    }

    fn at(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).copied()
    }

    fn reorder_by_key<K, F>(&mut self, key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        <[T]>::sort_unstable_by_key(self, key);
    }

    fn insert_sorted(&mut self, value: T)
    where
        T: Ord,
    {
        let i = <[T]>::partition_point(self, |&val| val <= value);

        Vec::insert(self, i, value);
    }

    fn values(&self) -> impl Iterator<Item = T> + '_ {
        <[T]>::iter(self).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_insert_sorted_keeps_order() {
        let mut vals: Vec<u32> = Vec::new();

        for val in [5, 1, 9, 3, 7, 0] {
            vals.insert_sorted(val);
        }

        assert_eq!(vals, [0, 1, 3, 5, 7, 9]);
    }

    #[test]
    fn vec_insert_sorted_at_ends() {
        let mut vals = vec![2u32, 4];

        vals.insert_sorted(1);
        vals.insert_sorted(5);

        assert_eq!(vals, [1, 2, 4, 5]);
    }

    #[test]
    fn vec_back_and_pop() {
        let mut vals = vec![1u32, 2, 3];

        assert_eq!(Sequence::back(&vals), Some(3));
        assert_eq!(Sequence::pop_back(&mut vals), Some(3));
        assert_eq!(Sequence::at(&vals, 1), Some(2));
        assert_eq!(Sequence::at(&vals, 2), None);
    }

    #[test]
    fn vec_reorder_by_key() {
        let mut vals = vec![(3u32, 'a'), (1, 'b'), (2, 'c')];

        vals.reorder_by_key(|&(k, _)| k);

        assert_eq!(vals, [(1, 'b'), (2, 'c'), (3, 'a')]);
    }
}
