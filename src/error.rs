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

use thiserror::Error;

use crate::Element;

/// Rejected command-line input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// No values were given.
    #[error("no input provided")]
    Empty,
    /// A token with anything but ASCII digits in it.
    #[error("invalid input '{0}': only positive integers are allowed")]
    NotNumeric(String),
    /// A value above `i32::MAX`.
    #[error("number '{0}' exceeds the maximum limit for a 32-bit signed integer")]
    OutOfRange(String),
    /// A value given more than once.
    #[error("duplicate number '{0}' is not allowed")]
    Duplicate(String),
}

/// The two representations produced different sequences.
///
/// Sorting is deterministic, so this always points at a defect in the engine
/// rather than at the input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// First position at which the outputs differ. A `None` side ended before
    /// that position.
    #[error("sorted sequences do not match at position {index} (vector: {positional:?}, linked list: {linked:?})")]
    Mismatch {
        /// Zero-based position of the first difference.
        index: usize,
        /// Value in the vector output.
        positional: Option<Element>,
        /// Value in the linked-list output.
        linked: Option<Element>,
    },
}
