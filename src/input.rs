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

//! Command-line value parsing.

use std::collections::HashSet;

use crate::{error::InputError, Element, MAX_ELEMENT};

/// Parses command-line arguments into distinct elements.
///
/// Every argument is split on whitespace, so `"3 1 2"` passed as a single
/// argument is read as three values. Stops at the first bad token.
///
/// # Examples
///
/// ```
/// use mergeinsort::{input::parse_args, InputError};
///
/// assert_eq!(parse_args(["3 1", "2"]), Ok(vec![3, 1, 2]));
/// assert_eq!(parse_args(["1", "-2"]), Err(InputError::NotNumeric("-2".into())));
/// ```
pub fn parse_args<I, S>(args: I) -> Result<Vec<Element>, InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut vals = Vec::new();
    let mut seen = HashSet::new();

    for arg in args {
        for token in arg.as_ref().split_whitespace() {
            let val = parse_token(token)?;

            if !seen.insert(val) {
                return Err(InputError::Duplicate(token.to_owned()));
            }

            vals.push(val);
        }
    }

    if vals.is_empty() {
        return Err(InputError::Empty);
    }

    Ok(vals)
}

fn parse_token(token: &str) -> Result<Element, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotNumeric(token.to_owned()));
    }

    // All digits, so a failed parse can only be overflow.
    token
        .parse::<Element>()
        .ok()
        .filter(|&val| val <= MAX_ELEMENT)
        .ok_or_else(|| InputError::OutOfRange(token.to_owned()))
}
