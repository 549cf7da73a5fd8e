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

//! Runs both representations, compares their output and reports timings.

use std::{
    fmt,
    time::{Duration, Instant},
};

use tracing::{debug, error};

use crate::{
    error::SortError, sequence::Sequence, sort_with, Element, Linked, Positional, Representation,
};

/// How the two representation runs are scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Linked list first, then vector, on the calling thread.
    #[default]
    Sequential,
    /// Both at once through `rayon::join`.
    Parallel,
}

/// Outcome of a cross-checked sort.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// The input, in its original order.
    pub input: Vec<Element>,
    /// The sorted output both representations agreed on.
    pub sorted: Vec<Element>,
    /// Time spent sorting with the vector representation.
    pub positional: Duration,
    /// Time spent sorting with the linked-list representation.
    pub linked: Duration,
}

impl Report {
    /// Vector run time in microseconds.
    pub fn positional_micros(&self) -> f64 {
        self.positional.as_secs_f64() * 1e6
    }

    /// Linked-list run time in microseconds.
    pub fn linked_micros(&self) -> f64 {
        self.linked.as_secs_f64() * 1e6
    }

    /// Renders the report, showing at most `limit` values per sequence.
    pub fn display(&self, limit: Option<usize>) -> ReportDisplay<'_> {
        ReportDisplay {
            report: self,
            limit,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(None), f)
    }
}

/// [`Report`] formatter returned by [`Report::display`].
#[derive(Debug)]
pub struct ReportDisplay<'a> {
    report: &'a Report,
    limit: Option<usize>,
}

impl ReportDisplay<'_> {
    fn write_values(&self, f: &mut fmt::Formatter<'_>, vals: &[Element]) -> fmt::Result {
        let shown = self.limit.unwrap_or(vals.len()).min(vals.len());

        for val in &vals[..shown] {
            write!(f, " {}", val)?;
        }

        if shown < vals.len() {
            write!(f, " [...]")?;
        }

        writeln!(f)
    }
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let len = report.input.len();

        write!(f, "Before:")?;
        self.write_values(f, &report.input)?;
        write!(f, "After: ")?;
        self.write_values(f, &report.sorted)?;

        writeln!(
            f,
            "Time to process a range of {} elements with linked list : {:.3} us",
            len,
            report.linked_micros()
        )?;
        writeln!(
            f,
            "Time to process a range of {} elements with vector      : {:.3} us",
            len,
            report.positional_micros()
        )
    }
}

fn measure<R: Representation>(input: &[Element]) -> (R::Chain, Duration) {
    let now = Instant::now();

    let chain = sort_with::<R>(input);

    let elapsed = now.elapsed();

    debug!(
        representation = R::NAME,
        elements = input.len(),
        micros = elapsed.as_secs_f64() * 1e6,
        "sorted"
    );

    (chain, elapsed)
}

/// Finds the first position at which `positional` and `linked` differ.
pub fn compare<A, B>(positional: &A, linked: &B) -> Result<(), SortError>
where
    A: Sequence<Element>,
    B: Sequence<Element>,
{
    let mut left = positional.values();
    let mut right = linked.values();
    let mut index = 0;

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ok(()),
            (l, r) if l == r => index += 1,
            (l, r) => {
                return Err(SortError::Mismatch {
                    index,
                    positional: l,
                    linked: r,
                })
            }
        }
    }
}

/// Returns `positional` if `linked` holds the same values, logging the
/// first difference otherwise.
fn agreed<B: Sequence<Element>>(
    positional: Vec<Element>,
    linked: &B,
) -> Result<Vec<Element>, SortError> {
    compare(&positional, linked).map_err(|err| {
        error!(%err, "representations disagree");
        err
    })?;

    Ok(positional)
}

/// Sorts `input` with both representations, checks that they agree and
/// times each run.
///
/// # Examples
///
/// ```
/// use mergeinsort::check::{cross_check, RunMode};
///
/// let report = cross_check(&[5, 2, 9, 1, 7, 3], RunMode::Sequential).unwrap();
///
/// assert_eq!(report.sorted, [1, 2, 3, 5, 7, 9]);
/// ```
pub fn cross_check(input: &[Element], mode: RunMode) -> Result<Report, SortError> {
    let ((linked, linked_time), (positional, positional_time)) = match mode {
        RunMode::Sequential => (measure::<Linked>(input), measure::<Positional>(input)),
        RunMode::Parallel => rayon::join(
            || measure::<Linked>(input),
            || measure::<Positional>(input),
        ),
    };

    Ok(Report {
        input: input.to_vec(),
        sorted: agreed(positional, &linked)?,
        positional: positional_time,
        linked: linked_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linked::LinkedSeq;

    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    fn report(input: &[Element], sorted: &[Element]) -> Report {
        Report {
            input: input.to_vec(),
            sorted: sorted.to_vec(),
            positional: Duration::from_micros(4),
            linked: Duration::from_nanos(12_500),
        }
    }

    #[test]
    fn compare_equal() {
        let list: LinkedSeq<Element> = [1, 2, 3].into_iter().collect();

        assert_eq!(compare(&vec![1, 2, 3], &list), Ok(()));
        assert_eq!(compare(&Vec::new(), &LinkedSeq::new()), Ok(()));
    }

    #[test]
    fn compare_value_mismatch() {
        let list: LinkedSeq<Element> = [1, 4, 3].into_iter().collect();

        assert_eq!(
            compare(&vec![1, 2, 3], &list),
            Err(SortError::Mismatch {
                index: 1,
                positional: Some(2),
                linked: Some(4),
            })
        );
    }

    #[test]
    fn compare_length_mismatch() {
        let list: LinkedSeq<Element> = [1, 2].into_iter().collect();

        assert_eq!(
            compare(&vec![1, 2, 3], &list),
            Err(SortError::Mismatch {
                index: 2,
                positional: Some(3),
                linked: None,
            })
        );
    }

    #[test]
    fn agreed_passes_matching_output_through() {
        let list: LinkedSeq<Element> = [1, 2, 3].into_iter().collect();

        assert_eq!(agreed(vec![1, 2, 3], &list), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn agreed_rejects_diverging_output() {
        let shorter: LinkedSeq<Element> = [1, 2].into_iter().collect();
        let swapped: LinkedSeq<Element> = [2, 1, 3].into_iter().collect();

        assert_eq!(
            agreed(vec![1, 2, 3], &shorter),
            Err(SortError::Mismatch {
                index: 2,
                positional: Some(3),
                linked: None,
            })
        );
        assert_eq!(
            agreed(vec![1, 2, 3], &swapped),
            Err(SortError::Mismatch {
                index: 0,
                positional: Some(1),
                linked: Some(2),
            })
        );
        assert_eq!(
            agreed(Vec::new(), &shorter),
            Err(SortError::Mismatch {
                index: 0,
                positional: None,
                linked: Some(1),
            })
        );
    }

    #[test]
    fn modes_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut vals: Vec<Element> = (0..2_048).collect();
        vals.shuffle(&mut rng);

        let sequential = cross_check(&vals, RunMode::Sequential).unwrap();
        let parallel = cross_check(&vals, RunMode::Parallel).unwrap();

        assert_eq!(sequential.sorted, parallel.sorted);
        assert_eq!(sequential.input, vals);
        assert!(sequential.sorted.iter().copied().eq(0..2_048));
    }

    #[test]
    fn empty_input_is_accepted() {
        let report = cross_check(&[], RunMode::Sequential).unwrap();

        assert!(report.sorted.is_empty());
    }

    #[test]
    fn display_full() {
        let text = report(&[3, 1, 2], &[1, 2, 3]).to_string();

        assert_eq!(
            text,
            "Before: 3 1 2\n\
             After:  1 2 3\n\
             Time to process a range of 3 elements with linked list : 12.500 us\n\
             Time to process a range of 3 elements with vector      : 4.000 us\n"
        );
    }

    #[test]
    fn display_truncated() {
        let report = report(&[5, 4, 3, 2, 1], &[1, 2, 3, 4, 5]);
        let text = report.display(Some(2)).to_string();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("Before: 5 4 [...]"));
        assert_eq!(lines.next(), Some("After:  1 2 [...]"));
    }

    #[test]
    fn display_limit_above_len() {
        let report = report(&[2, 1], &[1, 2]);

        assert_eq!(report.display(Some(10)).to_string(), report.to_string());
    }
}
