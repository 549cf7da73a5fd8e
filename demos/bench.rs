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

use std::{fmt, time::Instant};

use mergeinsort::{sort_with, Element, Linked, Positional};
use rand::prelude::*;
use tabled::{object::Columns, Alignment, Modify, Style, Table, Tabled};

const ALGOS: &[Algo] = &[Algo::StdSort, Algo::Vector, Algo::LinkedList];
const LENS: &[usize] = &[1 << 6, 1 << 9, 1 << 12, 1 << 14];

#[derive(Clone, Copy, Debug, Tabled)]
enum Algo {
    StdSort,
    Vector,
    LinkedList,
}

impl fmt::Display for Algo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algo::StdSort => "sort_unstable",
            Algo::Vector => "merge-insertion (vector)",
            Algo::LinkedList => "merge-insertion (linked list)",
        };

        write!(f, "{}", name)
    }
}

impl Algo {
    pub fn sort(self, vals: &[Element]) -> usize {
        match self {
            Algo::StdSort => {
                let mut sorted = vals.to_vec();
                sorted.sort_unstable();
                sorted.len()
            }
            Algo::Vector => sort_with::<Positional>(vals).len(),
            Algo::LinkedList => sort_with::<Linked>(vals).iter().count(),
        }
    }
}

fn format_f32(val: f32) -> String {
    if val < 1e3 {
        format!("{:.2}", val)
    } else if val < 1e6 {
        format!("{:.2}K", val / 1e3)
    } else if val < 1e9 {
        format!("{:.2}M", val / 1e6)
    } else {
        format!("{:.2}G", val / 1e9)
    }
}

fn display_throughput(throughput: &f32) -> String {
    format!("{}keys/s", format_f32(*throughput))
}

fn display_improvement(improvement: &f32) -> String {
    format!("{:.2}%", *improvement * 100.0)
}

#[derive(Debug, Tabled)]
struct Entry {
    length: usize,
    algorithm: Algo,
    #[tabled(display_with = "display_throughput")]
    throughput: f32,
    #[tabled(display_with = "display_improvement")]
    improvement: f32,
}

fn measure<F: FnMut() -> usize>(mut f: F) -> f64 {
    let now = Instant::now();

    let len = f();

    let elapsed = now.elapsed().as_secs_f64();
    assert!(len > 0);

    elapsed
}

fn main() {
    println!("\n");

    let mut rng = StdRng::seed_from_u64(42);
    let mut entries = Vec::new();

    for &len in LENS {
        let mut vals: Vec<Element> = (0..len as Element).collect();

        for &algo in ALGOS {
            let mut timings = Vec::new();

            for _ in 0..((1 << 18) / len).clamp(4, 1 << 10) {
                vals.shuffle(&mut rng);

                timings.push(measure(|| algo.sort(&vals)));
            }

            let average = timings.iter().copied().sum::<f64>() / timings.len() as f64;
            let throughput = (len as f64 / average) as f32;

            entries.push(Entry {
                algorithm: algo,
                length: len,
                throughput,
                improvement: 0.0,
            });
        }

        let reference = entries[entries.len() - ALGOS.len()].throughput;

        for entry in entries.iter_mut().rev().take(ALGOS.len()) {
            entry.improvement = entry.throughput / reference - 1.0;
        }
    }

    let table = Table::new(entries)
        .with(Style::modern())
        .with(Modify::new(Columns::single(0)).with(Alignment::right()))
        .with(Modify::new(Columns::single(1)).with(Alignment::center()))
        .with(Modify::new(Columns::single(2)).with(Alignment::right()))
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    println!("u32, distinct keys\n{}\n\n", table);
}
