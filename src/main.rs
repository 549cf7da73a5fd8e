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

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mergeinsort::{
    check::{cross_check, Report, RunMode},
    input::parse_args,
};

#[derive(Debug, Parser)]
#[command(name = "mergeinsort")]
#[command(about = "Merge-insertion sort with a vector and a linked list, cross-checked and timed")]
#[command(version)]
struct Cli {
    /// Distinct integers between 0 and 2147483647
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Sort with both representations at the same time
    #[arg(long)]
    parallel: bool,

    /// Show at most N values of each sequence
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<Report> {
    let input = parse_args(&cli.values).context("rejected arguments")?;

    let mode = if cli.parallel {
        RunMode::Parallel
    } else {
        RunMode::Sequential
    };

    info!(elements = input.len(), ?mode, "sorting");

    cross_check(&input, mode).context("sorted containers disagree")
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            print!("{}", report.display(cli.limit));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_line(args: &[&str]) -> String {
        let cli = Cli::parse_from(std::iter::once("mergeinsort").chain(args.iter().copied()));

        format!("{:#}", run(&cli).unwrap_err())
    }

    #[test]
    fn input_errors_are_reported_once() {
        assert_eq!(
            error_line(&["1", "abc"]),
            "rejected arguments: invalid input 'abc': only positive integers are allowed"
        );
        assert_eq!(
            error_line(&["4", "-2"]),
            "rejected arguments: invalid input '-2': only positive integers are allowed"
        );
        assert_eq!(error_line(&[]), "rejected arguments: no input provided");
    }

    #[test]
    fn valid_input_is_sorted() {
        let cli = Cli::parse_from(["mergeinsort", "--parallel", "5 2 9", "1"]);
        let report = run(&cli).unwrap();

        assert_eq!(report.sorted, [1, 2, 5, 9]);
        assert_eq!(report.input, [5, 2, 9, 1]);
    }
}
