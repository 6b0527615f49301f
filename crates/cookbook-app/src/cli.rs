// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Command line surface of the `cookbook` binary.
//!
//! Without a subcommand the binary runs the demonstration: it prints the sum
//! `1 + 2 + 3 + 4 + 5` and every value of `counter(0, 15)`.

use crate::error::{AppError, AppResult};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use cookbook_core::add;
use cookbook_core::math::vec3::Vec3;
use cookbook_core::num::add::add_all;
use cookbook_core::num::ops::checked_add::checked_add_all;
use cookbook_core::seq::counter::counter;
use std::io::Write;
use std::num::Wrapping;
use tracing::debug;

/// Exclusive end of the sequence printed by the demonstration.
const DEMO_COUNT_END: i32 = 15;

/// Cookbook CLI application
#[derive(Debug, Parser)]
#[command(name = "cookbook")]
#[command(about = "Typed addition and lazy counting sequences", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the built-in demonstration (default)
    Demo,

    /// Add two or more numbers from left to right
    Add(AddArgs),

    /// Print every integer in [START, END)
    Count(CountArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Operands, at least two
    #[arg(required = true, num_args = 2.., allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Fail on 64-bit integer overflow instead of wrapping around
    #[arg(long, conflicts_with = "float")]
    pub checked: bool,

    /// Parse operands as 64-bit floating point numbers
    #[arg(long)]
    pub float: bool,
}

#[derive(Debug, Args)]
pub struct CountArgs {
    /// First value (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub start: i64,

    /// Last value (exclusive)
    #[arg(allow_negative_numbers = true)]
    pub end: i64,

    /// Stop after printing at most this many values
    #[arg(long)]
    pub take: Option<usize>,
}

/// Dispatches the parsed command line, writing results to `out`.
pub fn run<W>(cli: Cli, out: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(out),
        Command::Add(args) => run_add(&args, out),
        Command::Count(args) => run_count(&args, out),
    }
}

fn run_demo<W>(out: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    let total = add!(1, 2, 3, 4, 5);
    debug!(total, "demo sum");
    writeln!(out, "[Concepts] 1 + 2 + 3 + 4 + 5 = {}", total)?;

    let v = add!(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 3.0, 4.0));
    writeln!(out, "[Concepts] (1, 2, 3) + (2, 3, 4) = {}", v)?;

    for num in counter(0, DEMO_COUNT_END) {
        writeln!(out, "[Coroutines] Current count: {}", num)?;
    }
    Ok(())
}

fn run_add<W>(args: &AddArgs, out: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    debug!(
        operands = args.values.len(),
        checked = args.checked,
        float = args.float,
        "adding operands"
    );

    if args.float {
        let sum = sum_floats(&args.values).context("failed to add operands")?;
        writeln!(out, "{}", sum)?;
    } else {
        let sum = sum_integers(&args.values, args.checked).context("failed to add operands")?;
        writeln!(out, "{}", sum)?;
    }
    Ok(())
}

fn run_count<W>(args: &CountArgs, out: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    debug!(start = args.start, end = args.end, take = ?args.take, "counting");

    for (produced, num) in counter(args.start, args.end).enumerate() {
        if args.take.is_some_and(|limit| produced >= limit) {
            debug!(produced, "stopping early");
            break;
        }
        writeln!(out, "{}", num)?;
    }
    Ok(())
}

/// Parses and adds integer operands.
///
/// With `checked` an overflowing sum is an error; otherwise it wraps in two's
/// complement, identically in debug and release builds.
pub fn sum_integers(values: &[String], checked: bool) -> AppResult<i64> {
    let operands = values
        .iter()
        .map(|value| {
            value
                .trim()
                .parse::<i64>()
                .map_err(|source| AppError::InvalidInteger {
                    value: value.clone(),
                    source,
                })
        })
        .collect::<AppResult<Vec<_>>>()?;

    let count = operands.len();
    let (first, second, rest) = split_operands(operands)?;
    if checked {
        checked_add_all(first, second, rest).ok_or(AppError::Overflow { operands: count })
    } else {
        let sum = add_all(Wrapping(first), Wrapping(second), rest.map(Wrapping));
        Ok(sum.0)
    }
}

/// Parses and adds floating point operands.
pub fn sum_floats(values: &[String]) -> AppResult<f64> {
    let operands = values
        .iter()
        .map(|value| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|source| AppError::InvalidFloat {
                    value: value.clone(),
                    source,
                })
        })
        .collect::<AppResult<Vec<_>>>()?;

    let (first, second, rest) = split_operands(operands)?;
    Ok(add_all(first, second, rest))
}

fn split_operands<T>(operands: Vec<T>) -> AppResult<(T, T, std::vec::IntoIter<T>)> {
    let count = operands.len();
    let mut iter = operands.into_iter();
    match (iter.next(), iter.next()) {
        (Some(first), Some(second)) => Ok((first, second, iter)),
        _ => Err(AppError::TooFewOperands(count)),
    }
}
