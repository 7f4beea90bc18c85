// ============================================================================
// This code is part of Stepmerge.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

#![allow(dead_code)]

#[path ="../common/logger.rs"] mod logger;

use std::error::Error;

use clap::Parser;
use log::{debug, info};
use rayon::prelude::*;
use stepmerge::random::Random;
use stepmerge::{EngineState, MergeEngine, MoveRecord, Slot};


#[derive(Parser, Debug)]
#[clap(version, about = "Checks step-wise merge sorts of random inputs", long_about = None)]
struct Args {
    /// the number of random inputs to check
    #[clap(short, long, value_parser, required=false, default_value_t=1000)]
    rounds: usize,

    /// the largest input length
    #[clap(short = 'n', long, value_parser, required=false, default_value_t=16)]
    max_len: usize,

    /// the seed for generated inputs
    #[clap(long, value_parser, required=false, default_value_t=1)]
    seed: u64,
}

fn check_moves(
    before: &[Slot],
    after: &[Slot],
    moves: &[MoveRecord<i64>],
    values: &[i64]
) -> Result<(), String> {
    let mut seen = vec![false; values.len()];
    for m in moves {
        let o = m.origin;
        if o >= values.len() || seen[o] {
            return Err(format!("element #{} reported twice or unknown", o));
        }
        seen[o] = true;
        if m.value != values[o] {
            return Err(format!("element #{} reported with value {}", o, m.value));
        }
        if m.source() == m.target() {
            return Err(format!("element #{} reported without moving", o));
        }
        if m.source() != before[o] || m.target() != after[o] {
            return Err(format!(
                "element #{} reported {:?} -> {:?}, was {:?} -> {:?}",
                o, m.source(), m.target(), before[o], after[o]
            ));
        }
    }
    match (0..values.len()).find(|&o| before[o] != after[o] && !seen[o]) {
        Some(o) => Err(format!("element #{} moved without a record", o)),
        None => Ok(()),
    }
}

fn check_runs(engine: &MergeEngine<i64>, multiset: &[i64]) -> Result<(), String> {
    let mut all: Vec<i64> = engine.pending()
        .chain(engine.done())
        .flat_map(|r| r.values())
        .collect();
    let unsorted = engine.pending()
        .chain(engine.done())
        .any(|r| r.entries().windows(2).any(|w| w[1].value < w[0].value));
    if unsorted {
        return Err("a run is out of order".to_string());
    }
    all.sort_unstable();
    if all != multiset {
        return Err("values were not conserved".to_string());
    }
    Ok(())
}

/// Drives one engine to the end, checking every step. Returns the number
/// of steps taken.
fn check_one(values: &[i64]) -> Result<usize, String> {
    let mut engine = MergeEngine::new(values).map_err(|e| e.to_string())?;
    let mut multiset = values.to_vec();
    multiset.sort_unstable();
    let limit = 4 * values.len() + 8;

    let mut steps = 0;
    loop {
        let before = engine.positions();
        let step = engine.advance();
        steps += 1;
        check_runs(&engine, &multiset)?;
        check_moves(&before, &engine.positions(), &step.moves, values)?;
        if step.new_state == EngineState::Sorted { break; }
        if steps > limit {
            return Err(format!("not sorted after {} steps", steps));
        }
    }

    let before = engine.positions();
    let step = engine.advance();
    if step.new_state != EngineState::Sorted
        || !step.moves.is_empty()
        || engine.positions() != before
    {
        return Err("a sorted engine changed".to_string());
    }

    // stable order: equal values keep their input order
    let mut expected: Vec<(i64, usize)> = values.iter().copied().zip(0..).collect();
    expected.sort_by_key(|&(v, _)| v);
    let got: Vec<(i64, usize)> = engine.done()
        .iter()
        .flat_map(|r| r.entries())
        .map(|e| (e.value, e.origin))
        .collect();
    if got != expected {
        return Err(format!("final order {:?}", got));
    }
    Ok(steps)
}

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    let args = Args::parse();
    if args.max_len < 2 {
        return Err(format!("--max-len must be at least 2, got {}", args.max_len).into());
    }

    let root = Random::new(args.seed);
    let results: Result<Vec<usize>, String> = (0..args.rounds)
        .into_par_iter()
        .map(|r| {
            let rnd = root.fork(r as u64);
            let n = 2 + (rnd.ith_rand(0) as usize) % (args.max_len - 1);
            let values = rnd.fork(1).sequence(n, -8, 8);
            debug!("round {}: {:?}", r, values);
            check_one(&values).map_err(|e| format!("{:?}: {}", values, e))
        }).collect();

    let steps: usize = results?.iter().sum();
    info!("checked {} inputs on {} threads", args.rounds, rayon::current_num_threads());
    println!("inputs:  {}", args.rounds);
    println!("steps:   {}", steps);
    Ok(())
}
