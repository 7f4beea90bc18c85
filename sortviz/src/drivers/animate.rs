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

#[path ="../common/io.rs"] mod io;
#[path ="../common/logger.rs"] mod logger;
#[path ="../common/render.rs"] mod render;

use std::error::Error;
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::info;
use stepmerge::random::Random;
use stepmerge::{InputList, MergeEngine};


#[derive(Parser, Debug)]
#[clap(version, about = "Plays a merge sort one step at a time", long_about = None)]
struct Args {
    /// the values to sort
    #[clap(value_parser, allow_negative_numbers = true)]
    values: Vec<i64>,

    /// read the values from this file instead
    #[clap(short, long, required=false, default_value_t = ("").to_string())]
    ifname: String,

    /// sort this many generated values instead
    #[clap(long, value_parser, required=false, default_value_t=0)]
    random: usize,

    /// the seed for generated values
    #[clap(long, value_parser, required=false, default_value_t=1)]
    seed: u64,

    /// the pause between steps in milliseconds
    #[clap(long, value_parser, required=false, default_value_t=0)]
    delay_ms: u64,

    /// accept more values than the input list holds
    #[clap(long)]
    no_limit: bool,
}

fn collect_values(args: &Args) -> Result<Vec<i64>, Box<dyn Error>> {
    if !args.values.is_empty() {
        Ok(args.values.clone())
    } else if !args.ifname.is_empty() {
        Ok(io::read_file_to_vec(&args.ifname)?)
    } else if args.random > 0 {
        Ok(Random::new(args.seed).sequence(args.random, -99, 99))
    } else {
        Err("no values given: pass VALUES, --ifname or --random".into())
    }
}

fn print_rows(engine: &MergeEngine<i64>) {
    println!("  pending: {}", render::row(engine.pending()));
    println!("  done:    {}", render::row(engine.done()));
}

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    let args = Args::parse();
    let values = collect_values(&args)?;

    let mut engine = if args.no_limit {
        MergeEngine::new(&values)?
    } else {
        let list = InputList::from_values(&values)?;
        println!("{}", list.title());
        list.engine()?
    };
    info!("sorting {} values", engine.len());

    println!("step 0 [{:?}]", engine.state());
    print_rows(&engine);

    let delay = Duration::from_millis(args.delay_ms);
    let mut steps = engine.steps();
    let mut i = 0;
    while let Some(step) = steps.next() {
        thread::sleep(delay);
        i += 1;
        println!("step {} [{:?}] pass {}", i, step.new_state, steps.engine().pass());
        print_rows(steps.engine());
        if !step.moves.is_empty() {
            println!("  moves:   {}", render::moves(&step.moves));
        }
    }

    if let Some(sorted) = engine.sorted() {
        println!("sorted: {:?}", sorted);
    }
    Ok(())
}
