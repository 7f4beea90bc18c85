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

use rayon::prelude::*;
use stepmerge::*;
use stepmerge::random::Random;


/// Drives `values` to the end, checking every step, and returns the number
/// of steps taken.
fn drive(values: &[i64]) -> usize {
    let mut e = MergeEngine::new(values).unwrap();
    let mut multiset = values.to_vec();
    multiset.sort();

    let mut steps = 0;
    loop {
        let before = e.positions();
        let step = e.advance();
        let after = e.positions();
        steps += 1;
        assert!(steps <= 4 * values.len() + 8, "{:?} did not terminate", values);

        // conservation and sorted runs
        let mut all: Vec<i64> = e.pending().chain(e.done()).flat_map(|r| r.values()).collect();
        all.sort();
        assert_eq!(all, multiset);
        for r in e.pending().chain(e.done()) {
            assert!(r.to_vec().windows(2).all(|w| w[0] <= w[1]), "{:?}", values);
        }

        // every element whose slot changed is reported once, and only those
        let mut reported: Vec<usize> = step.moves.iter().map(|m| m.origin).collect();
        reported.sort();
        let changed: Vec<usize> = (0..values.len()).filter(|&o| before[o] != after[o]).collect();
        assert_eq!(reported, changed, "{:?}", values);
        for m in &step.moves {
            assert_eq!(m.value, values[m.origin]);
            assert_eq!(m.source(), before[m.origin]);
            assert_eq!(m.target(), after[m.origin]);
        }

        if step.new_state == EngineState::Sorted { break; }
    }

    let mut expected: Vec<(i64, usize)> = values.iter().copied().zip(0..).collect();
    expected.sort_by_key(|&(v, _)| v);
    let got: Vec<(i64, usize)> = e.done()[0].entries().iter().map(|x| (x.value, x.origin)).collect();
    assert_eq!(e.done().len(), 1);
    assert_eq!(got, expected, "{:?} is not stable", values);
    steps
}

fn permutations(n: usize) -> Vec<Vec<i64>> {
    if n == 0 { return vec![vec![]]; }
    permutations(n - 1)
        .into_iter()
        .flat_map(|p| (0..n).map(move |i| {
            let mut q = p.clone();
            q.insert(i, n as i64 - 1);
            q
        })).collect()
}

#[test]
fn all_permutations_up_to_seven() {
    for n in 2..=7 {
        let perms = permutations(n);
        perms.par_iter().for_each(|p| { drive(p); });
    }
}

#[test]
fn all_sequences_over_three_keys() {
    // every sequence of length 2..=8 drawn from {0, 1, 2}
    (2..=8u32).into_par_iter().for_each(|n| {
        (0..3usize.pow(n)).into_par_iter().for_each(|code| {
            let v: Vec<i64> = (0..n)
                .map(|i| ((code / 3usize.pow(i)) % 3) as i64)
                .collect();
            drive(&v);
        });
    });
}

#[test]
fn random_inputs_of_any_length() {
    let root = Random::new(7);
    (0..2000u64).into_par_iter().for_each(|r| {
        let rnd = root.fork(r);
        let n = 2 + (rnd.ith_rand(0) % 40) as usize;
        drive(&rnd.fork(1).sequence(n, -5, 5));
    });
}

#[test]
fn step_count_grows_logarithmically() {
    // one split, n - 1 merges, one start per extra pass, one final step
    let steps = drive(&(0..16).rev().collect::<Vec<_>>());
    assert_eq!(steps, 1 + 15 + 3 + 1);

    // 5 elements: the first two passes each end with an odd leftover
    let steps = drive(&[5, 4, 3, 2, 1]);
    assert_eq!(steps, 1 + 4 + 2 + 2 + 1);
}

#[test]
fn random_is_reproducible() {
    let a = Random::new(3).sequence(16, -99, 99);
    let b = Random::new(3).sequence(16, -99, 99);
    assert_eq!(a, b);
    assert!(a.iter().all(|v| (-99..=99).contains(v)));
    assert_ne!(a, Random::new(4).sequence(16, -99, 99));
}
