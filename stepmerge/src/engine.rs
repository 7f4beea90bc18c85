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

use std::collections::VecDeque;
use std::mem;

use log::{debug, trace};

use crate::error::EngineError;
use crate::internal::merge::{is_sorted_serial, seq_merge};
use crate::run::{EngineState, Entry, MoveRecord, Run, Slot, Step};


fn less_than<T: PartialOrd>(a: T, b: T) -> bool { a < b }

/// Bottom-up merge sort that advances one unit of work at a time.
///
/// Runs waiting to be merged live in `pending`, runs produced by the current
/// pass live in `done`. Each call to [`advance`](Self::advance) either
/// explodes the input into singletons, starts a new pass, promotes an odd
/// leftover run, or merges the two leftmost pending runs.
pub struct MergeEngine<T, F = fn(T, T) -> bool> {
    state: EngineState,
    pending: VecDeque<Run<T>>,
    done: Vec<Run<T>>,
    pass: usize,
    len: usize,
    less: F,
}

impl<T: Copy + PartialOrd> MergeEngine<T> {
    /// Builds an engine that sorts `input` in non-decreasing order.
    pub fn new(input: &[T]) -> Result<Self, EngineError> {
        Self::with_less(input, less_than::<T>)
    }
}

impl<T, F> MergeEngine<T, F>
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    /// Builds an engine ordered by the strict predicate `less`.
    pub fn with_less(input: &[T], less: F) -> Result<Self, EngineError> {
        if input.len() < 2 {
            return Err(EngineError::InvalidInput { len: input.len() });
        }

        let entries = input
            .iter()
            .enumerate()
            .map(|(origin, &value)| Entry { value, origin })
            .collect();

        Ok(Self {
            state: EngineState::Splitting,
            pending: VecDeque::new(),
            done: vec![Run::from_entries(entries)],
            pass: 0,
            len: input.len(),
            less,
        })
    }

    pub fn state(&self) -> EngineState { self.state }

    /// Total number of elements being sorted.
    pub fn len(&self) -> usize { self.len }

    /// Number of passes started; the split starts pass 1.
    pub fn pass(&self) -> usize { self.pass }

    pub fn pending(&self) -> impl ExactSizeIterator<Item = &Run<T>> + '_ {
        self.pending.iter()
    }

    pub fn done(&self) -> &[Run<T>] { &self.done }

    /// The current slot of every element, indexed by origin.
    pub fn positions(&self) -> Vec<Slot> {
        let mut slots = vec![Slot::done(0); self.len];
        let pending = self.pending.iter().flat_map(|r| r.entries());
        for (k, e) in pending.enumerate() {
            slots[e.origin] = Slot::pending(k);
        }
        let done = self.done.iter().flat_map(|r| r.entries());
        for (k, e) in done.enumerate() {
            slots[e.origin] = Slot::done(k);
        }
        slots
    }

    /// The sorted values, once the engine has reached `Sorted`.
    pub fn sorted(&self) -> Option<Vec<T>> {
        match (self.state, self.done.as_slice()) {
            (EngineState::Sorted, [run]) => Some(run.to_vec()),
            _ => None,
        }
    }

    /// Performs one unit of sort work. Once sorted, this is a no-op that
    /// reports `Sorted` with no moves.
    pub fn advance(&mut self) -> Step<T> {
        let prev = self.state;
        let moves = match self.state {
            EngineState::Splitting => self.split(),
            EngineState::Merging => match self.pending.len() {
                0 if self.done.len() == 1 => self.finish(),
                0 => self.start_pass(),
                1 => self.promote_leftover(),
                _ => self.merge_front(),
            },
            EngineState::Sorted => Vec::new(),
        };

        if prev != EngineState::Sorted {
            debug!(
                "pass {}: {:?} -> {:?}, {} pending runs, {} done runs, {} moves",
                self.pass, prev, self.state,
                self.pending.len(), self.done.len(), moves.len()
            );
            for m in &moves {
                trace!("  #{}: {:?} -> {:?}", m.origin, m.source(), m.target());
            }
        }

        Step { new_state: self.state, moves }
    }

    /// Drives the engine until it reports `Sorted`.
    pub fn steps(&mut self) -> Steps<'_, T, F> {
        let finished = self.state == EngineState::Sorted;
        Steps { engine: self, finished }
    }

    fn done_len(&self) -> usize {
        self.done.iter().map(Run::len).sum()
    }

    /// Explodes every done run into singletons, keeping left-to-right order.
    fn split(&mut self) -> Vec<MoveRecord<T>> {
        let done = mem::take(&mut self.done);
        let mut moves = Vec::with_capacity(self.len);
        for entry in done.into_iter().flat_map(Run::into_entries) {
            let k = moves.len();
            moves.push(MoveRecord::new(entry, Slot::done(k), Slot::pending(k)));
            self.pending.push_back(Run::singleton(entry));
        }
        self.state = EngineState::Merging;
        self.pass = 1;
        moves
    }

    /// The done runs become the pending runs of the next pass.
    fn start_pass(&mut self) -> Vec<MoveRecord<T>> {
        let done = mem::take(&mut self.done);
        let moves = done
            .iter()
            .flat_map(|r| r.entries())
            .enumerate()
            .map(|(k, &e)| MoveRecord::new(e, Slot::done(k), Slot::pending(k)))
            .collect();
        self.pending = done.into();
        self.pass += 1;
        moves
    }

    fn promote_leftover(&mut self) -> Vec<MoveRecord<T>> {
        let m = self.done_len();
        let Some(run) = self.pending.pop_front() else { return Vec::new(); };
        let moves = run
            .entries()
            .iter()
            .enumerate()
            .map(|(k, &e)| MoveRecord::new(e, Slot::pending(k), Slot::done(m + k)))
            .collect();
        self.done.push(run);
        moves
    }

    /// Merges the two leftmost pending runs onto the end of `done`.
    fn merge_front(&mut self) -> Vec<MoveRecord<T>> {
        debug_assert!(self.pending.len() >= 2);
        let m = self.done_len();
        let (Some(left), Some(right)) = (self.pending.pop_front(), self.pending.pop_front())
        else { return Vec::new(); };

        // left and right occupied pending slots 0..consumed, so the merge's
        // index transform is also their flat pending slot
        let consumed = left.len() + right.len();
        let (merged, src) = seq_merge(left.entries(), right.entries(), &self.less);
        debug_assert!(is_sorted_serial(&merged, &self.less));

        let mut moves: Vec<_> = merged
            .iter()
            .zip(src)
            .enumerate()
            .map(|(k, (&e, s))| MoveRecord::new(e, Slot::pending(s), Slot::done(m + k)))
            .collect();

        // the runs still waiting shift left over the consumed slots
        let rest = self.pending.iter().flat_map(|r| r.entries());
        moves.extend(rest.enumerate().map(|(k, &e)| {
            MoveRecord::new(e, Slot::pending(k + consumed), Slot::pending(k))
        }));

        self.done.push(Run::from_entries(merged));
        moves
    }

    fn finish(&mut self) -> Vec<MoveRecord<T>> {
        self.state = EngineState::Sorted;
        Vec::new()
    }
}

/// Iterator over the steps of a sort, ending with the `Sorted` step.
pub struct Steps<'a, T, F> {
    engine: &'a mut MergeEngine<T, F>,
    finished: bool,
}

impl<'a, T, F> Steps<'a, T, F> {
    pub fn engine(&self) -> &MergeEngine<T, F> { &*self.engine }
}

impl<'a, T, F> Iterator for Steps<'a, T, F>
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    type Item = Step<T>;

    fn next(&mut self) -> Option<Step<T>> {
        if self.finished { return None; }
        let step = self.engine.advance();
        self.finished = step.new_state == EngineState::Sorted;
        Some(step)
    }
}

impl<T, F> std::fmt::Debug for MergeEngine<T, F>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("MergeEngine")
            .field("state", &self.state)
            .field("pass", &self.pass)
            .field("pending", &self.pending)
            .field("done", &self.done)
            .finish()
    }
}
