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

/// An element of a run: its value and its index in the input sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Entry<T> {
    pub value: T,
    pub origin: usize,
}

/// A sequence of entries with non-decreasing values.
///
/// The only exception is the run an engine is built with, which holds the
/// raw input until the first split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run<T> {
    entries: Vec<Entry<T>>,
}

impl<T: Copy> Run<T> {
    pub(crate) fn from_entries(entries: Vec<Entry<T>>) -> Self {
        Self { entries }
    }

    pub(crate) fn singleton(entry: Entry<T>) -> Self {
        Self { entries: vec![entry] }
    }

    pub(crate) fn into_entries(self) -> Vec<Entry<T>> {
        self.entries
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn entries(&self) -> &[Entry<T>] { &self.entries }

    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.entries.iter().map(|e| e.value)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.values().collect()
    }
}

/// The two flat numbering domains of a generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Area {
    Pending,
    Done,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    pub area: Area,
    pub index: usize,
}

impl Slot {
    pub fn pending(index: usize) -> Self {
        Self { area: Area::Pending, index }
    }

    pub fn done(index: usize) -> Self {
        Self { area: Area::Done, index }
    }
}

/// One element's change of position during a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord<T> {
    pub value: T,
    pub origin: usize,
    pub from_area: Area,
    pub from_slot: usize,
    pub to_area: Area,
    pub to_slot: usize,
}

impl<T: Copy> MoveRecord<T> {
    pub(crate) fn new(entry: Entry<T>, from: Slot, to: Slot) -> Self {
        Self {
            value: entry.value,
            origin: entry.origin,
            from_area: from.area,
            from_slot: from.index,
            to_area: to.area,
            to_slot: to.index,
        }
    }

    pub fn source(&self) -> Slot {
        Slot { area: self.from_area, index: self.from_slot }
    }

    pub fn target(&self) -> Slot {
        Slot { area: self.to_area, index: self.to_slot }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    Splitting,
    Merging,
    Sorted,
}

/// The outcome of a single `advance()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step<T> {
    pub new_state: EngineState,
    pub moves: Vec<MoveRecord<T>>,
}
