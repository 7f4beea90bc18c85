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

//! Step-wise bottom-up merge sort.
//!
//! A [`MergeEngine`] performs one unit of sort work per call to
//! [`MergeEngine::advance`] and reports, for every element whose position
//! changed, where it was and where it went. Positions are flat slot numbers
//! in one of two areas: runs waiting to be merged ([`Area::Pending`]) and
//! runs produced by the current pass ([`Area::Done`]).

mod internal;
mod engine;
mod error;
mod input;
mod run;
pub mod random;

pub use engine::{MergeEngine, Steps};
pub use error::{EngineError, InputError};
pub use input::InputList;
pub use run::{Area, EngineState, Entry, MoveRecord, Run, Slot, Step};
