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

use std::fmt::Display;

use num_traits::PrimInt;

use crate::engine::MergeEngine;
use crate::error::InputError;


/// The editable list of values a sort is started from.
///
/// Rows are edited one at a time: a row is either one of the filled rows or
/// the single trailing empty row that appends a new value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputList<T> {
    values: Vec<T>,
}

impl<T> InputList<T>
where
    T: PrimInt + Display,
{
    /// limit of elements for visualisation
    pub const MAX_ELEMENTS: usize = 16;
    pub const MIN_TO_SORT: usize = 2;

    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Appends `values` in order, failing once the list is full.
    pub fn from_values(values: &[T]) -> Result<Self, InputError> {
        let mut list = Self::new();
        for &v in values {
            list.commit(list.len(), v)?;
        }
        Ok(list)
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn values(&self) -> &[T] { &self.values }

    /// Replaces the value at `row`, or appends it when `row` is the empty row.
    pub fn commit(&mut self, row: usize, value: T) -> Result<(), InputError> {
        let len = self.len();
        if row < len {
            self.values[row] = value;
        } else if row == len {
            if len == Self::MAX_ELEMENTS {
                return Err(InputError::Full { max: Self::MAX_ELEMENTS });
            }
            self.values.push(value);
        } else {
            return Err(InputError::OutOfRange { row, len });
        }
        Ok(())
    }

    /// Applies the text of a row. Clearing a filled row deletes it; clearing
    /// the empty row does nothing.
    pub fn commit_text(&mut self, row: usize, text: &str) -> Result<(), InputError> {
        let text = text.trim();
        if text.is_empty() {
            if row < self.len() { self.remove(row)?; }
            return Ok(());
        }
        let value = T::from_str_radix(text, 10)
            .map_err(|_| InputError::NotANumber { text: text.to_string() })?;
        self.commit(row, value)
    }

    pub fn remove(&mut self, row: usize) -> Result<T, InputError> {
        if row >= self.len() {
            return Err(InputError::OutOfRange { row, len: self.len() });
        }
        Ok(self.values.remove(row))
    }

    /// Exchanges two filled rows.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), InputError> {
        let len = self.len();
        if let Some(&row) = [a, b].iter().find(|&&r| r >= len) {
            return Err(InputError::OutOfRange { row, len });
        }
        self.values.swap(a, b);
        Ok(())
    }

    /// Filled rows plus the empty row, while there is room for one.
    pub fn visible_rows(&self) -> usize {
        (self.len() + 1).min(Self::MAX_ELEMENTS)
    }

    pub fn can_sort(&self) -> bool {
        self.len() >= Self::MIN_TO_SORT
    }

    /// e.g. `Array: [3, 1, 2]`
    pub fn title(&self) -> String {
        let items: Vec<String> = self.values.iter().map(T::to_string).collect();
        format!("Array: [{}]", items.join(", "))
    }

    pub fn engine(&self) -> Result<MergeEngine<T>, InputError> {
        if !self.can_sort() {
            return Err(InputError::TooFew { len: self.len(), min: Self::MIN_TO_SORT });
        }
        Ok(MergeEngine::new(&self.values)?)
    }
}
