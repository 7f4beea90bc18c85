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

use stepmerge::{Area, MoveRecord, Run};


/// Values of one area, runs separated by ` | `.
#[allow(dead_code)]
pub(crate) fn row<'a, T, I>(runs: I) -> String
where
    T: Copy + Display + 'a,
    I: IntoIterator<Item = &'a Run<T>>,
{
    let runs: Vec<String> = runs
        .into_iter()
        .map(|r| {
            r.values().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
        }).collect();
    runs.join(" | ")
}

fn area_tag(a: Area) -> char {
    match a {
        Area::Pending => 'P',
        Area::Done => 'D',
    }
}

/// e.g. `5:P0->D1`, sorted by target slot.
#[allow(dead_code)]
pub(crate) fn moves<T: Copy + Display>(moves: &[MoveRecord<T>]) -> String {
    let mut moves = moves.to_vec();
    moves.sort_by_key(|m| (m.to_area == Area::Pending, m.to_slot));
    let items: Vec<String> = moves
        .iter()
        .map(|m| format!(
            "{}:{}{}->{}{}",
            m.value,
            area_tag(m.from_area), m.from_slot,
            area_tag(m.to_area), m.to_slot
        )).collect();
    items.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepmerge::MergeEngine;

    #[test]
    fn rows_and_moves() {
        let mut e = MergeEngine::new(&[5, 3, 1, 4]).unwrap();
        e.advance();
        let step = e.advance();
        assert_eq!(row(e.pending()), "1 | 4");
        assert_eq!(row(e.done()), "3 5");
        assert_eq!(moves(&step.moves), "3:P1->D0 5:P0->D1 1:P2->P0 4:P3->P1");
    }
}
