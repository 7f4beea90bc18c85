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

use crate::run::Entry;


/// Serial two-pointer merge of `in1` and `in2`, comparing entries by value.
/// Ties take from `in1` first, so the merge is stable.
///
/// Alongside the merged entries it returns the index transform: for each
/// output position, the position the entry had in `in1` followed by `in2`.
pub(crate) fn seq_merge<T, F>(
    in1: &[Entry<T>],
    in2: &[Entry<T>],
    less: &F
) -> (Vec<Entry<T>>, Vec<usize>)
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    let (n1, n2) = (in1.len(), in2.len());
    let mut out = Vec::with_capacity(n1 + n2);
    let mut src = Vec::with_capacity(n1 + n2);
    let (mut i, mut j) = (0, 0);

    loop {
        if i == n1 { // if in1 has no more elements
            out.extend_from_slice(&in2[j..]);
            src.extend(n1 + j..n1 + n2);
            break;
        }
        if j == n2 { // if in2 has no more elements
            out.extend_from_slice(&in1[i..]);
            src.extend(i..n1);
            break;
        }

        if less(in2[j].value, in1[i].value) {
            out.push(in2[j]);
            src.push(n1 + j);
            j += 1;
        } else {
            out.push(in1[i]);
            src.push(i);
            i += 1;
        }
    }

    debug_assert_eq!(out.len(), n1 + n2);
    (out, src)
}

/// Checks that no entry is less than the one before it.
pub(crate) fn is_sorted_serial<T, F>(inp: &[Entry<T>], less: &F) -> bool
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    inp.windows(2).all(|w| !less(w[1].value, w[0].value))
}
