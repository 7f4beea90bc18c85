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

use std::{fs, io};

/// The header line of the workspace's integer sequence files.
const SEQUENCE_HEADER: &str = "sequenceInt";

/// Reads whitespace separated values, skipping an optional header.
#[allow(dead_code)]
pub(crate) fn read_file_to_vec<T, P>(fname: P) -> io::Result<Vec<T>>
where
    T: std::str::FromStr,
    P: AsRef<std::path::Path>,
{
    let s = fs::read_to_string(fname)?;
    parse_values(&s)
}

pub(crate) fn parse_values<T>(s: &str) -> io::Result<Vec<T>>
where
    T: std::str::FromStr,
{
    s
        .split_whitespace()
        .enumerate()
        .filter(|(i, w)| !(*i == 0 && *w == SEQUENCE_HEADER))
        .map(|(_, w)| w.parse::<T>().map_err(|_| io::Error::new(
            io::ErrorKind::InvalidData,
            format!("'{}' is not a valid value", w)
        )))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header() {
        let v: Vec<i64> = parse_values("sequenceInt\n5\n-3\n1").unwrap();
        assert_eq!(v, vec![5, -3, 1]);
    }

    #[test]
    fn accepts_plain_lists() {
        let v: Vec<i64> = parse_values("4 2\n9\n").unwrap();
        assert_eq!(v, vec![4, 2, 9]);
    }

    #[test]
    fn rejects_garbage() {
        let r: io::Result<Vec<i64>> = parse_values("1 two 3");
        assert_eq!(r.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }
}
