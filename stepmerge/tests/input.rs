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

use stepmerge::*;


type List = InputList<i64>;

#[test]
fn starts_empty() {
    let l = List::new();
    assert!(l.is_empty());
    assert_eq!(l.visible_rows(), 1);
    assert_eq!(l.title(), "Array: []");
    assert!(!l.can_sort());
}

#[test]
fn commit_appends_and_replaces() {
    let mut l = List::new();
    l.commit(0, 4).unwrap();
    l.commit(1, -2).unwrap();
    l.commit(0, 7).unwrap();
    assert_eq!(l.values(), &[7, -2]);
    assert_eq!(l.title(), "Array: [7, -2]");
    assert_eq!(l.visible_rows(), 3);
    assert!(l.can_sort());
    assert_eq!(l.commit(5, 1), Err(InputError::OutOfRange { row: 5, len: 2 }));
}

#[test]
fn caps_at_sixteen() {
    let mut l = List::from_values(&(0..16).collect::<Vec<_>>()).unwrap();
    assert_eq!(l.visible_rows(), 16);
    assert_eq!(l.commit(16, 99), Err(InputError::Full { max: 16 }));
    // replacing still works when full
    l.commit(15, 99).unwrap();
    assert_eq!(l.values()[15], 99);

    assert_eq!(
        List::from_values(&[0; 17]),
        Err(InputError::Full { max: List::MAX_ELEMENTS })
    );
}

#[test]
fn text_edits() {
    let mut l = List::new();
    l.commit_text(0, " 12 ").unwrap();
    l.commit_text(1, "-3").unwrap();
    l.commit_text(2, "5").unwrap();
    assert_eq!(l.values(), &[12, -3, 5]);

    assert_eq!(
        l.commit_text(1, "x1"),
        Err(InputError::NotANumber { text: "x1".to_string() })
    );
    assert_eq!(l.values(), &[12, -3, 5]);

    // clearing the trailing empty row changes nothing
    l.commit_text(3, "").unwrap();
    assert_eq!(l.len(), 3);

    // clearing a filled row deletes it
    l.commit_text(1, "").unwrap();
    assert_eq!(l.values(), &[12, 5]);
}

#[test]
fn remove_and_swap() {
    let mut l = List::from_values(&[1, 2, 3]).unwrap();
    l.swap(0, 2).unwrap();
    assert_eq!(l.values(), &[3, 2, 1]);
    assert_eq!(l.swap(1, 3), Err(InputError::OutOfRange { row: 3, len: 3 }));
    assert_eq!(l.remove(1), Ok(2));
    assert_eq!(l.values(), &[3, 1]);
    assert_eq!(l.remove(2), Err(InputError::OutOfRange { row: 2, len: 2 }));
}

#[test]
fn full_list_shows_an_empty_row_after_removal() {
    let mut l = List::from_values(&[0; 16]).unwrap();
    l.remove(0).unwrap();
    assert_eq!(l.visible_rows(), 16);
    assert_eq!(l.len(), 15);
}

#[test]
fn engine_needs_two_values() {
    let l = List::from_values(&[42]).unwrap();
    assert_eq!(l.engine().unwrap_err(), InputError::TooFew { len: 1, min: 2 });

    let l = List::from_values(&[3, 1, 2]).unwrap();
    let mut e = l.engine().unwrap();
    e.steps().for_each(drop);
    assert_eq!(e.sorted(), Some(vec![1, 2, 3]));
}

#[test]
fn narrow_integer_types() {
    let mut l = InputList::<u8>::new();
    assert!(matches!(l.commit_text(0, "300"), Err(InputError::NotANumber { .. })));
    assert!(matches!(l.commit_text(0, "-1"), Err(InputError::NotANumber { .. })));
    l.commit_text(0, "255").unwrap();
    assert_eq!(l.values(), &[255]);
}

#[test]
fn error_messages() {
    assert_eq!(
        InputError::Full { max: 16 }.to_string(),
        "the input list is full (16 elements)"
    );
    assert_eq!(
        InputError::from(EngineError::InvalidInput { len: 1 }).to_string(),
        "cannot sort 1 element(s): at least 2 are required"
    );
}
