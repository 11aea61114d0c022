use std::{error::Error, fmt::Display};

/// Precondition violations reported by the heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapErr {
    /// The operation needs at least one element.
    Empty,
    /// The index does not name an element of the sequence.
    OutOfRange { index: usize, len: usize },
}

impl Error for HeapErr {}

impl Display for HeapErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapErr::Empty => write!(f, "heap is empty"),
            HeapErr::OutOfRange { index, len } => {
                write!(f, "index {} out of range for heap of length {}", index, len)
            }
        }
    }
}

#[test]
fn display_empty() {
    assert_eq!(HeapErr::Empty.to_string(), "heap is empty");
}

#[test]
fn display_out_of_range() {
    let err = HeapErr::OutOfRange { index: 4, len: 3 };
    assert_eq!(err.to_string(), "index 4 out of range for heap of length 3");
    let boxed: Box<dyn Error> = Box::new(err);
    assert!(boxed.source().is_none());
}
