use std::error::Error;
use std::fmt::{Display, Formatter};

/// Cyclic list or cyclic iterator failure
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum CyclicListError {
    /// The operation needs at least one element.
    EmptyCyclicList,
    /// A negative length was requested.
    NegativeLength(isize),
    /// The iterator has exhausted its traversal window in the requested direction.
    NoSuchElement,
    /// `set` without a preceding `next`/`previous` since the last structural change.
    NoPointerToSet,
    /// `remove` without a preceding `next`/`previous` since the last structural change.
    NoPointerToRemove,
}

impl Display for CyclicListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CyclicListError::EmptyCyclicList => write!(f, "Cyclic list is empty"),
            CyclicListError::NegativeLength(len) => write!(f, "Expected non-negative length, found {len}"),
            CyclicListError::NoSuchElement => write!(f, "No such element"),
            CyclicListError::NoPointerToSet => write!(f, "No pointer to set object"),
            CyclicListError::NoPointerToRemove => write!(f, "No pointer to remove object"),
        }
    }
}

impl Error for CyclicListError {}

/// Two-sided list failure
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum TwoSidedListError {
    /// Logical index outside of the list window.
    IndexOutOfRange(isize),
    /// Logical range `from..to` is reversed or not covered by the list.
    InvalidRange(isize, isize),
}

impl Display for TwoSidedListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TwoSidedListError::IndexOutOfRange(index) => write!(f, "Index {index} out of range"),
            TwoSidedListError::InvalidRange(from, to) => write!(f, "Invalid range {from}..{to}"),
        }
    }
}

impl Error for TwoSidedListError {}
