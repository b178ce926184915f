use std::{error::Error, fmt::Display};

/// A result returned by the indexed operations of an
/// [`OrderedContainer`](crate::OrderedContainer).
pub type Result<T> = std::result::Result<T, ContainerError>;

/// An error while accessing an [`OrderedContainer`](crate::OrderedContainer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// The index lies outside the valid range of the operation.
    /// `len` is the logical length at the time of the call.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for ContainerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} outside the container of length {len}")
            }
        }
    }
}

impl Error for ContainerError {}
