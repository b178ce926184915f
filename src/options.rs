use crate::DEFAULT_CAPACITY;

/// Construction parameters for an [`OrderedContainer`](crate::OrderedContainer).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContainerOptions {
    /// The number of slots allocated up front. Zero is allowed,
    /// the first insertion will grow the buffer.
    pub initial_capacity: usize,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}
