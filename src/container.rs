use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use crate::{error::*, sort, ContainerOptions, DEFAULT_CAPACITY};

/// A growable, ordered container backed by a single slot buffer.
///
/// Slots `[0, len)` hold the elements in positional order, all other slots
/// are empty. When an insertion finds the buffer full, a new buffer with
/// `floor(capacity * 1.75)` slots (at least one more than before) is
/// allocated and the elements are moved over. The buffer never shrinks.
///
/// Equality, hashing and display operate over the full buffer, so two
/// containers with the same elements but different capacities are not
/// equal.
///
/// ```
/// use ordered_container::OrderedContainer;
///
/// let mut container = OrderedContainer::new();
/// container.append(8);
/// container.append(9);
/// container.insert_at(0, 2).unwrap();
/// container.sort();
///
/// assert_eq!(container.get(0), Ok(&2));
/// assert_eq!(container.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedContainer<T> {
    backing: Box<[Option<T>]>,
    len: usize,
}

impl<T> OrderedContainer<T> {
    /// Creates an empty container with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty container with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            backing: std::iter::repeat_with(|| None).take(capacity).collect(),
            len: 0,
        }
    }

    /// Creates an empty container as described by the options.
    pub fn with_options(options: ContainerOptions) -> Self {
        let ContainerOptions { initial_capacity } = options;
        Self::with_capacity(initial_capacity)
    }

    /// The number of elements in the container.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of allocated slots, always at least [`len`](Self::len).
    pub fn capacity(&self) -> usize {
        self.backing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The raw backing buffer, including the empty slots past `len`.
    pub fn as_raw(&self) -> &[Option<T>] {
        &self.backing
    }

    /// Appends an element to the end of the container.
    pub fn append(&mut self, value: T) {
        self.reserve_slot();
        self.backing[self.len] = Some(value);
        self.len += 1;
    }

    /// Inserts an element at `index`, shifting all later elements
    /// one position to the right.
    ///
    /// `index == len` appends. Any larger index is rejected and the
    /// container is left untouched.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }

        self.reserve_slot();
        self.backing[self.len] = Some(value);
        self.backing[index..=self.len].rotate_right(1);
        self.len += 1;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.backing[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let err = self.out_of_range(index);
        self.backing[..self.len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(err)
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Removes the element at `index`, shifting all later elements
    /// one position to the left.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }

        let removed = self.backing[index]
            .take()
            .ok_or_else(|| self.out_of_range(index))?;

        // Moves the now empty slot to the end of the live range.
        self.backing[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(removed)
    }

    /// Removes all elements. The capacity is kept.
    pub fn clear(&mut self) {
        self.backing.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
        tracing::trace!(capacity = self.capacity(), "cleared container");
    }

    fn reserve_slot(&mut self) {
        if self.len < self.backing.len() {
            return;
        }

        let from = self.backing.len();
        let to = (from * 7 / 4).max(from + 1);

        let old = std::mem::take(&mut self.backing);
        self.backing = old
            .into_vec()
            .into_iter()
            .chain(std::iter::repeat_with(|| None))
            .take(to)
            .collect();

        tracing::debug!(from, to, len = self.len, "grew backing buffer");
    }

    fn out_of_range(&self, index: usize) -> ContainerError {
        ContainerError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }
}

impl<T: PartialEq> OrderedContainer<T> {
    /// The index of the first element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.backing[..self.len]
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns whether an element was removed.
    pub fn remove_value(&mut self, value: &T) -> bool {
        match self.position(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T: Ord> OrderedContainer<T> {
    /// Sorts the container in place, ascending.
    ///
    /// The whole buffer is sorted, empty slots end up last, so the elements
    /// stay in `[0, len)`. The sort is not stable.
    pub fn sort(&mut self) {
        sort::quicksort(&mut self.backing);
        tracing::trace!(len = self.len, capacity = self.capacity(), "sorted container");
    }

    pub fn is_sorted(&self) -> bool {
        self.backing[..self.len].windows(2).all(|w| w[0] <= w[1])
    }
}

impl<T> Default for OrderedContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for OrderedContainer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.backing == other.backing
    }
}

impl<T: Eq> Eq for OrderedContainer<T> {}

impl<T: Hash> Hash for OrderedContainer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.backing.hash(state);
    }
}

impl<T: Display> Display for OrderedContainer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Container{{array=[")?;
        for (i, slot) in self.backing.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(value) => write!(f, "{value}")?,
                None => write!(f, "<empty>")?,
            }
        }
        write!(f, "], size={}}}", self.len)
    }
}
