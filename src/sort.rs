//! Partition-exchange sort over a slot buffer.
//!
//! Empty slots sort to the high end. The pivot is always the last slot of
//! the current range, so already sorted input hits the quadratic worst case.

/// Sorts all slots in place, ascending, with empty slots last.
///
/// Not stable.
pub(crate) fn quicksort<T: Ord>(mut slots: &mut [Option<T>]) {
    while slots.len() > 1 {
        let pivot = partition(slots);
        let (low, rest) = std::mem::take(&mut slots).split_at_mut(pivot);
        let high = &mut rest[1..];

        // Recurse into the smaller side, so the depth stays logarithmic.
        if low.len() < high.len() {
            quicksort(low);
            slots = high;
        } else {
            quicksort(high);
            slots = low;
        }
    }
}

/// Partitions around the last slot and returns the pivot's final index.
///
/// A slot moves into the low partition if it is occupied and either the
/// pivot is empty or the slot compares less or equal to the pivot.
fn partition<T: Ord>(slots: &mut [Option<T>]) -> usize {
    let high = slots.len() - 1;
    let mut store = 0;

    for j in 0..high {
        let goes_low = match (&slots[j], &slots[high]) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(value), Some(pivot)) => value <= pivot,
        };
        if goes_low {
            slots.swap(store, j);
            store += 1;
        }
    }

    slots.swap(store, high);
    store
}
