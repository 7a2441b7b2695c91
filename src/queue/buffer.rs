//! Owned fixed-length slot storage.
//!
//! A `Buffer` never changes length in place. Growth builds a complete
//! replacement vector first and only then swaps it in, so a failed
//! allocation leaves the current slots exactly as they were.

use crate::error::{Error, Result};
use crate::model::Item;

/// Contiguous slots of `Item`, length == capacity at all times.
#[derive(Debug, Clone)]
pub struct Buffer {
    slots: Vec<Item>,
}

impl Buffer {
    /// Allocate `capacity` zeroed slots.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            slots: allocate(capacity)?,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Panics if `index >= capacity`; engines only pass indices inside their window.
    pub fn get(&self, index: usize) -> Item {
        self.slots[index]
    }

    /// Panics if `index >= capacity`.
    pub fn set(&mut self, index: usize, item: Item) {
        self.slots[index] = item;
    }

    /// Contiguous view of `start..=end`. Panics unless `start <= end < capacity`.
    pub fn range(&self, start: usize, end: usize) -> &[Item] {
        &self.slots[start..=end]
    }

    /// Grow to `new_capacity`, keeping every existing slot at its offset.
    ///
    /// Dead slots are carried over along with live ones.
    pub fn grow_in_place(&mut self, new_capacity: usize) -> Result<()> {
        let mut next = allocate(new_capacity)?;
        next[..self.slots.len()].copy_from_slice(&self.slots);
        self.slots = next;
        Ok(())
    }

    /// Grow to `new_capacity`, copying the ring `front..=rear` (stepping
    /// modulo the old capacity) to slots `0..n`. Returns `n`.
    pub fn relinearize(&mut self, front: usize, rear: usize, new_capacity: usize) -> Result<usize> {
        let old_capacity = self.slots.len();
        let mut next = allocate(new_capacity)?;

        let stop = (rear + 1) % old_capacity;
        let mut i = front;
        let mut copied = 0;
        loop {
            next[copied] = self.slots[i];
            copied += 1;
            i = (i + 1) % old_capacity;
            if i == stop {
                break;
            }
        }

        self.slots = next;
        Ok(copied)
    }
}

fn allocate(capacity: usize) -> Result<Vec<Item>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|source| Error::AllocationFailed {
            requested: capacity,
            source,
        })?;
    slots.resize(capacity, 0);
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_capacity_zeroes_slots() {
        let buf = Buffer::with_capacity(4).unwrap();
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.range(0, 3), &[0, 0, 0, 0]);
    }

    #[test]
    fn grow_in_place_keeps_offsets() {
        let mut buf = Buffer::with_capacity(3).unwrap();
        buf.set(0, 1);
        buf.set(1, 2);
        buf.set(2, 3);
        buf.grow_in_place(5).unwrap();
        assert_eq!(buf.capacity(), 5);
        assert_eq!(buf.range(0, 4), &[1, 2, 3, 0, 0]);
    }

    #[test]
    fn relinearize_unwraps_the_ring() {
        let mut buf = Buffer::with_capacity(4).unwrap();
        // Ring holds 30, 40, 10 with front at 2, rear at 0.
        buf.set(2, 30);
        buf.set(3, 40);
        buf.set(0, 10);
        let copied = buf.relinearize(2, 0, 6).unwrap();
        assert_eq!(copied, 3);
        assert_eq!(buf.range(0, 2), &[30, 40, 10]);
        assert_eq!(buf.capacity(), 6);
    }

    #[test]
    fn relinearize_full_ring_copies_every_slot() {
        let mut buf = Buffer::with_capacity(3).unwrap();
        buf.set(1, 7);
        buf.set(2, 8);
        buf.set(0, 9);
        // front 1, rear 0: (rear + 1) % 3 == front, so the walk stops after a full lap
        let copied = buf.relinearize(1, 0, 5).unwrap();
        assert_eq!(copied, 3);
        assert_eq!(buf.range(0, 2), &[7, 8, 9]);
    }

    #[test]
    fn failed_growth_leaves_slots_untouched() {
        let mut buf = Buffer::with_capacity(2).unwrap();
        buf.set(0, 5);
        buf.set(1, 6);
        let err = buf.grow_in_place(usize::MAX).unwrap_err();
        assert!(matches!(err, Error::AllocationFailed { requested, .. } if requested == usize::MAX));
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.range(0, 1), &[5, 6]);
    }
}
