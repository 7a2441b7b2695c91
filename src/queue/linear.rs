//! Linear queue: a front/rear window that only moves forward.
//!
//! Deleting advances `front` without clearing or compacting, so slots
//! before `front` stay dead for the lifetime of the buffer. Once `rear`
//! reaches the last slot the only way to insert again is to grow.

use tracing::{debug, info, warn};

use super::{Buffer, QueueEngine};
use crate::error::{Error, Result};
use crate::model::{Growth, Inserted, Item, QueueKind};

#[derive(Debug)]
pub struct LinearQueue {
    buffer: Buffer,
    front: Option<usize>,
    rear: Option<usize>,
}

impl LinearQueue {
    /// Allocate an empty queue with `capacity` slots.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(0));
        }
        Ok(Self {
            buffer: Buffer::with_capacity(capacity)?,
            front: None,
            rear: None,
        })
    }

    /// Live window `front..=rear`, or `None` when empty.
    fn window(&self) -> Option<(usize, usize)> {
        match (self.front, self.rear) {
            (Some(front), Some(rear)) if front <= rear => Some((front, rear)),
            _ => None,
        }
    }

    fn grow(&mut self, new_capacity: usize) -> Result<()> {
        let current = self.buffer.capacity();
        if new_capacity <= current {
            return Err(Error::InvalidNewSize {
                requested: new_capacity,
                current,
            });
        }
        if let Err(e) = self.buffer.grow_in_place(new_capacity) {
            warn!(capacity = current, requested = new_capacity, "linear queue growth failed");
            return Err(e);
        }
        info!(from = current, to = new_capacity, "linear queue grown");
        Ok(())
    }
}

impl QueueEngine for LinearQueue {
    fn kind(&self) -> QueueKind {
        QueueKind::Linear
    }

    fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    fn front(&self) -> Option<usize> {
        self.front
    }

    fn rear(&self) -> Option<usize> {
        self.rear
    }

    fn is_empty(&self) -> bool {
        self.window().is_none()
    }

    fn is_full(&self) -> bool {
        self.rear == Some(self.buffer.capacity() - 1)
    }

    fn insert_with<F>(&mut self, item: Item, on_full: F) -> Result<Inserted>
    where
        F: FnOnce(usize) -> Growth,
    {
        let mut grown_to = None;
        if self.is_full() {
            let capacity = self.buffer.capacity();
            match on_full(capacity) {
                Growth::Decline => return Err(Error::QueueFull { capacity }),
                Growth::To(new_capacity) => {
                    self.grow(new_capacity)?;
                    grown_to = Some(new_capacity);
                }
            }
        }

        if self.front.is_none() {
            self.front = Some(0);
        }
        let index = self.rear.map_or(0, |rear| rear + 1);
        self.rear = Some(index);
        self.buffer.set(index, item);

        debug!(item, index, "linear insert");
        Ok(Inserted {
            item,
            index,
            grown_to,
        })
    }

    fn delete(&mut self) -> Result<Item> {
        let (front, _) = self.window().ok_or(Error::QueueEmpty)?;
        let item = self.buffer.get(front);
        self.front = Some(front + 1);
        debug!(item, index = front, "linear delete");
        Ok(item)
    }

    fn peek_all(&self) -> Vec<Item> {
        match self.window() {
            Some((front, rear)) => self.buffer.range(front, rear).to_vec(),
            None => Vec::new(),
        }
    }
}
