//! Circular queue: `front`/`rear` step modulo capacity around a ring.
//!
//! Emptiness is carried by the `None` sentinel, so `front == rear` always
//! means exactly one element and the ring is full when
//! `(rear + 1) % capacity == front`. Growth copies the ring into a fresh
//! buffer starting at slot 0, which removes any wrap-around.

use tracing::{debug, info, warn};

use super::{Buffer, QueueEngine};
use crate::error::{Error, Result};
use crate::model::{Growth, Inserted, Item, QueueKind};

#[derive(Debug)]
pub struct CircularQueue {
    buffer: Buffer,
    front: Option<usize>,
    rear: Option<usize>,
}

impl CircularQueue {
    /// Allocate an empty ring with `capacity` slots.
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

    fn bounds(&self) -> Option<(usize, usize)> {
        self.front.zip(self.rear)
    }

    fn next(&self, index: usize) -> usize {
        (index + 1) % self.buffer.capacity()
    }

    /// `(front, rear)` when the ring has no free slot.
    fn full_bounds(&self) -> Option<(usize, usize)> {
        self.bounds()
            .filter(|&(front, rear)| self.next(rear) == front)
    }

    fn grow(&mut self, front: usize, rear: usize, new_capacity: usize) -> Result<()> {
        let current = self.buffer.capacity();
        if new_capacity <= current || new_capacity == 0 {
            return Err(Error::InvalidNewSize {
                requested: new_capacity,
                current,
            });
        }

        let copied = match self.buffer.relinearize(front, rear, new_capacity) {
            Ok(copied) => copied,
            Err(e) => {
                warn!(capacity = current, requested = new_capacity, "circular queue growth failed");
                return Err(e);
            }
        };
        self.front = Some(0);
        self.rear = Some(copied - 1);
        info!(from = current, to = new_capacity, copied, "circular queue grown");
        Ok(())
    }
}

impl QueueEngine for CircularQueue {
    fn kind(&self) -> QueueKind {
        QueueKind::Circular
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
        self.front.is_none()
    }

    fn is_full(&self) -> bool {
        self.full_bounds().is_some()
    }

    fn insert_with<F>(&mut self, item: Item, on_full: F) -> Result<Inserted>
    where
        F: FnOnce(usize) -> Growth,
    {
        let mut grown_to = None;
        if let Some((front, rear)) = self.full_bounds() {
            let capacity = self.buffer.capacity();
            match on_full(capacity) {
                Growth::Decline => return Err(Error::QueueFull { capacity }),
                Growth::To(new_capacity) => {
                    self.grow(front, rear, new_capacity)?;
                    grown_to = Some(new_capacity);
                }
            }
        }

        let index = match self.rear {
            Some(rear) if self.front.is_some() => self.next(rear),
            _ => {
                self.front = Some(0);
                0
            }
        };
        self.rear = Some(index);
        self.buffer.set(index, item);

        debug!(item, index, "circular insert");
        Ok(Inserted {
            item,
            index,
            grown_to,
        })
    }

    fn delete(&mut self) -> Result<Item> {
        let (front, rear) = self.bounds().ok_or(Error::QueueEmpty)?;
        let item = self.buffer.get(front);
        if front == rear {
            self.front = None;
            self.rear = None;
        } else {
            self.front = Some(self.next(front));
        }
        debug!(item, index = front, "circular delete");
        Ok(item)
    }

    fn peek_all(&self) -> Vec<Item> {
        let Some((front, rear)) = self.bounds() else {
            return Vec::new();
        };
        let mut items = Vec::new();
        let mut i = front;
        loop {
            items.push(self.buffer.get(i));
            if i == rear {
                break;
            }
            i = self.next(i);
        }
        items
    }
}
