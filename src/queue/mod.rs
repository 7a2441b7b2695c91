//! Queue engines: a linear front/rear window and a circular ring.
//!
//! Each engine exclusively owns its slot buffer and tracks `front`/`rear`
//! as `Option<usize>`, with `None` as the empty sentinel. Fullness and
//! emptiness are derived from those two indices alone; there is no
//! element counter.

pub(crate) mod buffer;
pub mod circular;
pub mod linear;

use buffer::Buffer;
pub use circular::CircularQueue;
pub use linear::LinearQueue;

use crate::error::Result;
use crate::model::{Growth, Inserted, Item, QueueKind, Snapshot};

/// Operations shared by both engines.
pub trait QueueEngine {
    fn kind(&self) -> QueueKind;

    fn capacity(&self) -> usize;

    fn front(&self) -> Option<usize>;

    fn rear(&self) -> Option<usize>;

    fn is_empty(&self) -> bool;

    /// Would the next insert have to grow the buffer?
    fn is_full(&self) -> bool;

    /// Insert `item`, asking `on_full` for a growth decision only when the
    /// queue has no free slot. `on_full` receives the current capacity.
    ///
    /// # Errors
    ///
    /// - `QueueFull` when the caller declines growth.
    /// - `InvalidNewSize` when the requested capacity is not larger.
    /// - `AllocationFailed` when the larger buffer cannot be allocated.
    ///
    /// The queue is unchanged in every error case.
    fn insert_with<F>(&mut self, item: Item, on_full: F) -> Result<Inserted>
    where
        F: FnOnce(usize) -> Growth;

    /// Insert with a growth decision made up front. `growth` is ignored
    /// unless the queue is full.
    fn insert(&mut self, item: Item, growth: Growth) -> Result<Inserted> {
        self.insert_with(item, |_| growth)
    }

    /// Remove and return the oldest item.
    ///
    /// # Errors
    ///
    /// `QueueEmpty` with no mutation.
    fn delete(&mut self) -> Result<Item>;

    /// Items from front to rear. Empty when the queue is empty.
    fn peek_all(&self) -> Vec<Item>;

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            kind: self.kind(),
            capacity: self.capacity(),
            front: self.front(),
            rear: self.rear(),
            items: self.peek_all(),
        }
    }
}

/// Build an engine of the requested kind.
pub fn build(kind: QueueKind, capacity: usize) -> Result<AnyQueue> {
    Ok(match kind {
        QueueKind::Linear => AnyQueue::Linear(LinearQueue::new(capacity)?),
        QueueKind::Circular => AnyQueue::Circular(CircularQueue::new(capacity)?),
    })
}

/// Either engine, chosen at runtime.
#[derive(Debug)]
pub enum AnyQueue {
    Linear(LinearQueue),
    Circular(CircularQueue),
}

macro_rules! dispatch {
    ($self:expr, $q:ident => $body:expr) => {
        match $self {
            AnyQueue::Linear($q) => $body,
            AnyQueue::Circular($q) => $body,
        }
    };
}

impl QueueEngine for AnyQueue {
    fn kind(&self) -> QueueKind {
        dispatch!(self, q => q.kind())
    }

    fn capacity(&self) -> usize {
        dispatch!(self, q => q.capacity())
    }

    fn front(&self) -> Option<usize> {
        dispatch!(self, q => q.front())
    }

    fn rear(&self) -> Option<usize> {
        dispatch!(self, q => q.rear())
    }

    fn is_empty(&self) -> bool {
        dispatch!(self, q => q.is_empty())
    }

    fn is_full(&self) -> bool {
        dispatch!(self, q => q.is_full())
    }

    fn insert_with<F>(&mut self, item: Item, on_full: F) -> Result<Inserted>
    where
        F: FnOnce(usize) -> Growth,
    {
        dispatch!(self, q => q.insert_with(item, on_full))
    }

    fn delete(&mut self) -> Result<Item> {
        dispatch!(self, q => q.delete())
    }

    fn peek_all(&self) -> Vec<Item> {
        dispatch!(self, q => q.peek_all())
    }
}
