//! Shared value types.
//!
//! Both engines store plain `Item`s and speak the same vocabulary for
//! growth decisions, insert results, and display snapshots.

use serde::{Deserialize, Serialize};

/// The element kind stored by every queue.
pub type Item = i32;

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// Which engine a queue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueKind {
    /// Front/rear window that only moves forward.
    Linear,
    /// Modular ring that wraps `rear` back to slot 0.
    Circular,
}

impl QueueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QueueKind::Linear => "linear",
            QueueKind::Circular => "circular",
        }
    }
}

impl std::fmt::Display for QueueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QueueKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(QueueKind::Linear),
            "circular" => Ok(QueueKind::Circular),
            other => Err(format!("unknown queue kind: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

/// The caller's answer when an insert finds the queue full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    /// Abandon the insert; nothing changes.
    Decline,
    /// Grow the buffer to this many slots, then insert.
    To(usize),
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A successful insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inserted {
    pub item: Item,
    /// Buffer slot the item was written to (the new rear).
    pub index: usize,
    /// New capacity, if the insert had to grow the buffer first.
    pub grown_to: Option<usize>,
}

/// Point-in-time view of a queue, in logical (front to rear) order.
///
/// `front`/`rear` of `None` is the empty sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub kind: QueueKind,
    pub capacity: usize,
    pub front: Option<usize>,
    pub rear: Option<usize>,
    pub items: Vec<Item>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
