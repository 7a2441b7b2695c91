//! # queue-lab
//!
//! Linear and circular queue engines over an owned contiguous buffer,
//! with caller-approved growth, plus the interactive menu that drives them.
//!
//! Both engines track `front`/`rear` indices with an empty sentinel and
//! derive fullness from index arithmetic alone. Growth is all-or-nothing:
//! a failed allocation leaves the queue exactly as it was.

pub mod config;
pub mod error;
pub mod menu;
pub mod model;
pub mod queue;
pub mod telemetry;
