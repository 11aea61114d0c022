//! A min-max heap over caller-owned sequences.
//!
//! The minimum sits at index 0 and the maximum at index 0, 1 or 2, both
//! reachable in O(1); insertion, removal and in-place key repair cost
//! O(log n). The functions in [`heap`] work over anything implementing
//! [`seq::HeapSeq`], and [`container::prioritydeque::PriorityDeque`] wraps
//! them around an owned `Vec`.
//!
//! For more information about min-max heaps see Atkinson, Sack, Santoro and
//! Strothotte, "Min-Max Heaps and Generalized Priority Queues" (1986).

pub mod bench;
pub mod config;
pub mod container;
pub mod error;
pub mod heap;
pub mod level;
pub mod seq;
pub mod sift;
pub mod utility;

pub use crate::container::prioritydeque::PriorityDeque;
pub use crate::error::HeapErr;
pub use crate::seq::{Counted, HeapSeq, Stats};

#[cfg(test)]
mod tests;
