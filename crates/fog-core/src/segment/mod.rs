//! Segment planning and vertex addressing.
//!
//! A graph whose attribute array does not fit in memory is processed one
//! segment of consecutive vertices at a time. Within a segment, each
//! processing unit owns one partition.
//!
//! - [`SegmentLayout`] - capacities planned from a graph descriptor
//! - [`Partition`] - one unit's clamped share of a segment

mod addressing;
mod planner;

pub use addressing::Partition;
pub use planner::SegmentLayout;
