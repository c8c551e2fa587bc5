//! Word segmentation.
//!
//! A word is walked left to right. At every step the active rule looks at
//! the remaining letters and either claims a group of them (a matched run)
//! or lets one letter fall into the current unmatched run. The split
//! position decides how matched runs attach to their unmatched neighbours.

/// Fixed letter classes used by the rules.
pub mod alphabet;

/// The closed set of matching rules.
pub mod rule;

/// The partitioning state machine and split positions.
pub mod partition;
