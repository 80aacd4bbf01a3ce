//! Record normalization stages.
//!
//! - [`project`]: restrict a raw row to a fixed column set
//! - [`Grouper`]: collapse rows into unique (QID, Severity) pairs per IP
//! - [`FieldEquals`]: route projected rows into matched / other streams

pub mod group;
pub mod partition;
pub mod project;

pub use group::{
    Group, GroupEntry, GroupedIndex, Grouper, Observation, PlaceholderMode, SkipReason,
};
pub use partition::{FieldEquals, Partition, Partitioned, partition};
pub use project::{Projector, project};
