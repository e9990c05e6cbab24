//! Balanced partitioning and runner-group matrix construction.
//!
//! [`partition`] splits an ordered list into contiguous, near-equal groups
//! bounded by a runner budget. [`build`] applies it per platform and emits
//! the runner-group descriptors a CI orchestrator fans out.

pub use self::error::{MatrixError, Result};
pub use self::matrix::{RunnerGroup, ShardMatrix, build};
pub use self::partition::partition;
pub use self::platform::{Platform, PlatformCap, PlatformCaps, Timeouts};

mod error;
mod matrix;
mod partition;
mod platform;
