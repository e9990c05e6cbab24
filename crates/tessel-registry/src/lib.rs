//! Shard registry, path patterns, and coverage thresholds.
//!
//! A registry is an ordered list of named shard definitions. Order carries
//! meaning: earlier shards win changed-file attribution, and resolving a
//! shard excludes every shard declared before it. The registry is immutable
//! once constructed and is passed explicitly into every consumer.

pub use self::error::{RegistryError, Result};
pub use self::pattern::{ChangedMatcher, PatternKind, ShardPattern, SuffixRules};
pub use self::registry::{ShardDef, ShardRegistry};
pub use self::threshold::{CoverageThreshold, ThresholdOverride};

mod error;
mod pattern;
mod registry;
mod threshold;
