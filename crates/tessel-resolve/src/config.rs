//! Resolved per-run configuration.

use serde::{Serialize, Serializer};
use tessel_registry::{CoverageThreshold, SuffixRules};

/// Inclusion or exclusion glob. Exclusions serialize with the consuming
/// engine's `!` negation prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobRule {
    Include(String),
    Exclude(String),
}

impl Serialize for GlobRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            GlobRule::Include(glob) => serializer.serialize_str(glob),
            GlobRule::Exclude(glob) => serializer.collect_str(&format_args!("!{glob}")),
        }
    }
}

/// Per-run configuration handed to the external test engine.
///
/// Field names follow the engine's camelCase config surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    pub test_match: Vec<GlobRule>,
    pub collect_coverage_from: Vec<GlobRule>,
    pub coverage_threshold: CoverageThreshold,
    pub coverage_directory: String,
    pub max_workers: usize,
}

impl RunConfig {
    /// Fallback configuration covering the whole tree under the global
    /// threshold.
    pub fn fallback(rules: &SuffixRules, max_workers: usize) -> Self {
        Self {
            test_match: vec![GlobRule::Include(format!("**/*{}", rules.test))],
            collect_coverage_from: vec![GlobRule::Include(format!("**/*{}", rules.source))],
            coverage_threshold: CoverageThreshold::default(),
            coverage_directory: "coverage".to_string(),
            max_workers,
        }
    }
}
