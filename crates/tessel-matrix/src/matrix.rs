//! Runner-group matrix construction.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::partition::partition;
use crate::platform::{Platform, PlatformCaps};

/// One CI runner instance and the shards it executes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RunnerGroup {
    pub platform: Platform,
    pub coverage: bool,
    pub name: String,
    pub shards: String,
    pub cache_key: String,
    pub runner_timeout_minutes: u32,
    pub test_timeout_minutes: u32,
}

/// Matrix-mode result: runner groups plus the coverage-report locations the
/// aggregation step expects, one per selected shard.
#[derive(Debug, Clone, Serialize)]
pub struct ShardMatrix {
    pub groups: Vec<RunnerGroup>,
    pub coverage_reports: Vec<String>,
    pub skip: bool,
}

/// Distribute selected shards across every platform's runner budget.
///
/// An empty selection short-circuits to the skip signal without
/// partitioning; it is a valid terminal result, not an error.
pub fn build(shards: &[String], caps: &PlatformCaps) -> Result<ShardMatrix> {
    if shards.is_empty() {
        return Ok(ShardMatrix {
            groups: Vec::new(),
            coverage_reports: Vec::new(),
            skip: true,
        });
    }

    let mut groups = Vec::new();
    for cap in caps.iter() {
        let parts = partition(shards, cap.max_runners)?;
        let total = parts.len();
        let timeouts = cap.platform.timeouts();

        for (index, members) in parts.iter().enumerate() {
            let joined = members.join(" ");
            groups.push(RunnerGroup {
                platform: cap.platform,
                coverage: cap.coverage,
                name: format!("{}-tests-{}-of-{}", cap.platform.label(), index + 1, total),
                cache_key: cache_key(&joined),
                shards: joined,
                runner_timeout_minutes: timeouts.runner_minutes,
                test_timeout_minutes: timeouts.test_minutes,
            });
        }
    }

    let coverage_reports = shards
        .iter()
        .map(|shard| format!("./coverage-reports/{shard}.json"))
        .collect();

    Ok(ShardMatrix {
        groups,
        coverage_reports,
        skip: false,
    })
}

/// Stable content key for a runner group's member list.
fn cache_key(joined: &str) -> String {
    let digest = Sha256::digest(joined.as_bytes());
    hex::encode(&digest[..8])
}
