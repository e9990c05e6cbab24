//! Changed-file shard selection.

use tessel_registry::{ChangedMatcher, ShardRegistry};

use crate::error::Result;

/// Select the shards whose patterns claim at least one changed file.
///
/// Each file is attributed to the first registry entry with a matching
/// pattern, mirroring the exclusivity the resolver enforces. The result
/// holds distinct shard names in registry order, not input order, so
/// downstream consumers see a canonical ordering. An empty input selects
/// nothing; callers must treat that as "no shards to run".
pub fn select(changed: &[String], registry: &ShardRegistry) -> Vec<String> {
    let rules = registry.suffixes();
    let matchers: Vec<Vec<ChangedMatcher>> = registry
        .iter()
        .map(|def| {
            def.patterns
                .iter()
                .map(|pattern| pattern.changed_matcher(rules))
                .collect()
        })
        .collect();

    let mut responsible = vec![false; registry.len()];
    for file in changed {
        for (index, shard_matchers) in matchers.iter().enumerate() {
            if shard_matchers.iter().any(|m| m.matches(file)) {
                responsible[index] = true;
                break;
            }
        }
    }

    registry
        .iter()
        .zip(responsible)
        .filter(|(_, hit)| *hit)
        .map(|(def, _)| def.name.clone())
        .collect()
}

/// Parse a changed-file list from its JSON wire form.
pub fn parse_changed_files(input: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(input)?)
}
