//! Target-shard resolution against the registry.

use tessel_registry::{PatternKind, ShardRegistry};

use crate::config::{GlobRule, RunConfig};
use crate::error::{ResolveError, Result};

/// Resolve the run configuration for an optional target shard.
///
/// Without a target the base configuration passes through untouched. With a
/// target, every shard declared before it contributes exclusions (its tests
/// run elsewhere) and the target contributes inclusions; shards after the
/// target are left to the catch-all. Both glob lists are reversed before
/// returning, so consumers that short-circuit on first match see the
/// target's own globs first.
pub fn resolve(
    target: Option<&str>,
    registry: &ShardRegistry,
    base: RunConfig,
) -> Result<RunConfig> {
    let Some(target) = target else {
        return Ok(base);
    };

    if registry.get(target).is_none() {
        return Err(ResolveError::UnknownShard {
            name: target.to_string(),
            known: registry.names(),
        });
    }

    let rules = registry.suffixes();
    let mut test_match = Vec::new();
    let mut collect = Vec::new();
    let mut threshold = base.coverage_threshold;

    for def in registry.iter() {
        if def.name == target {
            for pattern in &def.patterns {
                test_match.push(GlobRule::Include(
                    pattern.normalize(PatternKind::TestFile, rules),
                ));
                collect.push(GlobRule::Include(
                    pattern.normalize(PatternKind::SourceFile, rules),
                ));
            }
            if let Some(over) = &def.threshold {
                threshold = threshold.merge(over);
            }
            break;
        }

        for pattern in &def.patterns {
            test_match.push(GlobRule::Exclude(
                pattern.normalize(PatternKind::TestFile, rules),
            ));
            collect.push(GlobRule::Exclude(
                pattern.normalize(PatternKind::SourceFile, rules),
            ));
        }
    }

    test_match.reverse();
    collect.reverse();

    Ok(RunConfig {
        test_match,
        collect_coverage_from: collect,
        coverage_threshold: threshold,
        coverage_directory: format!("coverage/{target}"),
        max_workers: base.max_workers,
    })
}
