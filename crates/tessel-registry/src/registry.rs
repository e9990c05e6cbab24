//! Ordered shard registry and its file form.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{RegistryError, Result};
use crate::pattern::{ShardPattern, SuffixRules};
use crate::threshold::ThresholdOverride;

/// One named shard: path patterns plus an optional threshold override.
///
/// Registry position is semantically significant: earlier shards win
/// changed-file attribution, and a resolved shard excludes every shard
/// declared before it.
#[derive(Debug, Clone)]
pub struct ShardDef {
    pub name: String,
    pub patterns: Vec<ShardPattern>,
    pub threshold: Option<ThresholdOverride>,
}

/// Ordered, immutable collection of shard definitions.
///
/// By convention the final entry is the broadest (the catch-all), so
/// resolving any earlier shard leaves the remainder implicitly covered.
#[derive(Debug, Clone)]
pub struct ShardRegistry {
    defs: Vec<ShardDef>,
    suffixes: SuffixRules,
}

impl ShardRegistry {
    /// Construct a registry, rejecting duplicate names and empty pattern
    /// lists.
    pub fn new(defs: Vec<ShardDef>, suffixes: SuffixRules) -> Result<Self> {
        let mut seen = HashSet::new();
        for def in &defs {
            if !seen.insert(def.name.as_str()) {
                return Err(RegistryError::DuplicateShard(def.name.clone()));
            }
            if def.patterns.is_empty() {
                return Err(RegistryError::EmptyPatterns(def.name.clone()));
            }
        }
        Ok(Self { defs, suffixes })
    }

    /// Parse a registry from its TOML file form.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let file: RegistryFile = toml::from_str(input)?;

        let mut defs = Vec::with_capacity(file.shards.len());
        for raw in file.shards {
            let patterns = raw
                .patterns
                .iter()
                .map(|p| ShardPattern::parse(p, &file.suffixes))
                .collect::<Result<Vec<_>>>()?;
            defs.push(ShardDef {
                name: raw.name,
                patterns,
                threshold: raw.threshold,
            });
        }

        Self::new(defs, file.suffixes)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// The built-in registry used when no registry file is supplied.
    pub fn builtin() -> &'static ShardRegistry {
        &BUILTIN
    }

    pub fn suffixes(&self) -> &SuffixRules {
        &self.suffixes
    }

    pub fn get(&self, name: &str) -> Option<&ShardDef> {
        self.defs.iter().find(|def| def.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShardDef> {
        self.defs.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.defs.iter().map(|def| def.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    suffixes: SuffixRules,
    #[serde(default, rename = "shard")]
    shards: Vec<RawShard>,
}

#[derive(Debug, Deserialize)]
struct RawShard {
    name: String,
    patterns: Vec<String>,
    threshold: Option<ThresholdOverride>,
}

static BUILTIN: Lazy<ShardRegistry> = Lazy::new(|| {
    let defs = vec![
        ShardDef {
            name: "integration".to_string(),
            patterns: vec![ShardPattern::Dir("tests/integration".to_string())],
            threshold: Some(ThresholdOverride {
                branches: Some(80),
                functions: Some(80),
                lines: Some(80),
                statements: Some(80),
            }),
        },
        ShardDef {
            name: "api".to_string(),
            patterns: vec![ShardPattern::Dir("src/api".to_string())],
            threshold: None,
        },
        ShardDef {
            name: "cli".to_string(),
            patterns: vec![
                ShardPattern::Dir("src/cli".to_string()),
                ShardPattern::File("src/main.spec.ts".to_string()),
            ],
            threshold: None,
        },
        ShardDef {
            name: "unit".to_string(),
            patterns: vec![ShardPattern::Dir("src".to_string())],
            threshold: None,
        },
    ];

    ShardRegistry::new(defs, SuffixRules::default()).expect("built-in registry is valid")
});
