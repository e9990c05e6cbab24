//! Path pattern classification and glob normalization.

use regex::Regex;
use serde::Deserialize;

use crate::error::{RegistryError, Result};

/// File suffix pair driving pattern classification and normalization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SuffixRules {
    pub test: String,
    pub source: String,
}

impl Default for SuffixRules {
    fn default() -> Self {
        Self {
            test: ".spec.ts".to_string(),
            source: ".ts".to_string(),
        }
    }
}

/// Which concrete glob a pattern normalizes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    TestFile,
    SourceFile,
}

/// A shard path pattern: one test file, or a directory subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShardPattern {
    File(String),
    Dir(String),
}

impl ShardPattern {
    /// Classify a raw pattern string.
    ///
    /// A trailing test suffix means a single-file pattern. A trailing source
    /// suffix is rejected: single-file patterns must name test files.
    pub fn parse(raw: &str, rules: &SuffixRules) -> Result<Self> {
        let raw = raw.trim_end_matches('/');
        if raw.ends_with(&rules.test) {
            return Ok(ShardPattern::File(raw.to_string()));
        }
        if raw.ends_with(&rules.source) {
            return Err(RegistryError::SourceFilePattern {
                pattern: raw.to_string(),
                suffix: rules.test.clone(),
            });
        }
        Ok(ShardPattern::Dir(raw.to_string()))
    }

    /// Normalize into a concrete glob for the given kind.
    ///
    /// Single-file patterns pass through for test matching and swap to the
    /// source suffix for coverage collection; directory patterns gain a
    /// recursive wildcard plus the kind's suffix.
    pub fn normalize(&self, kind: PatternKind, rules: &SuffixRules) -> String {
        match (self, kind) {
            (ShardPattern::File(f), PatternKind::TestFile) => f.clone(),
            (ShardPattern::File(f), PatternKind::SourceFile) => {
                swap_suffix(f, &rules.test, &rules.source)
            }
            (ShardPattern::Dir(d), PatternKind::TestFile) => format!("{d}/**/*{}", rules.test),
            (ShardPattern::Dir(d), PatternKind::SourceFile) => format!("{d}/**/*{}", rules.source),
        }
    }

    /// Matcher used to attribute changed files to shards.
    ///
    /// Directory patterns claim everything under the directory; single-file
    /// patterns claim the test file and its source twin.
    pub fn changed_matcher(&self, rules: &SuffixRules) -> ChangedMatcher {
        match self {
            ShardPattern::Dir(d) => ChangedMatcher::Glob(compile_glob(&format!("{d}/**/*"))),
            ShardPattern::File(f) => {
                ChangedMatcher::Either(f.clone(), swap_suffix(f, &rules.test, &rules.source))
            }
        }
    }
}

fn swap_suffix(path: &str, from: &str, to: &str) -> String {
    match path.strip_suffix(from) {
        Some(stem) => format!("{stem}{to}"),
        None => path.to_string(),
    }
}

/// Compiled changed-file matcher for one pattern.
#[derive(Debug, Clone)]
pub enum ChangedMatcher {
    Glob(Regex),
    Either(String, String),
}

impl ChangedMatcher {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            ChangedMatcher::Glob(re) => re.is_match(path),
            ChangedMatcher::Either(test, source) => path == test || path == source,
        }
    }
}

/// Translate a path glob into an anchored regex. `**` crosses directory
/// separators, `*` and `?` do not.
fn compile_glob(glob: &str) -> Regex {
    let mut re = String::with_capacity(glob.len() + 8);
    re.push('^');

    let mut chars = glob.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    if chars.peek() == Some(&'/') {
                        // `a/**/b` must also match `a/b`
                        chars.next();
                        re.push_str("(?:.*/)?");
                    } else {
                        re.push_str(".*");
                    }
                } else {
                    re.push_str("[^/]*");
                }
            }
            '?' => re.push_str("[^/]"),
            _ => re.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    re.push('$');
    Regex::new(&re).unwrap()
}
