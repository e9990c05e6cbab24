//! Coverage threshold resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully-populated coverage threshold, one minimum percentage per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageThreshold {
    pub branches: u8,
    pub functions: u8,
    pub lines: u8,
    pub statements: u8,
}

impl Default for CoverageThreshold {
    fn default() -> Self {
        Self {
            branches: 100,
            functions: 100,
            lines: 100,
            statements: 100,
        }
    }
}

impl CoverageThreshold {
    /// Overlay the fields an override specifies, keeping the rest.
    pub fn merge(self, over: &ThresholdOverride) -> Self {
        Self {
            branches: over.branches.unwrap_or(self.branches),
            functions: over.functions.unwrap_or(self.functions),
            lines: over.lines.unwrap_or(self.lines),
            statements: over.statements.unwrap_or(self.statements),
        }
    }
}

/// Partial threshold override attached to a shard definition. Unspecified
/// fields fall through to the baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdOverride {
    pub branches: Option<u8>,
    pub functions: Option<u8>,
    pub lines: Option<u8>,
    pub statements: Option<u8>,
}

impl fmt::Display for ThresholdOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("branches", self.branches),
            ("functions", self.functions),
            ("lines", self.lines),
            ("statements", self.statements),
        ];

        let mut wrote = false;
        for (label, value) in fields {
            if let Some(value) = value {
                if wrote {
                    write!(f, " ")?;
                }
                write!(f, "{label}={value}")?;
                wrote = true;
            }
        }
        Ok(())
    }
}
