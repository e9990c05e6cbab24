//! Runner platforms, capacity budgets, and timeout table.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MatrixError;

/// CI runner operating-system class. [`Platform::ALL`] fixes the matrix
/// emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Macos,
    Windows,
}

/// Timeouts for platforms without a dedicated table entry.
pub const DEFAULT_TIMEOUTS: Timeouts = Timeouts {
    runner_minutes: 30,
    test_minutes: 10,
};

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Linux, Platform::Macos, Platform::Windows];

    /// Label used in runner-group names.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Linux => "ubuntu",
            Platform::Macos => "macos",
            Platform::Windows => "windows",
        }
    }

    /// Runner and per-test timeouts in minutes. Platforms without a
    /// dedicated entry fall back to [`DEFAULT_TIMEOUTS`].
    pub fn timeouts(self) -> Timeouts {
        match self {
            Platform::Macos => Timeouts {
                runner_minutes: 45,
                test_minutes: 15,
            },
            Platform::Windows => Timeouts {
                runner_minutes: 60,
                test_minutes: 20,
            },
            _ => DEFAULT_TIMEOUTS,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Linux => "linux",
            Platform::Macos => "macos",
            Platform::Windows => "windows",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Platform {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux" | "ubuntu" => Ok(Platform::Linux),
            "macos" | "darwin" => Ok(Platform::Macos),
            "windows" => Ok(Platform::Windows),
            _ => Err(MatrixError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Timeout budget for one runner platform, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub runner_minutes: u32,
    pub test_minutes: u32,
}

/// Per-platform runner budget and coverage flag.
#[derive(Debug, Clone, Copy)]
pub struct PlatformCap {
    pub platform: Platform,
    pub max_runners: usize,
    pub coverage: bool,
}

/// Capacity table iterated in [`Platform::ALL`] order.
#[derive(Debug, Clone)]
pub struct PlatformCaps {
    entries: Vec<PlatformCap>,
}

impl Default for PlatformCaps {
    fn default() -> Self {
        Self {
            entries: vec![
                PlatformCap {
                    platform: Platform::Linux,
                    max_runners: 3,
                    coverage: true,
                },
                PlatformCap {
                    platform: Platform::Macos,
                    max_runners: 2,
                    coverage: false,
                },
                PlatformCap {
                    platform: Platform::Windows,
                    max_runners: 2,
                    coverage: false,
                },
            ],
        }
    }
}

impl PlatformCaps {
    pub fn set_max_runners(&mut self, platform: Platform, max_runners: usize) {
        for entry in &mut self.entries {
            if entry.platform == platform {
                entry.max_runners = max_runners;
            }
        }
    }

    pub fn set_coverage(&mut self, platform: Platform, coverage: bool) {
        for entry in &mut self.entries {
            if entry.platform == platform {
                entry.coverage = coverage;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlatformCap> {
        self.entries.iter()
    }
}
