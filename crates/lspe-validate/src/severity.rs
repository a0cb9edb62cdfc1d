//! Severity levels and validation contexts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity level for validation issues
///
/// Ordered from most to least severe, so `Error < Warning < Advisory`.
/// A severity filter keeps every issue at or below its threshold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    /// Blocks generation; the configuration is broken in-game
    Error,
    /// Undesirable but not fatal
    Warning,
    /// Soft, non-blocking quality hint
    Advisory,
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "Error"),
            Self::Warning => write!(f, "Warning"),
            Self::Advisory => write!(f, "Advisory"),
        }
    }
}

impl FromStr for ValidationSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" | "errors" => Ok(Self::Error),
            "warning" | "warnings" | "warn" => Ok(Self::Warning),
            "advisory" | "advisories" | "all" => Ok(Self::Advisory),
            other => Err(format!(
                "Invalid severity: {other}. Use error, warning, or advisory"
            )),
        }
    }
}

/// The occasion a validation run serves
///
/// Each rule declares the contexts it participates in; the service only
/// dispatches to rules that opted into the requested context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationContext {
    /// Explicit full validation requested by the user
    #[default]
    Full,
    /// Validation after a rank set is loaded
    Startup,
    /// Gate before the XML is regenerated
    PreGenerate,
    /// Live feedback while the user edits
    RealTime,
    /// Only the soft quality hints
    AdvisoryOnly,
}

impl ValidationContext {
    /// All contexts, in declaration order
    pub const ALL: [ValidationContext; 5] = [
        Self::Full,
        Self::Startup,
        Self::PreGenerate,
        Self::RealTime,
        Self::AdvisoryOnly,
    ];
}

impl fmt::Display for ValidationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Startup => write!(f, "startup"),
            Self::PreGenerate => write!(f, "pre-generate"),
            Self::RealTime => write!(f, "real-time"),
            Self::AdvisoryOnly => write!(f, "advisory-only"),
        }
    }
}

impl FromStr for ValidationContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "full" => Ok(Self::Full),
            "startup" => Ok(Self::Startup),
            "pregenerate" => Ok(Self::PreGenerate),
            "realtime" => Ok(Self::RealTime),
            "advisoryonly" | "advisory" => Ok(Self::AdvisoryOnly),
            _ => Err(format!(
                "Invalid validation context: {s}. Use full, startup, pre-generate, real-time, or advisory-only"
            )),
        }
    }
}
