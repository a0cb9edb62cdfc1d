//! Configuration types
//!
//! Every section has a `Default` so a missing file, a partial file and
//! environment-only overrides all produce a complete configuration.

use lspe_application::{DEFAULT_HISTORY_SIZE, UndoRedoManager};
use lspe_validate::{ValidationContext, ValidationResult, ValidationService, ValidationSeverity};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Root configuration of the rank editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Logging output
    pub logging: LoggingConfig,

    /// Undo/redo history
    pub history: HistoryConfig,

    /// Validation runs
    pub validation: ValidationSettings,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Emit JSON lines instead of human readable output
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}

/// Undo/redo history configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Commands kept on the undo stack, at least one
    pub max_size: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

impl HistoryConfig {
    /// A fresh history sized by this configuration
    pub fn manager(&self) -> UndoRedoManager {
        UndoRedoManager::with_max_size(self.max_size)
    }
}

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Context used when none is given explicitly
    pub context: ValidationContext,

    /// Least severe level that is reported; `advisory` reports everything
    pub minimum_severity: ValidationSeverity,

    /// Rule ids removed from the service
    pub disabled_rules: Vec<String>,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            context: ValidationContext::Full,
            minimum_severity: ValidationSeverity::Advisory,
            disabled_rules: Vec::new(),
        }
    }
}

impl ValidationSettings {
    /// Unregister the disabled rules; returns how many were removed
    pub fn apply(&self, service: &mut ValidationService) -> usize {
        let mut removed = 0;
        for rule_id in &self.disabled_rules {
            if service.unregister_rule(rule_id) {
                debug!(rule_id = rule_id.as_str(), "Disabled validation rule");
                removed += 1;
            }
        }
        removed
    }

    /// Drop the issues less severe than `minimum_severity`
    pub fn filter(&self, result: &ValidationResult) -> ValidationResult {
        result.filter_by_severity(self.minimum_severity)
    }
}
