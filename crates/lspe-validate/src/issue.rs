//! Validation issue
//!
//! One finding produced by a rule: what is wrong, where, and optionally how
//! to fix it automatically.

use lspe_domain::{RankHierarchy, RankId};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fix::AutoFix;
use crate::severity::ValidationSeverity;

/// Label used for ranks whose name is blank
pub const UNNAMED_RANK: &str = "(unnamed)";

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// How serious the finding is
    pub severity: ValidationSeverity,

    /// Free-form grouping key (`"Rank"`, `"Vehicle"`, `"Station"`, ...)
    pub category: String,

    /// Human readable description
    pub message: String,

    /// Id of the affected rank, when the finding is about one
    pub rank_id: Option<RankId>,

    /// Name of the affected rank at the time of validation
    pub rank_name: String,

    /// Edited property the finding is about
    pub property_name: Option<String>,

    /// Offending item (vehicle model, outfit, station)
    pub item_name: Option<String>,

    /// Id of the rule that produced the finding
    pub rule_id: String,

    /// What the user can do about it
    pub suggested_fix: Option<String>,

    /// Whether the finding can be resolved without user input
    pub is_auto_fixable: bool,

    /// The mutation that resolves it
    pub auto_fix: Option<AutoFix>,
}

impl ValidationIssue {
    /// Create an issue with the given severity
    pub fn new(
        severity: ValidationSeverity,
        rule_id: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category: category.into(),
            message: message.into(),
            rank_id: None,
            rank_name: String::new(),
            property_name: None,
            item_name: None,
            rule_id: rule_id.into(),
            suggested_fix: None,
            is_auto_fixable: false,
            auto_fix: None,
        }
    }

    /// Create an error
    pub fn error(
        rule_id: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ValidationSeverity::Error, rule_id, category, message)
    }

    /// Create a warning
    pub fn warning(
        rule_id: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ValidationSeverity::Warning, rule_id, category, message)
    }

    /// Create an advisory notice
    pub fn advisory(
        rule_id: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ValidationSeverity::Advisory, rule_id, category, message)
    }

    /// Attach the affected rank
    #[must_use]
    pub fn for_rank(mut self, rank: &RankHierarchy) -> Self {
        self.rank_id = Some(rank.id.clone());
        self.rank_name.clone_from(&rank.name);
        self
    }

    /// Attach the property the finding is about
    #[must_use]
    pub fn with_property(mut self, property_name: impl Into<String>) -> Self {
        self.property_name = Some(property_name.into());
        self
    }

    /// Attach the offending item
    #[must_use]
    pub fn with_item(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = Some(item_name.into());
        self
    }

    /// Attach a suggestion for the user
    #[must_use]
    pub fn with_suggested_fix(mut self, suggestion: impl Into<String>) -> Self {
        self.suggested_fix = Some(suggestion.into());
        self
    }

    /// Attach an automatic fix and mark the issue fixable
    #[must_use]
    pub fn with_auto_fix(mut self, fix: AutoFix) -> Self {
        self.is_auto_fixable = true;
        self.auto_fix = Some(fix);
        self
    }

    /// Whether an auto-fix consumer can act on this issue
    ///
    /// Both the flag and the action must be present.
    pub fn can_auto_fix(&self) -> bool {
        self.is_auto_fixable && self.auto_fix.is_some()
    }

    /// Rank name for display, with a placeholder for blank names
    pub fn rank_label(&self) -> &str {
        if self.rank_name.trim().is_empty() {
            UNNAMED_RANK
        } else {
            &self.rank_name
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.category)?;
        if self.rank_id.is_some() || !self.rank_name.is_empty() {
            write!(f, "{}: ", self.rank_label())?;
        }
        write!(f, "{}", self.message)
    }
}
