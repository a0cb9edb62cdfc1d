//! Validation result
//!
//! Mutable collection of issues shared by every rule of a run, plus the
//! derived views and reports the editor renders.

use lspe_domain::{RankHierarchy, RankId, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::issue::ValidationIssue;
use crate::severity::ValidationSeverity;

/// Errors and warnings listed, together, before a summary truncates
pub const SUMMARY_MAX_LISTED: usize = 10;

/// Advisories listed before a summary truncates
pub const SUMMARY_MAX_ADVISORIES: usize = 5;

/// Accumulated issues of one or more validation runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an issue
    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// All issues in the order rules reported them
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Consume the result, keeping the issues
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    /// Number of issues
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether there are no issues at all
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues of exactly `severity`
    pub fn with_severity(&self, severity: ValidationSeverity) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == severity)
            .collect()
    }

    /// Error issues
    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.with_severity(ValidationSeverity::Error)
    }

    /// Warning issues
    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.with_severity(ValidationSeverity::Warning)
    }

    /// Advisory issues
    pub fn advisories(&self) -> Vec<&ValidationIssue> {
        self.with_severity(ValidationSeverity::Advisory)
    }

    fn count(&self, severity: ValidationSeverity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Number of errors
    pub fn error_count(&self) -> usize {
        self.count(ValidationSeverity::Error)
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(ValidationSeverity::Warning)
    }

    /// Number of advisories
    pub fn advisory_count(&self) -> usize {
        self.count(ValidationSeverity::Advisory)
    }

    /// Whether any error was reported
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Whether any warning was reported
    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    /// Whether any advisory was reported
    pub fn has_advisories(&self) -> bool {
        self.advisory_count() > 0
    }

    /// Whether anything was reported
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// No errors; warnings and advisories do not block validity
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Take over every issue of `other`
    pub fn merge(&mut self, other: ValidationResult) {
        self.issues.extend(other.issues);
    }

    /// New result with the issues at least as severe as `threshold`
    ///
    /// `Warning` keeps errors and warnings; `Advisory` keeps everything.
    #[must_use]
    pub fn filter_by_severity(&self, threshold: ValidationSeverity) -> ValidationResult {
        Self {
            issues: self
                .issues
                .iter()
                .filter(|i| i.severity <= threshold)
                .cloned()
                .collect(),
        }
    }

    /// Issues about the rank named `rank_name`, ignoring case
    pub fn issues_for_rank(&self, rank_name: &str) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.rank_name.eq_ignore_ascii_case(rank_name))
            .collect()
    }

    /// Issues about the rank with id `rank_id`
    pub fn issues_for_rank_id(&self, rank_id: &RankId) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.rank_id.as_ref() == Some(rank_id))
            .collect()
    }

    /// Issues in `category`, ignoring case
    pub fn issues_by_category(&self, category: &str) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Issues reported by rule `rule_id`, ignoring case
    pub fn issues_by_rule(&self, rule_id: &str) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.rule_id.eq_ignore_ascii_case(rule_id))
            .collect()
    }

    /// Issues carrying both the fixable flag and a fix action
    pub fn auto_fixable_issues(&self) -> Vec<&ValidationIssue> {
        self.issues.iter().filter(|i| i.can_auto_fix()).collect()
    }

    /// Apply every available auto-fix in report order
    ///
    /// Returns the number of fixes applied. Stops at the first failing fix.
    pub fn apply_auto_fixes(&self, ranks: &mut [RankHierarchy]) -> Result<usize> {
        let mut applied = 0;
        for issue in self.auto_fixable_issues() {
            if let Some(fix) = &issue.auto_fix {
                debug!(rule = %issue.rule_id, fix = %fix.description(), "Applying auto-fix");
                fix.apply(ranks)?;
                applied += 1;
            }
        }
        Ok(applied)
    }

    /// Single line: `"1 error(s), 2 warning(s), 1 advisory notice(s)"`
    ///
    /// Zero counts are left out; an empty result yields `"No issues"`.
    pub fn compact_summary(&self) -> String {
        let parts: Vec<String> = [
            (self.error_count(), "error(s)"),
            (self.warning_count(), "warning(s)"),
            (self.advisory_count(), "advisory notice(s)"),
        ]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, label)| format!("{count} {label}"))
        .collect();

        if parts.is_empty() {
            "No issues".to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Multi-line report grouped by severity
    ///
    /// Errors and warnings share a budget of [`SUMMARY_MAX_LISTED`] entries,
    /// errors first; advisories list at most [`SUMMARY_MAX_ADVISORIES`].
    pub fn summary(&self) -> String {
        if !self.has_issues() {
            return "No validation issues found.".to_string();
        }

        let mut output = format!(
            "Validation found {} issue(s): {}\n",
            self.len(),
            self.compact_summary()
        );
        let listed = push_section(&mut output, "Errors", &self.errors(), SUMMARY_MAX_LISTED);
        push_section(
            &mut output,
            "Warnings",
            &self.warnings(),
            SUMMARY_MAX_LISTED.saturating_sub(listed),
        );
        push_section(
            &mut output,
            "Advisories",
            &self.advisories(),
            SUMMARY_MAX_ADVISORIES,
        );
        output.trim_end().to_string()
    }

    /// Pretty JSON rendering of the issues
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Append a titled section of at most `limit` issues; returns how many were listed
fn push_section(
    output: &mut String,
    title: &str,
    issues: &[&ValidationIssue],
    limit: usize,
) -> usize {
    if issues.is_empty() {
        return 0;
    }
    output.push_str(&format!("\n{title} ({}):\n", issues.len()));
    for issue in issues.iter().take(limit) {
        output.push_str(&format!("  - {issue}\n"));
        if let Some(fix) = &issue.suggested_fix {
            output.push_str(&format!("      Fix: {fix}\n"));
        }
    }
    if issues.len() > limit {
        output.push_str(&format!("  ...and {} more\n", issues.len() - limit));
    }
    issues.len().min(limit)
}

impl IntoIterator for ValidationResult {
    type Item = ValidationIssue;
    type IntoIter = std::vec::IntoIter<ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationIssue;
    type IntoIter = std::slice::Iter<'a, ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

impl FromIterator<ValidationIssue> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationIssue>>(iter: I) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

impl Extend<ValidationIssue> for ValidationResult {
    fn extend<I: IntoIterator<Item = ValidationIssue>>(&mut self, iter: I) {
        self.issues.extend(iter);
    }
}
