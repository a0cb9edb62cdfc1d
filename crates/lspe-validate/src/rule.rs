//! Validation rule contracts
//!
//! Every rule implements [`ValidationRule`] for bulk validation. Rules that
//! can check a single rank or a single in-flight property edit also
//! implement the narrower traits and expose them through the
//! `as_single_rank`/`as_property` capability accessors, so the service can
//! dispatch on what each rule supports.

use lspe_domain::{RankHierarchy, ReferenceDataProvider};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::result::ValidationResult;
use crate::severity::ValidationContext;

/// A pluggable validation strategy
pub trait ValidationRule: Send + Sync {
    /// Stable identifier; the registry's de-duplication key
    fn rule_id(&self) -> &str;

    /// Human readable rule name
    fn rule_name(&self) -> &str;

    /// Contexts this rule participates in
    fn applicable_contexts(&self) -> &[ValidationContext];

    /// Whether the rule runs for `context`
    fn applies_to(&self, context: ValidationContext) -> bool {
        self.applicable_contexts().contains(&context)
    }

    /// Validate the whole rank set, appending issues to `result`
    fn validate(
        &self,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        context: ValidationContext,
        data: Option<&dyn ReferenceDataProvider>,
    );

    /// Single-rank capability, if the rule has one
    fn as_single_rank(&self) -> Option<&dyn SingleRankValidationRule> {
        None
    }

    /// Property-edit capability, if the rule has one
    fn as_property(&self) -> Option<&dyn PropertyValidationRule> {
        None
    }
}

/// A rule that can validate one rank against the rest of the set
pub trait SingleRankValidationRule: ValidationRule {
    /// Validate `rank` in the context of `ranks`
    fn validate_single_rank(
        &self,
        rank: &RankHierarchy,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        context: ValidationContext,
        data: Option<&dyn ReferenceDataProvider>,
    );
}

/// A rule that can validate a property edit before it is committed
pub trait PropertyValidationRule: ValidationRule {
    /// Validate setting `property_name` of `rank` to `value`
    fn validate_property(
        &self,
        rank: &RankHierarchy,
        property_name: &str,
        value: &PropertyValue,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        data: Option<&dyn ReferenceDataProvider>,
    );
}

/// The pending value of a property edit
///
/// Editors hand over whatever the input control holds; numeric properties
/// accept text that parses as an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Whole number input
    Integer(i64),
    /// Text input
    Text(String),
}

impl PropertyValue {
    /// The value as an integer, parsing text input
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    /// The value as text
    pub fn as_text(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
