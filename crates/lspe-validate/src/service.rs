//! Validation service
//!
//! Ordered rule registry plus context-based dispatch. A fresh service is
//! seeded with [`default_rules`]; callers may register their own rules or
//! unregister defaults by id.

use lspe_domain::{RankHierarchy, RankId, ReferenceDataProvider, find_rank};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::result::ValidationResult;
use crate::rule::{PropertyValue, ValidationRule};
use crate::rules::default_rules;
use crate::severity::ValidationContext;

/// Context property edits are validated under
pub const PROPERTY_VALIDATION_CONTEXT: ValidationContext = ValidationContext::RealTime;

/// Runs registered validation rules against a rank set
pub struct ValidationService {
    rules: Vec<Box<dyn ValidationRule>>,
    data_provider: Option<Arc<dyn ReferenceDataProvider>>,
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ValidationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationService")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.rule_id()).collect::<Vec<_>>(),
            )
            .field("has_data_provider", &self.data_provider.is_some())
            .finish()
    }
}

impl ValidationService {
    /// Service with the default rules and no reference data
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            data_provider: None,
        }
    }

    /// Service with the default rules, checking references against `provider`
    pub fn with_data_provider(provider: Arc<dyn ReferenceDataProvider>) -> Self {
        Self {
            rules: default_rules(),
            data_provider: Some(provider),
        }
    }

    /// Service without any rules
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            data_provider: None,
        }
    }

    /// Replace the reference data provider
    pub fn set_data_provider(&mut self, provider: Option<Arc<dyn ReferenceDataProvider>>) {
        self.data_provider = provider;
    }

    /// Register a rule at the end of the dispatch order
    ///
    /// Rule ids are unique and compared exactly; the first registration
    /// wins. Returns whether the rule was added.
    pub fn register_rule(&mut self, rule: Box<dyn ValidationRule>) -> bool {
        if self.rules.iter().any(|r| r.rule_id() == rule.rule_id()) {
            warn!(rule = rule.rule_id(), "Rule already registered, ignoring");
            return false;
        }
        debug!(rule = rule.rule_id(), "Registered validation rule");
        self.rules.push(rule);
        true
    }

    /// Remove the rule with `rule_id`; `false` if there is none
    pub fn unregister_rule(&mut self, rule_id: &str) -> bool {
        if rule_id.trim().is_empty() {
            return false;
        }
        match self.rules.iter().position(|r| r.rule_id() == rule_id) {
            Some(index) => {
                self.rules.remove(index);
                debug!(rule = rule_id, "Unregistered validation rule");
                true
            }
            None => false,
        }
    }

    /// Registered rules in dispatch order
    pub fn registered_rules(&self) -> Vec<&dyn ValidationRule> {
        self.rules.iter().map(AsRef::as_ref).collect()
    }

    /// Registered rules that participate in `context`
    pub fn rules_for_context(&self, context: ValidationContext) -> Vec<&dyn ValidationRule> {
        self.rules
            .iter()
            .map(AsRef::as_ref)
            .filter(|r| r.applies_to(context))
            .collect()
    }

    fn data(&self) -> Option<&dyn ReferenceDataProvider> {
        self.data_provider.as_deref()
    }

    /// Validate the whole rank set
    ///
    /// An empty set yields an empty result.
    pub fn validate_ranks(
        &self,
        ranks: &[RankHierarchy],
        context: ValidationContext,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();
        if ranks.is_empty() {
            return result;
        }

        for rule in self.rules_for_context(context) {
            debug!(rule = rule.rule_id(), %context, "Running validation rule");
            rule.validate(ranks, &mut result, context, self.data());
        }

        info!(
            %context,
            ranks = ranks.len(),
            errors = result.error_count(),
            warnings = result.warning_count(),
            advisories = result.advisory_count(),
            "Validation complete"
        );
        result
    }

    /// Validate one rank against the rest of the set
    ///
    /// Only rules with single-rank support run; the others are skipped.
    pub fn validate_single_rank(
        &self,
        rank: &RankHierarchy,
        ranks: &[RankHierarchy],
        context: ValidationContext,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();
        for rule in self.rules_for_context(context) {
            if let Some(single) = rule.as_single_rank() {
                debug!(rule = rule.rule_id(), rank = %rank.name, "Validating single rank");
                single.validate_single_rank(rank, ranks, &mut result, context, self.data());
            }
        }
        result
    }

    /// [`validate_single_rank`](Self::validate_single_rank) by id
    ///
    /// An id that does not resolve yields an empty result.
    pub fn validate_rank_by_id(
        &self,
        rank_id: &RankId,
        ranks: &[RankHierarchy],
        context: ValidationContext,
    ) -> ValidationResult {
        match find_rank(ranks, rank_id) {
            Some(rank) => self.validate_single_rank(rank, ranks, context),
            None => ValidationResult::new(),
        }
    }

    /// Validate a pending property edit before it is applied
    ///
    /// Runs under [`PROPERTY_VALIDATION_CONTEXT`]. A blank property name
    /// yields an empty result.
    pub fn validate_property(
        &self,
        rank: &RankHierarchy,
        property_name: &str,
        value: &PropertyValue,
        ranks: &[RankHierarchy],
    ) -> ValidationResult {
        let mut result = ValidationResult::new();
        if property_name.trim().is_empty() {
            return result;
        }

        for rule in self.rules_for_context(PROPERTY_VALIDATION_CONTEXT) {
            if let Some(property_rule) = rule.as_property() {
                property_rule.validate_property(
                    rank,
                    property_name,
                    value,
                    ranks,
                    &mut result,
                    self.data(),
                );
            }
        }
        result
    }
}
