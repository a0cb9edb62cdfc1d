//! Reference integrity rule
//!
//! Cross-checks vehicles, outfits and stations against the game data known
//! to the reference provider, and requires every rank that is not a parent
//! with pay bands to be assigned to at least one station. Without a provider
//! only the station requirement is checked; a category the provider reports
//! as empty rejects every reference to it.

use lspe_domain::constants::{CATEGORY_OUTFIT, CATEGORY_STATION, CATEGORY_VEHICLE};
use lspe_domain::{ItemScope, RankHierarchy, RankId, RankItem, ReferenceDataProvider, walk};
use std::collections::HashSet;

use super::label;
use crate::fix::AutoFix;
use crate::issue::ValidationIssue;
use crate::result::ValidationResult;
use crate::rule::{SingleRankValidationRule, ValidationRule};
use crate::severity::ValidationContext;

/// Rule id of [`ReferenceValidationRule`]
pub const REFERENCE_VALIDATION_RULE_ID: &str = "REFERENCE_VALIDATION";

// Not RealTime: too expensive to run on every keystroke.
const CONTEXTS: &[ValidationContext] = &[
    ValidationContext::Full,
    ValidationContext::Startup,
    ValidationContext::PreGenerate,
];

/// Checks that referenced game data exists and ranks are reachable
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceValidationRule;

/// Case-folded lookup sets built from the provider
struct ReferenceLookup {
    vehicles: HashSet<String>,
    stations: HashSet<String>,
    outfits: HashSet<String>,
}

impl ReferenceLookup {
    fn from_provider(data: &dyn ReferenceDataProvider) -> Self {
        Self {
            vehicles: Self::key_set(data.vehicle_models()),
            stations: Self::key_set(data.station_names()),
            outfits: Self::key_set(data.outfit_names()),
        }
    }

    fn key_set(values: Vec<String>) -> HashSet<String> {
        values.iter().map(|v| v.trim().to_lowercase()).collect()
    }

    fn knows(set: &HashSet<String>, name: &str) -> bool {
        set.contains(&name.trim().to_lowercase())
    }
}

type FixBuilder = fn(RankId, ItemScope, String) -> AutoFix;

fn remove_vehicle(rank_id: RankId, scope: ItemScope, model: String) -> AutoFix {
    AutoFix::RemoveVehicle {
        rank_id,
        scope,
        model,
    }
}

fn remove_outfit(rank_id: RankId, scope: ItemScope, outfit: String) -> AutoFix {
    AutoFix::RemoveOutfit {
        rank_id,
        scope,
        outfit,
    }
}

impl ReferenceValidationRule {
    fn check_rank(
        rank: &RankHierarchy,
        lookup: Option<&ReferenceLookup>,
        result: &mut ValidationResult,
    ) {
        if let Some(lookup) = lookup {
            Self::check_items(
                rank,
                &rank.vehicles,
                &ItemScope::Global,
                &lookup.vehicles,
                CATEGORY_VEHICLE,
                remove_vehicle,
                result,
            );
            Self::check_items(
                rank,
                &rank.outfits,
                &ItemScope::Global,
                &lookup.outfits,
                CATEGORY_OUTFIT,
                remove_outfit,
                result,
            );

            for station in &rank.stations {
                let scope = ItemScope::station(&station.station_name);
                Self::check_items(
                    rank,
                    &station.vehicle_overrides,
                    &scope,
                    &lookup.vehicles,
                    CATEGORY_VEHICLE,
                    remove_vehicle,
                    result,
                );
                Self::check_items(
                    rank,
                    &station.outfit_overrides,
                    &scope,
                    &lookup.outfits,
                    CATEGORY_OUTFIT,
                    remove_outfit,
                    result,
                );

                if !ReferenceLookup::knows(&lookup.stations, &station.station_name) {
                    result.add(
                        ValidationIssue::warning(
                            REFERENCE_VALIDATION_RULE_ID,
                            CATEGORY_STATION,
                            format!(
                                "Station '{}' assigned to '{}' was not found in the game data",
                                station.station_name,
                                label(rank)
                            ),
                        )
                        .for_rank(rank)
                        .with_item(&station.station_name)
                        .with_suggested_fix("Remove the station or pick one from the game data")
                        .with_auto_fix(AutoFix::RemoveStation {
                            rank_id: rank.id.clone(),
                            station_name: station.station_name.clone(),
                        }),
                    );
                }
            }
        }

        if !rank.has_pay_bands() && rank.stations.is_empty() {
            result.add(
                ValidationIssue::error(
                    REFERENCE_VALIDATION_RULE_ID,
                    CATEGORY_STATION,
                    format!("Rank '{}' has no station assignments", label(rank)),
                )
                .for_rank(rank)
                .with_suggested_fix("Assign at least one station so the rank can be reached in game"),
            );
        }
    }

    fn check_items<T: RankItem>(
        rank: &RankHierarchy,
        items: &[T],
        scope: &ItemScope,
        known: &HashSet<String>,
        category: &str,
        fix: FixBuilder,
        result: &mut ValidationResult,
    ) {
        let location = match scope {
            ItemScope::Global => String::new(),
            ItemScope::Station(name) => format!(" at station '{name}'"),
        };
        for item in items {
            let name = item.item_label();
            if ReferenceLookup::knows(known, name) {
                continue;
            }
            result.add(
                ValidationIssue::warning(
                    REFERENCE_VALIDATION_RULE_ID,
                    category,
                    format!(
                        "{category} '{name}' assigned to '{}'{location} was not found in the game data",
                        label(rank)
                    ),
                )
                .for_rank(rank)
                .with_item(name)
                .with_suggested_fix(format!("Remove the {} from the rank", T::KIND))
                .with_auto_fix(fix(rank.id.clone(), scope.clone(), name.to_string())),
            );
        }
    }
}

impl ValidationRule for ReferenceValidationRule {
    fn rule_id(&self) -> &str {
        REFERENCE_VALIDATION_RULE_ID
    }

    fn rule_name(&self) -> &str {
        "Reference Validation"
    }

    fn applicable_contexts(&self) -> &[ValidationContext] {
        CONTEXTS
    }

    fn validate(
        &self,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        _context: ValidationContext,
        data: Option<&dyn ReferenceDataProvider>,
    ) {
        let lookup = data.map(ReferenceLookup::from_provider);
        for rank in walk(ranks) {
            Self::check_rank(rank, lookup.as_ref(), result);
        }
    }

    fn as_single_rank(&self) -> Option<&dyn SingleRankValidationRule> {
        Some(self)
    }
}

impl SingleRankValidationRule for ReferenceValidationRule {
    fn validate_single_rank(
        &self,
        rank: &RankHierarchy,
        _ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        _context: ValidationContext,
        data: Option<&dyn ReferenceDataProvider>,
    ) {
        let lookup = data.map(ReferenceLookup::from_provider);
        Self::check_rank(rank, lookup.as_ref(), result);
    }
}
