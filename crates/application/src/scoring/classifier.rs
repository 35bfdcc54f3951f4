//! Tier classification of single test values.
//!
//! Slots are always evaluated Tier 1 → Tier 4 and the first match wins.
//! Catalog authors therefore order tiered conditions from most to least
//! exclusive (`<=1.50, <=1.55, <=1.60, >1.60`); that ordering is part of the
//! catalog format.

use athlete_insights_domain::{
    catalog::{ScoringKind, TestCatalog, TestCatalogEntry},
    tier::{Classification, MissReason, Tier},
    value::CellValue,
};
use tracing::trace;

/// Classifies values against catalog entries
#[derive(Debug, Clone, Copy, Default)]
pub struct TierClassifier;

impl TierClassifier {
    /// Classify `value` for the test identified by `test_code`.
    ///
    /// A code missing from the catalog yields
    /// `Classification::Miss(MissReason::UnknownTestCode)`.
    pub fn classify(catalog: &TestCatalog, test_code: &str, value: &CellValue) -> Classification {
        match catalog.get(test_code) {
            Some(entry) => Self::classify_entry(entry, value),
            None => {
                trace!(test_code, "Test code not in catalog");
                Classification::Miss(MissReason::UnknownTestCode)
            }
        }
    }

    /// Classify `value` against one catalog entry
    pub fn classify_entry(entry: &TestCatalogEntry, value: &CellValue) -> Classification {
        let outcome = match entry.scoring_kind {
            ScoringKind::Tiered => Self::classify_numeric(entry, value),
            ScoringKind::MovementQuality | ScoringKind::Calculated => {
                Self::classify_categorical(entry, value)
            }
        };
        trace!(code = %entry.code, ?outcome, "Classified value");
        outcome
    }

    fn classify_numeric(entry: &TestCatalogEntry, value: &CellValue) -> Classification {
        let Some(number) = value.as_number() else {
            return Classification::Miss(MissReason::ValueTypeMismatch);
        };

        Tier::ALL
            .iter()
            .find(|tier| {
                entry
                    .numeric_condition(**tier)
                    .is_some_and(|condition| condition.matches(number))
            })
            .map(|tier| Classification::Matched(*tier))
            .unwrap_or(Classification::Miss(MissReason::NoMatchingTier))
    }

    fn classify_categorical(entry: &TestCatalogEntry, value: &CellValue) -> Classification {
        let Some(text) = value.as_text() else {
            return Classification::Miss(MissReason::ValueTypeMismatch);
        };
        let wanted = fold(text);

        Tier::ALL
            .iter()
            .find(|tier| entry.condition(**tier).is_some_and(|label| fold(label) == wanted))
            .map(|tier| Classification::Matched(*tier))
            .unwrap_or(Classification::Miss(MissReason::NoMatchingTier))
    }
}

/// Trim and case-fold a label for comparison
fn fold(label: &str) -> String {
    label.trim().to_lowercase()
}
