//! Test catalog: the reference table of test codes and their tier conditions.

use crate::condition::Condition;
use crate::errors::{ConditionError, ReferenceDataError};
use crate::tier::{Tier, TIER_SLOTS};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a test's tier conditions are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringKind {
    /// Numeric comparison against `<op><number>` conditions
    Tiered,
    /// Case-insensitive label equality
    #[serde(rename = "Movement Quality")]
    MovementQuality,
    /// Case-insensitive label equality
    Calculated,
}

impl ScoringKind {
    /// Name as written in the catalog's `Scoring Type` column
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tiered => "Tiered",
            Self::MovementQuality => "Movement Quality",
            Self::Calculated => "Calculated",
        }
    }

    /// Whether tier slots hold numeric conditions rather than labels
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Tiered)
    }
}

impl fmt::Display for ScoringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ScoringKind {
    type Err = ReferenceDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "tiered" => Ok(Self::Tiered),
            "movementquality" => Ok(Self::MovementQuality),
            "calculated" => Ok(Self::Calculated),
            _ => Err(ReferenceDataError::InvalidScoringKind(s.trim().to_string())),
        }
    }
}

/// One row of the test catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCatalogEntry {
    /// Join key used by incoming records
    pub code: String,
    /// Display name; not unique
    pub name: String,
    pub scoring_kind: ScoringKind,
    /// `Tier 1` .. `Tier 4`, in evaluation order
    pub tier_conditions: [Option<String>; TIER_SLOTS],
}

impl TestCatalogEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>, scoring_kind: ScoringKind) -> Self {
        Self {
            code: code.into().trim().to_string(),
            name: name.into(),
            scoring_kind,
            tier_conditions: Default::default(),
        }
    }

    /// Set all four slots; blank strings are stored as absent.
    pub fn with_conditions<S: AsRef<str>>(mut self, conditions: [Option<S>; TIER_SLOTS]) -> Self {
        for (slot, condition) in conditions.iter().enumerate() {
            self.tier_conditions[slot] = condition
                .as_ref()
                .map(|c| c.as_ref().trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string);
        }
        self
    }

    /// Non-blank condition text for a tier slot
    pub fn condition(&self, tier: Tier) -> Option<&str> {
        self.tier_conditions[tier.slot()]
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Parsed numeric condition for a tier slot (tiered kinds only).
    pub fn numeric_condition(&self, tier: Tier) -> Option<Condition> {
        if !self.scoring_kind.is_numeric() {
            return None;
        }
        Condition::parse_slot(self.condition(tier))
    }

    /// Conditions on a tiered entry that are present but do not parse.
    pub fn malformed_conditions(&self) -> Vec<(Tier, ConditionError)> {
        if !self.scoring_kind.is_numeric() {
            return Vec::new();
        }
        Tier::ALL
            .iter()
            .filter_map(|tier| {
                let text = self.condition(*tier)?;
                Condition::parse_strict(text).err().map(|e| (*tier, e))
            })
            .collect()
    }
}

/// A condition the engine will silently treat as "no predicate"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionWarning {
    pub code: String,
    pub tier: Tier,
    pub condition: String,
}

impl fmt::Display for ConditionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Test code '{}' {}: unparsable condition '{}' never matches",
            self.code, self.tier, self.condition
        )
    }
}

/// Reference catalog keyed by test code.
///
/// Codes are unique. When an entry is inserted under a code that is already
/// present, the first occurrence is kept and the newcomer is counted in
/// [`TestCatalog::ignored_duplicates`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestCatalog {
    entries: IndexMap<String, TestCatalogEntry>,
    #[serde(default)]
    ignored_duplicates: usize,
}

impl TestCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = TestCatalogEntry>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    /// Insert an entry; returns `false` if the code was already present.
    pub fn insert(&mut self, entry: TestCatalogEntry) -> bool {
        if self.entries.contains_key(&entry.code) {
            self.ignored_duplicates += 1;
            return false;
        }
        self.entries.insert(entry.code.clone(), entry);
        true
    }

    pub fn get(&self, code: &str) -> Option<&TestCatalogEntry> {
        self.entries.get(code.trim())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code.trim())
    }

    /// Codes in catalog order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestCatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries dropped because their code was already present
    pub fn ignored_duplicates(&self) -> usize {
        self.ignored_duplicates
    }

    /// Every unparsable condition on a tiered entry, in catalog order
    pub fn lint(&self) -> Vec<ConditionWarning> {
        self.iter()
            .flat_map(|entry| {
                entry
                    .malformed_conditions()
                    .into_iter()
                    .map(move |(tier, error)| ConditionWarning {
                        code: entry.code.clone(),
                        tier,
                        condition: match error {
                            ConditionError::Malformed(text) => text,
                        },
                    })
            })
            .collect()
    }
}
