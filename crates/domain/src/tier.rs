//! Performance tiers and classification outcomes.
//!
//! A tier is identified by its catalog slot. The symbolic label (`"Tier 1"`)
//! and the numeric rank written to the `tier_number` column (`3` for Tier 1
//! down to `0` for Tier 4) are both read from [`TIER_TABLE`], so the two
//! encodings cannot disagree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of tier slots per catalog entry
pub const TIER_SLOTS: usize = 4;

/// One of the four ordered tier slots of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Tier 1")]
    One,
    #[serde(rename = "Tier 2")]
    Two,
    #[serde(rename = "Tier 3")]
    Three,
    #[serde(rename = "Tier 4")]
    Four,
}

/// (tier, label, rank) in slot order
const TIER_TABLE: [(Tier, &str, u8); TIER_SLOTS] = [
    (Tier::One, "Tier 1", 3),
    (Tier::Two, "Tier 2", 2),
    (Tier::Three, "Tier 3", 1),
    (Tier::Four, "Tier 4", 0),
];

impl Tier {
    /// All tiers in evaluation order (Tier 1 first)
    pub const ALL: [Tier; TIER_SLOTS] = [Tier::One, Tier::Two, Tier::Three, Tier::Four];

    /// Zero-based slot index
    pub fn slot(&self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
            Self::Four => 3,
        }
    }

    /// Tier for a zero-based slot index
    pub fn from_slot(slot: usize) -> Option<Self> {
        TIER_TABLE.get(slot).map(|(tier, _, _)| *tier)
    }

    /// Symbolic label, e.g. `"Tier 1"`
    pub fn label(&self) -> &'static str {
        TIER_TABLE[self.slot()].1
    }

    /// Numeric rank used by the annotated `tier_number` column
    pub fn rank(&self) -> u8 {
        TIER_TABLE[self.slot()].2
    }

    /// Tier for a numeric rank
    pub fn from_rank(rank: u8) -> Option<Self> {
        TIER_TABLE
            .iter()
            .find(|(_, _, r)| *r == rank)
            .map(|(tier, _, _)| *tier)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TIER_TABLE
            .iter()
            .find(|(_, label, _)| label.eq_ignore_ascii_case(wanted))
            .map(|(tier, _, _)| *tier)
            .ok_or_else(|| format!("Unknown tier: {}", s))
    }
}

/// Why a value received no tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissReason {
    /// The record's test code is not in the catalog
    UnknownTestCode,
    /// The value is the wrong kind for the test's scoring kind
    ValueTypeMismatch,
    /// The value fits none of the four tier conditions
    NoMatchingTier,
}

impl MissReason {
    pub fn description(&self) -> &'static str {
        match self {
            Self::UnknownTestCode => "test code not found in catalog",
            Self::ValueTypeMismatch => "value type does not fit the scoring kind",
            Self::NoMatchingTier => "value matches no tier condition",
        }
    }
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of classifying one value.
///
/// Every miss renders as "no tier"; the reason is kept for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum Classification {
    Matched(Tier),
    Miss(MissReason),
}

impl Classification {
    pub fn tier(&self) -> Option<Tier> {
        match self {
            Self::Matched(tier) => Some(*tier),
            Self::Miss(_) => None,
        }
    }

    pub fn rank(&self) -> Option<u8> {
        self.tier().map(|t| t.rank())
    }

    pub fn label(&self) -> Option<&'static str> {
        self.tier().map(|t| t.label())
    }

    pub fn miss_reason(&self) -> Option<MissReason> {
        match self {
            Self::Matched(_) => None,
            Self::Miss(reason) => Some(*reason),
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

impl From<Tier> for Classification {
    fn from(tier: Tier) -> Self {
        Self::Matched(tier)
    }
}
