//! Allowed sports list.

use crate::errors::ReferenceDataError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SPORT_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9 ()-]*$").unwrap());

/// Maximum length of a sport name
pub const MAX_SPORT_NAME_LEN: usize = 50;

/// Check a single sport name against the naming rules.
pub fn validate_sport_name(name: &str) -> Result<(), ReferenceDataError> {
    let invalid = |reason: &str| ReferenceDataError::InvalidSportName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("sport names cannot be empty"));
    }
    if name.chars().count() > MAX_SPORT_NAME_LEN {
        return Err(invalid("sport names are limited to 50 characters"));
    }
    if !SPORT_NAME_REGEX.is_match(name) {
        return Err(invalid(
            "must start with a letter and contain only letters, digits, spaces, parentheses or hyphens",
        ));
    }
    Ok(())
}

/// The list of sport names incoming records may reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SportsList {
    names: Vec<String>,
}

impl SportsList {
    /// Wrap names as given (trimmed, empties dropped), keeping order.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let names = names
            .into_iter()
            .map(|n| n.into().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    /// Build an edited list for saving.
    ///
    /// Names are trimmed and must pass [`validate_sport_name`]; duplicates
    /// keep their first occurrence and the result is sorted alphabetically.
    pub fn normalized(names: impl IntoIterator<Item = impl Into<String>>) -> Result<Self, ReferenceDataError> {
        let mut cleaned: Vec<String> = Vec::new();
        for raw in names {
            let name = raw.into().trim().to_string();
            validate_sport_name(&name)?;
            if !cleaned.contains(&name) {
                cleaned.push(name);
            }
        }
        if cleaned.is_empty() {
            return Err(ReferenceDataError::Empty("sports list".to_string()));
        }
        cleaned.sort();
        Ok(Self { names: cleaned })
    }

    pub fn contains(&self, sport: &str) -> bool {
        let sport = sport.trim();
        self.names.iter().any(|n| n == sport)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
