//! Loaded-or-unavailable reference data.

use std::fmt;

/// Reference data that either loaded or is explicitly unavailable.
///
/// Downstream checks treat `Unavailable` as "no reference data" and skip
/// rather than fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceData<T> {
    Loaded(T),
    Unavailable { reason: String },
}

impl<T> ReferenceData<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Loaded(data) => Some(data),
            Self::Unavailable { .. } => None,
        }
    }

    /// Why the data is unavailable
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Unavailable { reason } => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ReferenceData<U> {
        match self {
            Self::Loaded(data) => ReferenceData::Loaded(f(data)),
            Self::Unavailable { reason } => ReferenceData::Unavailable { reason },
        }
    }
}

impl<T> From<Option<T>> for ReferenceData<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(data) => Self::Loaded(data),
            None => Self::unavailable("not configured"),
        }
    }
}

impl<T> fmt::Display for ReferenceData<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(_) => f.write_str("loaded"),
            Self::Unavailable { reason } => write!(f, "unavailable ({})", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_has_reason() {
        let data: ReferenceData<u8> = ReferenceData::unavailable("file not found");
        assert!(!data.is_loaded());
        assert_eq!(data.reason(), Some("file not found"));
        assert_eq!(data.to_string(), "unavailable (file not found)");
        assert_eq!(data.into_option(), None);
    }

    #[test]
    fn test_loaded_maps() {
        let data = ReferenceData::Loaded(2).map(|n| n * 10);
        assert_eq!(data.get(), Some(&20));
        assert!(ReferenceData::from(None::<u8>).reason().is_some());
    }
}
