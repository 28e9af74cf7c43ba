//! Cultures for localized unit abbreviations

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Serializer};
use metron_core::QuantaError;

/// Culture used to pick unit abbreviations.
///
/// Localized lookups fall back to the invariant abbreviations when a unit has
/// none for the requested culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Culture {
    #[default]
    Invariant,
    Russian,
    Chinese,
}

impl Culture {
    pub const ALL: [Culture; 3] = [Culture::Invariant, Culture::Russian, Culture::Chinese];

    /// IETF language tag, empty for the invariant culture
    pub fn code(self) -> &'static str {
        match self {
            Culture::Invariant => "",
            Culture::Russian => "ru-RU",
            Culture::Chinese => "zh-CN",
        }
    }

    pub fn is_invariant(self) -> bool {
        self == Culture::Invariant
    }
}

impl FromStr for Culture {
    type Err = QuantaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("invariant") || s.eq_ignore_ascii_case("en-US") {
            return Ok(Culture::Invariant);
        }
        Culture::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| QuantaError::malformed(format!("unsupported culture '{}'", s)))
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Culture::Invariant => write!(f, "invariant"),
            other => write!(f, "{}", other.code()),
        }
    }
}

impl Serialize for Culture {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
