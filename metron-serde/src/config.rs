//! Startup configuration - selects the wire format for a running instance

use std::fmt;
use std::str::FromStr;
use serde::Serialize;
use metron_core::QuantaError;
use metron_units::Culture;
use crate::Codec;

/// Environment variable selecting the wire format (required)
pub const WIRE_FORMAT_VAR: &str = "METRON_WIRE_FORMAT";
/// Environment variable overriding the schema documentation link
pub const DOCS_URL_VAR: &str = "METRON_DOCS_URL";
/// Environment variable selecting the abbreviation culture
pub const CULTURE_VAR: &str = "METRON_CULTURE";

pub const DEFAULT_DOCS_URL: &str = "https://en.wikipedia.org/wiki/International_System_of_Units";

/// JSON shape used for quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WireFormat {
    /// `{"value": 1, "unit": "kg"}`
    Abbreviated,
    /// `{"value": 1, "unit": "Kilogram", "type": "Mass"}`
    ExplicitUnitAndKind,
}

impl WireFormat {
    pub const ALL: [WireFormat; 2] = [WireFormat::Abbreviated, WireFormat::ExplicitUnitAndKind];

    pub fn name(self) -> &'static str {
        match self {
            WireFormat::Abbreviated => "Abbreviated",
            WireFormat::ExplicitUnitAndKind => "ExplicitUnitAndKind",
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for WireFormat {
    type Err = QuantaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        WireFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                QuantaError::configuration(format!(
                    "unsupported wire format '{}' in {}, expected Abbreviated or ExplicitUnitAndKind",
                    s, WIRE_FORMAT_VAR
                ))
            })
    }
}

/// Settings read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct WireConfig {
    pub format: WireFormat,
    pub culture: Culture,
    pub docs_url: String,
}

impl WireConfig {
    pub fn new(format: WireFormat) -> Self {
        WireConfig {
            format,
            culture: Culture::Invariant,
            docs_url: DEFAULT_DOCS_URL.to_string(),
        }
    }

    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = culture;
        self
    }

    pub fn with_docs_url(mut self, url: impl Into<String>) -> Self {
        self.docs_url = url.into();
        self
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, QuantaError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`.
    ///
    /// A missing or blank wire format is an error: there is no default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, QuantaError> {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let format: WireFormat = non_blank(WIRE_FORMAT_VAR)
            .ok_or_else(|| QuantaError::configuration(format!("{} is not set", WIRE_FORMAT_VAR)))?
            .parse()?;

        let mut config = WireConfig::new(format);

        if let Some(culture) = non_blank(CULTURE_VAR) {
            config.culture = culture.parse().map_err(|_| {
                QuantaError::configuration(format!("unsupported culture '{}' in {}", culture, CULTURE_VAR))
            })?;
        }
        if let Some(url) = non_blank(DOCS_URL_VAR) {
            config.docs_url = url.trim().to_string();
        }

        Ok(config)
    }

    /// Codec matching this configuration
    pub fn codec(&self) -> Codec {
        Codec::new(self.format).with_culture(self.culture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("Abbreviated".parse::<WireFormat>().unwrap(), WireFormat::Abbreviated);
        assert_eq!(
            "explicitunitandkind".parse::<WireFormat>().unwrap(),
            WireFormat::ExplicitUnitAndKind
        );
        let err = "Explicit".parse::<WireFormat>().unwrap_err();
        assert!(matches!(err, QuantaError::Configuration(_)));
    }

    #[test]
    fn test_from_lookup() {
        let config = WireConfig::from_lookup(lookup(&[(WIRE_FORMAT_VAR, "ExplicitUnitAndKind")])).unwrap();
        assert_eq!(config.format, WireFormat::ExplicitUnitAndKind);
        assert_eq!(config.culture, Culture::Invariant);
        assert_eq!(config.docs_url, DEFAULT_DOCS_URL);

        let config = WireConfig::from_lookup(lookup(&[
            (WIRE_FORMAT_VAR, "abbreviated"),
            (CULTURE_VAR, "ru-RU"),
            (DOCS_URL_VAR, "https://example.org/units"),
        ]))
        .unwrap();
        assert_eq!(config.format, WireFormat::Abbreviated);
        assert_eq!(config.culture, Culture::Russian);
        assert_eq!(config.docs_url, "https://example.org/units");
    }

    #[test]
    fn test_missing_format_fails() {
        let err = WireConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, QuantaError::Configuration(_)));
        assert!(!err.is_recoverable());

        let err = WireConfig::from_lookup(lookup(&[(WIRE_FORMAT_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, QuantaError::Configuration(_)));
    }

    #[test]
    fn test_unsupported_culture_fails() {
        let err = WireConfig::from_lookup(lookup(&[
            (WIRE_FORMAT_VAR, "Abbreviated"),
            (CULTURE_VAR, "xx-XX"),
        ]))
        .unwrap_err();
        assert!(matches!(err, QuantaError::Configuration(_)));
    }
}
