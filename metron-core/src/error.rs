//! Typed errors and their user-facing form
//!
//! Decode, lookup and conversion failures are ordinary values returned to the
//! caller. Only a configuration failure is fatal, and only at startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const CONFIGURATION: &str = "CONFIGURATION";
    pub const UNKNOWN_KIND: &str = "UNKNOWN_KIND";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_ABBREVIATION: &str = "UNKNOWN_ABBREVIATION";
    pub const AMBIGUOUS_ABBREVIATION: &str = "AMBIGUOUS_ABBREVIATION";
    pub const MALFORMED_INPUT: &str = "MALFORMED_INPUT";
    pub const KIND_MISMATCH: &str = "KIND_MISMATCH";
    pub const UNEXPECTED_KIND: &str = "UNEXPECTED_KIND";
    pub const NON_FINITE: &str = "NON_FINITE";
    pub const UNSUPPORTED_DERIVATION: &str = "UNSUPPORTED_DERIVATION";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The input was rejected; the process keeps serving
    Error,
    /// The process cannot start
    Fatal,
}

/// Every failure a Metron operation can report
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantaError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("unknown quantity kind '{0}'")]
    UnknownKind(String),

    #[error("unknown unit '{unit}' for kind {kind}")]
    UnknownUnit { kind: String, unit: String },

    #[error("unknown abbreviation '{abbreviation}'{}", in_kind(.kind))]
    UnknownAbbreviation {
        abbreviation: String,
        kind: Option<String>,
    },

    #[error("abbreviation '{abbreviation}' is ambiguous between {}", .candidates.join(", "))]
    AmbiguousAbbreviation {
        abbreviation: String,
        candidates: Vec<String>,
    },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("cannot convert {from} to {to}: different quantity kinds")]
    ConversionKindMismatch { from: String, to: String },

    #[error("expected a {expected} quantity, got {found}")]
    UnexpectedKind { expected: String, found: String },

    #[error("magnitude {0} cannot be represented in JSON")]
    NonFiniteValue(f64),

    #[error("no quantity kind results from {left} {op} {right}")]
    UnsupportedDerivation {
        op: &'static str,
        left: String,
        right: String,
    },
}

fn in_kind(kind: &Option<String>) -> String {
    match kind {
        Some(k) => format!(" for kind {}", k),
        None => String::new(),
    }
}

impl QuantaError {
    pub fn configuration(details: impl Into<String>) -> Self {
        QuantaError::Configuration(details.into())
    }

    pub fn malformed(details: impl std::fmt::Display) -> Self {
        QuantaError::MalformedInput(details.to_string())
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            QuantaError::Configuration(_) => codes::CONFIGURATION,
            QuantaError::UnknownKind(_) => codes::UNKNOWN_KIND,
            QuantaError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            QuantaError::UnknownAbbreviation { .. } => codes::UNKNOWN_ABBREVIATION,
            QuantaError::AmbiguousAbbreviation { .. } => codes::AMBIGUOUS_ABBREVIATION,
            QuantaError::MalformedInput(_) => codes::MALFORMED_INPUT,
            QuantaError::ConversionKindMismatch { .. } => codes::KIND_MISMATCH,
            QuantaError::UnexpectedKind { .. } => codes::UNEXPECTED_KIND,
            QuantaError::NonFiniteValue(_) => codes::NON_FINITE,
            QuantaError::UnsupportedDerivation { .. } => codes::UNSUPPORTED_DERIVATION,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            QuantaError::Configuration(_) => Severity::Fatal,
            _ => Severity::Error,
        }
    }

    /// True for failures caused by the caller's input rather than the deployment
    pub fn is_recoverable(&self) -> bool {
        self.severity() != Severity::Fatal
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            QuantaError::Configuration(_) => {
                Some("Set METRON_WIRE_FORMAT to Abbreviated or ExplicitUnitAndKind".to_string())
            }
            QuantaError::UnknownKind(_) => Some("Use list_kinds to see the catalog".to_string()),
            QuantaError::UnknownUnit { kind, .. } => {
                Some(format!("Use a canonical unit name of {}", kind))
            }
            QuantaError::AmbiguousAbbreviation { .. } => {
                Some("Decode with an expected kind or use the explicit wire format".to_string())
            }
            QuantaError::MalformedInput(_) => {
                Some("Send an object with a numeric 'value' and a string 'unit'".to_string())
            }
            _ => None,
        }
    }

    /// Convert into the structure returned to users
    pub fn to_rejection(&self) -> Rejection {
        Rejection {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion(),
            severity: self.severity(),
        }
    }
}

/// Structured rejection for the request layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    pub severity: Severity,
}

impl Rejection {
    /// Builder: replace the suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl From<QuantaError> for Rejection {
    fn from(err: QuantaError) -> Self {
        err.to_rejection()
    }
}
