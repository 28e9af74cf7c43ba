//! Metron Core - Fundamental types
//!
//! This crate provides the types shared by every Metron crate:
//! - `QuantaError`: Typed failures of catalog lookups, codecs and conversions
//! - `Rejection`: Serializable form of an error for the request layer
//! - `Severity`: Whether a failure is recoverable or aborts startup

mod error;

pub use error::{QuantaError, Rejection, Severity, codes};

/// Result alias used throughout Metron
pub type Result<T> = std::result::Result<T, QuantaError>;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{QuantaError, Rejection, Severity, Result};
    pub use crate::error::codes;
}
