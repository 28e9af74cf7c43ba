//! Metron Serde - JSON wire formats and schemas for quantities
//!
//! Two wire formats, selected once per running instance:
//! - Abbreviated: `{"value": 1, "unit": "kg"}`
//! - ExplicitUnitAndKind: `{"value": 1, "unit": "Kilogram", "type": "Mass"}`
//!
//! The same selection drives the schema documents, so a published schema
//! always matches what the codec writes and accepts.

mod config;
mod record;
mod abbreviated;
mod explicit;
mod codec;
mod seed;
mod schema;

pub use config::{
    WireConfig, WireFormat, CULTURE_VAR, DEFAULT_DOCS_URL, DOCS_URL_VAR, WIRE_FORMAT_VAR,
};
pub use codec::{Codec, Encoded};
pub use seed::QuantitySeed;
pub use schema::{
    build_schemas, ExternalDocs, NumberProperty, Properties, SchemaDescriptor, SchemaKey,
    SchemaSet, TokenProperty, OPEN_SCHEMA_NAME, REPRESENTATIVE_KIND,
};
