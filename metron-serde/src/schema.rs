//! Schema generation - one document per kind describing its wire shape
//!
//! The set is built once from a [`WireConfig`] and never mutated afterwards;
//! callers share it behind an `Arc` and replace it wholesale if ever needed.

use std::collections::BTreeMap;
use std::fmt;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use tracing::info;
use metron_core::QuantaError;
use metron_units::{all_abbreviations, Kind, Quantity};
use crate::{Codec, WireConfig, WireFormat};

/// Kind used to illustrate the open handle's schema. Its example tokens
/// resolve to a single unit across every kind, in every culture.
pub const REPRESENTATIVE_KIND: Kind = Kind::Mass;

/// Component name of the open handle's schema
pub const OPEN_SCHEMA_NAME: &str = "Quantity";

/// What a schema describes: one kind, or the open handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemaKey {
    Kind(Kind),
    Open,
}

impl SchemaKey {
    /// Name under which the schema is published
    pub fn name(&self) -> &'static str {
        match self {
            SchemaKey::Kind(kind) => kind.name(),
            SchemaKey::Open => OPEN_SCHEMA_NAME,
        }
    }

    pub fn from_name(name: &str) -> Result<SchemaKey, QuantaError> {
        if name == OPEN_SCHEMA_NAME {
            return Ok(SchemaKey::Open);
        }
        Kind::from_name(name).map(SchemaKey::Kind)
    }
}

impl fmt::Display for SchemaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberProperty {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub format: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenProperty {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub description: String,
    #[serde(rename = "enum")]
    pub allowed: Vec<&'static str>,
    pub example: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Properties {
    pub value: NumberProperty,
    pub unit: TokenProperty,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TokenProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalDocs {
    pub description: String,
    pub url: String,
}

/// Schema document for one wire shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDescriptor {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub title: &'static str,
    pub description: String,
    pub properties: Properties,
    pub required: Vec<&'static str>,
    pub example: JsonValue,
    #[serde(rename = "externalDocs")]
    pub external_docs: ExternalDocs,
}

impl SchemaDescriptor {
    /// Legal `unit` tokens
    pub fn units(&self) -> &[&'static str] {
        &self.properties.unit.allowed
    }

    pub fn to_json(&self) -> Result<JsonValue, QuantaError> {
        serde_json::to_value(self).map_err(QuantaError::malformed)
    }
}

fn describe_kind(kind: Kind, codec: Codec, config: &WireConfig) -> Result<SchemaDescriptor, QuantaError> {
    let base = kind.base_unit();

    let unit = match codec.format() {
        WireFormat::Abbreviated => TokenProperty {
            schema_type: "string",
            description: format!("Abbreviation of a {} unit", kind),
            allowed: all_abbreviations(kind, codec.culture()),
            example: base.abbreviation_for(codec.culture()),
        },
        WireFormat::ExplicitUnitAndKind => TokenProperty {
            schema_type: "string",
            description: format!("Name of a {} unit", kind),
            allowed: kind.units().map(|u| u.name()).collect(),
            example: base.name(),
        },
    };

    let type_property = match codec.format() {
        WireFormat::Abbreviated => None,
        WireFormat::ExplicitUnitAndKind => Some(TokenProperty {
            schema_type: "string",
            description: "Quantity kind".to_string(),
            allowed: vec![kind.name()],
            example: kind.name(),
        }),
    };

    let mut required = vec!["value", "unit"];
    if type_property.is_some() {
        required.push("type");
    }

    Ok(SchemaDescriptor {
        schema_type: "object",
        title: kind.name(),
        description: format!("{}: {}", kind, kind.description()),
        properties: Properties {
            value: NumberProperty {
                schema_type: "number",
                format: "double",
                description: "Magnitude in the given unit",
            },
            unit,
            kind: type_property,
        },
        required,
        example: codec.to_value(&Quantity::new(1.0, base))?,
        external_docs: ExternalDocs {
            description: format!("{} units", kind),
            url: config.docs_url.clone(),
        },
    })
}

/// The open handle is documented with the shape of one representative kind.
/// Other kinds use the same fields with their own unit tokens.
fn describe_open(representative: &SchemaDescriptor) -> SchemaDescriptor {
    let mut open = representative.clone();
    open.title = OPEN_SCHEMA_NAME;
    open.description = format!(
        "A quantity of any kind. The shape shown is the one of {}; the legal `unit` \
         values (and `type`) depend on the quantity's kind, see the per-kind schemas.",
        REPRESENTATIVE_KIND
    );
    open.external_docs.description = "Quantity kinds and units".to_string();
    open
}

/// All schema documents of a running instance
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaSet {
    format: WireFormat,
    descriptors: BTreeMap<SchemaKey, SchemaDescriptor>,
}

impl SchemaSet {
    /// Build one descriptor per catalog kind plus the open handle's
    pub fn build(config: &WireConfig) -> Result<SchemaSet, QuantaError> {
        let codec = config.codec();
        let mut descriptors = BTreeMap::new();

        for &kind in Kind::ALL {
            descriptors.insert(SchemaKey::Kind(kind), describe_kind(kind, codec, config)?);
        }
        let representative = descriptors
            .get(&SchemaKey::Kind(REPRESENTATIVE_KIND))
            .map(describe_open)
            .ok_or_else(|| QuantaError::UnknownKind(REPRESENTATIVE_KIND.name().to_string()))?;
        descriptors.insert(SchemaKey::Open, representative);

        info!(format = %config.format, schemas = descriptors.len(), "schema set built");
        Ok(SchemaSet { format: config.format, descriptors })
    }

    pub fn format(&self) -> WireFormat {
        self.format
    }

    pub fn get(&self, key: SchemaKey) -> Option<&SchemaDescriptor> {
        self.descriptors.get(&key)
    }

    pub fn kind(&self, kind: Kind) -> Option<&SchemaDescriptor> {
        self.get(SchemaKey::Kind(kind))
    }

    pub fn open(&self) -> Option<&SchemaDescriptor> {
        self.get(SchemaKey::Open)
    }

    /// Look up a schema by its published name
    pub fn by_name(&self, name: &str) -> Result<&SchemaDescriptor, QuantaError> {
        let key = SchemaKey::from_name(name)?;
        self.get(key).ok_or_else(|| QuantaError::UnknownKind(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SchemaKey, &SchemaDescriptor)> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Serialized as a map from published name to schema document
impl Serialize for SchemaSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.descriptors.len()))?;
        for (key, descriptor) in &self.descriptors {
            map.serialize_entry(key.name(), descriptor)?;
        }
        map.end()
    }
}

/// Build the schema set for a configuration
pub fn build_schemas(config: &WireConfig) -> Result<SchemaSet, QuantaError> {
    SchemaSet::build(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use metron_units::Culture;

    fn abbreviated() -> SchemaSet {
        build_schemas(&WireConfig::new(WireFormat::Abbreviated)).unwrap()
    }

    fn explicit() -> SchemaSet {
        build_schemas(&WireConfig::new(WireFormat::ExplicitUnitAndKind)).unwrap()
    }

    #[test]
    fn test_one_schema_per_kind_plus_open() {
        for set in [abbreviated(), explicit()] {
            assert_eq!(set.len(), Kind::ALL.len() + 1);
            for &kind in Kind::ALL {
                assert_eq!(set.kind(kind).map(|d| d.title), Some(kind.name()));
            }
            assert!(set.open().is_some());
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        assert_eq!(abbreviated(), abbreviated());
        assert_eq!(explicit(), explicit());
    }

    #[test]
    fn test_abbreviated_shape() {
        let set = abbreviated();
        let mass = set.kind(Kind::Mass).unwrap().to_json().unwrap();
        assert_eq!(mass["type"], "object");
        assert_eq!(mass["properties"]["value"]["type"], "number");
        assert_eq!(mass["properties"]["unit"]["type"], "string");
        assert_eq!(mass["properties"]["unit"]["example"], "kg");
        assert_eq!(mass["properties"]["unit"]["enum"][0], "kg");
        assert!(mass["properties"].get("type").is_none());
        assert_eq!(mass["required"], json!(["value", "unit"]));
        assert_eq!(mass["example"], json!({"value": 1, "unit": "kg"}));
        assert!(mass["externalDocs"]["url"].is_string());
    }

    #[test]
    fn test_explicit_shape() {
        let set = explicit();
        let mass = set.kind(Kind::Mass).unwrap().to_json().unwrap();
        assert_eq!(mass["properties"]["unit"]["enum"][0], "Kilogram");
        assert_eq!(mass["properties"]["type"]["enum"], json!(["Mass"]));
        assert_eq!(mass["required"], json!(["value", "unit", "type"]));
        assert_eq!(mass["example"], json!({"value": 1, "unit": "Kilogram", "type": "Mass"}));
    }

    #[test]
    fn test_unit_enum_matches_codec() {
        let codec = Codec::abbreviated();
        let set = abbreviated();
        for &kind in Kind::ALL {
            let allowed = set.kind(kind).unwrap().units();
            for unit in kind.units() {
                assert!(allowed.contains(&unit.abbreviation()), "{:?}", unit);
            }
            for token in allowed {
                let text = format!(r#"{{"value":1,"unit":"{}"}}"#, token);
                assert!(codec.decode(&text, kind).is_ok(), "{} '{}'", kind, token);
            }
        }
    }

    #[test]
    fn test_open_schema_is_representative() {
        let set = explicit();
        let open = set.open().unwrap();
        let mass = set.kind(REPRESENTATIVE_KIND).unwrap();
        assert_eq!(open.properties, mass.properties);
        assert_eq!(open.example, mass.example);
        assert_eq!(open.title, OPEN_SCHEMA_NAME);
        assert!(open.description.contains("depend on the quantity's kind"));
    }

    #[test]
    fn test_open_example_decodes_as_any_kind() {
        for format in WireFormat::ALL {
            for culture in Culture::ALL {
                let config = WireConfig::new(format).with_culture(culture);
                let set = build_schemas(&config).unwrap();
                let example = &set.open().unwrap().example;
                let decoded = config.codec().from_value(example, None);
                assert_eq!(
                    decoded.map(|q| (q.kind(), q.value())),
                    Ok((REPRESENTATIVE_KIND, 1.0)),
                    "{} {} {}",
                    format,
                    culture,
                    example
                );
            }
        }
    }

    #[test]
    fn test_localized_enum() {
        let set = build_schemas(
            &WireConfig::new(WireFormat::Abbreviated).with_culture(Culture::Chinese),
        )
        .unwrap();
        let length = set.kind(Kind::Length).unwrap();
        assert_eq!(length.properties.unit.example, "米");
        assert!(length.units().contains(&"m"));
    }

    #[test]
    fn test_by_name_and_serialized_keys() {
        let set = abbreviated();
        assert_eq!(set.by_name("Quantity").unwrap().title, OPEN_SCHEMA_NAME);
        assert_eq!(set.by_name("Density").unwrap().title, "Density");
        assert!(matches!(set.by_name("Bogus"), Err(QuantaError::UnknownKind(_))));

        let all = serde_json::to_value(&set).unwrap();
        let names = all.as_object().unwrap();
        assert_eq!(names.len(), Kind::ALL.len() + 1);
        assert!(names.contains_key("Quantity"));
        assert!(names.contains_key("Temperature"));
    }
}
