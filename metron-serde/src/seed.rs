//! Stateful deserialization of quantities inside larger serde documents

use serde::de::{DeserializeSeed, Deserializer, Error as _};
use serde::Deserialize;
use metron_units::{Kind, Quantity};
use crate::record::RawRecord;
use crate::Codec;

/// Deserializes one quantity with a codec.
///
/// `QuantitySeed::of_kind` accepts only the given kind; `QuantitySeed::open`
/// accepts any kind and lets the record decide. Typed failures are reported
/// through the deserializer's own error type.
#[derive(Debug, Clone, Copy)]
pub struct QuantitySeed {
    codec: Codec,
    expected: Option<Kind>,
}

impl QuantitySeed {
    pub fn of_kind(codec: Codec, kind: Kind) -> Self {
        QuantitySeed { codec, expected: Some(kind) }
    }

    pub fn open(codec: Codec) -> Self {
        QuantitySeed { codec, expected: None }
    }
}

impl<'de> DeserializeSeed<'de> for QuantitySeed {
    type Value = Quantity;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Quantity, D::Error> {
        let record = RawRecord::deserialize(deserializer)?;
        self.codec.resolve(record, self.expected).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::{MapAccess, Visitor};
    use std::fmt;

    #[test]
    fn test_seed_of_kind() {
        let mut de = serde_json::Deserializer::from_str(r#"{"value":4,"unit":"km"}"#);
        let q = QuantitySeed::of_kind(Codec::abbreviated(), Kind::Length)
            .deserialize(&mut de)
            .unwrap();
        assert_eq!(q, Quantity::of(Kind::Length, "Kilometer", 4.0).unwrap());
    }

    #[test]
    fn test_seed_reports_typed_error() {
        let mut de = serde_json::Deserializer::from_str(r#"{"value":4,"unit":"m"}"#);
        let err = QuantitySeed::open(Codec::abbreviated()).deserialize(&mut de).unwrap_err();
        assert!(err.to_string().contains("ambiguous"), "{}", err);
    }

    /// `{"<name>": <quantity>, ...}` decoded into named open quantities
    struct Readings(Codec);

    impl<'de> Visitor<'de> for Readings {
        type Value = Vec<(String, Quantity)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a map of quantities")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut out = Vec::new();
            while let Some(name) = map.next_key::<String>()? {
                out.push((name, map.next_value_seed(QuantitySeed::open(self.0))?));
            }
            Ok(out)
        }
    }

    #[test]
    fn test_seed_in_map() {
        let text = r#"{
            "height": {"value": 1.8, "unit": "Meter", "type": "Length"},
            "weight": {"value": 72, "unit": "Kilogram", "type": "Mass"}
        }"#;
        let mut de = serde_json::Deserializer::from_str(text);
        let readings = serde::Deserializer::deserialize_map(&mut de, Readings(Codec::explicit())).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].1.kind(), Kind::Length);
        assert_eq!(readings[1].1, Quantity::of(Kind::Mass, "Kilogram", 72.0).unwrap());
    }
}
