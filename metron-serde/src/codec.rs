//! Codec - encode and decode quantities in the configured wire format

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value as JsonValue;
use metron_core::QuantaError;
use metron_units::{Culture, Kind, OpenQuantity, Quantity};
use crate::record::RawRecord;
use crate::{abbreviated, explicit, WireFormat};

/// Encoder/decoder for one wire format.
///
/// Pure and `Copy`: one instance can serve any number of concurrent requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    format: WireFormat,
    culture: Culture,
}

impl Codec {
    pub fn new(format: WireFormat) -> Self {
        Codec { format, culture: Culture::Invariant }
    }

    pub fn abbreviated() -> Self {
        Codec::new(WireFormat::Abbreviated)
    }

    pub fn explicit() -> Self {
        Codec::new(WireFormat::ExplicitUnitAndKind)
    }

    /// Culture of the abbreviations written and accepted by the Abbreviated format
    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = culture;
        self
    }

    pub fn format(&self) -> WireFormat {
        self.format
    }

    pub fn culture(&self) -> Culture {
        self.culture
    }

    /// Serializable view of a quantity in this codec's format
    pub fn encoded(&self, quantity: &Quantity) -> Encoded {
        Encoded { codec: *self, quantity: *quantity }
    }

    /// Encode a quantity as JSON text
    pub fn encode(&self, quantity: &Quantity) -> Result<String, QuantaError> {
        match self.format {
            WireFormat::Abbreviated => {
                json_text(&abbreviated::encode(quantity, self.culture)?)
            }
            WireFormat::ExplicitUnitAndKind => json_text(&explicit::encode(quantity)?),
        }
    }

    /// Encode an open quantity; the shape is the one of its runtime kind
    pub fn encode_open(&self, quantity: &OpenQuantity) -> Result<String, QuantaError> {
        self.encode(quantity.quantity())
    }

    /// Encode as a JSON tree
    pub fn to_value(&self, quantity: &Quantity) -> Result<JsonValue, QuantaError> {
        let value = match self.format {
            WireFormat::Abbreviated => {
                serde_json::to_value(abbreviated::encode(quantity, self.culture)?)
            }
            WireFormat::ExplicitUnitAndKind => serde_json::to_value(explicit::encode(quantity)?),
        };
        value.map_err(QuantaError::malformed)
    }

    /// Decode text holding a quantity of `kind`
    pub fn decode(&self, text: &str, kind: Kind) -> Result<Quantity, QuantaError> {
        let record: RawRecord = serde_json::from_str(text).map_err(QuantaError::malformed)?;
        self.resolve(record, Some(kind))
    }

    /// Decode text holding a quantity of any kind
    pub fn decode_open(&self, text: &str) -> Result<OpenQuantity, QuantaError> {
        let record: RawRecord = serde_json::from_str(text).map_err(QuantaError::malformed)?;
        self.resolve(record, None).map(OpenQuantity::from)
    }

    /// Decode a JSON tree; `None` accepts any kind
    pub fn from_value(&self, value: &JsonValue, kind: Option<Kind>) -> Result<Quantity, QuantaError> {
        let record = RawRecord::deserialize(value).map_err(QuantaError::malformed)?;
        self.resolve(record, kind)
    }

    pub(crate) fn resolve(&self, record: RawRecord, expected: Option<Kind>) -> Result<Quantity, QuantaError> {
        match self.format {
            WireFormat::Abbreviated => abbreviated::decode(record, expected, self.culture),
            WireFormat::ExplicitUnitAndKind => explicit::decode(record, expected),
        }
    }
}

fn json_text<T: Serialize>(record: &T) -> Result<String, QuantaError> {
    serde_json::to_string(record).map_err(QuantaError::malformed)
}

/// A quantity paired with the codec that writes it, for embedding in larger
/// serde documents
#[derive(Debug, Clone, Copy)]
pub struct Encoded {
    codec: Codec,
    quantity: Quantity,
}

impl Serialize for Encoded {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.codec.format {
            WireFormat::Abbreviated => abbreviated::encode(&self.quantity, self.codec.culture)
                .map_err(S::Error::custom)?
                .serialize(serializer),
            WireFormat::ExplicitUnitAndKind => explicit::encode(&self.quantity)
                .map_err(S::Error::custom)?
                .serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kg(value: f64) -> Quantity {
        Quantity::of(Kind::Mass, "Kilogram", value).unwrap()
    }

    #[test]
    fn test_encode_abbreviated() {
        let codec = Codec::abbreviated();
        assert_eq!(codec.encode(&kg(1.0)).unwrap(), r#"{"value":1,"unit":"kg"}"#);
        assert_eq!(codec.encode(&kg(0.25)).unwrap(), r#"{"value":0.25,"unit":"kg"}"#);
    }

    #[test]
    fn test_encode_explicit() {
        let codec = Codec::explicit();
        assert_eq!(
            codec.encode(&kg(1.0)).unwrap(),
            r#"{"value":1,"unit":"Kilogram","type":"Mass"}"#
        );
    }

    #[test]
    fn test_encode_non_finite() {
        for codec in [Codec::abbreviated(), Codec::explicit()] {
            let err = codec.encode(&kg(f64::NAN)).unwrap_err();
            assert!(matches!(err, QuantaError::NonFiniteValue(_)));
            assert!(serde_json::to_string(&codec.encoded(&kg(f64::INFINITY))).is_err());
        }
    }

    #[test]
    fn test_decode_malformed() {
        let codec = Codec::abbreviated();
        for text in ["", "{", "[]", r#"{"value":1}"#, r#"{"value":null,"unit":"kg"}"#, "42"] {
            let err = codec.decode(text, Kind::Mass).unwrap_err();
            assert!(matches!(err, QuantaError::MalformedInput(_)), "{}: {:?}", text, err);
        }
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let q = Codec::abbreviated()
            .decode(r#"{"unit":"g","value":3,"comment":"x"}"#, Kind::Mass)
            .unwrap();
        assert_eq!(q, Quantity::of(Kind::Mass, "Gram", 3.0).unwrap());
    }

    #[test]
    fn test_decode_open_explicit() {
        let open = Codec::explicit()
            .decode_open(r#"{"value":2,"unit":"Minute","type":"Duration"}"#)
            .unwrap();
        assert_eq!(open.kind(), Kind::Duration);
        assert_eq!(open.value(), 2.0);
    }

    #[test]
    fn test_explicit_unexpected_kind() {
        let err = Codec::explicit()
            .decode(r#"{"value":1,"unit":"Kilogram","type":"Mass"}"#, Kind::Length)
            .unwrap_err();
        assert_eq!(
            err,
            QuantaError::UnexpectedKind { expected: "Length".to_string(), found: "Mass".to_string() }
        );
    }

    #[test]
    fn test_value_trees() {
        let codec = Codec::explicit();
        let value = codec.to_value(&kg(1.5)).unwrap();
        assert_eq!(value, json!({"value": 1.5, "unit": "Kilogram", "type": "Mass"}));
        assert_eq!(codec.from_value(&value, Some(Kind::Mass)).unwrap(), kg(1.5));
        assert_eq!(codec.from_value(&value, None).unwrap(), kg(1.5));
        assert!(codec.from_value(&json!("1 kg"), None).is_err());
    }

    #[test]
    fn test_encoded_embeds_in_documents() {
        #[derive(Serialize)]
        struct Shipment {
            id: u32,
            weight: Encoded,
        }

        let shipment = Shipment { id: 7, weight: Codec::abbreviated().encoded(&kg(12.0)) };
        assert_eq!(
            serde_json::to_string(&shipment).unwrap(),
            r#"{"id":7,"weight":{"value":12,"unit":"kg"}}"#
        );
    }

    #[test]
    fn test_localized_codec() {
        let codec = Codec::abbreviated().with_culture(Culture::Russian);
        let text = codec.encode(&kg(2.0)).unwrap();
        assert_eq!(text, r#"{"value":2,"unit":"кг"}"#);
        assert_eq!(codec.decode(&text, Kind::Mass).unwrap(), kg(2.0));
        // Invariant tokens still decode
        assert_eq!(codec.decode(r#"{"value":2,"unit":"kg"}"#, Kind::Mass).unwrap(), kg(2.0));
    }
}
