//! Wire records - the JSON shapes of both formats

use serde::{Deserialize, Serialize, Serializer};
use metron_core::QuantaError;

/// Largest magnitude written as a JSON integer (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Magnitude as written on the wire.
///
/// Integral values that convert exactly are written as JSON integers (`1`,
/// not `1.0`); everything else uses the shortest text that parses back to
/// the same bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Magnitude(pub f64);

impl Magnitude {
    pub fn checked(value: f64) -> Result<Self, QuantaError> {
        if value.is_finite() {
            Ok(Magnitude(value))
        } else {
            Err(QuantaError::NonFiniteValue(value))
        }
    }

    fn as_exact_integer(self) -> Option<i64> {
        let v = self.0;
        let negative_zero = v == 0.0 && v.is_sign_negative();
        if v.fract() == 0.0 && v.abs() < MAX_EXACT_INTEGER && !negative_zero {
            Some(v as i64)
        } else {
            None
        }
    }
}

impl Serialize for Magnitude {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_exact_integer() {
            Some(i) => serializer.serialize_i64(i),
            None => serializer.serialize_f64(self.0),
        }
    }
}

/// `{"value": 1, "unit": "kg"}`
#[derive(Debug, Serialize)]
pub(crate) struct AbbreviatedRecord {
    pub value: Magnitude,
    pub unit: &'static str,
}

/// `{"value": 1, "unit": "Kilogram", "type": "Mass"}`
#[derive(Debug, Serialize)]
pub(crate) struct ExplicitRecord {
    pub value: Magnitude,
    pub unit: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Incoming record of either format.
///
/// Fields not listed here are ignored. Whether `type` is required depends on
/// the format, so it is checked after parsing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct RawRecord {
    pub value: f64,
    pub unit: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: f64) -> String {
        serde_json::to_string(&Magnitude(value)).unwrap()
    }

    #[test]
    fn test_integral_magnitudes() {
        assert_eq!(text(1.0), "1");
        assert_eq!(text(-273.0), "-273");
        assert_eq!(text(0.0), "0");
        assert_eq!(text(9_007_199_254_740_991.0), "9007199254740991");
    }

    #[test]
    fn test_float_magnitudes() {
        assert_eq!(text(0.1), "0.1");
        assert_eq!(text(-0.0), "-0.0");
        assert_eq!(text(1.5e300), "1.5e300");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(Magnitude::checked(f64::NAN), Err(QuantaError::NonFiniteValue(_))));
        assert!(Magnitude::checked(f64::INFINITY).is_err());
        assert!(Magnitude::checked(1.0).is_ok());
    }

    #[test]
    fn test_raw_record() {
        let raw: RawRecord =
            serde_json::from_str(r#"{"unit":"kg","value":1,"extra":true}"#).unwrap();
        assert_eq!(raw, RawRecord { value: 1.0, unit: "kg".to_string(), kind: None });

        let raw: RawRecord =
            serde_json::from_str(r#"{"value":2.5,"unit":"Kilogram","type":"Mass"}"#).unwrap();
        assert_eq!(raw.kind.as_deref(), Some("Mass"));

        assert!(serde_json::from_str::<RawRecord>(r#"{"value":"1","unit":"kg"}"#).is_err());
        assert!(serde_json::from_str::<RawRecord>(r#"{"unit":"kg"}"#).is_err());
    }
}
