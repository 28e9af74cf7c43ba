//! Explicit format: `{"value": <number>, "unit": "<unit name>", "type": "<kind name>"}`

use tracing::debug;
use metron_core::QuantaError;
use metron_units::{Kind, Quantity};
use crate::record::{ExplicitRecord, Magnitude, RawRecord};

pub(crate) fn encode(quantity: &Quantity) -> Result<ExplicitRecord, QuantaError> {
    Ok(ExplicitRecord {
        value: Magnitude::checked(quantity.value())?,
        unit: quantity.unit().name(),
        kind: quantity.kind().name(),
    })
}

/// Resolve `type` to a kind, then `unit` to a unit of that kind.
///
/// The unit name is scoped by the kind, so decoding never depends on which
/// other kinds happen to use the same text.
pub(crate) fn decode(record: RawRecord, expected: Option<Kind>) -> Result<Quantity, QuantaError> {
    let kind_name = record
        .kind
        .as_deref()
        .ok_or_else(|| QuantaError::malformed("missing field `type`"))?;
    let kind = Kind::from_name(kind_name)?;

    if let Some(expected) = expected {
        if expected != kind {
            return Err(QuantaError::UnexpectedKind {
                expected: expected.name().to_string(),
                found: kind.name().to_string(),
            });
        }
    }

    let unit = kind.unit_named(&record.unit)?;
    debug!(unit = ?unit, "decoded explicit quantity");
    Ok(Quantity::new(record.value, unit))
}
