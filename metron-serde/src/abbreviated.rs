//! Abbreviated format: `{"value": <number>, "unit": "<abbreviation>"}`

use tracing::debug;
use metron_core::QuantaError;
use metron_units::{Culture, Kind, Quantity, ABBREVIATIONS};
use crate::record::{AbbreviatedRecord, Magnitude, RawRecord};

pub(crate) fn encode(quantity: &Quantity, culture: Culture) -> Result<AbbreviatedRecord, QuantaError> {
    Ok(AbbreviatedRecord {
        value: Magnitude::checked(quantity.value())?,
        unit: quantity.unit().abbreviation_for(culture),
    })
}

/// Resolve a record's unit token.
///
/// With an expected kind the token is looked up in that kind only. Without
/// one every kind is searched, and a token declared by several kinds is an
/// error rather than a guess.
pub(crate) fn decode(
    record: RawRecord,
    expected: Option<Kind>,
    culture: Culture,
) -> Result<Quantity, QuantaError> {
    let unit = match expected {
        Some(kind) => ABBREVIATIONS.lookup(kind, &record.unit, culture)?,
        None => ABBREVIATIONS.lookup_any(&record.unit, culture)?,
    };
    debug!(token = %record.unit, unit = ?unit, "decoded abbreviated quantity");
    Ok(Quantity::new(record.value, unit))
}
