//! Parsing of "<number> <abbreviation>" text

use metron_core::QuantaError;
use crate::{Culture, Kind, OpenQuantity, Quantity, ABBREVIATIONS};

/// Split "5 m" or "100kg" into the number text and the unit token
fn split_quantity(s: &str) -> Result<(f64, &str), QuantaError> {
    let s = s.trim();

    // Abbreviations may contain spaces ("gal (U.S.)"), so the number ends at
    // the first whitespace, or at the first character that cannot continue it.
    let split_pos = match s.find(char::is_whitespace) {
        Some(pos) => pos,
        None => s
            .char_indices()
            .find(|(i, c)| !is_number_char(*c, &s[..*i]))
            .map(|(i, _)| i)
            .unwrap_or(s.len()),
    };

    let num_str = &s[..split_pos];
    let unit_str = s[split_pos..].trim();

    if num_str.is_empty() {
        return Err(QuantaError::malformed(format!("no number found in '{}'", s)));
    }
    if unit_str.is_empty() {
        return Err(QuantaError::malformed(format!("no unit found in '{}'", s)));
    }

    let value: f64 = num_str
        .parse()
        .map_err(|_| QuantaError::malformed(format!("invalid number '{}'", num_str)))?;
    Ok((value, unit_str))
}

/// An exponent marker only continues a number when a digit precedes it
fn is_number_char(c: char, before: &str) -> bool {
    match c {
        '0'..='9' | '.' => true,
        '+' | '-' => before.is_empty() || before.ends_with(['e', 'E']),
        'e' | 'E' => before.ends_with(|p: char| p.is_ascii_digit()),
        _ => false,
    }
}

impl Quantity {
    /// Parse a quantity of a known kind, e.g. `"1 kg"`
    pub fn parse(s: &str, kind: Kind, culture: Culture) -> Result<Quantity, QuantaError> {
        let (value, token) = split_quantity(s)?;
        let unit = ABBREVIATIONS.lookup(kind, token, culture)?;
        Ok(Quantity::new(value, unit))
    }
}

impl OpenQuantity {
    /// Parse a quantity of any kind; the token must identify a single unit
    pub fn parse(s: &str, culture: Culture) -> Result<OpenQuantity, QuantaError> {
        let (value, token) = split_quantity(s)?;
        let unit = ABBREVIATIONS.lookup_any(token, culture)?;
        Ok(OpenQuantity::new(Quantity::new(value, unit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_space() {
        let q = Quantity::parse("1 kg", Kind::Mass, Culture::Invariant).unwrap();
        assert_eq!(q, Quantity::of(Kind::Mass, "Kilogram", 1.0).unwrap());

        let q = Quantity::parse("  2.5   gal (U.S.) ", Kind::Volume, Culture::Invariant).unwrap();
        assert_eq!(q.unit().name(), "UsGallon");
        assert_eq!(q.value(), 2.5);
    }

    #[test]
    fn test_parse_without_space() {
        let q = Quantity::parse("100kg", Kind::Mass, Culture::Invariant).unwrap();
        assert_eq!(q.value(), 100.0);

        let q = Quantity::parse("-1.5e3m", Kind::Length, Culture::Invariant).unwrap();
        assert_eq!(q.value(), -1500.0);
        assert_eq!(q.unit().name(), "Meter");

        // "e" after a digit starts an exponent, so write electronvolts with a space
        let q = Quantity::parse("5 eV", Kind::Energy, Culture::Invariant).unwrap();
        assert_eq!(q.unit().name(), "Electronvolt");
    }

    #[test]
    fn test_parse_localized() {
        let q = Quantity::parse("3 км", Kind::Length, Culture::Russian).unwrap();
        assert_eq!(q.unit().name(), "Kilometer");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Quantity::parse("kg", Kind::Mass, Culture::Invariant),
            Err(QuantaError::MalformedInput(_))
        ));
        assert!(matches!(
            Quantity::parse("12", Kind::Mass, Culture::Invariant),
            Err(QuantaError::MalformedInput(_))
        ));
        assert!(matches!(
            Quantity::parse("1..2 kg", Kind::Mass, Culture::Invariant),
            Err(QuantaError::MalformedInput(_))
        ));
        assert!(matches!(
            Quantity::parse("1 zz", Kind::Mass, Culture::Invariant),
            Err(QuantaError::UnknownAbbreviation { .. })
        ));
    }

    #[test]
    fn test_parse_open() {
        let open = OpenQuantity::parse("4 kg/m³", Culture::Invariant).unwrap();
        assert_eq!(open.kind(), Kind::Density);

        let err = OpenQuantity::parse("1 m", Culture::Invariant).unwrap_err();
        assert!(matches!(err, QuantaError::AmbiguousAbbreviation { .. }));
    }
}
