//! Conversion engine - affine conversion between units of one kind

use metron_core::QuantaError;
use crate::{Kind, Quantity, Unit};

/// Convert a magnitude from one unit to another of the same kind.
///
/// Converting to the same unit returns the magnitude untouched, so identity
/// conversion is exact even for affine units.
pub fn convert_value(value: f64, from: Unit, to: Unit) -> Result<f64, QuantaError> {
    if from.kind() != to.kind() {
        return Err(QuantaError::ConversionKindMismatch {
            from: from.qualified_name(),
            to: to.qualified_name(),
        });
    }
    if from == to {
        return Ok(value);
    }
    let base = from.def().to_base(value);
    Ok(to.def().from_base(base))
}

/// Convert a quantity into `target`
pub fn convert(quantity: &Quantity, target: Unit) -> Result<Quantity, QuantaError> {
    let value = convert_value(quantity.value(), quantity.unit(), target)?;
    Ok(Quantity::new(value, target))
}

/// Convert a quantity into the unit of its own kind with the given canonical name
pub fn convert_named(quantity: &Quantity, unit_name: &str) -> Result<Quantity, QuantaError> {
    let target = quantity.kind().unit_named(unit_name)?;
    convert(quantity, target)
}

/// Conversion factor and offset taking values of `from` into `to`:
/// `to_value = from_value * factor + offset`
pub fn conversion_rule(from: Unit, to: Unit) -> Result<(f64, f64), QuantaError> {
    let offset = convert_value(0.0, from, to)?;
    let factor = convert_value(1.0, from, to)? - offset;
    Ok((factor, offset))
}

/// Whether two units can be converted into each other
pub fn compatible(a: Unit, b: Unit) -> bool {
    a.kind() == b.kind()
}

/// Units of `kind` into which `value` converts to a magnitude between 1 and 1000,
/// smallest magnitude first. Affine units are skipped.
pub fn readable_units(value: f64, unit: Unit, kind: Kind) -> Vec<(Unit, f64)> {
    let mut out: Vec<(Unit, f64)> = kind
        .units()
        .filter(|u| !u.has_offset())
        .filter_map(|u| convert_value(value, unit, u).ok().map(|v| (u, v)))
        .filter(|(_, v)| (1.0..1000.0).contains(&v.abs()))
        .collect();
    out.sort_by(|a, b| a.1.abs().total_cmp(&b.1.abs()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(kind: Kind, name: &str) -> Unit {
        kind.unit_named(name).unwrap()
    }

    #[test]
    fn test_convert_length() {
        let km = Quantity::new(5.0, unit(Kind::Length, "Kilometer"));
        let m = convert(&km, unit(Kind::Length, "Meter")).unwrap();
        assert_eq!(m.value(), 5000.0);
        assert_eq!(m.unit(), unit(Kind::Length, "Meter"));
    }

    #[test]
    fn test_convert_temperature() {
        let boiling = Quantity::new(100.0, unit(Kind::Temperature, "DegreeCelsius"));
        let f = convert(&boiling, unit(Kind::Temperature, "DegreeFahrenheit")).unwrap();
        assert!((f.value() - 212.0).abs() < 1e-9);

        let k = convert(&boiling, unit(Kind::Temperature, "Kelvin")).unwrap();
        assert!((k.value() - 373.15).abs() < 1e-9);
    }

    #[test]
    fn test_identity_is_exact() {
        let c = unit(Kind::Temperature, "DegreeCelsius");
        let q = Quantity::new(0.1, c);
        assert_eq!(convert(&q, c).unwrap(), q);
    }

    #[test]
    fn test_kind_mismatch() {
        let q = Quantity::new(1.0, unit(Kind::Mass, "Kilogram"));
        let err = convert(&q, unit(Kind::Length, "Meter")).unwrap_err();
        assert_eq!(
            err,
            QuantaError::ConversionKindMismatch {
                from: "Mass.Kilogram".to_string(),
                to: "Length.Meter".to_string(),
            }
        );
        assert!(!compatible(q.unit(), unit(Kind::Length, "Meter")));
    }

    #[test]
    fn test_convert_named() {
        let q = Quantity::new(1.0, unit(Kind::Mass, "Kilogram"));
        let g = convert_named(&q, "Gram").unwrap();
        assert_eq!(g.value(), 1000.0);
        assert!(convert_named(&q, "Meter").is_err());
    }

    #[test]
    fn test_conversion_rule() {
        let (factor, offset) = conversion_rule(
            unit(Kind::Temperature, "DegreeCelsius"),
            unit(Kind::Temperature, "DegreeFahrenheit"),
        )
        .unwrap();
        assert!((factor - 1.8).abs() < 1e-9);
        assert!((offset - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_readable_units() {
        let meters = unit(Kind::Length, "Meter");
        let found = readable_units(2500.0, meters, Kind::Length);
        assert!(found.iter().any(|(u, v)| u.name() == "Kilometer" && (*v - 2.5).abs() < 1e-12));
        assert!(found.iter().all(|(_, v)| (1.0..1000.0).contains(v)));
    }
}
