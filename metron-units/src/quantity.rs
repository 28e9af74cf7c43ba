//! Quantity type - a magnitude with a unit of a known kind

use std::fmt;
use metron_core::QuantaError;
use crate::{Dimension, Kind, Unit};
use crate::convert;

/// A physical quantity: a 64-bit magnitude in one unit of one kind.
///
/// Quantities are immutable. Conversion and arithmetic always produce a new
/// value, and the kind is carried by the unit so the two cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// Build a quantity from a unit's canonical name within `kind`
    pub fn of(kind: Kind, unit_name: &str, value: f64) -> Result<Self, QuantaError> {
        Ok(Quantity::new(value, kind.unit_named(unit_name)?))
    }

    /// Quantity expressed in the base unit of `kind`
    pub fn base(kind: Kind, value: f64) -> Self {
        Quantity::new(value, kind.base_unit())
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn kind(&self) -> Kind {
        self.unit.kind()
    }

    pub fn dimension(&self) -> Dimension {
        self.kind().dimension()
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    /// Convert to another unit of the same kind
    pub fn convert_to(&self, target: Unit) -> Result<Quantity, QuantaError> {
        convert::convert(self, target)
    }

    /// Convert to the unit of this kind with the given canonical name
    pub fn convert_to_named(&self, unit_name: &str) -> Result<Quantity, QuantaError> {
        convert::convert_named(self, unit_name)
    }

    /// Magnitude in the kind's base unit
    pub fn base_value(&self) -> f64 {
        self.unit.def().to_base(self.value)
    }

    /// Same quantity expressed in the kind's base unit
    pub fn to_base(&self) -> Quantity {
        Quantity::base(self.kind(), self.base_value())
    }

    /// Add a quantity of the same kind; the result keeps this quantity's unit
    pub fn add(&self, other: &Quantity) -> Result<Quantity, QuantaError> {
        let other = other.convert_to(self.unit)?;
        Ok(Quantity::new(self.value + other.value, self.unit))
    }

    /// Subtract a quantity of the same kind; the result keeps this quantity's unit
    pub fn sub(&self, other: &Quantity) -> Result<Quantity, QuantaError> {
        let other = other.convert_to(self.unit)?;
        Ok(Quantity::new(self.value - other.value, self.unit))
    }

    /// Multiply the magnitude by a plain number
    pub fn scale(&self, factor: f64) -> Quantity {
        Quantity::new(self.value * factor, self.unit)
    }

    /// Multiply two quantities (dimensions are multiplied).
    ///
    /// The result is expressed in the base unit of the catalog kind with the
    /// product dimension.
    pub fn mul(&self, other: &Quantity) -> Result<Quantity, QuantaError> {
        let dimension = self.dimension().multiply(&other.dimension());
        self.derive("*", other, dimension, self.base_value() * other.base_value())
    }

    /// Divide two quantities (dimensions are divided)
    pub fn div(&self, other: &Quantity) -> Result<Quantity, QuantaError> {
        let dimension = self.dimension().divide(&other.dimension());
        self.derive("/", other, dimension, self.base_value() / other.base_value())
    }

    fn derive(
        &self,
        op: &'static str,
        other: &Quantity,
        dimension: Dimension,
        value: f64,
    ) -> Result<Quantity, QuantaError> {
        let kind = Kind::for_dimension(dimension).ok_or_else(|| QuantaError::UnsupportedDerivation {
            op,
            left: self.kind().name().to_string(),
            right: other.kind().name().to_string(),
        })?;
        Ok(Quantity::base(kind, value))
    }

    /// Compare with another quantity of the same kind within a relative tolerance
    pub fn approx_eq(&self, other: &Quantity, tolerance: f64) -> bool {
        if self.kind() != other.kind() {
            return false;
        }
        let a = self.base_value();
        let b = other.base_value();
        let scale = a.abs().max(b.abs()).max(f64::MIN_POSITIVE);
        (a - b).abs() <= tolerance * scale
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn q(kind: Kind, unit: &str, value: f64) -> Quantity {
        Quantity::of(kind, unit, value).unwrap()
    }

    #[test]
    fn test_quantity_creation() {
        let mass = q(Kind::Mass, "Kilogram", 1.0);
        assert_eq!(mass.kind(), Kind::Mass);
        assert_eq!(mass.value(), 1.0);
        assert_eq!(mass.unit().name(), "Kilogram");
        assert!(Quantity::of(Kind::Mass, "Meter", 1.0).is_err());
    }

    #[test]
    fn test_to_base() {
        let km = q(Kind::Length, "Kilometer", 5.0);
        let base = km.to_base();
        assert_eq!(base.value(), 5000.0);
        assert!(base.unit().is_base());
    }

    #[test]
    fn test_add_and_sub() {
        let km = q(Kind::Length, "Kilometer", 1.0);
        let m = q(Kind::Length, "Meter", 500.0);
        let sum = km.add(&m).unwrap();
        assert_eq!(sum.value(), 1.5);
        assert_eq!(sum.unit().name(), "Kilometer");

        let diff = km.sub(&m).unwrap();
        assert_eq!(diff.value(), 0.5);

        let err = km.add(&q(Kind::Mass, "Kilogram", 1.0)).unwrap_err();
        assert!(matches!(err, QuantaError::ConversionKindMismatch { .. }));
    }

    #[test]
    fn test_scale() {
        let m = q(Kind::Length, "Meter", 2.5).scale(4.0);
        assert_eq!(m.value(), 10.0);
        assert_eq!(m.unit().name(), "Meter");
    }

    #[test]
    fn test_density_derivation() {
        let mass = q(Kind::Mass, "Kilogram", 1.0);
        let volume = q(Kind::Volume, "Liter", 1.0);
        let density = mass.div(&volume).unwrap();
        assert_eq!(density.kind(), Kind::Density);
        assert_eq!(density.convert_to_named("GramPerMilliliter").unwrap().value(), 1.0);
    }

    #[test]
    fn test_derivations() {
        let speed = q(Kind::Length, "Kilometer", 36.0).div(&q(Kind::Duration, "Hour", 1.0)).unwrap();
        assert_eq!(speed.kind(), Kind::Speed);
        assert!((speed.value() - 10.0).abs() < 1e-12);

        let area = q(Kind::Length, "Meter", 3.0).mul(&q(Kind::Length, "Meter", 4.0)).unwrap();
        assert_eq!(area.kind(), Kind::Area);
        assert_eq!(area.value(), 12.0);

        let pressure = q(Kind::Force, "Newton", 10.0).div(&q(Kind::Area, "SquareMeter", 2.0)).unwrap();
        assert_eq!(pressure.kind(), Kind::Pressure);
        assert_eq!(pressure.value(), 5.0);

        // Force times length is energy, never torque
        let work = q(Kind::Force, "Newton", 2.0).mul(&q(Kind::Length, "Meter", 3.0)).unwrap();
        assert_eq!(work.kind(), Kind::Energy);

        let ratio = q(Kind::Length, "Meter", 1.0).div(&q(Kind::Length, "Kilometer", 1.0)).unwrap();
        assert_eq!(ratio.kind(), Kind::Ratio);
        assert_eq!(ratio.value(), 0.001);
    }

    #[test]
    fn test_unsupported_derivation() {
        let err = q(Kind::Mass, "Kilogram", 1.0)
            .mul(&q(Kind::Temperature, "Kelvin", 1.0))
            .unwrap_err();
        assert_eq!(
            err,
            QuantaError::UnsupportedDerivation {
                op: "*",
                left: "Mass".to_string(),
                right: "Temperature".to_string(),
            }
        );
    }

    #[test]
    fn test_approx_eq() {
        let a = q(Kind::Length, "Kilometer", 1.0);
        let b = q(Kind::Length, "Meter", 1000.0);
        assert!(a.approx_eq(&b, 1e-12));
        assert!(!a.approx_eq(&q(Kind::Length, "Meter", 999.0), 1e-12));
        assert!(!a.approx_eq(&q(Kind::Mass, "Kilogram", 1000.0), 1e-12));
    }

    #[test]
    fn test_equality() {
        assert_eq!(q(Kind::Mass, "Gram", 5.0), q(Kind::Mass, "Gram", 5.0));
        // Same physical amount, different unit: not equal
        assert_ne!(q(Kind::Mass, "Kilogram", 1.0), q(Kind::Mass, "Gram", 1000.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(q(Kind::Mass, "Kilogram", 1.0).to_string(), "1 kg");
        assert_eq!(q(Kind::Temperature, "DegreeCelsius", -40.5).to_string(), "-40.5 °C");
    }

    fn any_unit() -> impl Strategy<Value = Unit> {
        proptest::sample::select(Kind::ALL.to_vec())
            .prop_flat_map(|kind| proptest::sample::select(kind.units().collect::<Vec<_>>()))
    }

    fn unit_chain() -> impl Strategy<Value = (Unit, Unit, Unit)> {
        proptest::sample::select(Kind::ALL.to_vec()).prop_flat_map(|kind| {
            let units: Vec<Unit> = kind.units().collect();
            (
                proptest::sample::select(units.clone()),
                proptest::sample::select(units.clone()),
                proptest::sample::select(units),
            )
        })
    }

    proptest! {
        #[test]
        fn test_conversion_identity(unit in any_unit(), value in -1e12f64..1e12) {
            let q = Quantity::new(value, unit);
            prop_assert_eq!(q.convert_to(unit).unwrap(), q);
        }

        #[test]
        fn test_conversion_composition((u1, u2, u3) in unit_chain(), value in -1e6f64..1e6) {
            let q = Quantity::new(value, u1);
            let via = q.convert_to(u2).unwrap().convert_to(u3).unwrap();
            let direct = q.convert_to(u3).unwrap();
            prop_assert_eq!(via.unit(), direct.unit());
            let tolerance = 1e-9 * direct.value().abs().max(1.0);
            prop_assert!(
                (via.value() - direct.value()).abs() <= tolerance,
                "{} -> {} -> {}: {} vs {}", u1.qualified_name(), u2.qualified_name(),
                u3.qualified_name(), via.value(), direct.value()
            );
        }
    }
}
