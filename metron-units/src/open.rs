//! Open quantity handle - a quantity whose kind is only known at runtime

use std::fmt;
use metron_core::QuantaError;
use crate::{Kind, Quantity, Unit};

/// Type-erased handle holding a quantity of any catalog kind.
///
/// Because `Kind` is a closed enum the handle is a plain tagged union: the
/// runtime kind is read from the wrapped unit, and narrowing back to a
/// specific kind is a checked comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenQuantity(Quantity);

impl OpenQuantity {
    pub fn new(quantity: Quantity) -> Self {
        OpenQuantity(quantity)
    }

    /// Runtime kind of the held quantity
    pub fn kind(&self) -> Kind {
        self.0.kind()
    }

    pub fn unit(&self) -> Unit {
        self.0.unit()
    }

    pub fn value(&self) -> f64 {
        self.0.value()
    }

    pub fn quantity(&self) -> &Quantity {
        &self.0
    }

    pub fn into_inner(self) -> Quantity {
        self.0
    }

    /// Narrow to a quantity of `expected`, failing if the held kind differs
    pub fn into_kind(self, expected: Kind) -> Result<Quantity, QuantaError> {
        if self.kind() != expected {
            return Err(QuantaError::UnexpectedKind {
                expected: expected.name().to_string(),
                found: self.kind().name().to_string(),
            });
        }
        Ok(self.0)
    }
}

impl From<Quantity> for OpenQuantity {
    fn from(quantity: Quantity) -> Self {
        OpenQuantity(quantity)
    }
}

impl From<OpenQuantity> for Quantity {
    fn from(open: OpenQuantity) -> Self {
        open.0
    }
}

impl fmt::Display for OpenQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_dispatch() {
        let mass = Quantity::of(Kind::Mass, "Kilogram", 1.0).unwrap();
        let open = OpenQuantity::from(mass);
        assert_eq!(open.kind(), Kind::Mass);
        assert_eq!(open.value(), 1.0);
        assert_eq!(open.into_inner(), mass);
        assert_eq!(open.to_string(), "1 kg (Mass)");
    }

    #[test]
    fn test_into_kind() {
        let open = OpenQuantity::new(Quantity::of(Kind::Length, "Meter", 2.0).unwrap());
        assert!(open.into_kind(Kind::Length).is_ok());
        assert_eq!(
            open.into_kind(Kind::Duration).unwrap_err(),
            QuantaError::UnexpectedKind {
                expected: "Duration".to_string(),
                found: "Length".to_string(),
            }
        );
    }
}
