//! SI dimensions of quantity kinds
//!
//! A dimension is the vector of exponents of the seven SI base dimensions,
//! in the order L (length), M (mass), T (time), I (current),
//! Θ (temperature), N (amount), J (luminous intensity).

use std::fmt;
use std::ops::{Div, Mul};

const SYMBOLS: [&str; 7] = ["L", "M", "T", "I", "Θ", "N", "J"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    pub exponents: [i8; 7],
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0]);

    // Base dimensions
    pub const LENGTH: Dimension = Dimension::new([1, 0, 0, 0, 0, 0, 0]);
    pub const MASS: Dimension = Dimension::new([0, 1, 0, 0, 0, 0, 0]);
    pub const TIME: Dimension = Dimension::new([0, 0, 1, 0, 0, 0, 0]);
    pub const CURRENT: Dimension = Dimension::new([0, 0, 0, 1, 0, 0, 0]);
    pub const TEMPERATURE: Dimension = Dimension::new([0, 0, 0, 0, 1, 0, 0]);
    pub const AMOUNT: Dimension = Dimension::new([0, 0, 0, 0, 0, 1, 0]);
    pub const LUMINOSITY: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 1]);

    // Derived dimensions used by the catalog
    pub const AREA: Dimension = Dimension::new([2, 0, 0, 0, 0, 0, 0]);
    pub const VOLUME: Dimension = Dimension::new([3, 0, 0, 0, 0, 0, 0]);
    pub const DENSITY: Dimension = Dimension::new([-3, 1, 0, 0, 0, 0, 0]);
    pub const VELOCITY: Dimension = Dimension::new([1, 0, -1, 0, 0, 0, 0]);
    pub const ACCELERATION: Dimension = Dimension::new([1, 0, -2, 0, 0, 0, 0]);
    pub const FORCE: Dimension = Dimension::new([1, 1, -2, 0, 0, 0, 0]);
    pub const PRESSURE: Dimension = Dimension::new([-1, 1, -2, 0, 0, 0, 0]);
    /// Shared by energy and torque
    pub const ENERGY: Dimension = Dimension::new([2, 1, -2, 0, 0, 0, 0]);
    pub const POWER: Dimension = Dimension::new([2, 1, -3, 0, 0, 0, 0]);
    /// Shared by frequency and rotational speed
    pub const FREQUENCY: Dimension = Dimension::new([0, 0, -1, 0, 0, 0, 0]);
    pub const CHARGE: Dimension = Dimension::new([0, 0, 1, 1, 0, 0, 0]);
    pub const VOLTAGE: Dimension = Dimension::new([2, 1, -3, -1, 0, 0, 0]);
    pub const RESISTANCE: Dimension = Dimension::new([2, 1, -3, -2, 0, 0, 0]);
    pub const CAPACITANCE: Dimension = Dimension::new([-2, -1, 4, 2, 0, 0, 0]);
    pub const VOLUME_FLOW: Dimension = Dimension::new([3, 0, -1, 0, 0, 0, 0]);
    pub const MASS_FLOW: Dimension = Dimension::new([0, 1, -1, 0, 0, 0, 0]);
    pub const ILLUMINANCE: Dimension = Dimension::new([-2, 0, 0, 0, 0, 0, 1]);
    pub const MOLARITY: Dimension = Dimension::new([-3, 0, 0, 0, 0, 1, 0]);

    pub const fn new(exponents: [i8; 7]) -> Self {
        Dimension { exponents }
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }

    /// Dimension of a product (exponents add)
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        Dimension::new(std::array::from_fn(|i| self.exponents[i] + other.exponents[i]))
    }

    /// Dimension of a quotient (exponents subtract)
    pub fn divide(&self, other: &Dimension) -> Dimension {
        Dimension::new(std::array::from_fn(|i| self.exponents[i] - other.exponents[i]))
    }

    pub fn invert(&self) -> Dimension {
        Dimension::DIMENSIONLESS.divide(self)
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        self.multiply(&rhs)
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        self.divide(&rhs)
    }
}

/// Written as `L T^-1`, or `1` when dimensionless
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }
        let parts: Vec<String> = SYMBOLS
            .iter()
            .zip(self.exponents)
            .filter(|(_, exp)| *exp != 0)
            .map(|(symbol, exp)| match exp {
                1 => symbol.to_string(),
                _ => format!("{}^{}", symbol, exp),
            })
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
