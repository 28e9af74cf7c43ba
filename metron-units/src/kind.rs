//! Quantity kinds - the closed set of physical dimensions in the catalog

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Serializer};
use metron_core::QuantaError;
use crate::{Dimension, Unit, UnitDef};
use crate::catalog;

/// Static description of one quantity kind
#[derive(Debug)]
pub struct KindDef {
    pub description: &'static str,
    pub dimension: Dimension,
    /// Index of the base unit in `units`
    pub base: usize,
    /// Whether products/quotients of other kinds may resolve to this kind
    pub derivable: bool,
    /// Ordered unit table
    pub units: &'static [UnitDef],
}

macro_rules! kinds {
    ($( $kind:ident => $table:ident ),+ $(,)?) => {
        /// A physical quantity kind.
        ///
        /// Every kind of the catalog is a variant, which makes the open
        /// quantity handle a plain tagged union.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Kind {
            $( $kind, )+
        }

        impl Kind {
            /// All kinds in catalog order
            pub const ALL: &'static [Kind] = &[ $( Kind::$kind, )+ ];

            /// Identifier used on the wire (e.g. "Length")
            pub fn name(self) -> &'static str {
                match self {
                    $( Kind::$kind => stringify!($kind), )+
                }
            }

            pub fn def(self) -> &'static KindDef {
                match self {
                    $( Kind::$kind => &catalog::$table, )+
                }
            }
        }
    };
}

kinds! {
    Length => LENGTH,
    Mass => MASS,
    Duration => DURATION,
    Temperature => TEMPERATURE,
    ElectricCurrent => ELECTRIC_CURRENT,
    AmountOfSubstance => AMOUNT_OF_SUBSTANCE,
    LuminousIntensity => LUMINOUS_INTENSITY,
    Area => AREA,
    Volume => VOLUME,
    Density => DENSITY,
    Speed => SPEED,
    Acceleration => ACCELERATION,
    Force => FORCE,
    Pressure => PRESSURE,
    Energy => ENERGY,
    Power => POWER,
    Frequency => FREQUENCY,
    RotationalSpeed => ROTATIONAL_SPEED,
    Angle => ANGLE,
    Information => INFORMATION,
    ElectricPotential => ELECTRIC_POTENTIAL,
    ElectricResistance => ELECTRIC_RESISTANCE,
    ElectricCharge => ELECTRIC_CHARGE,
    Capacitance => CAPACITANCE,
    Torque => TORQUE,
    VolumeFlow => VOLUME_FLOW,
    MassFlow => MASS_FLOW,
    Ratio => RATIO,
    Illuminance => ILLUMINANCE,
    Molarity => MOLARITY,
}

impl Kind {
    /// Resolve a kind by its exact name
    pub fn from_name(name: &str) -> Result<Kind, QuantaError> {
        Kind::ALL
            .iter()
            .copied()
            .find(|k| k.name() == name)
            .ok_or_else(|| QuantaError::UnknownKind(name.to_string()))
    }

    pub fn description(self) -> &'static str {
        self.def().description
    }

    pub fn dimension(self) -> Dimension {
        self.def().dimension
    }

    pub fn is_derivable(self) -> bool {
        self.def().derivable
    }

    pub fn base_unit(self) -> Unit {
        Unit::new(self, self.def().base as u8)
    }

    /// Units of this kind in catalog order
    pub fn units(self) -> impl Iterator<Item = Unit> {
        (0..self.def().units.len()).map(move |i| Unit::new(self, i as u8))
    }

    /// Resolve a unit of this kind by canonical name
    pub fn unit_named(self, name: &str) -> Result<Unit, QuantaError> {
        self.units()
            .find(|u| u.name() == name)
            .ok_or_else(|| QuantaError::UnknownUnit {
                kind: self.name().to_string(),
                unit: name.to_string(),
            })
    }

    /// First derivable kind with the given dimension
    pub fn for_dimension(dimension: Dimension) -> Option<Kind> {
        Kind::ALL
            .iter()
            .copied()
            .find(|k| k.is_derivable() && k.dimension() == dimension)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Kind {
    type Err = QuantaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::from_name(s)
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
