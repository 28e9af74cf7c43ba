//! Metron Units - Quantity kinds, units and conversion
//!
//! A closed catalog of physical quantity kinds, each owning an ordered set of
//! units with affine conversion to the kind's base unit.
//!
//! Kinds (base unit):
//! - Length (m), Mass (kg), Duration (s), Temperature (K)
//! - ElectricCurrent (A), AmountOfSubstance (mol), LuminousIntensity (cd)
//! - Area (m²), Volume (m³), Density (kg/m³)
//! - Speed (m/s), Acceleration (m/s²), Force (N), Pressure (Pa)
//! - Energy (J), Power (W), Frequency (Hz), RotationalSpeed (rad/s)
//! - Angle (rad), Information (b)
//! - ElectricPotential (V), ElectricResistance (Ω), ElectricCharge (C), Capacitance (F)
//! - Torque (N·m), VolumeFlow (m³/s), MassFlow (kg/s)
//! - Ratio, Illuminance (lx), Molarity (mol/m³)
//!
//! Everything here is immutable after first use and safe to share between
//! threads.

mod dimension;
mod culture;
mod unit;
mod kind;
mod catalog;
mod abbrev;
mod convert;
mod quantity;
mod open;
mod parse;

pub use dimension::Dimension;
pub use culture::Culture;
pub use unit::{Unit, UnitDef};
pub use kind::{Kind, KindDef};
pub use abbrev::{AbbreviationRegistry, ABBREVIATIONS, all_abbreviations};
pub use convert::{convert, convert_named, convert_value, conversion_rule, compatible, readable_units};
pub use quantity::Quantity;
pub use open::OpenQuantity;
