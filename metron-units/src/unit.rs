//! Unit representation with affine conversion factors

use std::fmt;
use serde::{Serialize, Serializer};
use crate::{Culture, Kind};

/// Static description of one unit in the catalog.
///
/// Conversion to the kind's base unit is affine:
/// `value_base = value * factor + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    /// Canonical name (e.g. "Kilogram")
    pub name: &'static str,
    /// Invariant abbreviations, the first one is used for encoding
    pub abbreviations: &'static [&'static str],
    /// Culture-specific abbreviations
    pub localized: &'static [(Culture, &'static [&'static str])],
    /// Multiplier to the base unit
    pub factor: f64,
    /// Offset for non-proportional units like temperature (Celsius, Fahrenheit)
    pub offset: f64,
}

impl UnitDef {
    /// Unit with proportional conversion (no offset)
    pub const fn linear(name: &'static str, abbreviations: &'static [&'static str], factor: f64) -> Self {
        UnitDef { name, abbreviations, localized: &[], factor, offset: 0.0 }
    }

    /// Unit with offset (for temperature conversions)
    pub const fn affine(
        name: &'static str,
        abbreviations: &'static [&'static str],
        factor: f64,
        offset: f64,
    ) -> Self {
        UnitDef { name, abbreviations, localized: &[], factor, offset }
    }

    pub const fn localized(self, localized: &'static [(Culture, &'static [&'static str])]) -> Self {
        UnitDef { localized, ..self }
    }

    /// Convert a value in this unit to the base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor + self.offset
    }

    /// Convert a value in the base unit to this unit
    pub fn from_base(&self, value_base: f64) -> f64 {
        (value_base - self.offset) / self.factor
    }

    /// Token written when encoding; the name stands in for a unit without abbreviations
    pub fn abbreviation(&self) -> &'static str {
        self.abbreviations.first().copied().unwrap_or(self.name)
    }

    /// Encoding token for a culture, falling back to the invariant one
    pub fn abbreviation_for(&self, culture: Culture) -> &'static str {
        self.localized
            .iter()
            .filter(|(c, _)| *c == culture)
            .find_map(|(_, list)| list.first().copied())
            .unwrap_or_else(|| self.abbreviation())
    }

    /// Abbreviations accepted for a culture, most specific first
    pub fn abbreviations_for(&self, culture: Culture) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::with_capacity(self.abbreviations.len());
        if !culture.is_invariant() {
            for (c, list) in self.localized {
                if *c == culture {
                    out.extend(list.iter().copied());
                }
            }
        }
        for abbrev in self.abbreviations {
            if !out.contains(abbrev) {
                out.push(abbrev);
            }
        }
        out
    }
}

/// Handle to a unit of a specific kind.
///
/// A `Unit` can only be obtained from its kind, so `unit.kind()` always
/// matches the kind whose table holds its definition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Unit {
    kind: Kind,
    index: u8,
}

impl Unit {
    pub(crate) const fn new(kind: Kind, index: u8) -> Self {
        Unit { kind, index }
    }

    pub fn kind(self) -> Kind {
        self.kind
    }

    /// Position of this unit in its kind's ordered unit list
    pub fn index(self) -> usize {
        self.index as usize
    }

    pub fn def(self) -> &'static UnitDef {
        &self.kind.def().units[self.index as usize]
    }

    /// Canonical name, unique within the kind
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// First invariant abbreviation
    pub fn abbreviation(self) -> &'static str {
        self.def().abbreviation()
    }

    pub fn abbreviations(self, culture: Culture) -> Vec<&'static str> {
        self.def().abbreviations_for(culture)
    }

    /// First abbreviation for a culture, falling back to the invariant one
    pub fn abbreviation_for(self, culture: Culture) -> &'static str {
        self.def().abbreviation_for(culture)
    }

    pub fn factor(self) -> f64 {
        self.def().factor
    }

    pub fn offset(self) -> f64 {
        self.def().offset
    }

    /// Check if this is the base unit of its kind
    pub fn is_base(self) -> bool {
        self == self.kind.base_unit()
    }

    /// Check if this unit has an offset (non-proportional conversion)
    pub fn has_offset(self) -> bool {
        self.offset() != 0.0
    }

    /// "Kind.Unit" form used in messages
    pub fn qualified_name(self) -> String {
        format!("{}.{}", self.kind.name(), self.name())
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind.name(), self.name())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
