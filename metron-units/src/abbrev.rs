//! Abbreviation registry - resolves textual unit tokens to units
//!
//! Lookups are exact (case-sensitive). A token that maps to more than one unit
//! is reported as ambiguous instead of picking one of them.

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;
use metron_core::QuantaError;
use crate::{Culture, Kind, Unit};

/// Global abbreviation registry, built from the catalog on first use
pub static ABBREVIATIONS: LazyLock<AbbreviationRegistry> =
    LazyLock::new(AbbreviationRegistry::from_catalog);

/// Index from token to the (culture, unit) pairs that declare it
pub struct AbbreviationRegistry {
    entries: HashMap<&'static str, Vec<(Culture, Unit)>>,
}

impl AbbreviationRegistry {
    pub fn from_catalog() -> Self {
        let mut entries = Vec::new();
        for &kind in Kind::ALL {
            for unit in kind.units() {
                let def = unit.def();
                for abbrev in def.abbreviations {
                    entries.push((Culture::Invariant, *abbrev, unit));
                }
                for (culture, list) in def.localized {
                    for abbrev in list.iter() {
                        entries.push((*culture, *abbrev, unit));
                    }
                }
            }
        }
        Self::from_entries(entries)
    }

    pub(crate) fn from_entries(
        entries: impl IntoIterator<Item = (Culture, &'static str, Unit)>,
    ) -> Self {
        let mut map: HashMap<&'static str, Vec<(Culture, Unit)>> = HashMap::new();
        for (culture, token, unit) in entries {
            let declared = map.entry(token).or_default();
            if !declared.contains(&(culture, unit)) {
                declared.push((culture, unit));
            }
        }
        AbbreviationRegistry { entries: map }
    }

    fn units_for<'a>(&'a self, culture: Culture, token: &str) -> impl Iterator<Item = Unit> + 'a {
        self.entries
            .get(token)
            .into_iter()
            .flatten()
            .filter(move |(c, _)| *c == culture)
            .map(|(_, unit)| *unit)
    }

    /// Candidate units for a token: culture-specific matches first, invariant
    /// matches only when the culture has none.
    fn candidates(&self, token: &str, culture: Culture, kind: Option<Kind>) -> Vec<Unit> {
        let in_scope = |u: &Unit| kind.map_or(true, |k| u.kind() == k);

        let mut found: Vec<Unit> = Vec::new();
        if !culture.is_invariant() {
            found.extend(self.units_for(culture, token).filter(in_scope));
        }
        if found.is_empty() {
            found.extend(self.units_for(Culture::Invariant, token).filter(in_scope));
        }
        found
    }

    /// Resolve a token within one kind
    pub fn lookup(&self, kind: Kind, token: &str, culture: Culture) -> Result<Unit, QuantaError> {
        let found = self.candidates(token, culture, Some(kind));
        resolve(token, found, Some(kind))
    }

    /// Resolve a token across every kind of the catalog
    pub fn lookup_any(&self, token: &str, culture: Culture) -> Result<Unit, QuantaError> {
        let found = self.candidates(token, culture, None);
        resolve(token, found, None)
    }

    /// Kinds that declare a token, in catalog order
    pub fn kinds_defining(&self, token: &str, culture: Culture) -> Vec<Kind> {
        let mut kinds: Vec<Kind> = self
            .candidates(token, culture, None)
            .into_iter()
            .map(|u| u.kind())
            .collect();
        kinds.sort();
        kinds.dedup();
        kinds
    }

    /// Tokens declared by more than one kind, sorted
    pub fn shared_tokens(&self, culture: Culture) -> Vec<&'static str> {
        let mut tokens: Vec<&'static str> = self
            .entries
            .iter()
            .filter(|(_, declared)| {
                let mut kinds = declared
                    .iter()
                    .filter(|(c, _)| *c == culture)
                    .map(|(_, u)| u.kind());
                match kinds.next() {
                    Some(first) => kinds.any(|k| k != first),
                    None => false,
                }
            })
            .map(|(token, _)| *token)
            .collect();
        tokens.sort_unstable();
        tokens
    }

    /// Number of distinct tokens across all cultures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn resolve(token: &str, found: Vec<Unit>, kind: Option<Kind>) -> Result<Unit, QuantaError> {
    match found.as_slice() {
        [] => Err(QuantaError::UnknownAbbreviation {
            abbreviation: token.to_string(),
            kind: kind.map(|k| k.name().to_string()),
        }),
        [unit] => Ok(*unit),
        many => {
            debug!(token, candidates = many.len(), "ambiguous abbreviation");
            Err(QuantaError::AmbiguousAbbreviation {
                abbreviation: token.to_string(),
                candidates: many.iter().map(|u| u.qualified_name()).collect(),
            })
        }
    }
}

/// All abbreviations of a kind for a culture, in unit order, without duplicates
pub fn all_abbreviations(kind: Kind, culture: Culture) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for unit in kind.units() {
        for abbrev in unit.abbreviations(culture) {
            if !out.contains(&abbrev) {
                out.push(abbrev);
            }
        }
    }
    out
}
