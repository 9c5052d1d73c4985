//! Reference country resolver.
//!
//! Canonical country records come from a compiled-in ISO 3166-1 table
//! ([`catalog::COUNTRIES`]). Historical or non-standard names found in the
//! laureate dataset are first translated through a fixed alias map.
//!
//! Lookups by code and by name deliberately differ on a miss:
//! [`CountryResolver::resolve_code`] yields `None`, while
//! [`CountryResolver::lookup_name`] hands the original input back as
//! [`NameLookup::Unresolved`]. Callers that must never store a raw string use
//! [`CountryResolver::resolve_name`].

mod catalog;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub use catalog::COUNTRIES;

/// Canonical country record: standard name plus alpha-2/alpha-3 codes.
///
/// Deserialization only accepts a triple that matches a table entry exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CountryTriple")]
pub struct Country {
    pub name: Cow<'static, str>,
    pub alpha_2: Cow<'static, str>,
    pub alpha_3: Cow<'static, str>,
}

impl Country {
    #[must_use]
    pub const fn new(name: &'static str, alpha_2: &'static str, alpha_3: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            alpha_2: Cow::Borrowed(alpha_2),
            alpha_3: Cow::Borrowed(alpha_3),
        }
    }
}

/// Wire shape of a [`Country`] before it is checked against the table.
#[derive(Deserialize)]
struct CountryTriple {
    name: String,
    alpha_2: String,
    alpha_3: String,
}

impl TryFrom<CountryTriple> for Country {
    type Error = CoreError;

    fn try_from(triple: CountryTriple) -> Result<Self, Self::Error> {
        CountryResolver::global()
            .resolve_code(&triple.alpha_2)
            .filter(|country| *country.name == *triple.name && *country.alpha_3 == *triple.alpha_3)
            .cloned()
            .ok_or_else(|| {
                CoreError::InvalidInput(format!(
                    "not a known country: {} ({}/{})",
                    triple.name, triple.alpha_2, triple.alpha_3
                ))
            })
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.alpha_2)
    }
}

/// Historical and non-standard names mapped to their canonical table name.
pub const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("the Netherlands", "Netherlands"),
    ("USSR (now Russia)", "Russian Federation"),
    ("Czechoslovakia (now Czech Republic)", "Czechia"),
    ("Russia", "Russian Federation"),
    ("Germany (now France)", "France"),
    ("USA", "United States"),
];

/// Apply the alias map. Names without an alias are returned unchanged.
#[must_use]
pub fn apply_alias(name: &str) -> &str {
    COUNTRY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |&(_, canonical)| canonical)
}

/// Outcome of a by-name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameLookup {
    /// The name (after aliasing) matched a table entry.
    Found(&'static Country),
    /// No match; carries the caller's input unchanged.
    Unresolved(String),
}

impl NameLookup {
    #[must_use]
    pub const fn country(&self) -> Option<&'static Country> {
        match *self {
            Self::Found(country) => Some(country),
            Self::Unresolved(_) => None,
        }
    }
}

/// Indexed view over [`COUNTRIES`].
#[derive(Debug)]
pub struct CountryResolver {
    by_alpha_2: HashMap<String, &'static Country>,
    by_alpha_3: HashMap<String, &'static Country>,
    by_name: HashMap<String, &'static Country>,
}

impl CountryResolver {
    fn build() -> Self {
        let mut by_alpha_2 = HashMap::with_capacity(COUNTRIES.len());
        let mut by_alpha_3 = HashMap::with_capacity(COUNTRIES.len());
        let mut by_name = HashMap::with_capacity(COUNTRIES.len());
        for country in COUNTRIES {
            by_alpha_2.insert(country.alpha_2.to_ascii_uppercase(), country);
            by_alpha_3.insert(country.alpha_3.to_ascii_uppercase(), country);
            by_name.insert(country.name.to_lowercase(), country);
        }
        Self { by_alpha_2, by_alpha_3, by_name }
    }

    /// Process-wide resolver, built on first use.
    pub fn global() -> &'static Self {
        static INSTANCE: OnceLock<CountryResolver> = OnceLock::new();
        INSTANCE.get_or_init(Self::build)
    }

    /// Resolve an ISO alpha-2 code. Empty input is not a miss and is not logged.
    #[must_use]
    pub fn resolve_code(&self, code: &str) -> Option<&'static Country> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        let found = self.by_alpha_2.get(&code.to_ascii_uppercase()).copied();
        if found.is_none() {
            tracing::warn!(code, "alpha-2 country code not found");
        }
        found
    }

    /// Resolve an ISO alpha-3 code.
    #[must_use]
    pub fn resolve_alpha3(&self, code: &str) -> Option<&'static Country> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        let found = self.by_alpha_3.get(&code.to_ascii_uppercase()).copied();
        if found.is_none() {
            tracing::warn!(code, "alpha-3 country code not found");
        }
        found
    }

    /// Look a country up by name after applying the alias map.
    ///
    /// Returns `None` for an empty name, otherwise either the canonical record
    /// or the original input unchanged.
    #[must_use]
    pub fn lookup_name(&self, name: &str) -> Option<NameLookup> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        let canonical = apply_alias(trimmed);
        if canonical != trimmed {
            tracing::debug!(from = trimmed, to = canonical, "country alias applied");
        }
        match self.by_name.get(&canonical.to_lowercase()).copied() {
            Some(country) => Some(NameLookup::Found(country)),
            None => {
                tracing::warn!(name, "country name not found");
                Some(NameLookup::Unresolved(name.to_owned()))
            },
        }
    }

    /// Canonical-only form of [`Self::lookup_name`]: a miss becomes `None`.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> Option<&'static Country> {
        self.lookup_name(name).and_then(|lookup| lookup.country())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> &'static CountryResolver {
        CountryResolver::global()
    }

    #[test]
    fn usa_alias_resolves_to_united_states() {
        let country = resolver().resolve_name("USA").unwrap();
        assert_eq!(country.name, "United States");
        assert_eq!(country.alpha_2, "US");
        assert_eq!(country.alpha_3, "USA");
    }

    #[test]
    fn historical_names_follow_alias_map() {
        assert_eq!(resolver().resolve_name("USSR (now Russia)").unwrap().alpha_2, "RU");
        assert_eq!(
            resolver().resolve_name("Czechoslovakia (now Czech Republic)").unwrap().alpha_2,
            "CZ"
        );
        assert_eq!(resolver().resolve_name("the Netherlands").unwrap().alpha_2, "NL");
        assert_eq!(resolver().resolve_name("Germany (now France)").unwrap().alpha_2, "FR");
    }

    #[test]
    fn code_lookup_is_case_insensitive() {
        assert_eq!(resolver().resolve_code("jm").unwrap().name, "Jamaica");
        assert_eq!(resolver().resolve_code(" US ").unwrap().name, "United States");
    }

    #[test]
    fn code_miss_returns_none() {
        assert!(resolver().resolve_code("XX").is_none());
        assert!(resolver().resolve_code("").is_none());
    }

    #[test]
    fn name_miss_returns_original_input() {
        let lookup = resolver().lookup_name("Prussia (now Germany)").unwrap();
        assert_eq!(lookup, NameLookup::Unresolved("Prussia (now Germany)".to_owned()));
        assert!(resolver().resolve_name("Prussia (now Germany)").is_none());
    }

    #[test]
    fn empty_name_is_none() {
        assert!(resolver().lookup_name("").is_none());
        assert!(resolver().lookup_name("   ").is_none());
    }

    #[test]
    fn alpha3_lookup() {
        assert_eq!(resolver().resolve_alpha3("JAM").unwrap().alpha_2, "JM");
    }

    #[test]
    fn table_codes_are_unique() {
        let mut alpha_2: Vec<_> = COUNTRIES.iter().map(|c| c.alpha_2.as_ref()).collect();
        alpha_2.sort_unstable();
        alpha_2.dedup();
        assert_eq!(alpha_2.len(), COUNTRIES.len());
    }

    #[test]
    fn country_deserializes_only_table_entries() {
        let jamaica: Country = serde_json::from_value(
            serde_json::json!({"name": "Jamaica", "alpha_2": "JM", "alpha_3": "JAM"}),
        )
        .unwrap();
        assert_eq!(&jamaica, resolver().resolve_code("JM").unwrap());

        for bogus in [
            serde_json::json!({"name": "USA", "alpha_2": "XX", "alpha_3": "USA"}),
            serde_json::json!({"name": "USA", "alpha_2": "US", "alpha_3": "USA"}),
            serde_json::json!({"name": "Jamaica", "alpha_2": "JM", "alpha_3": "JMC"}),
        ] {
            assert!(serde_json::from_value::<Country>(bogus).is_err());
        }
    }

    #[test]
    fn country_serializes_flat() {
        let json = serde_json::to_value(resolver().resolve_code("JM").unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Jamaica", "alpha_2": "JM", "alpha_3": "JAM"})
        );
    }
}
