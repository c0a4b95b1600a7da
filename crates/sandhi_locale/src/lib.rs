//! Locale tags and `(concept, locale) -> text` resolution.
//!
//! Display names live in static tables next to the concepts they name.
//! This crate only decides which locale's entry is used:
//! - [`resolve`] falls back to [`DEFAULT_LOCALE`] and records that it did
//! - [`resolve_strict`] reports a [`LocaleError::Miss`] instead
//!
//! The default locale's tables are complete; a missing default entry is an
//! internal-consistency fault and panics.

pub mod error;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use error::LocaleError;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (complete tables).
    #[default]
    En,
    /// Russian.
    Ru,
    /// Hebrew (forecast texts only).
    He,
}

/// Locale used when a requested locale has no entry.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// All locales in tag order.
pub const ALL_LOCALES: [Locale; 3] = [Locale::En, Locale::Ru, Locale::He];

impl Locale {
    /// Two-letter language tag.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::He => "he",
        }
    }

    /// Parse a language tag. Only the primary subtag is considered, so
    /// `en-US` and `ru_RU` resolve to their language.
    pub fn from_tag(tag: &str) -> Result<Self, LocaleError> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        ALL_LOCALES
            .iter()
            .copied()
            .find(|l| l.tag() == primary)
            .ok_or_else(|| LocaleError::UnknownTag(tag.to_string()))
    }

    pub const fn all() -> &'static [Locale; 3] {
        &ALL_LOCALES
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Display text resolved for a requested locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized {
    /// The text.
    pub text: &'static str,
    /// Locale the caller asked for.
    pub requested: Locale,
    /// Locale whose table supplied `text`.
    pub resolved: Locale,
}

impl Localized {
    /// True when the requested locale had no entry and the default was used.
    pub fn is_fallback(&self) -> bool {
        self.requested != self.resolved
    }
}

impl Display for Localized {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

/// Look up `concept` text for `requested`, falling back to the default locale.
///
/// # Panics
/// If the default locale has no entry: tables are static and the default
/// table is complete by construction.
pub fn resolve<F>(concept: &'static str, requested: Locale, lookup: F) -> Localized
where
    F: Fn(Locale) -> Option<&'static str>,
{
    if let Some(text) = lookup(requested) {
        return Localized {
            text,
            requested,
            resolved: requested,
        };
    }
    log::debug!(
        "no {} text for {concept}, falling back to {}",
        requested.tag(),
        DEFAULT_LOCALE.tag()
    );
    let text = lookup(DEFAULT_LOCALE)
        .unwrap_or_else(|| panic!("default locale table has no entry for {concept}"));
    Localized {
        text,
        requested,
        resolved: DEFAULT_LOCALE,
    }
}

/// Look up `concept` text for exactly `locale`, without fallback.
pub fn resolve_strict<F>(
    concept: &'static str,
    locale: Locale,
    lookup: F,
) -> Result<&'static str, LocaleError>
where
    F: Fn(Locale) -> Option<&'static str>,
{
    lookup(locale).ok_or(LocaleError::Miss { concept, locale })
}

/// A concept whose display name comes from a per-locale table.
pub trait Named {
    /// Concept label used in diagnostics ("seal", "tithi", ...).
    const CONCEPT: &'static str;

    /// Table entry for `locale`, if the table has one.
    fn name_in(&self, locale: Locale) -> Option<&'static str>;

    /// Name in `locale`, falling back to the default locale.
    fn name(&self, locale: Locale) -> Localized {
        resolve(Self::CONCEPT, locale, |l| self.name_in(l))
    }

    /// Name in exactly `locale`.
    fn name_strict(&self, locale: Locale) -> Result<&'static str, LocaleError> {
        resolve_strict(Self::CONCEPT, locale, |l| self.name_in(l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Colour;

    impl Named for Colour {
        const CONCEPT: &'static str = "colour";

        fn name_in(&self, locale: Locale) -> Option<&'static str> {
            match locale {
                Locale::En => Some("Red"),
                Locale::Ru => Some("Красный"),
                Locale::He => None,
            }
        }
    }

    #[test]
    fn tag_round_trip() {
        for l in ALL_LOCALES {
            assert_eq!(Locale::from_tag(l.tag()).unwrap(), l);
        }
    }

    #[test]
    fn region_subtag_ignored() {
        assert_eq!(Locale::from_tag("en-US").unwrap(), Locale::En);
        assert_eq!(Locale::from_tag("RU_ru").unwrap(), Locale::Ru);
    }

    #[test]
    fn unknown_tag_is_error() {
        assert_eq!(
            Locale::from_tag("xx"),
            Err(LocaleError::UnknownTag("xx".into()))
        );
    }

    #[test]
    fn exact_hit_is_not_fallback() {
        let n = Colour.name(Locale::Ru);
        assert_eq!(n.text, "Красный");
        assert!(!n.is_fallback());
    }

    #[test]
    fn miss_falls_back_to_default() {
        let n = Colour.name(Locale::He);
        assert_eq!(n.text, "Red");
        assert_eq!(n.resolved, DEFAULT_LOCALE);
        assert!(n.is_fallback());
    }

    #[test]
    fn strict_miss_is_error() {
        assert_eq!(
            Colour.name_strict(Locale::He),
            Err(LocaleError::Miss {
                concept: "colour",
                locale: Locale::He
            })
        );
        assert_eq!(Colour.name_strict(Locale::En), Ok("Red"));
    }

    #[test]
    #[should_panic(expected = "default locale table")]
    fn missing_default_panics() {
        resolve("broken", Locale::Ru, |_| None);
    }
}
