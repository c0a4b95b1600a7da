//! Error types for locale handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::Locale;

/// Errors from locale tag parsing or strict display-text lookup.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LocaleError {
    /// Language tag not recognised.
    UnknownTag(String),
    /// Recognised locale, but the concept has no text for it.
    Miss {
        concept: &'static str,
        locale: Locale,
    },
}

impl Display for LocaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTag(tag) => write!(f, "unknown locale tag: {tag}"),
            Self::Miss { concept, locale } => {
                write!(f, "no {} text for {concept}", locale.tag())
            }
        }
    }
}

impl Error for LocaleError {}
