//! Shared angle and table helpers.

use sandhi_locale::Locale;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Entry of an (en, ru) name-table row for `locale`.
pub(crate) fn en_ru(row: &[&'static str; 2], locale: Locale) -> Option<&'static str> {
    match locale {
        Locale::En => Some(row[0]),
        Locale::Ru => Some(row[1]),
        Locale::He => None,
    }
}

/// Sine of an angle given in degrees.
pub(crate) fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}
