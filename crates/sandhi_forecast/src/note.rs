//! Forecast notes and their localized templates.

use serde::Serialize;

use sandhi_locale::{Locale, Localized, Named, resolve};
use sandhi_panchanga::{Tithi, Yoga};

/// A rule outcome that carries a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Note {
    /// Rikta tithi or new moon.
    CriticalTithi { tithi: Tithi },
    InauspiciousYoga { yoga: Yoga },
    /// Tone 13.
    CosmicTone,
    /// Tone 1.
    MagneticTone,
    MasterNumber { number: u32 },
    /// Daily value 9.
    CleansingDay,
    /// Daily value 1.
    StartDay,
}

// en, ru, he
#[rustfmt::skip]
const NOTE_TEMPLATES: [[&str; 3]; 7] = [
    ["⚠️ Tithi {name}: Energy of empty hands or completion.",
     "⚠️ Титхи {name}: Энергия пустых рук или завершения.",
     "⚠️ טיטהי {name}: אנרגיה של ידיים ריקות או סיום."],
    ["🌪️ Yoga {name}: Obstacles possible.",
     "🌪️ Йога {name}: Возможны препятствия.",
     "🌪️ יוגה {name}: ייתכנו מכשולים."],
    ["🏁 Mayan Tone 13: Cosmic completion and flight.",
     "🏁 Майя Тон 13: Космическое завершение и полёт.",
     "🏁 טון מאיה 13: סיום קוסמי ותעופה."],
    ["🌱 Mayan Tone 1: Magnetic purpose, new beginning.",
     "🌱 Майя Тон 1: Магнитная цель, начало нового.",
     "🌱 טון מאיה 1: מטרה מגנטית, התחלה חדשה."],
    ["⚡ Numerology {number}: Master number calls for greatness.",
     "⚡ Нумерология {number}: Мастер-число призывает к великому.",
     "⚡ נומרולוגיה {number}: מספר מאסטר קורא לגדולה."],
    ["🧹 Cleansing Day (9).",
     "🧹 День очищения (9).",
     "🧹 יום טיהור (9)."],
    ["🚀 Start Day (1).",
     "🚀 День старта (1).",
     "🚀 יום זינוק (1)."],
];

#[rustfmt::skip]
const NEUTRAL_SUMMARY: [&str; 3] = [
    "Day with steady, neutral energy. Good for current tasks.",
    "День с ровной, нейтральной энергией. Благоприятен для текущих задач.",
    "יום עם אנרגיה יציבה ונייטרלית. טוב למשימות שוטפות.",
];

const fn column(locale: Locale) -> usize {
    match locale {
        Locale::En => 0,
        Locale::Ru => 1,
        Locale::He => 2,
    }
}

/// Rendered display text and whether any part of it fell back to the
/// default locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedText {
    pub text: String,
    pub fallback: bool,
}

impl From<Localized> for RenderedText {
    fn from(l: Localized) -> Self {
        Self {
            text: l.text.to_string(),
            fallback: l.is_fallback(),
        }
    }
}

impl Note {
    const fn row(self) -> usize {
        match self {
            Self::CriticalTithi { .. } => 0,
            Self::InauspiciousYoga { .. } => 1,
            Self::CosmicTone => 2,
            Self::MagneticTone => 3,
            Self::MasterNumber { .. } => 4,
            Self::CleansingDay => 5,
            Self::StartDay => 6,
        }
    }

    /// Unfilled template for `locale`.
    pub fn template(self, locale: Locale) -> Localized {
        let row = &NOTE_TEMPLATES[self.row()];
        resolve("forecast note", locale, |l| Some(row[column(l)]))
    }

    /// Template with its placeholder filled. Tithi and yoga names are
    /// taken in the same locale and may fall back on their own.
    pub fn render(self, locale: Locale) -> RenderedText {
        let template = self.template(locale);
        let (text, name_fallback) = match self {
            Self::CriticalTithi { tithi } => {
                let name = tithi.name(locale);
                (template.text.replace("{name}", name.text), name.is_fallback())
            }
            Self::InauspiciousYoga { yoga } => {
                let name = yoga.name(locale);
                (template.text.replace("{name}", name.text), name.is_fallback())
            }
            Self::MasterNumber { number } => (
                template.text.replace("{number}", &number.to_string()),
                false,
            ),
            _ => (template.text.to_string(), false),
        };
        RenderedText {
            text,
            fallback: template.is_fallback() || name_fallback,
        }
    }
}

/// Sentence used as the summary of a day with no notes.
pub fn neutral_summary(locale: Locale) -> Localized {
    resolve("neutral summary", locale, |l| Some(NEUTRAL_SUMMARY[column(l)]))
}
