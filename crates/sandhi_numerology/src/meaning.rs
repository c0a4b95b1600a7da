//! Display meanings of daily numerology values.

use sandhi_locale::{Locale, Localized, resolve};

use crate::is_master;

#[rustfmt::skip]
const DAY_MEANINGS: [[&str; 3]; 9] = [
    // en, ru, he
    ["Day of beginnings, leadership and independence. Plant seeds.",
     "День начинаний, лидерства и независимости. Сейте семена.",
     "יום של התחלות, מנהיגות ועצמאות. תזרעו זרעים."],
    ["Day of cooperation, diplomacy and patience. Listen to others.",
     "День сотрудничества, дипломатии и терпения. Слушайте других.",
     "יום של שיתוף פעולה, דיפלומטיה וסבלנות. הקשיבו לאחרים."],
    ["Day of self-expression, communication and creativity. Be visible.",
     "День самовыражения, общения и творчества. Будьте заметны.",
     "יום של ביטוי עצמי, תקשורת ויצירתיות. היו בולטים."],
    ["Day of work, organization and order. Build a foundation.",
     "День труда, организации и наведения порядка. Стройте фундамент.",
     "יום של עבודה, ארגון וסדר. בנו יסודות."],
    ["Day of change, freedom and adventure. Be flexible.",
     "День перемен, свободы и приключений. Будьте гибки.",
     "יום של שינוי, חופש והרפתקאות. היו גמישים."],
    ["Day of responsibility, care and family. Harmonize your space.",
     "День ответственности, заботы и семьи. Гармонизируйте пространство.",
     "יום של אחריות, דאגה ומשפחה. הרמוניה במרחב."],
    ["Day of analysis, reflection and solitude. Seek the truth.",
     "День анализа, размышлений и уединения. Ищите истину.",
     "יום של ניתוח, הרהור והתבודדות. חפשו את האמת."],
    ["Day of power, finance and achievement. Manage resources.",
     "День силы, финансов и достижений. Управляйте ресурсами.",
     "יום של כוח, כספים והישגים. נהלו משאבים."],
    ["Day of completion, cleansing and charity. Let go of the old.",
     "День завершения, очищения и благотворительности. Отпустите старое.",
     "יום של סיום, טיהור וצדקה. שחררו את הישן."],
];

const MASTER_DAY: [&str; 3] = [
    "Master day of high energy.",
    "Мастер-день высокой энергии.",
    "יום מאסטר באנרגיה גבוהה.",
];

const fn column(locale: Locale) -> usize {
    match locale {
        Locale::En => 0,
        Locale::Ru => 1,
        Locale::He => 2,
    }
}

/// Meaning of a daily value: 1..9 have their own text, master numbers
/// share one. Returns `None` for 0 (no birth date) and other values that
/// `reduce` cannot produce.
pub fn day_meaning(value: u32, locale: Locale) -> Option<Localized> {
    let row: &[&'static str; 3] = match value {
        1..=9 => &DAY_MEANINGS[value as usize - 1],
        v if is_master(v) => &MASTER_DAY,
        _ => return None,
    };
    Some(resolve("numerology meaning", locale, |l| {
        Some(row[column(l)])
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reducible_value_has_meaning() {
        for v in (1..=9).chain([11, 22, 33]) {
            for l in Locale::all() {
                let m = day_meaning(v, *l).unwrap();
                assert!(!m.text.is_empty());
                assert!(!m.is_fallback());
            }
        }
    }

    #[test]
    fn masters_share_text() {
        let a = day_meaning(11, Locale::En).unwrap();
        let b = day_meaning(33, Locale::En).unwrap();
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn zero_has_no_meaning() {
        assert!(day_meaning(0, Locale::En).is_none());
        assert!(day_meaning(10, Locale::En).is_none());
    }

    #[test]
    fn nine_is_completion() {
        let m = day_meaning(9, Locale::En).unwrap();
        assert!(m.text.starts_with("Day of completion"));
    }
}
