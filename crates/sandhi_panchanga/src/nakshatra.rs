//! Nakshatra (lunar mansion) of the Moon's sidereal longitude.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg), each with 4 padas of 3 deg 20'.

use serde::Serialize;

use sandhi_locale::{Locale, Localized, Named, resolve};

use crate::graha::Graha;
use crate::util::{en_ru, normalize_360};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

// [name, deity] x [en, ru]
#[rustfmt::skip]
const NAKSHATRA_TABLE: [[[&str; 2]; 2]; 27] = [
    [["Ashwini", "Ашвини"], ["Ashvins", "Ашвины"]],
    [["Bharani", "Бхарани"], ["Yama", "Яма"]],
    [["Krittika", "Криттика"], ["Agni", "Агни"]],
    [["Rohini", "Рохини"], ["Prajapati", "Праджапати"]],
    [["Mrigashira", "Мригашира"], ["Soma", "Сома"]],
    [["Ardra", "Ардра"], ["Rudra", "Рудра"]],
    [["Punarvasu", "Пунарвасу"], ["Aditi", "Адити"]],
    [["Pushya", "Пушья"], ["Brihaspati", "Брихаспати"]],
    [["Ashlesha", "Ашлеша"], ["Nagas", "Наги"]],
    [["Magha", "Магха"], ["Pitris", "Питри"]],
    [["Purva Phalguni", "Пурва Пхалгуни"], ["Bhaga", "Бхага"]],
    [["Uttara Phalguni", "Уттара Пхалгуни"], ["Aryaman", "Арьяман"]],
    [["Hasta", "Хаста"], ["Savitr", "Савитар"]],
    [["Chitra", "Читра"], ["Vishvakarma", "Вишвакарма"]],
    [["Swati", "Свати"], ["Vayu", "Ваю"]],
    [["Vishakha", "Вишакха"], ["Indragni", "Индра-Агни"]],
    [["Anuradha", "Анурадха"], ["Mitra", "Митра"]],
    [["Jyeshtha", "Джьештха"], ["Indra", "Индра"]],
    [["Mula", "Мула"], ["Nirriti", "Ниррити"]],
    [["Purva Ashadha", "Пурва Ашадха"], ["Apas", "Апас"]],
    [["Uttara Ashadha", "Уттара Ашадха"], ["Vishvadevas", "Вишвадевы"]],
    [["Shravana", "Шравана"], ["Vishnu", "Вишну"]],
    [["Dhanishtha", "Дхаништха"], ["Vasus", "Васу"]],
    [["Shatabhisha", "Шатабхиша"], ["Varuna", "Варуна"]],
    [["Purva Bhadrapada", "Пурва Бхадрапада"], ["Aja Ekapada", "Аджа Экапада"]],
    [["Uttara Bhadrapada", "Уттара Бхадрапада"], ["Ahir Budhnya", "Ахирбудхнья"]],
    [["Revati", "Ревати"], ["Pushan", "Пушан"]],
];

/// Vimshottari lords, repeating every 9 nakshatras from Ashwini.
const RULER_CYCLE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

impl Nakshatra {
    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Ashwini=1 .. Revati=27).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Vimshottari ruling graha.
    pub const fn ruler(self) -> Graha {
        RULER_CYCLE[(self.index() % 9) as usize]
    }

    /// Presiding deity.
    pub fn deity(self, locale: Locale) -> Localized {
        let row = &NAKSHATRA_TABLE[self.index() as usize][1];
        resolve("nakshatra deity", locale, |l| en_ru(row, l))
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

impl Named for Nakshatra {
    const CONCEPT: &'static str = "nakshatra";

    fn name_in(&self, locale: Locale) -> Option<&'static str> {
        en_ru(&NAKSHATRA_TABLE[self.index() as usize][0], locale)
    }
}

/// Result of nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 1-based number (1 = Ashwini).
    pub number: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Nakshatra and pada from sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - f64::from(nak_idx) * NAKSHATRA_SPAN_27;
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
    let nakshatra = ALL_NAKSHATRAS[nak_idx as usize];
    NakshatraInfo {
        nakshatra,
        number: nakshatra.number(),
        pada,
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_27_count() {
        assert_eq!(ALL_NAKSHATRAS.len(), 27);
    }

    #[test]
    fn nakshatra_indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn nakshatra_at_zero() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.number, 1);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn nakshatra_boundary() {
        let info = nakshatra_from_longitude(NAKSHATRA_SPAN_27);
        assert_eq!(info.nakshatra, Nakshatra::Bharani);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn nakshatra_end_of_zodiac() {
        let info = nakshatra_from_longitude(359.99);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.number, 27);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn nakshatra_rohini() {
        // 45 deg falls in Rohini (40.0 - 53.333)
        let info = nakshatra_from_longitude(45.0);
        assert_eq!(info.nakshatra, Nakshatra::Rohini);
        assert_eq!(info.pada, 2);
    }

    #[test]
    fn rulers_cycle() {
        assert_eq!(Nakshatra::Ashwini.ruler(), Graha::Ketu);
        assert_eq!(Nakshatra::Magha.ruler(), Graha::Ketu);
        assert_eq!(Nakshatra::Mula.ruler(), Graha::Ketu);
        assert_eq!(Nakshatra::Rohini.ruler(), Graha::Chandra);
        assert_eq!(Nakshatra::Revati.ruler(), Graha::Buddh);
    }

    #[test]
    fn names_and_deities() {
        assert_eq!(Nakshatra::PurvaPhalguni.name(Locale::En).text, "Purva Phalguni");
        assert_eq!(Nakshatra::Swati.name(Locale::Ru).text, "Свати");
        assert_eq!(Nakshatra::Revati.deity(Locale::En).text, "Pushan");
    }
}
