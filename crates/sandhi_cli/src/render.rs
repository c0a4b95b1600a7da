//! Plain-text output for each subcommand.

use sandhi_rs::{
    ForecastRecord, HoraInfo, Interval, Locale, LunisolarDay, Muhurta, Named, NumerologyProfile,
    RitualDay, day_meaning,
};

pub fn numerology(date: &str, p: &NumerologyProfile, locale: Locale) {
    println!("Numerology for {date}");
    println!("  Life path:       {}", p.life_path);
    println!("  Personal year:   {}", p.personal_year);
    println!("  Personal month:  {}", p.personal_month);
    println!("  Personal week:   {}", p.personal_week);
    println!("  Universal day:   {}", p.universal_day);
    match day_meaning(p.daily_vibration, locale) {
        Some(m) => println!("  Daily vibration: {} - {m}", p.daily_vibration),
        None => println!("  Daily vibration: {}", p.daily_vibration),
    }
}

pub fn ritual(day: &RitualDay, locale: Locale) {
    let Some(p) = day.position() else {
        println!("{}: {} (0.0)", day.date(), day.title(locale));
        return;
    };
    let kin = &p.kin;
    println!("{}: Kin {} - {}", p.date, kin.kin, kin.full_title(locale));
    println!(
        "  Seal:  {} ({}) - {}, {}, {}",
        kin.seal.name(locale),
        kin.seal.mayan_name(),
        kin.seal.action(locale),
        kin.seal.power(locale),
        kin.seal.essence(locale)
    );
    println!(
        "  Tone:  {} {} - {}",
        kin.tone.number(),
        kin.tone.name(locale),
        kin.tone.question(locale)
    );
    println!("  Moon:  {}", p.moon_day.label(locale));
    if let Some(moon) = p.moon_day.moon() {
        println!("         {} / {}", moon.totem(locale), moon.question(locale));
    }
    match &p.year_bearer {
        Some(b) => println!("  Year:  Kin {} - {}", b.kin, b.full_title(locale)),
        None => println!("  Year:  -"),
    }
}

pub fn lunisolar(day: &LunisolarDay, locale: Locale) {
    let t = &day.tithi;
    println!(
        "{}: {} ({}, lord {})",
        day.date,
        day.vara.name(locale),
        day.vara.day_name(locale),
        day.vara.lord().name(locale)
    );
    println!(
        "  Tithi:     {} {} ({}, {}, {:.2} deg in tithi)",
        t.id,
        t.tithi.name(locale),
        t.paksha.name(locale),
        t.group.name(locale),
        t.degrees_in_tithi
    );
    println!(
        "  Nakshatra: {} {} - Pada {} ({}, lord {})",
        day.nakshatra.number,
        day.nakshatra.nakshatra.name(locale),
        day.nakshatra.pada,
        day.nakshatra.nakshatra.deity(locale),
        day.nakshatra.nakshatra.ruler().name(locale)
    );
    println!(
        "  Yoga:      {} {}",
        day.yoga.number,
        day.yoga.yoga.name(locale)
    );
    println!(
        "  Karana:    {} ({})",
        day.karana.karana.name(locale),
        day.karana.position
    );
    println!(
        "  Sun {:.4} deg  Moon {:.4} deg (sidereal)",
        day.longitudes.sun_sidereal, day.longitudes.moon_sidereal
    );
}

fn interval(label: &str, i: &Interval) {
    println!(
        "  {label:<15}{} - {}",
        i.start.format("%H:%M:%S"),
        i.end.format("%H:%M:%S")
    );
}

pub fn muhurta(m: &Muhurta, hora: Option<&HoraInfo>, locale: Locale) {
    println!("Vara: {}", m.vara.name(locale));
    interval("Brahma:", &m.brahma_muhurta);
    interval("Rahu Kala:", &m.rahu_kala);
    interval("Yamaganda:", &m.yamaganda);
    interval("Gulika Kala:", &m.gulika_kala);
    interval("Abhijit:", &m.abhijit);
    if let Some(h) = hora {
        println!(
            "Hora {} of {}: {}",
            h.index + 1,
            h.vara.name(locale),
            h.lord.name(locale)
        );
        interval("", &h.interval);
    }
}

pub fn forecast(records: &[ForecastRecord], locale: Locale) {
    for r in records {
        println!(
            "{}  {:<9} {:>+3}  {}",
            r.date,
            r.status.name(locale).text,
            r.score,
            r.summary
        );
        for note in r.notes.iter().skip(2) {
            println!("{:26}{note}", "");
        }
    }
    if records.iter().any(|r| r.locale_fallback) {
        log::info!("some text had no {} translation", locale.tag());
    }
}
