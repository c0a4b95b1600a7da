use sandhi_locale::Locale;
use sandhi_numerology::{
    MASTER_NUMBERS, daily_vibration, day_meaning, is_master, life_path, profile, reduce,
    reduce_master,
};
use sandhi_time::CalendarDate;

fn d(y: i32, m: u32, day: u32) -> CalendarDate {
    CalendarDate::new(y, m, day).unwrap()
}

#[test]
fn master_short_circuit_on_intermediate_sums() {
    assert_eq!(reduce_master(29), 11);
    assert_eq!(reduce_master(38), 11);
    assert_eq!(reduce_master(2299), 22);
    assert_eq!(reduce(38, false), 2);
}

#[test]
fn reduce_is_idempotent() {
    for n in 0..5000 {
        let once = reduce_master(n);
        assert_eq!(reduce_master(once), once, "n = {n}");
        assert!(once <= 9 || is_master(once));
    }
}

#[test]
fn life_paths() {
    // 7 + (1+5) + (1+9+8+5 = 23 -> 5) = 18 -> 9
    assert_eq!(life_path(d(1985, 7, 15)), 9);
    // 11 + (2+9 = 11) + (1+9+9+0 = 19 -> 10 -> 1) = 23 -> 5
    assert_eq!(life_path(d(1990, 11, 29)), 5);
}

#[test]
fn daily_values_over_a_year_are_in_range() {
    let birth = d(1985, 7, 15);
    let mut date = d(2026, 1, 1);
    for _ in 0..365 {
        let v = daily_vibration(birth, date);
        assert!((1..=9).contains(&v) || MASTER_NUMBERS.contains(&v), "{date}: {v}");
        assert!(day_meaning(v, Locale::En).is_some());
        date = date.succ().unwrap();
    }
}

#[test]
fn meanings_are_localized() {
    assert_eq!(
        day_meaning(9, Locale::Ru).unwrap().text,
        "День завершения, очищения и благотворительности. Отпустите старое."
    );
    assert_eq!(
        day_meaning(22, Locale::En).unwrap().text,
        "Master day of high energy."
    );
    assert!(day_meaning(0, Locale::En).is_none());
}

#[test]
fn profile_serializes() {
    let p = profile(d(1985, 7, 15), d(2026, 1, 10));
    let v = serde_json::to_value(p).unwrap();
    assert_eq!(v["daily_vibration"], 7);
    assert_eq!(v["life_path"], 9);
}
