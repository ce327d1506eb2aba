use jiff::civil::date;

use mycases_core::age::{
    self, Age, DOB_INVALID, DOB_MISSING, UNAVAILABLE, YearsMonths, age_at, age_at_birth_text,
    age_years_text, child_age_text, parent_age_text, parse_date,
};

#[test]
fn birthday_today_is_exact_years() {
    let a = age::age(date(2018, 9, 3), date(2025, 9, 3));
    assert_eq!(
        a,
        Age {
            years: 7,
            months: 0,
            days: 0
        }
    );
}

#[test]
fn same_day_is_zero() {
    let d = date(2020, 2, 29);
    assert_eq!(
        age::age(d, d),
        Age {
            years: 0,
            months: 0,
            days: 0
        }
    );
}

#[test]
fn day_before_birthday_borrows_previous_month() {
    // 2025-09-02 is one day short of the 7th birthday.
    let a = age::age(date(2018, 9, 3), date(2025, 9, 2));
    assert_eq!(a.years, 6);
    assert_eq!(a.months, 11);
    // August has 31 days: 31 - 3 + 2
    assert_eq!(a.days, 30);
}

#[test]
fn months_wrap_around_year_end() {
    let a = age::age(date(2019, 11, 15), date(2025, 2, 20));
    assert_eq!(a.years, 5);
    assert_eq!(a.months, 3);
    assert_eq!(a.days, 5);
}

#[test]
fn short_previous_month_never_goes_negative() {
    // February 2025 has 28 days, birth day is the 31st.
    let a = age::age(date(2025, 1, 31), date(2025, 3, 1));
    assert_eq!(a.years, 0);
    assert_eq!(a.months, 1);
    assert_eq!(a.days, 1);
}

#[test]
fn ages_are_non_negative_across_a_range() {
    let dob = date(2016, 1, 31);
    let mut today = dob;
    for _ in 0..(366 * 3) {
        let a = age::age(dob, today);
        assert!(a.years >= 0, "{today}: {a:?}");
        assert!((0..12).contains(&a.months), "{today}: {a:?}");
        assert!((0..31).contains(&a.days), "{today}: {a:?}");
        today = today.tomorrow().unwrap();
    }
}

#[test]
fn parent_age_at_birth() {
    let ym = age_at(date(2018, 9, 3), date(1988, 12, 1));
    assert_eq!(
        ym,
        YearsMonths {
            years: 29,
            months: 9
        }
    );
}

#[test]
fn display_strings() {
    let today = date(2025, 9, 3);
    assert_eq!(
        child_age_text(Some("2018-09-03"), today),
        "7 سنة، 0 شهر، 0 يوم"
    );
    assert_eq!(parent_age_text(Some("1990-03-03"), today), "35 سنة، 6 شهر");
    assert_eq!(
        age_at_birth_text(Some("2018-09-03"), Some("1990-03-03")),
        "28 سنة، 6 شهر"
    );
}

#[test]
fn missing_and_invalid_dates_use_placeholders() {
    let today = date(2025, 9, 3);
    assert_eq!(child_age_text(None, today), DOB_MISSING);
    assert_eq!(child_age_text(Some("  "), today), DOB_MISSING);
    assert_eq!(child_age_text(Some("2018-13-40"), today), DOB_INVALID);
    assert_eq!(child_age_text(Some("03/09/2018"), today), DOB_INVALID);
    assert_eq!(parent_age_text(None, today), UNAVAILABLE);
    assert_eq!(age_at_birth_text(None, Some("1990-01-01")), UNAVAILABLE);
    assert_eq!(age_at_birth_text(Some("2018-09-03"), Some("bad")), DOB_INVALID);
}

#[test]
fn unpadded_dates_are_accepted() {
    let today = date(2025, 9, 3);
    assert_eq!(parse_date("2018-9-3"), Some(date(2018, 9, 3)));
    assert_eq!(child_age_text(Some("2018-9-3"), today), "7 سنة، 0 شهر، 0 يوم");
    assert_eq!(parse_date("18-09-03"), None);
    assert_eq!(parse_date("2018-09-03-1"), None);
    assert_eq!(parse_date("2018-+9-03"), None);
    assert_eq!(parse_date("2018-02-30"), None);
}

#[test]
fn age_years_key() {
    let today = date(2025, 9, 3);
    assert_eq!(age_years_text(Some("2018-09-03"), today).as_deref(), Some("7"));
    assert_eq!(age_years_text(Some("nope"), today), None);
}
