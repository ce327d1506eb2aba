//! Derived ages from ISO `yyyy-MM-dd` calendar dates.
//!
//! There is no timezone concept here: every input is a civil date and
//! "today" is supplied by the caller, which keeps these functions pure.

use std::fmt;

use jiff::civil::Date;

pub const DOB_MISSING: &str = "تاريخ ميلاد غير متوفر";
pub const DOB_INVALID: &str = "تاريخ ميلاد غير صالح";
pub const UNAVAILABLE: &str = "-";

/// Elapsed years, months and days between a birth date and a later date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} سنة، {} شهر، {} يوم",
            self.years, self.months, self.days
        )
    }
}

/// Elapsed whole years and months, used for parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearsMonths {
    pub years: i32,
    pub months: i32,
}

impl fmt::Display for YearsMonths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} سنة، {} شهر", self.years, self.months)
    }
}

/// Age on `today` of someone born on `dob`.
pub fn age(dob: Date, today: Date) -> Age {
    let YearsMonths { years, months } = age_at(today, dob);

    let today_day = i32::from(today.day());
    let dob_day = i32::from(dob.day());
    let days = if today_day < dob_day {
        // Borrow the month before today's month. A birth day past the end
        // of that month counts as its last day.
        let borrowed = days_in_previous_month(today);
        borrowed - dob_day.min(borrowed) + today_day
    } else {
        today_day - dob_day
    };

    Age {
        years,
        months,
        days,
    }
}

/// Age in years and months on `event` of someone born on `dob`.
///
/// With the child's birth date as `event`, this is a parent's age at the
/// child's birth.
pub fn age_at(event: Date, dob: Date) -> YearsMonths {
    let before_anniversary = (event.month(), event.day()) < (dob.month(), dob.day());
    let years =
        i32::from(event.year()) - i32::from(dob.year()) - i32::from(before_anniversary);

    let day_short = i32::from(event.day() < dob.day());
    let months = (i32::from(event.month()) - i32::from(dob.month()) - day_short).rem_euclid(12);

    YearsMonths { years, months }
}

fn days_in_previous_month(date: Date) -> i32 {
    date.first_of_month()
        .yesterday()
        .map(|d| i32::from(d.days_in_month()))
        .unwrap_or(31)
}

/// Classification of a stored date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    Missing,
    Invalid,
    Valid(Date),
}

impl DateInput {
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => DateInput::Missing,
            Some(s) => match parse_date(s) {
                Some(d) => DateInput::Valid(d),
                None => DateInput::Invalid,
            },
        }
    }

    pub fn date(self) -> Option<Date> {
        match self {
            DateInput::Valid(d) => Some(d),
            _ => None,
        }
    }
}

/// Parse a `yyyy-MM-dd` date. Month and day may omit their leading zero
/// (`2018-9-3`). Anything else yields `None`.
pub fn parse_date(raw: &str) -> Option<Date> {
    let mut parts = raw.trim().split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let digits = |s: &str, lens: std::ops::RangeInclusive<usize>| {
        lens.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(year, 4..=4) || !digits(month, 1..=2) || !digits(day, 1..=2) {
        return None;
    }
    Date::new(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?).ok()
}

/// Child age display text, e.g. `7 سنة، 0 شهر، 0 يوم`.
pub fn child_age_text(dob: Option<&str>, today: Date) -> String {
    match DateInput::classify(dob) {
        DateInput::Missing => DOB_MISSING.to_string(),
        DateInput::Invalid => DOB_INVALID.to_string(),
        DateInput::Valid(d) => age(d, today).to_string(),
    }
}

/// Parent age display text in years and months; `-` when no DOB is stored.
pub fn parent_age_text(dob: Option<&str>, today: Date) -> String {
    match DateInput::classify(dob) {
        DateInput::Missing => UNAVAILABLE.to_string(),
        DateInput::Invalid => DOB_INVALID.to_string(),
        DateInput::Valid(d) => age_at(today, d).to_string(),
    }
}

/// A parent's age when the child was born.
pub fn age_at_birth_text(child_dob: Option<&str>, parent_dob: Option<&str>) -> String {
    let child = DateInput::classify(child_dob);
    let parent = DateInput::classify(parent_dob);
    match (child, parent) {
        (DateInput::Valid(c), DateInput::Valid(p)) => age_at(c, p).to_string(),
        (DateInput::Missing, _) | (_, DateInput::Missing) => UNAVAILABLE.to_string(),
        _ => DOB_INVALID.to_string(),
    }
}

/// Whole years as a string, used as the exact-match age filter key.
pub fn age_years_text(dob: Option<&str>, today: Date) -> Option<String> {
    DateInput::classify(dob)
        .date()
        .map(|d| age(d, today).years.to_string())
}
