use time::{Date, Month};

/// Shift a date by whole calendar months, clamping the day-of-month to the
/// target month's length (Jan 31 − 1 month → Dec 31; Mar 31 − 1 month →
/// Feb 29 or Feb 28).
pub fn shift_months(date: Date, delta_months: i32) -> Date {
    let zero_based = date.year() * 12 + (date.month() as i32 - 1) + delta_months;
    let year = zero_based.div_euclid(12);
    let month = Month::try_from((zero_based.rem_euclid(12) + 1) as u8)
        .expect("month index is always 1..=12 after euclidean remainder");
    let day = date.day().min(time::util::days_in_year_month(year, month));

    Date::from_calendar_date(year, month, day)
        .expect("clamped day is always valid for the target month")
}

/// Shift a date by whole calendar years, clamping Feb 29 on non-leap targets.
pub fn shift_years(date: Date, delta_years: i32) -> Date {
    shift_months(date, delta_years * 12)
}
