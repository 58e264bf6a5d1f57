use time::{Date, Month};

use crate::ValidationError;

/// Builds a calendar date, rejecting impossible month/day combinations.
pub fn calendar_date(year: i32, month: u8, day: u8) -> Result<Date, ValidationError> {
    let invalid = || ValidationError::InvalidDate { year, month, day };
    let month = Month::try_from(month).map_err(|_| invalid())?;
    Date::from_calendar_date(year, month, day).map_err(|_| invalid())
}

/// Parses a `YYYY-MM-DD` date as used in request paths and query strings.
pub fn parse_iso_date(input: &str) -> Result<Date, ValidationError> {
    let format_error = || ValidationError::DateFormat {
        value: input.to_owned(),
    };

    let trimmed = input.trim();
    let mut parts = trimmed.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format_error());
    };

    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return Err(format_error());
    }

    let year = year.parse::<i32>().map_err(|_| format_error())?;
    let month = month.parse::<u8>().map_err(|_| format_error())?;
    let day = day.parse::<u8>().map_err(|_| format_error())?;

    calendar_date(year, month, day)
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
