use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use anyhow::{anyhow, Result};

pub const WEEK_ID_FORMAT: &str = "%Y-%m-%d";

/// Monday on or before `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    // Mon=1 .. Sun=7, so Sunday belongs to the week that started six days earlier.
    date - Duration::days(weekday_index_of(date) as i64 - 1)
}

/// Same as [`week_start_of`] for a timestamp; the time of day is dropped first.
pub fn week_start_of_datetime(dt: NaiveDateTime) -> NaiveDate {
    week_start_of(dt.date())
}

/// Mon=1 .. Sun=7.
pub fn weekday_index_of(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// Index of a weekday name as written in a schedule row ("Monday", "mon").
pub fn weekday_index_of_name(name: &str) -> Option<u32> {
    parse_weekday_str(name.trim()).ok().map(|w| w.number_from_monday())
}

pub fn format_week_id(monday: NaiveDate) -> String {
    monday.format(WEEK_ID_FORMAT).to_string()
}

/// Week identifier for whatever week `date` falls in.
pub fn week_id_of(date: NaiveDate) -> String {
    format_week_id(week_start_of(date))
}

/// Reads a stored week identifier back into a date. Full RFC 3339 timestamps are
/// accepted too; only their calendar date is kept.
pub fn parse_week_id(week_id: &str) -> Option<NaiveDate> {
    let week_id = week_id.trim();
    if let Ok(d) = NaiveDate::parse_from_str(week_id, WEEK_ID_FORMAT) {
        return Some(d);
    }
    DateTime::parse_from_rfc3339(week_id)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Resolves a day given on the command line relative to `today`.
pub fn parse_day(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yes" => return Ok(today - Duration::days(1)),
        "tomorrow" | "tom" => return Ok(today + Duration::days(1)),
        _ => {}
    }

    // 2. Relative format (+Nd, -Nw)
    if input.starts_with('+') || input.starts_with('-') {
        let unit_at = match input.char_indices().last() {
            Some((i, _)) if i >= 2 => i,
            _ => return Err(anyhow!("Invalid relative format: {}", input)),
        };
        let (num_str, unit) = input.split_at(unit_at);
        let count: i64 = num_str.parse().map_err(|_| anyhow!("Invalid relative format: {}", input))?;

        return match unit.to_lowercase().as_str() {
            "d" => Ok(today + Duration::days(count)),
            "w" => Ok(today + Duration::weeks(count)),
            _ => Err(anyhow!("Unknown unit in relative time: {}", unit)),
        };
    }

    // 3. Weekday name: that day within the current week
    if let Ok(weekday) = parse_weekday_str(input) {
        return Ok(week_start_of(today) + Duration::days(weekday.num_days_from_monday() as i64));
    }

    // 4. Fallback to ISO date
    NaiveDate::parse_from_str(input, WEEK_ID_FORMAT)
        .map_err(|_| anyhow!("Could not parse date: {}", input))
}

pub fn parse_weekday_str(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(anyhow!("Invalid weekday: {}", s)),
    }
}
