//! Date parsing for the registration and expiry columns
//!
//! The fleet sheets carry dates in two hand-typed shapes, `Aug-24` and
//! `04-Jul-25`, alongside cells Excel already stores as native dates.
//! Anything else degrades to `None` with a diagnostic; a bad date never
//! fails the import.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::excel::CellValue;

/// Parse a date cell into a timestamp.
///
/// Native date cells pass through unchanged, text cells go through the
/// two-shape parser, and everything else (numbers, booleans) is dropped
/// silently the way blank cells are.
pub fn parse_date_cell(cell: &CellValue) -> Option<NaiveDateTime> {
    match cell {
        CellValue::Null => None,
        CellValue::DateTime(dt) => Some(*dt),
        CellValue::Text(raw) => parse_date_text(raw),
        other => {
            log::debug!("Ignoring non-date cell value: {}", other.to_text());
            None
        }
    }
}

/// Parse a hand-typed date, recognizing `Mon-YY` (first of the month) and
/// `DD-Mon-YY`. Unrecognized shapes log a warning and yield `None`.
pub fn parse_date_text(raw: &str) -> Option<NaiveDateTime> {
    let text = raw.trim();

    if text.chars().count() == 6
        && text.contains('-')
        && text.chars().next().is_some_and(char::is_alphabetic)
    {
        return parse_month_year(text);
    }

    if text.chars().count() == 8
        && text.contains('-')
        && text.chars().next().is_some_and(|c| c.is_ascii_digit())
    {
        return parse_day_month_year(text);
    }

    log::warn!("Could not parse date format: '{}'", text);
    None
}

/// `Mon-YY`, e.g. `Aug-24` -> 2024-08-01 00:00:00.
fn parse_month_year(text: &str) -> Option<NaiveDateTime> {
    let parts: Vec<&str> = text.split('-').collect();
    let [month, year] = parts[..] else {
        log::warn!("Error parsing date '{}': expected month-year", text);
        return None;
    };

    let Some(year) = expand_year(year) else {
        log::warn!("Error parsing date '{}': invalid year fragment", text);
        return None;
    };

    let Some(date) = NaiveDate::from_ymd_opt(year, month_number(month), 1) else {
        log::warn!("Error parsing date '{}': date out of range", text);
        return None;
    };

    let parsed = date.and_time(NaiveTime::MIN);
    log::debug!("Parsed '{}' as {}", text, parsed);
    Some(parsed)
}

/// `DD-Mon-YY`, e.g. `04-Jul-25` -> 2025-07-04 00:00:00.
fn parse_day_month_year(text: &str) -> Option<NaiveDateTime> {
    let parts: Vec<&str> = text.split('-').collect();
    let [day, month, year] = parts[..] else {
        log::warn!("Error parsing date '{}': expected day-month-year", text);
        return None;
    };

    let Ok(day) = day.trim().parse::<u32>() else {
        log::warn!("Error parsing date '{}': invalid day fragment", text);
        return None;
    };

    let Some(year) = expand_year(year) else {
        log::warn!("Error parsing date '{}': invalid year fragment", text);
        return None;
    };

    let Some(date) = NaiveDate::from_ymd_opt(year, month_number(month), day) else {
        log::warn!("Error parsing date '{}': no such calendar day", text);
        return None;
    };

    let parsed = date.and_time(NaiveTime::MIN);
    log::debug!("Parsed '{}' as {}", text, parsed);
    Some(parsed)
}

/// Expand a two-digit year: 00-49 land in the 2000s, 50-99 in the 1900s.
fn expand_year(fragment: &str) -> Option<i32> {
    let year: i32 = fragment.trim().parse().ok()?;
    Some(if year < 50 { 2000 + year } else { 1900 + year })
}

/// Month abbreviation lookup, case sensitive. Unknown abbreviations fall
/// back to January rather than failing the row.
fn month_number(abbrev: &str) -> u32 {
    match abbrev {
        "Jan" => 1,
        "Feb" => 2,
        "Mar" => 3,
        "Apr" => 4,
        "May" => 5,
        "Jun" => 6,
        "Jul" => 7,
        "Aug" => 8,
        "Sep" => 9,
        "Oct" => 10,
        "Nov" => 11,
        "Dec" => 12,
        _ => 1,
    }
}
