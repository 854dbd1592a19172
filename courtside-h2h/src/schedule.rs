//! Selection of the day's fixtures from a chronological fixture list.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// The listing's time cell, e.g. `"17.10. 02:30"`; the year is implied.
    pub event_time: String,
    pub url: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unparsable event time '{event_time}': {source}")]
pub struct ScheduleError {
    pub event_time: String,
    pub source: chrono::ParseError,
}

/// Parses the leading `DD.MM.` token of `event_time`, completing it with `year`.
pub fn fixture_date(event_time: &str, year: i32) -> Result<NaiveDate, ScheduleError> {
    let day_month = event_time.split_whitespace().next().unwrap_or_default();
    let day_month = day_month.trim_end_matches('.');
    NaiveDate::parse_from_str(&format!("{day_month}.{year}"), "%d.%m.%Y").map_err(|source| ScheduleError {
        event_time: event_time.to_owned(),
        source,
    })
}

/// A listed date more than this many days away from `today` belongs to the adjacent year.
const YEAR_ROLLOVER_DAYS: u64 = 183;

/// Dates `event_time` in whichever year puts it nearest `today`, so that `"02.01."` listed on
/// 31 December falls in the next year and `"31.12."` listed on 1 January in the previous one.
pub fn fixture_date_near(event_time: &str, today: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    let date = fixture_date(event_time, today.year())?;
    let window = Days::new(YEAR_ROLLOVER_DAYS);
    if today.checked_sub_days(window).is_some_and(|earliest| date < earliest) {
        fixture_date(event_time, today.year() + 1)
    } else if today.checked_add_days(window).is_some_and(|latest| date > latest) {
        fixture_date(event_time, today.year() - 1)
    } else {
        Ok(date)
    }
}

/// Takes fixtures in listed order up to the first one dated after `today`.
pub fn todays_fixtures(fixtures: &[Fixture], today: NaiveDate) -> Result<Vec<&Fixture>, ScheduleError> {
    let mut selected = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        if fixture_date_near(&fixture.event_time, today)? > today {
            break;
        }
        selected.push(fixture);
    }
    Ok(selected)
}
