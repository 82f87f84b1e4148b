use super::log;
use super::types::TagMap;
use chrono::{Datelike, NaiveDate};

pub const UNKNOWN_PLAYER: &str = "?";
pub const UNKNOWN_DATE: &str = "????.??.??";

/// Summary tags shown when picking a game out of a multi-game file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHeader {
    pub white: String,
    pub black: String,
    pub event: String,
    /// Date tag exactly as recorded.
    pub raw_date: String,
    /// Calendar date when at least the year is known.
    pub date: Option<NaiveDate>,
}

impl GameHeader {
    pub fn from_tags(tags: &TagMap) -> Self {
        let text = |name: &str, fallback: &str| {
            tags.get(name)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        let raw_date = text("Date", UNKNOWN_DATE);
        let date = parse_date(&raw_date);

        Self {
            white: text("White", UNKNOWN_PLAYER),
            black: text("Black", UNKNOWN_PLAYER),
            event: text("Event", UNKNOWN_PLAYER),
            raw_date,
            date,
        }
    }

    /// `White - Black` as listed in a game picker.
    pub fn players(&self) -> String {
        format!("{} - {}", self.white, self.black)
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let first_day_next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month.checked_add(1)?, 1)?
    };

    first_day_next_month.pred_opt().map(|d| d.day())
}

/// Parses a PGN date (`YYYY.MM.DD`, `-` also accepted). Unknown month or day
/// fall back to `01`; an unknown year means no date at all.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    let norm = s.replace('.', "-");
    let parts: Vec<&str> = norm.split('-').collect();
    let [year_s, month_s, day_s] = parts.as_slice() else {
        log::debug(format!("unrecognized Date tag '{s}'"));
        return None;
    };

    if year_s.contains('?') {
        return None;
    }
    fn known(part: &str) -> &str {
        if part.contains('?') { "01" } else { part }
    }

    let parsed = (|| {
        let year = year_s.parse::<i32>().ok()?;
        let month = known(month_s).parse::<u32>().ok()?;
        let day = known(day_s).parse::<u32>().ok()?;
        let last_day = last_day_of_month(year, month)?;
        NaiveDate::from_ymd_opt(year, month, day.min(last_day))
    })();

    if parsed.is_none() {
        log::debug(format!("Date tag '{s}' is out of range"));
    }
    parsed
}
