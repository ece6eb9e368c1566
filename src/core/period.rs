//! Report/listing period filters and their resolution to date intervals.

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::{Datelike, Duration, NaiveDate};

/// A period filter as selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
    /// A specific day.
    Day(NaiveDate),
    /// A specific calendar month (1-based).
    Month { year: i32, month: u32 },
    Year { year: i32 },
    /// Custom interval; a missing end collapses to a single-day interval.
    Custom {
        start: NaiveDate,
        end: Option<NaiveDate>,
    },
    /// No date filtering at all.
    All,
}

impl Period {
    /// Parse a `--period` argument.
    ///
    /// Accepted forms:
    /// - `today` | `week` | `month` | `year` | `all`
    /// - `YYYY`
    /// - `YYYY-MM`
    /// - `YYYY-MM-DD`
    /// - `A:B` where A and B share one of the three formats above
    pub fn parse(s: &str) -> AppResult<Period> {
        let s = s.trim();

        match s.to_ascii_lowercase().as_str() {
            "today" => return Ok(Period::Today),
            "week" => return Ok(Period::ThisWeek),
            "month" => return Ok(Period::ThisMonth),
            "year" => return Ok(Period::ThisYear),
            "all" => return Ok(Period::All),
            _ => {}
        }

        if let Some((start_raw, end_raw)) = s.split_once(':') {
            let start = start_raw.trim();
            let end = end_raw.trim();

            if start.len() != end.len() {
                return Err(AppError::InvalidPeriod(format!(
                    "{s}: start and end must have the same format"
                )));
            }

            let (s1, _) = parse_simple(start)?.bounds()?;
            let (_, e2) = parse_simple(end)?.bounds()?;

            if e2 < s1 {
                return Err(AppError::InvalidPeriod(format!("{s}: end before start")));
            }

            return Ok(Period::Custom {
                start: s1,
                end: Some(e2),
            });
        }

        parse_simple(s)
    }

    /// Resolve to inclusive date bounds against `today`.
    /// `None` means no filtering (the `All` case).
    pub fn resolve(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Period::All => None,
            Period::Today => Some((today, today)),
            Period::Day(d) => Some((*d, *d)),
            Period::ThisWeek => {
                let start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
                Some((start, start + Duration::days(6)))
            }
            Period::ThisMonth => {
                month_bounds(today.year(), today.month()).or(Some((today, today)))
            }
            Period::ThisYear => year_bounds(today.year()).or(Some((today, today))),
            // A malformed month/year falls back to today's single-day
            // interval instead of failing the whole report.
            Period::Month { year, month } => {
                month_bounds(*year, *month).or(Some((today, today)))
            }
            Period::Year { year } => year_bounds(*year).or(Some((today, today))),
            Period::Custom { start, end } => Some((*start, end.unwrap_or(*start))),
        }
    }

    /// Fixed bounds for periods that do not depend on the current date.
    fn bounds(&self) -> AppResult<(NaiveDate, NaiveDate)> {
        match self {
            Period::Day(d) => Ok((*d, *d)),
            Period::Month { year, month } => month_bounds(*year, *month)
                .ok_or_else(|| AppError::InvalidPeriod(format!("{year}-{month:02}"))),
            Period::Year { year } => {
                year_bounds(*year).ok_or_else(|| AppError::InvalidPeriod(year.to_string()))
            }
            _ => Err(AppError::InvalidPeriod(
                "relative periods cannot be used inside a range".to_string(),
            )),
        }
    }
}

fn parse_simple(s: &str) -> AppResult<Period> {
    match s.len() {
        // YYYY
        4 => {
            let year: i32 = s
                .parse()
                .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;
            Ok(Period::Year { year })
        }
        // YYYY-MM
        7 => {
            // len() counts bytes; multibyte input must not slice-panic
            let (year_raw, month_raw) = match (s.get(0..4), s.get(5..7)) {
                (Some(y), Some(m)) => (y, m),
                _ => return Err(AppError::InvalidPeriod(s.to_string())),
            };
            let year: i32 = year_raw
                .parse()
                .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;
            let month: u32 = month_raw
                .parse()
                .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;
            if month_last_day(year, month).is_none() {
                return Err(AppError::InvalidPeriod(s.to_string()));
            }
            Ok(Period::Month { year, month })
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;
            Ok(Period::Day(d))
        }
        _ => Err(AppError::InvalidPeriod(s.to_string())),
    }
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let last = month_last_day(year, month)?;
    let d1 = NaiveDate::from_ymd_opt(year, month, 1)?;
    let d2 = NaiveDate::from_ymd_opt(year, month, last)?;
    Some((d1, d2))
}

fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let d1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let d2 = NaiveDate::from_ymd_opt(year, 12, 31)?;
    Some((d1, d2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(Period::parse("today").unwrap(), Period::Today);
        assert_eq!(Period::parse("week").unwrap(), Period::ThisWeek);
        assert_eq!(Period::parse("all").unwrap(), Period::All);
    }

    #[test]
    fn parse_year_month_day() {
        assert_eq!(Period::parse("2025").unwrap(), Period::Year { year: 2025 });
        assert_eq!(
            Period::parse("2025-03").unwrap(),
            Period::Month {
                year: 2025,
                month: 3
            }
        );
        assert_eq!(
            Period::parse("2025-03-15").unwrap(),
            Period::Day(d("2025-03-15"))
        );
    }

    #[test]
    fn parse_ranges() {
        let p = Period::parse("2024-09:2025-09").unwrap();
        assert_eq!(
            p.resolve(d("2025-01-01")),
            Some((d("2024-09-01"), d("2025-09-30")))
        );

        let p = Period::parse("2024:2025").unwrap();
        assert_eq!(
            p.resolve(d("2025-01-01")),
            Some((d("2024-01-01"), d("2025-12-31")))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Period::parse("banana").is_err());
        assert!(Period::parse("2025-13").is_err());
        assert!(Period::parse("2024:2025-01").is_err());
        assert!(Period::parse("2025-02:2024-02").is_err());
    }

    #[test]
    fn parse_rejects_multibyte_input_without_panicking() {
        // 7 bytes but not 7 ASCII chars: must be a clean error
        assert!(Period::parse("202\u{e9}-3").is_err());
        assert!(Period::parse("202\u{e9}-3:202\u{e9}-4").is_err());
    }

    #[test]
    fn week_starts_monday() {
        // 2024-06-12 is a Wednesday
        let bounds = Period::ThisWeek.resolve(d("2024-06-12")).unwrap();
        assert_eq!(bounds, (d("2024-06-10"), d("2024-06-16")));
    }

    #[test]
    fn month_bounds_handle_leap_february() {
        let p = Period::Month {
            year: 2024,
            month: 2,
        };
        assert_eq!(
            p.resolve(d("2024-06-10")),
            Some((d("2024-02-01"), d("2024-02-29")))
        );
    }

    #[test]
    fn custom_end_defaults_to_start() {
        let p = Period::Custom {
            start: d("2024-06-01"),
            end: None,
        };
        assert_eq!(
            p.resolve(d("2024-06-10")),
            Some((d("2024-06-01"), d("2024-06-01")))
        );
    }

    #[test]
    fn invalid_month_falls_back_to_today() {
        let p = Period::Month {
            year: 2024,
            month: 13,
        };
        assert_eq!(
            p.resolve(d("2024-06-10")),
            Some((d("2024-06-10"), d("2024-06-10")))
        );
    }

    #[test]
    fn all_means_no_bounds() {
        assert_eq!(Period::All.resolve(d("2024-06-10")), None);
    }
}
