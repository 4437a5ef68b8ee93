// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The bylines developers

//! The calendar month a report covers.

use crate::clock::{Clock, NaiveDate};
use chrono::{Datelike, Months};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<year>\d{4})-(?<month>\d{1,2})$").expect("invalid month pattern")
});

/// A month window: the half-open interval from the first day of a month
/// up to, but not including, the first day of the following month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportMonth {
    first_day: NaiveDate,
    end: NaiveDate,
}

impl ReportMonth {
    /// The window for `month` (1–12) of `year`.
    ///
    /// Returns `None` if the month does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use bylines::month::ReportMonth;
    /// let month = ReportMonth::new(2025, 12).unwrap();
    /// assert_eq!(month.first_day().to_string(), "2025-12-01");
    /// assert_eq!(month.end().to_string(), "2026-01-01");
    /// assert!(ReportMonth::new(2025, 13).is_none());
    /// ```
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = first_day.checked_add_months(Months::new(1))?;
        Some(Self { first_day, end })
    }

    /// The window containing `date`.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    /// The window containing today's date, according to `clock`.
    pub fn current<C: Clock>(clock: &C) -> Option<Self> {
        Self::containing(clock.today())
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// First day of the following month, which is outside the window.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Lower bound of the window as the posts feed expects it.
    pub fn after(&self) -> String {
        self.first_day.format("%Y-%m-%dT00:00:00").to_string()
    }

    /// Upper bound of the window as the posts feed expects it.
    pub fn before(&self) -> String {
        self.end.format("%Y-%m-%dT00:00:00").to_string()
    }

    /// A human-readable name for the month, such as "November 2025".
    pub fn label(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }

    /// True if `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date < self.end
    }
}

impl fmt::Display for ReportMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%Y-%m"))
    }
}

impl FromStr for ReportMonth {
    type Err = MonthParseError;

    /// Parses a month in `YYYY-MM` format.
    ///
    /// # Examples
    ///
    /// ```
    /// use bylines::month::ReportMonth;
    /// let month: ReportMonth = "2025-11".parse().unwrap();
    /// assert_eq!(month.label(), "November 2025");
    /// assert!("November".parse::<ReportMonth>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = MONTH_RE
            .captures(s.trim())
            .ok_or_else(|| MonthParseError(s.to_string()))?;
        let year = caps["year"]
            .parse()
            .map_err(|_| MonthParseError(s.to_string()))?;
        let month = caps["month"]
            .parse()
            .map_err(|_| MonthParseError(s.to_string()))?;
        Self::new(year, month).ok_or_else(|| MonthParseError(s.to_string()))
    }
}

/// Indicates that a month argument could not be understood.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Invalid date format. Use YYYY-MM (e.g., 2025-11)")]
pub struct MonthParseError(String);

impl MonthParseError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.0
    }
}
