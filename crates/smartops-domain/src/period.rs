//! Reporting-period selection and month keys.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::common::days_in_month;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Selects between a single-month and a whole-year reporting window.
#[derive(Default)]
pub enum PeriodMode {
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for PeriodMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PeriodMode::Monthly => "Monthly",
            PeriodMode::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// A reporting window: one calendar month, or an entire calendar year.
///
/// `month` is a zero-based index (0 = January) and only meaningful in
/// monthly mode. Dates are compared on their local calendar fields; callers
/// supply dates already in the tenant's reporting timezone.
pub struct ReportingPeriod {
    pub mode: PeriodMode,
    pub month: u32,
    pub year: i32,
}

impl ReportingPeriod {
    /// Builds a monthly selection. `month` is the zero-based month index.
    pub fn monthly(year: i32, month: u32) -> Result<Self, PeriodError> {
        if month > 11 {
            return Err(PeriodError::MonthOutOfRange(month));
        }
        Ok(Self {
            mode: PeriodMode::Monthly,
            month,
            year,
        })
    }

    /// Builds a yearly selection. The month index is retained so switching
    /// back to monthly mode keeps the last selected month.
    pub fn yearly(year: i32) -> Self {
        Self {
            mode: PeriodMode::Yearly,
            month: 0,
            year,
        }
    }

    /// Returns the monthly selection containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            mode: PeriodMode::Monthly,
            month: date.month0(),
            year: date.year(),
        }
    }

    /// Whether `date` falls inside this reporting window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.mode {
            PeriodMode::Monthly => date.month0() == self.month && date.year() == self.year,
            PeriodMode::Yearly => date.year() == self.year,
        }
    }

    /// The adjacent earlier month, wrapping the year boundary. Yearly
    /// selections are returned unchanged; navigating a year span is a UI
    /// concern the core does not define.
    pub fn previous(&self) -> Self {
        match self.mode {
            PeriodMode::Yearly => *self,
            PeriodMode::Monthly => {
                if self.month == 0 {
                    Self {
                        month: 11,
                        year: self.year - 1,
                        ..*self
                    }
                } else {
                    Self {
                        month: self.month - 1,
                        ..*self
                    }
                }
            }
        }
    }

    /// The adjacent later month, wrapping the year boundary. Yearly
    /// selections are returned unchanged.
    pub fn next(&self) -> Self {
        match self.mode {
            PeriodMode::Yearly => *self,
            PeriodMode::Monthly => {
                if self.month == 11 {
                    Self {
                        month: 0,
                        year: self.year + 1,
                        ..*self
                    }
                } else {
                    Self {
                        month: self.month + 1,
                        ..*self
                    }
                }
            }
        }
    }

    /// One-based month number (1 = January).
    pub fn month1(&self) -> u32 {
        self.month + 1
    }

    /// The `YYYY-MM` key for a monthly selection.
    pub fn month_key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month1())
    }

    /// Number of days in the selected month.
    pub fn days_in_selected_month(&self) -> u32 {
        days_in_month(self.year, self.month1())
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            PeriodMode::Monthly => {
                write!(f, "{} {}", MONTH_NAMES[self.month as usize], self.year)
            }
            PeriodMode::Yearly => write!(f, "Year {}", self.year),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`ReportingPeriod`] values.
pub enum PeriodError {
    MonthOutOfRange(u32),
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodError::MonthOutOfRange(month) => {
                write!(f, "month index {} outside 0..=11", month)
            }
        }
    }
}

impl std::error::Error for PeriodError {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Calendar month tag in `YYYY-MM` form used to stamp recurring instances.
pub struct MonthKey {
    pub year: i32,
    /// One-based month number.
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
