//! Calendar-month periods and trailing-month windows.
//!
//! A [`Period`] identifies the calendar month a figure is derived for, and
//! is keyed externally by its `YYYY-MM` form. Windows are built by true
//! calendar-month subtraction, never fixed 30-day steps, so a trend chart
//! lines up with calendar months.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::Error;

/// A calendar month, identified externally by its `YYYY-MM` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: Month,
}

impl Period {
    /// Create a period from a year and month.
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The period containing `date`.
    pub fn containing(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The year of the period.
    pub fn year(self) -> i32 {
        self.year
    }

    /// The month of the period.
    pub fn month(self) -> Month {
        self.month
    }

    /// Whether `date` falls inside this calendar month.
    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The period one calendar month earlier.
    pub fn previous(self) -> Self {
        match self.month.previous() {
            Month::December => Self {
                year: self.year - 1,
                month: Month::December,
            },
            month => Self {
                year: self.year,
                month,
            },
        }
    }

    /// The last `count` calendar months ending at the month containing
    /// `today`, oldest first.
    pub fn trailing_months(today: Date, count: usize) -> Vec<Self> {
        let mut months = Vec::with_capacity(count);
        let mut period = Self::containing(today);

        for _ in 0..count {
            months.push(period);
            period = period.previous();
        }

        months.reverse();
        months
    }

    /// A short human label such as `"Jan 2025"`.
    pub fn label(self) -> String {
        format!("{} {}", month_abbrev(self.month), self.year)
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let error = || Error::InvalidDate(text.to_owned());

        let (year, month) = text.split_once('-').ok_or_else(error)?;

        if year.len() != 4 || month.len() != 2 {
            return Err(error());
        }

        let year: i32 = year.parse().map_err(|_| error())?;
        let month: u8 = month.parse().map_err(|_| error())?;
        let month = Month::try_from(month).map_err(|_| error())?;

        Ok(Self { year, month })
    }
}

impl TryFrom<String> for Period {
    type Error = Error;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month as u8)
    }
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
