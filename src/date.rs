//! Calendar-independant date.

use std::ops::{Add, Sub};

use chrono::{Datelike, NaiveDate};

use crate::error::Error;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date, checking that the
    /// month and day actually exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMonth`] if `month` is not in `1..=12`, and
    /// [`Error::InvalidDay`] if `day` is past the end of that month.
    ///
    /// # Panics
    ///
    /// Panics if the date is before JDN 0 (4713 BC).
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// assert!(Date::new(2000, 2, 29).is_ok());
    /// assert!(Date::new(1900, 2, 29).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth { month });
        }
        let max_day = YearType::from_gregorian(year).days_in_month(month);
        if !(1..=max_day).contains(&day) {
            return Err(Error::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self::from_gregorian(year, month as i32, day as i32)
            .unwrap_or_else(|| panic!("{year:04}-{month:02}-{day:02} before JDN 0")))
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc. Out-of-range months and days are not rejected; use
    /// [`Date::new`] for checked construction.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        let (y, m, d) = (year, month, day);
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = i32::try_from(self.jdn).expect("jdn >= 2**31 not supported");
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year, month, day)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        // NaiveDate has already validated the month and day.
        Date::from_gregorian(date.year(), date.month() as i32, date.day() as i32)
            .unwrap_or_else(|| panic!("{date} before JDN 0"))
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// Number of whole days from `b` to `a`; positive if `a` is later.
///
/// # Example
///
/// ```
/// use nongli::{Date, date::days_between};
///
/// let a = Date::from_gregorian(2018, 5, 20).unwrap();
/// let b = Date::from_gregorian(2018, 2, 16).unwrap();
/// assert_eq!(93, days_between(a, b));
/// assert_eq!(-93, days_between(b, a));
/// ```
pub fn days_between(a: Date, b: Date) -> i32 {
    a - b
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
    /// Number of days in `month` (`1..=12`) of a year of this type.
    ///
    /// # Panics
    ///
    /// Panics if `month` is not in `1..=12`.
    pub fn days_in_month(&self, month: u32) -> u32 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => 28 + self.is_leap() as u32,
            _ => panic!("month {} not in 1..=12", month),
        }
    }
}
