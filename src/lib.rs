//! Utilities for converting Gregorian dates into the traditional Chinese
//! lunar calendar.
//!
//! Conversion is driven by a compiled-in year table covering lunar years
//! starting in 1891 through 2100; dates from 1892 through 2100 are accepted.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use nongli::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Chinese lunar calendar:
//!
//! ```
//! use nongli::chinese::{convert, Month::*};
//!
//! let date = convert(2000, 1, 1).unwrap();
//!
//! assert_eq!((1999, Common(11), 25), (date.year, date.month, date.day_index));
//! assert_eq!("己卯年(兔) 冬月廿五", date.to_string());
//! ```
//!
//! Dates before 1892 or after 2100 are rejected:
//!
//! ```
//! use nongli::{Error, chinese::convert};
//!
//! assert!(matches!(convert(2101, 1, 1), Err(Error::OutOfRange { .. })));
//! ```

pub mod chinese;
pub mod date;
pub mod error;

pub use chinese::{LunarDate, Month, convert, convert_from_timestamp};
pub use date::{Date, YearType};
pub use error::Error;
