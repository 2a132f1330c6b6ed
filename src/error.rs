//! Error types for the nongli crate.

/// Error type for all fallible operations in the nongli crate.
///
/// Only the public entry points validate input; everything below them
/// assumes a supported year and a real civil date.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when the civil year is outside the supported range.
    #[error("year {year} out of range (must be {min}..={max})")]
    OutOfRange {
        /// The rejected year.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// Returned when a civil month is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a civil day exceeds the length of its month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The month for which the day is invalid.
        month: u32,
        /// The last valid day of that month.
        max_day: u32,
    },
}
