use thiserror::Error;

/// Recoverable failures reported at the public call boundary.
///
/// Table-consistency violations are deliberately absent: the packed year
/// tables are validated for every tabulated year by the test suite, so a
/// caller can never observe one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// The year (or an adjacent year needed by a boundary conversion) is
    /// outside the supported range. Never clamped: a clamped result would
    /// be a date far from the requested one.
    #[error("year {0} is outside the supported range")]
    YearOutOfRange(i32),

    /// Month or day outside nominal bounds, or day exceeds the month
    /// length for that year.
    #[error("{year:04}-{month:02}-{day:02} is not a valid Gregorian date")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// A (month, leap, day) combination that does not occur in the given
    /// Chinese calendar year.
    #[error("no such date in Chinese year {0}")]
    InvalidChineseDate(i32),
}
