//! Conversions between the Gregorian calendar and the Chinese lunisolar
//! calendar, plus solar terms, the sexagenary day cycle and festival
//! lookup, for years [`YEAR_MIN`]..=[`YEAR_MAX`].
//!
//! Everything is reconstructed at runtime from compact packed year tables;
//! there is no floating-point astronomy here. All operations are pure
//! functions of their arguments and the constant tables, so concurrent use
//! needs no synchronization.
//!
//! ```
//! use nongli::GregorianDate;
//!
//! let date = GregorianDate::new(2017, 7, 23).unwrap();
//! let chinese = date.to_chinese().unwrap();
//! assert_eq!(2017, chinese.year());
//! assert_eq!(6, chinese.month());
//! assert!(chinese.leap()); // the leap sixth month of 2017
//! ```

pub use error::DateError;
pub use festival::{chinese_festival, gregorian_festival, Festival, FestivalMatch};
pub use ganzhi::{branch, stem, stem_branch};
pub use gregorian::{days_in_month, is_leap_year, GregorianDate};
pub use lunisolar::{leap_month, ChineseDate};
pub use solar_term::{solar_term, solar_terms_of_month, SolarTerm};

mod error;
mod festival;
mod ganzhi;
mod gregorian;
mod lunisolar;
mod new_moon;
mod solar_term;
mod tables;

/// First supported Gregorian year. The tables extend one year further on
/// each side so boundary conversions can resolve their neighbours.
pub const YEAR_MIN: i32 = 1801;

/// Last supported Gregorian year.
pub const YEAR_MAX: i32 = 2299;
