//! Gregorian to Chinese lunisolar conversion.
//!
//! The conversion is organized around the sui: the run of lunar months
//! from the month containing one winter solstice (lunar month 11) to the
//! month before the next. When thirteen new moons fall between two
//! consecutive solstices, the first month in the span that contains no
//! major solar term becomes the leap month and repeats the number of the
//! month before it.

use crate::error::DateError;
use crate::gregorian::{self, GregorianDate};
use crate::new_moon::{NewMoonTable, MOON_SLOTS};
use crate::solar_term;

/// A date in the Chinese lunisolar calendar.
///
/// At most one month per year carries `leap`; a leap month shares its
/// number with the month it follows. `day` is 1..=30 and day 30 only
/// occurs in a major (30-day) month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChineseDate {
    year: i32,
    month: u8,
    day: u8,
    leap: bool,
    major: bool,
}

impl ChineseDate {
    /// Looks up a Chinese calendar date and validates it against the year
    /// tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use nongli::ChineseDate;
    ///
    /// // Spring Festival of 2017.
    /// let date = ChineseDate::new(2017, 1, 1, false).unwrap();
    /// let gregorian = date.to_gregorian().unwrap();
    /// assert_eq!((2017, 1, 28), (gregorian.year(), gregorian.month(), gregorian.day()));
    ///
    /// // 2017 has a leap sixth month; 2018 does not.
    /// assert!(ChineseDate::new(2017, 6, 1, true).is_ok());
    /// assert!(ChineseDate::new(2018, 6, 1, true).is_err());
    /// ```
    pub fn new(year: i32, month: u8, day: u8, leap: bool) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(DateError::InvalidChineseDate(year));
        }
        let (_, days) = locate_month(year, month, leap)?;
        if day as i64 > days {
            return Err(DateError::InvalidChineseDate(year));
        }
        Ok(ChineseDate {
            year,
            month,
            day,
            leap,
            major: days == 30,
        })
    }

    /// Chinese calendar year (the year whose first month opens it).
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1..=12. A leap month repeats the number of the month
    /// it follows.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of the lunar month, 1..=30.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Whether this date falls in the leap month.
    pub fn leap(&self) -> bool {
        self.leap
    }

    /// Whether the month has 30 days.
    pub fn major(&self) -> bool {
        self.major
    }

    /// The Gregorian date of this Chinese date: the inverse walk through
    /// the same new-moon tables used by [`GregorianDate::to_chinese`].
    ///
    /// Fails when the resulting Gregorian date would leave the supported
    /// range (possible only for the outermost tabulated years).
    pub fn to_gregorian(&self) -> Result<GregorianDate, DateError> {
        let (start, _) = locate_month(self.year, self.month, self.leap)?;
        let (year, month, day) = gregorian::from_day_offset(start + self.day as i64 - 1);
        GregorianDate::new(year, month, day)
    }
}

impl GregorianDate {
    /// The Chinese lunisolar date of this Gregorian date.
    ///
    /// # Examples
    ///
    /// ```
    /// use nongli::GregorianDate;
    ///
    /// let date = GregorianDate::new(2017, 7, 23).unwrap().to_chinese().unwrap();
    /// assert_eq!((2017, 6, 1, true), (date.year(), date.month(), date.day(), date.leap()));
    /// ```
    pub fn to_chinese(&self) -> Result<ChineseDate, DateError> {
        let offset = self.day_offset();
        let table = NewMoonTable::resolve(self.year())?;
        // Dates before the start of this December's month 11 belong to
        // the sui anchored at the previous year's solstice.
        let anchor_year = if offset >= table.offset(table.anchor()) {
            self.year()
        } else {
            self.year() - 1
        };
        let sui = Sui::resolve(anchor_year)?;

        let mut month = 10u8;
        for slot in 0..sui.months {
            let leap = sui.leap_slot == Some(slot);
            if !leap {
                month = month % 12 + 1;
            }
            if offset < sui.start(slot + 1) {
                let year = if month >= 11 { anchor_year } else { anchor_year + 1 };
                let days = sui.start(slot + 1) - sui.start(slot);
                return Ok(ChineseDate {
                    year,
                    month,
                    day: (offset - sui.start(slot)) as u8 + 1,
                    leap,
                    major: days == 30,
                });
            }
        }
        unreachable!("date outside the resolved sui")
    }
}

/// Leap month number of the Chinese calendar year `year`, if it has one.
///
/// # Examples
///
/// ```
/// use nongli::leap_month;
///
/// assert_eq!(Some(6), leap_month(2017).unwrap());
/// assert_eq!(None, leap_month(2018).unwrap());
/// ```
pub fn leap_month(year: i32) -> Result<Option<u8>, DateError> {
    if !(crate::YEAR_MIN..=crate::YEAR_MAX).contains(&year) {
        return Err(DateError::YearOutOfRange(year));
    }
    Ok(crate::tables::YearRecord::get(year)?.leap_month())
}

/// The lunar months between two consecutive winter solstices.
struct Sui {
    /// Month-start offsets; entry `months` bounds the final month.
    starts: [i64; MOON_SLOTS + 1],
    /// 12, or 13 when a leap month is present.
    months: usize,
    /// Slot of the leap month (the first month after the anchor whose
    /// span contains no major solar term).
    leap_slot: Option<usize>,
}

impl Sui {
    /// Assembles the sui anchored at `anchor_year`'s winter solstice by
    /// splicing the new-moon tables of the two adjacent years.
    fn resolve(anchor_year: i32) -> Result<Self, DateError> {
        let this = NewMoonTable::resolve(anchor_year)?;
        let next = NewMoonTable::resolve(anchor_year + 1)?;

        let mut starts = [0i64; MOON_SLOTS + 1];
        let mut count = 0;
        for &offset in &this.within_year()[this.anchor()..] {
            starts[count] = offset;
            count += 1;
        }
        for index in 0..=next.anchor() {
            starts[count] = next.offset(index);
            count += 1;
        }
        let months = count - 1;
        debug_assert!(months == 12 || months == 13, "sui of {anchor_year}");

        let mut leap_slot = None;
        if months == 13 {
            // Walk the major terms following the solstice (Greater Cold
            // onward, ending at the next solstice) alongside the months;
            // the first month that fails to contain its pending major
            // term is the leap month.
            let mut term = 1usize;
            for slot in 1..months {
                if major_term_offset(anchor_year + 1, term)? >= starts[slot + 1] {
                    leap_slot = Some(slot);
                    break;
                }
                term += 2;
            }
            debug_assert!(leap_slot.is_some(), "13-month sui of {anchor_year}");
        }

        Ok(Sui {
            starts,
            months,
            leap_slot,
        })
    }

    fn start(&self, slot: usize) -> i64 {
        self.starts[slot]
    }
}

fn major_term_offset(year: i32, term: usize) -> Result<i64, DateError> {
    let day = solar_term::term_day(year, term)?;
    Ok(gregorian::day_offset(year, term as u8 / 2 + 1, day))
}

/// Finds the month-start offset and length of a Chinese month.
fn locate_month(year: i32, month: u8, leap: bool) -> Result<(i64, i64), DateError> {
    // Months 11 and 12 live in the sui anchored in the same year; months
    // 1..=10 in the one anchored the year before.
    let anchor_year = if month >= 11 { year } else { year - 1 };
    let sui = Sui::resolve(anchor_year)?;
    let mut number = 10u8;
    for slot in 0..sui.months {
        let leap_here = sui.leap_slot == Some(slot);
        if !leap_here {
            number = number % 12 + 1;
        }
        if number == month && leap_here == leap {
            return Ok((sui.start(slot), sui.start(slot + 1) - sui.start(slot)));
        }
    }
    Err(DateError::InvalidChineseDate(year))
}
