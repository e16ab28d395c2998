//! Per-year new-moon tables.
//!
//! A [`NewMoonTable`] materializes the serial day offsets of the new moons
//! of one Gregorian year from its packed record, and locates the one
//! beginning the month that contains the winter solstice, the anchor for
//! lunar month 11. The table is a small stack-local value computed per
//! query; nothing here is shared between calls.

use crate::error::DateError;
use crate::gregorian;
use crate::solar_term;
use crate::tables::YearRecord;

/// Slots per year: the first new moon of the year plus thirteen more,
/// enough to reach past the following January even in a leap year.
pub(crate) const MOON_SLOTS: usize = 14;

#[derive(Debug, Clone, Copy)]
pub(crate) struct NewMoonTable {
    offsets: [i64; MOON_SLOTS],
    /// Number of leading slots whose new moon falls within this Gregorian
    /// year. The tail slots beyond it belong to the next year's table and
    /// must not be double-counted when two tables are spliced.
    len: usize,
    /// Index of the last new moon at or before the winter solstice: the
    /// start of lunar month 11.
    anchor: usize,
}

impl NewMoonTable {
    /// Builds the table for `year`. Fails when `year` (which may be one
    /// year outside the published range during boundary conversions) has
    /// no tabulated record.
    pub(crate) fn resolve(year: i32) -> Result<Self, DateError> {
        let record = YearRecord::get(year)?;
        let jan1 = gregorian::day_offset(year, 1, 1);

        let mut offsets = [0i64; MOON_SLOTS];
        offsets[0] = jan1 + record.first_new_moon_day_of_year() as i64 - 1;
        for index in 1..MOON_SLOTS {
            offsets[index] = offsets[index - 1] + record.lunation_days(index - 1);
        }

        // Trailing new moons past December belong to the next Gregorian
        // year; leaving them valid would duplicate that year's slots.
        let year_days = if gregorian::is_leap_year(year) { 366 } else { 365 };
        let mut len = MOON_SLOTS;
        while len > 0 && offsets[len - 1] >= jan1 + year_days {
            len -= 1;
        }

        let solstice = gregorian::day_offset(year, 12, solar_term::term_day(year, 23)?);
        let mut anchor = 0;
        while anchor + 1 < MOON_SLOTS && offsets[anchor + 1] <= solstice {
            anchor += 1;
        }

        Ok(NewMoonTable {
            offsets,
            len,
            anchor,
        })
    }

    /// Serial day offset of new moon `index`.
    pub(crate) fn offset(&self, index: usize) -> i64 {
        self.offsets[index]
    }

    /// Index of the new moon beginning lunar month 11.
    pub(crate) fn anchor(&self) -> usize {
        self.anchor
    }

    /// New moons that actually fall within this Gregorian year.
    pub(crate) fn within_year(&self) -> &[i64] {
        &self.offsets[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{TABLE_FIRST_YEAR, TABLE_LAST_YEAR};

    fn offset_of(year: i32, month: u8, day: u8) -> i64 {
        gregorian::day_offset(year, month, day)
    }

    #[test]
    fn untabulated_year_is_rejected() {
        assert!(NewMoonTable::resolve(TABLE_FIRST_YEAR - 1).is_err());
        assert!(NewMoonTable::resolve(TABLE_LAST_YEAR + 1).is_err());
    }

    #[test]
    fn new_moons_of_2000() {
        // Month starts of 2000 from published conversion tables.
        let expected = [
            (2000, 1, 7),
            (2000, 2, 5),
            (2000, 3, 6),
            (2000, 4, 5),
            (2000, 5, 4),
            (2000, 6, 2),
            (2000, 7, 2),
            (2000, 7, 31),
            (2000, 8, 29),
            (2000, 9, 28),
            (2000, 10, 27),
            (2000, 11, 26),
            (2000, 12, 26),
        ];
        let table = NewMoonTable::resolve(2000).unwrap();
        for (index, (y, m, d)) in expected.into_iter().enumerate() {
            assert_eq!(offset_of(y, m, d), table.offset(index), "moon {index}");
        }
    }

    #[test]
    fn anchor_starts_the_solstice_month() {
        for year in [1801, 1900, 2000, 2016, 2017, 2033, 2100, 2299] {
            let table = NewMoonTable::resolve(year).unwrap();
            let solstice = offset_of(year, 12, 1)
                + solar_term::term_day(year, 23).unwrap() as i64
                - 1;
            let anchor = table.anchor();
            assert!(table.offset(anchor) <= solstice, "{year}");
            assert!(table.offset(anchor + 1) > solstice, "{year}");
        }
    }

    #[test]
    fn tail_slots_marked_out_of_year() {
        for year in TABLE_FIRST_YEAR..TABLE_LAST_YEAR {
            let table = NewMoonTable::resolve(year).unwrap();
            let next = NewMoonTable::resolve(year + 1).unwrap();
            let within = table.within_year();
            assert!(within.len() >= 12, "{year}");
            assert!(
                *within.last().unwrap() < next.offset(0),
                "{year}: valid tail overlaps the next year"
            );
            // The first excluded slot, if any, must be the next year's
            // first new moon.
            if within.len() < MOON_SLOTS {
                assert_eq!(table.offset(within.len()), next.offset(0), "{year}");
            }
        }
    }
}
