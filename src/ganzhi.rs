//! Sexagenary (stem-branch) day cycle.

use crate::gregorian::GregorianDate;

// Fixes the cycle to the calendar: 2000-01-07 is a jiazi day (index 0).
// Every output shifts by a constant if this anchor changes, so it is the
// one number in this module that must never be touched.
const CYCLE_ANCHOR: i64 = 8;

/// Position of a day in the sexagenary cycle, 0..=59.
///
/// Closed-form arithmetic on the month-shifted date; no table lookups.
/// Stem and branch are derived views: index mod 10 and index mod 12.
///
/// # Examples
///
/// ```
/// use nongli::{stem_branch, GregorianDate};
///
/// let date = GregorianDate::new(2000, 1, 7).unwrap();
/// assert_eq!(0, stem_branch(date));
/// ```
pub fn stem_branch(date: GregorianDate) -> u8 {
    let (year, month) = if date.month() < 3 {
        (date.year() as i64 - 1, date.month() as i64 + 12)
    } else {
        (date.year() as i64, date.month() as i64)
    };
    let index = 5 * year + year / 4 - year / 100 + year / 400
        + 30 * ((month - 1) % 2)
        + 19 * (month - 2) / 32
        + date.day() as i64
        + CYCLE_ANCHOR;
    index.rem_euclid(60) as u8
}

/// Celestial stem of a cycle index, 0..=9.
pub fn stem(index: u8) -> u8 {
    index % 10
}

/// Terrestrial branch of a cycle index, 0..=11.
pub fn branch(index: u8) -> u8 {
    index % 12
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian;

    fn index_of(year: i32, month: u8, day: u8) -> u8 {
        stem_branch(GregorianDate::new(year, month, day).unwrap())
    }

    #[test]
    fn anchor_date_is_cycle_start() {
        assert_eq!(0, index_of(2000, 1, 7));
    }

    #[test]
    fn known_indices() {
        assert_eq!(17, index_of(1970, 1, 1));
        assert_eq!(54, index_of(2000, 1, 1));
        assert_eq!(2, index_of(1984, 2, 2));
    }

    #[test]
    fn cycle_has_period_sixty() {
        // Advancing sixty days anywhere in the range returns to the same
        // index, and consecutive days advance the index by one.
        let starts = [(1801, 3, 1), (1900, 2, 20), (2000, 12, 31), (2299, 6, 15)];
        for (year, month, day) in starts {
            let base = GregorianDate::new(year, month, day).unwrap();
            let index = stem_branch(base);
            let mut offset = base.day_offset();
            for step in 1..=60i64 {
                offset += 1;
                let (y, m, d) = gregorian::from_day_offset(offset);
                let next = index_of(y, m, d);
                assert_eq!(((index as i64 + step) % 60) as u8, next);
            }
            assert_eq!(index, {
                let (y, m, d) = gregorian::from_day_offset(base.day_offset() + 60);
                index_of(y, m, d)
            });
        }
    }

    #[test]
    fn stem_and_branch_views() {
        assert_eq!(0, stem(0));
        assert_eq!(0, branch(0));
        assert_eq!(9, stem(59));
        assert_eq!(11, branch(59));
        // The classic cycle alignment: index 10 pairs stem 0 with branch 10.
        assert_eq!(0, stem(10));
        assert_eq!(10, branch(10));
    }
}
