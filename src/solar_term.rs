//! The 24 solar terms (jieqi).
//!
//! Term days are reconstructed from three independent corrections on a
//! per-term base day: a one-bit-per-year table tracking the four-year
//! leap-cycle wobble, a per-century bit capturing the one-time realignment
//! at the turn of some centuries, and a per-century threshold year after
//! which the slow drift of the true solar position takes one day back out.

use crate::error::DateError;
use crate::tables::{term_base_day, CenturyCorrection, SolarTermRecord};
use crate::{YEAR_MAX, YEAR_MIN};

/// One of the 24 solar terms, in calendar order starting from Lesser Cold
/// (the first term of January). Odd-indexed terms are the major terms
/// (zhongqi), which govern leap-month placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SolarTerm {
    LesserCold = 0,
    GreaterCold = 1,
    StartOfSpring = 2,
    RainWater = 3,
    AwakeningOfInsects = 4,
    SpringEquinox = 5,
    PureBrightness = 6,
    GrainRain = 7,
    StartOfSummer = 8,
    GrainBuds = 9,
    GrainInEar = 10,
    SummerSolstice = 11,
    LesserHeat = 12,
    GreaterHeat = 13,
    StartOfAutumn = 14,
    EndOfHeat = 15,
    WhiteDew = 16,
    AutumnEquinox = 17,
    ColdDew = 18,
    FrostsDescent = 19,
    StartOfWinter = 20,
    LesserSnow = 21,
    GreaterSnow = 22,
    WinterSolstice = 23,
}

const ALL_TERMS: [SolarTerm; 24] = {
    use SolarTerm::*;
    [
        LesserCold,
        GreaterCold,
        StartOfSpring,
        RainWater,
        AwakeningOfInsects,
        SpringEquinox,
        PureBrightness,
        GrainRain,
        StartOfSummer,
        GrainBuds,
        GrainInEar,
        SummerSolstice,
        LesserHeat,
        GreaterHeat,
        StartOfAutumn,
        EndOfHeat,
        WhiteDew,
        AutumnEquinox,
        ColdDew,
        FrostsDescent,
        StartOfWinter,
        LesserSnow,
        GreaterSnow,
        WinterSolstice,
    ]
};

impl SolarTerm {
    /// The term with the given index in 0..=23, if any.
    pub fn from_index(index: u8) -> Option<SolarTerm> {
        ALL_TERMS.get(index as usize).copied()
    }

    /// Index of the term in calendar order, 0..=23.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Whether this is a major term (zhongqi). Major terms anchor the
    /// lunar months; a lunar month containing none becomes the leap month.
    pub fn is_major(&self) -> bool {
        self.index() % 2 == 1
    }

    /// The Gregorian month this term always falls in.
    pub fn month(&self) -> u8 {
        self.index() / 2 + 1
    }
}

/// Day of month on which `term` falls in `year`.
///
/// # Examples
///
/// ```
/// use nongli::{solar_term, SolarTerm};
///
/// assert_eq!(21, solar_term(2000, SolarTerm::WinterSolstice).unwrap());
/// ```
pub fn solar_term(year: i32, term: SolarTerm) -> Result<u8, DateError> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return Err(DateError::YearOutOfRange(year));
    }
    term_day(year, term.index() as usize)
}

/// Both solar terms of a Gregorian month, minor first.
pub fn solar_terms_of_month(year: i32, month: u8) -> Result<(u8, u8), DateError> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return Err(DateError::YearOutOfRange(year));
    }
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidDate {
            year,
            month,
            day: 1,
        });
    }
    let first = (month as usize - 1) * 2;
    Ok((term_day(year, first)?, term_day(year, first + 1)?))
}

/// Table-range variant used internally, where adjacent-year lookups may
/// step one year outside the published range.
pub(crate) fn term_day(year: i32, term: usize) -> Result<u8, DateError> {
    let record = SolarTermRecord::get(year)?;
    let century = CenturyCorrection::for_year(year)?;
    let day = term_base_day(term) as i8 + record.plus_one(term) as i8
        + century.plus_one(term) as i8
        - century.past_threshold(term, year) as i8;
    Ok(day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian;

    #[test]
    fn known_term_days() {
        use SolarTerm::*;
        let dataset = [
            ((2000, WinterSolstice), 21),
            ((2017, WinterSolstice), 22),
            ((2023, WinterSolstice), 22),
            ((2025, WinterSolstice), 21),
            ((2000, PureBrightness), 4),
            ((2023, PureBrightness), 5),
            ((2017, StartOfSpring), 3),
            ((1984, StartOfSpring), 4),
            ((2025, StartOfSpring), 3),
            ((2000, SummerSolstice), 21),
            ((2024, SummerSolstice), 21),
            ((2000, SpringEquinox), 20),
            ((2024, AutumnEquinox), 22),
            ((2008, LesserCold), 6),
            ((2000, GreaterCold), 21),
        ];
        for ((year, term), day) in dataset {
            assert_eq!(Ok(day), solar_term(year, term), "{term:?} of {year}");
        }
    }

    #[test]
    fn terms_of_month() {
        assert_eq!(Ok((6, 21)), solar_terms_of_month(2008, 1));
        assert_eq!(Ok((4, 20)), solar_terms_of_month(2000, 4));
        assert!(solar_terms_of_month(2000, 13).is_err());
        assert!(solar_terms_of_month(1799, 1).is_err());
    }

    #[test]
    fn range_is_enforced() {
        assert_eq!(
            Err(DateError::YearOutOfRange(1800)),
            solar_term(1800, SolarTerm::LesserCold)
        );
        assert_eq!(
            Err(DateError::YearOutOfRange(2300)),
            solar_term(2300, SolarTerm::WinterSolstice)
        );
        assert!(solar_term(1801, SolarTerm::LesserCold).is_ok());
        assert!(solar_term(2299, SolarTerm::WinterSolstice).is_ok());
    }

    #[test]
    fn index_round_trip() {
        for index in 0..24u8 {
            let term = SolarTerm::from_index(index).unwrap();
            assert_eq!(index, term.index());
            assert_eq!(index % 2 == 1, term.is_major());
        }
        assert_eq!(None, SolarTerm::from_index(24));
    }

    #[test]
    fn terms_are_ordered_within_every_year() {
        // Normalized to (month, day), the 24 terms of a year must be
        // strictly increasing and consecutive terms at most one month
        // apart.
        for year in [1801, 1900, 1984, 2000, 2017, 2100, 2299] {
            let mut prev: Option<(u8, u8)> = None;
            for index in 0..24u8 {
                let term = SolarTerm::from_index(index).unwrap();
                let day = solar_term(year, term).unwrap();
                let pos = (term.month(), day);
                if let Some(p) = prev {
                    assert!(p < pos, "{year}: term {index} out of order");
                    assert!(pos.0 - p.0 <= 1);
                }
                assert!(day <= gregorian::days_in_month(year, pos.0));
                prev = Some(pos);
            }
        }
    }
}
