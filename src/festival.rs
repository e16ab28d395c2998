//! Festival and solar-term labelling.
//!
//! Lookups return an identifier plus a display weight so a consumer can
//! pick the highest-weight label when several apply to one date; the
//! engine itself never arbitrates beyond supplying the weight.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::gregorian::{self, GregorianDate};
use crate::lunisolar::ChineseDate;
use crate::solar_term::{solar_terms_of_month, SolarTerm};

/// A festival or calendar label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Festival {
    // Fixed-date Gregorian festivals.
    NewYearsDay,
    ValentinesDay,
    WomensDay,
    ArborDay,
    AprilFoolsDay,
    LabourDay,
    YouthDay,
    ChildrensDay,
    PartyFoundingDay,
    ArmyDay,
    TeachersDay,
    NationalDay,
    ChristmasEve,
    ChristmasDay,
    // Floating Gregorian festivals, defined by weekday rules.
    MothersDay,
    FathersDay,
    Thanksgiving,
    // Chinese calendar festivals.
    SpringFestival,
    LanternFestival,
    DragonHeadRaisingDay,
    DragonBoatFestival,
    QixiFestival,
    GhostFestival,
    MidAutumnFestival,
    DoubleNinthFestival,
    LabaFestival,
    SpringFestivalEve,
    /// The date is a solar term day.
    SolarTermDay(SolarTerm),
}

/// A resolved label and its display priority. Higher weights win when a
/// consumer must pick one label for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FestivalMatch {
    pub festival: Festival,
    pub weight: u8,
}

const WEIGHT_SOLAR_TERM: u8 = 1;
const WEIGHT_GREGORIAN: u8 = 2;
const WEIGHT_LUNAR: u8 = 3;

struct FixedFestival {
    festival: Festival,
    /// First Gregorian year in which the festival is recognized; matches
    /// before it resolve to nothing.
    since: i32,
}

lazy_static! {
    static ref GREGORIAN_FIXED: HashMap<(u8, u8), FixedFestival> = {
        use Festival::*;
        let mut map = HashMap::new();
        let mut add = |month: u8, day: u8, festival: Festival, since: i32| {
            map.insert((month, day), FixedFestival { festival, since });
        };
        add(1, 1, NewYearsDay, 1912);
        add(2, 14, ValentinesDay, 0);
        add(3, 8, WomensDay, 1924);
        add(3, 12, ArborDay, 1979);
        add(4, 1, AprilFoolsDay, 0);
        add(5, 1, LabourDay, 1949);
        add(5, 4, YouthDay, 1949);
        add(6, 1, ChildrensDay, 1949);
        add(7, 1, PartyFoundingDay, 1941);
        add(8, 1, ArmyDay, 1933);
        add(9, 10, TeachersDay, 1985);
        add(10, 1, NationalDay, 1949);
        add(12, 24, ChristmasEve, 0);
        add(12, 25, ChristmasDay, 0);
        map
    };
}

/// Day of the `n`-th occurrence of `weekday` (Sunday = 0) in a month,
/// given the weekday of the first.
fn nth_weekday_day(first_weekday: u8, n: u8, weekday: u8) -> u8 {
    1 + (weekday + 7 - first_weekday) % 7 + 7 * (n - 1)
}

/// The festival or solar-term label of a Gregorian date, if any.
///
/// Fixed and floating festivals outrank a plain solar-term label; the
/// relative order is carried in [`FestivalMatch::weight`].
///
/// # Examples
///
/// ```
/// use nongli::{gregorian_festival, Festival, GregorianDate};
///
/// let date = GregorianDate::new(2017, 10, 1).unwrap();
/// assert_eq!(
///     Some(Festival::NationalDay),
///     gregorian_festival(date).map(|m| m.festival)
/// );
/// ```
pub fn gregorian_festival(date: GregorianDate) -> Option<FestivalMatch> {
    if let Some(fixed) = GREGORIAN_FIXED.get(&(date.month(), date.day())) {
        if date.year() >= fixed.since {
            return Some(FestivalMatch {
                festival: fixed.festival,
                weight: WEIGHT_GREGORIAN,
            });
        }
    }

    let first_weekday = gregorian::weekday(date.year(), date.month(), 1);
    let floating = match date.month() {
        5 => Some((Festival::MothersDay, nth_weekday_day(first_weekday, 2, 0))),
        6 => Some((Festival::FathersDay, nth_weekday_day(first_weekday, 3, 0))),
        11 => Some((Festival::Thanksgiving, nth_weekday_day(first_weekday, 4, 4))),
        _ => None,
    };
    if let Some((festival, day)) = floating {
        if day == date.day() {
            return Some(FestivalMatch {
                festival,
                weight: WEIGHT_GREGORIAN,
            });
        }
    }

    let (first, second) = solar_terms_of_month(date.year(), date.month())
        .expect("validated date within the tabulated range");
    let index = (date.month() - 1) * 2;
    let term = if date.day() == first {
        SolarTerm::from_index(index)
    } else if date.day() == second {
        SolarTerm::from_index(index + 1)
    } else {
        None
    };
    term.map(|term| FestivalMatch {
        festival: Festival::SolarTermDay(term),
        weight: WEIGHT_SOLAR_TERM,
    })
}

/// The festival of a Chinese calendar date, if any.
///
/// Leap months never host festivals. New Year's Eve is the 29th of a
/// minor 12th month and the 30th of a major one.
///
/// # Examples
///
/// ```
/// use nongli::{chinese_festival, Festival, GregorianDate};
///
/// let date = GregorianDate::new(2017, 1, 27).unwrap().to_chinese().unwrap();
/// assert_eq!(
///     Some(Festival::SpringFestivalEve),
///     chinese_festival(&date).map(|m| m.festival)
/// );
/// ```
pub fn chinese_festival(date: &ChineseDate) -> Option<FestivalMatch> {
    use Festival::*;
    if date.leap() {
        return None;
    }
    if date.month() == 12 && ((date.day() == 29 && !date.major()) || date.day() == 30) {
        return Some(FestivalMatch {
            festival: SpringFestivalEve,
            weight: WEIGHT_LUNAR,
        });
    }
    let festival = match (date.month(), date.day()) {
        (1, 1) => SpringFestival,
        (1, 15) => LanternFestival,
        (2, 2) => DragonHeadRaisingDay,
        (5, 5) => DragonBoatFestival,
        (7, 7) => QixiFestival,
        (7, 15) => GhostFestival,
        (8, 15) => MidAutumnFestival,
        (9, 9) => DoubleNinthFestival,
        (12, 8) => LabaFestival,
        _ => return None,
    };
    Some(FestivalMatch {
        festival,
        weight: WEIGHT_LUNAR,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gregorian(year: i32, month: u8, day: u8) -> Option<Festival> {
        gregorian_festival(GregorianDate::new(year, month, day).unwrap()).map(|m| m.festival)
    }

    fn chinese(year: i32, month: u8, day: u8) -> Option<Festival> {
        let date = GregorianDate::new(year, month, day)
            .unwrap()
            .to_chinese()
            .unwrap();
        chinese_festival(&date).map(|m| m.festival)
    }

    #[test]
    fn fixed_dates() {
        use Festival::*;
        assert_eq!(Some(NewYearsDay), gregorian(2017, 1, 1));
        assert_eq!(Some(ValentinesDay), gregorian(2017, 2, 14));
        assert_eq!(Some(NationalDay), gregorian(2017, 10, 1));
        assert_eq!(Some(ChristmasDay), gregorian(2017, 12, 25));
        assert_eq!(None, gregorian(2017, 3, 15));
    }

    #[test]
    fn recognition_gates() {
        use Festival::*;
        assert_eq!(Some(TeachersDay), gregorian(1985, 9, 10));
        assert_eq!(None, gregorian(1984, 9, 10));
        assert_eq!(Some(NationalDay), gregorian(1949, 10, 1));
        assert_eq!(None, gregorian(1948, 10, 1));
        assert_eq!(None, gregorian(1910, 1, 1));
        assert_eq!(Some(ArmyDay), gregorian(1933, 8, 1));
        assert_eq!(None, gregorian(1932, 8, 1));
    }

    #[test]
    fn floating_dates() {
        use Festival::*;
        // 2017-05-01 is a Monday: second Sunday falls on the 14th.
        assert_eq!(Some(MothersDay), gregorian(2017, 5, 14));
        assert_eq!(None, gregorian(2017, 5, 7));
        // 2022-05-01 is itself a Sunday: second Sunday is the 8th.
        assert_eq!(Some(MothersDay), gregorian(2022, 5, 8));
        assert_eq!(Some(FathersDay), gregorian(2017, 6, 18));
        assert_eq!(Some(Thanksgiving), gregorian(2017, 11, 23));
        assert_eq!(None, gregorian(2017, 11, 16));
    }

    #[test]
    fn solar_term_labels() {
        use SolarTerm::*;
        assert_eq!(
            Some(Festival::SolarTermDay(PureBrightness)),
            gregorian(2017, 4, 4)
        );
        assert_eq!(
            Some(Festival::SolarTermDay(WinterSolstice)),
            gregorian(2017, 12, 22)
        );
        assert_eq!(None, gregorian(2017, 4, 10));
        // A term label is outranked by a festival weight.
        let term = gregorian_festival(GregorianDate::new(2017, 4, 4).unwrap()).unwrap();
        let fest = gregorian_festival(GregorianDate::new(2017, 10, 1).unwrap()).unwrap();
        assert!(term.weight < fest.weight);
    }

    #[test]
    fn lunar_festivals() {
        use Festival::*;
        assert_eq!(Some(SpringFestival), chinese(2017, 1, 28));
        assert_eq!(Some(LanternFestival), chinese(2017, 2, 11));
        assert_eq!(Some(DragonBoatFestival), chinese(2017, 5, 30));
        assert_eq!(Some(MidAutumnFestival), chinese(2017, 10, 4));
        assert_eq!(None, chinese(2017, 10, 5));
    }

    #[test]
    fn new_years_eve_follows_month_length() {
        use Festival::*;
        // 2016's twelfth month is major: the eve is day 30.
        let eve = GregorianDate::new(2017, 1, 27)
            .unwrap()
            .to_chinese()
            .unwrap();
        assert_eq!(30, eve.day());
        assert_eq!(
            Some(SpringFestivalEve),
            chinese_festival(&eve).map(|m| m.festival)
        );
        // 2024's twelfth month is minor: the eve is day 29.
        let eve = GregorianDate::new(2025, 1, 28)
            .unwrap()
            .to_chinese()
            .unwrap();
        assert_eq!(29, eve.day());
        assert!(!eve.major());
        assert_eq!(
            Some(SpringFestivalEve),
            chinese_festival(&eve).map(|m| m.festival)
        );
        // The day before a minor-month eve is nothing.
        assert_eq!(None, chinese(2025, 1, 27));
    }

    #[test]
    fn leap_months_host_no_festivals() {
        // 2009 has a leap fifth month; its fifth day is not Dragon Boat.
        let common = ChineseDate::new(2009, 5, 5, false).unwrap();
        let leap = ChineseDate::new(2009, 5, 5, true).unwrap();
        assert_eq!(
            Some(Festival::DragonBoatFestival),
            chinese_festival(&common).map(|m| m.festival)
        );
        assert_eq!(None, chinese_festival(&leap));
    }
}
