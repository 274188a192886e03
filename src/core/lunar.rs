//! 農曆 conversion for solar dates between 1900-01-31 (lunar 1900 正月初一)
//! and the end of lunar year 2100.

use crate::utils::error::{FortuneError, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;

pub const FIRST_LUNAR_YEAR: i32 = 1900;
pub const LAST_LUNAR_YEAR: i32 = 2100;

/// `num_days_from_ce` of 1900-01-31
const EPOCH_DAYS_FROM_CE: i32 = 693_626;

/// One entry per lunar year. Bits 15..4 mark months 1..12 with 30 days
/// (clear = 29), bits 3..0 hold the leap month (0 = none) and bit 16 marks
/// a 30-day leap month.
#[rustfmt::skip]
static MONTH_TABLE: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520, // 2100
];

const DIGITS: [&str; 10] = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

#[rustfmt::skip]
const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct YearInfo(u32);

impl YearInfo {
    fn of(year: i32) -> Result<Self> {
        usize::try_from(year - FIRST_LUNAR_YEAR)
            .ok()
            .and_then(|index| MONTH_TABLE.get(index))
            .map(|bits| Self(*bits))
            .ok_or_else(|| FortuneError::CalendricalResolution {
                message: format!(
                    "lunar year {} is outside the supported range {}-{}",
                    year, FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR
                ),
            })
    }

    fn leap_month(self) -> u32 {
        self.0 & 0xf
    }

    fn leap_days(self) -> i64 {
        match (self.leap_month(), self.0 & 0x10000) {
            (0, _) => 0,
            (_, 0) => 29,
            _ => 30,
        }
    }

    fn month_days(self, month: u32) -> i64 {
        if self.0 & (0x10000 >> month) != 0 {
            30
        } else {
            29
        }
    }

    fn year_days(self) -> i64 {
        (1..=12).map(|m| self.month_days(m)).sum::<i64>() + self.leap_days()
    }
}

/// A date on the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap_month: bool,
}

impl LunarDate {
    pub fn from_solar(date: NaiveDate) -> Result<Self> {
        let mut offset = i64::from(date.num_days_from_ce() - EPOCH_DAYS_FROM_CE);
        if offset < 0 {
            return Err(FortuneError::CalendricalResolution {
                message: format!("{} precedes the first supported lunar year", date),
            });
        }

        let mut year = FIRST_LUNAR_YEAR;
        let mut info = YearInfo::of(year)?;
        while offset >= info.year_days() {
            offset -= info.year_days();
            year += 1;
            info = YearInfo::of(year)?;
        }

        let day_of = |offset: i64| offset as u32 + 1;
        for month in 1..=12 {
            let days = info.month_days(month);
            if offset < days {
                return Ok(Self {
                    year,
                    month,
                    day: day_of(offset),
                    is_leap_month: false,
                });
            }
            offset -= days;

            // 閏月緊接在同名月之後
            if month == info.leap_month() {
                let days = info.leap_days();
                if offset < days {
                    return Ok(Self {
                        year,
                        month,
                        day: day_of(offset),
                        is_leap_month: true,
                    });
                }
                offset -= days;
            }
        }

        Err(FortuneError::CalendricalResolution {
            message: format!("lunar year {} has fewer days than expected", year),
        })
    }
}

impl fmt::Display for LunarDate {
    /// `一九九〇年四月廿一`, `二〇二三年闰二月初一`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.year.to_string().chars().filter_map(|c| c.to_digit(10)) {
            f.write_str(DIGITS[digit as usize])?;
        }
        f.write_str("年")?;
        if self.is_leap_month {
            f.write_str("闰")?;
        }
        write!(
            f,
            "{}月{}",
            MONTH_NAMES[(self.month - 1) as usize],
            DAY_NAMES[(self.day - 1) as usize]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunar(year: i32, month: u32, day: u32) -> Result<LunarDate> {
        LunarDate::from_solar(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    fn render(year: i32, month: u32, day: u32) -> String {
        lunar(year, month, day).unwrap().to_string()
    }

    #[test]
    fn test_table_covers_every_supported_year() {
        assert_eq!(
            MONTH_TABLE.len() as i32,
            LAST_LUNAR_YEAR - FIRST_LUNAR_YEAR + 1
        );
        for year in FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR {
            let days = YearInfo::of(year).unwrap().year_days();
            assert!((353..=385).contains(&days), "{} has {} days", year, days);
        }
    }

    #[test]
    fn test_reference_birth_renders_lunar_date() {
        let date = lunar(1990, 5, 15).unwrap();
        assert_eq!(
            date,
            LunarDate {
                year: 1990,
                month: 4,
                day: 21,
                is_leap_month: false
            }
        );
        assert_eq!(date.to_string(), "一九九〇年四月廿一");
    }

    #[test]
    fn test_lunar_year_ends_at_new_year_not_lichun() {
        // 2024 立春 is Feb 4, 春節 is Feb 10
        assert_eq!(render(2024, 2, 5), "二〇二三年腊月廿六");
        assert_eq!(render(2024, 2, 9), "二〇二三年腊月三十");
        assert_eq!(render(2024, 2, 10), "二〇二四年正月初一");
        assert_eq!(render(2024, 1, 1), "二〇二三年冬月二十");
    }

    #[test]
    fn test_leap_months() {
        assert_eq!(render(2023, 3, 21), "二〇二三年二月三十");
        assert_eq!(render(2023, 3, 22), "二〇二三年闰二月初一");
        assert_eq!(render(2023, 4, 20), "二〇二三年三月初一");
        assert_eq!(render(2020, 5, 23), "二〇二〇年闰四月初一");
        assert_eq!(render(2033, 12, 22), "二〇三三年闰冬月初一");
    }

    #[test]
    fn test_supported_range() {
        assert_eq!(render(1900, 1, 31), "一九〇〇年正月初一");
        assert!(lunar(2100, 12, 31).is_ok());
        assert!(matches!(
            lunar(1900, 1, 30),
            Err(FortuneError::CalendricalResolution { .. })
        ));
        assert!(matches!(
            lunar(2101, 6, 1),
            Err(FortuneError::CalendricalResolution { .. })
        ));
    }
}
