//! Sexagenary (干支) four-pillar resolution.
//!
//! The day pillar comes from the Julian Day Number of the civil date, the
//! month pillar from the sun's apparent longitude (節氣 boundaries every 30°
//! starting at 立春 = 315°), the year pillar from the civil year shifted back
//! before 立春, and the hour pillar from the two-hour 時辰 blocks. The lunar
//! display date comes from [`LunarDate`].

use crate::core::fallback::INNER_FALLBACK_PILLARS;
use crate::core::lunar::LunarDate;
use crate::domain::model::{BirthMoment, Pillar, PillarSet};
use crate::domain::ports::CalendricalResolver;
use crate::utils::error::{FortuneError, Result};
use chrono::{Datelike, NaiveDate, NaiveTime};

/// 天干
pub const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 地支
pub const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Solar longitude of 立春, where the 寅 month and the sexagenary year begin.
const LICHUN_LONGITUDE: f64 = 315.0;

/// 0..60 position in the sexagenary cycle (0 = 甲子).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CycleIndex {
    stem: usize,
    branch: usize,
}

impl CycleIndex {
    fn from_cycle(index: i64) -> Self {
        let index = index.rem_euclid(60) as usize;
        Self {
            stem: index % 10,
            branch: index % 12,
        }
    }

    fn from_parts(stem: usize, branch: usize) -> Self {
        Self {
            stem: stem % 10,
            branch: branch % 12,
        }
    }

    fn to_pillar(self) -> Pillar {
        Pillar::new(STEMS[self.stem], BRANCHES[self.branch])
    }
}

/// Convert a Gregorian date to Julian Day Number (JDN)
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Apparent geocentric solar longitude in degrees for a Julian Date
/// (low-precision solar coordinates, accurate to roughly 0.01°).
pub fn solar_longitude(julian_date: f64) -> f64 {
    let t = (julian_date - 2451545.0) / 36525.0;
    let mean_longitude = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let mean_anomaly = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * mean_anomaly.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * mean_anomaly).sin()
        + 0.000289 * (3.0 * mean_anomaly).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = mean_longitude + center - 0.00569 - 0.00478 * omega.sin();
    apparent.rem_euclid(360.0)
}

/// Built-in resolver based on sexagenary arithmetic. Supports solar dates
/// from 1900-01-31 through 2100.
#[derive(Debug, Clone, Copy, Default)]
pub struct SexagenaryResolver;

impl SexagenaryResolver {
    pub fn new() -> Self {
        Self
    }

    /// Checks the moment and returns its civil date.
    fn validate(moment: &BirthMoment) -> Result<NaiveDate> {
        if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&moment.year) {
            return Err(FortuneError::CalendricalResolution {
                message: format!(
                    "year {} is outside the supported range {}-{}",
                    moment.year, MIN_YEAR, MAX_YEAR
                ),
            });
        }

        let date = match (
            i32::try_from(moment.year),
            u32::try_from(moment.month),
            u32::try_from(moment.day),
        ) {
            (Ok(year), Ok(month), Ok(day)) => NaiveDate::from_ymd_opt(year, month, day),
            _ => None,
        }
        .ok_or_else(|| FortuneError::CalendricalResolution {
            message: format!(
                "invalid civil date {:04}-{:02}-{:02}",
                moment.year, moment.month, moment.day
            ),
        })?;

        NaiveTime::from_hms_opt(moment.hour, moment.minute, moment.second).ok_or_else(|| {
            FortuneError::CalendricalResolution {
                message: format!(
                    "invalid time {:02}:{:02}:{:02}",
                    moment.hour, moment.minute, moment.second
                ),
            }
        })?;

        Ok(date)
    }

    /// Months elapsed since 立春 (0 = 寅 ... 11 = 丑).
    fn month_offset(jdn: i64, moment: &BirthMoment) -> usize {
        let local_hours =
            moment.hour as f64 + moment.minute as f64 / 60.0 + moment.second as f64 / 3600.0;
        let universal_hours = local_hours - moment.utc_offset_hours as f64;
        let julian_date = jdn as f64 - 0.5 + universal_hours / 24.0;
        let since_lichun = (solar_longitude(julian_date) - LICHUN_LONGITUDE).rem_euclid(360.0);
        ((since_lichun / 30.0) as usize).min(11)
    }
}

impl CalendricalResolver for SexagenaryResolver {
    fn resolve(&self, moment: &BirthMoment) -> Result<PillarSet> {
        let date = Self::validate(moment)?;
        let lunar = LunarDate::from_solar(date)?;

        let jdn = gregorian_to_jdn(date.year(), date.month(), date.day());
        let month_offset = Self::month_offset(jdn, moment);

        // 1-2월이라도 입춘 전(子/丑월)이면 전년도 간지
        let sexagenary_year = if date.month() <= 2 && month_offset >= 10 {
            date.year() - 1
        } else {
            date.year()
        };
        let year = CycleIndex::from_cycle(sexagenary_year as i64 - 4);

        // 五虎遁
        let month = CycleIndex::from_parts(year.stem * 2 + 2 + month_offset, month_offset + 2);

        let day = CycleIndex::from_cycle(jdn + 49);

        // 五鼠遁; the 23:00 block already belongs to the next day's stem
        let hour_branch = ((moment.hour as usize + 1) / 2) % 12;
        let hour_day_stem = if moment.hour == 23 {
            (day.stem + 1) % 10
        } else {
            day.stem
        };
        let hour = CycleIndex::from_parts(hour_day_stem % 5 * 2 + hour_branch, hour_branch);

        let (year, month, day, hour) = (
            year.to_pillar(),
            month.to_pillar(),
            day.to_pillar(),
            hour.to_pillar(),
        );

        let lunar_date = lunar.to_string();
        let solar_date = date.format("%Y-%m-%d").to_string();
        let summary = PillarSet::summary_line(&year, &month, &day, &hour);

        tracing::debug!("Resolved four pillars: {}", summary);

        Ok(PillarSet {
            year,
            month,
            day,
            hour,
            lunar_date,
            solar_date,
            summary,
        })
    }
}

/// Inner fallback layer: a failed resolution degrades to the fixed default
/// pillar set, which remains classifiable downstream.
pub fn resolve_or_default<R: CalendricalResolver + ?Sized>(
    resolver: &R,
    moment: &BirthMoment,
) -> PillarSet {
    match resolver.resolve(moment) {
        Ok(pillars) => pillars,
        Err(e) => {
            tracing::warn!("⚠️ 사주 계산 오류: {} - using default pillars", e);
            INNER_FALLBACK_PILLARS.to_pillar_set()
        }
    }
}
