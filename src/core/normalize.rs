use crate::domain::model::{BirthRecord, BirthTime, CivilDate, FortuneRequest, KST_OFFSET_HOURS};
use crate::utils::error::{FortuneError, Result};

/// 生時未輸入時前端送來的值
pub const TIME_NOT_ENTERED: &str = "미입력";

/// Parses `YYYY.MM.DD` or `YYYY-MM-DD`. Only the format is checked here;
/// any integer component is accepted and calendar validity is left to the
/// resolver.
pub fn parse_date(raw: &str) -> Result<CivilDate> {
    let delimiter = if raw.contains('.') { '.' } else { '-' };
    let invalid = || FortuneError::InvalidDateFormat {
        raw: raw.to_string(),
    };

    let parts: Vec<&str> = raw.split(delimiter).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(invalid());
    };

    Ok(CivilDate {
        year: year.parse().map_err(|_| invalid())?,
        month: month.parse().map_err(|_| invalid())?,
        day: day.parse().map_err(|_| invalid())?,
    })
}

/// Parses `HH:MM`; absent, empty or `미입력` means noon.
pub fn parse_time(raw: Option<&str>) -> Result<BirthTime> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(BirthTime::default()),
        Some(value) if value.to_lowercase() == TIME_NOT_ENTERED => {
            return Ok(BirthTime::default())
        }
        Some(value) => value,
    };

    let invalid = || FortuneError::InvalidTimeFormat {
        raw: raw.to_string(),
    };

    let (hour, minute) = raw.split_once(':').ok_or_else(invalid)?;
    Ok(BirthTime {
        hour: hour.trim().parse().map_err(|_| invalid())?,
        minute: minute.trim().parse().map_err(|_| invalid())?,
    })
}

pub fn normalize(request: &FortuneRequest) -> Result<BirthRecord> {
    let date = parse_date(&request.birth_date)?;
    let time = parse_time(request.birth_time.as_deref())?;

    tracing::debug!(
        "Normalized birth record: {:04}-{:02}-{:02} {:02}:{:02}",
        date.year,
        date.month,
        date.day,
        time.hour,
        time.minute
    );

    Ok(BirthRecord {
        name: request.name.clone(),
        date,
        time,
        utc_offset_hours: KST_OFFSET_HOURS,
    })
}
