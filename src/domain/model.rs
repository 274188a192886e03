use serde::{Deserialize, Serialize};

/// 外部輸入 (stdin JSON / Lambda event)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneRequest {
    pub name: String,
    pub birth_date: String,
    #[serde(default)]
    pub birth_time: Option<String>,
    pub handicap: i64,
    pub gender: String,
    #[serde(default)]
    pub country_club: Option<String>,
}

/// Fixed UTC offset applied to every birth record (KST).
pub const KST_OFFSET_HOURS: i32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDate {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthTime {
    pub hour: u32,
    pub minute: u32,
}

impl Default for BirthTime {
    fn default() -> Self {
        Self { hour: 12, minute: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthRecord {
    pub name: String,
    pub date: CivilDate,
    pub time: BirthTime,
    pub utc_offset_hours: i32,
}

impl BirthRecord {
    pub fn moment(&self) -> BirthMoment {
        BirthMoment {
            year: self.date.year,
            month: self.date.month,
            day: self.date.day,
            hour: self.time.hour,
            minute: self.time.minute,
            second: 0,
            utc_offset_hours: self.utc_offset_hours,
        }
    }
}

/// Civil local date-time handed to a calendrical resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthMoment {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub utc_offset_hours: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: String,
    pub branch: String,
}

impl Pillar {
    pub fn new(stem: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            branch: branch.into(),
        }
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// 四柱 (年/月/日/時) 與顯示字串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarSet {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub lunar_date: String,
    pub solar_date: String,
    pub summary: String,
}

impl PillarSet {
    pub fn summary_line(year: &Pillar, month: &Pillar, day: &Pillar, hour: &Pillar) -> String {
        format!("{}년 {}월 {}일 {}시", year, month, day, hour)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyItem {
    pub primary: String,
    pub secondary: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GolfProfile {
    pub personality: String,
    pub golf_style: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub lucky_colors: Vec<String>,
    pub lucky_numbers: Vec<u8>,
    pub lucky_club: LuckyItem,
    pub lucky_ball: LuckyItem,
    pub lucky_tpo: LuckyItem,
    pub recommendations: Vec<String>,
    pub element_name: String,
    pub element_description: String,
    pub saju_summary: String,
}

/// 幸運元素：顏色 + 數字，序列化為 `[[colors], [numbers]]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyElements(pub Vec<String>, pub Vec<u8>);

/// 最終輸出；成功與 fallback 共用同一個形狀
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneReport {
    pub element: Element,
    pub day_gan: String,
    pub month_gan: String,
    pub year_gan: String,
    pub day_zhi: String,
    pub hour_gan: String,
    pub hour_zhi: String,
    pub lunar_date: String,
    pub solar_date: String,
    pub personality: String,
    pub golf_style: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub lucky_elements: LuckyElements,
    pub recommendations: Vec<String>,
    pub saju_summary: String,
    pub element_name: String,
    pub element_description: String,
    pub lucky_numbers: Vec<u8>,
    pub lucky_club: String,
    pub lucky_ball: String,
    pub lucky_tpo: String,
}

impl FortuneReport {
    pub fn assemble(element: Element, pillars: &PillarSet, profile: GolfProfile) -> Self {
        Self {
            element,
            day_gan: pillars.day.stem.clone(),
            month_gan: pillars.month.stem.clone(),
            year_gan: pillars.year.stem.clone(),
            day_zhi: pillars.day.branch.clone(),
            hour_gan: pillars.hour.stem.clone(),
            hour_zhi: pillars.hour.branch.clone(),
            lunar_date: pillars.lunar_date.clone(),
            solar_date: pillars.solar_date.clone(),
            personality: profile.personality,
            golf_style: profile.golf_style,
            strengths: profile.strengths,
            weaknesses: profile.weaknesses,
            lucky_elements: LuckyElements(profile.lucky_colors, profile.lucky_numbers.clone()),
            recommendations: profile.recommendations,
            saju_summary: profile.saju_summary,
            element_name: profile.element_name,
            element_description: profile.element_description,
            lucky_numbers: profile.lucky_numbers,
            lucky_club: profile.lucky_club.primary,
            lucky_ball: profile.lucky_ball.primary,
            lucky_tpo: profile.lucky_tpo.primary,
        }
    }
}
