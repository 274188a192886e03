//! Fixed values substituted when a stage cannot produce its own.
//!
//! There are two independent layers and they are intentionally kept as two
//! separately authored records:
//!
//! * [`INNER_FALLBACK_PILLARS`] replaces a failed calendrical resolution. The
//!   rest of the pipeline still runs on it.
//! * [`OUTER_FALLBACK_REPORT`] replaces the whole report when the request
//!   handler catches any other failure.
//!
//! The two records do not agree on every field (e.g. `lunar_date`). Keep it
//! that way until someone confirms which one is correct.

use crate::core::calendar::{BRANCHES, STEMS};
use crate::core::element;
use crate::core::personality::Gender;
use crate::core::tables::{ElementProfile, ELEMENT_PROFILES};
use crate::domain::model::{Element, FortuneReport, LuckyElements, Pillar, PillarSet};

pub const DEFAULT_ELEMENT: Element = Element::Wood;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultPillars {
    pub stem: &'static str,
    pub branch: &'static str,
    pub lunar_date: &'static str,
    pub solar_date: &'static str,
    pub summary: &'static str,
}

impl DefaultPillars {
    pub fn to_pillar_set(&self) -> PillarSet {
        let pillar = || Pillar::new(self.stem, self.branch);
        PillarSet {
            year: pillar(),
            month: pillar(),
            day: pillar(),
            hour: pillar(),
            lunar_date: self.lunar_date.to_string(),
            solar_date: self.solar_date.to_string(),
            summary: self.summary.to_string(),
        }
    }
}

pub const INNER_FALLBACK_PILLARS: DefaultPillars = DefaultPillars {
    stem: STEMS[0],
    branch: BRANCHES[0],
    lunar_date: "계산 오류",
    solar_date: "계산 오류",
    summary: "사주 계산 실패",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackReport {
    pub element: Element,
    pub stem: &'static str,
    pub branch: &'static str,
    pub lunar_date: &'static str,
    pub solar_date: &'static str,
    pub personality: &'static str,
    pub golf_style: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub lucky_colors: &'static [&'static str],
    pub lucky_numbers: &'static [u8],
    pub recommendations: &'static [&'static str],
    pub saju_summary: &'static str,
    pub element_name: &'static str,
    pub element_description: &'static str,
    pub lucky_club: &'static str,
    pub lucky_ball: &'static str,
    pub lucky_tpo: &'static str,
}

impl FallbackReport {
    pub fn to_report(&self) -> FortuneReport {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        FortuneReport {
            element: self.element,
            day_gan: self.stem.to_string(),
            month_gan: self.stem.to_string(),
            year_gan: self.stem.to_string(),
            day_zhi: self.branch.to_string(),
            hour_gan: self.stem.to_string(),
            hour_zhi: self.branch.to_string(),
            lunar_date: self.lunar_date.to_string(),
            solar_date: self.solar_date.to_string(),
            personality: self.personality.to_string(),
            golf_style: self.golf_style.to_string(),
            strengths: strings(self.strengths),
            weaknesses: strings(self.weaknesses),
            lucky_elements: LuckyElements(strings(self.lucky_colors), self.lucky_numbers.to_vec()),
            recommendations: strings(self.recommendations),
            saju_summary: self.saju_summary.to_string(),
            element_name: self.element_name.to_string(),
            element_description: self.element_description.to_string(),
            lucky_numbers: self.lucky_numbers.to_vec(),
            lucky_club: self.lucky_club.to_string(),
            lucky_ball: self.lucky_ball.to_string(),
            lucky_tpo: self.lucky_tpo.to_string(),
        }
    }
}

pub const OUTER_FALLBACK_REPORT: FallbackReport = FallbackReport {
    element: Element::Wood,
    stem: "甲",
    branch: "子",
    lunar_date: "오류",
    solar_date: "오류",
    personality: "활발하고 도전적",
    golf_style: "균형적",
    strengths: &["드라이버"],
    weaknesses: &["퍼팅"],
    lucky_colors: &["파랑"],
    lucky_numbers: &[1, 6],
    recommendations: &["충분한 워밍업을 하세요"],
    saju_summary: "사주 계산 실패",
    element_name: "목(木) - 나무의 기운",
    element_description: "성장과 발전의 기운으로, 새로운 도전과 확장을 의미합니다.",
    lucky_club: "드라이버",
    lucky_ball: "초록색 볼",
    lucky_tpo: "초록색 골프웨어",
};

pub fn resolve_element(stem: &str) -> Element {
    element::lookup(stem).unwrap_or_else(|| {
        tracing::debug!("Unknown day stem '{}', defaulting to {}", stem, DEFAULT_ELEMENT);
        DEFAULT_ELEMENT
    })
}

pub fn resolve_gender(tag: &str) -> Gender {
    Gender::from_tag(tag).unwrap_or_else(|| {
        tracing::debug!("Unrecognized gender tag '{}', treating as {}", tag, Gender::FEMALE_TAG);
        Gender::Female
    })
}

pub fn resolve_profile(element: Element) -> &'static ElementProfile {
    ELEMENT_PROFILES
        .iter()
        .find(|profile| profile.element == element)
        .unwrap_or(&ELEMENT_PROFILES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_fallback_uses_first_canonical_symbols() {
        let pillars = INNER_FALLBACK_PILLARS.to_pillar_set();
        for pillar in [&pillars.year, &pillars.month, &pillars.day, &pillars.hour] {
            assert_eq!(pillar.stem, "甲");
            assert_eq!(pillar.branch, "子");
        }
        assert_eq!(pillars.lunar_date, "계산 오류");
        assert_eq!(pillars.summary, "사주 계산 실패");
        assert_eq!(element::classify(&pillars.day.stem), Element::Wood);
    }

    #[test]
    fn test_outer_fallback_report_values() {
        let report = OUTER_FALLBACK_REPORT.to_report();
        assert_eq!(report.element, Element::Wood);
        assert_eq!(report.lunar_date, "오류");
        assert_eq!(report.solar_date, "오류");
        assert_eq!(report.personality, "활발하고 도전적");
        assert_eq!(report.golf_style, "균형적");
        assert_eq!(report.strengths, vec!["드라이버"]);
        assert_eq!(report.recommendations, vec!["충분한 워밍업을 하세요"]);
        assert_eq!(
            report.lucky_elements,
            LuckyElements(vec!["파랑".to_string()], vec![1, 6])
        );
    }

    #[test]
    fn test_layers_are_not_unified() {
        let inner = INNER_FALLBACK_PILLARS.to_pillar_set();
        let outer = OUTER_FALLBACK_REPORT.to_report();
        assert_ne!(inner.lunar_date, outer.lunar_date);
        assert_eq!(inner.summary, outer.saju_summary);
    }

    #[test]
    fn test_resolvers_never_fail() {
        assert_eq!(resolve_element("?"), Element::Wood);
        assert_eq!(resolve_gender("unknown"), Gender::Female);
        assert_eq!(resolve_gender("남자"), Gender::Male);
        for element in Element::ALL {
            assert_eq!(resolve_profile(element).element, element);
        }
    }
}
