use crate::core::fallback;
use crate::core::tables::{self, BASE_RECOMMENDATIONS};
use crate::domain::model::{Element, GolfProfile};

/// 依差點分級：<10 / <20 / 其餘
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    Expert,
    Intermediate,
    Beginner,
}

impl SkillTier {
    pub fn from_handicap(handicap: i64) -> Self {
        if handicap < 10 {
            SkillTier::Expert
        } else if handicap < 20 {
            SkillTier::Intermediate
        } else {
            SkillTier::Beginner
        }
    }

    /// Label used inside the personality string.
    pub fn label(&self) -> &'static str {
        match self {
            SkillTier::Expert => "전문가급",
            SkillTier::Intermediate => "중급자",
            SkillTier::Beginner => "초보자",
        }
    }

    /// Label used by the narrative prompt.
    pub fn level_label(&self) -> &'static str {
        match self {
            SkillTier::Expert => "고급자",
            SkillTier::Intermediate => "중급자",
            SkillTier::Beginner => "초급자",
        }
    }

    pub fn recommendations(&self) -> [&'static str; 2] {
        match self {
            SkillTier::Expert => ["고급 기술을 연습하세요", "경기 전략을 연구하세요"],
            SkillTier::Intermediate => ["특정 클럽의 정확도를 높이세요", "멘탈 게임을 연습하세요"],
            SkillTier::Beginner => ["기본기 연습에 집중하세요", "단계별로 실력을 향상시키세요"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const MALE_TAG: &'static str = "남자";
    pub const FEMALE_TAG: &'static str = "여자";

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            Self::MALE_TAG => Some(Gender::Male),
            Self::FEMALE_TAG => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "남성적",
            Gender::Female => "여성적",
        }
    }
}

pub fn recommendations(element: Element, tier: SkillTier) -> Vec<String> {
    BASE_RECOMMENDATIONS
        .iter()
        .chain(tables::element_recommendations(element).iter())
        .chain(tier.recommendations().iter())
        .map(|r| r.to_string())
        .collect()
}

/// Pure function of (element, handicap, gender); `saju_summary` is carried
/// through unchanged from the pillar set.
pub fn synthesize(element: Element, handicap: i64, gender: &str, saju_summary: &str) -> GolfProfile {
    let profile = fallback::resolve_profile(element);
    let tier = SkillTier::from_handicap(handicap);
    let gender = fallback::resolve_gender(gender);

    tracing::debug!(
        "Synthesizing golf profile: element={}, tier={:?}, gender={:?}",
        element,
        tier,
        gender
    );

    let to_strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    GolfProfile {
        personality: format!("{} ({}, {})", profile.style, tier.label(), gender.label()),
        golf_style: profile.style.to_string(),
        strengths: to_strings(&profile.strengths),
        weaknesses: to_strings(&profile.weaknesses),
        lucky_colors: to_strings(&profile.lucky_colors),
        lucky_numbers: profile.lucky_numbers.to_vec(),
        lucky_club: profile.lucky_club.to_item(),
        lucky_ball: profile.lucky_ball.to_item(),
        lucky_tpo: profile.lucky_tpo.to_item(),
        recommendations: recommendations(profile.element, tier),
        element_name: tables::element_name(profile.element).to_string(),
        element_description: tables::element_description(profile.element).to_string(),
        saju_summary: saju_summary.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_tier_breakpoints() {
        assert_eq!(SkillTier::from_handicap(9), SkillTier::Expert);
        assert_eq!(SkillTier::from_handicap(10), SkillTier::Intermediate);
        assert_eq!(SkillTier::from_handicap(19), SkillTier::Intermediate);
        assert_eq!(SkillTier::from_handicap(20), SkillTier::Beginner);
    }

    #[test]
    fn test_skill_tier_does_not_clamp_extremes() {
        assert_eq!(SkillTier::from_handicap(-5), SkillTier::Expert);
        assert_eq!(SkillTier::from_handicap(i64::MIN), SkillTier::Expert);
        assert_eq!(SkillTier::from_handicap(500), SkillTier::Beginner);
    }

    #[test]
    fn test_recommendations_are_ordered_and_complete() {
        for element in Element::ALL {
            for handicap in [0, 15, 30] {
                let tier = SkillTier::from_handicap(handicap);
                let recs = recommendations(element, tier);
                assert_eq!(recs.len(), 7);
                assert_eq!(recs[..3], BASE_RECOMMENDATIONS.map(String::from));
                assert_eq!(recs[3..5], tables::element_recommendations(element).map(String::from));
                assert_eq!(recs[5..], tier.recommendations().map(String::from));
            }
        }
    }

    #[test]
    fn test_personality_combines_style_tier_and_gender() {
        let profile = synthesize(Element::Wood, 15, "남자", "summary");
        assert_eq!(profile.personality, "공격적이고 도전적 (중급자, 남성적)");

        let profile = synthesize(Element::Water, 3, "여자", "summary");
        assert_eq!(profile.personality, "유연하고 적응력 좋음 (전문가급, 여성적)");
    }

    #[test]
    fn test_unrecognized_gender_is_treated_as_female() {
        let other = synthesize(Element::Fire, 25, "other", "s");
        let female = synthesize(Element::Fire, 25, "여자", "s");
        assert_eq!(other, female);
        assert!(other.personality.ends_with("(초보자, 여성적)"));
    }

    #[test]
    fn test_profile_fields_come_from_element_tables() {
        let profile = synthesize(Element::Metal, 12, "남자", "庚午년 辛巳월 庚辰일 庚辰시");
        assert_eq!(profile.golf_style, "정확하고 완벽주의");
        assert_eq!(profile.strengths, vec!["아이언", "샌드웨지"]);
        assert_eq!(profile.weaknesses, vec!["드라이버", "유연성"]);
        assert_eq!(profile.lucky_colors, vec!["흰색", "금색"]);
        assert_eq!(profile.lucky_numbers, vec![4, 9]);
        assert_eq!(profile.lucky_club.primary, "샌드웨지");
        assert_eq!(profile.lucky_ball.secondary, "금색 볼");
        assert_eq!(profile.element_name, "금(金) - 쇠의 기운");
        assert_eq!(profile.saju_summary, "庚午년 辛巳월 庚辰일 庚辰시");
    }
}
