// 給下游文字生成器的固定模板；這裡只填欄位，不產生運勢內容

use crate::core::personality::SkillTier;
use crate::domain::model::{FortuneReport, FortuneRequest};

/// Placeholder for an optional field the user left empty.
pub const UNDECIDED: &str = "미정";
/// Rendered in the greeting when no birth time was given.
pub const DEFAULT_BIRTH_TIME: &str = "낮";

fn optional<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}

pub fn assemble(request: &FortuneRequest, report: &FortuneReport) -> String {
    let level = SkillTier::from_handicap(request.handicap).level_label();
    let country_club = optional(request.country_club.as_deref(), UNDECIDED);
    let birth_time = optional(request.birth_time.as_deref(), DEFAULT_BIRTH_TIME);
    let lucky_numbers = report
        .lucky_elements
        .1
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"
당신은 골프의 신 '골신' 할아버지입니다. 100년 넘게 골프를 지켜본 신선으로서, 사용자의 운세를 봐주세요.

=== 사용자 정보 ===
- 이름: {name}
- 생년월일: {birth_date}
- 성별: {gender}
- 핸디캡: {handicap} ({level} 레벨)
- 방문 예정 CC: {country_club}

=== 사주 분석 결과 ===
- 사주: {saju_summary}
- 오행: {element} ({element_name})
- 성격: {personality}
- 골프 스타일: {golf_style}
- 강점: {strengths}
- 약점: {weaknesses}
- 행운 요소: {lucky_colors} / {lucky_numbers}
- 행운의 클럽: {lucky_club}
- 행운의 볼: {lucky_ball}
- 행운의 TPO: {lucky_tpo}

=== 요청사항 ===
골신 할아버지 톤으로 다음 형식에 맞춰 운세를 작성해주세요:

[인사말]
좋네… 자네 {name}의 운세를 보자고 했지?
생년월일 보니, {birth_date}생… {birth_time}에 태어난 {gender}라구? 음, 기운이 뚜렷하네.

:골프를_치는_{gender}: 전반 기류
[올해 골프 운세에 대한 전반적인 이야기 - 3-4문장]

:대체로_맑음: 세부 운세

멘탈 운
[멘탈 관리에 대한 운세 - 2-3문장]

기술 운
[기술적 측면의 운세 - 2-3문장]

체력 운
[체력과 건강에 대한 운세 - 2-3문장]

인맥 운
[인간관계와 동반자에 대한 운세 - 2-3문장]

:골프: 종합
[올해 전체적인 메시지와 조언 - 3-4문장]

[마무리 한줄]
허허, 그러니 너무 조급해 말고… [간단한 조언 한 문장]

=== 작성 규칙 ===
- 할아버지 톤으로 "자네", "~라네", "~구먼", "~걸세" 사용
- 사주 정보를 자연스럽게 언급하면서 운세 설명
- 현실적이면서도 희망적인 조언 제공
- 과도한 확정 표현은 피하고, "~일 걸세", "~할 거라네" 등 사용
- 이모지는 적절히 사용하되 과하지 않게
"#,
        name = request.name,
        birth_date = request.birth_date,
        gender = request.gender,
        handicap = request.handicap,
        level = level,
        country_club = country_club,
        saju_summary = report.saju_summary,
        element = report.element,
        element_name = report.element_name,
        personality = report.personality,
        golf_style = report.golf_style,
        strengths = report.strengths.join(", "),
        weaknesses = report.weaknesses.join(", "),
        lucky_colors = report.lucky_elements.0.join(", "),
        lucky_numbers = lucky_numbers,
        lucky_club = report.lucky_club,
        lucky_ball = report.lucky_ball,
        lucky_tpo = report.lucky_tpo,
        birth_time = birth_time,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fallback::OUTER_FALLBACK_REPORT;

    fn request(country_club: Option<&str>, birth_time: Option<&str>) -> FortuneRequest {
        FortuneRequest {
            name: "Kim".to_string(),
            birth_date: "1990-05-15".to_string(),
            birth_time: birth_time.map(String::from),
            handicap: 15,
            gender: "남자".to_string(),
            country_club: country_club.map(String::from),
        }
    }

    #[test]
    fn test_prompt_renders_user_fields() {
        let prompt = assemble(
            &request(Some("남서울CC"), Some("08:30")),
            &OUTER_FALLBACK_REPORT.to_report(),
        );
        assert!(prompt.contains("- 이름: Kim"));
        assert!(prompt.contains("- 핸디캡: 15 (중급자 레벨)"));
        assert!(prompt.contains("- 방문 예정 CC: 남서울CC"));
        assert!(prompt.contains("1990-05-15생… 08:30에 태어난 남자라구?"));
        assert!(prompt.contains("- 오행: 木 (목(木) - 나무의 기운)"));
        assert!(prompt.contains("- 행운 요소: 파랑 / 1, 6"));
    }

    #[test]
    fn test_missing_optional_fields_use_placeholders() {
        let prompt = assemble(&request(None, None), &OUTER_FALLBACK_REPORT.to_report());
        assert!(prompt.contains("- 방문 예정 CC: 미정"));
        assert!(prompt.contains("낮에 태어난"));

        let prompt = assemble(&request(Some("  "), None), &OUTER_FALLBACK_REPORT.to_report());
        assert!(prompt.contains("- 방문 예정 CC: 미정"));
    }

    #[test]
    fn test_prompt_contains_every_section() {
        let prompt = assemble(&request(None, None), &OUTER_FALLBACK_REPORT.to_report());
        for section in [
            "[인사말]",
            "전반 기류",
            "멘탈 운",
            "기술 운",
            "체력 운",
            "인맥 운",
            ":골프: 종합",
            "[마무리 한줄]",
        ] {
            assert!(prompt.contains(section), "missing section {}", section);
        }
    }

    #[test]
    fn test_prompt_level_labels() {
        let mut req = request(None, None);
        req.handicap = 5;
        assert!(assemble(&req, &OUTER_FALLBACK_REPORT.to_report()).contains("(고급자 레벨)"));
        req.handicap = 28;
        assert!(assemble(&req, &OUTER_FALLBACK_REPORT.to_report()).contains("(초급자 레벨)"));
    }
}
