use crate::core::calendar::{resolve_or_default, SexagenaryResolver};
use crate::core::fallback::OUTER_FALLBACK_REPORT;
use crate::core::{element, normalize, personality, prompt};
use crate::domain::model::{FortuneReport, FortuneRequest};
use crate::domain::ports::CalendricalResolver;
use crate::utils::error::{FortuneError, Result};

/// Top-level request handler. Every public entry point returns a complete
/// report; failures end up as [`OUTER_FALLBACK_REPORT`].
pub struct FortuneEngine<R: CalendricalResolver> {
    resolver: R,
}

impl Default for FortuneEngine<SexagenaryResolver> {
    fn default() -> Self {
        Self::new(SexagenaryResolver::new())
    }
}

impl<R: CalendricalResolver> FortuneEngine<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn try_analyze(&self, request: &FortuneRequest) -> Result<FortuneReport> {
        let record = normalize::normalize(request)?;

        let pillars = resolve_or_default(&self.resolver, &record.moment());
        let element = element::classify(&pillars.day.stem);
        let profile =
            personality::synthesize(element, request.handicap, &request.gender, &pillars.summary);

        tracing::info!("🔮 {} → {} ({})", pillars.summary, element, profile.personality);
        Ok(FortuneReport::assemble(element, &pillars, profile))
    }

    pub fn analyze(&self, request: &FortuneRequest) -> FortuneReport {
        self.try_analyze(request).unwrap_or_else(|e| Self::fallback(&e))
    }

    /// Parses and analyzes a raw JSON request.
    pub fn analyze_json(&self, raw: &str) -> FortuneReport {
        self.analyze_value(serde_json::from_str(raw))
    }

    pub fn analyze_value(
        &self,
        request: std::result::Result<FortuneRequest, serde_json::Error>,
    ) -> FortuneReport {
        match request {
            Ok(request) => self.analyze(&request),
            Err(e) => Self::fallback(&FortuneError::from(e)),
        }
    }

    /// Analyzes the request and renders the generator prompt alongside it.
    pub fn analyze_with_prompt(&self, request: &FortuneRequest) -> (FortuneReport, String) {
        let report = self.analyze(request);
        let prompt = prompt::assemble(request, &report);
        (report, prompt)
    }

    fn fallback(error: &FortuneError) -> FortuneReport {
        tracing::error!(
            "❌ 사주 계산 오류: {} (Category: {:?})",
            error,
            error.category()
        );
        OUTER_FALLBACK_REPORT.to_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BirthMoment, Element, PillarSet};

    struct FailingResolver;

    impl CalendricalResolver for FailingResolver {
        fn resolve(&self, _moment: &BirthMoment) -> Result<PillarSet> {
            Err(FortuneError::CalendricalResolution {
                message: "unavailable".to_string(),
            })
        }
    }

    fn request(birth_date: &str) -> FortuneRequest {
        FortuneRequest {
            name: "Kim".to_string(),
            birth_date: birth_date.to_string(),
            birth_time: Some("08:30".to_string()),
            handicap: 15,
            gender: "남자".to_string(),
            country_club: None,
        }
    }

    #[test]
    fn test_resolver_failure_uses_inner_layer() {
        let engine = FortuneEngine::new(FailingResolver);
        let report = engine.try_analyze(&request("1990-05-15")).unwrap();
        assert_eq!(report.element, Element::Wood);
        assert_eq!(report.lunar_date, "계산 오류");
        assert_eq!(report.recommendations.len(), 7);
        assert_eq!(report.personality, "공격적이고 도전적 (중급자, 남성적)");
    }

    #[test]
    fn test_format_errors_reach_outer_layer() {
        let engine = FortuneEngine::default();
        assert!(matches!(
            engine.try_analyze(&request("2024/05/01")),
            Err(FortuneError::InvalidDateFormat { .. })
        ));
        assert_eq!(
            engine.analyze(&request("2024/05/01")),
            OUTER_FALLBACK_REPORT.to_report()
        );
    }

    #[test]
    fn test_unparseable_json_reaches_outer_layer() {
        let engine = FortuneEngine::default();
        assert_eq!(engine.analyze_json("not json"), OUTER_FALLBACK_REPORT.to_report());
        assert_eq!(
            engine.analyze_json(r#"{"name":"Kim","birthDate":"1990-05-15","handicap":"high","gender":"남자"}"#),
            OUTER_FALLBACK_REPORT.to_report()
        );
    }

    #[test]
    fn test_prompt_is_rendered_from_report() {
        let engine = FortuneEngine::default();
        let (report, prompt) = engine.analyze_with_prompt(&request("1990-05-15"));
        assert!(prompt.contains(&report.saju_summary));
        assert!(prompt.contains(&report.personality));
    }
}
