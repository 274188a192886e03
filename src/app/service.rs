use crate::core::calendar::SexagenaryResolver;
use crate::core::engine::FortuneEngine;
use crate::core::submission::SubmissionLog;
use crate::core::{prompt, ConfigProvider, FortuneReport, FortuneRequest, Storage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneResponse {
    pub profile: FortuneReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// Host-facing request handler shared by the CLI and Lambda entry points.
/// Side effects (submission log, prompt file) never change the profile.
pub struct FortuneService<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    engine: FortuneEngine<SexagenaryResolver>,
}

impl<S: Storage, C: ConfigProvider> FortuneService<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            engine: FortuneEngine::default(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub async fn handle_json(&self, raw: &str) -> FortuneResponse {
        self.handle_parsed(serde_json::from_str(raw)).await
    }

    pub async fn handle_value(&self, value: serde_json::Value) -> FortuneResponse {
        self.handle_parsed(serde_json::from_value(value)).await
    }

    async fn handle_parsed(
        &self,
        request: std::result::Result<FortuneRequest, serde_json::Error>,
    ) -> FortuneResponse {
        match request {
            Ok(request) => self.handle(&request).await,
            Err(e) => FortuneResponse {
                profile: self.engine.analyze_value(Err(e)),
                prompt: None,
            },
        }
    }

    pub async fn handle(&self, request: &FortuneRequest) -> FortuneResponse {
        tracing::info!("📥 Fortune request for {}", request.name);

        if let Some(path) = self.config.submissions_file() {
            SubmissionLog::new(&self.storage, path).record(request).await;
        }

        let profile = self.engine.analyze(request);
        let prompt = prompt::assemble(request, &profile);

        if let Some(prompt_file) = self.config.prompt_file() {
            match self.storage.write_file(prompt_file, prompt.as_bytes()).await {
                Ok(()) => tracing::info!("📁 Prompt saved to: {}", prompt_file),
                Err(e) => tracing::warn!("⚠️ Failed to write prompt to {}: {}", prompt_file, e),
            }
        }

        FortuneResponse {
            profile,
            prompt: Some(prompt),
        }
    }

    pub fn render(&self, report: &FortuneReport) -> serde_json::Result<String> {
        if self.config.pretty_output() {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use crate::core::fallback::OUTER_FALLBACK_REPORT;
    use tempfile::TempDir;

    struct TestConfig {
        prompt_file: Option<String>,
        submissions: Option<String>,
    }

    impl ConfigProvider for TestConfig {
        fn output_dir(&self) -> &str {
            "."
        }

        fn pretty_output(&self) -> bool {
            false
        }

        fn prompt_file(&self) -> Option<&str> {
            self.prompt_file.as_deref()
        }

        fn submissions_file(&self) -> Option<&str> {
            self.submissions.as_deref()
        }
    }

    const KIM: &str = r#"{"name":"Kim","birthDate":"1990-05-15","birthTime":"08:30","handicap":15,"gender":"남자"}"#;

    #[tokio::test]
    async fn test_handle_writes_prompt_and_submission() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let config = TestConfig {
            prompt_file: Some("prompt.txt".to_string()),
            submissions: Some("user_data.csv".to_string()),
        };
        let service = FortuneService::new(storage, config);

        let response = service.handle_json(KIM).await;

        let prompt = std::fs::read_to_string(temp_dir.path().join("prompt.txt")).unwrap();
        assert_eq!(Some(prompt), response.prompt);
        let log = std::fs::read_to_string(temp_dir.path().join("user_data.csv")).unwrap();
        assert!(log.contains("Kim,1990-05-15,08:30,남자,15,"));
    }

    #[tokio::test]
    async fn test_bad_json_returns_fallback_without_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let config = TestConfig {
            prompt_file: Some("prompt.txt".to_string()),
            submissions: Some("user_data.csv".to_string()),
        };
        let service = FortuneService::new(storage, config);

        let response = service.handle_json("{").await;

        assert_eq!(response.profile, OUTER_FALLBACK_REPORT.to_report());
        assert!(response.prompt.is_none());
        assert!(!temp_dir.path().join("prompt.txt").exists());
        assert!(!temp_dir.path().join("user_data.csv").exists());
    }

    #[tokio::test]
    async fn test_handle_value_matches_handle_json() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let service = FortuneService::new(
            storage,
            TestConfig {
                prompt_file: None,
                submissions: None,
            },
        );

        let from_json = service.handle_json(KIM).await;
        let value: serde_json::Value = serde_json::from_str(KIM).unwrap();
        let from_value = service.handle_value(value).await;
        assert_eq!(from_json, from_value);
        assert_eq!(
            service.render(&from_json.profile).unwrap(),
            serde_json::to_string(&from_value.profile).unwrap()
        );
    }
}
