use crate::core::ConfigProvider;
use crate::utils::error::{FortuneError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SUBMISSIONS_FILE: &str = "user_data.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceConfig,
    pub output: Option<OutputConfig>,
    pub submissions: Option<SubmissionsConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub dir: Option<String>,
    pub pretty: Option<bool>,
    pub prompt_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionsConfig {
    pub enabled: bool,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FortuneError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FortuneError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FortuneError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn output(&self) -> Option<&OutputConfig> {
        self.output.as_ref()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("service.name", &self.service.name)?;

        if let Some(dir) = self.output().and_then(|o| o.dir.as_deref()) {
            validation::validate_path("output.dir", dir)?;
        }

        if let Some(prompt_file) = self.prompt_file() {
            validation::validate_path("output.prompt_file", prompt_file)?;
        }

        if let Some(path) = self.submissions_file() {
            validation::validate_path("submissions.path", path)?;
            validation::validate_file_extension("submissions.path", path, &["csv"])?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_log_level("logging.level", level)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn output_dir(&self) -> &str {
        self.output()
            .and_then(|o| o.dir.as_deref())
            .unwrap_or(".")
    }

    fn pretty_output(&self) -> bool {
        self.output().and_then(|o| o.pretty).unwrap_or(false)
    }

    fn prompt_file(&self) -> Option<&str> {
        self.output().and_then(|o| o.prompt_file.as_deref())
    }

    fn submissions_file(&self) -> Option<&str> {
        match &self.submissions {
            Some(s) if s.enabled => Some(s.path.as_deref().unwrap_or(DEFAULT_SUBMISSIONS_FILE)),
            _ => None,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
