use thiserror::Error;

#[derive(Error, Debug)]
pub enum FortuneError {
    #[error("Invalid date format: '{raw}' (expected YYYY.MM.DD or YYYY-MM-DD)")]
    InvalidDateFormat { raw: String },

    #[error("Invalid time format: '{raw}' (expected HH:MM)")]
    InvalidTimeFormat { raw: String },

    #[error("Calendrical resolution failed: {message}")]
    CalendricalResolution { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Calendar,
    Storage,
    Config,
}

impl FortuneError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FortuneError::InvalidDateFormat { .. }
            | FortuneError::InvalidTimeFormat { .. }
            | FortuneError::SerializationError(_) => ErrorCategory::Input,
            FortuneError::CalendricalResolution { .. } => ErrorCategory::Calendar,
            FortuneError::IoError(_)
            | FortuneError::CsvError(_)
            | FortuneError::StorageError { .. } => ErrorCategory::Storage,
            FortuneError::ConfigError { .. } | FortuneError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("입력 정보를 확인해주세요: {}", self),
            ErrorCategory::Calendar => format!("사주 계산 오류: {}", self),
            ErrorCategory::Storage => format!("저장 오류: {}", self),
            ErrorCategory::Config => format!("설정 오류: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FortuneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = FortuneError::InvalidDateFormat {
            raw: "2024/05/01".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.to_string().contains("2024/05/01"));

        let err = FortuneError::CalendricalResolution {
            message: "year 1800 out of range".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Calendar);
        assert!(err.user_friendly_message().starts_with("사주 계산 오류"));
    }
}
