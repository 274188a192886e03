use crate::core::{ConfigProvider, Storage};
use crate::utils::error::{FortuneError, Result};
use crate::utils::validation::{self, Validate};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::Client as S3Client;
use chrono::{DateTime, Utc};
use std::env;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub s3_bucket: String,
    pub submissions_key: String,
    pub s3_region: String,
    pub record_submissions: bool,
    pub include_prompt: bool,
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            s3_bucket: env::var("SUBMISSIONS_BUCKET").map_err(|_| FortuneError::ConfigError {
                message: "SUBMISSIONS_BUCKET environment variable is required".to_string(),
            })?,
            submissions_key: env::var("SUBMISSIONS_KEY")
                .unwrap_or_else(|_| "submissions/user_data.csv".to_string()),
            s3_region: env::var("S3_REGION").unwrap_or_else(|_| "ap-northeast-2".to_string()),
            record_submissions: env_flag("RECORD_SUBMISSIONS", true),
            include_prompt: env_flag("INCLUDE_PROMPT", true),
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn output_dir(&self) -> &str {
        &self.s3_bucket
    }

    fn pretty_output(&self) -> bool {
        false
    }

    // the prompt goes back in the response instead of a file
    fn prompt_file(&self) -> Option<&str> {
        None
    }

    fn submissions_file(&self) -> Option<&str> {
        self.record_submissions
            .then_some(self.submissions_key.as_str())
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_s3_bucket_name("s3_bucket", &self.s3_bucket)?;
        validation::validate_non_empty_string("submissions_key", &self.submissions_key)?;
        validation::validate_file_extension("submissions_key", &self.submissions_key, &["csv"])?;
        validate_aws_region("s3_region", &self.s3_region)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

fn validate_s3_bucket_name(field_name: &str, bucket_name: &str) -> Result<()> {
    let invalid = |reason: &str| FortuneError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: bucket_name.to_string(),
        reason: reason.to_string(),
    };

    if bucket_name.len() < 3 || bucket_name.len() > 63 {
        return Err(invalid("S3 bucket name must be between 3 and 63 characters"));
    }

    if !bucket_name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.')
    {
        return Err(invalid(
            "S3 bucket name can only contain lowercase letters, numbers, hyphens, and dots",
        ));
    }

    if bucket_name.starts_with('-') || bucket_name.ends_with('-') {
        return Err(invalid("S3 bucket name cannot start or end with a hyphen"));
    }

    Ok(())
}

fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    validation::validate_non_empty_string(field_name, region)?;

    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(FortuneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "AWS region can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct S3Storage {
    client: S3Client,
    bucket: String,
}

impl S3Storage {
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

static APPEND_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// S3 objects cannot be appended to, so each record becomes its own object
/// under the log path: `submissions/user_data.csv` →
/// `submissions/user_data/20261018T090000.000000000Z-0.csv`.
pub fn append_object_key(path: &str, at: DateTime<Utc>, sequence: u64) -> String {
    let (stem, extension) = match path.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() && !extension.contains('/') => {
            (stem, extension)
        }
        _ => (path, "csv"),
    };
    format!(
        "{}/{}-{}.{}",
        stem,
        at.format("%Y%m%dT%H%M%S%.9fZ"),
        sequence,
        extension
    )
}

impl Storage for S3Storage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let resp = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e)
                if e
                    .as_service_error()
                    .map(GetObjectError::is_no_such_key)
                    .unwrap_or(false) =>
            {
                // 讓呼叫端能和本地檔案一樣判斷 NotFound
                return Err(FortuneError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("s3://{}/{} does not exist", self.bucket, path),
                )));
            }
            Err(e) => {
                return Err(FortuneError::StorageError {
                    message: format!("Failed to read from S3: {}", e),
                })
            }
        };

        let data = resp
            .body
            .collect()
            .await
            .map_err(|e| FortuneError::StorageError {
                message: format!("Failed to collect S3 data: {}", e),
            })?;

        Ok(data.into_bytes().to_vec())
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(path)
            .body(data.to_vec().into())
            .send()
            .await
            .map_err(|e| FortuneError::StorageError {
                message: format!("Failed to write to S3: {}", e),
            })?;

        Ok(())
    }

    async fn append_file(&self, path: &str, header: &[u8], data: &[u8]) -> Result<()> {
        let key = append_object_key(
            path,
            Utc::now(),
            APPEND_SEQUENCE.fetch_add(1, Ordering::Relaxed),
        );

        // If-None-Match: 同名物件已存在時寧可失敗也不覆蓋
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .if_none_match("*")
            .body([header, data].concat().into())
            .send()
            .await
            .map_err(|e| FortuneError::StorageError {
                message: format!("Failed to append s3://{}/{}: {}", self.bucket, key, e),
            })?;

        tracing::debug!("Appended record as s3://{}/{}", self.bucket, key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(bucket: &str) -> LambdaConfig {
        LambdaConfig {
            s3_bucket: bucket.to_string(),
            submissions_key: "submissions/user_data.csv".to_string(),
            s3_region: "ap-northeast-2".to_string(),
            record_submissions: true,
            include_prompt: true,
        }
    }

    #[test]
    fn test_validate_bucket_names() {
        assert!(config("golf-saju-submissions").validate().is_ok());
        assert!(config("ab").validate().is_err());
        assert!(config("Golf_Saju").validate().is_err());
        assert!(config("-golf-saju").validate().is_err());
    }

    #[test]
    fn test_append_object_key_is_unique_per_record() {
        use chrono::TimeZone;
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();

        assert_eq!(
            append_object_key("submissions/user_data.csv", at, 0),
            "submissions/user_data/20261018T090000.000000000Z-0.csv"
        );
        assert_ne!(
            append_object_key("submissions/user_data.csv", at, 0),
            append_object_key("submissions/user_data.csv", at, 1)
        );
        assert_eq!(
            append_object_key("logs.v2/user_data", at, 3),
            "logs.v2/user_data/20261018T090000.000000000Z-3.csv"
        );
    }

    #[test]
    fn test_submissions_toggle() {
        let mut lambda = config("golf-saju-submissions");
        assert_eq!(lambda.submissions_file(), Some("submissions/user_data.csv"));
        lambda.record_submissions = false;
        assert_eq!(lambda.submissions_file(), None);
        assert_eq!(lambda.prompt_file(), None);
    }
}
