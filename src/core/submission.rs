use crate::domain::model::FortuneRequest;
use crate::domain::ports::Storage;
use crate::utils::error::{FortuneError, Result};
use chrono::{DateTime, Utc};

pub const SUBMISSION_HEADER: [&str; 6] = ["이름", "생년월일", "생시", "성별", "핸디캡", "등록시간"];

/// Append-only CSV log of incoming requests. Each request is one append
/// through the storage; the header is written by whichever append creates
/// the log.
pub struct SubmissionLog<'a, S: Storage> {
    storage: &'a S,
    path: String,
}

fn encode_record<I, T>(record: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(record)?;
    writer.into_inner().map_err(|e| FortuneError::StorageError {
        message: format!("Failed to flush submission record: {}", e),
    })
}

impl<'a, S: Storage> SubmissionLog<'a, S> {
    pub fn new(storage: &'a S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub async fn append(&self, request: &FortuneRequest, recorded_at: DateTime<Utc>) -> Result<()> {
        let handicap = request.handicap.to_string();
        let recorded_at = recorded_at.to_rfc3339();
        let row = encode_record([
            request.name.as_str(),
            request.birth_date.as_str(),
            request.birth_time.as_deref().unwrap_or(""),
            request.gender.as_str(),
            handicap.as_str(),
            recorded_at.as_str(),
        ])?;
        let header = encode_record(SUBMISSION_HEADER)?;

        self.storage.append_file(&self.path, &header, &row).await?;
        tracing::info!("📝 Submission recorded in {}", self.path);
        Ok(())
    }

    /// Records the request now. Failures are logged and never surface.
    pub async fn record(&self, request: &FortuneRequest) {
        if let Err(e) = self.append(request, Utc::now()).await {
            tracing::warn!("⚠️ Failed to record submission in {}: {}", self.path, e);
        }
    }
}
