use crate::domain::model::{BirthMoment, PillarSet};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Appends one record without rewriting what is already stored. `header`
    /// is written ahead of `data` only by the call that creates the file.
    fn append_file(
        &self,
        path: &str,
        header: &[u8],
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_dir(&self) -> &str;
    fn pretty_output(&self) -> bool;
    fn prompt_file(&self) -> Option<&str>;
    fn submissions_file(&self) -> Option<&str>;
}

/// Converts a civil birth moment into four stem/branch pillars.
///
/// Implementations must be pure: the same moment always yields the same
/// pillars. Invalid or out-of-range moments fail with
/// `FortuneError::CalendricalResolution`.
pub trait CalendricalResolver: Send + Sync {
    fn resolve(&self, moment: &BirthMoment) -> Result<PillarSet>;
}
