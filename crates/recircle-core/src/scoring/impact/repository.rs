use super::report::ImpactReport;

/// Append-only log of scored reports, queryable by recency. Implementations
/// decide the storage; the service owns ordering of writes.
pub trait ReportLog: Send + Sync {
    fn append(&self, report: ImpactReport) -> Result<(), StorageError>;
    /// Most recent `limit` reports, oldest first.
    fn recent(&self, limit: usize) -> Result<Vec<ImpactReport>, StorageError>;
    fn snapshot(&self) -> Result<Vec<ImpactReport>, StorageError>;
    fn len(&self) -> Result<usize, StorageError>;
    fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
    fn clear(&self) -> Result<(), StorageError>;
}

/// Error enumeration for report-log failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("report log unavailable: {0}")]
    Unavailable(String),
}
