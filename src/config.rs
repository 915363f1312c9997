//! Run configuration, passed explicitly into the orchestrator.

pub const DEFAULT_BUCKET: &str = "data_bucket";
pub const DEFAULT_OUTPUT_PREFIX: &str = "pedestrian-count/";
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Target object-store bucket.
    pub bucket: String,
    /// Key prefix for all artifacts.
    pub output_prefix: String,
    /// Rows to keep per report.
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}
