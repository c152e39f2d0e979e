// src/config.rs

use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

/// SRS endpoint for CAS RN lookups.
pub const BASE_URL: &str =
    "https://cdxapps.epa.gov/oms-substance-registry-services/rest-api/substance/cas";

/// Per-request timeout applied to every lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// File written by the direct-query binary when `--file` is given.
pub const QUERY_OUTPUT_FILE: &str = "casrn_search.csv";

/// What a failed lookup does to the rest of the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Write a row with empty enrichment fields and move on.
    #[default]
    Continue,
    /// Stop the run and return the lookup error.
    Abort,
}

/// Settings for one search run.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub include_synonyms: bool,
    pub failure_policy: FailurePolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            include_synonyms: false,
            failure_policy: FailurePolicy::Continue,
        }
    }
}

impl SearchConfig {
    pub fn with_synonyms(mut self, include_synonyms: bool) -> Self {
        self.include_synonyms = include_synonyms;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }
}

/// Pre-flight argument problems. Raised before any lookup happens.
#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("file extension not valid: {}", .0.display())]
    BadExtension(PathBuf),
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("csv")
}

/// Check that `input` exists and both paths end in `.csv`.
pub fn validate_paths(input: &Path, output: &Path) -> Result<(), ArgsError> {
    if !input.exists() {
        return Err(ArgsError::InputNotFound(input.to_path_buf()));
    }
    if !has_csv_extension(input) {
        return Err(ArgsError::BadExtension(input.to_path_buf()));
    }
    if !has_csv_extension(output) {
        return Err(ArgsError::BadExtension(output.to_path_buf()));
    }
    Ok(())
}
