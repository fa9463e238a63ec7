//! Hand-off point to the video generation service
//!
//! No service exists yet. [`LoggingGenerator`] records each request in the
//! log and, when a hand-off directory is configured, as `<job-id>.json`.

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::GenerateError;
use crate::form::GenerateRequest;

/// Identifier returned for an accepted request
pub type JobId = Uuid;

/// Anything that can accept a generate request
pub trait Generator {
    fn generate(&mut self, request: &GenerateRequest) -> Result<JobId, GenerateError>;
}

/// Stub generator: logs the request and optionally drops it on disk
#[derive(Debug, Default)]
pub struct LoggingGenerator {
    handoff_dir: Option<PathBuf>,
    submitted: usize,
}

impl LoggingGenerator {
    pub fn new(handoff_dir: Option<PathBuf>) -> Self {
        LoggingGenerator {
            handoff_dir,
            submitted: 0,
        }
    }

    /// Number of requests accepted so far
    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

impl Generator for LoggingGenerator {
    fn generate(&mut self, request: &GenerateRequest) -> Result<JobId, GenerateError> {
        let job_id = Uuid::new_v4();
        let compact = serde_json::to_string(request)?;
        info!(%job_id, request = %compact, "generating video");

        if let Some(dir) = &self.handoff_dir {
            let path = dir.join(format!("{}.json", job_id));
            let body = serde_json::to_string_pretty(request)?;
            let written = fs::create_dir_all(dir).and_then(|()| fs::write(&path, body));
            if let Err(source) = written {
                warn!(path = %path.display(), error = %source, "hand-off write failed");
                return Err(GenerateError::Write { path, source });
            }
            info!(path = %path.display(), "wrote hand-off file");
        }

        self.submitted += 1;
        Ok(job_id)
    }
}
