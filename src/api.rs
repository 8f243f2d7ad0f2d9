//! Schedule providers
//!
//! [`ScheduleSource`] is the seam between the view-model and wherever the
//! schedule comes from: the HoloStats HTTP API or a saved response on disk.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::models::ScheduleResponse;

pub const DEFAULT_API_URL: &str = "https://holostats.cn";

const SCHEDULE_PATH: &str = "/api/v3/youtube_schedule_stream";

/// Saved responses larger than this are rejected
const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is too large ({size} bytes)", .path.display())]
    TooLarge { path: PathBuf, size: u64 },
    #[error("invalid schedule payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Provider of the YouTube stream schedule
pub trait ScheduleSource {
    fn youtube_schedule_stream(&self) -> Result<ScheduleResponse, ApiError>;
}

/// Client of the HoloStats HTTP API
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(ApiClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Full URL of the schedule endpoint
    pub fn schedule_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), SCHEDULE_PATH)
    }
}

impl ScheduleSource for ApiClient {
    fn youtube_schedule_stream(&self) -> Result<ScheduleResponse, ApiError> {
        let url = self.schedule_url();
        debug!(url = %url, "fetching schedule");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| ApiError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        let body = response.text().map_err(|source| ApiError::Http {
            url: url.clone(),
            source,
        })?;

        let schedule: ScheduleResponse = serde_json::from_str(&body)?;
        debug!(streams = schedule.streams.len(), "schedule received");

        Ok(schedule)
    }
}

/// A schedule response saved as JSON on disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> ApiError {
        ApiError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ScheduleSource for FileSource {
    fn youtube_schedule_stream(&self) -> Result<ScheduleResponse, ApiError> {
        debug!(path = %self.path.display(), "reading schedule");

        let metadata = fs::metadata(&self.path).map_err(|e| self.io_error(e))?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(ApiError::TooLarge {
                path: self.path.clone(),
                size: metadata.len(),
            });
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;

        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_schedule_url() {
        let client = ApiClient::new("https://holostats.cn/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.schedule_url(),
            "https://holostats.cn/api/v3/youtube_schedule_stream"
        );

        let client = ApiClient::new("http://localhost:4200", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.schedule_url(),
            "http://localhost:4200/api/v3/youtube_schedule_stream"
        );
    }

    #[test]
    fn test_file_source() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"updatedAt":"2021-01-01T00:00:00Z","streams":[{{"streamId":"a","title":"t","vtuberId":"sora","scheduleTime":"2021-01-01T10:00:00Z"}}]}}"#
        )
        .unwrap();

        let schedule = FileSource::new(file.path()).youtube_schedule_stream().unwrap();

        assert_eq!(schedule.updated_at, "2021-01-01T00:00:00Z");
        assert_eq!(schedule.streams.len(), 1);
        assert_eq!(schedule.streams[0].stream_id, "a");
    }

    #[test]
    fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.json"));

        assert!(matches!(
            source.youtube_schedule_stream(),
            Err(ApiError::Io { .. })
        ));
    }

    #[test]
    fn test_file_source_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"updatedAt\": 1}}").unwrap();

        assert!(matches!(
            FileSource::new(file.path()).youtube_schedule_stream(),
            Err(ApiError::Decode(_))
        ));
    }
}
