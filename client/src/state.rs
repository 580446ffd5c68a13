use crate::backend_service::BackendService;
use crate::error::ClientError;
use crate::models::{ResultRow, UploadFile};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Outcome message shown to the user after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Everything the view holds between events. Only the handlers below mutate it.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    pub file: Option<UploadFile>,
    pub query: String,
    pub base_url: String,
    pub results: Vec<ResultRow>,
}

impl ClientState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn select_file(&mut self, file: UploadFile) {
        log::debug!("Selected {}", file.filename);
        self.file = Some(file);
    }

    /// Reads the file at `path` and selects it. A read failure leaves the
    /// previous selection in place.
    pub async fn select_path(&mut self, path: impl AsRef<Path>) -> Result<(), ClientError> {
        let path = path.as_ref();
        let file = UploadFile::from_path(path).await.map_err(|source| ClientError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.select_file(file);
        Ok(())
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
        log::info!("Backend base URL set to {:?}", self.base_url);
    }

    pub async fn upload(&self, backend: &BackendService) -> Notice {
        let Some(file) = &self.file else {
            return Notice::warning(ClientError::MissingFile.to_string());
        };

        match backend.upload(&self.base_url, file).await {
            Ok(message) => Notice::info(message),
            Err(err) => {
                log::warn!("Upload of {} failed: {}", file.filename, err.detail());
                Notice::error("Upload failed")
            }
        }
    }

    /// Replaces `results` on success and returns `None`. On failure the
    /// previous rows stay as they were.
    pub async fn submit_query(&mut self, backend: &BackendService) -> Option<Notice> {
        if self.query.trim().is_empty() {
            return Some(Notice::warning(ClientError::EmptyQuery.to_string()));
        }

        match backend.query(&self.base_url, &self.query).await {
            Ok(rows) => {
                self.results = rows;
                None
            }
            Err(err) => Some(query_failure_notice(&err)),
        }
    }
}

fn query_failure_notice(err: &ClientError) -> Notice {
    let text = format!("Query failed: {}", err.detail());
    if err.is_validation() || err.is_decoding() {
        Notice::warning(text)
    } else {
        Notice::error(text)
    }
}
