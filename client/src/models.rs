use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of passages the backend is asked to answer from.
pub const TOP_K: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryRequest {
    pub query: String,
    pub top_k: usize,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: TOP_K,
        }
    }
}

/// A document picked for upload: raw bytes plus the name sent in the form part.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("file")
            .to_string();

        Ok(Self { filename, bytes })
    }
}

/// One line of the results table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultRow {
    pub document_id: String,
    pub theme: String,
    pub extracted_answer: String,
    pub citations: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_request_serializes_fixed_top_k() {
        let body = serde_json::to_value(QueryRequest::new("what is covered?")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "query": "what is covered?", "top_k": 3 })
        );
    }

    #[tokio::test]
    async fn upload_file_takes_name_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let file = UploadFile::from_path(&path).await.unwrap();
        assert_eq!(file.filename, "policy.pdf");
        assert_eq!(file.bytes, b"%PDF-1.4".to_vec());
    }
}
