use crate::config::endpoint;
use crate::error::{ClientError, Result};
use crate::models::*;
use crate::normalize::normalize;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{multipart, Client, Response};
use serde_json::Value;

/// Shown when the backend acknowledges an upload without a `message`.
pub const DEFAULT_UPLOAD_MESSAGE: &str = "Upload complete";

pub struct BackendService {
    client: Client,
}

impl BackendService {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Posts the file as the `file` part of a multipart form to `{base_url}/upload/`
    /// and returns the backend's message.
    pub async fn upload(&self, base_url: &str, file: &UploadFile) -> Result<String> {
        let url = endpoint(base_url, "/upload/");
        log::info!("Uploading {} ({} bytes) to {}", file.filename, file.bytes.len(), url);

        let part = multipart::Part::bytes(file.bytes.clone()).file_name(file.filename.clone());
        let form = multipart::Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let response = ensure_success(response).await?;

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|source| ClientError::Decode { body: text, source })?;

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_UPLOAD_MESSAGE)
            .to_string();

        log::info!("Upload accepted: {}", message);
        Ok(message)
    }

    /// Posts `{query, top_k}` to `{base_url}/query/` and normalizes the answer into rows.
    pub async fn query(&self, base_url: &str, query: &str) -> Result<Vec<ResultRow>> {
        if query.trim().is_empty() {
            return Err(ClientError::EmptyQuery);
        }

        let url = endpoint(base_url, "/query/");
        let request = QueryRequest::new(query);
        log::info!("Querying {} (top_k={})", url, request.top_k);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&request)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = response.text().await?;

        if !content_type.as_deref().is_some_and(is_json_content_type) {
            log::warn!("Query response is not JSON (content type {:?})", content_type);
            return Err(ClientError::NotJson {
                content_type,
                body: text,
            });
        }

        let body: Value = serde_json::from_str(&text)
            .map_err(|source| ClientError::Decode { body: text, source })?;
        log::debug!("Query response: {}", body);

        let rows = normalize(&body);
        log::info!("Query returned {} rows", rows.len());
        Ok(rows)
    }
}

impl Default for BackendService {
    fn default() -> Self {
        Self::new()
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            log::debug!("Could not read body of {} response: {}", status, err);
            String::new()
        }
    };
    log::warn!("Backend returned {}: {}", status, body);
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

/// True for `application/json` and any `+json` media type.
pub fn is_json_content_type(content_type: &str) -> bool {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    media_type == "application/json" || media_type.ends_with("+json")
}
