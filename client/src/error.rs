use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Please select a file first")]
    MissingFile,

    #[error("Please enter a query")]
    EmptyQuery,

    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status.
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Backend answered 2xx but did not declare a JSON body.
    #[error("Backend did not return JSON (content type {content_type:?}): {body}")]
    NotJson {
        content_type: Option<String>,
        body: String,
    },

    #[error("Could not decode backend response ({source}): {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// The message followed by every distinct cause in the source chain.
    pub fn detail(&self) -> String {
        let mut text = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            let cause = err.to_string();
            if !text.contains(&cause) {
                text.push_str(": ");
                text.push_str(&cause);
            }
            source = err.source();
        }
        text
    }

    /// Validation failures are raised before any request is built.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::MissingFile | ClientError::EmptyQuery)
    }

    /// Failures that carry an undecodable body are reported as warnings.
    pub fn is_decoding(&self) -> bool {
        matches!(self, ClientError::NotJson { .. } | ClientError::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn detail_appends_causes_missing_from_the_message() {
        let err = ClientError::Decode {
            body: "<html>".to_string(),
            source: serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
        };
        assert_eq!(err.detail(), err.to_string());

        let err = ClientError::Io {
            path: "report.pdf".to_string(),
            source: io::Error::new(io::ErrorKind::Other, Wrapped),
        };
        assert_eq!(
            err.detail(),
            "Could not read report.pdf: wrapped: disk unplugged"
        );
    }

    #[test]
    fn detail_of_validation_errors_is_the_message() {
        assert_eq!(ClientError::EmptyQuery.detail(), "Please enter a query");
    }

    #[derive(Debug)]
    struct Wrapped;

    impl std::fmt::Display for Wrapped {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("wrapped")
        }
    }

    impl std::error::Error for Wrapped {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&Cause)
        }
    }

    #[derive(Debug)]
    struct Cause;

    impl std::fmt::Display for Cause {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("disk unplugged")
        }
    }

    impl std::error::Error for Cause {}
}
