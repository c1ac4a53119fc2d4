use std::path::PathBuf;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use serde_json::json;
use thiserror::Error;

pub const DATA_FETCH_ERROR_MESSAGE: &str = "An error occured during data fetch";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No application registered for id [{0}]")]
    UnknownApp(String),

    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unable to read config file {0}: {1}")]
    Unreadable(PathBuf, std::io::Error),

    #[error("Malformed JSON in {0}: {1}")]
    MalformedDocument(PathBuf, serde_json::Error),

    #[error("Top level of {0} is not a JSON object")]
    NotAnObject(PathBuf),
}

// Every cause collapses to the same payload; the detail only goes to the log.
impl ResponseError for ConfigError {
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(json!({"error": DATA_FETCH_ERROR_MESSAGE}))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_variants_share_status_and_body() {
        let errors = vec![
            ConfigError::UnknownApp(String::new()),
            ConfigError::FileNotFound(PathBuf::from("a.json")),
            ConfigError::NotAnObject(PathBuf::from("b.json")),
        ];
        for error in errors {
            assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
            assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
        }
    }
}
