use actix_web::{HttpResponse, Responder};

use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Registry error: {0}")]
    Registry(String),

    #[error("TLS error: {0}")]
    Tls(String),
}

impl From<StartupError> for std::io::Error {
    fn from(value: StartupError) -> Self {
        std::io::Error::other(value)
    }
}

pub async fn unknown_resource_error() -> impl Responder {
    HttpResponse::NotFound().json(json!({"error": "Unknown Resource URL"}))
}
