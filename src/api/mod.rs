//! Backend HTTP API
//!
//! Frontend bindings to backend endpoints, organized by domain.

mod analytics;
mod reference;
mod tasks;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config;

// Re-export all public items
pub use analytics::*;
pub use reference::*;
pub use tasks::*;

/// Failure of a single backend call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{method} {path} returned HTTP {status}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },
    #[error("could not decode response from {path}: {message}")]
    Decode { path: String, message: String },
    #[error("could not encode request body: {0}")]
    Encode(String),
}

fn endpoint(path: &str) -> String {
    format!("{}{}", config::backend_url(), path)
}

fn check_status(method: &'static str, path: &str, response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            method,
            path: path.to_string(),
            status: response.status(),
        })
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

// ========================
// Transport
// ========================

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&endpoint(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status("GET", path, &response)?;
    decode(path, response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let request = Request::post(&endpoint(path))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status("POST", path, &response)?;
    decode(path, response).await
}

/// POST without a body; any 2xx counts as success and the body is ignored.
async fn post_empty(path: &str) -> Result<(), ApiError> {
    let response = Request::post(&endpoint(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status("POST", path, &response)
}
