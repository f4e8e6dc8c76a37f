// src/error.rs

use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

// --- Custom Error Type ---
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Http { url: String, status: u16 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}
