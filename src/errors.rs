use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::api_response::failure_response;

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("Invalid URL: {0}")]
    InvalidUrlError(String),

    #[error("No data received")]
    NoDataError,

    #[error("Decoding error: {0}")]
    DecodingError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpStatusError(u16),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid address: {0}")]
    InvalidAddressError(String),

    #[error("Unsupported network: {0}")]
    UnsupportedNetworkError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CustomError {
    /// Hint shown next to the error message.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            CustomError::NetworkError(_) => Some("Check your internet connection"),
            CustomError::HttpStatusError(429) => Some("Too many requests. Please try again later"),
            CustomError::InvalidAddressError(_) => {
                Some("Please enter a valid Ethereum address (0x...)")
            }
            _ => Some("Please try again"),
        }
    }
}

// Custom Error type
#[derive(Debug, Serialize)]
pub struct ApiError {
    code: u16,
    message: String,
    recovery: Option<String>,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomError::InvalidAddressError(_) => StatusCode::BAD_REQUEST,
            CustomError::UnsupportedNetworkError(_) => StatusCode::BAD_REQUEST,
            CustomError::HttpStatusError(429) => StatusCode::TOO_MANY_REQUESTS,
            CustomError::HttpStatusError(_) => StatusCode::BAD_GATEWAY,
            CustomError::DecodingError(_) => StatusCode::BAD_GATEWAY,
            CustomError::NoDataError => StatusCode::BAD_GATEWAY,
            CustomError::NetworkError(_) => StatusCode::SERVICE_UNAVAILABLE,
            CustomError::InvalidUrlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CustomError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let api_error = ApiError {
            code: status.as_u16(),
            message: self.to_string(),
            recovery: self.recovery_suggestion().map(str::to_string),
        };

        failure_response(status, api_error)
    }
}
