use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::errors::ApiError;

/// Envelope wrapped around every body this service returns.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub code: u16,
    pub result: Option<T>,
    pub error: Option<ApiError>,
}

pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse {
        status: "SUCCESS".to_string(),
        code: StatusCode::OK.as_u16(),
        result: Some(data),
        error: None,
    })
}

pub fn failure_response(status: StatusCode, error: ApiError) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::<()> {
        status: "FAILURE".to_string(),
        code: status.as_u16(),
        result: None,
        error: Some(error),
    })
}
