use actix_web::HttpResponse;
use serde::Serialize;

/// Uniform response wrapper shared by every endpoint. Success responses never
/// carry `error`; failure responses may omit `data`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> Self {
        ApiResponse {
            success: true,
            message: message.to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn success_empty(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: true,
            message: message.to_string(),
            data: None,
            error: None,
        }
    }

    pub fn ok(message: &str, data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::success(message, data))
    }

    pub fn created(message: &str, data: T) -> HttpResponse {
        HttpResponse::Created().json(Self::success(message, data))
    }
}
