pub mod account_dto;
pub mod analytics_dto;
pub mod application_dto;
pub mod auth_dto;
pub mod job_dto;
pub mod resume_dto;
pub mod test_dto;
pub mod vacancy_dto;

use serde::Serialize;

/// Uniform response envelope: `{ "message"?: string, "data"?: T }`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            message: None,
            data: Some(data),
        }
    }

    pub fn with(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: None,
        }
    }
}
