use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum MailApiError {
    UnknownTemplate,
    InvalidAddress,
    SendFailed,
}

impl MailApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::UnknownTemplate => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Unknown email template.".to_string(),
            },
            Self::InvalidAddress => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid email address.".to_string(),
            },
            Self::SendFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to send mail.".to_string(),
            },
        }
    }
}
