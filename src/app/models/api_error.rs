use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, Json(json!({ "message": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_carries_status_code() {
        let res = ApiError {
            code: StatusCode::BAD_REQUEST,
            message: "Unknown email template.".to_string(),
        }
        .into_response();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
