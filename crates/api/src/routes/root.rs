//! Status endpoint served at the root path.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Message returned by every successful `GET /`.
pub const ALL_GOOD: &str = "ALL GOOD!!!!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

impl StatusResponse {
    pub fn all_good() -> Self {
        Self {
            message: ALL_GOOD.to_string(),
        }
    }
}

/// GET /: reports that the service is up.
///
/// Query string, headers and body are ignored.
pub async fn get(State(state): State<AppState>) -> Json<StatusResponse> {
    state.logger.log("request received on /");
    Json(StatusResponse::all_good())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_response_serializes_to_fixed_body() {
        let body = serde_json::to_string(&StatusResponse::all_good()).unwrap();
        assert_eq!(body, r#"{"message":"ALL GOOD!!!!"}"#);
    }
}
