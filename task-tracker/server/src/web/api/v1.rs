use serde::Serialize;
use utoipa::ToSchema;

/// JSON body returned when a request fails on the server side.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServerErrorResponse {
    /// Human readable description of the failure
    message: String,
}

impl ServerErrorResponse {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}
