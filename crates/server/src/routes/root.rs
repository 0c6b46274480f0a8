use crate::{dtos::MessageResponse, extract::Json};

/// Greeting, useful to check the API is reachable
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    ),
    tag = "Health"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "hi :)".to_string(),
    })
}
