use crate::{
    dtos::professor::ProfessorResponse,
    error::{ApiResult, ErrorBody},
    extract::Json,
    state::AppState,
};
use axum::extract::State;
use database::services::professor::ProfessorService;
use models::professor::ProfessorCreate;

/// List every professor, ordered by id
#[utoipa::path(
    get,
    path = "/professors",
    responses(
        (status = 200, description = "All professors", body = Vec<ProfessorResponse>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Professors"
)]
pub async fn get_professors(State(state): State<AppState>) -> ApiResult<Vec<ProfessorResponse>> {
    let professors = ProfessorService::get_professors(&state.gateway).await?;
    Ok(Json(professors.into_iter().map(Into::into).collect()))
}

/// Add a professor to an existing department
#[utoipa::path(
    post,
    path = "/professors",
    request_body = ProfessorCreate,
    responses(
        (status = 200, description = "Professor created", body = ProfessorResponse),
        (status = 404, description = "Department not found", body = ErrorBody),
        (status = 409, description = "Professor could not be added", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody)
    ),
    tag = "Professors"
)]
pub async fn add_professor(
    State(state): State<AppState>,
    Json(input): Json<ProfessorCreate>,
) -> ApiResult<ProfessorResponse> {
    let professor = ProfessorService::add_professor(&state.gateway, input).await?;
    Ok(Json(professor.into()))
}
