use crate::{
    dtos::grade::GradeResponse,
    error::{ApiResult, ErrorBody},
    extract::{Json, Path},
    state::AppState,
};
use axum::extract::State;
use database::services::grade::GradeService;
use models::grade::{CourseGradeCreate, CourseGradeUpdate};

/// Grade a student for a course they are enrolled in
#[utoipa::path(
    post,
    path = "/grades",
    request_body = CourseGradeCreate,
    responses(
        (status = 200, description = "Grade placed", body = GradeResponse),
        (status = 404, description = "Student is not enrolled in the course", body = ErrorBody),
        (status = 409, description = "Student already graded for the course", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody)
    ),
    tag = "Grades"
)]
pub async fn add_course_grade(
    State(state): State<AppState>,
    Json(input): Json<CourseGradeCreate>,
) -> ApiResult<GradeResponse> {
    let grade = GradeService::add_course_grade(&state.gateway, input).await?;
    Ok(Json(grade.into()))
}

#[utoipa::path(
    put,
    path = "/grades/{grade_id}",
    params(
        ("grade_id" = i32, Path, description = "Grade ID")
    ),
    request_body = CourseGradeUpdate,
    responses(
        (status = 200, description = "Grade updated", body = GradeResponse),
        (status = 404, description = "Grade not found", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody)
    ),
    tag = "Grades"
)]
pub async fn update_course_grade(
    State(state): State<AppState>,
    Path(grade_id): Path<i32>,
    Json(input): Json<CourseGradeUpdate>,
) -> ApiResult<GradeResponse> {
    let grade = GradeService::update_course_grade(&state.gateway, grade_id, input).await?;
    Ok(Json(grade.into()))
}
