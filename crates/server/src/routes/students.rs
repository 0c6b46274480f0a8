use crate::{
    dtos::student::StudentResponse,
    error::{ApiResult, ErrorBody},
    extract::{Json, Path},
    state::AppState,
};
use axum::extract::State;
use database::services::student::StudentService;
use models::student::{StudentCreate, StudentUpdate};

/// Add a student to an existing group
#[utoipa::path(
    post,
    path = "/students",
    request_body = StudentCreate,
    responses(
        (status = 200, description = "Student created", body = StudentResponse),
        (status = 404, description = "Group not found", body = ErrorBody),
        (status = 409, description = "Student could not be added", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody)
    ),
    tag = "Students"
)]
pub async fn add_student(
    State(state): State<AppState>,
    Json(input): Json<StudentCreate>,
) -> ApiResult<StudentResponse> {
    let student = StudentService::add_student(&state.gateway, input).await?;
    Ok(Json(student.into()))
}

/// Get a student by ID
#[utoipa::path(
    get,
    path = "/students/{student_id}",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorBody)
    ),
    tag = "Students"
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> ApiResult<StudentResponse> {
    let student = StudentService::get_student(&state.gateway, student_id).await?;
    Ok(Json(student.into()))
}

/// Update the given fields of a student.
///
/// Absent fields and empty strings leave the stored value unchanged; `null`
/// clears `phone` or `address`.
#[utoipa::path(
    put,
    path = "/students/{student_id}",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentUpdate,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 404, description = "Student or group not found", body = ErrorBody),
        (status = 409, description = "Student could not be updated", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody)
    ),
    tag = "Students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
    Json(input): Json<StudentUpdate>,
) -> ApiResult<StudentResponse> {
    let student = StudentService::update_student(&state.gateway, student_id, input).await?;
    Ok(Json(student.into()))
}

/// Delete a student, returning the deleted record
#[utoipa::path(
    delete,
    path = "/students/{student_id}",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorBody),
        (status = 409, description = "Student still has grades", body = ErrorBody)
    ),
    tag = "Students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> ApiResult<StudentResponse> {
    let student = StudentService::delete_student(&state.gateway, student_id).await?;
    Ok(Json(student.into()))
}
