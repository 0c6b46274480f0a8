use crate::{
    dtos::{
        course::{CourseResponse, EnrollmentResponse},
        student::StudentResponse,
    },
    error::{ApiResult, ErrorBody},
    extract::{Json, Path},
    state::AppState,
};
use axum::extract::State;
use database::services::course::CourseService;
use models::course::{CourseCreate, CourseUpdate};

/// Create a course, optionally within a semester
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CourseCreate,
    responses(
        (status = 200, description = "Course created", body = CourseResponse),
        (status = 404, description = "Semester not found", body = ErrorBody),
        (status = 409, description = "Course could not be added", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody)
    ),
    tag = "Courses"
)]
pub async fn add_course(
    State(state): State<AppState>,
    Json(input): Json<CourseCreate>,
) -> ApiResult<CourseResponse> {
    let course = CourseService::add_course(&state.gateway, input).await?;
    Ok(Json(course.into()))
}

/// Get a specific course by ID
#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorBody)
    ),
    tag = "Courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> ApiResult<CourseResponse> {
    let course = CourseService::get_course(&state.gateway, course_id).await?;
    Ok(Json(course.into()))
}

#[utoipa::path(
    put,
    path = "/courses/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = CourseUpdate,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 404, description = "Course or semester not found", body = ErrorBody),
        (status = 409, description = "Course could not be updated", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody)
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(input): Json<CourseUpdate>,
) -> ApiResult<CourseResponse> {
    let course = CourseService::update_course(&state.gateway, course_id, input).await?;
    Ok(Json(course.into()))
}

/// List the students enrolled in a course
#[utoipa::path(
    get,
    path = "/courses/{course_id}/students",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrolled students, ordered by id", body = Vec<StudentResponse>),
        (status = 404, description = "Course not found", body = ErrorBody)
    ),
    tag = "Courses"
)]
pub async fn get_course_students(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> ApiResult<Vec<StudentResponse>> {
    let students = CourseService::get_course_students(&state.gateway, course_id).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/courses/{course_id}/students/{student_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID"),
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student enrolled", body = EnrollmentResponse),
        (status = 404, description = "Course or student not found", body = ErrorBody),
        (status = 409, description = "Student already enrolled", body = ErrorBody)
    ),
    tag = "Courses"
)]
pub async fn enroll_student(
    State(state): State<AppState>,
    Path((course_id, student_id)): Path<(i32, i32)>,
) -> ApiResult<EnrollmentResponse> {
    let enrollment = CourseService::enroll_student(&state.gateway, course_id, student_id).await?;
    Ok(Json(enrollment.into()))
}
