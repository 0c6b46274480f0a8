use crate::{
    dtos::{
        MessageResponse,
        course::{CourseResponse, EnrollmentResponse},
        grade::GradeResponse,
        professor::ProfessorResponse,
        student::StudentResponse,
    },
    error::ErrorBody,
    routes::{courses, grades, health, professors, root, students},
};
use models::{
    course::{CourseCreate, CourseUpdate},
    grade::{CourseGradeCreate, CourseGradeUpdate, GradeTarget},
    professor::ProfessorCreate,
    student::{StudentCreate, StudentUpdate},
};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        students::add_student,
        students::get_student,
        students::update_student,
        students::delete_student,
        courses::add_course,
        courses::get_course,
        courses::update_course,
        courses::get_course_students,
        courses::enroll_student,
        grades::add_course_grade,
        grades::update_course_grade,
        professors::get_professors,
        professors::add_professor
    ),
    components(schemas(
        StudentCreate,
        StudentUpdate,
        StudentResponse,
        CourseCreate,
        CourseUpdate,
        CourseResponse,
        EnrollmentResponse,
        CourseGradeCreate,
        CourseGradeUpdate,
        GradeTarget,
        GradeResponse,
        ProfessorCreate,
        ProfessorResponse,
        MessageResponse,
        ErrorBody
    )),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Students", description = "Student related endpoints"),
        (name = "Courses", description = "Course and enrollment related endpoints"),
        (name = "Grades", description = "Grade related endpoints"),
        (name = "Professors", description = "Professor related endpoints"),
    ),
    info(
        title = "University API",
        version = "1.0.0",
        description = "Students, courses, grades and professors of a university",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
