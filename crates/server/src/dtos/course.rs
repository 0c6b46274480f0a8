use database::entities::{course, course_student};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseResponse {
    pub id: i32,
    pub semester_id: Option<i32>,
    pub name: String,
    pub desc: Option<String>,
}

impl From<course::Model> for CourseResponse {
    fn from(model: course::Model) -> Self {
        Self {
            id: model.id,
            semester_id: model.semester_id,
            name: model.name,
            desc: model.desc,
        }
    }
}

/// A student's membership in a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentResponse {
    pub course_id: i32,
    pub student_id: i32,
}

impl From<course_student::Model> for EnrollmentResponse {
    fn from(model: course_student::Model) -> Self {
        Self {
            course_id: model.course_id,
            student_id: model.student_id,
        }
    }
}
