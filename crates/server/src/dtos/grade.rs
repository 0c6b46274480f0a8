use database::entities::grade;
use models::grade::GradeTarget;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GradeResponse {
    pub id: i32,
    pub student_id: i32,
    pub grade: i32,
    /// Set when the grade is for a whole course
    pub course_id: Option<i32>,
    /// What the grade was given for
    pub target: GradeTarget,
}

impl From<grade::Model> for GradeResponse {
    fn from(model: grade::Model) -> Self {
        Self {
            target: model.target(),
            id: model.id,
            student_id: model.student_id,
            grade: model.grade,
            course_id: model.course_id,
        }
    }
}
