use crate::validation::{Validate, ValidationError, positive_id};
use serde::{Deserialize, Serialize};

/// What a grade was given for.
///
/// A grade row has three nullable association columns; this is the only
/// shape the application writes, so at most one of them is populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum GradeTarget {
    Task(i32),
    Exam(i32),
    Course(i32),
    #[default]
    None,
}

impl GradeTarget {
    /// Builds the target from the `(task_id, exam_id, course_id)` columns.
    ///
    /// Rows written outside this application may carry more than one id; the
    /// most specific one wins (task, then exam, then course).
    pub fn from_columns(
        task_id: Option<i32>,
        exam_id: Option<i32>,
        course_id: Option<i32>,
    ) -> Self {
        match (task_id, exam_id, course_id) {
            (Some(id), _, _) => Self::Task(id),
            (None, Some(id), _) => Self::Exam(id),
            (None, None, Some(id)) => Self::Course(id),
            (None, None, None) => Self::None,
        }
    }

    /// Splits the target back into `(task_id, exam_id, course_id)`
    pub fn into_columns(self) -> (Option<i32>, Option<i32>, Option<i32>) {
        match self {
            Self::Task(id) => (Some(id), None, None),
            Self::Exam(id) => (None, Some(id), None),
            Self::Course(id) => (None, None, Some(id)),
            Self::None => (None, None, None),
        }
    }
}

/// Payload for grading a student for a whole course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseGradeCreate {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub student_id: i32,
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub course_id: i32,
    #[cfg_attr(feature = "openapi", schema(example = 5))]
    pub grade: i32,
}

impl Validate for CourseGradeCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        positive_id("student_id", self.student_id)?;
        positive_id("course_id", self.course_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseGradeUpdate {
    #[cfg_attr(feature = "openapi", schema(example = 2))]
    pub grade: i32,
}

impl Validate for CourseGradeUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
