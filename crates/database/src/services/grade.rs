use crate::{
    entities::{course, grade, student},
    error::ServiceError,
    gateway::Gateway,
};
use log::info;
use models::{
    Validate,
    grade::{CourseGradeCreate, CourseGradeUpdate, GradeTarget},
    validation::positive_id,
};
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter};
use serde_json::json;

pub struct GradeService;

impl GradeService {
    /// Grades a student for a course they are enrolled in.
    ///
    /// Fails with `NotFound` when the student is not enrolled in the course
    /// and with `Conflict` when the student already has a grade for it.
    pub async fn add_course_grade(
        gateway: &Gateway,
        input: CourseGradeCreate,
    ) -> Result<grade::Model, ServiceError> {
        input.validate()?;

        let params = json!({ "student_id": input.student_id, "course_id": input.course_id });
        let session = gateway.begin().await?;

        let enrolled = student::Entity::find_by_id(input.student_id)
            .inner_join(course::Entity)
            .filter(course::Column::Id.eq(input.course_id))
            .one(session.connection())
            .await?;
        if enrolled.is_none() {
            return session
                .abort(ServiceError::not_found(
                    "Student cannot be found for the specified course.",
                    params,
                ))
                .await;
        }

        let existing = grade::Entity::find()
            .filter(grade::Column::StudentId.eq(input.student_id))
            .filter(grade::Column::CourseId.eq(input.course_id))
            .one(session.connection())
            .await?;
        if existing.is_some() {
            return session
                .abort(ServiceError::conflict(
                    "Grade already placed for student in this course.",
                    params,
                ))
                .await;
        }

        let (task_id, exam_id, course_id) = GradeTarget::Course(input.course_id).into_columns();
        let grade = grade::ActiveModel {
            student_id: Set(input.student_id),
            grade: Set(input.grade),
            task_id: Set(task_id),
            exam_id: Set(exam_id),
            course_id: Set(course_id),
            ..Default::default()
        };

        let grade = session
            .insert(grade, "Course grade add failed.", params)
            .await?;
        info!(
            "Graded student {} with {} for course {}",
            input.student_id, grade.grade, input.course_id
        );
        Ok(grade)
    }

    /// Overwrites the value of an existing grade
    pub async fn update_course_grade(
        gateway: &Gateway,
        grade_id: i32,
        input: CourseGradeUpdate,
    ) -> Result<grade::Model, ServiceError> {
        positive_id("grade_id", grade_id)?;
        input.validate()?;

        let session = gateway.begin().await?;
        let grade = session.find_by_id::<grade::Entity>(grade_id).await?;

        let mut active = grade.into_active_model();
        active.grade = Set(input.grade);

        let grade = session
            .update(
                active,
                "Course grade update failed.",
                json!({ "id": grade_id, "grade": input.grade }),
            )
            .await?;
        info!("Updated grade {} to {}", grade.id, grade.grade);
        Ok(grade)
    }
}
