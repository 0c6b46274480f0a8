use crate::{
    entities::{course, course_student, semester, student},
    error::ServiceError,
    gateway::Gateway,
};
use log::info;
use models::{
    Validate,
    course::{CourseCreate, CourseUpdate},
    validation::positive_id,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder,
};
use serde_json::json;

pub struct CourseService;

impl CourseService {
    /// Creates a course, optionally scheduled into an existing semester
    pub async fn add_course(
        gateway: &Gateway,
        input: CourseCreate,
    ) -> Result<course::Model, ServiceError> {
        input.validate()?;

        let session = gateway.begin().await?;
        if let Some(semester_id) = input.semester_id {
            session.find_by_id::<semester::Entity>(semester_id).await?;
        }

        let params = json!(input);
        let course = course::ActiveModel {
            semester_id: Set(input.semester_id),
            name: Set(input.name),
            desc: Set(input.desc),
            ..Default::default()
        };

        let course = session.insert(course, "Course add failed.", params).await?;
        info!("Added course {}", course.id);
        Ok(course)
    }

    pub async fn get_course(
        gateway: &Gateway,
        course_id: i32,
    ) -> Result<course::Model, ServiceError> {
        positive_id("course_id", course_id)?;
        gateway.find_by_id::<course::Entity>(course_id).await
    }

    /// Students enrolled in a course, ordered by id
    pub async fn get_course_students(
        gateway: &Gateway,
        course_id: i32,
    ) -> Result<Vec<student::Model>, ServiceError> {
        let course = Self::get_course(gateway, course_id).await?;

        let students = course
            .find_related(student::Entity)
            .order_by_asc(student::Column::Id)
            .all(gateway.connection())
            .await?;

        Ok(students)
    }

    /// Applies the provided fields of `input` to a course, with the same
    /// skip rules as student updates
    pub async fn update_course(
        gateway: &Gateway,
        course_id: i32,
        input: CourseUpdate,
    ) -> Result<course::Model, ServiceError> {
        positive_id("course_id", course_id)?;
        input.validate()?;

        let session = gateway.begin().await?;
        let course = session.find_by_id::<course::Entity>(course_id).await?;

        if let Some(&semester_id) = input.semester_id.as_change() {
            session.find_by_id::<semester::Entity>(semester_id).await?;
        }

        let params = json!({ "id": course_id, "changes": &input });
        let mut active = course.clone().into_active_model();

        if let Some(name) = input.name.into_required_change() {
            active.name = Set(name);
        }
        if let Some(desc) = input.desc.into_change() {
            active.desc = Set(desc);
        }
        if let Some(semester_id) = input.semester_id.into_change() {
            active.semester_id = Set(semester_id);
        }

        if !active.is_changed() {
            session.release().await?;
            return Ok(course);
        }

        let course = session
            .update(active, "Course update failed.", params)
            .await?;
        info!("Updated course {}", course.id);
        Ok(course)
    }

    /// Enrolls an existing student into an existing course
    pub async fn enroll_student(
        gateway: &Gateway,
        course_id: i32,
        student_id: i32,
    ) -> Result<course_student::Model, ServiceError> {
        positive_id("course_id", course_id)?;
        positive_id("student_id", student_id)?;

        let session = gateway.begin().await?;
        session.find_by_id::<course::Entity>(course_id).await?;
        session.find_by_id::<student::Entity>(student_id).await?;

        let params = json!({ "course_id": course_id, "student_id": student_id });
        let enrolled = course_student::Entity::find_by_id((course_id, student_id))
            .one(session.connection())
            .await?;
        if enrolled.is_some() {
            return session
                .abort(ServiceError::conflict(
                    "Student already enrolled in this course.",
                    params,
                ))
                .await;
        }

        let enrollment = course_student::ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id),
        };

        let enrollment = session
            .insert(enrollment, "Course enrollment failed.", params)
            .await?;
        info!("Enrolled student {student_id} in course {course_id}");
        Ok(enrollment)
    }
}
