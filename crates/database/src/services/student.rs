use crate::{
    entities::{group, student},
    error::ServiceError,
    gateway::Gateway,
};
use log::info;
use models::{
    Validate,
    student::{StudentCreate, StudentUpdate},
    validation::positive_id,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, IntoActiveModel};
use serde_json::json;

pub struct StudentService;

impl StudentService {
    /// Adds a student to an existing group
    pub async fn add_student(
        gateway: &Gateway,
        input: StudentCreate,
    ) -> Result<student::Model, ServiceError> {
        input.validate()?;

        let session = gateway.begin().await?;
        let group = session.find_by_id::<group::Entity>(input.group_id).await?;

        let params = json!(input);
        let student = student::ActiveModel {
            group_id: Set(group.id),
            name: Set(input.name),
            phone: Set(input.phone),
            address: Set(input.address),
            ..Default::default()
        };

        let student = session
            .insert(student, "Student add failed.", params)
            .await?;
        info!("Added student {} to group {}", student.id, student.group_id);
        Ok(student)
    }

    pub async fn get_student(
        gateway: &Gateway,
        student_id: i32,
    ) -> Result<student::Model, ServiceError> {
        positive_id("student_id", student_id)?;
        gateway.find_by_id::<student::Entity>(student_id).await
    }

    /// Applies the provided fields of `input` to a student.
    ///
    /// Fields absent from the payload and blank values (empty strings) leave
    /// the stored value untouched; an explicit `null` clears an optional field.
    pub async fn update_student(
        gateway: &Gateway,
        student_id: i32,
        input: StudentUpdate,
    ) -> Result<student::Model, ServiceError> {
        positive_id("student_id", student_id)?;
        input.validate()?;

        let session = gateway.begin().await?;
        let student = session.find_by_id::<student::Entity>(student_id).await?;

        if let Some(&group_id) = input.group_id.as_change() {
            session.find_by_id::<group::Entity>(group_id).await?;
        }

        let params = json!({ "id": student_id, "changes": &input });
        let mut active = student.clone().into_active_model();

        if let Some(group_id) = input.group_id.into_required_change() {
            active.group_id = Set(group_id);
        }
        if let Some(name) = input.name.into_required_change() {
            active.name = Set(name);
        }
        if let Some(phone) = input.phone.into_change() {
            active.phone = Set(phone);
        }
        if let Some(address) = input.address.into_change() {
            active.address = Set(address);
        }

        if !active.is_changed() {
            session.release().await?;
            return Ok(student);
        }

        let student = session
            .update(active, "Student update failed.", params)
            .await?;
        info!("Updated student {}", student.id);
        Ok(student)
    }

    /// Deletes a student. Enrollments go with the student; existing grades
    /// make the delete fail with a conflict.
    pub async fn delete_student(
        gateway: &Gateway,
        student_id: i32,
    ) -> Result<student::Model, ServiceError> {
        positive_id("student_id", student_id)?;

        let session = gateway.begin().await?;
        let student = session.find_by_id::<student::Entity>(student_id).await?;

        let student = session
            .delete::<student::Entity>(student, "Student delete failed.", json!(student_id))
            .await?;
        info!("Deleted student {}", student.id);
        Ok(student)
    }
}
