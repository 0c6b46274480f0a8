use crate::{
    entities::{department, professor},
    error::ServiceError,
    gateway::Gateway,
};
use log::info;
use models::{Validate, professor::ProfessorCreate};
use sea_orm::{ActiveValue::Set, EntityTrait, QueryOrder};
use serde_json::json;

pub struct ProfessorService;

impl ProfessorService {
    /// Lists every professor, ordered by id
    pub async fn get_professors(
        gateway: &Gateway,
    ) -> Result<Vec<professor::Model>, ServiceError> {
        let professors = professor::Entity::find()
            .order_by_asc(professor::Column::Id)
            .all(gateway.connection())
            .await?;

        Ok(professors)
    }

    pub async fn add_professor(
        gateway: &Gateway,
        input: ProfessorCreate,
    ) -> Result<professor::Model, ServiceError> {
        input.validate()?;

        let session = gateway.begin().await?;
        let department = session
            .find_by_id::<department::Entity>(input.department_id)
            .await?;

        let params = json!(input);
        let professor = professor::ActiveModel {
            department_id: Set(department.id),
            name: Set(input.name),
            phone: Set(input.phone),
            address: Set(input.address),
            ..Default::default()
        };

        let professor = session
            .insert(professor, "Professor add failed.", params)
            .await?;
        info!(
            "Added professor {} to department {}",
            professor.id, professor.department_id
        );
        Ok(professor)
    }
}
