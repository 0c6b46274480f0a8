use database::entities::professor;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfessorResponse {
    pub id: i32,
    pub department_id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<professor::Model> for ProfessorResponse {
    fn from(model: professor::Model) -> Self {
        Self {
            id: model.id,
            department_id: model.department_id,
            name: model.name,
            phone: model.phone,
            address: model.address,
        }
    }
}
