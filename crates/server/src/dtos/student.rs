use database::entities::student;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub id: i32,
    pub group_id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<student::Model> for StudentResponse {
    fn from(model: student::Model) -> Self {
        Self {
            id: model.id,
            group_id: model.group_id,
            name: model.name,
            phone: model.phone,
            address: model.address,
        }
    }
}
