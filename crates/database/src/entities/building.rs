use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "buildings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub department_id: Option<i32>,
    pub address: String,
    pub name: String,
    pub floors: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::auditorium::Entity")]
    Auditoriums,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::auditorium::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Auditoriums.def()
    }
}

impl crate::gateway::Record for Entity {
    const LABEL: &'static str = "Building";
}

impl ActiveModelBehavior for ActiveModel {}
