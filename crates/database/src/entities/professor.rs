use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "professors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub department_id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::course_professor::Entity")]
    CourseProfessors,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::course_professor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseProfessors.def()
    }
}

// Many-to-many relationship with courses
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_professor::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_professor::Relation::Professor.def().rev())
    }
}

impl crate::gateway::Record for Entity {
    const LABEL: &'static str = "Professor";
}

impl ActiveModelBehavior for ActiveModel {}
