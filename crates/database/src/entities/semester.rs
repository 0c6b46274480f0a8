use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "semesters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub curriculum_id: i32,
    pub start: DateTime,
    pub end: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::curriculum::Entity",
        from = "Column::CurriculumId",
        to = "super::curriculum::Column::Id"
    )]
    Curriculum,
    #[sea_orm(has_many = "super::course::Entity")]
    Courses,
}

impl Related<super::curriculum::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curriculum.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl crate::gateway::Record for Entity {
    const LABEL: &'static str = "Semester";
}

impl ActiveModelBehavior for ActiveModel {}
