use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An auditorium booking. The class/exam columns are unique, so each class
/// or exam occupies at most one timeslot; deleting the class or exam removes
/// its timeslot.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "timeslots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub auditorium_id: i32,
    pub course_id: Option<i32>,
    #[sea_orm(unique)]
    pub class_id: Option<i32>,
    #[sea_orm(unique)]
    pub exam_id: Option<i32>,
    pub start: DateTime,
    pub end: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auditorium::Entity",
        from = "Column::AuditoriumId",
        to = "super::auditorium::Column::Id"
    )]
    Auditorium,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id",
        on_delete = "Cascade"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::exam::Entity",
        from = "Column::ExamId",
        to = "super::exam::Column::Id",
        on_delete = "Cascade"
    )]
    Exam,
}

impl Related<super::auditorium::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Auditorium.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::exam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl crate::gateway::Record for Entity {
    const LABEL: &'static str = "Timeslot";
}

impl ActiveModelBehavior for ActiveModel {}
