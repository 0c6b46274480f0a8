use models::grade::GradeTarget;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A grade for a student. At most one of `task_id`, `exam_id` and
/// `course_id` is set; see [`Model::target`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub grade: i32,
    pub task_id: Option<i32>,
    pub exam_id: Option<i32>,
    pub course_id: Option<i32>,
}

impl Model {
    pub fn target(&self) -> GradeTarget {
        GradeTarget::from_columns(self.task_id, self.exam_id, self.course_id)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Restrict"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::task::Entity",
        from = "Column::TaskId",
        to = "super::task::Column::Id"
    )]
    Task,
    #[sea_orm(
        belongs_to = "super::exam::Entity",
        from = "Column::ExamId",
        to = "super::exam::Column::Id"
    )]
    Exam,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::exam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl crate::gateway::Record for Entity {
    const LABEL: &'static str = "Grade";
}

impl ActiveModelBehavior for ActiveModel {}
