use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub semester_id: Option<i32>,
    pub name: String,
    pub desc: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::semester::Entity",
        from = "Column::SemesterId",
        to = "super::semester::Column::Id"
    )]
    Semester,
    #[sea_orm(has_many = "super::task::Entity")]
    Tasks,
    #[sea_orm(has_many = "super::grade::Entity")]
    Grades,
    #[sea_orm(has_many = "super::timeslot::Entity")]
    Timeslots,
    #[sea_orm(has_many = "super::course_student::Entity")]
    CourseStudents,
    #[sea_orm(has_many = "super::course_professor::Entity")]
    CourseProfessors,
}

impl Related<super::semester::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Semester.def()
    }
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tasks.def()
    }
}

impl Related<super::grade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl Related<super::timeslot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Timeslots.def()
    }
}

impl Related<super::course_student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseStudents.def()
    }
}

impl Related<super::course_professor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseProfessors.def()
    }
}

// Many-to-many relationship with students
impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_student::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_student::Relation::Course.def().rev())
    }
}

// Many-to-many relationship with professors
impl Related<super::professor::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_professor::Relation::Professor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_professor::Relation::Course.def().rev())
    }
}

impl crate::gateway::Record for Entity {
    const LABEL: &'static str = "Course";
}

impl ActiveModelBehavior for ActiveModel {}
