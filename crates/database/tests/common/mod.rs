#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use database::{
    Gateway,
    db::DatabaseConfig,
    entities::{curriculum, department, faculty, group, semester},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};

/// Rows every test starts from
pub struct Fixture {
    pub gateway: Gateway,
    pub department_id: i32,
    pub group_id: i32,
    pub other_group_id: i32,
    pub semester_id: i32,
}

pub fn timestamp(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

/// A fresh in-memory database with the schema applied
pub async fn gateway() -> Gateway {
    let mut config = DatabaseConfig::new("sqlite::memory:");
    // every pooled connection would get its own in-memory database
    config.max_connections = 1;

    let gateway = Gateway::connect(&config).await.unwrap();
    Migrator::up(gateway.connection(), None).await.unwrap();
    gateway
}

pub async fn setup() -> Fixture {
    let gateway = gateway().await;
    let db = gateway.connection();

    let faculty = faculty::ActiveModel {
        code: Set("03.03.09".to_string()),
        name: Set("Faculty of Mathematics".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let department = department::ActiveModel {
        faculty_id: Set(faculty.id),
        name: Set("Mathematics Department".to_string()),
        desc: Set(None),
        url: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let group = group::ActiveModel {
        department_id: Set(department.id),
        enrolled_at: Set(timestamp(2024, 9, 1)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let other_group = group::ActiveModel {
        department_id: Set(department.id),
        enrolled_at: Set(timestamp(2023, 9, 1)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let curriculum = curriculum::ActiveModel {
        department_id: Set(department.id),
        name: Set("Beginner Math".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let semester = semester::ActiveModel {
        curriculum_id: Set(curriculum.id),
        start: Set(timestamp(2024, 9, 1)),
        end: Set(timestamp(2024, 12, 20)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    Fixture {
        gateway,
        department_id: department.id,
        group_id: group.id,
        other_group_id: other_group.id,
        semester_id: semester.id,
    }
}
