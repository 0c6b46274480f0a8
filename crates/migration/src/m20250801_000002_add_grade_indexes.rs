use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One course grade per student
        manager
            .create_index(
                Index::create()
                    .name("idx_grades_student_id_course_id")
                    .table(Grades::Table)
                    .col(Grades::StudentId)
                    .col(Grades::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index on course_students.student_id for the reverse join
        manager
            .create_index(
                Index::create()
                    .name("idx_course_students_student_id")
                    .table(CourseStudents::Table)
                    .col(CourseStudents::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_group_id")
                    .table(Students::Table)
                    .col(Students::GroupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_grades_student_id_course_id")
                    .table(Grades::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_students_student_id")
                    .table(CourseStudents::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_students_group_id")
                    .table(Students::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Grades {
    Table,
    StudentId,
    CourseId,
}

#[derive(Iden)]
enum CourseStudents {
    Table,
    StudentId,
}

#[derive(Iden)]
enum Students {
    Table,
    GroupId,
}
