use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create faculties table
        manager
            .create_table(
                Table::create()
                    .table(Faculties::Table)
                    .if_not_exists()
                    .col(pk(Faculties::Id))
                    .col(ColumnDef::new(Faculties::Code).string().not_null())
                    .col(ColumnDef::new(Faculties::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create departments table
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(pk(Departments::Id))
                    .col(ColumnDef::new(Departments::FacultyId).integer().not_null())
                    .col(ColumnDef::new(Departments::Name).string().not_null())
                    .col(ColumnDef::new(Departments::Desc).string())
                    .col(ColumnDef::new(Departments::Url).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-departments-faculty_id")
                            .from(Departments::Table, Departments::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create groups table
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(pk(Groups::Id))
                    .col(ColumnDef::new(Groups::DepartmentId).integer().not_null())
                    .col(ColumnDef::new(Groups::EnrolledAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-groups-department_id")
                            .from(Groups::Table, Groups::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(pk(Students::Id))
                    .col(ColumnDef::new(Students::GroupId).integer().not_null())
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Phone).string())
                    .col(ColumnDef::new(Students::Address).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-students-group_id")
                            .from(Students::Table, Students::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create professors table
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(pk(Professors::Id))
                    .col(ColumnDef::new(Professors::DepartmentId).integer().not_null())
                    .col(ColumnDef::new(Professors::Name).string().not_null())
                    .col(ColumnDef::new(Professors::Phone).string())
                    .col(ColumnDef::new(Professors::Address).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-professors-department_id")
                            .from(Professors::Table, Professors::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create curriculums table
        manager
            .create_table(
                Table::create()
                    .table(Curriculums::Table)
                    .if_not_exists()
                    .col(pk(Curriculums::Id))
                    .col(ColumnDef::new(Curriculums::DepartmentId).integer().not_null())
                    .col(ColumnDef::new(Curriculums::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-curriculums-department_id")
                            .from(Curriculums::Table, Curriculums::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create semesters table
        manager
            .create_table(
                Table::create()
                    .table(Semesters::Table)
                    .if_not_exists()
                    .col(pk(Semesters::Id))
                    .col(ColumnDef::new(Semesters::CurriculumId).integer().not_null())
                    .col(ColumnDef::new(Semesters::Start).date_time().not_null())
                    .col(ColumnDef::new(Semesters::End).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-semesters-curriculum_id")
                            .from(Semesters::Table, Semesters::CurriculumId)
                            .to(Curriculums::Table, Curriculums::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(pk(Courses::Id))
                    .col(ColumnDef::new(Courses::SemesterId).integer())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Desc).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-semester_id")
                            .from(Courses::Table, Courses::SemesterId)
                            .to(Semesters::Table, Semesters::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_students junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CourseStudents::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CourseStudents::CourseId).integer().not_null())
                    .col(ColumnDef::new(CourseStudents::StudentId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(CourseStudents::CourseId)
                            .col(CourseStudents::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_students-course_id")
                            .from(CourseStudents::Table, CourseStudents::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_students-student_id")
                            .from(CourseStudents::Table, CourseStudents::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_professors junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CourseProfessors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CourseProfessors::CourseId).integer().not_null())
                    .col(
                        ColumnDef::new(CourseProfessors::ProfessorId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CourseProfessors::CourseId)
                            .col(CourseProfessors::ProfessorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_professors-course_id")
                            .from(CourseProfessors::Table, CourseProfessors::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_professors-professor_id")
                            .from(CourseProfessors::Table, CourseProfessors::ProfessorId)
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create buildings table
        manager
            .create_table(
                Table::create()
                    .table(Buildings::Table)
                    .if_not_exists()
                    .col(pk(Buildings::Id))
                    .col(ColumnDef::new(Buildings::DepartmentId).integer())
                    .col(ColumnDef::new(Buildings::Address).string().not_null())
                    .col(ColumnDef::new(Buildings::Name).string().not_null())
                    .col(ColumnDef::new(Buildings::Floors).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-buildings-department_id")
                            .from(Buildings::Table, Buildings::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create auditoriums table
        manager
            .create_table(
                Table::create()
                    .table(Auditoriums::Table)
                    .if_not_exists()
                    .col(pk(Auditoriums::Id))
                    .col(ColumnDef::new(Auditoriums::BuildingId).integer().not_null())
                    .col(ColumnDef::new(Auditoriums::RoomNumber).integer().not_null())
                    .col(ColumnDef::new(Auditoriums::Floor).integer())
                    .col(ColumnDef::new(Auditoriums::MaxCapacity).integer())
                    .col(ColumnDef::new(Auditoriums::HasProjector).boolean().not_null())
                    .col(ColumnDef::new(Auditoriums::HasBoard).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-auditoriums-building_id")
                            .from(Auditoriums::Table, Auditoriums::BuildingId)
                            .to(Buildings::Table, Buildings::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create classes and exams tables
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(pk(Classes::Id))
                    .col(ColumnDef::new(Classes::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(pk(Exams::Id))
                    .col(ColumnDef::new(Exams::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create timeslots table; a class or exam takes at most one timeslot
        manager
            .create_table(
                Table::create()
                    .table(Timeslots::Table)
                    .if_not_exists()
                    .col(pk(Timeslots::Id))
                    .col(ColumnDef::new(Timeslots::AuditoriumId).integer().not_null())
                    .col(ColumnDef::new(Timeslots::CourseId).integer())
                    .col(ColumnDef::new(Timeslots::ClassId).integer().unique_key())
                    .col(ColumnDef::new(Timeslots::ExamId).integer().unique_key())
                    .col(ColumnDef::new(Timeslots::Start).date_time().not_null())
                    .col(ColumnDef::new(Timeslots::End).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-timeslots-auditorium_id")
                            .from(Timeslots::Table, Timeslots::AuditoriumId)
                            .to(Auditoriums::Table, Auditoriums::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-timeslots-course_id")
                            .from(Timeslots::Table, Timeslots::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-timeslots-class_id")
                            .from(Timeslots::Table, Timeslots::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-timeslots-exam_id")
                            .from(Timeslots::Table, Timeslots::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create tasks table
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(pk(Tasks::Id))
                    .col(ColumnDef::new(Tasks::CourseId).integer().not_null())
                    .col(ColumnDef::new(Tasks::Name).string().not_null())
                    .col(ColumnDef::new(Tasks::Desc).string())
                    .col(ColumnDef::new(Tasks::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Tasks::Deadline).date_time())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tasks-course_id")
                            .from(Tasks::Table, Tasks::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create grades table; deleting a graded student is refused
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(pk(Grades::Id))
                    .col(ColumnDef::new(Grades::StudentId).integer().not_null())
                    .col(ColumnDef::new(Grades::Grade).integer().not_null())
                    .col(ColumnDef::new(Grades::TaskId).integer())
                    .col(ColumnDef::new(Grades::ExamId).integer())
                    .col(ColumnDef::new(Grades::CourseId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-grades-student_id")
                            .from(Grades::Table, Grades::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-grades-task_id")
                            .from(Grades::Table, Grades::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-grades-exam_id")
                            .from(Grades::Table, Grades::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-grades-course_id")
                            .from(Grades::Table, Grades::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Timeslots::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Auditoriums::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Buildings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseProfessors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseStudents::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Semesters::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Curriculums::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Professors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Faculties::Table).to_owned())
            .await?;

        Ok(())
    }
}

/// Auto-incrementing integer primary key
fn pk<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[derive(Iden)]
enum Faculties {
    Table,
    Id,
    Code,
    Name,
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
    FacultyId,
    Name,
    Desc,
    Url,
}

#[derive(Iden)]
enum Groups {
    Table,
    Id,
    DepartmentId,
    EnrolledAt,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    GroupId,
    Name,
    Phone,
    Address,
}

#[derive(Iden)]
enum Professors {
    Table,
    Id,
    DepartmentId,
    Name,
    Phone,
    Address,
}

#[derive(Iden)]
enum Curriculums {
    Table,
    Id,
    DepartmentId,
    Name,
}

#[derive(Iden)]
enum Semesters {
    Table,
    Id,
    CurriculumId,
    Start,
    End,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    SemesterId,
    Name,
    Desc,
}

#[derive(Iden)]
enum CourseStudents {
    Table,
    CourseId,
    StudentId,
}

#[derive(Iden)]
enum CourseProfessors {
    Table,
    CourseId,
    ProfessorId,
}

#[derive(Iden)]
enum Buildings {
    Table,
    Id,
    DepartmentId,
    Address,
    Name,
    Floors,
}

#[derive(Iden)]
enum Auditoriums {
    Table,
    Id,
    BuildingId,
    RoomNumber,
    Floor,
    MaxCapacity,
    HasProjector,
    HasBoard,
}

#[derive(Iden)]
enum Classes {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Exams {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Timeslots {
    Table,
    Id,
    AuditoriumId,
    CourseId,
    ClassId,
    ExamId,
    Start,
    End,
}

#[derive(Iden)]
enum Tasks {
    Table,
    Id,
    CourseId,
    Name,
    Desc,
    CreatedAt,
    Deadline,
}

#[derive(Iden)]
enum Grades {
    Table,
    Id,
    StudentId,
    Grade,
    TaskId,
    ExamId,
    CourseId,
}
