mod common;

use common::setup;
use database::{
    ServiceError,
    entities::{grade, student},
    services::{course::CourseService, grade::GradeService, student::StudentService},
};
use models::{
    course::CourseCreate,
    grade::{CourseGradeCreate, CourseGradeUpdate, GradeTarget},
    student::StudentCreate,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

struct Enrollment {
    student: student::Model,
    course_id: i32,
}

async fn student_and_course(fixture: &common::Fixture) -> Enrollment {
    let gateway = &fixture.gateway;
    let student = StudentService::add_student(
        gateway,
        StudentCreate {
            group_id: fixture.group_id,
            name: "Ann".to_string(),
            phone: None,
            address: None,
        },
    )
    .await
    .unwrap();
    let course = CourseService::add_course(
        gateway,
        CourseCreate {
            name: "Math".to_string(),
            desc: None,
            semester_id: Some(fixture.semester_id),
        },
    )
    .await
    .unwrap();

    Enrollment {
        student,
        course_id: course.id,
    }
}

fn grade_of(enrollment: &Enrollment, grade: i32) -> CourseGradeCreate {
    CourseGradeCreate {
        student_id: enrollment.student.id,
        course_id: enrollment.course_id,
        grade,
    }
}

#[tokio::test]
async fn test_grading_requires_enrollment_and_happens_once() {
    let fixture = setup().await;
    let gateway = &fixture.gateway;
    let ann = student_and_course(&fixture).await;

    let err = GradeService::add_course_grade(gateway, grade_of(&ann, 5))
        .await
        .unwrap_err();
    match err {
        ServiceError::NotFound { statement, params } => {
            assert_eq!(statement, "Student cannot be found for the specified course.");
            assert_eq!(
                params,
                json!({ "student_id": ann.student.id, "course_id": ann.course_id })
            );
        }
        other => panic!("expected NotFound, got {other:?}"),
    }

    CourseService::enroll_student(gateway, ann.course_id, ann.student.id)
        .await
        .unwrap();

    let graded = GradeService::add_course_grade(gateway, grade_of(&ann, 5))
        .await
        .unwrap();
    assert_eq!(graded.student_id, ann.student.id);
    assert_eq!(graded.grade, 5);
    assert_eq!(graded.target(), GradeTarget::Course(ann.course_id));

    let err = GradeService::add_course_grade(gateway, grade_of(&ann, 4))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict { ref statement, .. } if statement == "Grade already placed for student in this course."));

    let grades = grade::Entity::find()
        .all(gateway.connection())
        .await
        .unwrap();
    assert_eq!(grades, vec![graded]);
}

#[tokio::test]
async fn test_grade_for_unknown_student_is_not_found() {
    let fixture = setup().await;
    let ann = student_and_course(&fixture).await;

    let input = CourseGradeCreate {
        student_id: ann.student.id + 100,
        course_id: ann.course_id,
        grade: 3,
    };
    let err = GradeService::add_course_grade(&fixture.gateway, input)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));

    let count = grade::Entity::find()
        .count(fixture.gateway.connection())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_enrollment_in_other_course_does_not_count() {
    let fixture = setup().await;
    let gateway = &fixture.gateway;
    let ann = student_and_course(&fixture).await;
    let physics = CourseService::add_course(
        gateway,
        CourseCreate {
            name: "Physics".to_string(),
            desc: None,
            semester_id: None,
        },
    )
    .await
    .unwrap();
    CourseService::enroll_student(gateway, physics.id, ann.student.id)
        .await
        .unwrap();

    let err = GradeService::add_course_grade(gateway, grade_of(&ann, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
}

#[tokio::test]
async fn test_update_course_grade() {
    let fixture = setup().await;
    let gateway = &fixture.gateway;
    let ann = student_and_course(&fixture).await;
    CourseService::enroll_student(gateway, ann.course_id, ann.student.id)
        .await
        .unwrap();
    let graded = GradeService::add_course_grade(gateway, grade_of(&ann, 3))
        .await
        .unwrap();

    let updated = GradeService::update_course_grade(gateway, graded.id, CourseGradeUpdate { grade: 4 })
        .await
        .unwrap();
    assert_eq!(updated.id, graded.id);
    assert_eq!(updated.grade, 4);
    assert_eq!(updated.target(), graded.target());
}

#[tokio::test]
async fn test_update_missing_grade_is_not_found() {
    let fixture = setup().await;

    let err = GradeService::update_course_grade(&fixture.gateway, 9, CourseGradeUpdate { grade: 4 })
        .await
        .unwrap_err();
    match err {
        ServiceError::NotFound { statement, params } => {
            assert_eq!(statement, "Grade with this id does not exist.");
            assert_eq!(params, json!(9));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}
