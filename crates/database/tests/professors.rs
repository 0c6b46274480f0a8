mod common;

use common::setup;
use database::{ServiceError, services::professor::ProfessorService};
use models::professor::ProfessorCreate;
use serde_json::json;

fn professor(department_id: i32, name: &str) -> ProfessorCreate {
    ProfessorCreate {
        department_id,
        name: name.to_string(),
        phone: None,
        address: Some("Office 204".to_string()),
    }
}

#[tokio::test]
async fn test_professors_are_listed_by_id() {
    let fixture = setup().await;
    let gateway = &fixture.gateway;

    assert!(ProfessorService::get_professors(gateway).await.unwrap().is_empty());

    let first = ProfessorService::add_professor(gateway, professor(fixture.department_id, "Euler"))
        .await
        .unwrap();
    let second = ProfessorService::add_professor(gateway, professor(fixture.department_id, "Gauss"))
        .await
        .unwrap();
    assert_eq!(first.address.as_deref(), Some("Office 204"));

    let professors = ProfessorService::get_professors(gateway).await.unwrap();
    assert_eq!(professors, vec![first, second]);
}

#[tokio::test]
async fn test_add_professor_to_unknown_department_is_not_found() {
    let fixture = setup().await;

    let err = ProfessorService::add_professor(&fixture.gateway, professor(31, "Euler"))
        .await
        .unwrap_err();
    match err {
        ServiceError::NotFound { statement, params } => {
            assert_eq!(statement, "Department with this id does not exist.");
            assert_eq!(params, json!(31));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(
        ProfessorService::get_professors(&fixture.gateway)
            .await
            .unwrap()
            .is_empty()
    );
}
