use crate::{
    doc::ApiDoc,
    routes::{courses, grades, health, professors, root, students},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router with every route and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/students", post(students::add_student))
        .route(
            "/students/{student_id}",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .route("/courses", post(courses::add_course))
        .route(
            "/courses/{course_id}",
            get(courses::get_course).put(courses::update_course),
        )
        .route(
            "/courses/{course_id}/students",
            get(courses::get_course_students),
        )
        .route(
            "/courses/{course_id}/students/{student_id}",
            post(courses::enroll_student),
        )
        .route("/grades", post(grades::add_course_grade))
        .route("/grades/{grade_id}", put(grades::update_course_grade))
        .route(
            "/professors",
            get(professors::get_professors).post(professors::add_professor),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use chrono::NaiveDate;
    use database::{
        Gateway,
        db::DatabaseConfig,
        entities::{department, faculty, group},
    };
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, ActiveValue::Set};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct TestApp {
        router: Router,
        group_id: i32,
        department_id: i32,
    }

    async fn test_app() -> TestApp {
        let mut config = DatabaseConfig::new("sqlite::memory:");
        config.max_connections = 1;
        let gateway = Gateway::connect(&config).await.unwrap();
        Migrator::up(gateway.connection(), None).await.unwrap();

        let db = gateway.connection();
        let faculty = faculty::ActiveModel {
            code: Set("01.03.02".to_string()),
            name: Set("Faculty of Computer Science".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        let department = department::ActiveModel {
            faculty_id: Set(faculty.id),
            name: Set("Software Engineering".to_string()),
            desc: Set(None),
            url: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        let group = group::ActiveModel {
            department_id: Set(department.id),
            enrolled_at: Set(NaiveDate::from_ymd_opt(2024, 9, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();

        TestApp {
            router: router(AppState::new(gateway)),
            group_id: group.id,
            department_id: department.id,
        }
    }

    async fn send(
        app: &TestApp,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health_and_root() {
        let app = test_app().await;

        let response = app
            .router
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"OK");

        let (status, body) = send(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "hi :)" }));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let app = test_app().await;

        let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/students/{student_id}"].is_object());
        assert!(body["paths"]["/grades"].is_object());
    }

    #[tokio::test]
    async fn test_enroll_and_grade_scenario() {
        let app = test_app().await;

        let (status, ann) = send(
            &app,
            Method::POST,
            "/students",
            Some(json!({ "group_id": app.group_id, "name": "Ann" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ann["name"], "Ann");
        assert_eq!(ann["phone"], Value::Null);
        let student_id = ann["id"].as_i64().unwrap();

        let (status, course) = send(
            &app,
            Method::POST,
            "/courses",
            Some(json!({ "name": "Math" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let course_id = course["id"].as_i64().unwrap();

        let grade = json!({ "student_id": student_id, "course_id": course_id, "grade": 5 });
        let (status, body) = send(&app, Method::POST, "/grades", Some(grade.clone())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["statement"],
            "Student cannot be found for the specified course."
        );

        let uri = format!("/courses/{course_id}/students/{student_id}");
        let (status, enrollment) = send(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            enrollment,
            json!({ "course_id": course_id, "student_id": student_id })
        );

        let (status, placed) = send(&app, Method::POST, "/grades", Some(grade.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(placed["grade"], 5);
        assert_eq!(placed["target"], json!({ "kind": "course", "id": course_id }));
        assert_eq!(placed["course_id"], course_id);

        let (status, body) = send(&app, Method::POST, "/grades", Some(grade)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body["statement"],
            "Grade already placed for student in this course."
        );

        let uri = format!("/courses/{course_id}/students");
        let (status, students) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(students, json!([ann]));

        let uri = format!("/students/{student_id}");
        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["statement"], "Student delete failed.");
    }

    #[tokio::test]
    async fn test_student_update_policy() {
        let app = test_app().await;

        let (_, ann) = send(
            &app,
            Method::POST,
            "/students",
            Some(json!({
                "group_id": app.group_id,
                "name": "Ann",
                "phone": "1234567890",
                "address": "123 Main St"
            })),
        )
        .await;
        let uri = format!("/students/{}", ann["id"]);

        let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "phone": "" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, ann);

        let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "address": null }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["address"], Value::Null);
        assert_eq!(body["phone"], "1234567890");

        let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "name": null }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["params"]["field"], "name");
    }

    #[tokio::test]
    async fn test_missing_references_are_404() {
        let app = test_app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/students",
            Some(json!({ "group_id": 999, "name": "Ann" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "statement": "Group with this id does not exist.", "params": 999 })
        );

        let (status, body) = send(&app, Method::GET, "/courses/8", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["params"], 8);

        let (status, _) = send(&app, Method::PUT, "/grades/3", Some(json!({ "grade": 4 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected() {
        let app = test_app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/students",
            Some(json!({ "group_id": app.group_id })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["statement"], "Request body is invalid.");
        assert!(body["params"]["reason"].as_str().unwrap().contains("name"));

        let (status, body) = send(&app, Method::GET, "/students/0", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["params"]["field"], "student_id");

        let (status, body) = send(&app, Method::GET, "/students/abc", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["statement"], "Path parameter is invalid.");
        assert!(body["params"]["reason"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_json_keeps_error_shape() {
        let app = test_app().await;

        let request = Request::post("/students")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"group_id\": "))
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["statement"], "Request body is invalid.");

        let (status, body) = send(&app, Method::PUT, "/grades/1", None).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["statement"], "Request body is invalid.");
    }

    #[tokio::test]
    async fn test_professors_listing() {
        let app = test_app().await;

        let (status, body) = send(&app, Method::GET, "/professors", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, euler) = send(
            &app,
            Method::POST,
            "/professors",
            Some(json!({ "department_id": app.department_id, "name": "Euler" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/professors", None).await;
        assert_eq!(body, json!([euler]));
    }
}
