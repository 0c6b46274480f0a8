//! Rendering of domain failures as HTTP responses.

use crate::extract::Json;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::ServiceError;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// What went wrong, e.g. "Group with this id does not exist."
    pub statement: String,
    /// The input that caused it
    #[schema(value_type = Object)]
    pub params: Value,
}

/// Handler error
#[derive(Debug)]
pub enum ApiError {
    /// A domain operation failed
    Service(ServiceError),
    /// The request was turned away by an extractor before reaching a handler
    Rejected {
        status: StatusCode,
        statement: &'static str,
        reason: String,
    },
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            statement: "Request body is invalid.",
            reason: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        // a path that matched a route but holds a malformed id is bad input
        let status = match rejection {
            PathRejection::FailedToDeserializePathParams(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => rejection.status(),
        };

        Self::Rejected {
            status,
            statement: "Path parameter is invalid.",
            reason: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(ServiceError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::Conflict { .. }) => StatusCode::CONFLICT,
            Self::Service(ServiceError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Service(ServiceError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Service(err) => {
                if let ServiceError::Database(err) = &err {
                    error!("Database error: {err}");
                }
                ErrorBody {
                    statement: err.statement(),
                    params: err.params(),
                }
            }
            Self::Rejected {
                statement, reason, ..
            } => {
                debug!("{statement} {reason}");
                ErrorBody {
                    statement: statement.to_string(),
                    params: json!({ "reason": reason }),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use models::ValidationError;
    use sea_orm::DbErr;

    async fn render(err: ServiceError) -> (StatusCode, ErrorBody) {
        let response = ApiError::from(err).into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_is_404() {
        let (status, body) = render(ServiceError::not_found(
            "Group with this id does not exist.",
            json!(3),
        ))
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.statement, "Group with this id does not exist.");
        assert_eq!(body.params, json!(3));
    }

    #[tokio::test]
    async fn test_conflict_is_409() {
        let params = json!({ "student_id": 1, "course_id": 2 });
        let (status, body) = render(ServiceError::conflict(
            "Grade already placed for student in this course.",
            params.clone(),
        ))
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.params, params);
    }

    #[tokio::test]
    async fn test_validation_is_422() {
        let (status, body) = render(ServiceError::Validation(ValidationError::new(
            "group_id",
            "must be a positive integer, got 0",
        )))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.params["field"], "group_id");
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let (status, body) =
            render(ServiceError::Database(DbErr::Custom("connection reset".into()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.statement, "Internal database error.");
        assert_eq!(body.params, Value::Null);
    }
}
