use models::ValidationError;
use sea_orm::{DbErr, SqlErr};
use serde_json::{Value, json};
use thiserror::Error;

/// Failure of a domain operation, as surfaced to the transport layer
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced entity does not exist
    #[error("{statement}")]
    NotFound { statement: String, params: Value },

    /// A uniqueness or foreign key constraint was violated, or a business
    /// level duplicate was found. The transaction is rolled back first.
    #[error("{statement}")]
    Conflict {
        statement: String,
        params: Value,
        source: Option<DbErr>,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] DbErr),
}

impl ServiceError {
    pub fn not_found(statement: impl Into<String>, params: Value) -> Self {
        Self::NotFound {
            statement: statement.into(),
            params,
        }
    }

    pub fn conflict(statement: impl Into<String>, params: Value) -> Self {
        Self::Conflict {
            statement: statement.into(),
            params,
            source: None,
        }
    }

    /// Translates an error raised by a write or its commit.
    ///
    /// Constraint violations become [`ServiceError::Conflict`] carrying the
    /// operation's statement; anything else is a datastore failure.
    pub fn from_write(err: DbErr, statement: &str, params: Value) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_))
            | Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::Conflict {
                statement: statement.to_owned(),
                params,
                source: Some(err),
            },
            _ => Self::Database(err),
        }
    }

    /// The human readable statement describing the failure
    pub fn statement(&self) -> String {
        match self {
            Self::NotFound { statement, .. } | Self::Conflict { statement, .. } => {
                statement.clone()
            }
            Self::Validation(err) => format!("Validation failed for `{}`.", err.field),
            Self::Database(_) => "Internal database error.".to_string(),
        }
    }

    /// The parameters that caused the failure
    pub fn params(&self) -> Value {
        match self {
            Self::NotFound { params, .. } | Self::Conflict { params, .. } => params.clone(),
            Self::Validation(err) => json!({ "field": err.field, "reason": err.reason }),
            Self::Database(_) => Value::Null,
        }
    }
}
