use crate::patch::Patch;
use thiserror::Error;

/// A request payload that breaks a field-level constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid field `{field}`: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Structural checks run before any datastore access
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Identifiers are positive integers
pub fn positive_id(field: &'static str, id: i32) -> Result<(), ValidationError> {
    if id > 0 {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("must be a positive integer, got {id}"),
        ))
    }
}

pub fn optional_id(field: &'static str, id: Option<i32>) -> Result<(), ValidationError> {
    id.map_or(Ok(()), |id| positive_id(field, id))
}

/// Zero is a blank id and is skipped by the update, so only negatives fail
pub fn patched_id(field: &'static str, id: &Patch<i32>) -> Result<(), ValidationError> {
    optional_id(field, id.as_change().copied())
}

/// Required columns may be left out of an update, but never set to null
pub fn not_null<T>(field: &'static str, patch: &Patch<T>) -> Result<(), ValidationError> {
    if patch.is_null() {
        Err(ValidationError::new(field, "cannot be null"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_positive_id() {
        assert!(positive_id("group_id", 1).is_ok());
        assert_eq!(
            positive_id("group_id", 0).unwrap_err(),
            ValidationError::new("group_id", "must be a positive integer, got 0")
        );
        assert!(positive_id("group_id", -4).is_err());
    }

    #[test]
    fn test_patched_id_ignores_unset_null_and_zero() {
        assert!(patched_id("semester_id", &Patch::Unset).is_ok());
        assert!(patched_id("semester_id", &Patch::Null).is_ok());
        assert!(patched_id("semester_id", &Patch::Value(0)).is_ok());
        assert!(patched_id("semester_id", &Patch::Value(-1)).is_err());
    }

    #[test]
    fn test_not_null() {
        assert!(not_null("name", &Patch::<String>::Unset).is_ok());
        assert!(not_null("name", &Patch::<String>::Null).is_err());
    }
}
