use crate::{
    patch::Patch,
    validation::{Validate, ValidationError, not_null, patched_id, positive_id},
};
use serde::{Deserialize, Serialize};

/// Payload for enrolling a new student into a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StudentCreate {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub group_id: i32,
    #[cfg_attr(feature = "openapi", schema(example = "Dmitry"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "+12345678901"))]
    pub phone: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Lenina st. 6"))]
    pub address: Option<String>,
}

impl Validate for StudentCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        positive_id("group_id", self.group_id)
    }
}

/// Partial update of a student; absent fields are left as stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StudentUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<i32>, example = 1))]
    pub group_id: Patch<i32>,
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, example = "Ivan"))]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub phone: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub address: Patch<String>,
}

impl Validate for StudentUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        not_null("group_id", &self.group_id)?;
        not_null("name", &self.name)?;
        patched_id("group_id", &self.group_id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_student_create_requires_group_and_name() {
        let missing_name = serde_json::from_str::<StudentCreate>(r#"{"group_id": 1}"#);
        assert!(missing_name.is_err());

        let student: StudentCreate =
            serde_json::from_str(r#"{"group_id": 1, "name": "Ann"}"#).unwrap();
        assert_eq!(student.phone, None);
        assert!(student.validate().is_ok());
    }

    #[test]
    fn test_student_create_rejects_non_positive_group() {
        let student: StudentCreate =
            serde_json::from_str(r#"{"group_id": 0, "name": "Ann"}"#).unwrap();
        assert_eq!(student.validate().unwrap_err().field, "group_id");
    }

    #[test]
    fn test_student_update_rejects_null_name() {
        let update: StudentUpdate = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(update.validate().unwrap_err().field, "name");

        let update: StudentUpdate = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_student_update_serializes_only_provided_fields() {
        let update = StudentUpdate {
            name: Patch::Value("Ann".to_string()),
            phone: Patch::Null,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"name": "Ann", "phone": null})
        );
    }
}
