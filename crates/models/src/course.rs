use crate::{
    patch::Patch,
    validation::{Validate, ValidationError, not_null, optional_id, patched_id},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseCreate {
    #[cfg_attr(feature = "openapi", schema(example = "Mathematics 1"))]
    pub name: String,
    #[cfg_attr(
        feature = "openapi",
        schema(example = "Applied mathematics for first years")
    )]
    pub desc: Option<String>,
    /// The semester the course runs in, if scheduled already
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub semester_id: Option<i32>,
}

impl Validate for CourseCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        optional_id("semester_id", self.semester_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, example = "Mathematics 2"))]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub desc: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<i32>, example = 2))]
    pub semester_id: Patch<i32>,
}

impl Validate for CourseUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        not_null("name", &self.name)?;
        patched_id("semester_id", &self.semester_id)
    }
}
