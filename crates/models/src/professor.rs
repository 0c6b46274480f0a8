use crate::validation::{Validate, ValidationError, positive_id};
use serde::{Deserialize, Serialize};

/// Payload for hiring a professor into a department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProfessorCreate {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub department_id: i32,
    #[cfg_attr(feature = "openapi", schema(example = "John"))]
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Validate for ProfessorCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        positive_id("department_id", self.department_id)
    }
}
