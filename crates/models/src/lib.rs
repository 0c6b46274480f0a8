//! Request shapes and field-level validation shared by the database and
//! server crates.

pub mod course;
pub mod grade;
pub mod patch;
pub mod professor;
pub mod student;
pub mod validation;

pub use patch::Patch;
pub use validation::{Validate, ValidationError};
