pub mod course;
pub mod grade;
pub mod professor;
pub mod student;
