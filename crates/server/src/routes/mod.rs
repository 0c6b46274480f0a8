pub mod courses;
pub mod grades;
pub mod health;
pub mod professors;
pub mod root;
pub mod students;
