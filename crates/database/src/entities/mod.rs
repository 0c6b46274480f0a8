pub mod auditorium;
pub mod building;
pub mod class;
pub mod course;
pub mod course_professor;
pub mod course_student;
pub mod curriculum;
pub mod department;
pub mod exam;
pub mod faculty;
pub mod grade;
pub mod group;
pub mod professor;
pub mod semester;
pub mod student;
pub mod task;
pub mod timeslot;
