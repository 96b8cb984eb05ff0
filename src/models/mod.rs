pub mod attendance;
pub mod course;
pub mod days;

pub use attendance::{AttendanceRecord, AttendanceReport};
pub use course::Course;
