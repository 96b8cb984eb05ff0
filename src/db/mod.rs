pub mod repository;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{AttendanceRecord, Course};

pub use repository::SqliteCourseStore;

/// Named storage operations the roster session depends on. The session never
/// sees SQL; tests swap in canned or failing stores.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Connectivity test; an error here means the whole store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
    async fn courses_by_instructor(&self, instructor: &str) -> Result<Vec<Course>, AppError>;
    async fn distinct_classrooms(&self) -> Result<Vec<String>, AppError>;
    async fn distinct_day_patterns(&self) -> Result<Vec<String>, AppError>;
    async fn find_course(&self, id: i64) -> Result<Option<Course>, AppError>;
    /// Saves a new course for `instructor` and returns it with its assigned id.
    async fn insert_course(&self, instructor: &str, course: &Course) -> Result<Course, AppError>;
    /// Returns false when no row with the course's id exists.
    async fn update_course(&self, course: &Course) -> Result<bool, AppError>;
    /// Returns false when the row was already gone.
    async fn delete_course(&self, id: i64) -> Result<bool, AppError>;
    async fn attendance_for_course(&self, course_id: i64)
        -> Result<Vec<AttendanceRecord>, AppError>;
}
