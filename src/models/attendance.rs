use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::course::Course;

/// One sign-in logged by the student-facing client. This service only reads
/// these rows; the report view groups them under their course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AttendanceRecord {
    pub id: i64,
    pub course_id: i64,
    pub student: String,
    pub logged_at: NaiveDateTime,
    pub tardy: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceReport {
    pub course: Course,
    pub records: Vec<AttendanceRecord>,
}
