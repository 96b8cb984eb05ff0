use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::{FromRow, SqlitePool};

use crate::db::CourseStore;
use crate::error::AppError;
use crate::models::{AttendanceRecord, Course, days};

pub struct SqliteCourseStore {
    pool: SqlitePool,
}

impl SqliteCourseStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Raw course row; `days` stays the stored letter pattern until conversion.
#[derive(FromRow)]
struct CourseRow {
    id: i64,
    days: String,
    classroom: String,
    course_name: String,
    section: String,
    semester: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    grace_minutes: i64,
    log_tardy: bool,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            id: row.id,
            days: days::parse_days(&row.days),
            classroom: row.classroom,
            course_name: row.course_name,
            section: row.section,
            semester: row.semester,
            start_date: row.start_date,
            end_date: row.end_date,
            start_time: row.start_time,
            end_time: row.end_time,
            grace_minutes: row.grace_minutes,
            log_tardy: row.log_tardy,
        }
    }
}

const COURSE_COLUMNS: &str = "id, days, classroom, course_name, section, semester, \
     start_date, end_date, start_time, end_time, grace_minutes, log_tardy";

#[async_trait]
impl CourseStore for SqliteCourseStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("select 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn courses_by_instructor(&self, instructor: &str) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE instructor = ? ORDER BY id"
        ))
        .bind(instructor)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn distinct_classrooms(&self) -> Result<Vec<String>, AppError> {
        let classrooms = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT classroom FROM courses ORDER BY classroom",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(classrooms)
    }

    async fn distinct_day_patterns(&self) -> Result<Vec<String>, AppError> {
        let patterns =
            sqlx::query_scalar::<_, String>("SELECT DISTINCT days FROM courses ORDER BY days")
                .fetch_all(&self.pool)
                .await?;

        Ok(patterns)
    }

    async fn find_course(&self, id: i64) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Course::from))
    }

    async fn insert_course(&self, instructor: &str, course: &Course) -> Result<Course, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO courses
                (instructor, course_name, section, semester, classroom, days,
                start_date, end_date, start_time, end_time, grace_minutes, log_tardy)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(instructor)
        .bind(&course.course_name)
        .bind(&course.section)
        .bind(&course.semester)
        .bind(&course.classroom)
        .bind(course.friendly_days())
        .bind(course.start_date)
        .bind(course.end_date)
        .bind(course.start_time)
        .bind(course.end_time)
        .bind(course.grace_minutes)
        .bind(course.log_tardy)
        .execute(&self.pool)
        .await?;

        let mut saved = course.clone();
        saved.id = result.last_insert_rowid();
        saved.normalize_days();
        Ok(saved)
    }

    async fn update_course(&self, course: &Course) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE courses
            SET course_name = ?,
                section = ?,
                semester = ?,
                classroom = ?,
                days = ?,
                start_date = ?,
                end_date = ?,
                start_time = ?,
                end_time = ?,
                grace_minutes = ?,
                log_tardy = ?
            WHERE id = ?
            "#,
        )
        .bind(&course.course_name)
        .bind(&course.section)
        .bind(&course.semester)
        .bind(&course.classroom)
        .bind(course.friendly_days())
        .bind(course.start_date)
        .bind(course.end_date)
        .bind(course.start_time)
        .bind(course.end_time)
        .bind(course.grace_minutes)
        .bind(course.log_tardy)
        .bind(course.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_course(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn attendance_for_course(
        &self,
        course_id: i64,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(
            "SELECT id, course_id, student, logged_at, tardy FROM attendance \
             WHERE course_id = ? ORDER BY logged_at",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
