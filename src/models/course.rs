use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::days;

/// One scheduled course offering. `id` is the storage row id; 0 means the
/// record has not been saved yet (blank editors and clones start there).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub id: i64,
    #[serde(with = "crate::models::days")]
    pub days: Vec<Weekday>,
    pub classroom: String,
    pub course_name: String,
    pub section: String,
    pub semester: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub grace_minutes: i64,
    pub log_tardy: bool,
}

impl Course {
    pub fn is_saved(&self) -> bool {
        self.id != 0
    }

    /// Letter-pattern rendering of the meeting days, e.g. "TR" or "MWF".
    pub fn friendly_days(&self) -> String {
        days::format_days(&self.days)
    }

    /// Calendar year of the start date, as text.
    pub fn year(&self) -> String {
        self.start_date.year().to_string()
    }

    /// Copy of this course with the identity cleared, ready for a new editor.
    pub fn clone_unsaved(&self) -> Course {
        Course {
            id: 0,
            ..self.clone()
        }
    }

    /// Drops duplicate days and puts them in Monday-first order.
    pub fn normalize_days(&mut self) {
        self.days = days::parse_days(&days::format_days(&self.days));
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.end_date < self.start_date {
            return Err(AppError::Validation(
                "end date precedes start date".to_string(),
            ));
        }
        if self.start_time >= self.end_time {
            return Err(AppError::Validation(
                "start time must precede end time".to_string(),
            ));
        }
        if self.grace_minutes < 0 {
            return Err(AppError::Validation(
                "grace period cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> Course {
        Course {
            id: 7,
            days: vec![Weekday::Tue, Weekday::Thu],
            classroom: "STEM 370".to_string(),
            course_name: "Intro to Databases".to_string(),
            section: "01".to_string(),
            semester: "Fall".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 8, 25).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 12).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 45, 0).unwrap(),
            grace_minutes: 5,
            log_tardy: true,
        }
    }

    #[test]
    fn test_friendly_days_and_year() {
        let course = sample_course();
        assert_eq!(course.friendly_days(), "TR");
        assert_eq!(course.year(), "2025");
    }

    #[test]
    fn test_clone_unsaved_copies_everything_but_id() {
        let course = sample_course();
        let draft = course.clone_unsaved();
        assert_eq!(draft.id, 0);
        assert!(!draft.is_saved());
        assert_eq!(
            Course {
                id: course.id,
                ..draft
            },
            course
        );
    }

    #[test]
    fn test_validate_rejects_inverted_ranges() {
        let mut course = sample_course();
        assert!(course.validate().is_ok());

        course.end_date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        assert!(course.validate().is_err());

        let mut course = sample_course();
        course.end_time = course.start_time;
        assert!(course.validate().is_err());
    }

    #[test]
    fn test_normalize_days_dedupes() {
        let mut course = sample_course();
        course.days = vec![Weekday::Thu, Weekday::Tue, Weekday::Thu];
        course.normalize_days();
        assert_eq!(course.days, vec![Weekday::Tue, Weekday::Thu]);
    }

    #[test]
    fn test_days_serialize_as_pattern() {
        let course = sample_course();
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["days"], "TR");

        let back: Course = serde_json::from_value(json).unwrap();
        assert_eq!(back.days, course.days);
    }
}
