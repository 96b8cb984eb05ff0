use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::db::CourseStore;
use crate::error::AppError;
use crate::models::{AttendanceReport, Course};
use crate::services::editors::{EditorAction, EditorId, EditorRegistry};

/// The signed-in instructor's view of their courses: the loaded list, the
/// filter selectors, and the open editor windows. One per shell process.
pub struct RosterSession {
    store: Arc<dyn CourseStore>,
    instructor: String,
    courses: Vec<Course>,
    classrooms: Vec<String>,
    day_patterns: Vec<String>,
    connected: bool,
    editors: EditorRegistry,
}

#[derive(Debug, Serialize)]
pub struct LoadStats {
    pub courses: usize,
    pub classrooms: usize,
    pub day_patterns: usize,
    pub can_create: bool,
}

impl RosterSession {
    pub fn new(store: Arc<dyn CourseStore>, instructor: impl Into<String>) -> Self {
        Self {
            store,
            instructor: instructor.into(),
            courses: Vec::new(),
            classrooms: Vec::new(),
            day_patterns: Vec::new(),
            connected: false,
            editors: EditorRegistry::default(),
        }
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn classrooms(&self) -> &[String] {
        &self.classrooms
    }

    pub fn day_patterns(&self) -> &[String] {
        &self.day_patterns
    }

    /// Course creation is disabled while storage is unreachable.
    pub fn can_create(&self) -> bool {
        self.connected
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }

    /// Reloads everything from storage. An unreachable store empties the
    /// session and disables creation; a failure while listing a filter
    /// selector only empties that selector.
    pub async fn load(&mut self) -> Result<LoadStats, AppError> {
        if let Err(err) = self.store.ping().await {
            self.connected = false;
            self.courses.clear();
            self.classrooms.clear();
            self.day_patterns.clear();
            return Err(AppError::Unavailable(err.to_string()));
        }
        self.connected = true;

        self.classrooms = match self.store.distinct_classrooms().await {
            Ok(classrooms) => classrooms,
            Err(err) => {
                warn!("classroom listing failed: {}", err);
                Vec::new()
            }
        };

        self.day_patterns = match self.store.distinct_day_patterns().await {
            Ok(patterns) => patterns,
            Err(err) => {
                warn!("day pattern listing failed: {}", err);
                Vec::new()
            }
        };

        self.courses = self.store.courses_by_instructor(&self.instructor).await?;
        info!(
            "loaded {} courses for {}",
            self.courses.len(),
            self.instructor
        );

        Ok(LoadStats {
            courses: self.courses.len(),
            classrooms: self.classrooms.len(),
            day_patterns: self.day_patterns.len(),
            can_create: self.connected,
        })
    }

    /// Subset of the loaded courses matching both constraints; a missing
    /// constraint matches everything. Load order is preserved and storage is
    /// never consulted.
    pub fn filter(&self, classroom: Option<&str>, days: Option<&str>) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|course| classroom.is_none_or(|room| course.classroom == room))
            .filter(|course| days.is_none_or(|pattern| course.friendly_days() == pattern))
            .cloned()
            .collect()
    }

    /// Opens an editor. `None` is the Add button: a blank editor, always new.
    /// For a saved course the existing editor is focused instead of opening a
    /// duplicate.
    pub fn open_editor(&mut self, course_id: Option<i64>) -> Result<EditorAction, AppError> {
        let Some(id) = course_id else {
            return Ok(EditorAction::Opened(self.editors.open_blank()));
        };

        if id == 0 {
            return Ok(EditorAction::Opened(self.editors.open_blank()));
        }
        if !self.courses.iter().any(|course| course.id == id) {
            return Err(AppError::NotFound);
        }
        Ok(self.editors.open_for(id))
    }

    /// The shell calls this when an editor window closes.
    pub fn close_editor(&mut self, handle: EditorId) -> bool {
        self.editors.close(handle)
    }

    /// The shell checks this before closing with a confirmation prompt.
    pub fn has_open_editors(&self) -> bool {
        !self.editors.is_empty()
    }

    /// Removes the course from storage and the loaded list. Confirmation is
    /// the shell's job; by the time this runs the user already agreed.
    pub async fn delete(&mut self, id: i64) -> Result<bool, AppError> {
        let removed = self.store.delete_course(id).await?;
        if removed {
            self.courses.retain(|course| course.id != id);
        }
        Ok(removed)
    }

    /// Unsaved copy of a loaded course, opened in a fresh editor.
    pub fn clone_course(&mut self, id: i64) -> Result<(Course, EditorId), AppError> {
        let source = self
            .courses
            .iter()
            .find(|course| course.id == id)
            .ok_or(AppError::NotFound)?;

        let draft = source.clone_unsaved();
        let handle = self.editors.open_blank();
        Ok((draft, handle))
    }

    /// Editor save: insert when unsaved, update otherwise. The stored record
    /// replaces or extends the loaded list so filters see it immediately.
    pub async fn commit(&mut self, mut course: Course) -> Result<Course, AppError> {
        course.validate()?;
        course.normalize_days();

        if course.id == 0 {
            if !self.connected {
                return Err(AppError::Unavailable(
                    "course creation is disabled while storage is offline".to_string(),
                ));
            }
            let saved = self.store.insert_course(&self.instructor, &course).await?;
            self.courses.push(saved.clone());
            Ok(saved)
        } else {
            if !self.store.update_course(&course).await? {
                return Err(AppError::NotFound);
            }
            if let Some(slot) = self.courses.iter_mut().find(|c| c.id == course.id) {
                *slot = course.clone();
            }
            Ok(course)
        }
    }

    /// The course plus every attendance row logged against it.
    pub async fn report(&self, id: i64) -> Result<AttendanceReport, AppError> {
        let course = self
            .store
            .find_course(id)
            .await?
            .ok_or(AppError::NotFound)?;
        let records = self.store.attendance_for_course(id).await?;

        Ok(AttendanceReport { course, records })
    }
}
