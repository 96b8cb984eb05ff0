use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Handle the shell uses to refer to one open editor window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorId(Uuid);

impl EditorId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for EditorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// What the shell should do after asking for an editor: show a new window, or
/// bring the one already editing that course to the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "editor", rename_all = "snake_case")]
pub enum EditorAction {
    Opened(EditorId),
    Focused(EditorId),
}

/// Tracks open editors. Saved courses (non-zero id) get at most one editor;
/// blank editors and unsaved clones are unconstrained.
#[derive(Debug, Default)]
pub struct EditorRegistry {
    open: HashMap<EditorId, i64>,
    by_course: HashMap<i64, EditorId>,
}

impl EditorRegistry {
    pub fn open_blank(&mut self) -> EditorId {
        let handle = EditorId::new();
        self.open.insert(handle, 0);
        handle
    }

    pub fn open_for(&mut self, course_id: i64) -> EditorAction {
        if course_id != 0 {
            if let Some(&existing) = self.by_course.get(&course_id) {
                return EditorAction::Focused(existing);
            }
        }

        let handle = EditorId::new();
        self.open.insert(handle, course_id);
        if course_id != 0 {
            self.by_course.insert(course_id, handle);
        }
        EditorAction::Opened(handle)
    }

    /// Returns false when the handle was not open.
    pub fn close(&mut self, handle: EditorId) -> bool {
        match self.open.remove(&handle) {
            Some(course_id) => {
                if course_id != 0 {
                    self.by_course.remove(&course_id);
                }
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self, course_id: i64) -> bool {
        self.by_course.contains_key(&course_id)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
