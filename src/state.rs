use std::sync::Arc;

use tokio::sync::Mutex;

use crate::services::RosterSession;

/// The one desktop shell talks to us; its actions are serialized through the
/// session mutex, matching the single event thread of the UI.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<RosterSession>>,
}
