pub mod editors;
pub mod roster;

pub use editors::{EditorAction, EditorId, EditorRegistry};
pub use roster::{LoadStats, RosterSession};
