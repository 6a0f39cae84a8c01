//! JSON encoding of the two persisted entries.
//!
//! The layout matches what the browser version kept in local storage, so an
//! exported `tasks` value can be dropped into a data directory as-is.

use crate::domain::Task;

/// Key of the serialized task list
pub const TASKS_KEY: &str = "tasks";

/// Key of the serialized dark-mode flag
pub const THEME_KEY: &str = "darkMode";

pub fn encode_tasks(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string(tasks)
}

/// Decode a stored task list. A JSON `null` counts as "nothing stored".
pub fn decode_tasks(raw: &str) -> serde_json::Result<Option<Vec<Task>>> {
    serde_json::from_str(raw)
}

pub fn encode_theme(dark_mode: bool) -> String {
    // serde_json renders booleans as bare `true` / `false`
    dark_mode.to_string()
}

/// Decode a stored dark-mode flag. A JSON `null` counts as "nothing stored".
pub fn decode_theme(raw: &str) -> serde_json::Result<Option<bool>> {
    serde_json::from_str(raw)
}
