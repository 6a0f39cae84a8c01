use crate::domain::{
    count_tasks, visible_rows, Filter, IdGenerator, Priority, Task, TaskCounts, TaskId, Theme,
    UiMode, VisibleRow, VisibleTasks,
};
use crate::persistence::{self, KeyValueStore, StoreError, TASKS_KEY, THEME_KEY};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned by task list operations
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task index {index} is out of range (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no task is being edited")]
    NotEditing,
    #[error("the task being edited (id {0}) no longer exists")]
    EditTargetMissing(TaskId),
    #[error("no task id left above {0}")]
    IdsExhausted(TaskId),
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The single shared edit buffer and the task it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    /// Tracked by id so inserts, deletes and duplicate texts cannot retarget the save
    pub task_id: TaskId,
    pub buffer: String,
}

/// Main application state: the task list, the transient UI state and the
/// theme flag, written through to `store` after every mutation.
pub struct AppState<S: KeyValueStore> {
    store: S,
    tasks: Vec<Task>,
    ids: IdGenerator,
    dark_mode: bool,
    filter: Filter,
    input: String,
    priority: Priority,
    edit: Option<EditState>,
    selected_row: usize,
    pub ui_mode: UiMode,
    pub status: Option<String>,
}

impl<S: KeyValueStore> AppState<S> {
    /// Load the persisted task list and theme from `store`.
    ///
    /// Absent or unreadable entries fall back to an empty list and the light
    /// theme.
    pub fn initialize(store: S) -> Self {
        let tasks = load_entry(&store, TASKS_KEY, persistence::decode_tasks).unwrap_or_default();
        let dark_mode = load_entry(&store, THEME_KEY, persistence::decode_theme).unwrap_or(false);
        info!(tasks = tasks.len(), dark_mode, "session initialized");

        Self {
            ids: IdGenerator::after(&tasks),
            store,
            tasks,
            dark_mode,
            filter: Filter::default(),
            input: String::new(),
            priority: Priority::default(),
            edit: None,
            selected_row: 0,
            ui_mode: UiMode::Normal,
            status: None,
        }
    }

    /// Use `priority` as the initial priority selection
    pub fn with_default_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn edit(&self) -> Option<&EditState> {
        self.edit.as_ref()
    }

    /// Edit mode is the presence of an edit state
    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn counts(&self) -> TaskCounts {
        count_tasks(&self.tasks)
    }

    fn task_at(&self, index: usize) -> Result<&Task, TaskError> {
        self.tasks.get(index).ok_or(TaskError::IndexOutOfRange {
            index,
            len: self.tasks.len(),
        })
    }

    fn task_at_mut(&mut self, index: usize) -> Result<&mut Task, TaskError> {
        let len = self.tasks.len();
        self.tasks
            .get_mut(index)
            .ok_or(TaskError::IndexOutOfRange { index, len })
    }

    /// Append a new task. Empty text is ignored and returns `Ok(None)`.
    pub fn add_task(&mut self, text: &str, priority: Priority) -> Result<Option<TaskId>, TaskError> {
        if text.is_empty() {
            debug!("ignoring empty task text");
            return Ok(None);
        }

        let max_id = self.tasks.iter().map(|t| t.id).max().unwrap_or_default();
        let id = self.ids.next_id().ok_or(TaskError::IdsExhausted(max_id))?;
        self.tasks.push(Task::new(id, text, priority));
        self.input.clear();
        debug!(id, %priority, "task added");

        self.persist_tasks()?;
        Ok(Some(id))
    }

    /// Enter edit mode for the task at `index`, seeding the edit buffer with its text.
    ///
    /// An edit already in progress is replaced; its unsaved text is dropped.
    pub fn begin_edit(&mut self, index: usize) -> Result<(), TaskError> {
        let (task_id, buffer) = {
            let task = self.task_at(index)?;
            (task.id, task.text.clone())
        };
        if let Some(previous) = &self.edit {
            if previous.task_id != task_id {
                debug!(from = previous.task_id, to = task_id, "switching edit target");
            }
        }

        self.edit = Some(EditState { task_id, buffer });
        self.ui_mode = UiMode::EditingTask;
        Ok(())
    }

    /// Write the edit buffer into the task being edited and leave edit mode.
    ///
    /// Returns `Ok(false)` and stays in edit mode when the buffer is empty.
    pub fn save_edit(&mut self) -> Result<bool, TaskError> {
        let edit = self.edit.take().ok_or(TaskError::NotEditing)?;
        if edit.buffer.is_empty() {
            self.edit = Some(edit);
            return Ok(false);
        }

        self.ui_mode = UiMode::Normal;
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == edit.task_id)
            .ok_or(TaskError::EditTargetMissing(edit.task_id))?;
        task.text = edit.buffer;
        debug!(id = edit.task_id, "task edited");

        self.persist_tasks()?;
        Ok(true)
    }

    /// Leave edit mode without touching any task
    pub fn cancel_edit(&mut self) {
        self.edit = None;
        if self.ui_mode == UiMode::EditingTask {
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Flip the completion flag of the task at `index`, returning the new value
    pub fn toggle_completion(&mut self, index: usize) -> Result<bool, TaskError> {
        let task = self.task_at_mut(index)?;
        task.toggle();
        let completed = task.completed;
        debug!(id = task.id, completed, "task toggled");

        // The toggled task may have left the current view
        self.clamp_selection();
        self.persist_tasks()?;
        Ok(completed)
    }

    /// Remove the task at `index`, keeping the order of the others
    pub fn delete_task(&mut self, index: usize) -> Result<Task, TaskError> {
        self.task_at(index)?;
        let removed = self.tasks.remove(index);
        debug!(id = removed.id, "task deleted");

        if self.edit.as_ref().map(|e| e.task_id) == Some(removed.id) {
            self.cancel_edit();
        }
        self.clamp_selection();

        self.persist_tasks()?;
        Ok(removed)
    }

    /// Change the view filter. Nothing is persisted.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.clamp_selection();
    }

    /// Tasks passing the current filter, in list order
    pub fn visible_tasks(&self) -> VisibleTasks<'_> {
        VisibleTasks::new(&self.tasks, self.filter)
    }

    /// Visible rows with their index in the full list
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        visible_rows(&self.tasks, self.filter)
    }

    /// Flip dark mode and persist only the theme entry
    pub fn toggle_theme(&mut self) -> Result<bool, TaskError> {
        self.dark_mode = !self.dark_mode;
        debug!(dark_mode = self.dark_mode, "theme toggled");
        self.store
            .set(THEME_KEY, &persistence::encode_theme(self.dark_mode))?;
        Ok(self.dark_mode)
    }

    fn persist_tasks(&mut self) -> Result<(), TaskError> {
        let raw = persistence::encode_tasks(&self.tasks).map_err(|source| TaskError::Encode {
            key: TASKS_KEY,
            source,
        })?;
        self.store.set(TASKS_KEY, &raw)?;
        Ok(())
    }

    // ---- Selection (rows of the filtered view) ----

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Index in the full list of the selected visible task
    pub fn selected_task_index(&self) -> Option<usize> {
        self.visible_rows()
            .into_iter()
            .find(|row| row.row == self.selected_row)
            .map(|row| row.task_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_row + 1 < self.visible_tasks().count() {
            self.selected_row += 1;
        }
    }

    fn select_task(&mut self, id: TaskId) {
        if let Some(row) = self.visible_tasks().position(|t| t.id == id) {
            self.selected_row = row;
        }
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_tasks().count();
        if visible == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= visible {
            self.selected_row = visible - 1;
        }
    }

    pub fn toggle_selected(&mut self) -> Result<(), TaskError> {
        if let Some(index) = self.selected_task_index() {
            let completed = self.toggle_completion(index)?;
            self.set_status(if completed { "Completed" } else { "Reopened" });
        }
        Ok(())
    }

    pub fn delete_selected(&mut self) -> Result<(), TaskError> {
        if let Some(index) = self.selected_task_index() {
            let removed = self.delete_task(index)?;
            self.set_status(format!("Deleted \"{}\"", removed.text));
        }
        Ok(())
    }

    pub fn edit_selected(&mut self) -> Result<(), TaskError> {
        if let Some(index) = self.selected_task_index() {
            self.begin_edit(index)?;
        }
        Ok(())
    }

    // ---- Input buffers ----

    /// Open the new-task input bar
    pub fn start_add_task(&mut self) {
        self.ui_mode = UiMode::AddingTask;
    }

    /// Close the new-task input bar and drop its text
    pub fn cancel_add_task(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Add the input buffer as a task with the selected priority
    pub fn submit_input(&mut self) -> Result<Option<TaskId>, TaskError> {
        let text = self.input.clone();
        let added = self.add_task(&text, self.priority)?;
        if let Some(id) = added {
            self.ui_mode = UiMode::Normal;
            self.select_task(id);
            self.set_status("Added");
        }
        Ok(added)
    }

    pub fn cycle_priority(&mut self) {
        self.priority = self.priority.next();
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    pub fn edit_add_char(&mut self, c: char) {
        if let Some(edit) = &mut self.edit {
            edit.buffer.push(c);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(edit) = &mut self.edit {
            edit.buffer.pop();
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    #[cfg(test)]
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Read and decode one persisted entry, treating every failure as "absent"
fn load_entry<S, T>(
    store: &S,
    key: &str,
    decode: fn(&str) -> serde_json::Result<Option<T>>,
) -> Option<T>
where
    S: KeyValueStore,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "nothing stored, using default");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read stored value, using default");
            return None;
        }
    };

    match decode(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "stored value is malformed, using default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn create_test_app() -> AppState<MemoryStore> {
        AppState::initialize(MemoryStore::new())
    }

    fn texts(app: &AppState<MemoryStore>) -> Vec<&str> {
        app.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    /// Store whose writes always fail
    #[derive(Default)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write {
                path: key.into(),
                message: "read-only".to_string(),
            })
        }
    }

    #[test]
    fn test_initialize_empty_store() {
        let app = create_test_app();
        assert!(app.tasks().is_empty());
        assert!(!app.dark_mode());
        assert_eq!(app.filter(), Filter::All);
        assert_eq!(app.priority(), Priority::Medium);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.is_editing());
    }

    #[test]
    fn test_initialize_with_malformed_entries() {
        let mut store = MemoryStore::new();
        store.set(TASKS_KEY, "{oops").unwrap();
        store.set(THEME_KEY, "\"dark\"").unwrap();

        let app = AppState::initialize(store);
        assert!(app.tasks().is_empty());
        assert!(!app.dark_mode());
    }

    #[test]
    fn test_add_task() {
        let mut app = create_test_app();
        let id = app.add_task("Buy milk", Priority::High).unwrap();

        assert!(id.is_some());
        assert_eq!(app.tasks().len(), 1);
        assert!(!app.tasks()[0].completed);
        assert_eq!(app.tasks()[0].priority, Priority::High);
        assert_eq!(app.tasks()[0].id, id.unwrap());
    }

    #[test]
    fn test_add_empty_task_is_ignored() {
        let mut app = create_test_app();
        app.add_task("Keep", Priority::Low).unwrap();

        assert_eq!(app.add_task("", Priority::High).unwrap(), None);
        assert_eq!(texts(&app), vec!["Keep"]);
    }

    #[test]
    fn test_add_task_ids_are_unique() {
        let mut app = create_test_app();
        for i in 0..20 {
            app.add_task(&format!("task {}", i), Priority::Low).unwrap();
        }
        let ids: HashSet<_> = app.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_submit_input_clears_buffer() {
        let mut app = create_test_app();
        app.start_add_task();
        for c in "Water plants".chars() {
            app.input_add_char(c);
        }
        app.cycle_priority();

        app.submit_input().unwrap();
        assert_eq!(app.input(), "");
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks()[0].text, "Water plants");
        assert_eq!(app.tasks()[0].priority, Priority::High);
    }

    #[test]
    fn test_submit_empty_input_stays_in_adding_mode() {
        let mut app = create_test_app();
        app.start_add_task();
        assert_eq!(app.submit_input().unwrap(), None);
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn test_toggle_completion_is_self_inverse() {
        let mut app = create_test_app();
        app.add_task("Clean", Priority::Medium).unwrap();

        assert!(app.toggle_completion(0).unwrap());
        assert!(!app.toggle_completion(0).unwrap());
        assert!(!app.tasks()[0].completed);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut app = create_test_app();
        for text in ["a", "b", "c", "d"] {
            app.add_task(text, Priority::Low).unwrap();
        }

        let removed = app.delete_task(1).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(texts(&app), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_out_of_range_index_fails_fast() {
        let mut app = create_test_app();
        app.add_task("only", Priority::Low).unwrap();

        assert!(matches!(
            app.toggle_completion(1),
            Err(TaskError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            app.delete_task(5),
            Err(TaskError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert!(matches!(
            app.begin_edit(1),
            Err(TaskError::IndexOutOfRange { .. })
        ));
        assert_eq!(texts(&app), vec!["only"]);
        assert!(!app.tasks()[0].completed);
    }

    #[test]
    fn test_edit_round_trip() {
        let mut app = create_test_app();
        app.add_task("Buy milk", Priority::Low).unwrap();

        app.begin_edit(0).unwrap();
        assert_eq!(app.edit().unwrap().buffer, "Buy milk");
        assert_eq!(app.ui_mode, UiMode::EditingTask);

        for c in " and eggs".chars() {
            app.edit_add_char(c);
        }
        assert!(app.save_edit().unwrap());
        assert_eq!(app.tasks()[0].text, "Buy milk and eggs");
        assert!(!app.is_editing());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_edit_targets_task_by_id_not_text() {
        let mut app = create_test_app();
        app.add_task("Same", Priority::Low).unwrap();
        app.add_task("Same", Priority::High).unwrap();

        app.begin_edit(1).unwrap();
        app.edit_backspace();
        app.edit_add_char('E');
        // Removing an earlier task shifts indices but not the edit target
        app.delete_task(0).unwrap();
        app.save_edit().unwrap();

        assert_eq!(texts(&app), vec!["SamE"]);
        assert_eq!(app.tasks()[0].priority, Priority::High);
    }

    #[test]
    fn test_begin_edit_switches_target() {
        let mut app = create_test_app();
        app.add_task("first", Priority::Low).unwrap();
        app.add_task("second", Priority::Low).unwrap();

        app.begin_edit(0).unwrap();
        app.edit_add_char('!');
        app.begin_edit(1).unwrap();
        assert_eq!(app.edit().unwrap().buffer, "second");

        app.edit_add_char('?');
        app.save_edit().unwrap();
        assert_eq!(texts(&app), vec!["first", "second?"]);
    }

    #[test]
    fn test_save_edit_without_edit_mode() {
        let mut app = create_test_app();
        assert!(matches!(app.save_edit(), Err(TaskError::NotEditing)));
    }

    #[test]
    fn test_save_empty_edit_is_rejected() {
        let mut app = create_test_app();
        app.add_task("x", Priority::Low).unwrap();
        app.begin_edit(0).unwrap();
        app.edit_backspace();

        assert!(!app.save_edit().unwrap());
        assert!(app.is_editing());
        assert_eq!(app.tasks()[0].text, "x");
    }

    #[test]
    fn test_deleting_edit_target_leaves_edit_mode() {
        let mut app = create_test_app();
        app.add_task("doomed", Priority::Low).unwrap();
        app.begin_edit(0).unwrap();

        app.delete_task(0).unwrap();
        assert!(!app.is_editing());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_cancel_edit_keeps_text() {
        let mut app = create_test_app();
        app.add_task("keep me", Priority::Low).unwrap();
        app.begin_edit(0).unwrap();
        app.edit_add_char('?');
        app.cancel_edit();

        assert_eq!(app.tasks()[0].text, "keep me");
        assert!(!app.is_editing());
    }

    #[test]
    fn test_filter_does_not_mutate_list() {
        let mut app = create_test_app();
        app.add_task("Buy milk", Priority::Medium).unwrap();
        app.add_task("Clean", Priority::Medium).unwrap();
        app.toggle_completion(1).unwrap();

        app.set_filter(Filter::Completed);
        let visible: Vec<_> = app.visible_tasks().map(|t| t.text.as_str()).collect();
        assert_eq!(visible, vec!["Clean"]);

        app.set_filter(Filter::Pending);
        let visible: Vec<_> = app.visible_tasks().map(|t| t.text.as_str()).collect();
        assert_eq!(visible, vec!["Buy milk"]);

        app.set_filter(Filter::All);
        let visible: Vec<_> = app.visible_tasks().map(|t| t.text.as_str()).collect();
        assert_eq!(visible, vec!["Buy milk", "Clean"]);
        assert_eq!(app.tasks().len(), 2);
    }

    #[test]
    fn test_selection_maps_filtered_row_to_full_index() {
        let mut app = create_test_app();
        app.add_task("open", Priority::Low).unwrap();
        app.add_task("done", Priority::Low).unwrap();
        app.toggle_completion(1).unwrap();

        app.set_filter(Filter::Completed);
        assert_eq!(app.selected_task_index(), Some(1));

        app.toggle_selected().unwrap();
        assert!(!app.tasks()[1].completed);
        assert!(app.visible_tasks().next().is_none());
        assert_eq!(app.selected_task_index(), None);
    }

    #[test]
    fn test_move_selection_is_bounded() {
        let mut app = create_test_app();
        app.add_task("a", Priority::Low).unwrap();
        app.add_task("b", Priority::Low).unwrap();

        app.move_selection_up();
        assert_eq!(app.selected_row(), 0);
        app.move_selection_down();
        app.move_selection_down();
        assert_eq!(app.selected_row(), 1);
    }

    #[test]
    fn test_persisted_round_trip() {
        let mut app = create_test_app();
        app.add_task("Task A", Priority::High).unwrap();
        app.add_task("Task B", Priority::Low).unwrap();
        app.toggle_completion(0).unwrap();
        let before = app.tasks().to_vec();

        let reloaded = AppState::initialize(app.into_store());
        assert_eq!(reloaded.tasks(), before.as_slice());
    }

    #[test]
    fn test_deleting_last_task_persists_empty_list() {
        let mut app = create_test_app();
        app.add_task("only", Priority::Low).unwrap();
        app.delete_task(0).unwrap();

        let store = app.into_store();
        assert_eq!(store.get(TASKS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_theme_persists_across_sessions() {
        let mut app = create_test_app();
        assert!(app.toggle_theme().unwrap());
        assert_eq!(app.theme(), Theme::Dark);

        let store = app.into_store();
        assert_eq!(store.get(TASKS_KEY).unwrap(), None);

        let reloaded = AppState::initialize(store);
        assert!(reloaded.dark_mode());
    }

    #[test]
    fn test_set_filter_does_not_persist() {
        let mut app = create_test_app();
        app.set_filter(Filter::Pending);
        let store = app.into_store();
        assert_eq!(store.get(TASKS_KEY).unwrap(), None);
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_store_failure_is_reported_but_state_kept() {
        let mut app = AppState::initialize(ReadOnlyStore);
        let result = app.add_task("unsaved", Priority::Low);

        assert!(matches!(result, Err(TaskError::Store(_))));
        assert_eq!(app.tasks().len(), 1);
    }

    #[test]
    fn test_save_edit_store_failure_keeps_new_text() {
        let mut app = AppState::initialize(ReadOnlyStore);
        assert!(app.add_task("draft", Priority::Low).is_err());
        app.begin_edit(0).unwrap();
        app.edit_add_char('!');

        let result = app.save_edit();

        assert!(matches!(result, Err(TaskError::Store(_))));
        assert_eq!(app.tasks()[0].text, "draft!");
        assert!(!app.is_editing());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_toggle_theme_store_failure_keeps_flag() {
        let mut app = AppState::initialize(ReadOnlyStore);

        let result = app.toggle_theme();

        assert!(matches!(result, Err(TaskError::Store(_))));
        assert!(app.dark_mode());
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_add_task_after_max_id_is_an_error() {
        let mut store = MemoryStore::new();
        store
            .set(
                TASKS_KEY,
                r#"[{"text":"x","completed":false,"priority":"Low","id":9223372036854775807}]"#,
            )
            .unwrap();
        let mut app = AppState::initialize(store);

        let result = app.add_task("y", Priority::Low);

        assert!(matches!(result, Err(TaskError::IdsExhausted(TaskId::MAX))));
        assert_eq!(texts(&app), vec!["x"]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut app = create_test_app();
        app.add_task("Task A", Priority::High).unwrap();
        app.add_task("Task B", Priority::Low).unwrap();
        app.delete_task(0).unwrap();

        assert_eq!(app.tasks().len(), 1);
        let task = &app.tasks()[0];
        assert_eq!(task.text, "Task B");
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Low);
    }
}
