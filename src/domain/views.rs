use super::enums::Filter;
use super::task::Task;
use std::iter::FusedIterator;
use std::slice;

/// Lazily filtered view over a task list.
///
/// Yields tasks in list order. A clone is an independent cursor, so the same
/// view can be walked more than once.
#[derive(Debug, Clone)]
pub struct VisibleTasks<'a> {
    inner: slice::Iter<'a, Task>,
    filter: Filter,
}

impl<'a> VisibleTasks<'a> {
    pub fn new(tasks: &'a [Task], filter: Filter) -> Self {
        Self {
            inner: tasks.iter(),
            filter,
        }
    }
}

impl<'a> Iterator for VisibleTasks<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        self.inner.find(|task| filter.matches(task.completed))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a> DoubleEndedIterator for VisibleTasks<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        self.inner.rfind(|task| filter.matches(task.completed))
    }
}

impl FusedIterator for VisibleTasks<'_> {}

/// A row of the filtered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow {
    /// Position in the filtered view
    pub row: usize,
    /// Index of the task in the full list
    pub task_index: usize,
}

/// Map each visible row to its index in the full task list
pub fn visible_rows(tasks: &[Task], filter: Filter) -> Vec<VisibleRow> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| filter.matches(task.completed))
        .enumerate()
        .map(|(row, (task_index, _))| VisibleRow { row, task_index })
        .collect()
}

/// Totals shown in the header and by `dolist list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

pub fn count_tasks(tasks: &[Task]) -> TaskCounts {
    let completed = tasks.iter().filter(|t| t.completed).count();
    TaskCounts {
        total: tasks.len(),
        completed,
        pending: tasks.len() - completed,
    }
}

/// Check-box glyph for a task row
pub fn check_mark(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}
