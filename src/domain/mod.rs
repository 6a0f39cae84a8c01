pub mod enums;
pub mod task;
pub mod views;

pub use enums::{Filter, Theme, UiMode};
pub use task::{IdGenerator, Priority, Task, TaskId};
pub use views::{check_mark, count_tasks, visible_rows, TaskCounts, VisibleRow, VisibleTasks};
