use super::enums::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task identifier: the creation time in milliseconds since the Unix epoch
pub type TaskId = i64;

/// Task priority, fixed when the task is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Next priority in selector order (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ParseError {
                kind: "priority",
                value: s.to_string(),
                expected: "low, medium, high",
            }),
        }
    }
}

/// A single to-do item.
///
/// Field order matches the persisted JSON objects:
/// `{"text": .., "completed": .., "priority": .., "id": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    pub id: TaskId,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>, priority: Priority) -> Self {
        Self {
            text: text.into(),
            completed: false,
            priority,
            id,
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Hands out task ids from the wall clock, never repeating one.
///
/// Two tasks created within the same millisecond (or after the clock steps
/// back) get consecutive ids instead of colliding.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: TaskId,
}

impl IdGenerator {
    /// Start above every id already present in `tasks`
    pub fn after(tasks: &[Task]) -> Self {
        Self {
            last: tasks.iter().map(|t| t.id).max().unwrap_or(0),
        }
    }

    /// Next id, or `None` once the largest id in use is `TaskId::MAX`
    pub fn next_id(&mut self) -> Option<TaskId> {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_ms: TaskId) -> Option<TaskId> {
        let id = now_ms.max(self.last.checked_add(1)?);
        self.last = id;
        Some(id)
    }
}
