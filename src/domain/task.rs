use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Task {
    /// Creates a task with the current wall-clock millisecond as its id.
    /// Ids are only as unique as the clock; callers that need ids distinct
    /// within a collection disambiguate against it (see `TaskList`).
    pub fn new(text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            text: text.into(),
            completed: false,
            priority,
        }
    }
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}
