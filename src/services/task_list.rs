use crate::domain::task::{Filter, Priority, Task};

/// All state behind the task list view: the task collection plus the draft
/// form fields and the active filter. Mutations report whether the
/// collection changed so the caller knows when to persist; the filter and
/// draft fields are never persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    pub draft_text: String,
    pub draft_priority: Priority,
    pub filter: Filter,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task with the trimmed text and the given priority, then
    /// clears the draft text and resets the draft priority to Low. Returns
    /// the new task's id, or `None` (and changes nothing) when the text is
    /// empty after trimming.
    pub fn add_task(&mut self, text: &str, priority: Priority) -> Option<i64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut task = Task::new(trimmed, priority);
        // Same-millisecond creations would collide on the timestamp id;
        // bump past the current maximum so ids stay distinct per list.
        if let Some(max) = self.tasks.iter().map(|t| t.id).max() {
            if task.id <= max {
                task.id = max + 1;
            }
        }

        let id = task.id;
        self.tasks.push(task);
        self.draft_text.clear();
        self.draft_priority = Priority::Low;
        Some(id)
    }

    /// Flips `completed` on every task with the given id, preserving order.
    /// Returns whether anything changed.
    pub fn toggle_completion(&mut self, id: i64) -> bool {
        let mut changed = false;
        for task in self.tasks.iter_mut().filter(|t| t.id == id) {
            task.completed = !task.completed;
            changed = true;
        }
        changed
    }

    /// Removes every task with the given id, preserving the relative order
    /// of the rest. Returns whether anything was removed.
    pub fn delete_task(&mut self, id: i64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Tasks matching the active filter, in collection order. A derived
    /// view; the underlying collection is untouched.
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
        let filter = self.filter;
        self.tasks.iter().filter(move |t| filter.matches(t))
    }
}
