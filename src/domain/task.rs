use serde::{Deserialize, Serialize};

/// Caption shown when there is no active task to point at
pub const PLACEHOLDER_CAPTION: &str = "#1 — Time to focus!";

/// A user-entered task, persisted inside the `pomofocusTasks` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    /// Number of focus sessions the task is expected to take
    #[serde(rename = "estPomodoros")]
    pub estimated_units: u32,
}

impl Task {
    /// Build a task from raw input. Returns None when the trimmed title is empty
    /// or the estimate is zero.
    pub fn new(title: &str, estimated_units: u32) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() || estimated_units == 0 {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            estimated_units,
        })
    }
}

/// Display record for one task row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow<'a> {
    pub position: usize,
    pub title: &'a str,
    pub estimated_units: u32,
    pub is_active: bool,
}

/// Ordered task list with a display-only active pointer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    active_index: usize,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            active_index: 0,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Point the display at another task. Out of range values are accepted and
    /// simply render the placeholder caption.
    pub fn set_active(&mut self, index: usize) {
        self.active_index = index;
    }

    /// Append a task. Returns false (and leaves the list untouched) when the
    /// input is rejected.
    pub fn add(&mut self, title: &str, estimated_units: u32) -> bool {
        match Task::new(title, estimated_units) {
            Some(task) => {
                self.tasks.push(task);
                true
            }
            None => false,
        }
    }

    /// The task the active pointer currently refers to
    pub fn active(&self) -> Option<&Task> {
        self.tasks.get(self.active_index)
    }

    /// Rows in display order
    pub fn rows(&self) -> Vec<TaskRow<'_>> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| TaskRow {
                position: idx + 1,
                title: &task.title,
                estimated_units: task.estimated_units,
                is_active: idx == self.active_index,
            })
            .collect()
    }

    /// "Current task" caption
    pub fn caption(&self) -> String {
        match self.active() {
            Some(task) => format!("#{} {}", self.active_index + 1, task.title),
            None => PLACEHOLDER_CAPTION.to_string(),
        }
    }

    /// Sum of all estimates, saturating at `u32::MAX`
    pub fn total_estimated_units(&self) -> u32 {
        self.tasks
            .iter()
            .fold(0u32, |acc, t| acc.saturating_add(t.estimated_units))
    }
}
