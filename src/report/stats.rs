use crate::domain::{Settings, TaskList};
use chrono::{DateTime, Local};

/// Summary shown in the report modal and by `pomofocus status`
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub session_started: DateTime<Local>,
    pub task_count: usize,
    pub total_estimated_units: u32,
    /// Focus minutes needed to work through every estimate
    pub planned_focus_minutes: u32,
    pub completed_focus_sessions: u32,
    pub current_task: String,
}

impl Summary {
    pub fn new(
        settings: &Settings,
        tasks: &TaskList,
        session_started: DateTime<Local>,
        completed_focus_sessions: u32,
    ) -> Self {
        let total_estimated_units = tasks.total_estimated_units();
        Self {
            session_started,
            task_count: tasks.len(),
            total_estimated_units,
            planned_focus_minutes: total_estimated_units.saturating_mul(settings.focus_minutes),
            completed_focus_sessions,
            current_task: tasks.caption(),
        }
    }

    /// Label/value pairs in display order
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Session started",
                self.session_started.format("%Y-%m-%d %H:%M").to_string(),
            ),
            ("Current task", self.current_task.clone()),
            ("Tasks", self.task_count.to_string()),
            ("Estimated pomodoros", self.total_estimated_units.to_string()),
            ("Planned focus", format_minutes(self.planned_focus_minutes)),
            (
                "Focus sessions finished",
                self.completed_focus_sessions.to_string(),
            ),
        ]
    }
}

/// Format minutes as "Xh Ym", "Xh" or "Xm"
pub fn format_minutes(total_mins: u32) -> String {
    let hours = total_mins / 60;
    let mins = total_mins % 60;
    if hours == 0 {
        format!("{}m", mins)
    } else if mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0m");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h");
        assert_eq!(format_minutes(125), "2h 5m");
    }

    #[test]
    fn test_summary_totals() {
        let mut tasks = TaskList::default();
        tasks.add("Write report", 3);
        tasks.add("Review PR", 2);
        let settings = Settings::default();

        let summary = Summary::new(&settings, &tasks, Local::now(), 1);
        assert_eq!(summary.task_count, 2);
        assert_eq!(summary.total_estimated_units, 5);
        assert_eq!(summary.planned_focus_minutes, 125);
        assert_eq!(summary.completed_focus_sessions, 1);
        assert_eq!(summary.current_task, "#1 Write report");
    }

    #[test]
    fn test_summary_lines() {
        let summary = Summary::new(&Settings::default(), &TaskList::default(), Local::now(), 0);
        let lines = summary.lines();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], ("Current task", "#1 — Time to focus!".to_string()));
        assert_eq!(lines[4], ("Planned focus", "0m".to_string()));
    }
}
