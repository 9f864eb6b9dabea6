/// Countdown mode of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Work interval
    Focus,
    /// Rest between focus sessions
    ShortBreak,
    /// Longer rest after several focus sessions
    LongBreak,
}

impl Mode {
    /// Label shown on the mode tab
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Focus => "Pomodoro",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    /// Name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Focus => "focus",
            Mode::ShortBreak => "short-break",
            Mode::LongBreak => "long-break",
        }
    }

    /// Message shown once the countdown of this mode runs out
    pub fn finished_message(&self) -> &'static str {
        match self {
            Mode::Focus => "Focus session finished. Time for a break!",
            Mode::ShortBreak => "Break is over. Time to focus!",
            Mode::LongBreak => "Long break is over. Time to focus!",
        }
    }

    /// All modes in tab order
    pub fn all() -> &'static [Mode] {
        &[Mode::Focus, Mode::ShortBreak, Mode::LongBreak]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    Settings,
    Report,
}
