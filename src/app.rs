use crate::domain::{parse_hex_color, parse_positive, Mode, Settings, TaskList, UiMode, THEME_PALETTE};
use crate::notifications;
use crate::persistence::{self, KeyValueStore, PersistError, Snapshot};
use crate::report::Summary;
use crate::timer::{TickOutcome, Timer};
use chrono::{DateTime, Local};
use std::time::Instant;

/// Estimate pre-filled in a fresh task form
pub const DEFAULT_ESTIMATE: &str = "1";

/// Notice shown by the sign-in control
pub const SIGN_IN_NOTICE: &str = "Sign In feature will be added in a future update!";

/// Input form state for adding a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFormState {
    pub title: String,
    pub estimate: String,
    pub editing_field: usize, // 0 = title, 1 = estimate
    pub error: Option<String>,
}

impl Default for TaskFormState {
    fn default() -> Self {
        Self {
            title: String::new(),
            estimate: DEFAULT_ESTIMATE.to_string(),
            editing_field: 0,
            error: None,
        }
    }
}

/// Settings modal state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFormState {
    pub focus: String,
    pub short_break: String,
    pub long_break: String,
    pub editing_field: usize, // 0..=2 minute fields, 3 = theme swatches
    pub swatch_index: usize,
    pub error: Option<String>,
}

impl SettingsFormState {
    pub const FIELD_COUNT: usize = 4;
    pub const SWATCH_FIELD: usize = 3;

    fn from_settings(settings: &Settings) -> Self {
        let swatch_index = THEME_PALETTE
            .iter()
            .position(|c| c.eq_ignore_ascii_case(&settings.theme_color))
            .unwrap_or(0);
        Self {
            focus: settings.focus_minutes.to_string(),
            short_break: settings.short_break_minutes.to_string(),
            long_break: settings.long_break_minutes.to_string(),
            editing_field: 0,
            swatch_index,
            error: None,
        }
    }

    fn field_mut(&mut self) -> Option<&mut String> {
        match self.editing_field {
            0 => Some(&mut self.focus),
            1 => Some(&mut self.short_break),
            2 => Some(&mut self.long_break),
            _ => None,
        }
    }
}

/// Session controller: owns settings, tasks, the timer and the store
pub struct AppState {
    pub settings: Settings,
    pub tasks: TaskList,
    pub timer: Timer,
    pub ui_mode: UiMode,
    pub task_form: Option<TaskFormState>,
    pub settings_form: Option<SettingsFormState>,
    pub notice: Option<String>,
    pub needs_save: bool,
    pub session_started: DateTime<Local>,
    pub completed_focus_sessions: u32,
    store: Box<dyn KeyValueStore>,
}

impl AppState {
    /// Restore persisted state from `store` and reset the timer to focus mode
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let snapshot = persistence::load(&*store);
        Self::new(snapshot, store)
    }

    pub fn new(snapshot: Snapshot, store: Box<dyn KeyValueStore>) -> Self {
        let timer = Timer::new(Mode::Focus, &snapshot.settings);
        Self {
            settings: snapshot.settings,
            tasks: TaskList::new(snapshot.tasks),
            timer,
            ui_mode: UiMode::Normal,
            task_form: None,
            settings_form: None,
            notice: None,
            needs_save: false,
            session_started: Local::now(),
            completed_focus_sessions: 0,
            store,
        }
    }

    // --- Timer ---

    /// Stop any countdown and reset to the full duration of `mode`
    pub fn switch_mode(&mut self, mode: Mode) {
        self.timer.switch_mode(mode, &self.settings);
        tracing::debug!(mode = mode.as_str(), seconds = self.timer.remaining_seconds(), "switched mode");
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        if !self.timer.start(now) {
            tracing::debug!("start ignored, nothing left to count");
        }
    }

    pub fn stop(&mut self) {
        self.timer.stop();
    }

    /// The START / PAUSE control
    pub fn toggle_start_stop(&mut self) {
        if self.timer.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Label of the start/stop control
    pub fn start_stop_label(&self) -> &'static str {
        if self.timer.is_running() {
            "PAUSE"
        } else {
            "START"
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Apply due countdown ticks
    pub fn tick_at(&mut self, now: Instant) {
        if self.timer.advance(now) == TickOutcome::Expired {
            let mode = self.timer.mode();
            tracing::info!(mode = mode.as_str(), "countdown finished");
            if mode == Mode::Focus {
                self.completed_focus_sessions += 1;
            }
            self.notice = Some(mode.finished_message().to_string());
            notifications::notify_countdown_finished(mode);
        }
    }

    // --- Tasks ---

    /// Append a task; empty titles are rejected
    pub fn add_task(&mut self, title: &str, estimated_units: u32) -> bool {
        let added = self.tasks.add(title, estimated_units);
        if added {
            self.needs_save = true;
        }
        added
    }

    pub fn set_active_task(&mut self, index: usize) {
        self.tasks.set_active(index);
    }

    pub fn select_previous_task(&mut self) {
        let current = self.tasks.active_index();
        if current > 0 {
            self.tasks.set_active(current - 1);
        }
    }

    pub fn select_next_task(&mut self) {
        let current = self.tasks.active_index();
        if current + 1 < self.tasks.len() {
            self.tasks.set_active(current + 1);
        }
    }

    // --- Settings ---

    /// Replace the settings and reset the timer of the current mode.
    /// Returns false when a minute value is zero or the color is not `#rrggbb`.
    pub fn apply_settings(&mut self, new_settings: Settings) -> bool {
        let valid = Mode::all().iter().all(|m| new_settings.minutes_for(*m) > 0)
            && parse_hex_color(&new_settings.theme_color).is_some();
        if !valid {
            tracing::warn!(?new_settings, "rejected invalid settings");
            return false;
        }
        self.settings = new_settings;
        self.needs_save = true;
        self.switch_mode(self.timer.mode());
        true
    }

    /// Change the theme color. Returns false for anything but `#rrggbb`.
    pub fn apply_theme(&mut self, color: &str) -> bool {
        if parse_hex_color(color).is_none() {
            tracing::warn!(color, "rejected invalid theme color");
            return false;
        }
        if self.settings.theme_color != color {
            self.settings.theme_color = color.to_string();
            self.needs_save = true;
        }
        true
    }

    // --- Task form ---

    pub fn open_task_form(&mut self) {
        self.task_form = Some(TaskFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn task_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.task_form {
            form.editing_field = (form.editing_field + 1) % 2;
        }
    }

    pub fn task_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.task_form {
            match form.editing_field {
                0 => form.title.push(c),
                _ => {
                    if c.is_ascii_digit() {
                        form.estimate.push(c);
                    }
                }
            }
        }
    }

    pub fn task_form_backspace(&mut self) {
        if let Some(form) = &mut self.task_form {
            match form.editing_field {
                0 => form.title.pop(),
                _ => form.estimate.pop(),
            };
        }
    }

    /// Submit the task form. An empty title keeps the form open; a bad
    /// estimate keeps it open with a message.
    pub fn submit_task_form(&mut self) {
        let Some(form) = &mut self.task_form else {
            return;
        };
        if form.title.trim().is_empty() {
            form.editing_field = 0;
            return;
        }
        let Some(estimate) = parse_positive(&form.estimate) else {
            form.error = Some("Estimate must be a whole number of at least 1".to_string());
            form.editing_field = 1;
            return;
        };
        let title = form.title.clone();
        if self.add_task(&title, estimate) {
            self.cancel_task_form();
        }
    }

    /// Close the task form, discarding its inputs
    pub fn cancel_task_form(&mut self) {
        self.task_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- Settings modal ---

    pub fn open_settings(&mut self) {
        self.settings_form = Some(SettingsFormState::from_settings(&self.settings));
        self.ui_mode = UiMode::Settings;
    }

    pub fn settings_form_next_field(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.editing_field = (form.editing_field + 1) % SettingsFormState::FIELD_COUNT;
        }
    }

    pub fn settings_form_add_char(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        if let Some(field) = self.settings_form.as_mut().and_then(|f| f.field_mut()) {
            field.push(c);
        }
    }

    pub fn settings_form_backspace(&mut self) {
        if let Some(field) = self.settings_form.as_mut().and_then(|f| f.field_mut()) {
            field.pop();
        }
    }

    /// Move along the swatch row and apply the chosen color right away
    pub fn settings_form_cycle_swatch(&mut self, forward: bool) {
        let Some(form) = &mut self.settings_form else {
            return;
        };
        if form.editing_field != SettingsFormState::SWATCH_FIELD {
            return;
        }
        let len = THEME_PALETTE.len();
        form.swatch_index = if forward {
            (form.swatch_index + 1) % len
        } else {
            (form.swatch_index + len - 1) % len
        };
        let color = THEME_PALETTE[form.swatch_index];
        self.apply_theme(color);
    }

    /// The OK button: validate the minute fields, apply and close
    pub fn submit_settings_form(&mut self) {
        let Some(form) = &mut self.settings_form else {
            return;
        };
        let parsed = (
            parse_positive(&form.focus),
            parse_positive(&form.short_break),
            parse_positive(&form.long_break),
        );
        let (Some(focus), Some(short_break), Some(long_break)) = parsed else {
            form.error = Some("Durations must be whole minutes of at least 1".to_string());
            return;
        };

        let new_settings = Settings {
            focus_minutes: focus,
            short_break_minutes: short_break,
            long_break_minutes: long_break,
            theme_color: self.settings.theme_color.clone(),
        };
        if self.apply_settings(new_settings) {
            self.close_modal();
        }
    }

    // --- Modals ---

    pub fn open_report(&mut self) {
        self.ui_mode = UiMode::Report;
    }

    /// Close the settings or report modal without applying anything
    pub fn close_modal(&mut self) {
        self.settings_form = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn sign_in(&mut self) {
        self.notice = Some(SIGN_IN_NOTICE.to_string());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // --- Views ---

    /// Remaining time as `MM:SS`
    pub fn clock(&self) -> String {
        self.timer.clock()
    }

    pub fn window_title(&self) -> String {
        self.timer.window_title()
    }

    pub fn caption(&self) -> String {
        self.tasks.caption()
    }

    pub fn summary(&self) -> Summary {
        Summary::new(
            &self.settings,
            &self.tasks,
            self.session_started,
            self.completed_focus_sessions,
        )
    }

    /// Theme color as RGB, falling back to the default when unparsable
    pub fn theme_rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(&self.settings.theme_color)
            .or_else(|| parse_hex_color(crate::domain::settings::DEFAULT_THEME_COLOR))
            .unwrap_or((0xc1, 0x5c, 0x5c))
    }

    // --- Persistence ---

    /// Write settings and tasks to the store
    pub fn save(&mut self) -> Result<(), PersistError> {
        persistence::save(&mut *self.store, &self.settings, self.tasks.tasks())?;
        self.needs_save = false;
        tracing::debug!(tasks = self.tasks.len(), "saved state");
        Ok(())
    }

    /// Save pending changes from the event loop. A failed write is logged and
    /// reported as a notice; the next mutation or the save on exit retries.
    pub fn autosave(&mut self) {
        if !self.needs_save {
            return;
        }
        if let Err(e) = self.save() {
            tracing::error!(error = %e, "failed to save state");
            self.notice = Some(format!("Could not save: {}", e));
            self.needs_save = false;
        }
    }
}
