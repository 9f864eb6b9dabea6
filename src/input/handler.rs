use crate::app::AppState;
use crate::domain::{Mode, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    // A notice has to be acknowledged first
    if app.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_notice();
        }
        return Ok(false);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_task_form_mode(app, key),
        UiMode::Settings => handle_settings_mode(app, key),
        UiMode::Report => handle_report_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Start / pause
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_start_stop();
            Ok(false)
        }

        // Mode tabs
        KeyCode::Char('1') => {
            app.switch_mode(Mode::Focus);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.switch_mode(Mode::ShortBreak);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.switch_mode(Mode::LongBreak);
            Ok(false)
        }

        // Active task pointer
        KeyCode::Up => {
            app.select_previous_task();
            Ok(false)
        }
        KeyCode::Down => {
            app.select_next_task();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.open_task_form();
            Ok(false)
        }

        // Settings
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.open_settings();
            Ok(false)
        }

        // Report
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.open_report();
            Ok(false)
        }

        // Sign in
        KeyCode::Char('i') | KeyCode::Char('I') => {
            app.sign_in();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in the add task form
fn handle_task_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_task_form(),
        KeyCode::Esc => app.cancel_task_form(),
        KeyCode::Tab | KeyCode::BackTab => app.task_form_toggle_field(),
        KeyCode::Backspace => app.task_form_backspace(),
        KeyCode::Char(c) => app.task_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the settings modal
fn handle_settings_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_settings_form(),
        KeyCode::Esc => app.close_modal(),
        KeyCode::Tab | KeyCode::Down => app.settings_form_next_field(),
        KeyCode::Left => app.settings_form_cycle_swatch(false),
        KeyCode::Right => app.settings_form_cycle_swatch(true),
        KeyCode::Backspace => app.settings_form_backspace(),
        KeyCode::Char(c) => app.settings_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the report modal
fn handle_report_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('q')) {
        app.close_modal();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::store::MemoryStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_test_app() -> AppState {
        AppState::load(Box::new(MemoryStore::default()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn press_all(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ctrl_c).unwrap());
    }

    #[test]
    fn test_handle_start_pause() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.timer.is_running());
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_handle_mode_switch() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.timer.mode(), Mode::ShortBreak);
        assert_eq!(app.clock(), "05:00");

        handle_key(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.clock(), "15:00");

        handle_key(&mut app, key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.clock(), "25:00");
    }

    #[test]
    fn test_handle_add_task() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        // Typing 'q' inside the form must not quit
        press_all(&mut app, "Read q");
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        press_all(&mut app, "4");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.tasks()[0].title, "Read q");
        assert_eq!(app.tasks.tasks()[0].estimated_units, 4);
    }

    #[test]
    fn test_handle_add_empty_task_keeps_form() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_handle_settings() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('s'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Settings);

        // Focus 25 -> 50
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        press_all(&mut app, "50");

        // Jump to swatches and pick the next color
        for _ in 0..3 {
            handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        }
        handle_key(&mut app, key(KeyCode::Right)).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.settings.focus_minutes, 50);
        assert_eq!(app.settings.theme_color, crate::domain::THEME_PALETTE[1]);
        assert_eq!(app.clock(), "50:00");
    }

    #[test]
    fn test_handle_report() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Report);
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_notice_blocks_other_keys() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('i'))).unwrap();
        assert!(app.notice.is_some());

        // Keys are swallowed until the notice is dismissed
        assert!(!handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());
        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.timer.mode(), Mode::Focus);

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.notice.is_none());
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_handle_active_task_navigation() {
        let mut app = create_test_app();
        app.add_task("One", 1);
        app.add_task("Two", 1);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.tasks.active_index(), 1);
        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.tasks.active_index(), 0);
    }
}
