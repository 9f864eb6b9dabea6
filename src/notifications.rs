/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

use crate::domain::Mode;

/// Send a notification when a countdown runs out
pub fn notify_countdown_finished(mode: Mode) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Pomofocus - {}""#,
            mode.finished_message().replace('"', "\\\""),
            mode.label()
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::debug!(error = %e, "desktop notification failed");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = mode;
    }
}
