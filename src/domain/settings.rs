use super::enums::Mode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;
pub const DEFAULT_THEME_COLOR: &str = "#c15c5c";

/// Theme swatches offered in the settings modal
pub const THEME_PALETTE: &[&str] = &[
    "#c15c5c", "#ba4949", "#38858a", "#397097", "#8c5e99", "#7d5e4f",
];

/// User settings, persisted as the `pomofocusSettings` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "pomodoro")]
    pub focus_minutes: u32,
    #[serde(rename = "shortBreak")]
    pub short_break_minutes: u32,
    #[serde(rename = "longBreak")]
    pub long_break_minutes: u32,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
        }
    }
}

impl Settings {
    /// Configured duration of a mode in minutes
    pub fn minutes_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus_minutes,
            Mode::ShortBreak => self.short_break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }

    /// Configured duration of a mode in seconds
    pub fn seconds_for(&self, mode: Mode) -> u32 {
        self.minutes_for(mode).saturating_mul(60)
    }

    /// Overlay a persisted record on the defaults, field by field.
    ///
    /// Fields that are missing, of the wrong type, or out of range keep their
    /// default value. Unknown fields are ignored.
    pub fn merged_over_defaults(persisted: &Value) -> Self {
        let mut settings = Self::default();

        let Some(record) = persisted.as_object() else {
            tracing::warn!("persisted settings is not a JSON object, using defaults");
            return settings;
        };

        let minute_fields: [(&str, &mut u32); 3] = [
            ("pomodoro", &mut settings.focus_minutes),
            ("shortBreak", &mut settings.short_break_minutes),
            ("longBreak", &mut settings.long_break_minutes),
        ];
        for (key, slot) in minute_fields {
            match record.get(key) {
                None => {}
                Some(value) => match value.as_u64().and_then(positive_u32) {
                    Some(minutes) => *slot = minutes,
                    None => tracing::warn!(field = key, %value, "invalid minute value, keeping default"),
                },
            }
        }

        match record.get("themeColor") {
            None => {}
            Some(Value::String(color)) if parse_hex_color(color).is_some() => {
                settings.theme_color = color.clone();
            }
            Some(value) => {
                tracing::warn!(%value, "invalid theme color, keeping default");
            }
        }

        settings
    }
}

fn positive_u32(value: u64) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| *v > 0)
}

/// Parse a positive integer from raw form input
pub fn parse_positive(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

/// Parse a `#rrggbb` color into its RGB components
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.focus_minutes, 25);
        assert_eq!(settings.short_break_minutes, 5);
        assert_eq!(settings.long_break_minutes, 15);
        assert_eq!(settings.theme_color, "#c15c5c");
    }

    #[test]
    fn test_seconds_for_mode() {
        let settings = Settings::default();
        assert_eq!(settings.seconds_for(Mode::Focus), 1500);
        assert_eq!(settings.seconds_for(Mode::ShortBreak), 300);
        assert_eq!(settings.seconds_for(Mode::LongBreak), 900);
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(
            value,
            json!({"pomodoro": 25, "shortBreak": 5, "longBreak": 15, "themeColor": "#c15c5c"})
        );
    }

    #[test]
    fn test_merge_partial_record() {
        let merged = Settings::merged_over_defaults(&json!({"pomodoro": 50}));
        assert_eq!(
            merged,
            Settings {
                focus_minutes: 50,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_merge_full_record() {
        let merged = Settings::merged_over_defaults(&json!({
            "pomodoro": 30,
            "shortBreak": 10,
            "longBreak": 20,
            "themeColor": "#38858a",
            "somethingElse": true
        }));
        assert_eq!(merged.focus_minutes, 30);
        assert_eq!(merged.short_break_minutes, 10);
        assert_eq!(merged.long_break_minutes, 20);
        assert_eq!(merged.theme_color, "#38858a");
    }

    #[test]
    fn test_merge_rejects_bad_fields() {
        let merged = Settings::merged_over_defaults(&json!({
            "pomodoro": 0,
            "shortBreak": -3,
            "longBreak": "fifteen",
            "themeColor": "red"
        }));
        assert_eq!(merged, Settings::default());
    }

    #[test]
    fn test_merge_non_object() {
        assert_eq!(Settings::merged_over_defaults(&json!([1, 2])), Settings::default());
        assert_eq!(Settings::merged_over_defaults(&Value::Null), Settings::default());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive(" 3 "), Some(3));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-1"), None);
        assert_eq!(parse_positive("abc"), None);
        assert_eq!(parse_positive(""), None);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#c15c5c"), Some((0xc1, 0x5c, 0x5c)));
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("c15c5c"), None);
        assert_eq!(parse_hex_color("#c15c5"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_palette_is_valid() {
        assert!(THEME_PALETTE.contains(&DEFAULT_THEME_COLOR));
        for color in THEME_PALETTE {
            assert!(parse_hex_color(color).is_some(), "{}", color);
        }
    }
}
