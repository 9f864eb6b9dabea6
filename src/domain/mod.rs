pub mod enums;
pub mod settings;
pub mod task;

pub use enums::{Mode, UiMode};
pub use settings::{parse_hex_color, parse_positive, Settings, THEME_PALETTE};
pub use task::{Task, TaskList};
