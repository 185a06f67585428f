use log::Level;

/// Viewports at least this wide get the desktop layout and animations.
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// Quiet period after the last resize event before layouts are rebuilt.
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose frame logging while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset(path: &str) -> String {
    format!("/assets/{}", path.trim_start_matches('/'))
}
