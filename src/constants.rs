//! Centralized constants used across the application.
//!
//! File-layout conventions of Ableton Live projects plus the sizing factors
//! that derive list, icon and window metrics from the configured row height.

/// Extension of Ableton Live set files (without the dot)
pub const PROJECT_EXTENSION: &str = "als";

/// Directory name fragment Live uses for automatic backup copies
pub const BACKUP_MARKER: &str = "Backup";

/// Folder next to a set that holds its project metadata
pub const PROJECT_INFO_DIR: &str = "Ableton Project Info";

/// Icon file inside [`PROJECT_INFO_DIR`]
pub const PROJECT_ICON_FILE: &str = "AProject.ICO";

/// Icon side length as a fraction of the row height
pub const ICON_SIZE_FACTOR: f64 = 0.8;

/// Icon column width as a multiple of the row height
pub const ICON_COLUMN_FACTOR: f64 = 1.3;

/// Font size at the reference row height of 30px
pub const FONT_SIZE_BASE: f64 = 16.0;

/// Row height the base font size was tuned for
pub const FONT_REFERENCE_ROW_HEIGHT: f64 = 30.0;

/// Seven visible list rows plus one row's worth of button bar
pub const WINDOW_ROW_COUNT: u32 = 1 + 7;

/// Extra vertical space for margins and the button bar padding
pub const WINDOW_HEIGHT_OFFSET: u32 = 50;

/// Horizontal padding added to the measured list width
pub const WINDOW_PADDING: u32 = 20;

/// Window title
pub const WINDOW_TITLE: &str = "Ableton Live Sets";
