//! Application-wide constants.
//!
//! This module defines the application name, the popup title, and the
//! default popup geometry in terminal cells.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "LazyOSK";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "lazyosk";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "LazyOSK";

/// Log file name inside the config directory.
pub const LOG_FILE_NAME: &str = "lazyosk.log";

/// Title prefix of the keyboard popup; the active language is appended.
pub const WINDOW_TITLE: &str = "Virtual Keyboard";

/// Default popup width in cells.
pub const DEFAULT_POPUP_WIDTH: u16 = 88;

/// Default popup height in cells.
pub const DEFAULT_POPUP_HEIGHT: u16 = 21;

/// Default gap between the popup and the bottom of the screen, in rows.
pub const DEFAULT_BOTTOM_MARGIN: u16 = 2;

/// Smallest popup width accepted by the config.
pub const MIN_POPUP_WIDTH: u16 = 20;

/// Smallest popup height accepted by the config.
pub const MIN_POPUP_HEIGHT: u16 = 8;

/// Button width for printable keys.
pub const NARROW_KEY_WIDTH: u16 = 5;

/// Button width for named control keys.
pub const WIDE_KEY_WIDTH: u16 = 8;

/// Height of a button row (bordered).
pub const KEY_HEIGHT: u16 = 3;
