//! Shared crate-wide constants.

/// Smallest width a window may be resized to, in container units.
pub const MIN_WINDOW_WIDTH: u32 = 100;

/// Smallest height a window may be resized to, in container units.
pub const MIN_WINDOW_HEIGHT: u32 = 50;

/// Distance between the highest non-pinned stacking value and the pinned
/// band when a window is pinned or the band is lifted.
pub const PINNED_Z_OFFSET: u32 = 1000;

/// First value handed out by the plain stacking counter.
pub const FIRST_Z_INDEX: u32 = 1;

/// Origin used by `open` when the caller does not supply a position.
pub const DEFAULT_WINDOW_X: i32 = 100;
pub const DEFAULT_WINDOW_Y: i32 = 100;

/// Size used by `open` when the caller does not supply one.
pub const DEFAULT_WINDOW_WIDTH: u32 = 400;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 300;

/// Distance a single key press moves or resizes a window.
pub const KEY_STEP: u32 = 10;

/// Distance a key press moves or resizes a window while the step modifier
/// is held.
pub const KEY_STEP_LARGE: u32 = 50;

/// Prefix for ids generated by `open` when the caller does not supply one.
pub const GENERATED_ID_PREFIX: &str = "w";
