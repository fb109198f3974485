//! Stacking window manager core with a terminal desktop host.
//!
//! [`WindowStore`] owns every window record and arbitrates focus and
//! stacking; [`GestureController`] turns pointer and key input into move and
//! resize actions on it. The `desktop` module renders a store in a terminal.

pub mod config;
pub mod constants;
pub mod desktop;
pub mod drivers;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod keybindings;
pub mod log_buffer;
pub mod registry;
pub mod runner;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use config::{InteractionConfig, StoreConfig};
pub use error::{ConfigError, WmError};
pub use geometry::{Bounds, Point, Size};
pub use interaction::{GestureController, ResizeEdge, StepKey};
pub use registry::ContentRegistry;
pub use window::{
    ManagerState, OpenOptions, SubscriptionId, WindowId, WindowRecord, WindowState, WindowStore,
};
