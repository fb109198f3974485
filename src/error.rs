use thiserror::Error;

use crate::window::WindowId;

/// Misuse reported by the fallible store entry points.
///
/// The action surface never propagates these: `open` logs and swallows a
/// duplicate id, every other action degrades to a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WmError {
    #[error("a window with id `{0}` is already open")]
    DuplicateId(WindowId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum window size must be non-zero (got {width}x{height})")]
    ZeroMinimumSize { width: u32, height: u32 },
    #[error("key step must be non-zero")]
    ZeroKeyStep,
    #[error("large key step ({large}) must not be smaller than the regular step ({step})")]
    LargeStepTooSmall { step: u32, large: u32 },
    #[error("pinned offset must be non-zero")]
    ZeroPinnedOffset,
}
