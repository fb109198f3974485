//! Store and interaction tuning.
//!
//! Both configs are plain values handed to their owner at construction
//! time. `Default` gives the stock desktop values; `new` validates caller
//! supplied ones.

use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_X, DEFAULT_WINDOW_Y, KEY_STEP,
    KEY_STEP_LARGE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, PINNED_Z_OFFSET,
};
use crate::error::ConfigError;
use crate::geometry::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub pinned_offset: u32,
    pub default_position: Point,
    pub default_size: Size,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            pinned_offset: PINNED_Z_OFFSET,
            default_position: Point::new(DEFAULT_WINDOW_X, DEFAULT_WINDOW_Y),
            default_size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        }
    }
}

impl StoreConfig {
    pub fn new(
        pinned_offset: u32,
        default_position: Point,
        default_size: Size,
    ) -> Result<Self, ConfigError> {
        if pinned_offset == 0 {
            return Err(ConfigError::ZeroPinnedOffset);
        }
        Ok(Self {
            pinned_offset,
            default_position,
            default_size,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionConfig {
    /// Resize never produces a smaller window than this.
    pub min_size: Size,
    pub key_step: u32,
    /// Step used while the modifier is held.
    pub key_step_large: u32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            min_size: Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
            key_step: KEY_STEP,
            key_step_large: KEY_STEP_LARGE,
        }
    }
}

impl InteractionConfig {
    pub fn new(min_size: Size, key_step: u32, key_step_large: u32) -> Result<Self, ConfigError> {
        if min_size.is_empty() {
            return Err(ConfigError::ZeroMinimumSize {
                width: min_size.width,
                height: min_size.height,
            });
        }
        if key_step == 0 {
            return Err(ConfigError::ZeroKeyStep);
        }
        if key_step_large < key_step {
            return Err(ConfigError::LargeStepTooSmall {
                step: key_step,
                large: key_step_large,
            });
        }
        Ok(Self {
            min_size,
            key_step,
            key_step_large,
        })
    }

    pub fn step(&self, large: bool) -> u32 {
        if large {
            self.key_step_large
        } else {
            self.key_step
        }
    }
}
