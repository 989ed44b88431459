//! Badge Core - Platform-agnostic LED Strip Driver
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Pure Functions und den `LedStrip`-Controller.

#![no_std]

pub mod config;
pub mod logic;
pub mod strip;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use config::{ConfigError, LedConfig, ValidatedConfig};
pub use logic::{encode_frame, pulse_buffer_len, rotate_channels, scale_color, wheel};
pub use strip::{FADE_DELAY_MS, LedStrip, NUM_LEDS};
pub use traits::{LedError, LedStripWriter, SmartLedsWriter};
pub use types::{
    BitTicks, BounceOptions, BounceState, Direction, FadeDirection, OFF, Pulse, TimingProfile,
    WHITE,
};

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::MissingPin => defmt::write!(fmt, "MissingPin"),
            ConfigError::BrightnessOutOfRange(p) => {
                defmt::write!(fmt, "BrightnessOutOfRange({})", p)
            }
            ConfigError::InvalidTiming => defmt::write!(fmt, "InvalidTiming"),
            ConfigError::Parse => defmt::write!(fmt, "Parse"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
            LedError::IndexOutOfRange { index, len } => {
                defmt::write!(fmt, "IndexOutOfRange {{ index: {}, len: {} }}", index, len)
            }
            LedError::BufferTooSmall => defmt::write!(fmt, "BufferTooSmall"),
            LedError::Config(err) => defmt::write!(fmt, "Config({})", err),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BounceState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "BounceState {{ index: {}, direction: {}, rgb: ({}, {}, {}) }}",
            self.index,
            self.direction,
            self.color.r,
            self.color.g,
            self.color.b
        )
    }
}
