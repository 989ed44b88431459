// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von badge-core
pub use badge_core::{
    BounceOptions, FadeDirection, LedConfig, LedError, LedStrip, LedStripWriter, TimingProfile,
};
