//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use core::fmt;

use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::ConfigError;
use crate::types::TimingProfile;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Hardware-Zugriff fehlgeschlagen
    WriteFailed,
    /// LED-Index außerhalb des Strips
    IndexOutOfRange { index: usize, len: usize },
    /// Puls-Buffer zu klein für den Frame
    BufferTooSmall,
    /// Ungültige Konfiguration beim Erzeugen
    Config(ConfigError),
}

impl From<ConfigError> for LedError {
    fn from(err: ConfigError) -> Self {
        LedError::Config(err)
    }
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedError::WriteFailed => write!(f, "LED write failed"),
            LedError::IndexOutOfRange { index, len } => {
                write!(f, "LED index {index} out of range for strip of {len}")
            }
            LedError::BufferTooSmall => write!(f, "pulse buffer too small"),
            LedError::Config(err) => write!(f, "configuration error: {err}"),
        }
    }
}

/// Trait für Hardware-Zugriff auf eine LED-Kette
///
/// Abstrahiert den Zugriff auf RGB LEDs (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtStripDriver (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait LedStripWriter: Send {
    /// Initialisiert die Hardware mit dem Signal-Timing
    ///
    /// Wird genau einmal beim Erzeugen des `LedStrip` aufgerufen.
    fn apply_timing(&mut self, timing: TimingProfile) -> Result<(), LedError>;

    /// Überträgt den kompletten Buffer auf die LEDs
    ///
    /// Nach erfolgreicher Rückkehr zeigen die LEDs den Buffer-Inhalt.
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, leds: &[RGB8]) -> Result<(), LedError>;
}

/// Adapter für Treiber mit `smart-leds` Interface
///
/// Diese Treiber haben ein fest eingebautes Timing, daher wird nur
/// `TimingProfile::DEFAULT` akzeptiert.
pub struct SmartLedsWriter<T> {
    driver: T,
}

impl<T> SmartLedsWriter<T> {
    pub fn new(driver: T) -> Self {
        Self { driver }
    }

    pub fn into_inner(self) -> T {
        self.driver
    }
}

impl<T> LedStripWriter for SmartLedsWriter<T>
where
    T: SmartLedsWrite<Color = RGB8> + Send,
{
    fn apply_timing(&mut self, timing: TimingProfile) -> Result<(), LedError> {
        if timing != TimingProfile::DEFAULT {
            return Err(LedError::Config(ConfigError::InvalidTiming));
        }
        Ok(())
    }

    fn write(&mut self, leds: &[RGB8]) -> Result<(), LedError> {
        self.driver
            .write(leds.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
