//! LED-Konfiguration
//!
//! Werte kommen von außen (Konstanten in der Firmware oder JSON) und
//! werden vor dem Erzeugen eines `LedStrip` geprüft.

use core::fmt;

use crate::types::TimingProfile;

/// Standard GPIO-Pin der LED-Kette
pub const DEFAULT_LED_PIN: u8 = 26;

/// Standard-Helligkeit in Prozent
pub const DEFAULT_MAX_BRIGHTNESS_PERCENT: u8 = 50;

/// Fehler-Typ für ungültige Konfiguration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `led_pin` fehlt
    MissingPin,
    /// `max_brightness_percent` liegt nicht in 0..=100
    BrightnessOutOfRange(u8),
    /// Timing-Profil ist nicht darstellbar oder unterscheidet 0/1 nicht
    InvalidTiming,
    /// Konfiguration konnte nicht gelesen werden (z.B. falscher Typ)
    Parse,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingPin => write!(f, "LED pin configuration is missing"),
            ConfigError::BrightnessOutOfRange(p) => {
                write!(f, "max_brightness_percent must be between 0 and 100, got {p}")
            }
            ConfigError::InvalidTiming => write!(f, "invalid signal timing profile"),
            ConfigError::Parse => write!(f, "LED configuration could not be parsed"),
        }
    }
}

/// Rohe LED-Konfiguration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct LedConfig {
    /// GPIO-Pin der Datenleitung. Fehlt der Schlüssel, gilt der Standard-Pin;
    /// ein explizites `null` ist ein Fehler.
    #[cfg_attr(feature = "serde", serde(default = "default_led_pin"))]
    pub led_pin: Option<u8>,
    /// Maximale Helligkeit in Prozent (0-100)
    #[cfg_attr(feature = "serde", serde(default = "default_max_brightness_percent"))]
    pub max_brightness_percent: u8,
}

#[cfg(feature = "serde")]
fn default_led_pin() -> Option<u8> {
    Some(DEFAULT_LED_PIN)
}

#[cfg(feature = "serde")]
fn default_max_brightness_percent() -> u8 {
    DEFAULT_MAX_BRIGHTNESS_PERCENT
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            led_pin: Some(DEFAULT_LED_PIN),
            max_brightness_percent: DEFAULT_MAX_BRIGHTNESS_PERCENT,
        }
    }
}

/// Geprüfte Konfiguration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedConfig {
    pub led_pin: u8,
    /// Helligkeit als Faktor 0.0 - 1.0
    pub brightness: f64,
    pub timing: TimingProfile,
}

impl LedConfig {
    pub const fn new(led_pin: u8, max_brightness_percent: u8) -> Self {
        Self {
            led_pin: Some(led_pin),
            max_brightness_percent,
        }
    }

    /// Prüft Pin, Helligkeit und Timing-Profil
    pub fn validate(&self, timing: TimingProfile) -> Result<ValidatedConfig, ConfigError> {
        let led_pin = self.led_pin.ok_or(ConfigError::MissingPin)?;

        if self.max_brightness_percent > 100 {
            return Err(ConfigError::BrightnessOutOfRange(
                self.max_brightness_percent,
            ));
        }

        timing.validate()?;

        Ok(ValidatedConfig {
            led_pin,
            brightness: f64::from(self.max_brightness_percent) / 100.0,
            timing,
        })
    }

    /// Liest die Konfiguration aus JSON
    ///
    /// Fehlende Schlüssel bekommen Standardwerte, ein falscher Typ
    /// (z.B. `"led_pin": "26"`) ergibt `ConfigError::Parse`.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &[u8]) -> Result<Self, ConfigError> {
        serde_json_core::from_slice::<Self>(json)
            .map(|(config, _)| config)
            .map_err(|_| ConfigError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LedConfig::default().validate(TimingProfile::DEFAULT).unwrap();
        assert_eq!(config.led_pin, 26);
        assert_eq!(config.brightness, 0.5);
    }

    #[test]
    fn test_missing_pin() {
        let config = LedConfig {
            led_pin: None,
            max_brightness_percent: 50,
        };
        assert_eq!(
            config.validate(TimingProfile::DEFAULT),
            Err(ConfigError::MissingPin)
        );
    }

    #[test]
    fn test_brightness_bounds() {
        assert!(LedConfig::new(26, 0).validate(TimingProfile::DEFAULT).is_ok());
        assert!(LedConfig::new(26, 100).validate(TimingProfile::DEFAULT).is_ok());
        assert_eq!(
            LedConfig::new(26, 101).validate(TimingProfile::DEFAULT),
            Err(ConfigError::BrightnessOutOfRange(101))
        );
    }

    #[test]
    fn test_invalid_timing_rejected() {
        let timing = TimingProfile::new(800, 450, 400, 850);
        assert_eq!(
            LedConfig::default().validate(timing),
            Err(ConfigError::InvalidTiming)
        );
    }
}
