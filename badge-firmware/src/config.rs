// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use badge_core::{BounceOptions, LedConfig, TimingProfile};
use rgb::RGB8;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die LED-Kette (WS2812/Neopixel)
/// Muss zum GPIO passen, der in main.rs an den LED-Task übergeben wird
pub const LED_GPIO_PIN: u8 = 8;

/// Maximale Helligkeit in Prozent (0-100)
/// Wert ist gedimmt für Augenschonung und Akku
pub const MAX_BRIGHTNESS_PERCENT: u8 = 50;

/// LED-Konfiguration für den LedStrip
pub const LED_CONFIG: LedConfig = LedConfig::new(LED_GPIO_PIN, MAX_BRIGHTNESS_PERCENT);

/// Signal-Timing der LED-Kette
/// V2-Boards brauchen das verbreiterte Timing, sonst gibt es Artefakte.
/// Sobald die Leiterbahnen angepasst sind: TimingProfile::DEFAULT
pub const LED_TIMING: TimingProfile = TimingProfile::BADGE_V2;

/// RMT Taktfrequenz in MHz
/// 80 MHz → 12.5 ns pro Takt
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Animations-Konfiguration
// ============================================================================

/// Pause zwischen zwei Fade-Schritten in ms
pub const FADE_DELAY_MS: u32 = 1;

/// Pause pro Regenbogen-Schritt in ms
pub const RAINBOW_WAIT_MS: u32 = 20;

/// LED für den Einzel-Regenbogen (Mitte des Strips)
pub const RAINBOW_SINGLE_LED: usize = 3;

/// Bounce-Einstellungen: weiches Überblenden, Farbe wechselt am Anfang
pub const BOUNCE_OPTIONS: BounceOptions = BounceOptions {
    wait_ms: 50,
    fade: true,
    alternate_colors: true,
};

/// Anzahl Positionen pro Bounce-Durchlauf
/// 24 = zwei komplette Hin- und Rückwege auf 7 LEDs
pub const BOUNCE_POSITIONS: usize = 24;

/// Startfarbe der Bounce-Animation
pub const BOUNCE_COLOR: RGB8 = RGB8 { r: 255, g: 40, b: 0 };

/// Pause zwischen zwei Show-Durchläufen in Sekunden
pub const SHOW_PAUSE_SECS: u64 = 1;
