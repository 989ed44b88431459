//! LED-Strip Controller
//!
//! Besitzt den LED-Buffer, die Helligkeit und den Hardware-Writer.
//! Alle Animationen blockieren den Aufrufer über den `DelayNs`-Parameter.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;
use rgb::RGB8;

use crate::config::LedConfig;
use crate::logic::{rotate_channels, scale_color, wheel};
use crate::traits::{LedError, LedStripWriter};
use crate::types::{BounceOptions, BounceState, FadeDirection, OFF, TimingProfile, WHITE};

/// Anzahl der LEDs auf dem Badge
pub const NUM_LEDS: usize = 7;

/// Standard-Pause zwischen zwei Fade-Schritten in ms
pub const FADE_DELAY_MS: u32 = 1;

/// Anzahl Schritte eines Fades (0..=255)
const FADE_STEPS: u16 = 256;

/// Anzahl Schritte eines Regenbogen-Durchlaufs (0..255)
const RAINBOW_STEPS: u16 = 255;

/// Controller für eine LED-Kette mit `N` LEDs
///
/// # Generische Parameter
/// - `W`: Hardware-Writer (Hardware oder Mock)
/// - `D`: Blockierender Delay (Hardware oder Mock)
pub struct LedStrip<W, D, const N: usize = NUM_LEDS> {
    writer: W,
    delay: D,
    leds: [RGB8; N],
    led_pin: u8,
    brightness: f64,
    timing: TimingProfile,
    fade_delay_ms: u32,
}

impl<W, D, const N: usize> LedStrip<W, D, N>
where
    W: LedStripWriter,
    D: DelayNs,
{
    /// Erstellt einen neuen LedStrip
    ///
    /// Die Konfiguration wird zuerst geprüft. Schlägt die Prüfung fehl,
    /// wird die Hardware nicht angefasst.
    ///
    /// # Parameter
    /// - `writer`: Hardware-Writer für die LED-Kette
    /// - `delay`: Blockierender Delay für Animationen
    /// - `config`: Pin und maximale Helligkeit
    /// - `timing`: Signal-Timing (bleibt für die Lebensdauer fest)
    pub fn new(
        mut writer: W,
        delay: D,
        config: &LedConfig,
        timing: TimingProfile,
    ) -> Result<Self, LedError> {
        let config = config.validate(timing)?;
        writer.apply_timing(config.timing)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "LedStrip: {} LEDs on pin {}, brightness {}",
            N,
            config.led_pin,
            config.brightness
        );

        Ok(Self {
            writer,
            delay,
            leds: [OFF; N],
            led_pin: config.led_pin,
            brightness: config.brightness,
            timing: config.timing,
            fade_delay_ms: FADE_DELAY_MS,
        })
    }

    /// Setzt die Pause zwischen zwei Fade-Schritten
    #[must_use]
    pub fn with_fade_delay_ms(mut self, fade_delay_ms: u32) -> Self {
        self.fade_delay_ms = fade_delay_ms;
        self
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Aktueller Buffer-Inhalt
    pub fn leds(&self) -> &[RGB8; N] {
        &self.leds
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn timing(&self) -> TimingProfile {
        self.timing
    }

    pub fn pin(&self) -> u8 {
        self.led_pin
    }

    /// Gibt Writer und Delay zurück (z.B. zum Abschalten der Hardware)
    pub fn release(self) -> (W, D) {
        (self.writer, self.delay)
    }

    fn check_index(index: usize) -> Result<(), LedError> {
        if index >= N {
            return Err(LedError::IndexOutOfRange { index, len: N });
        }
        Ok(())
    }

    fn push(&mut self) -> Result<(), LedError> {
        self.writer.write(&self.leds)
    }

    // ========================================================================
    // Einzel-Operationen
    // ========================================================================

    /// Setzt eine LED (mit Helligkeit skaliert) und überträgt sofort
    pub fn set_color(&mut self, index: usize, color: RGB8) -> Result<(), LedError> {
        Self::check_index(index)?;
        self.leds[index] = scale_color(color, self.brightness);
        self.push()
    }

    /// Schaltet alle LEDs aus (eine Übertragung)
    pub fn clear_all(&mut self) -> Result<(), LedError> {
        self.leds.fill(OFF);
        self.push()
    }

    /// Setzt alle LEDs auf eine Farbe (eine Übertragung)
    pub fn fill(&mut self, color: RGB8) -> Result<(), LedError> {
        self.leds.fill(scale_color(color, self.brightness));
        self.push()
    }

    /// Schaltet eine LED auf volles Weiß
    ///
    /// Die Helligkeit wird hier bewusst NICHT angewendet.
    pub fn turn_on(&mut self, index: usize) -> Result<(), LedError> {
        Self::check_index(index)?;
        self.leds[index] = WHITE;
        self.push()
    }

    /// Schaltet eine LED aus
    pub fn turn_off(&mut self, index: usize) -> Result<(), LedError> {
        self.set_color(index, OFF)
    }

    // ========================================================================
    // Animationen
    // ========================================================================

    /// Blendet eine LED in 256 Schritten ein oder aus
    pub fn fade(
        &mut self,
        index: usize,
        color: RGB8,
        direction: FadeDirection,
    ) -> Result<(), LedError> {
        Self::check_index(index)?;
        for i in 0..FADE_STEPS {
            let level = f64::from(i) / 255.0;
            let scale = match direction {
                FadeDirection::In => level,
                FadeDirection::Out => 1.0 - level,
            };
            self.set_color(index, scale_color(color, scale))?;
            self.delay.delay_ms(self.fade_delay_ms);
        }
        Ok(())
    }

    /// Blendet `led_a` aus und gleichzeitig `led_b` ein
    ///
    /// Beide LEDs werden im selben Schritt geschrieben, danach folgt
    /// genau eine Pause.
    pub fn cross_fade(
        &mut self,
        led_a: usize,
        led_b: usize,
        color_a: RGB8,
        color_b: RGB8,
    ) -> Result<(), LedError> {
        Self::check_index(led_a)?;
        Self::check_index(led_b)?;
        for i in 0..FADE_STEPS {
            let level = f64::from(i) / 255.0;
            self.set_color(led_a, scale_color(color_a, 1.0 - level))?;
            self.set_color(led_b, scale_color(color_b, level))?;
            self.delay.delay_ms(self.fade_delay_ms);
        }
        Ok(())
    }

    /// Lässt ein Licht zwischen den Enden des Strips hin und her laufen
    ///
    /// Läuft bis `cancel` auf `true` gesetzt wird. Das Flag wird vor jeder
    /// Position geprüft; zurückgegeben wird der Zustand beim Abbruch.
    pub fn color_bounce(
        &mut self,
        color: RGB8,
        options: BounceOptions,
        cancel: &AtomicBool,
    ) -> Result<BounceState, LedError> {
        let mut state = BounceState::new(color);
        while !cancel.load(Ordering::Acquire) {
            self.bounce_step(&mut state, options)?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Bounce cancelled at index {}", state.index);

        Ok(state)
    }

    /// Wie `color_bounce`, endet aber nach `positions` Positionen
    pub fn color_bounce_for(
        &mut self,
        color: RGB8,
        options: BounceOptions,
        positions: usize,
    ) -> Result<BounceState, LedError> {
        let mut state = BounceState::new(color);
        for _ in 0..positions {
            self.bounce_step(&mut state, options)?;
        }
        Ok(state)
    }

    /// Zeigt die aktuelle Position an und rückt weiter
    fn bounce_step(
        &mut self,
        state: &mut BounceState,
        options: BounceOptions,
    ) -> Result<(), LedError> {
        let index = state.index;
        if options.fade {
            if index == 0 || index + 1 == N {
                self.fade(index, state.color, FadeDirection::In)?;
            } else {
                self.cross_fade(state.previous(), index, state.color, state.color)?;
            }
        } else {
            self.set_color(index, state.color)?;
            self.delay.delay_ms(options.wait_ms);
            self.set_color(index, OFF)?;
        }

        // Farbwechsel nur beim Abprallen am Anfang
        if state.advance(N) && options.alternate_colors {
            state.color = rotate_channels(state.color);
        }
        Ok(())
    }

    /// Regenbogen auf einer einzelnen LED (255 Schritte)
    pub fn rainbow_single(&mut self, index: usize, wait_ms: u32) -> Result<(), LedError> {
        Self::check_index(index)?;
        for j in 0..RAINBOW_STEPS {
            self.set_color(index, wheel((j & 0xFF) as u8))?;
            self.delay.delay_ms(wait_ms);
        }
        Ok(())
    }

    /// Laufender Regenbogen über alle LEDs
    ///
    /// Jede LED ist um `255 / N` Positionen gegenüber ihrem Vorgänger
    /// verschoben. Pro Schritt werden alle LEDs geschrieben, dann folgt
    /// eine Pause.
    pub fn rainbow_all(&mut self, wait_ms: u32) -> Result<(), LedError> {
        if N == 0 {
            return Ok(());
        }
        let spacing = 255 / N;
        for j in 0..usize::from(RAINBOW_STEPS) {
            for led in 0..N {
                let offset = spacing * led;
                self.set_color(led, wheel(((j + offset) & 0xFF) as u8))?;
            }
            self.delay.delay_ms(wait_ms);
        }
        Ok(())
    }
}
