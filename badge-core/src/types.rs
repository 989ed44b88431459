//! Core Types für LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

use crate::config::ConfigError;

/// Aus (alle Kanäle 0)
pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Volles Weiß (ungedimmt)
pub const WHITE: RGB8 = RGB8 {
    r: 0xFF,
    g: 0xFF,
    b: 0xFF,
};

/// Richtung eines Fade-Effekts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeDirection {
    /// Von Aus zur vollen Farbe
    In,
    /// Von voller Farbe zu Aus
    Out,
}

/// Laufrichtung der Bounce-Animation entlang des Strips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Richtung Index N-1
    Forward,
    /// Richtung Index 0
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Signal-Timing für ein einzelnes Bit (WS2812-Protokoll)
///
/// ```text
/// 0 Bit          1 Bit
///   ┌─────┐        ┌──────────┐
/// <─| T0H └──T0L─┘ | T1H      └─T1L─┘
/// ```
///
/// Je weiter T0H und T1H auseinander liegen, desto eindeutiger kann die LED
/// eine 0 von einer 1 unterscheiden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingProfile {
    pub t0h_ns: u32,
    pub t0l_ns: u32,
    pub t1h_ns: u32,
    pub t1l_ns: u32,
}

/// Maximale Pulslänge eines RMT-Eintrags (15 Bit)
pub const MAX_PULSE_TICKS: u32 = 0x7FFF;

impl TimingProfile {
    /// Standard-Timing für 800 kHz
    pub const DEFAULT: Self = Self::new(400, 850, 800, 450);

    /// Verbreitertes Timing für Board-Revision V2
    ///
    /// Auf V2-Boards erzeugt das Standard-Timing Artefakte. Die längeren
    /// Low-Phasen (bit 0) bzw. High-Phasen (bit 1) machen die Bits eindeutiger.
    pub const BADGE_V2: Self = Self::new(400, 5000, 5000, 450);

    pub const fn new(t0h_ns: u32, t0l_ns: u32, t1h_ns: u32, t1l_ns: u32) -> Self {
        Self {
            t0h_ns,
            t0l_ns,
            t1h_ns,
            t1l_ns,
        }
    }

    /// Prüft ob das Profil verwendbar ist
    ///
    /// Alle Phasen müssen > 0 sein und T1H muss länger als T0H sein,
    /// sonst kann die LED die Bits nicht unterscheiden.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let phases = [self.t0h_ns, self.t0l_ns, self.t1h_ns, self.t1l_ns];
        if phases.contains(&0) || self.t1h_ns <= self.t0h_ns {
            return Err(ConfigError::InvalidTiming);
        }
        Ok(())
    }

    /// Rechnet das Profil in Takte eines Peripherie-Clocks um
    ///
    /// `ticks = ns * clock_mhz / 1000`
    ///
    /// # Fehlerbehandlung
    /// `ConfigError::InvalidTiming` wenn eine Phase 0 Takte ergibt oder
    /// nicht in einen RMT-Puls passt.
    pub fn to_ticks(&self, clock_mhz: u32) -> Result<BitTicks, ConfigError> {
        self.validate()?;
        let convert = |ns: u32| -> Result<u16, ConfigError> {
            let ticks = u64::from(ns) * u64::from(clock_mhz) / 1000;
            if ticks == 0 || ticks > u64::from(MAX_PULSE_TICKS) {
                return Err(ConfigError::InvalidTiming);
            }
            Ok(ticks as u16)
        };

        Ok(BitTicks {
            zero: Pulse {
                high: convert(self.t0h_ns)?,
                low: convert(self.t0l_ns)?,
            },
            one: Pulse {
                high: convert(self.t1h_ns)?,
                low: convert(self.t1l_ns)?,
            },
        })
    }
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Ein High/Low-Puls in Takten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    pub high: u16,
    pub low: u16,
}

/// Pulse für ein 0-Bit und ein 1-Bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitTicks {
    pub zero: Pulse,
    pub one: Pulse,
}

/// Optionen für die Bounce-Animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BounceOptions {
    /// Leuchtdauer pro LED in ms (nur ohne Fade)
    pub wait_ms: u32,
    /// Weiches Überblenden statt Blinken
    pub fade: bool,
    /// Farbkanäle bei jedem Abprallen am Anfang rotieren
    pub alternate_colors: bool,
}

impl Default for BounceOptions {
    fn default() -> Self {
        Self {
            wait_ms: 50,
            fade: true,
            alternate_colors: false,
        }
    }
}

/// Zustand der Bounce-Animation
///
/// Wird beim Start einer Animation erzeugt und beim Ende zurückgegeben.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BounceState {
    pub index: usize,
    pub direction: Direction,
    pub color: RGB8,
}

impl BounceState {
    /// Startzustand: Index 0, vorwärts
    pub fn new(color: RGB8) -> Self {
        Self {
            index: 0,
            direction: Direction::Forward,
            color,
        }
    }

    /// Index der zuvor leuchtenden Nachbar-LED
    ///
    /// Nur für innere Indizes sinnvoll (nicht 0 und nicht N-1).
    pub fn previous(&self) -> usize {
        match self.direction {
            Direction::Forward => self.index - 1,
            Direction::Backward => self.index + 1,
        }
    }

    /// Springt zur nächsten Position auf einem Strip mit `len` LEDs
    ///
    /// Am Ende (Index `len`) wird auf `len - 2` zurückgesprungen, am Anfang
    /// (Index -1) auf 1. Die letzte bzw. erste LED wird also nie doppelt
    /// angezeigt.
    ///
    /// Gibt `true` zurück wenn am Anfang des Strips abgeprallt wurde.
    pub fn advance(&mut self, len: usize) -> bool {
        if len < 2 {
            self.index = 0;
            self.direction = self.direction.reversed();
            return self.direction == Direction::Forward;
        }

        match self.direction {
            Direction::Forward => {
                self.index += 1;
                if self.index == len {
                    self.direction = Direction::Backward;
                    self.index = len - 2;
                }
                false
            }
            Direction::Backward => {
                if self.index == 0 {
                    self.direction = Direction::Forward;
                    self.index = 1;
                    true
                } else {
                    self.index -= 1;
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_ticks_at_80_mhz() {
        let ticks = TimingProfile::BADGE_V2.to_ticks(80).unwrap();
        assert_eq!(ticks.zero, Pulse { high: 32, low: 400 });
        assert_eq!(ticks.one, Pulse { high: 400, low: 36 });
    }

    #[test]
    fn test_timing_too_long_for_rmt() {
        let timing = TimingProfile::new(400, 500_000, 5000, 450);
        assert_eq!(timing.to_ticks(80), Err(ConfigError::InvalidTiming));
    }

    #[test]
    fn test_bounce_advance_turns_at_end() {
        let mut state = BounceState::new(OFF);
        for _ in 0..6 {
            assert!(!state.advance(7));
        }
        assert_eq!(state.index, 6);
        assert!(!state.advance(7));
        assert_eq!(state.index, 5);
        assert_eq!(state.direction, Direction::Backward);
    }

    #[test]
    fn test_bounce_advance_turns_at_start() {
        let mut state = BounceState {
            index: 0,
            direction: Direction::Backward,
            color: OFF,
        };
        assert!(state.advance(7));
        assert_eq!(state.index, 1);
        assert_eq!(state.direction, Direction::Forward);
    }
}
