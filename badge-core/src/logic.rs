//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::traits::LedError;
use crate::types::{BitTicks, Pulse};

/// Skaliert alle Farbkanäle mit einem Faktor
///
/// Ergebnis wird auf 0..=255 begrenzt und abgeschnitten (nicht gerundet).
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use badge_core::scale_color;
/// let color = scale_color(RGB8 { r: 255, g: 100, b: 0 }, 0.5);
/// assert_eq!(color, RGB8 { r: 127, g: 50, b: 0 });
/// ```
pub fn scale_color(color: RGB8, scale: f64) -> RGB8 {
    let channel = |c: u8| (f64::from(c) * scale).clamp(0.0, 255.0) as u8;
    RGB8 {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

/// Farbrad: Position 0-255 → Farbe
///
/// Drei 85er Bänder: Grün → Rot, Rot → Blau, Blau → Grün.
///
/// ```
/// # use rgb::RGB8;
/// # use badge_core::wheel;
/// assert_eq!(wheel(0), RGB8 { r: 0, g: 255, b: 0 });
/// assert_eq!(wheel(85), RGB8 { r: 255, g: 0, b: 0 });
/// assert_eq!(wheel(170), RGB8 { r: 0, g: 0, b: 255 });
/// ```
pub fn wheel(pos: u8) -> RGB8 {
    if pos < 85 {
        RGB8 {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    } else if pos < 170 {
        let pos = pos - 85;
        RGB8 {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        }
    } else {
        let pos = pos - 170;
        RGB8 {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        }
    }
}

/// Rotiert RGB-Farbwerte zyklisch: (R, G, B) → (G, B, R)
pub fn rotate_channels(color: RGB8) -> RGB8 {
    RGB8 {
        r: color.g, // Rot bekommt altes Grün
        g: color.b, // Grün bekommt altes Blau
        b: color.r, // Blau bekommt altes Rot
    }
}

/// Anzahl Pulse für `led_count` LEDs (24 Bit pro LED + Abschluss)
pub const fn pulse_buffer_len(led_count: usize) -> usize {
    led_count * 24 + 1
}

/// Kodiert einen kompletten Frame in Bit-Pulse
///
/// Reihenfolge wie vom WS2812 erwartet: G, R, B, jeweils MSB zuerst.
/// Nach dem letzten Bit folgt ein Null-Puls als Ende-Markierung.
///
/// Gibt die Anzahl geschriebener Pulse zurück.
pub fn encode_frame(leds: &[RGB8], ticks: BitTicks, out: &mut [Pulse]) -> Result<usize, LedError> {
    let needed = pulse_buffer_len(leds.len());
    if out.len() < needed {
        return Err(LedError::BufferTooSmall);
    }

    let mut slots = out.iter_mut();
    for led in leds {
        for channel in [led.g, led.r, led.b] {
            for bit in (0..8).rev() {
                let pulse = if channel & (1 << bit) != 0 {
                    ticks.one
                } else {
                    ticks.zero
                };
                // Länge wurde oben geprüft
                if let Some(slot) = slots.next() {
                    *slot = pulse;
                }
            }
        }
    }
    if let Some(slot) = slots.next() {
        *slot = Pulse::default();
    }

    Ok(needed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_color_truncates() {
        let color = scale_color(RGB8 { r: 255, g: 3, b: 1 }, 0.5);
        assert_eq!(color, RGB8 { r: 127, g: 1, b: 0 });
    }

    #[test]
    fn test_scale_color_clamps() {
        let color = RGB8 { r: 200, g: 10, b: 0 };
        assert_eq!(scale_color(color, 2.0), RGB8 { r: 255, g: 20, b: 0 });
        assert_eq!(scale_color(color, -1.0), RGB8 { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_wheel_bands() {
        assert_eq!(wheel(84), RGB8 { r: 252, g: 3, b: 0 });
        assert_eq!(wheel(169), RGB8 { r: 3, g: 0, b: 252 });
        assert_eq!(wheel(255), RGB8 { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn test_rotate_channels_full_cycle() {
        let mut color = RGB8 { r: 10, g: 20, b: 30 };
        color = rotate_channels(color);
        assert_eq!(color, RGB8 { r: 20, g: 30, b: 10 });
        color = rotate_channels(color);
        color = rotate_channels(color);
        assert_eq!(color, RGB8 { r: 10, g: 20, b: 30 });
    }

    #[test]
    fn test_encode_frame_grb_msb_first() {
        let ticks = BitTicks {
            zero: Pulse { high: 1, low: 2 },
            one: Pulse { high: 3, low: 4 },
        };
        let mut out = [Pulse::default(); pulse_buffer_len(1)];
        let written = encode_frame(&[RGB8 { r: 0, g: 0x80, b: 0x01 }], ticks, &mut out).unwrap();

        assert_eq!(written, 25);
        // Grün zuerst, MSB gesetzt
        assert_eq!(out[0], ticks.one);
        assert_eq!(out[1], ticks.zero);
        // Rot komplett 0
        assert!(out[8..16].iter().all(|p| *p == ticks.zero));
        // Blau: nur LSB gesetzt
        assert_eq!(out[22], ticks.zero);
        assert_eq!(out[23], ticks.one);
        assert_eq!(out[24], Pulse::default());
    }

    #[test]
    fn test_encode_frame_buffer_too_small() {
        let ticks = BitTicks {
            zero: Pulse { high: 1, low: 2 },
            one: Pulse { high: 3, low: 4 },
        };
        let mut out = [Pulse::default(); 24];
        assert_eq!(
            encode_frame(&[RGB8::default()], ticks, &mut out),
            Err(LedError::BufferTooSmall)
        );
    }
}
