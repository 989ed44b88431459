// LED Show Task - Spielt die Badge-Animationen auf der LED-Kette ab
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use embedded_hal::delay::DelayNs;
use esp_hal::delay::Delay;
use esp_hal::gpio::AnyPin;
use rgb::RGB8;

use crate::config::{
    BOUNCE_COLOR, BOUNCE_OPTIONS, BOUNCE_POSITIONS, FADE_DELAY_MS, LED_CONFIG, LED_TIMING,
    RAINBOW_SINGLE_LED, RAINBOW_WAIT_MS, RMT_CLOCK_MHZ, SHOW_PAUSE_SECS,
};
use crate::hal::RmtStripDriver;
use crate::{FadeDirection, LedError, LedStrip, LedStripWriter};

/// Farben für den Fade-Teil der Show
const FADE_COLORS: [RGB8; 3] = [
    RGB8 { r: 255, g: 0, b: 0 },
    RGB8 { r: 0, g: 255, b: 0 },
    RGB8 { r: 0, g: 0, b: 255 },
];

/// Ein kompletter Show-Durchlauf - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Ablauf:
/// - Laufender Regenbogen über alle LEDs
/// - Regenbogen auf der mittleren LED
/// - Ein-/Ausblenden und Überblenden in Rot, Grün, Blau
/// - Begrenzter Bounce mit Farbwechsel
///
/// Der erste Fehler bricht den Durchlauf ab.
pub fn led_show_logic<W: LedStripWriter, D: DelayNs>(
    strip: &mut LedStrip<W, D>,
) -> Result<(), LedError> {
    info!("Show: rainbow");
    strip.rainbow_all(RAINBOW_WAIT_MS)?;
    strip.clear_all()?;
    strip.rainbow_single(RAINBOW_SINGLE_LED, RAINBOW_WAIT_MS)?;
    strip.clear_all()?;

    info!("Show: fade");
    let last = strip.len() - 1;
    for color in FADE_COLORS {
        strip.fade(0, color, FadeDirection::In)?;
        strip.cross_fade(0, last, color, color)?;
        strip.fade(last, color, FadeDirection::Out)?;
    }

    info!("Show: bounce");
    let state = strip.color_bounce_for(BOUNCE_COLOR, BOUNCE_OPTIONS, BOUNCE_POSITIONS)?;
    info!("Bounce stopped at LED {}", state.index);

    strip.clear_all()
}

/// LED Show Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `led_show_logic()` Funktion in einer Schleife auf.
///
/// # Parameter
/// - `pin`: GPIO für die LED-Datenleitung (siehe `LED_GPIO_PIN`)
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
#[embassy_executor::task]
pub async fn led_show_task(
    pin: AnyPin<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
) {
    // Hardware initialisieren: RmtStripDriver kapselt RMT + Puls-Kodierung
    let driver = match RmtStripDriver::new(rmt_peripheral, pin, RMT_CLOCK_MHZ) {
        Ok(driver) => driver,
        Err(e) => {
            error!("LED: RMT init failed: {}", e);
            return;
        }
    };

    // Konfiguration wird hier geprüft, bei Fehler bleibt die Kette dunkel
    let created: Result<LedStrip<_, _>, LedError> =
        LedStrip::new(driver, Delay::new(), &LED_CONFIG, LED_TIMING);
    let mut strip = match created {
        Ok(strip) => strip.with_fade_delay_ms(FADE_DELAY_MS),
        Err(e) => {
            error!("LED: invalid configuration: {}", e);
            return;
        }
    };
    info!(
        "LED: {} LEDs on GPIO{}, brightness {}",
        strip.len(),
        strip.pin(),
        strip.brightness()
    );

    // Hauptschleife: Show endlos wiederholen
    loop {
        if let Err(e) = led_show_logic(&mut strip) {
            error!("LED: show aborted: {}", e);
            // Kette dunkel schalten, Fehler hier nur loggen
            if strip.clear_all().is_err() {
                error!("LED: failed to clear strip");
            }
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_secs(SHOW_PAUSE_SECS)).await;
    }
}
