// RMT Strip-Treiber für die LED-Kette
//
// Kodiert den kompletten Frame mit dem konfigurierten Timing-Profil
// in RMT-Pulse. Fertige Adapter (esp-hal-smartled) haben das WS2812-Timing
// fest eingebaut und können das V2-Profil nicht abbilden.

use badge_core::{
    BitTicks, LedError, LedStripWriter, NUM_LEDS, Pulse, TimingProfile, encode_frame,
    pulse_buffer_len,
};
use esp_hal::Blocking;
use esp_hal::gpio::Level;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::rmt::{Channel, PulseCode, Rmt, Tx, TxChannelConfig, TxChannelCreator};
use esp_hal::time::Rate;
use rgb::RGB8;

/// Anzahl Pulse für alle LEDs (24 Bit pro LED + Ende-Markierung)
const PULSE_BUFFER_LEN: usize = pulse_buffer_len(NUM_LEDS);

/// Real Hardware Strip-Treiber
///
/// Nutzt ESP32 RMT Peripheral um die WS2812 Kette anzusteuern.
pub struct RmtStripDriver<'a> {
    /// `None` nur während einer laufenden Übertragung
    channel: Option<Channel<'a, Blocking, Tx>>,
    clock_mhz: u32,
    ticks: BitTicks,
    frame: [RGB8; NUM_LEDS],
    pulses: [Pulse; PULSE_BUFFER_LEN],
    rmt_buffer: [PulseCode; PULSE_BUFFER_LEN],
}

impl<'a> RmtStripDriver<'a> {
    /// Erstellt einen neuen RmtStripDriver
    ///
    /// Das Timing wird erst über `apply_timing()` gesetzt (passiert beim
    /// Erzeugen des `LedStrip`), bis dahin gilt `TimingProfile::DEFAULT`.
    ///
    /// # Parameter
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `pin`: GPIO für die LED-Datenleitung
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    pub fn new(
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        pin: impl PeripheralOutput<'a>,
        rmt_clock_mhz: u32,
    ) -> Result<Self, LedError> {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::WriteFailed)?;

        // Takt-Teiler 1: ein Tick entspricht genau einem RMT-Takt
        let config = TxChannelConfig::default()
            .with_clk_divider(1)
            .with_idle_output_level(Level::Low)
            .with_idle_output(true)
            .with_carrier_modulation(false);

        let channel = rmt
            .channel0
            .configure_tx(pin, config)
            .map_err(|_| LedError::WriteFailed)?;

        Ok(Self {
            channel: Some(channel),
            clock_mhz: rmt_clock_mhz,
            ticks: TimingProfile::DEFAULT.to_ticks(rmt_clock_mhz)?,
            frame: [RGB8::default(); NUM_LEDS],
            pulses: [Pulse::default(); PULSE_BUFFER_LEN],
            rmt_buffer: [PulseCode::end_marker(); PULSE_BUFFER_LEN],
        })
    }

    /// Überträgt `self.frame` und wartet bis die Übertragung fertig ist
    fn transmit_frame(&mut self) -> Result<(), LedError> {
        encode_frame(&self.frame, self.ticks, &mut self.pulses)?;
        for (code, pulse) in self.rmt_buffer.iter_mut().zip(self.pulses.iter()) {
            *code = if *pulse == Pulse::default() {
                PulseCode::end_marker()
            } else {
                PulseCode::new(Level::High, pulse.high, Level::Low, pulse.low)
            };
        }

        let channel = self.channel.take().ok_or(LedError::WriteFailed)?;
        let transaction = match channel.transmit(&self.rmt_buffer) {
            Ok(transaction) => transaction,
            // Kanal ist bei diesem Fehler verloren, weitere Writes schlagen fehl
            Err(_) => return Err(LedError::WriteFailed),
        };

        match transaction.wait() {
            Ok(channel) => {
                self.channel = Some(channel);
                Ok(())
            }
            Err((_, channel)) => {
                self.channel = Some(channel);
                Err(LedError::WriteFailed)
            }
        }
    }
}

impl LedStripWriter for RmtStripDriver<'_> {
    fn apply_timing(&mut self, timing: TimingProfile) -> Result<(), LedError> {
        self.ticks = timing.to_ticks(self.clock_mhz)?;
        Ok(())
    }

    fn write(&mut self, leds: &[RGB8]) -> Result<(), LedError> {
        if leds.len() > NUM_LEDS {
            return Err(LedError::BufferTooSmall);
        }
        self.frame = [RGB8::default(); NUM_LEDS];
        self.frame[..leds.len()].copy_from_slice(leds);
        self.transmit_frame()
    }
}
