//! Gemeinsame Mocks für die Host-Tests
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use badge_core::{LedError, LedStripWriter, TimingProfile};
use embedded_hal::delay::DelayNs;
use rgb::RGB8;

// ============================================================================
// Mock LED Writer
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    /// Alle übertragenen Frames (Kopie des Buffers pro write())
    pub frames: Vec<Vec<RGB8>>,
    /// Anzahl der write() Aufrufe
    pub write_count: usize,
    /// Von apply_timing() übernommenes Timing
    pub timing: Option<TimingProfile>,
    /// Simuliere Fehler beim nächsten write()
    pub fail_next_write: bool,
    /// Zählt jeden Hardware-Zugriff, auch nachdem der Writer verschoben wurde
    pub hardware_calls: Arc<AtomicUsize>,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&[RGB8]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl LedStripWriter for MockLedWriter {
    fn apply_timing(&mut self, timing: TimingProfile) -> Result<(), LedError> {
        self.hardware_calls.fetch_add(1, Ordering::SeqCst);
        self.timing = Some(timing);
        Ok(())
    }

    fn write(&mut self, leds: &[RGB8]) -> Result<(), LedError> {
        self.hardware_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.frames.push(leds.to_vec());
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

#[derive(Default)]
pub struct MockDelay {
    /// Alle Pausen in Nanosekunden, eine pro Aufruf
    pub delays_ns: Vec<u64>,
    /// Setzt das Flag nach n Pausen (simuliert einen zweiten Task)
    pub cancel_after: Option<(usize, Arc<AtomicBool>)>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancelling_after(count: usize, flag: Arc<AtomicBool>) -> Self {
        Self {
            delays_ns: Vec::new(),
            cancel_after: Some((count, flag)),
        }
    }

    pub fn delays_ms(&self) -> Vec<u64> {
        self.delays_ns.iter().map(|ns| ns / 1_000_000).collect()
    }

    fn record(&mut self, ns: u64) {
        self.delays_ns.push(ns);
        if let Some((count, flag)) = &self.cancel_after {
            if self.delays_ns.len() >= *count {
                flag.store(true, Ordering::Release);
            }
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(u64::from(ms) * 1_000_000);
    }
}
