//! LPD8806 Signal Driver
//!
//! Bit-Banging auf zwei Leitungen (Data + Clock). Ein Byte sind immer
//! genau 8 Clock-Perioden, MSB zuerst.

use embedded_hal::delay::DelayNs;

use crate::logic::{LATCH_BYTE, bits_msb_first, frame_bytes};
use crate::traits::{FrameSink, LedError, SignalLine};
use crate::types::Strip;

/// Konfiguration des Signal Drivers
///
/// Manche Strip-Revisionen brauchen nach jedem Pegelwechsel eine Wartezeit
/// (ca. 1 ms) um die minimale Clock-Periode einzuhalten. Andere laufen mit
/// dem reinen Instruktions-Timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DriverConfig {
    /// Wartezeit nach jedem Pegelwechsel in Mikrosekunden (`None` = keine)
    pub settle_delay_us: Option<u32>,
}

impl DriverConfig {
    pub fn with_settle_delay_us(mut self, delay_us: u32) -> Self {
        self.settle_delay_us = Some(delay_us);
        self
    }
}

/// Delay ohne Wartezeit, für Strips die keine Settle-Zeit brauchen
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Signal Driver für eine LPD8806-Kette
///
/// Generisch über die beiden Leitungen und den Delay-Provider:
/// - Real Hardware: `PinLine<Output>` + `esp_hal::delay::Delay`
/// - Tests: `MockLine` + `NoDelay` oder ein zählender Delay
pub struct SignalDriver<D, C, W = NoDelay> {
    data: D,
    clock: C,
    delay: W,
    config: DriverConfig,
}

impl<D, C, W> SignalDriver<D, C, W>
where
    D: SignalLine,
    C: SignalLine,
    W: DelayNs,
{
    pub fn new(data: D, clock: C, delay: W, config: DriverConfig) -> Self {
        Self {
            data,
            clock,
            delay,
            config,
        }
    }

    /// Leitungen als Ausgang konfigurieren und die Kette zurücksetzen
    ///
    /// Sendet ein Latch-Byte pro Strip bevor irgendwelche Frame-Daten kommen.
    pub fn init(&mut self, strip_count: usize) -> Result<(), LedError> {
        self.data.configure_output()?;
        self.clock.configure_output()?;
        for _ in 0..strip_count {
            self.emit_byte(LATCH_BYTE)?;
        }
        Ok(())
    }

    /// Ein Byte als 8 Clock-Perioden ausgeben, MSB zuerst
    pub fn emit_byte(&mut self, value: u8) -> Result<(), LedError> {
        for bit in bits_msb_first(value) {
            if bit {
                self.data.set_high()?;
            } else {
                self.data.set_low()?;
            }
            self.settle();
            self.strobe()?;
        }
        Ok(())
    }

    pub fn config(&self) -> DriverConfig {
        self.config
    }

    /// Gibt Leitungen und Delay wieder frei
    pub fn release(self) -> (D, C, W) {
        (self.data, self.clock, self.delay)
    }

    fn strobe(&mut self) -> Result<(), LedError> {
        self.clock.set_high()?;
        self.settle();
        self.clock.set_low()?;
        self.settle();
        Ok(())
    }

    fn settle(&mut self) {
        if let Some(us) = self.config.settle_delay_us {
            self.delay.delay_us(us);
        }
    }
}

impl<D, C, W> FrameSink for SignalDriver<D, C, W>
where
    D: SignalLine,
    C: SignalLine,
    W: DelayNs,
{
    /// Frame Encoder: alle Pixel (G, B, R mit Bit 7), dann ein Latch pro Strip
    fn send_frame(&mut self, strips: &[Strip]) -> Result<(), LedError> {
        for byte in frame_bytes(strips) {
            self.emit_byte(byte)?;
        }
        Ok(())
    }
}
