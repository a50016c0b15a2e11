//! Adapter auf die embedded-hal / embedded-io Traits
//!
//! Damit kann jeder HAL (esp-hal, rp-hal, ...) direkt verwendet werden.

use embedded_hal::digital::OutputPin;
use embedded_io::{Read, ReadReady};

use crate::traits::{ByteSource, LedError, SignalLine};

/// GPIO-Ausgang als Signal-Leitung
///
/// Der HAL liefert den Pin schon als Ausgang. `configure_output` zieht die
/// Leitung nur auf Low, damit Data und Clock in definiertem Ruhezustand
/// starten.
pub struct PinLine<P> {
    pin: P,
}

impl<P: OutputPin> PinLine<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> SignalLine for PinLine<P> {
    fn configure_output(&mut self) -> Result<(), LedError> {
        self.set_low()
    }

    fn set_high(&mut self) -> Result<(), LedError> {
        self.pin.set_high().map_err(|_| LedError::LineFailed)
    }

    fn set_low(&mut self) -> Result<(), LedError> {
        self.pin.set_low().map_err(|_| LedError::LineFailed)
    }
}

/// Blocking Byte-Quelle über `embedded_io::Read`
///
/// `read_byte` wartet bis mindestens ein Byte da ist. Liefert der Reader
/// 0 Bytes, wird einfach weiter gewartet (kein Timeout).
pub struct IoByteSource<R> {
    reader: R,
}

impl<R: Read + ReadReady> IoByteSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read + ReadReady> ByteSource for IoByteSource<R> {
    fn available(&mut self) -> bool {
        self.reader.read_ready().unwrap_or(false)
    }

    fn read_byte(&mut self) -> Result<u8, LedError> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => continue,
                Ok(_) => return Ok(buf[0]),
                Err(_) => return Err(LedError::ReadFailed),
            }
        }
    }
}
