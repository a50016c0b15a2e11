//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für GPIO-Leitungen, die serielle
//! Byte-Quelle und den Frame-Ausgang ohne konkrete Implementierung.

use crate::types::Strip;

/// Fehler-Typ für LED- und Transport-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// GPIO-Leitung konnte nicht gesetzt werden
    LineFailed,
    /// Byte konnte nicht vom Transport gelesen werden
    ReadFailed,
}

/// Trait für eine digitale Ausgangsleitung (Data oder Clock)
///
/// # Implementierungen
/// - **Production:** `PinLine` über `embedded_hal::digital::OutputPin`
/// - **Testing:** `MockLine` (zeichnet Pegelwechsel auf)
pub trait SignalLine {
    /// Konfiguriert die Leitung als Ausgang
    fn configure_output(&mut self) -> Result<(), LedError>;

    fn set_high(&mut self) -> Result<(), LedError>;

    fn set_low(&mut self) -> Result<(), LedError>;
}

/// Trait für die serielle Byte-Quelle (Host → Device)
///
/// # Implementierungen
/// - **Production:** `IoByteSource` über `embedded_io::Read` (ESP32 UART)
/// - **Testing:** `MockByteSource` (Bytes aus einem Slice)
pub trait ByteSource {
    /// Ist die Verbindung zum Host bereit?
    ///
    /// Transports ohne Handshake sind immer bereit.
    fn is_ready(&mut self) -> bool {
        true
    }

    /// Liegt mindestens ein Byte zum Lesen bereit? (non-blocking)
    fn available(&mut self) -> bool;

    /// Liest das nächste Byte und blockiert bis eines da ist
    ///
    /// Ein hängender Transport ist kein Fehler: der Aufruf kehrt dann
    /// einfach nicht zurück.
    fn read_byte(&mut self) -> Result<u8, LedError>;
}

/// Trait für den Frame-Ausgang
///
/// Wird vom Bridge-Loop aufgerufen sobald der Frame-Buffer komplett ist.
pub trait FrameSink {
    /// Sendet alle Strips als einen kompletten Frame
    fn send_frame(&mut self, strips: &[Strip]) -> Result<(), LedError>;
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::LineFailed => defmt::write!(fmt, "LineFailed"),
            LedError::ReadFailed => defmt::write!(fmt, "ReadFailed"),
        }
    }
}
