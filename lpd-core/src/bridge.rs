//! Bridge: Host-Bytes → Frame-Buffer → LED-Strip
//!
//! Der Haupt-Loop des Geräts als testbarer Typ. Ein Thread, keine Locks:
//! der Decoder schreibt in den Buffer, der Frame-Ausgang liest ihn
//! synchron sobald der Frame komplett ist.

use crate::decoder::{CommandDecoder, DecodeStep};
use crate::traits::{ByteSource, FrameSink, LedError};
use crate::types::FrameBuffer;

/// Zähler für Logging und Tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BridgeStats {
    pub frames_sent: u32,
    pub updates_applied: u32,
    pub bytes_discarded: u32,
}

/// Besitzt Frame-Buffer, Decoder und Frame-Ausgang für die ganze Laufzeit
pub struct Bridge<S, const N: usize> {
    buffer: FrameBuffer<N>,
    decoder: CommandDecoder,
    sink: S,
    stats: BridgeStats,
}

impl<S: FrameSink, const N: usize> Bridge<S, N> {
    pub fn new(sink: S) -> Self {
        Self::with_buffer(FrameBuffer::new(), sink)
    }

    pub fn with_buffer(buffer: FrameBuffer<N>, sink: S) -> Self {
        Self {
            buffer,
            decoder: CommandDecoder::new(),
            sink,
            stats: BridgeStats::default(),
        }
    }

    /// Wartet bis der Host verbunden ist und verwirft alte Eingabe
    ///
    /// Gibt die Anzahl der verworfenen Bytes zurück.
    pub fn connect<B: ByteSource>(&mut self, source: &mut B) -> usize {
        while !source.is_ready() {
            core::hint::spin_loop();
        }
        self.decoder.reset();
        flush_input(source)
    }

    /// Liest genau ein Byte (blocking) und verarbeitet es
    ///
    /// Ein Lesefehler zählt wie ein verlorenes Byte: der Decoder fängt
    /// wieder bei der Suche nach einem Index-Byte an.
    pub fn poll<B: ByteSource>(&mut self, source: &mut B) -> Result<DecodeStep, LedError> {
        let byte = match source.read_byte() {
            Ok(byte) => byte,
            Err(e) => {
                self.decoder.reset();
                return Err(e);
            }
        };
        self.process_byte(byte)
    }

    /// Ein Byte durch den Decoder schicken, bei komplettem Frame senden
    pub fn process_byte(&mut self, byte: u8) -> Result<DecodeStep, LedError> {
        let step = self.decoder.feed(byte, &mut self.buffer);
        match step {
            DecodeStep::Discarded(_) => {
                self.stats.bytes_discarded = self.stats.bytes_discarded.wrapping_add(1);
            }
            DecodeStep::Applied(_) => {
                self.stats.updates_applied = self.stats.updates_applied.wrapping_add(1);
            }
            DecodeStep::FrameComplete(_) => {
                self.stats.updates_applied = self.stats.updates_applied.wrapping_add(1);
                self.sink.send_frame(self.buffer.strips())?;
                self.stats.frames_sent = self.stats.frames_sent.wrapping_add(1);
                #[cfg(feature = "defmt")]
                defmt::debug!("Bridge: frame {} sent", self.stats.frames_sent);
            }
            DecodeStep::Index { .. } | DecodeStep::Ignored(_) => {}
        }
        Ok(step)
    }

    /// Endlos-Loop: kein Shutdown, läuft bis zum Abschalten
    pub fn run<B: ByteSource>(&mut self, source: &mut B) -> ! {
        loop {
            if let Err(_e) = self.poll(source) {
                #[cfg(feature = "defmt")]
                defmt::error!("Bridge: {}", _e);
            }
        }
    }

    /// Aktuellen Buffer nochmal komplett senden
    pub fn resend(&mut self) -> Result<(), LedError> {
        self.sink.send_frame(self.buffer.strips())?;
        self.stats.frames_sent = self.stats.frames_sent.wrapping_add(1);
        Ok(())
    }

    pub fn buffer(&self) -> &FrameBuffer<N> {
        &self.buffer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn stats(&self) -> BridgeStats {
        self.stats
    }
}

/// Verwirft alle Bytes die gerade anliegen (non-blocking)
pub fn flush_input<B: ByteSource>(source: &mut B) -> usize {
    let mut flushed = 0;
    while source.available() {
        if source.read_byte().is_err() {
            break;
        }
        flushed += 1;
    }
    flushed
}
