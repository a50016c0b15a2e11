//! Command Decoder: Host-Bytes → Pixel-Updates
//!
//! Jedes Update besteht aus zwei Bytes: Index-Byte (Bit 7 gesetzt,
//! 5 Bit Pixel, 2 Bit Kanal) und Wert-Byte. Geht ein Byte auf der Leitung
//! verloren, erkennt der Decoder das am fehlenden Bit 7 und verwirft
//! Bytes bis wieder ein Index-Byte kommt.

use crate::logic::parse_index_byte;
use crate::types::{Channel, FrameBuffer, PixelUpdate};

/// Parser-Zustand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecoderState {
    /// Wartet auf ein Index-Byte
    #[default]
    SeekIndex,
    /// Index-Byte gelesen, das nächste Byte ist der Wert
    SeekValue { pixel: u8, channel: Channel },
}

/// Ergebnis eines einzelnen Bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStep {
    /// Byte ohne Bit 7 an Index-Position, verworfen (Resync)
    Discarded(u8),
    /// Index-Byte gelesen, Wert steht noch aus
    Index { pixel: u8, channel: Channel },
    /// Update in den Buffer geschrieben
    Applied(PixelUpdate),
    /// Wert für den reservierten Kanal gelesen, Buffer unverändert
    Ignored(PixelUpdate),
    /// Letzter Kanal des letzten Pixels geschrieben, Frame senden
    FrameComplete(PixelUpdate),
}

/// Zustandsmaschine für das Host-Protokoll
#[derive(Debug, Clone, Default)]
pub struct CommandDecoder {
    state: DecoderState,
}

impl CommandDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Zurück in den Ausgangszustand (halbes Update wird verworfen)
    pub fn reset(&mut self) {
        self.state = DecoderState::SeekIndex;
    }

    /// Ein Byte verarbeiten
    ///
    /// Updates gehen immer auf Strip 0. Der Wert wird unverändert
    /// gespeichert.
    pub fn feed<const N: usize>(&mut self, byte: u8, buffer: &mut FrameBuffer<N>) -> DecodeStep {
        match self.state {
            DecoderState::SeekIndex => match parse_index_byte(byte) {
                Some((pixel, channel)) => {
                    self.state = DecoderState::SeekValue { pixel, channel };
                    DecodeStep::Index { pixel, channel }
                }
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("Decoder: discarding {=u8:#x} (no marker bit)", byte);
                    DecodeStep::Discarded(byte)
                }
            },
            DecoderState::SeekValue { pixel, channel } => {
                self.state = DecoderState::SeekIndex;
                let update = PixelUpdate::new(pixel, channel, byte);
                if !buffer.apply(update) {
                    return DecodeStep::Ignored(update);
                }
                if update.completes_frame() {
                    DecodeStep::FrameComplete(update)
                } else {
                    DecodeStep::Applied(update)
                }
            }
        }
    }
}
