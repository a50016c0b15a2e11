//! LPD Core - Platform-agnostic Protokoll-Logik und Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, den LPD8806 Signal Driver, den Frame-Buffer und
//! den Decoder für das Host-Protokoll.

#![no_std]

pub mod adapters;
pub mod bridge;
pub mod decoder;
pub mod driver;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use adapters::{IoByteSource, PinLine};
pub use bridge::{Bridge, BridgeStats, flush_input};
pub use decoder::{CommandDecoder, DecodeStep, DecoderState};
pub use driver::{DriverConfig, NoDelay, SignalDriver};
pub use logic::{
    encode_strip, encode_update, frame_bytes, index_byte, parse_index_byte, pixel_wire_bytes,
    wire_byte,
};
pub use traits::{ByteSource, FrameSink, LedError, SignalLine};
pub use types::{Channel, FrameBuffer, PIXELS_PER_STRIP, PixelUpdate, Strip};
