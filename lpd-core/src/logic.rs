//! Pure Protokoll-Funktionen
//!
//! LPD8806 Wire-Format und Host-Kommando-Format ohne Hardware-Dependencies
//! (testbar!)

use rgb::RGB8;

use crate::types::{Channel, PixelUpdate, Strip};

/// Markierungs-Bit: beim Strip Pflicht in jedem Farb-Byte, beim Host
/// kennzeichnet es das Index-Byte eines Updates
pub const MARKER_BIT: u8 = 0x80;

/// Latch/Reset-Byte für ein Strip-Segment
pub const LATCH_BYTE: u8 = 0x00;

/// Farbwert → Wire-Byte für den Strip
///
/// Nur die unteren 7 Bit tragen Helligkeit, Bit 7 ist immer gesetzt.
///
/// ```
/// # use lpd_core::wire_byte;
/// assert_eq!(wire_byte(0x00), 0x80);
/// assert_eq!(wire_byte(0xFF), 0xFF);
/// ```
pub fn wire_byte(value: u8) -> u8 {
    value | MARKER_BIT
}

/// Die drei Wire-Bytes eines Pixels in Strip-Reihenfolge: Grün, Blau, Rot
pub fn pixel_wire_bytes(color: RGB8) -> [u8; 3] {
    [wire_byte(color.g), wire_byte(color.b), wire_byte(color.r)]
}

/// Bits eines Bytes, MSB zuerst
pub fn bits_msb_first(byte: u8) -> impl Iterator<Item = bool> {
    (0..8).rev().map(move |i| byte & (1 << i) != 0)
}

/// Kompletter Frame als Byte-Folge
///
/// Alle Pixel aller Strips, danach ein Latch-Byte pro Strip.
pub fn frame_bytes(strips: &[Strip]) -> impl Iterator<Item = u8> + '_ {
    let pixels = strips
        .iter()
        .flat_map(|strip| strip.pixels.iter())
        .flat_map(|color| pixel_wire_bytes(*color));
    let latch = strips.iter().map(|_| LATCH_BYTE);
    pixels.chain(latch)
}

/// Index-Byte des Hosts zerlegen
///
/// Gibt `None` zurück wenn das Markierungs-Bit fehlt (Byte gehört nicht
/// an die Index-Position).
pub fn parse_index_byte(byte: u8) -> Option<(u8, Channel)> {
    if byte & MARKER_BIT == 0 {
        return None;
    }
    let pixel = (byte >> 2) & 0x1F;
    Some((pixel, Channel::from_bits(byte)))
}

/// Index-Byte für ein Update bauen (Pixel wird auf 5 Bit maskiert)
pub fn index_byte(pixel: u8, channel: Channel) -> u8 {
    MARKER_BIT | ((pixel & 0x1F) << 2) | channel.bits()
}

/// Ein Update als zwei Bytes für die serielle Leitung
pub fn encode_update(update: PixelUpdate) -> [u8; 2] {
    [index_byte(update.pixel, update.channel), update.value]
}

/// Einen ganzen Strip als Host-Kommandos
///
/// Pro Pixel Rot, Grün, Blau. Das letzte Update ist (31, Blau) und löst
/// damit genau ein Frame-Senden aus.
pub fn encode_strip(strip: &Strip) -> impl Iterator<Item = u8> + '_ {
    strip
        .pixels
        .iter()
        .zip(0u8..)
        .flat_map(|(color, pixel)| {
            [
                PixelUpdate::new(pixel, Channel::Red, color.r),
                PixelUpdate::new(pixel, Channel::Green, color.g),
                PixelUpdate::new(pixel, Channel::Blue, color.b),
            ]
        })
        .flat_map(encode_update)
}
