//! Core Types für die LPD8806-Ansteuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies: Farbkanäle, Strips,
//! Frame-Buffer und einzelne Pixel-Updates.

use rgb::RGB8;

/// Anzahl der Pixel pro physischem Strip-Segment
pub const PIXELS_PER_STRIP: usize = 32;

/// Farbkanal eines Pixels (2-Bit Channel Selector im Index-Byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    Red,
    Green,
    Blue,
    /// Selector 3: Wert-Byte wird gelesen, aber nicht gespeichert
    Reserved,
}

impl Channel {
    /// Erzeugt den Kanal aus den unteren 2 Bits eines Bytes
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::Red,
            1 => Self::Green,
            2 => Self::Blue,
            _ => Self::Reserved,
        }
    }

    /// 2-Bit Selector für das Index-Byte
    pub fn bits(self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Reserved => 3,
        }
    }
}

/// Ein einzelnes Kanal-Update: (Pixel, Kanal, Wert)
///
/// Der Wert wird unverändert gespeichert. Das Maskieren auf 7 Bit
/// passiert erst beim Encodieren für den Strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelUpdate {
    pub pixel: u8,
    pub channel: Channel,
    pub value: u8,
}

impl PixelUpdate {
    pub fn new(pixel: u8, channel: Channel, value: u8) -> Self {
        Self {
            pixel,
            channel,
            value,
        }
    }

    /// Letzter Kanal des letzten Pixels: danach ist der Frame komplett
    pub fn completes_frame(&self) -> bool {
        usize::from(self.pixel) == PIXELS_PER_STRIP - 1 && self.channel == Channel::Blue
    }
}

/// Ein physisches Strip-Segment mit genau 32 Pixeln
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strip {
    pub pixels: [RGB8; PIXELS_PER_STRIP],
}

impl Default for Strip {
    fn default() -> Self {
        Self {
            pixels: [RGB8::default(); PIXELS_PER_STRIP],
        }
    }
}

impl Strip {
    /// Setzt einen Kanal eines Pixels
    ///
    /// Ungültige Pixel und der reservierte Kanal werden still verworfen.
    /// Rückgabe: `true` wenn der Buffer verändert wurde.
    pub fn set_channel(&mut self, pixel: usize, channel: Channel, value: u8) -> bool {
        let Some(color) = self.pixels.get_mut(pixel) else {
            return false;
        };
        match channel {
            Channel::Red => color.r = value,
            Channel::Green => color.g = value,
            Channel::Blue => color.b = value,
            Channel::Reserved => return false,
        }
        true
    }

    /// Liest einen Kanal eines Pixels
    pub fn channel(&self, pixel: usize, channel: Channel) -> Option<u8> {
        let color = self.pixels.get(pixel)?;
        match channel {
            Channel::Red => Some(color.r),
            Channel::Green => Some(color.g),
            Channel::Blue => Some(color.b),
            Channel::Reserved => None,
        }
    }
}

/// Frame-Buffer über `N` Strips
///
/// Feste Größe zur Compile-Zeit, wird nach der Initialisierung nie
/// neu allokiert. Die Firmware nutzt `N = 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const N: usize> {
    strips: [Strip; N],
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameBuffer<N> {
    /// Erstellt einen Buffer mit allen Pixeln aus
    pub fn new() -> Self {
        Self {
            strips: [Strip::default(); N],
        }
    }

    /// Anzahl der Strips (= Anzahl der Latch-Bytes pro Frame)
    pub const fn strip_count(&self) -> usize {
        N
    }

    /// Schreibt einen Kanal; Out-of-Range wird still verworfen
    pub fn set_channel(&mut self, strip: usize, pixel: usize, channel: Channel, value: u8) -> bool {
        match self.strips.get_mut(strip) {
            Some(s) => s.set_channel(pixel, channel, value),
            None => false,
        }
    }

    pub fn channel(&self, strip: usize, pixel: usize, channel: Channel) -> Option<u8> {
        self.strips.get(strip)?.channel(pixel, channel)
    }

    /// Wendet ein Update auf Strip 0 an
    pub fn apply(&mut self, update: PixelUpdate) -> bool {
        self.set_channel(0, usize::from(update.pixel), update.channel, update.value)
    }

    pub fn strip(&self, index: usize) -> Option<&Strip> {
        self.strips.get(index)
    }

    pub fn strips(&self) -> &[Strip; N] {
        &self.strips
    }

    /// Setzt alle Pixel auf Schwarz
    pub fn clear(&mut self) {
        self.strips = [Strip::default(); N];
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Channel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Channel::Red => defmt::write!(fmt, "Rot"),
            Channel::Green => defmt::write!(fmt, "Grün"),
            Channel::Blue => defmt::write!(fmt, "Blau"),
            Channel::Reserved => defmt::write!(fmt, "Reserviert"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PixelUpdate {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "PixelUpdate {{ pixel: {}, channel: {}, value: {=u8:#x} }}",
            self.pixel,
            self.channel,
            self.value
        )
    }
}
