// Serielle Verbindung zum Host (UART, blocking)

use esp_hal::Blocking;
use esp_hal::uart::Uart;
use lpd_core::IoByteSource;

/// Byte-Quelle für den Command Decoder
///
/// `read_byte()` blockiert bis der Host ein Byte schickt. Der UART hat
/// keinen Handshake, die Verbindung gilt daher immer als bereit.
pub type HostSerial = IoByteSource<Uart<'static, Blocking>>;

pub fn host_serial(uart: Uart<'static, Blocking>) -> HostSerial {
    IoByteSource::new(uart)
}
