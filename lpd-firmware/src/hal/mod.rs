// Hardware Abstraction Layer (HAL) Module
//
// Verbindet die esp-hal Peripherals mit den Traits aus lpd-core:
// GPIO-Ausgänge → SignalLine, UART → ByteSource.

pub mod serial;
pub mod strip;

pub use serial::{HostSerial, host_serial};
pub use strip::{StripDriver, StripLine, strip_driver};
