// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use lpd_core::DriverConfig;

// ============================================================================
// LED-Strip Konfiguration
// ============================================================================

/// GPIO-Pin für die Data-Leitung des LPD8806 Strips
pub const DATA_GPIO_PIN: u8 = 4;

/// GPIO-Pin für die Clock-Leitung des LPD8806 Strips
pub const CLOCK_GPIO_PIN: u8 = 5;

/// Anzahl der Strip-Segmente in der Kette (je 32 Pixel)
/// Bestimmt auch die Anzahl der Latch-Bytes pro Frame
pub const STRIP_COUNT: usize = 1;

/// Wartezeit nach jedem Pegelwechsel in Mikrosekunden
/// Ältere Strip-Revisionen brauchen ca. 1000 µs, aktuelle keine
pub const SETTLE_DELAY_US: Option<u32> = None;

/// Signal Driver Konfiguration aus den Konstanten oben
pub const fn driver_config() -> DriverConfig {
    DriverConfig {
        settle_delay_us: SETTLE_DELAY_US,
    }
}

// ============================================================================
// Serielle Verbindung zum Host
// ============================================================================

/// UART Baudrate (muss zum Host-Skript passen)
pub const UART_BAUD_RATE: u32 = 115_200;

/// GPIO-Pin für UART RX (Host → ESP32)
pub const UART_RX_GPIO_PIN: u8 = 6;

/// GPIO-Pin für UART TX (ESP32 → Host, ungenutzt)
pub const UART_TX_GPIO_PIN: u8 = 7;

