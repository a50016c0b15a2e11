// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::info;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use lpd8806_bridge::StripBridge;
use lpd8806_bridge::config::{STRIP_COUNT, UART_BAUD_RATE, driver_config};
use lpd8806_bridge::hal::{host_serial, strip_driver};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Strip und UART, wartet auf den Host und läuft dann endlos
/// im Bridge-Loop. Ein Thread, kein Executor: der einzige Wartepunkt ist
/// das blockierende Lesen vom UART.
#[esp_hal::main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("LPD8806 bridge starting ({} strip(s))", STRIP_COUNT);

    // Strip-Leitungen: Data = GPIO4, Clock = GPIO5 (siehe config.rs)
    let data = Output::new(peripherals.GPIO4, Level::Low, OutputConfig::default());
    let clock = Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default());
    let driver = strip_driver(data, clock, driver_config());

    // UART zum Host: RX = GPIO6, TX = GPIO7 (siehe config.rs)
    let uart = Uart::new(
        peripherals.UART1,
        UartConfig::default().with_baudrate(UART_BAUD_RATE),
    )
    .expect("Failed to initialize UART")
    .with_rx(peripherals.GPIO6)
    .with_tx(peripherals.GPIO7);
    let mut serial = host_serial(uart);

    // Frame-Buffer gehört der Bridge für die ganze Laufzeit
    let mut bridge = StripBridge::new(driver);

    let flushed = bridge.connect(&mut serial);
    info!("Host connected, {} stale byte(s) flushed", flushed);

    // Haupt-Loop: kein Shutdown, läuft bis zum Abschalten
    bridge.run(&mut serial)
}
