// LPD8806 Strip-Ausgang über zwei GPIO-Pins
//
// Die Protokoll-Logik liegt in lpd-core, hier wird nur die Hardware
// angeschlossen und die Kette beim Start zurückgesetzt.

use defmt::{error, info};
use esp_hal::delay::Delay;
use esp_hal::gpio::Output;
use lpd_core::{DriverConfig, PinLine, SignalDriver};

use crate::config::STRIP_COUNT;

/// Eine Strip-Leitung (Data oder Clock) auf einem ESP32 GPIO
pub type StripLine = PinLine<Output<'static>>;

/// Signal Driver mit ESP32 GPIOs und esp-hal Delay für die Settle-Zeit
pub type StripDriver = SignalDriver<StripLine, StripLine, Delay>;

/// Erstellt den Signal Driver und setzt die Strip-Kette zurück
///
/// # Parameter
/// - `data`: GPIO-Ausgang für die Data-Leitung (Ruhepegel Low)
/// - `clock`: GPIO-Ausgang für die Clock-Leitung (Ruhepegel Low)
/// - `config`: Settle-Delay der Strip-Revision
pub fn strip_driver(
    data: Output<'static>,
    clock: Output<'static>,
    config: DriverConfig,
) -> StripDriver {
    let mut driver = SignalDriver::new(PinLine::new(data), PinLine::new(clock), Delay::new(), config);

    // Ein Latch-Byte pro Strip bevor der erste Frame kommt
    match driver.init(STRIP_COUNT) {
        Ok(()) => info!("Strip: {} segment(s) reset", STRIP_COUNT),
        Err(e) => error!("Strip: reset failed: {}", e),
    }

    driver
}
