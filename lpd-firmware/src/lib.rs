// Library-Root: Hardware-Anbindung der LPD8806-Bridge
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;

// Re-exports von lpd-core
pub use lpd_core::{Bridge, BridgeStats, DriverConfig, FrameBuffer, LedError};

use crate::config::STRIP_COUNT;
use crate::hal::StripDriver;

// ============================================================================
// Type-Aliase
// ============================================================================

/// Bridge mit ESP32 Strip-Ausgang und der konfigurierten Strip-Anzahl
pub type StripBridge = Bridge<StripDriver, STRIP_COUNT>;
