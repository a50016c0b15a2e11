//! Mocks für die Hardware-Traits
//!
//! Werden von allen Integration Tests gemeinsam genutzt.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use lpd_core::{ByteSource, FrameSink, LedError, SignalLine, Strip};

// ============================================================================
// Mock Signal Lines
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wire {
    Data,
    Clock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    Configured(Wire),
    High(Wire),
    Low(Wire),
}

/// Gemeinsames Log für Data- und Clock-Leitung (Reihenfolge zählt)
pub type LineLog = Rc<RefCell<Vec<LineEvent>>>;

pub struct MockLine {
    wire: Wire,
    log: LineLog,
    pub fail_next_write: bool,
}

impl MockLine {
    pub fn new(wire: Wire, log: &LineLog) -> Self {
        Self {
            wire,
            log: Rc::clone(log),
            fail_next_write: false,
        }
    }

    fn record(&mut self, event: LineEvent) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::LineFailed);
        }
        self.log.borrow_mut().push(event);
        Ok(())
    }
}

impl SignalLine for MockLine {
    fn configure_output(&mut self) -> Result<(), LedError> {
        self.record(LineEvent::Configured(self.wire))
    }

    fn set_high(&mut self) -> Result<(), LedError> {
        self.record(LineEvent::High(self.wire))
    }

    fn set_low(&mut self) -> Result<(), LedError> {
        self.record(LineEvent::Low(self.wire))
    }
}

/// Erstellt Data- und Clock-Leitung mit gemeinsamem Log
pub fn mock_lines() -> (MockLine, MockLine, LineLog) {
    let log: LineLog = Rc::new(RefCell::new(Vec::new()));
    let data = MockLine::new(Wire::Data, &log);
    let clock = MockLine::new(Wire::Clock, &log);
    (data, clock, log)
}

/// Rekonstruiert die Bytes aus dem Log wie der Strip sie sieht:
/// Data-Pegel wird bei steigender Clock-Flanke übernommen, MSB zuerst.
pub fn captured_bytes(log: &LineLog) -> Vec<u8> {
    let mut data_high = false;
    let mut bits = Vec::new();
    for event in log.borrow().iter() {
        match event {
            LineEvent::High(Wire::Data) => data_high = true,
            LineEvent::Low(Wire::Data) => data_high = false,
            LineEvent::High(Wire::Clock) => bits.push(data_high),
            _ => {}
        }
    }
    assert_eq!(bits.len() % 8, 0, "incomplete byte on the wire");
    bits.chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, bit| (acc << 1) | u8::from(*bit)))
        .collect()
}

// ============================================================================
// Mock Delay
// ============================================================================

#[derive(Default)]
pub struct CountingDelay {
    pub calls: usize,
    pub total_us: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_us += u64::from(ns / 1000);
    }

    fn delay_us(&mut self, us: u32) {
        self.calls += 1;
        self.total_us += u64::from(us);
    }
}

// ============================================================================
// Mock Byte Source
// ============================================================================

/// Byte-Quelle aus einem Slice
///
/// Ein leerer Puffer gilt hier als getrennte Verbindung (`ReadFailed`),
/// ein echter Transport würde stattdessen blockieren.
#[derive(Default)]
pub struct MockByteSource {
    pub bytes: VecDeque<u8>,
    /// Anzahl `is_ready()` Aufrufe bis die Verbindung steht
    pub ready_after: usize,
    pub ready_polls: usize,
    pub fail_next_read: bool,
}

impl MockByteSource {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, bytes: &[u8]) {
        self.bytes.extend(bytes.iter().copied());
    }
}

impl ByteSource for MockByteSource {
    fn is_ready(&mut self) -> bool {
        self.ready_polls += 1;
        self.ready_polls > self.ready_after
    }

    fn available(&mut self) -> bool {
        !self.bytes.is_empty()
    }

    fn read_byte(&mut self) -> Result<u8, LedError> {
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(LedError::ReadFailed);
        }
        self.bytes.pop_front().ok_or(LedError::ReadFailed)
    }
}

// ============================================================================
// Recording Frame Sink
// ============================================================================

#[derive(Default)]
pub struct RecordingSink {
    pub frames: Vec<Vec<Strip>>,
    pub fail_next_write: bool,
}

impl FrameSink for RecordingSink {
    fn send_frame(&mut self, strips: &[Strip]) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::LineFailed);
        }
        self.frames.push(strips.to_vec());
        Ok(())
    }
}
