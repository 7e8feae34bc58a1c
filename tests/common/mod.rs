//! Shared test infrastructure for bcd-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bcd_clock::{
    BrightnessInput, ButtonInput, ChainOrder, ClockConfig, ClockDisplay, ClockDriver,
    DiagnosticSink, DisplayEnable, PinLevel, ShiftRegisterBus, TimeDuration, TimeInstant,
    TimeOfDay, TimeSource, WallClock,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn as_micros(&self) -> u64 {
        self.0 * 1_000
    }

    fn from_micros(micros: u64) -> Self {
        TestDuration(micros / 1_000)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Wall Clock
// ============================================================================

#[derive(Default)]
struct WallClockInner {
    time: Cell<TimeOfDay>,
    lost_power: Cell<bool>,
    reads: Cell<usize>,
    adjustments: RefCell<heapless::Vec<TimeOfDay, 16>>,
}

/// Mock RTC with test-settable time and an adjustment log.
///
/// Clones share state, so tests keep one handle while the driver owns the
/// other.
#[derive(Clone, Default)]
pub struct MockWallClock {
    inner: Rc<WallClockInner>,
}

impl MockWallClock {
    pub fn starting_at(time: TimeOfDay) -> Self {
        let clock = Self::default();
        clock.inner.time.set(time);
        clock
    }

    pub fn set_time(&self, time: TimeOfDay) {
        self.inner.time.set(time);
    }

    pub fn set_lost_power(&self, lost: bool) {
        self.inner.lost_power.set(lost);
    }

    /// Advances one second with normal carry, like the real chip ticking.
    pub fn tick_second(&self) {
        let t = self.inner.time.get();
        let next = if t.second < 59 {
            TimeOfDay::new(t.hour, t.minute, t.second + 1)
        } else if t.minute < 59 {
            TimeOfDay::new(t.hour, t.minute + 1, 0)
        } else if t.hour < 23 {
            TimeOfDay::new(t.hour + 1, 0, 0)
        } else {
            TimeOfDay::new(0, 0, 0)
        };
        self.inner.time.set(next);
    }

    pub fn current_time(&self) -> TimeOfDay {
        self.inner.time.get()
    }

    pub fn adjustment_count(&self) -> usize {
        self.inner.adjustments.borrow().len()
    }

    pub fn last_adjustment(&self) -> Option<TimeOfDay> {
        self.inner.adjustments.borrow().last().copied()
    }

    pub fn read_count(&self) -> usize {
        self.inner.reads.get()
    }
}

impl WallClock for MockWallClock {
    fn now(&mut self) -> TimeOfDay {
        self.inner.reads.set(self.inner.reads.get() + 1);
        self.inner.time.get()
    }

    fn adjust(&mut self, time: TimeOfDay) {
        let _ = self.inner.adjustments.borrow_mut().push(time);
        self.inner.time.set(time);
    }

    fn has_lost_power(&mut self) -> bool {
        self.inner.lost_power.get()
    }
}

// ============================================================================
// Mock Shift-Register Bus
// ============================================================================

#[derive(Default)]
struct BusInner {
    latch_high: Cell<bool>,
    in_flight: RefCell<heapless::Vec<u8, 8>>,
    frames: RefCell<heapless::Vec<[u8; 3], 128>>,
    violations: Cell<u32>,
}

/// Mock bus that records committed frames and checks latch discipline.
///
/// A frame is committed when the latch goes high after exactly three bytes
/// were shifted with the latch low; anything else counts as a violation.
#[derive(Clone, Default)]
pub struct MockBus {
    inner: Rc<BusInner>,
}

impl MockBus {
    pub fn frame_count(&self) -> usize {
        self.inner.frames.borrow().len()
    }

    pub fn last_frame(&self) -> Option<[u8; 3]> {
        self.inner.frames.borrow().last().copied()
    }

    pub fn frame_at(&self, index: usize) -> Option<[u8; 3]> {
        self.inner.frames.borrow().get(index).copied()
    }

    pub fn is_protocol_clean(&self) -> bool {
        self.inner.violations.get() == 0
    }
}

impl ShiftRegisterBus for MockBus {
    fn shift_out(&mut self, byte: u8) {
        if self.inner.latch_high.get() {
            self.inner.violations.set(self.inner.violations.get() + 1);
        }
        let _ = self.inner.in_flight.borrow_mut().push(byte);
    }

    fn set_latch(&mut self, high: bool) {
        if high {
            let mut in_flight = self.inner.in_flight.borrow_mut();
            if in_flight.len() == 3 {
                let _ = self
                    .inner
                    .frames
                    .borrow_mut()
                    .push([in_flight[0], in_flight[1], in_flight[2]]);
            } else {
                self.inner.violations.set(self.inner.violations.get() + 1);
            }
            in_flight.clear();
        } else {
            self.inner.in_flight.borrow_mut().clear();
        }
        self.inner.latch_high.set(high);
    }
}

// ============================================================================
// Mock Display Enable (brightness PWM)
// ============================================================================

#[derive(Default)]
struct EnableInner {
    last_duty: Cell<Option<u8>>,
    writes: Cell<usize>,
}

/// Mock PWM enable line recording the most recent duty.
#[derive(Clone, Default)]
pub struct MockEnable {
    inner: Rc<EnableInner>,
}

impl MockEnable {
    pub fn last_duty(&self) -> Option<u8> {
        self.inner.last_duty.get()
    }

    pub fn write_count(&self) -> usize {
        self.inner.writes.get()
    }
}

impl DisplayEnable for MockEnable {
    fn set_duty(&mut self, duty: u8) {
        self.inner.last_duty.set(Some(duty));
        self.inner.writes.set(self.inner.writes.get() + 1);
    }
}

// ============================================================================
// Mock Brightness Pot
// ============================================================================

/// Mock analog input with a test-settable raw value.
#[derive(Clone)]
pub struct MockPot {
    raw: Rc<Cell<u16>>,
}

impl MockPot {
    pub fn at(raw: u16) -> Self {
        Self {
            raw: Rc::new(Cell::new(raw)),
        }
    }

    pub fn set_raw(&self, raw: u16) {
        self.raw.set(raw);
    }
}

impl BrightnessInput for MockPot {
    fn read_raw(&mut self) -> u16 {
        self.raw.get()
    }
}

// ============================================================================
// Mock Buttons
// ============================================================================

/// Mock button pin; released (high) until pressed.
#[derive(Clone)]
pub struct MockButton {
    level: Rc<Cell<PinLevel>>,
}

impl Default for MockButton {
    fn default() -> Self {
        Self {
            level: Rc::new(Cell::new(PinLevel::High)),
        }
    }
}

impl MockButton {
    pub fn press(&self) {
        self.level.set(PinLevel::Low);
    }

    pub fn release(&self) {
        self.level.set(PinLevel::High);
    }
}

impl ButtonInput for MockButton {
    fn level(&mut self) -> PinLevel {
        self.level.get()
    }
}

// ============================================================================
// Mock Diagnostic Sink
// ============================================================================

/// Mock sink recording every line written.
#[derive(Clone, Default)]
pub struct MockDiagnostics {
    lines: Rc<RefCell<heapless::Vec<heapless::String<64>, 128>>>,
}

impl MockDiagnostics {
    pub fn line_count(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn last_line(&self) -> Option<heapless::String<64>> {
        self.lines.borrow().last().cloned()
    }

    pub fn line_at(&self, index: usize) -> Option<heapless::String<64>> {
        self.lines.borrow().get(index).cloned()
    }
}

impl DiagnosticSink for MockDiagnostics {
    fn write_line(&mut self, line: &str) {
        let mut buffer = heapless::String::new();
        let _ = buffer.push_str(line);
        let _ = self.lines.borrow_mut().push(buffer);
    }
}

// ============================================================================
// Test Rig
// ============================================================================

/// The fully mocked driver type under test.
pub type TestDriver<'t> = ClockDriver<
    't,
    TestInstant,
    MockWallClock,
    MockBus,
    MockEnable,
    MockPot,
    MockButton,
    MockButton,
    MockDiagnostics,
    MockTimeSource,
>;

/// A driver wired to one handle of every mock; the rig keeps the others.
pub struct TestRig<'t> {
    pub bus: MockBus,
    pub enable: MockEnable,
    pub pot: MockPot,
    pub minute_button: MockButton,
    pub hour_button: MockButton,
    pub wall_clock: MockWallClock,
    pub diagnostics: MockDiagnostics,
    pub driver: TestDriver<'t>,
}

impl<'t> TestRig<'t> {
    /// Default config, hour-first chain, pot at full scale.
    pub fn new(timer: &'t MockTimeSource, start: TimeOfDay) -> Self {
        Self::with_config(timer, start, ClockConfig::default(), ChainOrder::HourFirst)
    }

    pub fn with_config(
        timer: &'t MockTimeSource,
        start: TimeOfDay,
        config: ClockConfig<TestDuration>,
        order: ChainOrder,
    ) -> Self {
        let bus = MockBus::default();
        let enable = MockEnable::default();
        let pot = MockPot::at(1023);
        let minute_button = MockButton::default();
        let hour_button = MockButton::default();
        let wall_clock = MockWallClock::starting_at(start);
        let diagnostics = MockDiagnostics::default();

        let display = ClockDisplay::new(bus.clone(), enable.clone(), order);
        let driver = ClockDriver::new(
            display,
            pot.clone(),
            minute_button.clone(),
            hour_button.clone(),
            wall_clock.clone(),
            diagnostics.clone(),
            timer,
            config,
        );

        Self {
            bus,
            enable,
            pot,
            minute_button,
            hour_button,
            wall_clock,
            diagnostics,
            driver,
        }
    }
}
