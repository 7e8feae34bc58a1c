//! Clock driver: the poll loop that ties the seams together.
//!
//! Provides [`ClockDriver`] which owns the display, buttons, pot, wall
//! clock, and diagnostic sink, and runs one iteration of the clock per
//! [`service`] call. The driver never sleeps; callers pace it with
//! [`ClockConfig::poll_interval`].
//!
//! [`service`]: ClockDriver::service

use crate::brightness::{BrightnessInput, duty_for_reading};
use crate::button::{ButtonInput, DebouncedButton};
use crate::clock::WallClock;
use crate::diagnostics::{DiagnosticSink, TIME_NOT_SET_LINE, status_line};
use crate::display::{ClockDisplay, DisplayEnable, ShiftRegisterBus};
use crate::frame::DisplayFrame;
use crate::sweep::SweepAnimation;
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Default press-edge debounce window in milliseconds.
pub const DEBOUNCE_WINDOW_MS: u64 = 50;

/// Default hold per sweep position in milliseconds.
pub const SWEEP_HOLD_MS: u64 = 200;

/// Default minimum interval between service passes in milliseconds.
///
/// Polling faster buys nothing - the wall clock ticks in seconds - and
/// saturates its bus; the original slices its startup waits at this same
/// rate.
pub const POLL_INTERVAL_MS: u64 = 50;

/// Timing policy for a clock driver.
///
/// `Default` produces the module-level constants. None of these are
/// load-bearing for correctness; they trade responsiveness against bus
/// traffic.
#[derive(Debug, Clone, Copy)]
pub struct ClockConfig<D: TimeDuration> {
    /// Press edges closer together than this are treated as bounce.
    pub debounce_window: D,
    /// How long the startup sweep holds each position.
    pub sweep_hold: D,
    /// How long callers should wait between service passes.
    pub poll_interval: D,
}

impl<D: TimeDuration> Default for ClockConfig<D> {
    fn default() -> Self {
        Self {
            debounce_window: D::from_millis(DEBOUNCE_WINDOW_MS),
            sweep_hold: D::from_millis(SWEEP_HOLD_MS),
            poll_interval: D::from_millis(POLL_INTERVAL_MS),
        }
    }
}

/// The operating state of a clock driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockState {
    /// Time not yet confirmed. The startup sweep animates and the time is
    /// withheld from the display.
    Unset,
    /// Time confirmed. The display tracks the wall clock second by second.
    Running,
}

/// What a service pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceOutcome {
    /// Startup sweep in progress; the clock is still unconfirmed.
    Sweeping,
    /// Nothing visible changed this pass.
    Idle,
    /// The display was refreshed - a second rolled over, a button adjusted
    /// the time, or both.
    Rendered,
}

/// Drives a shift-register clock display from a wall clock.
///
/// Owns every hardware seam except the monotonic time source, which is
/// borrowed so several consumers can share one timer. Each [`service`]
/// call runs one poll iteration: brightness always tracks the pot, the
/// buttons are debounced and applied, and the display re-renders only when
/// the second rolls over or an adjustment lands - all other passes touch
/// no display output at all.
///
/// On construction the display is blanked so undefined power-on register
/// contents never show.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `W` - Wall clock implementation type
/// * `B` - Shift-register bus implementation type
/// * `E` - Display-enable output implementation type
/// * `P` - Brightness pot input implementation type
/// * `M` - Minute button input implementation type
/// * `H` - Hour button input implementation type
/// * `S` - Diagnostic sink implementation type
/// * `T` - Time source implementation type
///
/// [`service`]: ClockDriver::service
pub struct ClockDriver<
    't,
    I: TimeInstant,
    W: WallClock,
    B: ShiftRegisterBus,
    E: DisplayEnable,
    P: BrightnessInput,
    M: ButtonInput,
    H: ButtonInput,
    S: DiagnosticSink,
    T: TimeSource<I>,
> {
    display: ClockDisplay<B, E>,
    pot: P,
    minute_button: M,
    hour_button: H,
    wall_clock: W,
    diagnostics: S,
    time_source: &'t T,
    config: ClockConfig<I::Duration>,
    state: ClockState,
    minute_debounce: DebouncedButton<I>,
    hour_debounce: DebouncedButton<I>,
    sweep: SweepAnimation<I>,
    last_second: Option<u8>,
    last_work: I::Duration,
}

impl<
    't,
    I: TimeInstant,
    W: WallClock,
    B: ShiftRegisterBus,
    E: DisplayEnable,
    P: BrightnessInput,
    M: ButtonInput,
    H: ButtonInput,
    S: DiagnosticSink,
    T: TimeSource<I>,
> ClockDriver<'t, I, W, B, E, P, M, H, S, T>
{
    /// Creates a driver in the [`Unset`] state with a blanked display.
    ///
    /// Call [`confirm_time_set`] before the first service pass if the wall
    /// clock kept its backup power; otherwise the startup sweep runs until
    /// someone presses a button.
    ///
    /// # Arguments
    /// * `display` - Serializer owning the register bus and enable line
    /// * `pot` - Brightness pot input
    /// * `minute_button` - Minute-increment button input
    /// * `hour_button` - Hour-increment button input
    /// * `wall_clock` - The battery-backed time of day
    /// * `diagnostics` - Sink for status lines
    /// * `time_source` - Shared monotonic timer
    /// * `config` - Timing policy, usually `ClockConfig::default()`
    ///
    /// [`Unset`]: ClockState::Unset
    /// [`confirm_time_set`]: ClockDriver::confirm_time_set
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mut display: ClockDisplay<B, E>,
        pot: P,
        minute_button: M,
        hour_button: H,
        wall_clock: W,
        diagnostics: S,
        time_source: &'t T,
        config: ClockConfig<I::Duration>,
    ) -> Self {
        display.render_frame(DisplayFrame::BLANK);

        Self {
            display,
            pot,
            minute_button,
            hour_button,
            wall_clock,
            diagnostics,
            time_source,
            state: ClockState::Unset,
            minute_debounce: DebouncedButton::new(config.debounce_window),
            hour_debounce: DebouncedButton::new(config.debounce_window),
            sweep: SweepAnimation::new(config.sweep_hold),
            last_second: None,
            last_work: I::Duration::ZERO,
            config,
        }
    }

    /// Runs one poll iteration.
    ///
    /// Callers should wait [`ClockConfig::poll_interval`] between passes.
    /// The elapsed processing time of each pass is measured against the
    /// time source and reported in the next status line.
    ///
    /// # Returns
    /// * [`ServiceOutcome::Sweeping`] - still unconfirmed, sweep active
    /// * [`ServiceOutcome::Idle`] - confirmed, nothing to redraw
    /// * [`ServiceOutcome::Rendered`] - the display was refreshed
    pub fn service(&mut self) -> ServiceOutcome {
        let start = self.time_source.now();

        // Brightness tracks the pot in both states, so the display stays
        // adjustable even while the sweep is running.
        let raw = self.pot.read_raw();
        self.display.set_duty(duty_for_reading(raw));

        let outcome = match self.state {
            ClockState::Unset => self.service_sweep(start),
            ClockState::Running => self.service_running(start),
        };

        self.last_work = self.time_source.now().duration_since(start);
        outcome
    }

    /// Marks the time as confirmed.
    ///
    /// Firmware calls this at boot when the wall clock reports that backup
    /// power was retained; a button press during the sweep has the same
    /// effect. Once confirmed the driver never returns to the sweep until
    /// the next power cycle.
    pub fn confirm_time_set(&mut self) {
        self.state = ClockState::Running;
    }

    fn service_sweep(&mut self, now: I) -> ServiceOutcome {
        // Any press confirms the clock and abandons the sweep. Routing it
        // through the debouncers consumes the edge, so a button still held
        // on the next pass cannot also fire an adjustment.
        let minute_level = self.minute_button.level();
        let hour_level = self.hour_button.level();
        let confirmed = self.minute_debounce.update(minute_level, now)
            | self.hour_debounce.update(hour_level, now);

        if confirmed {
            self.state = ClockState::Running;
            // Straight into a running pass, so the time appears on the
            // display immediately rather than one poll interval later.
            return self.service_running(now);
        }

        if let Some(frame) = self.sweep.step(now) {
            self.display.render_frame(frame);
            self.diagnostics.write_line(TIME_NOT_SET_LINE);
        }

        ServiceOutcome::Sweeping
    }

    fn service_running(&mut self, now: I) -> ServiceOutcome {
        let mut time = self.wall_clock.now();
        let mut rendered = false;

        let minute_level = self.minute_button.level();
        if self.minute_debounce.update(minute_level, now) {
            let adjusted = self.wall_clock.now().with_next_minute();
            self.wall_clock.adjust(adjusted);
            self.display.render(adjusted);
            rendered = true;
            time = adjusted;
        }

        let hour_level = self.hour_button.level();
        if self.hour_debounce.update(hour_level, now) {
            let adjusted = self.wall_clock.now().with_next_hour();
            self.wall_clock.adjust(adjusted);
            self.display.render(adjusted);
            rendered = true;
            time = adjusted;
        }

        // Redraw only on second rollover; between rollovers the registers
        // hold the frame and the bus stays quiet.
        if self.last_second != Some(time.second) {
            self.last_second = Some(time.second);
            self.display.render(time);
            // The work figure is the previous pass's measurement; this
            // pass is still underway when the line goes out.
            let line = status_line(time, self.last_work.as_micros());
            self.diagnostics.write_line(&line);
            rendered = true;
        }

        if rendered {
            ServiceOutcome::Rendered
        } else {
            ServiceOutcome::Idle
        }
    }

    /// Returns the current state of the driver.
    pub fn get_state(&self) -> ClockState {
        self.state
    }

    /// Returns true once the time has been confirmed.
    pub fn is_time_set(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Returns the measured processing time of the most recent pass.
    pub fn last_work(&self) -> I::Duration {
        self.last_work
    }

    /// Returns the timing policy the driver was built with.
    pub fn config(&self) -> &ClockConfig<I::Duration> {
        &self.config
    }

    /// Borrows the display serializer.
    pub fn display(&self) -> &ClockDisplay<B, E> {
        &self.display
    }

    /// Borrows the diagnostic sink.
    pub fn diagnostics(&self) -> &S {
        &self.diagnostics
    }
}
