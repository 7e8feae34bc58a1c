#![no_std]
#![no_main]

use cortex_m::delay::Delay;
use fugit::RateExtU32;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    Clock, Sio, Timer,
    adc::{Adc, AdcPin},
    clocks::init_clocks_and_plls,
    gpio::{FunctionI2C, Pin, PullUp},
    pac,
    watchdog::Watchdog,
};
use rtt_target::{rprintln, rtt_init_print};

use rp_pico_demo::console::RttConsole;
use rp_pico_demo::display::{BitBangBus, PwmEnable};
use rp_pico_demo::inputs::{AdcPot, PullUpButton};
use rp_pico_demo::rtc::Ds3231Clock;
use rp_pico_demo::time::HardwareTimer;

use bcd_clock::{ChainOrder, ClockConfig, ClockDisplay, ClockDriver, POLL_INTERVAL_MS, WallClock};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== BCD Clock ===");
    rprintln!("Starting initialization...");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);

    // Set the pins to their default state
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // 74HC595 chain: GPIO2 = SER, GPIO3 = SRCLK, GPIO4 = RCLK
    let bus = BitBangBus::new(
        pins.gpio2.into_push_pull_output(),
        pins.gpio3.into_push_pull_output(),
        pins.gpio4.into_push_pull_output(),
    );
    rprintln!("Shift-register chain on GPIO2 (SER), GPIO3 (SRCLK), GPIO4 (RCLK)");

    // PWM for the active-low output-enable line on GPIO5 (PWM2 B)
    let mut pwm_slices = rp_pico::hal::pwm::Slices::new(pac.PWM, &mut pac.RESETS);
    pwm_slices.pwm2.set_ph_correct();
    pwm_slices.pwm2.set_div_int(125u8); // 125 MHz / 125 = 1 MHz
    pwm_slices.pwm2.set_top(1000u16); // 1 MHz / 1000 = 1 kHz PWM frequency
    pwm_slices.pwm2.enable();
    let mut enable_channel = pwm_slices.pwm2.channel_b;
    enable_channel.output_to(pins.gpio5);
    let enable = PwmEnable::new(enable_channel);
    rprintln!("Display enable (PWM) on GPIO5");

    // Brightness pot on ADC0 (GPIO26)
    let adc = Adc::new(pac.ADC, &mut pac.RESETS);
    let pot_pin = AdcPin::new(pins.gpio26.into_floating_input()).unwrap();
    let pot = AdcPot::new(adc, pot_pin);

    // Adjustment buttons, pulled up, pressed = low
    let minute_button = PullUpButton::new(pins.gpio14.into_pull_up_input());
    let hour_button = PullUpButton::new(pins.gpio15.into_pull_up_input());
    rprintln!("Buttons on GPIO14 (minute), GPIO15 (hour); pot on GPIO26");

    // DS3231 on I2C1: GPIO18 = SDA, GPIO19 = SCL
    let sda_pin: Pin<_, FunctionI2C, PullUp> = pins.gpio18.reconfigure();
    let scl_pin: Pin<_, FunctionI2C, PullUp> = pins.gpio19.reconfigure();
    let i2c = rp_pico::hal::I2C::i2c1(
        pac.I2C1,
        sda_pin,
        scl_pin,
        400.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );

    // Set up delay
    let mut delay = Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

    let Some(mut rtc) = Ds3231Clock::detect(i2c) else {
        // Without the RTC the device is non-functional; report and halt.
        rprintln!("Couldn't find the DS3231 - check wiring. Halting.");
        loop {
            cortex_m::asm::wfi();
        }
    };
    let lost_power = rtc.has_lost_power();
    rprintln!("DS3231 found; lost power: {}", lost_power);

    // Create hardware timer
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let time_source = HardwareTimer::new(timer);

    rprintln!("=== Hardware Ready ===");

    let display = ClockDisplay::new(bus, enable, ChainOrder::HourFirst);
    let mut driver = ClockDriver::new(
        display,
        pot,
        minute_button,
        hour_button,
        rtc,
        RttConsole,
        &time_source,
        ClockConfig::default(),
    );

    if !lost_power {
        // The RTC kept its backup battery, so the time is already good:
        // skip the startup sweep.
        driver.confirm_time_set();
    }

    loop {
        driver.service();
        delay.delay_ms(POLL_INTERVAL_MS as u32);
    }
}
