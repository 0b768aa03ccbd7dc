//! Shared constants for defaults, limits, and tool configuration.
//!
//! Centralizing these values keeps the schedule curve, config validation,
//! and the generated default config file in agreement.

// Brightness limits (xrandr multiplier, also the floor/ceiling of the schedule)
pub const MINIMUM_BRIGHTNESS: f64 = 0.1;
pub const MAXIMUM_BRIGHTNESS: f64 = 1.0;

// Schedule defaults: the "home" variant
pub const DEFAULT_DAY_START: f64 = 4.5;
pub const DEFAULT_DAY_END: f64 = 15.0;
pub const DEFAULT_EVENING_END: f64 = 19.5;
pub const DEFAULT_EVENING_FLOOR: f64 = 0.25;
pub const DEFAULT_NIGHT_FLOOR: f64 = 0.15;

// Schedule overrides for the "work" variant (brighter office, later evening)
pub const WORK_EVENING_END: f64 = 20.0;
pub const WORK_EVENING_FLOOR: f64 = 0.55;
pub const WORK_NIGHT_FLOOR: f64 = 0.35;

// Schedule hour bounds
pub const MINIMUM_SCHEDULE_HOUR: f64 = 0.0;
pub const MAXIMUM_SCHEDULE_HOUR: f64 = 24.0;

// External tool defaults
pub const DEFAULT_DISPLAY: &str = ":0";
pub const XRANDR_COMMAND: &str = "xrandr";
pub const DDCUTIL_COMMAND: &str = "ddcutil";

/// Default input-select VCP feature code (MCCS "Input Source").
pub const DEFAULT_INPUT_VCP: &str = "0x60";

// Timeout applied to every external command invocation
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 10;
pub const MINIMUM_COMMAND_TIMEOUT_SECS: u64 = 1;
pub const MAXIMUM_COMMAND_TIMEOUT_SECS: u64 = 120;

// Pause between consecutive devices when applying a batch operation
pub const DEFAULT_DEVICE_DELAY_MS: u64 = 500;
pub const MAXIMUM_DEVICE_DELAY_MS: u64 = 10_000;

/// Interval used when polling a child process for exit.
pub const PROCESS_POLL_INTERVAL_MS: u64 = 20;

/// Standard exit code for failure conditions.
pub const EXIT_FAILURE: i32 = 1;
