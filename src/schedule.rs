//! Time-of-day brightness scheduling.
//!
//! The schedule is a piecewise curve over the fractional hour of the local
//! day (`hour + minute / 60`), split into three periods:
//!
//! - **Day** (`day_start < h < day_end`): full brightness.
//! - **Evening** (`day_end <= h < evening_end`): an exponential decay from
//!   full brightness toward the evening floor. With `p` the progress through
//!   the window, the value is `max(1 - 0.1^(1 - p) * p, evening_floor)`.
//! - **Night** (everything else, including the early morning before
//!   `day_start`): a fixed night floor.
//!
//! Two named parameter sets ship with the binary: [`ScheduleParams::home`]
//! ends the evening at 19.5 with dimmer floors, [`ScheduleParams::work`]
//! ends at 20.0 with brighter floors. Individual fields can be overridden
//! through the config file.

use chrono::{NaiveTime, Timelike};

use crate::constants::{
    DEFAULT_DAY_END, DEFAULT_DAY_START, DEFAULT_EVENING_END, DEFAULT_EVENING_FLOOR,
    DEFAULT_NIGHT_FLOOR, MAXIMUM_BRIGHTNESS, WORK_EVENING_END, WORK_EVENING_FLOOR,
    WORK_NIGHT_FLOOR,
};

/// Parameters defining one brightness schedule.
///
/// All hour fields are fractional hours in `[0, 24)`; validation guarantees
/// `day_start < day_end < evening_end` before a schedule is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleParams {
    /// Hour after which the day period begins (exclusive).
    pub day_start: f64,
    /// Hour at which the evening decay begins.
    pub day_end: f64,
    /// Hour at which the evening decay ends and night begins.
    pub evening_end: f64,
    /// Lowest brightness the evening decay may reach.
    pub evening_floor: f64,
    /// Fixed brightness during the night period.
    pub night_floor: f64,
}

impl ScheduleParams {
    /// The "home" variant: evening ends at 19:30, dim floors for a dark room.
    pub fn home() -> Self {
        Self {
            day_start: DEFAULT_DAY_START,
            day_end: DEFAULT_DAY_END,
            evening_end: DEFAULT_EVENING_END,
            evening_floor: DEFAULT_EVENING_FLOOR,
            night_floor: DEFAULT_NIGHT_FLOOR,
        }
    }

    /// The "work" variant: evening ends at 20:00, brighter floors for a lit office.
    pub fn work() -> Self {
        Self {
            evening_end: WORK_EVENING_END,
            evening_floor: WORK_EVENING_FLOOR,
            night_floor: WORK_NIGHT_FLOOR,
            ..Self::home()
        }
    }
}

impl Default for ScheduleParams {
    fn default() -> Self {
        Self::home()
    }
}

/// Which period of the schedule a given time falls into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchedulePeriod {
    /// Full brightness.
    Day,
    /// Decaying from full brightness toward the evening floor.
    /// `progress` is the fraction of the evening window elapsed, in `[0, 1)`.
    Evening { progress: f64 },
    /// Fixed night floor.
    Night,
}

impl SchedulePeriod {
    /// Brightness value for this period under the given parameters.
    pub fn brightness(&self, params: &ScheduleParams) -> f64 {
        match self {
            SchedulePeriod::Day => MAXIMUM_BRIGHTNESS,
            SchedulePeriod::Evening { progress } => {
                let decayed = 1.0 - 0.1_f64.powf(1.0 - progress) * progress;
                decayed.max(params.evening_floor)
            }
            SchedulePeriod::Night => params.night_floor,
        }
    }

    /// Whether this period holds a constant brightness.
    pub fn is_stable(&self) -> bool {
        !matches!(self, SchedulePeriod::Evening { .. })
    }

    /// Progress through the evening window, if applicable.
    pub fn progress(&self) -> Option<f64> {
        match self {
            SchedulePeriod::Evening { progress } => Some(*progress),
            _ => None,
        }
    }

    /// Human-readable period name for status output.
    pub fn display_name(&self) -> &'static str {
        match self {
            SchedulePeriod::Day => "Day",
            SchedulePeriod::Evening { .. } => "Evening",
            SchedulePeriod::Night => "Night",
        }
    }
}

/// Converts a clock time to the fractional hour used by the schedule.
///
/// Resolution is one minute; seconds are ignored.
pub fn fractional_hour(time: NaiveTime) -> f64 {
    f64::from(time.hour()) + f64::from(time.minute()) / 60.0
}

/// Classifies a fractional hour into its schedule period.
pub fn period_for_hour(hour: f64, params: &ScheduleParams) -> SchedulePeriod {
    if params.day_start < hour && hour < params.day_end {
        SchedulePeriod::Day
    } else if params.day_end <= hour && hour < params.evening_end {
        let progress = relative_progress(params.day_end, params.evening_end, hour);
        SchedulePeriod::Evening { progress }
    } else {
        SchedulePeriod::Night
    }
}

/// Classifies a clock time into its schedule period.
pub fn period_for_time(time: NaiveTime, params: &ScheduleParams) -> SchedulePeriod {
    period_for_hour(fractional_hour(time), params)
}

/// Scheduled brightness for a fractional hour.
pub fn brightness_for_hour(hour: f64, params: &ScheduleParams) -> f64 {
    period_for_hour(hour, params).brightness(params)
}

/// Scheduled brightness for a clock time.
pub fn scheduled_brightness(time: NaiveTime, params: &ScheduleParams) -> f64 {
    brightness_for_hour(fractional_hour(time), params)
}

/// Fraction of the `[start, end)` window that `current` has passed through.
///
/// Callers must hand in a `current` inside the window; the result is always
/// in `[0, 1]` and anything else is a programming error, not bad input.
fn relative_progress(start: f64, end: f64, current: f64) -> f64 {
    let progress = (current - start) / (end - start);
    debug_assert!(
        (0.0..=1.0).contains(&progress),
        "progress {progress} outside [0, 1] for {current} in window {start}..{end}"
    );
    progress
}
