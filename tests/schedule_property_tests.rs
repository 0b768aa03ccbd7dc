use chrono::NaiveTime;
use monitorctl::constants::{MAXIMUM_BRIGHTNESS, MINIMUM_BRIGHTNESS};
use monitorctl::schedule::{
    SchedulePeriod, ScheduleParams, brightness_for_hour, fractional_hour, period_for_hour,
    scheduled_brightness,
};
use proptest::prelude::*;

/// Generate fractional hours covering a full day
fn hour_strategy() -> impl Strategy<Value = f64> {
    0.0..24.0
}

/// Generate well-ordered schedule parameters with floors in the accepted range
fn params_strategy() -> impl Strategy<Value = ScheduleParams> {
    (0.0..10.0, 10.0..18.0, 18.0..24.0, 0.1..=1.0, 0.1..=1.0).prop_map(
        |(day_start, day_end, evening_end, evening_floor, night_floor)| ScheduleParams {
            day_start,
            day_end,
            evening_end,
            evening_floor,
            night_floor,
        },
    )
}

/// Property tests for the brightness curve
#[cfg(test)]
mod brightness_curve_tests {
    use super::*;

    proptest! {
        /// The computed brightness never leaves the range xrandr accepts,
        /// no matter the hour or the parameter set
        #[test]
        fn test_brightness_always_in_range(
            hour in hour_strategy(),
            params in params_strategy()
        ) {
            let brightness = brightness_for_hour(hour, &params);

            assert!(
                (MINIMUM_BRIGHTNESS..=MAXIMUM_BRIGHTNESS).contains(&brightness),
                "brightness {brightness} out of range at hour {hour}"
            );
        }

        /// Hours strictly inside the day window always give full brightness
        #[test]
        fn test_day_window_gives_full_brightness(
            params in params_strategy(),
            fraction in 0.0..1.0
        ) {
            let hour = params.day_start + fraction * (params.day_end - params.day_start);
            prop_assume!(hour > params.day_start && hour < params.day_end);

            assert_eq!(brightness_for_hour(hour, &params), MAXIMUM_BRIGHTNESS);
        }

        /// Night hours give exactly the configured night floor
        #[test]
        fn test_night_gives_night_floor(
            params in params_strategy(),
            hour in hour_strategy()
        ) {
            prop_assume!(hour <= params.day_start || hour >= params.evening_end);

            assert_eq!(brightness_for_hour(hour, &params), params.night_floor);
        }

        /// Evening brightness stays between the evening floor and full brightness
        #[test]
        fn test_evening_respects_floor(
            params in params_strategy(),
            fraction in 0.0..1.0
        ) {
            let hour = params.day_end + fraction * (params.evening_end - params.day_end);
            prop_assume!(hour >= params.day_end && hour < params.evening_end);

            let brightness = brightness_for_hour(hour, &params);
            assert!(brightness >= params.evening_floor);
            assert!(brightness <= MAXIMUM_BRIGHTNESS);
        }

        /// The evening curve never gets brighter as the evening progresses
        #[test]
        fn test_evening_curve_is_monotonic(
            params in params_strategy(),
            f1 in 0.0..1.0,
            f2 in 0.0..1.0
        ) {
            let (early, late) = if f1 <= f2 { (f1, f2) } else { (f2, f1) };
            let span = params.evening_end - params.day_end;
            let h1 = params.day_end + early * span;
            let h2 = params.day_end + late * span;
            prop_assume!(h2 < params.evening_end);

            let b1 = brightness_for_hour(h1, &params);
            let b2 = brightness_for_hour(h2, &params);
            assert!(
                b1 >= b2 - 1e-9,
                "brightness rose from {b1} at {h1} to {b2} at {h2}"
            );
        }
    }
}

/// Property tests for period classification
#[cfg(test)]
mod period_classification_tests {
    use super::*;

    proptest! {
        /// Every hour of the day lands in the period its window describes
        #[test]
        fn test_period_matches_window(
            hour in hour_strategy(),
            params in params_strategy()
        ) {
            match period_for_hour(hour, &params) {
                SchedulePeriod::Day => {
                    assert!(hour > params.day_start && hour < params.day_end);
                }
                SchedulePeriod::Evening { progress } => {
                    assert!(hour >= params.day_end && hour < params.evening_end);
                    assert!((0.0..=1.0).contains(&progress));
                }
                SchedulePeriod::Night => {
                    assert!(hour <= params.day_start || hour >= params.evening_end);
                }
            }
        }

        /// Evening progress grows with the hour
        #[test]
        fn test_evening_progress_tracks_hour(
            params in params_strategy(),
            fraction in 0.0..1.0
        ) {
            let hour = params.day_end + fraction * (params.evening_end - params.day_end);
            prop_assume!(hour >= params.day_end && hour < params.evening_end);

            if let SchedulePeriod::Evening { progress } = period_for_hour(hour, &params) {
                let expected = (hour - params.day_end) / (params.evening_end - params.day_end);
                assert!((progress - expected).abs() < 1e-9);
            } else {
                panic!("hour {hour} should be classified as evening");
            }
        }
    }
}

/// Property tests for wall-clock conversion
#[cfg(test)]
mod time_conversion_tests {
    use super::*;

    proptest! {
        /// Seconds never influence the fractional hour
        #[test]
        fn test_fractional_hour_ignores_seconds(
            hour in 0..24u32,
            minute in 0..60u32,
            second in 0..60u32
        ) {
            let time = NaiveTime::from_hms_opt(hour, minute, second).unwrap();

            let expected = f64::from(hour) + f64::from(minute) / 60.0;
            assert_eq!(fractional_hour(time), expected);
        }

        /// Scheduling from a wall-clock time agrees with the hourly curve
        #[test]
        fn test_scheduled_brightness_matches_hourly_curve(
            hour in 0..24u32,
            minute in 0..60u32,
            second in 0..60u32,
            params in params_strategy()
        ) {
            let time = NaiveTime::from_hms_opt(hour, minute, second).unwrap();

            assert_eq!(
                scheduled_brightness(time, &params),
                brightness_for_hour(fractional_hour(time), &params)
            );
        }
    }
}
