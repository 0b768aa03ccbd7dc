use chrono::NaiveTime;
use monitorctl::config::{Config, ScheduleVariant};
use monitorctl::schedule::scheduled_brightness;

// Helper function to create a minimal config pinned to one schedule variant
fn create_variant_config(variant: ScheduleVariant) -> Config {
    Config {
        schedule: Some(variant),
        day_start: None,
        day_end: None,
        evening_end: None,
        evening_floor: None,
        night_floor: None,
        display: Some(":0".to_string()),
        command_timeout: Some(10),
        device_delay_ms: Some(500),
        profile_aliases: None,
        monitor: None,
    }
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn test_noon_is_full_brightness_for_both_variants() {
    for variant in [ScheduleVariant::Home, ScheduleVariant::Work] {
        let config = create_variant_config(variant);
        let params = config.schedule_params();

        assert_eq!(scheduled_brightness(at(12, 0), &params), 1.0);
    }
}

#[test]
fn test_night_floor_differs_between_variants() {
    let home = create_variant_config(ScheduleVariant::Home);
    let work = create_variant_config(ScheduleVariant::Work);

    assert_eq!(scheduled_brightness(at(23, 0), &home.schedule_params()), 0.15);
    assert_eq!(scheduled_brightness(at(23, 0), &work.schedule_params()), 0.35);
}

#[test]
fn test_variants_disagree_late_evening() {
    // 19:45 is already night on the home schedule (ends 19:30) but still
    // evening on the work schedule (ends 20:00)
    let home = create_variant_config(ScheduleVariant::Home);
    let work = create_variant_config(ScheduleVariant::Work);

    assert_eq!(scheduled_brightness(at(19, 45), &home.schedule_params()), 0.15);

    let work_brightness = scheduled_brightness(at(19, 45), &work.schedule_params());
    assert!(work_brightness >= 0.55);
    assert!(work_brightness < 1.0);
}

#[test]
fn test_evening_floor_engages_before_evening_ends() {
    // Near the end of the evening window the decay curve dips below the
    // floor, so the floor wins
    let home = create_variant_config(ScheduleVariant::Home);
    let work = create_variant_config(ScheduleVariant::Work);

    assert_eq!(scheduled_brightness(at(19, 29), &home.schedule_params()), 0.25);
    assert_eq!(scheduled_brightness(at(19, 59), &work.schedule_params()), 0.55);
}

#[test]
fn test_field_override_reshapes_schedule() {
    let config = Config {
        day_end: Some(16.0),
        ..create_variant_config(ScheduleVariant::Work)
    };
    let params = config.schedule_params();

    // 15:30 would be evening on the stock work schedule; the override keeps
    // it inside the day window
    assert_eq!(params.day_end, 16.0);
    assert_eq!(scheduled_brightness(at(15, 30), &params), 1.0);
}

#[test]
fn test_defaults_apply_without_variant() {
    let config = Config {
        schedule: None,
        ..create_variant_config(ScheduleVariant::Home)
    };
    let params = config.schedule_params();

    // An unset variant behaves like home
    assert_eq!(scheduled_brightness(at(23, 0), &params), 0.15);
    assert_eq!(scheduled_brightness(at(12, 0), &params), 1.0);
}
