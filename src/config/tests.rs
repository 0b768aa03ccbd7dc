use super::validation::validate_config;
use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

fn create_test_config(
    schedule: Option<ScheduleVariant>,
    evening_end: Option<f64>,
    evening_floor: Option<f64>,
    night_floor: Option<f64>,
) -> Config {
    Config {
        schedule,
        day_start: None,
        day_end: None,
        evening_end,
        evening_floor,
        night_floor,
        display: Some(":0".to_string()),
        command_timeout: Some(10),
        device_delay_ms: Some(500),
        profile_aliases: None,
        monitor: None,
    }
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("monitorctl.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_empty_file_gets_defaults() {
    let dir = tempdir().unwrap();
    let path = write_config(&dir, "");
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.schedule, Some(ScheduleVariant::Home));
    assert_eq!(config.display_target(), ":0");
    assert_eq!(config.command_timeout().as_secs(), 10);
    assert_eq!(config.device_delay().as_millis(), 500);
    assert_eq!(config.schedule_params(), crate::schedule::ScheduleParams::home());
}

#[test]
fn test_work_variant_selected() {
    let dir = tempdir().unwrap();
    let path = write_config(&dir, "schedule = \"work\"\n");
    let config = load_from_path(&path).unwrap();
    let params = config.schedule_params();
    assert_eq!(params.evening_end, 20.0);
    assert_eq!(params.evening_floor, 0.55);
    assert_eq!(params.night_floor, 0.35);
    // Hours shared with the home variant stay untouched
    assert_eq!(params.day_start, 4.5);
    assert_eq!(params.day_end, 15.0);
}

#[test]
fn test_overrides_beat_variant_values() {
    let dir = tempdir().unwrap();
    let path = write_config(
        &dir,
        "schedule = \"work\"\nevening_floor = 0.6\nday_end = 14.0\n",
    );
    let config = load_from_path(&path).unwrap();
    let params = config.schedule_params();
    assert_eq!(params.evening_floor, 0.6);
    assert_eq!(params.day_end, 14.0);
    assert_eq!(params.evening_end, 20.0);
}

#[test]
fn test_unknown_variant_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = write_config(&dir, "schedule = \"vacation\"\n");
    let err = load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_validation_rejects_bad_hour_ordering() {
    // evening_end before the home variant's day_end of 15
    let config = create_test_config(None, Some(10.0), None, None);
    let err = validate_config(&config).unwrap_err();
    assert!(
        err.to_string()
            .contains("day_start < day_end < evening_end")
    );
}

#[test]
fn test_validation_rejects_out_of_range_hours() {
    let config = create_test_config(None, Some(25.0), None, None);
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("evening_end must be between"));
}

#[test]
fn test_validation_rejects_bad_floors() {
    let too_dim = create_test_config(None, None, Some(0.05), None);
    assert!(validate_config(&too_dim).is_err());
    let too_bright = create_test_config(None, None, None, Some(1.5));
    assert!(validate_config(&too_bright).is_err());
    let fine = create_test_config(None, None, Some(0.3), Some(0.2));
    assert!(validate_config(&fine).is_ok());
}

#[test]
fn test_validation_command_timeout_range() {
    let mut config = create_test_config(None, None, None, None);
    config.command_timeout = Some(0);
    assert!(validate_config(&config).is_err());
    config.command_timeout = Some(121);
    assert!(validate_config(&config).is_err());
    config.command_timeout = Some(1);
    assert!(validate_config(&config).is_ok());
    config.command_timeout = Some(120);
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_validation_device_delay_range() {
    let mut config = create_test_config(None, None, None, None);
    config.device_delay_ms = Some(10_001);
    assert!(validate_config(&config).is_err());
    config.device_delay_ms = Some(0);
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_validation_rejects_empty_display() {
    let mut config = create_test_config(None, None, None, None);
    config.display = Some("   ".to_string());
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("display cannot be empty"));
}

#[test]
fn test_monitor_block_extends_registry() {
    let dir = tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[[monitor]]
model = "ACME X100"
inputs = { DP_1 = "0x0f", USB_C = "0x1b" }
profiles = { home = "USB_C" }
"#,
    );
    let config = load_from_path(&path).unwrap();
    let registry = config.model_registry().unwrap();
    assert_eq!(registry.len(), 3);
    let spec = registry.get("ACME X100").unwrap();
    // vcp falls back to the input-select default
    assert_eq!(spec.vcp(), "0x60");
    assert_eq!(spec.profile_target("home").unwrap().name, "USB_C");
    assert_eq!(spec.toggle_target("0x0f").unwrap().name, "USB_C");
}

#[test]
fn test_monitor_block_overrides_builtin_model() {
    let dir = tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[[monitor]]
model = "DELL S2721DS"
vcp = "0x60"
inputs = { HDMI_1 = "0x11", DP = "0x0f" }
profiles = { home = "DP", work = "HDMI_1" }
"#,
    );
    let config = load_from_path(&path).unwrap();
    let registry = config.model_registry().unwrap();
    assert_eq!(registry.len(), 2);
    let spec = registry.get("DELL S2721DS").unwrap();
    assert_eq!(spec.profile_target("home").unwrap().name, "DP");
    assert_eq!(spec.toggle_target("0x11").unwrap().code, "0x0f");
}

#[test]
fn test_invalid_monitor_block_fails_load() {
    let dir = tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[[monitor]]
model = "ACME X100"
inputs = { DP_1 = "0x0f" }
"#,
    );
    let err = load_from_path(&path).unwrap_err();
    assert!(format!("{err:#}").contains("exactly two input sources"));
}

#[test]
fn test_profile_alias_resolution() {
    let dir = tempdir().unwrap();
    let path = write_config(
        &dir,
        "[profile_aliases]\ngustavoip = \"home\"\nnightowl = \"Work\"\n",
    );
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.resolve_profile("gustavoip"), "home");
    // Alias lookup and its result are case-insensitive
    assert_eq!(config.resolve_profile("GustavoIP"), "home");
    assert_eq!(config.resolve_profile("nightowl"), "work");
    // Names without an alias pass through lowercased
    assert_eq!(config.resolve_profile("Work"), "work");
    assert_eq!(config.resolve_profile("guest"), "guest");
}

#[test]
fn test_default_config_file_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("monitorctl.toml");
    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.schedule, Some(ScheduleVariant::Home));
    assert_eq!(config.command_timeout().as_secs(), 10);
    let registry = config.model_registry().unwrap();
    assert_eq!(registry.len(), 2);
    assert!(registry.get("DELL S2721DS").is_some());
    assert!(registry.get("DELL P2715Q").is_some());
}

#[test]
fn test_schedule_params_on_unloaded_config_matches_defaults() {
    // Accessors fall back to the same defaults apply_defaults writes
    let config = create_test_config(None, None, None, None);
    assert_eq!(config.schedule_params(), crate::schedule::ScheduleParams::home());
    assert_eq!(config.display_target(), ":0");
}
