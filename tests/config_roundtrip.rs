use barcarte::config::Config;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn first_run_creates_the_default_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let config = Config::load_or_create(&config_path).unwrap();
    assert!(config_path.exists());
    assert_eq!(config.theme, "dark");
    assert!(config.menu_path.is_none());
    assert_eq!(config.toast.display_ms, 4000);
    assert_eq!(config.toast.linger_ms, 2000);
    assert_eq!(config.toast.fast_dismiss_ms, 300);
}

#[test]
fn saved_config_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.theme = "light".to_string();
    config.menu_path = Some(temp_dir.path().join("menu.toml"));
    config.toast.display_ms = 2500;
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.theme, "light");
    assert_eq!(loaded.menu_path, config.menu_path);
    assert_eq!(loaded.toast.display_ms, 2500);
    // Untouched fields keep their defaults.
    assert_eq!(loaded.toast.linger_ms, 2000);
}

#[test]
fn partial_config_files_fill_in_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "theme = \"nocolor\"\n").unwrap();

    let config = Config::load_or_create(&config_path).unwrap();
    assert_eq!(config.theme, "nocolor");
    assert_eq!(config.toast.dismiss_threshold, 55.0);
    assert_eq!(config.toast.fade_distance, 180.0);
}

#[test]
fn toast_config_converts_to_controller_timings() {
    let config = Config::default();
    let timings = config.toast.timings();
    assert_eq!(timings.display, Duration::from_millis(4000));
    assert_eq!(timings.linger, Duration::from_millis(2000));
    assert_eq!(timings.fast_dismiss, Duration::from_millis(300));
    assert_eq!(timings.dismiss_threshold, 55.0);
}
