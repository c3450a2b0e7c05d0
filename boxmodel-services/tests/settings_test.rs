use boxmodel_services::SettingsRegistry;
use boxmodel_theme::config::{ColorScheme, ThemeSource};
use std::fs;
use std::path::PathBuf;

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("boxmodel_services_settings_{}", name));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn test_later_files_override_earlier() {
    let dir = test_dir("layers");
    let system = dir.join("system.toml");
    let user = dir.join("user.toml");
    fs::write(&system, "[window]\nfollow_mouse = false\nalways_on_top = false\n").unwrap();
    fs::write(&user, "[window]\nalways_on_top = true\n[general]\nlog_level = \"debug\"\n").unwrap();

    let mut registry = SettingsRegistry::with_defaults();
    let results = registry.load_from_paths_async(vec![system, user]).await;
    assert!(results.iter().all(|result| result.is_ok()));

    let config = registry.get();
    assert_eq!(config.window.follow_mouse, Some(false));
    assert_eq!(config.window.always_on_top, Some(true));
    assert_eq!(config.window.show_centered, Some(true));
    assert_eq!(config.general.log_level.as_deref(), Some("debug"));
}

#[tokio::test]
async fn test_theme_toml_sets_theme_config() {
    let dir = test_dir("theme");
    let theme_toml = dir.join("theme.toml");
    fs::write(&theme_toml, "[theme]\ndark = \"ArcGreyDark\"\n").unwrap();

    let mut registry = SettingsRegistry::with_defaults();
    let results = registry.load_from_paths_async(vec![theme_toml]).await;
    assert!(results[0].is_ok());

    assert_eq!(
        registry.theme_config.source_for(ColorScheme::Dark),
        ThemeSource::preset("ArcGreyDark")
    );
    assert_eq!(
        registry.theme_config.source_for(ColorScheme::Light),
        ThemeSource::preset("Bright")
    );
}

#[tokio::test]
async fn test_bad_files_are_reported_and_skipped() {
    let dir = test_dir("bad");
    let broken = dir.join("config.toml");
    fs::write(&broken, "[window\n").unwrap();
    let missing = dir.join("missing.toml");

    let mut registry = SettingsRegistry::with_defaults();
    let results = registry.load_from_paths_async(vec![broken, missing]).await;
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|result| result.is_err()));
    assert_eq!(registry.get().window.hide_on_close, Some(true));
}
