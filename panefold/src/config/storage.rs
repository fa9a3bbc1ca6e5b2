use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::model::LayoutConfig;

/// Status describing how the layout configuration was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Load the configuration, falling back to defaults on any problem.
pub(crate) fn load_initial_config() -> (LayoutConfig, ConfigLoadStatus) {
    let path = config_path();
    match load_config_from_path(&path) {
        Ok(loaded) => loaded,
        Err(err) => {
            log::warn!(
                "failed to load layout config from {}, using defaults: {err}",
                path.display()
            );
            (
                LayoutConfig::default(),
                ConfigLoadStatus::Invalid(err.to_string()),
            )
        },
    }
}

fn load_config_from_path(
    path: &Path,
) -> Result<(LayoutConfig, ConfigLoadStatus), ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok((LayoutConfig::default(), ConfigLoadStatus::Missing));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<LayoutConfig>(&data) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("layout config is not valid JSON: {err}");
            return Ok((
                LayoutConfig::default(),
                ConfigLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok((parsed.validate()?, ConfigLoadStatus::Loaded))
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("panefold")
            .join("layout.json");
    }

    std::env::temp_dir().join("panefold").join("layout.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use panefold_ui_regions::ToggleMode;

    use super::{
        ConfigError, ConfigLoadStatus, LayoutConfig, load_config_from_path,
    };

    #[test]
    fn given_missing_file_when_load_then_defaults_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("layout.json");

        let (config, status) =
            load_config_from_path(&path).expect("missing file is not an error");

        assert_eq!(config, LayoutConfig::default());
        assert_eq!(status, ConfigLoadStatus::Missing);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_valid_file_when_load_then_config_is_loaded() {
        let root = test_temp_dir("valid");
        let path = root.join("layout.json");
        fs::write(&path, r#"{"mode": "sequential"}"#)
            .expect("test payload should be written");

        let (config, status) =
            load_config_from_path(&path).expect("valid config should load");

        assert_eq!(config.mode, ToggleMode::Sequential);
        assert_eq!(status, ConfigLoadStatus::Loaded);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("layout.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let (config, status) = load_config_from_path(&path)
            .expect("loading invalid config should not fail with io error");

        assert_eq!(config, LayoutConfig::default());
        match status {
            ConfigLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_duplicate_ids_when_load_then_region_ids_error_is_returned() {
        let root = test_temp_dir("duplicate_ids");
        let path = root.join("layout.json");
        fs::write(
            &path,
            r#"{"regions": {"sidebar": "x", "topbar": "x", "main_content": "y"}}"#,
        )
        .expect("test payload should be written");

        let result = load_config_from_path(&path);

        assert!(matches!(result, Err(ConfigError::RegionIds(_))));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "panefold-config-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
