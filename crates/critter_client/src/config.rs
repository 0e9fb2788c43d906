//! Critter config override (<asset root>/config/critters.json)
//!
//! Файла нет → defaults. Файл битый → warning + defaults (не падаем).

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;
use critter_simulation::CritterConfig;
use std::path::{Path, PathBuf};

/// Путь относительно asset root
pub const CONFIG_PATH: &str = "config/critters.json";

/// Тот же каталог, откуда грузит AssetServer (base path FileAssetReader + "assets")
pub fn asset_root() -> PathBuf {
    FileAssetReader::get_base_path().join("assets")
}

/// Config для всех critter'ов сцены
#[derive(Resource, Debug, Clone, Default)]
pub struct ClientConfig(pub CritterConfig);

pub fn load_critter_config(relative: impl AsRef<Path>) -> CritterConfig {
    load_critter_config_at(&asset_root().join(relative))
}

/// Загрузка по абсолютному пути (любая ошибка → defaults)
pub fn load_critter_config_at(path: &Path) -> CritterConfig {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(_) => {
            critter_simulation::log_info(&format!(
                "No critter config at {}, using defaults",
                path.display()
            ));
            return CritterConfig::default();
        }
    };

    match CritterConfig::from_json_str(&json) {
        Ok(config) => {
            critter_simulation::log_info(&format!("Critter config loaded from {}", path.display()));
            config
        }
        Err(error) => {
            critter_simulation::log_warning(&format!(
                "Ignoring {}: {} (using defaults)",
                path.display(),
                error
            ));
            CritterConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(json.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_asset_root_matches_asset_server_base() {
        assert_eq!(asset_root(), FileAssetReader::get_base_path().join("assets"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_critter_config("config/does_not_exist_critters.json");
        assert_eq!(config, CritterConfig::default());
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let file = config_file(r#"{ "reaction": { "duration": 0 } }"#);

        let config = load_critter_config_at(file.path());

        assert_eq!(config, CritterConfig::default());
    }

    #[test]
    fn test_malformed_json_falls_back_to_defaults() {
        let file = config_file("{ reaction: ");

        assert_eq!(load_critter_config_at(file.path()), CritterConfig::default());
    }

    #[test]
    fn test_valid_override_is_applied() {
        let file = config_file(r#"{ "wander": { "walk_speed": 2.5 } }"#);

        let config = load_critter_config_at(file.path());

        assert_eq!(config.wander.walk_speed, 2.5);
        assert_eq!(config.reaction, CritterConfig::default().reaction);
    }
}
