//! Configuration management for flower-care.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::domain::{CareAction, Flower, Species};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = ".flower-care.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Flowers to plant; falls back to the demo garden when absent
    #[serde(default = "default_flowers")]
    pub flowers: Vec<FlowerConfig>,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            output: OutputConfig::default(),
            flowers: default_flowers(),
        }
    }
}

impl GardenConfig {
    /// Path of the project config file under `project_root`, if one exists
    pub fn project_config_path(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(PROJECT_CONFIG_FILE);
        path.exists().then_some(path)
    }

    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // Embedded default_config.toml: log level and output format only;
        // `flowers` falls through to the demo garden.
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // .flower-care.toml beside the garden being tended
        if let Some(project_config) = project_root.and_then(Self::project_config_path) {
            builder = builder.add_source(File::from(project_config).required(false));
        }

        // Per-user settings, e.g. ~/.config/flower-care/config.toml
        if let Some(dirs) = directories::ProjectDirs::from("com", "flower-care", "flower-care") {
            let user_config = dirs.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // FLOWER_CARE__LOG__LEVEL=debug, FLOWER_CARE__OUTPUT__FORMAT=json
        builder = builder.add_source(
            Environment::with_prefix("FLOWER_CARE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a single configuration file, without the other layers
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        config::Config::builder()
            .add_source(config::File::from_str(&contents, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Report output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How the garden report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One status line per flower
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// One flower entry.
///
/// Either `species` is set, or all of `name`, `color`, `height` and `health`
/// are. Explicit fields override the species preset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowerConfig {
    #[serde(default)]
    pub species: Option<Species>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub health: Option<f64>,
    #[serde(default)]
    pub plan: Vec<CareAction>,
}

impl FlowerConfig {
    /// Build the configured flower with its care plan attached
    pub fn to_flower(&self) -> Result<Flower, ConfigError> {
        let preset = self.species.map(|species| species.preset());

        let missing = |field: &str| {
            ConfigError::Invalid(format!(
                "flower entry without species must set `{}`",
                field
            ))
        };

        let name = self
            .name
            .clone()
            .or_else(|| preset.map(|p| p.name.to_string()))
            .ok_or_else(|| missing("name"))?;
        let color = self
            .color
            .clone()
            .or_else(|| preset.map(|p| p.color.to_string()))
            .ok_or_else(|| missing("color"))?;
        let height = self
            .height
            .or_else(|| preset.map(|p| p.height))
            .ok_or_else(|| missing("height"))?;
        let health = self
            .health
            .or_else(|| preset.map(|p| p.health))
            .ok_or_else(|| missing("health"))?;

        Ok(Flower::new(name, color, height, health).with_care_plan(self.plan.iter().copied()))
    }
}

fn default_flowers() -> Vec<FlowerConfig> {
    let tulip = FlowerConfig {
        name: Some("Tulip".to_string()),
        color: Some("Yellow".to_string()),
        height: Some(10.0),
        health: Some(60.0),
        plan: vec![
            CareAction::Watering,
            CareAction::Fertilizing,
            CareAction::Pruning,
            CareAction::Sunlight { hours: 4 },
            CareAction::Repotting,
            CareAction::Aromatizing,
            CareAction::Misting,
        ],
        ..Default::default()
    };

    let preset = |species: Species, plan: Vec<CareAction>| FlowerConfig {
        species: Some(species),
        plan,
        ..Default::default()
    };

    vec![
        tulip,
        preset(
            Species::Orchid,
            vec![CareAction::Misting, CareAction::Sunlight { hours: 3 }],
        ),
        preset(
            Species::Sunflower,
            vec![CareAction::Watering, CareAction::Sunlight { hours: 8 }],
        ),
        preset(
            Species::Lily,
            vec![CareAction::Pruning, CareAction::Repotting, CareAction::Aromatizing],
        ),
        preset(
            Species::Daffodil,
            vec![CareAction::Fertilizing, CareAction::Watering],
        ),
        preset(Species::Daisy, vec![CareAction::Watering, CareAction::Misting]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GardenConfig::default();
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.flowers.len(), 6);
        assert_eq!(config.flowers[0].name.as_deref(), Some("Tulip"));
        assert_eq!(config.flowers[0].plan.len(), 7);
    }

    #[test]
    fn test_species_entry_to_flower() {
        let entry = FlowerConfig {
            species: Some(Species::Lily),
            plan: vec![CareAction::Pruning],
            ..Default::default()
        };

        let flower = entry.to_flower().unwrap();
        assert_eq!(flower.name(), "Lily");
        assert_eq!(flower.color(), "White");
        assert_eq!(flower.care_plan(), &[CareAction::Pruning]);
    }

    #[test]
    fn test_explicit_fields_override_preset() {
        let entry = FlowerConfig {
            species: Some(Species::Orchid),
            name: Some("Moth Orchid".to_string()),
            health: Some(90.0),
            ..Default::default()
        };

        let flower = entry.to_flower().unwrap();
        assert_eq!(flower.name(), "Moth Orchid");
        assert_eq!(flower.color(), "Purple");
        assert_eq!(flower.height(), 12.0);
        assert_eq!(flower.health(), 90.0);
    }

    #[test]
    fn test_entry_without_species_needs_all_fields() {
        let entry = FlowerConfig {
            name: Some("Rose".to_string()),
            color: Some("Red".to_string()),
            height: Some(15.0),
            ..Default::default()
        };

        assert!(matches!(entry.to_flower(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(PROJECT_CONFIG_FILE),
            r#"
[log]
level = "debug"

[output]
format = "json"

[[flowers]]
species = "sunflower"
plan = ["watering", "sunlight(2)"]

[[flowers]]
name = "Rose"
color = "Red"
height = 15.0
health = 70.0
plan = ["pruning"]
"#,
        )
        .unwrap();

        let config = GardenConfig::load(Some(temp.path())).unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.flowers.len(), 2);
        assert_eq!(config.flowers[0].species, Some(Species::Sunflower));
        assert_eq!(
            config.flowers[0].plan,
            vec![CareAction::Watering, CareAction::Sunlight { hours: 2 }]
        );
        assert_eq!(config.flowers[1].to_flower().unwrap().name(), "Rose");
    }

    #[test]
    fn test_load_rejects_unknown_action() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("garden.toml");
        fs::write(
            &path,
            r#"
[[flowers]]
species = "daisy"
plan = ["singing"]
"#,
        )
        .unwrap();

        let err = GardenConfig::load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_file_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");

        assert!(matches!(
            GardenConfig::load_file(&path),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_file_uses_defaults_for_missing_sections() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("garden.toml");
        fs::write(&path, "[log]\nlevel = \"info\"\n").unwrap();

        let config = GardenConfig::load_file(&path).unwrap();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.flowers.len(), 6);
    }

    #[test]
    fn test_project_config_path() {
        let temp = TempDir::new().unwrap();
        assert_eq!(GardenConfig::project_config_path(temp.path()), None);

        let path = temp.path().join(PROJECT_CONFIG_FILE);
        fs::write(&path, "[log]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(GardenConfig::project_config_path(temp.path()), Some(path));
    }

    #[test]
    fn test_missing_field_is_named() {
        let entry = FlowerConfig {
            name: Some("Rose".to_string()),
            ..Default::default()
        };

        let err = entry.to_flower().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: flower entry without species must set `color`"
        );
    }
}
