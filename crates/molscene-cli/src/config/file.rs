use crate::error::{CliError, Result};
use molscene::core::models::color::Rgb;
use molscene::engine::config::SceneConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileAmbientConfig {
    pub ratio: Option<f64>,
    pub color: Option<Rgb>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileCameraConfig {
    pub position: Option<[f64; 3]>,
    pub orientation: Option<[f64; 3]>,
    pub fov: Option<u8>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileLightConfig {
    pub position: Option<[f64; 3]>,
    pub brightness: Option<f64>,
    pub color: Option<Rgb>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileStyleConfig {
    pub sphere_radius: Option<f64>,
    pub radius_scale: Option<f64>,
    pub cylinder_radius: Option<f64>,
    pub cylinder_radius_scale: Option<f64>,
    pub bond_color: Option<Rgb>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilePaletteConfig {
    pub carbon: Option<Rgb>,
    pub nitrogen: Option<Rgb>,
    pub oxygen: Option<Rgb>,
    pub hydrogen: Option<Rgb>,
    pub phosphorus: Option<Rgb>,
    pub fallback: Option<Rgb>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileBondsConfig {
    pub default_cutoff: Option<f64>,
    pub phosphorus_oxygen_cutoff: Option<f64>,
}

/// The TOML configuration file. Every section and key is optional.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub ambient: Option<FileAmbientConfig>,
    pub camera: Option<FileCameraConfig>,
    pub light: Option<FileLightConfig>,
    pub style: Option<FileStyleConfig>,
    pub palette: Option<FilePaletteConfig>,
    pub bonds: Option<FileBondsConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Other(e.into()))
    }
}

impl From<&SceneConfig> for FileConfig {
    fn from(config: &SceneConfig) -> Self {
        let palette = &config.style.palette;
        Self {
            ambient: Some(FileAmbientConfig {
                ratio: Some(config.ambient.ratio),
                color: Some(config.ambient.color),
            }),
            camera: Some(FileCameraConfig {
                position: Some(config.camera.position.coords.into()),
                orientation: Some(config.camera.orientation.into()),
                fov: Some(config.camera.fov_degrees),
            }),
            light: Some(FileLightConfig {
                position: Some(config.light.position.coords.into()),
                brightness: Some(config.light.brightness),
                color: Some(config.light.color),
            }),
            style: Some(FileStyleConfig {
                sphere_radius: Some(config.style.sphere_radius),
                radius_scale: Some(config.style.radius_scale),
                cylinder_radius: Some(config.style.cylinder_radius),
                cylinder_radius_scale: Some(config.style.cylinder_radius_scale),
                bond_color: Some(config.style.bond_color),
            }),
            palette: Some(FilePaletteConfig {
                carbon: Some(palette.carbon),
                nitrogen: Some(palette.nitrogen),
                oxygen: Some(palette.oxygen),
                hydrogen: Some(palette.hydrogen),
                phosphorus: Some(palette.phosphorus),
                fallback: Some(palette.fallback),
            }),
            bonds: Some(FileBondsConfig {
                default_cutoff: Some(config.bonds.default_cutoff),
                phosphorus_oxygen_cutoff: Some(config.bonds.phosphorus_oxygen_cutoff),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_file_reads_partial_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.toml");
        fs::write(
            &path,
            r#"
            [camera]
            position = [0.0, 0.0, -30.0]
            fov = 90

            [style]
            sphere-radius = 0.6
            bond-color = [10, 20, 30]

            [bonds]
            phosphorus-oxygen-cutoff = 1.9
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        let camera = config.camera.unwrap();
        assert_eq!(camera.position, Some([0.0, 0.0, -30.0]));
        assert_eq!(camera.orientation, None);
        assert_eq!(camera.fov, Some(90));

        let style = config.style.unwrap();
        assert_eq!(style.sphere_radius, Some(0.6));
        assert_eq!(style.bond_color, Some(Rgb::new(10, 20, 30)));

        assert_eq!(config.bonds.unwrap().phosphorus_oxygen_cutoff, Some(1.9));
        assert!(config.ambient.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[style]\nsphere-size = 1.0\n").unwrap();

        let result = FileConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn default_config_serializes_to_loadable_toml() {
        let defaults = FileConfig::from(&SceneConfig::default());
        let text = defaults.to_toml().unwrap();

        assert!(text.contains("[bonds]"));
        assert!(text.contains("default-cutoff = 1.6"));
        assert_eq!(toml::from_str::<FileConfig>(&text).unwrap(), defaults);
    }
}
