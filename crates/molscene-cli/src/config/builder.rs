use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::RenderArgs;
use crate::error::{CliError, Result};
use molscene::core::chemistry::bonding::BondThresholds;
use molscene::core::chemistry::palette::ElementPalette;
use molscene::core::io::xyz::XyzOptions;
use molscene::core::models::scene::{Ambient, Camera, Light};
use molscene::engine::config::{SceneConfig, SceneConfigBuilder};
use nalgebra::{Point3, Vector3};
use std::str::FromStr;

/// Merges built-in defaults, the config file, `--set` overrides and explicit
/// flags, in increasing order of precedence.
pub fn build_config(args: &RenderArgs) -> Result<AppConfig> {
    let defaults = SceneConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let ambient_file = file_config.ambient.take().unwrap_or_default();
    let ambient = Ambient {
        ratio: ambient_file.ratio.unwrap_or(defaults.ambient.ratio),
        color: ambient_file.color.unwrap_or(defaults.ambient.color),
    };

    let camera_file = file_config.camera.take().unwrap_or_default();
    let camera = Camera {
        position: camera_file
            .position
            .map(Point3::from)
            .unwrap_or(defaults.camera.position),
        orientation: camera_file
            .orientation
            .map(Vector3::from)
            .unwrap_or(defaults.camera.orientation),
        fov_degrees: camera_file.fov.unwrap_or(defaults.camera.fov_degrees),
    };

    let light_file = file_config.light.take().unwrap_or_default();
    let light = Light {
        position: light_file
            .position
            .map(Point3::from)
            .unwrap_or(defaults.light.position),
        brightness: light_file.brightness.unwrap_or(defaults.light.brightness),
        color: light_file.color.unwrap_or(defaults.light.color),
    };

    let style_file = file_config.style.take().unwrap_or_default();
    let sphere_radius = args
        .sphere_radius
        .or(style_file.sphere_radius)
        .unwrap_or(defaults.style.sphere_radius);
    let radius_scale = args
        .radius_scale
        .or(style_file.radius_scale)
        .unwrap_or(defaults.style.radius_scale);
    let cylinder_radius = args
        .cylinder_radius
        .or(style_file.cylinder_radius)
        .unwrap_or(defaults.style.cylinder_radius);
    let cylinder_radius_scale = style_file
        .cylinder_radius_scale
        .unwrap_or(defaults.style.cylinder_radius_scale);
    let bond_color = style_file
        .bond_color
        .unwrap_or(defaults.style.bond_color);

    let palette_file = file_config.palette.take().unwrap_or_default();
    let default_palette = defaults.style.palette;
    let palette = ElementPalette {
        carbon: palette_file.carbon.unwrap_or(default_palette.carbon),
        nitrogen: palette_file.nitrogen.unwrap_or(default_palette.nitrogen),
        oxygen: palette_file.oxygen.unwrap_or(default_palette.oxygen),
        hydrogen: palette_file.hydrogen.unwrap_or(default_palette.hydrogen),
        phosphorus: palette_file.phosphorus.unwrap_or(default_palette.phosphorus),
        fallback: palette_file.fallback.unwrap_or(default_palette.fallback),
    };

    let bonds_file = file_config.bonds.take().unwrap_or_default();
    let bond_thresholds = BondThresholds {
        default_cutoff: bonds_file
            .default_cutoff
            .unwrap_or(defaults.bonds.default_cutoff),
        phosphorus_oxygen_cutoff: bonds_file
            .phosphorus_oxygen_cutoff
            .unwrap_or(defaults.bonds.phosphorus_oxygen_cutoff),
    };

    let scene_config = SceneConfigBuilder::new()
        .ambient(ambient)
        .camera(camera)
        .light(light)
        .sphere_radius(sphere_radius)
        .radius_scale(radius_scale)
        .cylinder_radius(cylinder_radius)
        .cylinder_radius_scale(cylinder_radius_scale)
        .bond_color(bond_color)
        .palette(palette)
        .bond_thresholds(bond_thresholds)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        xyz_options: XyzOptions {
            standard_header: args.standard_xyz,
        },
        scene_config,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;

        match key {
            "ambient.ratio" => {
                config.ambient.get_or_insert_with(Default::default).ratio =
                    Some(parse_value(key, value_str, "float")?);
            }
            "camera.fov" => {
                config.camera.get_or_insert_with(Default::default).fov =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "light.brightness" => {
                config.light.get_or_insert_with(Default::default).brightness =
                    Some(parse_value(key, value_str, "float")?);
            }
            "style.sphere-radius" => {
                config.style.get_or_insert_with(Default::default).sphere_radius =
                    Some(parse_value(key, value_str, "float")?);
            }
            "style.radius-scale" => {
                config.style.get_or_insert_with(Default::default).radius_scale =
                    Some(parse_value(key, value_str, "float")?);
            }
            "style.cylinder-radius" => {
                config.style.get_or_insert_with(Default::default).cylinder_radius =
                    Some(parse_value(key, value_str, "float")?);
            }
            "style.cylinder-radius-scale" => {
                config
                    .style
                    .get_or_insert_with(Default::default)
                    .cylinder_radius_scale = Some(parse_value(key, value_str, "float")?);
            }
            "bonds.default-cutoff" => {
                config.bonds.get_or_insert_with(Default::default).default_cutoff =
                    Some(parse_value(key, value_str, "float")?);
            }
            "bonds.phosphorus-oxygen-cutoff" => {
                config
                    .bonds
                    .get_or_insert_with(Default::default)
                    .phosphorus_oxygen_cutoff = Some(parse_value(key, value_str, "float")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
