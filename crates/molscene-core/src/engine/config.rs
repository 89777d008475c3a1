use crate::core::chemistry::bonding::BondThresholds;
use crate::core::chemistry::palette::ElementPalette;
use crate::core::models::color::Rgb;
use crate::core::models::scene::{Ambient, Camera, Light};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Parameter '{parameter}' must be a finite positive number (got {value})")]
    NotPositive { parameter: &'static str, value: f64 },

    #[error("Parameter '{parameter}' must lie within [{min}, {max}] (got {value})")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Camera field of view must lie within [0, 180] degrees (got {0})")]
    FieldOfView(u8),
}

/// Sizes and colors of the generated primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    pub sphere_radius: f64,
    /// Multiplier applied to `sphere_radius` for every atom.
    pub radius_scale: f64,
    pub cylinder_radius: f64,
    /// Multiplier applied to `cylinder_radius` for every bond.
    pub cylinder_radius_scale: f64,
    pub bond_color: Rgb,
    pub palette: ElementPalette,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            sphere_radius: 1.0,
            radius_scale: 1.0,
            cylinder_radius: 0.2,
            cylinder_radius_scale: 2.0,
            bond_color: Rgb::LIGHT_GREY,
            palette: ElementPalette::default(),
        }
    }
}

impl StyleConfig {
    pub fn atom_radius(&self) -> f64 {
        self.sphere_radius * self.radius_scale
    }

    pub fn bond_radius(&self) -> f64 {
        self.cylinder_radius * self.cylinder_radius_scale
    }
}

/// Everything the scene generator needs besides the atoms themselves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneConfig {
    pub ambient: Ambient,
    pub camera: Camera,
    pub light: Light,
    pub style: StyleConfig,
    pub bonds: BondThresholds,
}

#[derive(Default)]
pub struct SceneConfigBuilder {
    ambient: Option<Ambient>,
    camera: Option<Camera>,
    light: Option<Light>,
    sphere_radius: Option<f64>,
    radius_scale: Option<f64>,
    cylinder_radius: Option<f64>,
    cylinder_radius_scale: Option<f64>,
    bond_color: Option<Rgb>,
    palette: Option<ElementPalette>,
    bond_thresholds: Option<BondThresholds>,
}

impl SceneConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ambient(mut self, ambient: Ambient) -> Self {
        self.ambient = Some(ambient);
        self
    }
    pub fn camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }
    pub fn light(mut self, light: Light) -> Self {
        self.light = Some(light);
        self
    }
    pub fn sphere_radius(mut self, radius: f64) -> Self {
        self.sphere_radius = Some(radius);
        self
    }
    pub fn radius_scale(mut self, scale: f64) -> Self {
        self.radius_scale = Some(scale);
        self
    }
    pub fn cylinder_radius(mut self, radius: f64) -> Self {
        self.cylinder_radius = Some(radius);
        self
    }
    pub fn cylinder_radius_scale(mut self, scale: f64) -> Self {
        self.cylinder_radius_scale = Some(scale);
        self
    }
    pub fn bond_color(mut self, color: Rgb) -> Self {
        self.bond_color = Some(color);
        self
    }
    pub fn palette(mut self, palette: ElementPalette) -> Self {
        self.palette = Some(palette);
        self
    }
    pub fn bond_thresholds(mut self, thresholds: BondThresholds) -> Self {
        self.bond_thresholds = Some(thresholds);
        self
    }

    pub fn build(self) -> Result<SceneConfig, ConfigError> {
        let defaults = SceneConfig::default();

        let style = StyleConfig {
            sphere_radius: positive(
                "sphere_radius",
                self.sphere_radius.unwrap_or(defaults.style.sphere_radius),
            )?,
            radius_scale: positive(
                "radius_scale",
                self.radius_scale.unwrap_or(defaults.style.radius_scale),
            )?,
            cylinder_radius: positive(
                "cylinder_radius",
                self.cylinder_radius
                    .unwrap_or(defaults.style.cylinder_radius),
            )?,
            cylinder_radius_scale: positive(
                "cylinder_radius_scale",
                self.cylinder_radius_scale
                    .unwrap_or(defaults.style.cylinder_radius_scale),
            )?,
            bond_color: self.bond_color.unwrap_or(defaults.style.bond_color),
            palette: self.palette.unwrap_or(defaults.style.palette),
        };

        let bonds = self.bond_thresholds.unwrap_or(defaults.bonds);
        positive("default_cutoff", bonds.default_cutoff)?;
        positive("phosphorus_oxygen_cutoff", bonds.phosphorus_oxygen_cutoff)?;

        let ambient = self.ambient.unwrap_or(defaults.ambient);
        unit_interval("ambient_ratio", ambient.ratio)?;

        let light = self.light.unwrap_or(defaults.light);
        unit_interval("light_brightness", light.brightness)?;

        let camera = self.camera.unwrap_or(defaults.camera);
        if camera.fov_degrees > 180 {
            return Err(ConfigError::FieldOfView(camera.fov_degrees));
        }

        Ok(SceneConfig {
            ambient,
            camera,
            light,
            style,
            bonds,
        })
    }
}

fn positive(parameter: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { parameter, value })
    }
}

fn unit_interval(parameter: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            parameter,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}
