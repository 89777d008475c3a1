use super::color::Rgb;
use super::primitives::{Cylinder, Sphere};
use nalgebra::{Point3, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ambient {
    /// Ambient lighting ratio in `[0, 1]`.
    pub ratio: f64,
    pub color: Rgb,
}

impl Default for Ambient {
    fn default() -> Self {
        Self {
            ratio: 0.2,
            color: Rgb::WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point3<f64>,
    pub orientation: Vector3<f64>,
    /// Horizontal field of view in degrees, `0..=180`.
    pub fov_degrees: u8,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3::new(-50.0, 0.0, 20.0),
            orientation: Vector3::new(0.0, 0.0, 1.0),
            fov_degrees: 70,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Point3<f64>,
    /// Brightness ratio in `[0, 1]`.
    pub brightness: f64,
    pub color: Rgb,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Point3::new(-40.0, 50.0, 0.0),
            brightness: 0.6,
            color: Rgb::new(10, 0, 255),
        }
    }
}

/// A complete ball-and-stick scene.
///
/// Spheres keep the order of the atoms they were made from. Cylinders keep the
/// pair enumeration order of bond inference: ascending first atom, then
/// ascending second atom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub ambient: Ambient,
    pub camera: Camera,
    pub light: Light,
    pub spheres: Vec<Sphere>,
    pub cylinders: Vec<Cylinder>,
}

impl Scene {
    pub fn new(ambient: Ambient, camera: Camera, light: Light) -> Self {
        Self {
            ambient,
            camera,
            light,
            spheres: Vec::new(),
            cylinders: Vec::new(),
        }
    }

    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.cylinders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
