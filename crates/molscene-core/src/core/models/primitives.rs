use super::color::Rgb;
use nalgebra::{Point3, Vector3};

/// The sphere drawn for one atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3<f64>,
    pub radius: f64,
    pub color: Rgb,
}

/// The cylinder drawn for one bond.
///
/// `center` is the midpoint of the bonded atoms and `axis` the unit vector
/// pointing from the first atom to the second; `length` spans the full
/// interatomic distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub center: Point3<f64>,
    pub axis: Vector3<f64>,
    pub radius: f64,
    pub length: f64,
    pub color: Rgb,
}
