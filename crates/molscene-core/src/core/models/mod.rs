//! # Core Models Module
//!
//! Data structures describing the input molecule and the output scene.
//!
//! ## Key Components
//!
//! - [`atom`] - An element label with a Cartesian position, as read from one input line
//! - [`color`] - 8-bit RGB triples used by every colored primitive
//! - [`primitives`] - Spheres for atoms and cylinders for bonds
//! - [`scene`] - Ambient light, camera, light source and the ordered primitive lists
//!
//! ## Usage
//!
//! ```ignore
//! use molscene::core::models::atom::Atom;
//! use nalgebra::Point3;
//!
//! let carbon = Atom::new("C", Point3::new(0.0, 0.0, 0.0));
//! assert_eq!(carbon.element, "C");
//! ```

pub mod atom;
pub mod color;
pub mod primitives;
pub mod scene;
