//! # Engine Module
//!
//! Turns an atom list into a scene.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Lighting, camera, primitive styling and bond
//!   cutoffs, with a validating builder
//! - **Bond Inference** ([`bonds`]) - Pairwise distance classification over every
//!   unordered atom pair
//! - **Primitive Generation** ([`generator`]) - Spheres for atoms, cylinders for
//!   bonds, assembled into a [`Scene`](crate::core::models::scene::Scene)
//!
//! Generation is a single pass over the atoms plus the O(n²) pair loop. It never
//! fails and produces identical output for identical input.

pub mod bonds;
pub mod config;
pub mod generator;
