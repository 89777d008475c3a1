//! # Core Module
//!
//! Fundamental building blocks shared by the scene engine and the workflows.
//!
//! ## Architecture
//!
//! - **Molecular and Scene Representation** ([`models`]) - Atoms, colors, spheres,
//!   cylinders and the assembled scene
//! - **Vector Math** ([`utils`]) - Distances, normalization and midpoints
//! - **Chemical Policy** ([`chemistry`]) - Element recognition, per-element colors
//!   and label-based bond cutoffs
//! - **File I/O** ([`io`]) - Reading XYZ coordinate files and writing `.rt` scenes
//!
//! Everything in this module is stateless: values are built once and never
//! mutated afterwards.

pub mod chemistry;
pub mod io;
pub mod models;
pub mod utils;
