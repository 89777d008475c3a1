//! # molscene Core Library
//!
//! Converts small molecules given as element-labelled Cartesian coordinates into
//! ball-and-stick scenes for a minimal ray tracer: one sphere per atom and one
//! cylinder per inferred bond.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Atom`, `Scene`,
//!   primitives), pure vector math, the element color and bond cutoff policies,
//!   and the XYZ / `.rt` file codecs.
//!
//! - **[`engine`]: The Logic Core.** Scene configuration and the generator that
//!   performs pairwise bond inference and projects atoms and bonds into
//!   renderable primitives.
//!
//! - **[`workflows`]: The Public API.** End-to-end entry points that read a
//!   structure, generate its scene and report what was produced.

pub mod core;
pub mod engine;
pub mod workflows;
