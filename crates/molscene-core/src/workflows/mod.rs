//! # Workflows Module
//!
//! High-level entry points that run the whole pipeline: read a structure, infer
//! its bonds, and produce the scene ready for serialization.
//!
//! - **Render Workflow** ([`render`]) - XYZ input to [`Scene`](crate::core::models::scene::Scene),
//!   reporting how many atoms and bonds went into it so callers can tell an
//!   empty molecule apart from a populated one.

pub mod render;
