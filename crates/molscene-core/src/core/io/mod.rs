//! Provides input/output functionality for molecule and scene files.
//!
//! Structures are read from plain XYZ coordinate text ([`xyz`]) and scenes are
//! written in the line-oriented `.rt` format understood by miniRT-style ray
//! tracers ([`rt`]). Both codecs implement the trait-based interface in
//! [`traits`], which adds path-based convenience methods on top of the
//! reader/writer primitives.

pub mod rt;
pub mod traits;
pub mod xyz;
