//! # Chemistry Module
//!
//! The only chemical knowledge the library has: which element labels it
//! recognizes, what color each of them is drawn in, and how far apart two atoms
//! may be while still being drawn as bonded.
//!
//! All lookups are closed-set `match` dispatches with an explicit fallback for
//! any other label. The bond cutoffs are deliberately coarse and label-based;
//! they are not derived from covalent radii.

pub mod bonding;
pub mod element;
pub mod palette;
