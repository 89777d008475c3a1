use crate::core::chemistry::bonding::BondThresholds;
use crate::core::models::atom::Atom;
use crate::core::utils::geometry::distance;
use tracing::trace;

/// A bonded atom pair, identified by positions in the atom list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    /// Index of the earlier atom; always less than `second`.
    pub first: usize,
    pub second: usize,
    pub distance: f64,
}

/// Classifies every unordered atom pair and returns the bonded ones.
///
/// Pairs are visited with `first` ascending and, for each `first`, `second`
/// ascending from `first + 1`, so the result is in that order. A pair is
/// bonded only when its distance is strictly below the cutoff for its labels.
pub fn infer_bonds(atoms: &[Atom], thresholds: &BondThresholds) -> Vec<Bond> {
    let mut bonds = Vec::new();

    for (i, a) in atoms.iter().enumerate() {
        for (offset, b) in atoms[i + 1..].iter().enumerate() {
            let j = i + 1 + offset;
            let d = distance(&a.position, &b.position);
            let cutoff = thresholds.threshold(&a.element, &b.element);

            if d < cutoff {
                trace!(
                    "Bond {}{}-{}{}: {:.4} < {:.2}",
                    a.element, i, b.element, j, d, cutoff
                );
                bonds.push(Bond {
                    first: i,
                    second: j,
                    distance: d,
                });
            }
        }
    }

    bonds
}
