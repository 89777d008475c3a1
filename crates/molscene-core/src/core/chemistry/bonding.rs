use super::element::Element;

/// Cutoff in Angstroms applied to every pair without a dedicated rule.
pub const DEFAULT_BOND_CUTOFF: f64 = 1.6;

/// Cutoff in Angstroms for a phosphorus-oxygen pair, in either order.
pub const PHOSPHORUS_OXYGEN_BOND_CUTOFF: f64 = 1.8;

/// Label-based bond cutoffs.
///
/// Two atoms are drawn as bonded when their distance is strictly below the
/// cutoff returned by [`BondThresholds::threshold`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondThresholds {
    pub default_cutoff: f64,
    pub phosphorus_oxygen_cutoff: f64,
}

impl Default for BondThresholds {
    fn default() -> Self {
        Self {
            default_cutoff: DEFAULT_BOND_CUTOFF,
            phosphorus_oxygen_cutoff: PHOSPHORUS_OXYGEN_BOND_CUTOFF,
        }
    }
}

impl BondThresholds {
    pub fn threshold(&self, first: &str, second: &str) -> f64 {
        match (Element::from_label(first), Element::from_label(second)) {
            (Some(Element::Phosphorus), Some(Element::Oxygen))
            | (Some(Element::Oxygen), Some(Element::Phosphorus)) => self.phosphorus_oxygen_cutoff,
            _ => self.default_cutoff,
        }
    }
}

/// Bond cutoff for a pair of element labels under the default table.
pub fn bond_threshold(first: &str, second: &str) -> f64 {
    BondThresholds::default().threshold(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phosphorus_oxygen_override_is_order_independent() {
        assert_eq!(bond_threshold("P", "O"), 1.8);
        assert_eq!(bond_threshold("O", "P"), 1.8);
    }

    #[test]
    fn every_other_pair_uses_default_cutoff() {
        let labels = ["C", "N", "O", "H", "P", "S", "Fe", "p", "o", ""];
        for a in labels {
            for b in labels {
                if matches!((a, b), ("P", "O") | ("O", "P")) {
                    continue;
                }
                assert_eq!(bond_threshold(a, b), 1.6, "pair ({a}, {b})");
            }
        }
    }

    #[test]
    fn configured_cutoffs_replace_defaults() {
        let thresholds = BondThresholds {
            default_cutoff: 2.0,
            phosphorus_oxygen_cutoff: 2.5,
        };
        assert_eq!(thresholds.threshold("C", "H"), 2.0);
        assert_eq!(thresholds.threshold("O", "P"), 2.5);
        assert_eq!(thresholds.threshold("P", "P"), 2.0);
    }
}
