/// Represents the unpaired-electron state of an atom.
///
/// Radical classification follows the usual spin-multiplicity vocabulary
/// used by structure editors. Most atoms are in the `None` state; the other
/// kinds appear on reactive intermediates such as carbenes and free
/// radicals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Radical {
    /// No unpaired electrons (the common case).
    #[default]
    None,
    /// Two electrons with paired spins on a non-bonding orbital (multiplicity 1).
    Singlet,
    /// One unpaired electron (multiplicity 2), e.g. a methyl radical.
    Doublet,
    /// Two unpaired electrons with parallel spins (multiplicity 3).
    Triplet,
}

/// Classification of a stereocenter mark on an atom.
///
/// The variants are ordered by increasing specificity: `Any` only records
/// that the atom is a stereocenter of unspecified configuration, while the
/// later kinds pin the configuration down to an enhanced-stereochemistry
/// group (`And`, `Or`) or an absolute assignment. Code that needs "a real
/// tetrahedral arrangement" can therefore compare against `Any`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StereocenterKind {
    /// Marked as a stereocenter with no configuration recorded.
    Any,
    /// Member of an "and" enhanced-stereochemistry group (racemic pair).
    And,
    /// Member of an "or" enhanced-stereochemistry group (unknown epimer).
    Or,
    /// Absolute configuration.
    Absolute,
}

/// Stereochemistry descriptor for a tetrahedral stereocenter.
///
/// The `pyramid` lists up to four neighbouring atom indices in the order
/// that establishes the 3-D arrangement around the center. A `None` slot
/// means the slot is vacant (an implicit hydrogen or lone pair occupies
/// that position); slots are never reordered by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stereocenter {
    /// How the configuration is recorded.
    pub kind: StereocenterKind,
    /// Ordered neighbour slots; `Some(i)` is a 0-based atom index.
    pub pyramid: [Option<usize>; 4],
}

impl Stereocenter {
    /// Whether the configuration is specific enough to describe a
    /// tetrahedral arrangement (anything stronger than a bare `Any` mark).
    pub fn is_definite(&self) -> bool {
        self.kind > StereocenterKind::Any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radical_defaults_to_none() {
        assert_eq!(Radical::default(), Radical::None);
    }

    #[test]
    fn stereocenter_kinds_order_by_specificity() {
        assert!(StereocenterKind::Any < StereocenterKind::And);
        assert!(StereocenterKind::And < StereocenterKind::Or);
        assert!(StereocenterKind::Or < StereocenterKind::Absolute);
    }

    #[test]
    fn only_any_marks_are_indefinite() {
        let mut center = Stereocenter {
            kind: StereocenterKind::Any,
            pyramid: [Some(0), Some(1), Some(2), None],
        };
        assert!(!center.is_definite());

        for kind in [
            StereocenterKind::And,
            StereocenterKind::Or,
            StereocenterKind::Absolute,
        ] {
            center.kind = kind;
            assert!(center.is_definite());
        }
    }
}
