/// Represents the covalent bond order between two atoms.
///
/// Aromatic bonds are kept distinct from the integer orders rather than
/// being resolved to alternating single/double Kekulé forms, because
/// downstream formats represent them natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondOrder {
    /// A single bond (the common case).
    #[default]
    Single,
    /// A double bond.
    Double,
    /// A triple bond.
    Triple,
    /// A delocalised aromatic bond.
    Aromatic,
}

impl BondOrder {
    /// Returns the conventional numeric order, with aromatic bonds mapped
    /// to `1.5`.
    pub fn as_f64(&self) -> f64 {
        match self {
            BondOrder::Single => 1.0,
            BondOrder::Double => 2.0,
            BondOrder::Triple => 3.0,
            BondOrder::Aromatic => 1.5,
        }
    }
}

/// Wedge annotation on a bond, read from the first atom towards the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondDirection {
    /// A plain bond with no out-of-plane annotation.
    #[default]
    None,
    /// A solid wedge pointing up out of the drawing plane.
    Up,
    /// A hashed wedge pointing down below the drawing plane.
    Down,
    /// An explicit "unknown" squiggle.
    Either,
}

/// Relative arrangement of the reference substituents across a double bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CisTransParity {
    /// Reference substituents lie on the same side.
    Cis,
    /// Reference substituents lie on opposite sides.
    Trans,
}

/// Cis/trans descriptor attached to a double bond.
///
/// The four `substituents` slots list neighbour atom indices in pairs: the
/// first two flank one end of the bond and the last two flank the other.
/// A `None` slot stands for an implicit hydrogen. The `parity` relates the
/// first substituent of each pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CisTrans {
    /// Same-side or opposite-side arrangement of the reference substituents.
    pub parity: CisTransParity,
    /// Neighbour slots, two per bond end; `Some(i)` is a 0-based atom index.
    pub substituents: [Option<usize>; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_orders_match_chemistry_conventions() {
        assert_eq!(BondOrder::Single.as_f64(), 1.0);
        assert_eq!(BondOrder::Double.as_f64(), 2.0);
        assert_eq!(BondOrder::Triple.as_f64(), 3.0);
        assert_eq!(BondOrder::Aromatic.as_f64(), 1.5);
    }

    #[test]
    fn plain_bonds_are_the_default() {
        assert_eq!(BondOrder::default(), BondOrder::Single);
        assert_eq!(BondDirection::default(), BondDirection::None);
    }
}
