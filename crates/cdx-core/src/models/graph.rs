use super::atom::{Radical, Stereocenter};
use super::bond::{BondDirection, BondOrder, CisTrans};
use nalgebra::Point3;

/// Read-only capability interface over an externally owned molecular graph.
///
/// Atoms and bonds are addressed by dense indices `0..atom_count()` and
/// `0..bond_count()`, which must stay stable for the duration of one encode
/// call. Any backing representation (arena, columnar store, wrapper over a
/// foreign toolkit) can be serialized by implementing the six required
/// accessors; the provided methods cover attributes a store may not track,
/// and their defaults describe a plain, coordinate-free, stereo-free graph.
pub trait MoleculeView {
    /// Returns the number of atoms in the graph.
    fn atom_count(&self) -> usize;

    /// Returns the number of bonds in the graph.
    fn bond_count(&self) -> usize;

    /// Returns the atomic number of the given atom.
    fn atomic_number(&self, atom: usize) -> u8;

    /// Returns the index of the first atom of the given bond.
    fn bond_begin(&self, bond: usize) -> usize;

    /// Returns the index of the second atom of the given bond.
    fn bond_end(&self, bond: usize) -> usize;

    /// Returns the order of the given bond.
    fn bond_order(&self, bond: usize) -> BondOrder;

    /// Returns the mass number of the given atom, with `0` standing for
    /// natural isotopic abundance.
    fn isotope(&self, _atom: usize) -> u16 {
        0
    }

    /// Returns the formal charge of the given atom.
    fn formal_charge(&self, _atom: usize) -> i8 {
        0
    }

    /// Returns the radical state of the given atom.
    fn radical(&self, _atom: usize) -> Radical {
        Radical::None
    }

    /// Returns the number of explicit bonds incident to the given atom.
    ///
    /// The default derives the count by scanning the bond list; stores that
    /// keep adjacency should override it with a direct lookup.
    fn degree(&self, atom: usize) -> usize {
        (0..self.bond_count())
            .filter(|&bond| self.bond_begin(bond) == atom || self.bond_end(bond) == atom)
            .count()
    }

    /// Whether the given atom is an R-group attachment site rather than a
    /// concrete element.
    fn is_r_site(&self, _atom: usize) -> bool {
        false
    }

    /// Whether the given atom is a pseudoatom (an arbitrary textual label
    /// with no atomic number).
    fn is_pseudoatom(&self, _atom: usize) -> bool {
        false
    }

    /// Returns the tetrahedral stereo descriptor of the given atom, if the
    /// store has computed one.
    fn stereocenter(&self, _atom: usize) -> Option<Stereocenter> {
        None
    }

    /// Whether an explicit hydrogen count should be recorded for the given
    /// atom (typically true for query features or unusual valences).
    fn should_write_hydrogen_count(&self, _atom: usize) -> bool {
        false
    }

    /// Returns the total hydrogen count of the given atom, implicit
    /// hydrogens included.
    ///
    /// # Return
    ///
    /// `None` when the count cannot be established (ambiguous valence,
    /// query atom). Consumers treat that as "leave the count unstated", not
    /// as an error.
    fn total_hydrogens(&self, _atom: usize) -> Option<u32> {
        None
    }

    /// Returns the position of the given atom in the graph's coordinate
    /// space. Only meaningful when [`has_coordinates`](Self::has_coordinates)
    /// reports `true`; planar layouts leave `z` at zero.
    fn position(&self, _atom: usize) -> Point3<f64> {
        Point3::origin()
    }

    /// Whether the graph carries explicit atom coordinates.
    fn has_coordinates(&self) -> bool {
        false
    }

    /// Whether the molecule as a whole carries an absolute-chirality flag.
    fn is_chiral(&self) -> bool {
        false
    }

    /// Returns the wedge annotation of the given bond, read from its first
    /// atom towards its second.
    fn bond_direction(&self, _bond: usize) -> BondDirection {
        BondDirection::None
    }

    /// Returns the cis/trans descriptor of the given double bond, if the
    /// store has computed one.
    fn cis_trans(&self, _bond: usize) -> Option<CisTrans> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PropaneSkeleton;

    impl MoleculeView for PropaneSkeleton {
        fn atom_count(&self) -> usize {
            3
        }

        fn bond_count(&self) -> usize {
            2
        }

        fn atomic_number(&self, _atom: usize) -> u8 {
            6
        }

        fn bond_begin(&self, bond: usize) -> usize {
            bond
        }

        fn bond_end(&self, bond: usize) -> usize {
            bond + 1
        }

        fn bond_order(&self, _bond: usize) -> BondOrder {
            BondOrder::Single
        }
    }

    #[test]
    fn default_degree_counts_incident_bonds() {
        let mol = PropaneSkeleton;
        assert_eq!(mol.degree(0), 1);
        assert_eq!(mol.degree(1), 2);
        assert_eq!(mol.degree(2), 1);
    }

    #[test]
    fn defaults_describe_a_plain_graph() {
        let mol = PropaneSkeleton;
        assert_eq!(mol.isotope(0), 0);
        assert_eq!(mol.formal_charge(0), 0);
        assert_eq!(mol.radical(0), Radical::None);
        assert!(!mol.is_r_site(0));
        assert!(!mol.is_pseudoatom(0));
        assert!(mol.stereocenter(0).is_none());
        assert!(!mol.should_write_hydrogen_count(0));
        assert!(mol.total_hydrogens(0).is_none());
        assert!(!mol.has_coordinates());
        assert!(!mol.is_chiral());
        assert_eq!(mol.position(0), Point3::origin());
        assert_eq!(mol.bond_direction(0), BondDirection::None);
        assert!(mol.cis_trans(0).is_none());
    }
}
