//! Unit-tests for the lattice primitives and the chain/occupancy state.

use saw::lattice::{is_neighbor, neighbors, Chain, DIRS};

#[test]
fn straight_chain_layout_and_occupancy() {
    let chain = Chain::straight(5);
    assert_eq!(chain.len(), 5);
    assert_eq!(chain.positions(), &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);

    // The occupancy index is the exact inverse of the coordinate sequence.
    assert!(chain.check_occupancy());
    for (i, &p) in chain.positions().iter().enumerate() {
        assert_eq!(chain.bead_at(p), Some(i));
    }
    assert!(!chain.is_occupied((5, 0)));
    assert!(!chain.is_occupied((0, 1)));

    assert!(chain.check_connectivity());
    assert!(chain.check_self_avoiding());
}

#[test]
fn neighbor_order_is_fixed() {
    // Downstream candidate selection indexes into this order, so it is
    // part of the reproducibility contract.
    assert_eq!(DIRS, [(1, 0), (-1, 0), (0, 1), (0, -1)]);
    assert_eq!(neighbors((2, -1)), [(3, -1), (1, -1), (2, 0), (2, -2)]);
}

#[test]
fn neighbor_predicate() {
    assert!(is_neighbor((0, 0), (1, 0)));
    assert!(is_neighbor((0, 0), (0, -1)));
    assert!(!is_neighbor((0, 0), (0, 0)));
    assert!(!is_neighbor((0, 0), (1, 1)));
    assert!(!is_neighbor((0, 0), (2, 0)));
}

#[test]
fn from_coords_accepts_valid_walks() {
    let chain = Chain::from_coords(vec![(0, 0), (1, 0), (1, 1), (0, 1)]).unwrap();
    assert!(chain.check_connectivity());
    assert!(chain.check_self_avoiding());
    assert!(chain.check_occupancy());
}

#[test]
fn from_coords_rejects_broken_walks() {
    // Disconnected.
    assert!(Chain::from_coords(vec![(0, 0), (2, 0)]).is_none());
    // Diagonal step.
    assert!(Chain::from_coords(vec![(0, 0), (1, 1)]).is_none());
    // Revisited site.
    assert!(Chain::from_coords(vec![(0, 0), (1, 0), (0, 0)]).is_none());
    // Empty.
    assert!(Chain::from_coords(vec![]).is_none());
}

#[test]
fn recentering_shifts_by_rounded_centroid() {
    let chain = Chain::straight(3); // centroid (1, 0)
    assert_eq!(chain.recentered(), vec![(-1, 0), (0, 0), (1, 0)]);

    // Recentering is a view: the chain itself is untouched.
    assert_eq!(chain.positions(), &[(0, 0), (1, 0), (2, 0)]);
}

#[test]
#[should_panic]
fn straight_chain_rejects_zero_beads() {
    let _ = Chain::straight(0);
}
