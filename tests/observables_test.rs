//! Unit-tests for the scalar observables, against hand-computed values.

use saw::lattice::Chain;
use saw::observables::{count_contacts, end_to_end_distance, radius_of_gyration, sample};

fn close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-12, "{a} != {b}");
}

#[test]
fn three_bead_line() {
    let chain = Chain::straight(3);
    close(end_to_end_distance(&chain), 2.0);
    close(radius_of_gyration(&chain), (2.0f64 / 3.0).sqrt());
    assert_eq!(count_contacts(&chain), 0);
}

#[test]
fn unit_square() {
    let chain = Chain::from_coords(vec![(0, 0), (1, 0), (1, 1), (0, 1)]).unwrap();
    close(end_to_end_distance(&chain), 1.0);
    // Centroid (0.5, 0.5), every bead at squared distance 0.5.
    close(radius_of_gyration(&chain), 0.5f64.sqrt());
    // Beads 0 and 3 are lattice neighbors with |i-j| = 3: one contact,
    // counted once; the three bonded pairs are excluded.
    assert_eq!(count_contacts(&chain), 1);
}

#[test]
fn single_bead_degenerates_to_zero() {
    let chain = Chain::straight(1);
    close(end_to_end_distance(&chain), 0.0);
    close(radius_of_gyration(&chain), 0.0);
    assert_eq!(count_contacts(&chain), 0);
}

#[test]
fn hairpin_contacts() {
    // A 6-bead hairpin: two antiparallel strands of three beads.
    //   (0,0)-(1,0)-(2,0)
    //                 |
    //   (0,1)-(1,1)-(2,1)
    let chain =
        Chain::from_coords(vec![(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]).unwrap();
    // Nonbonded neighbor pairs: (1,4) and (0,5).
    assert_eq!(count_contacts(&chain), 2);
}

#[test]
fn sample_bundles_all_three() {
    let chain = Chain::straight(3);
    let s = sample(150, &chain);
    assert_eq!(s.step, 150);
    close(s.end_to_end, 2.0);
    close(s.radius_of_gyration, (2.0f64 / 3.0).sqrt());
    assert_eq!(s.contacts, 0);
}
