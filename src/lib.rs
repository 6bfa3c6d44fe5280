//! 2D self-avoiding lattice polymer Monte Carlo.
//!
//! An athermal chain-of-beads model: every topologically valid local move
//! (end move, corner flip, crankshaft) is accepted unconditionally, and
//! the driver records end-to-end distance, radius of gyration and the
//! nonbonded contact count along the trajectory.

pub mod driver;
pub mod error;
pub mod lattice;
pub mod moves;
pub mod observables;
