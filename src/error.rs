//! Error taxonomy.
//!
//! Rejected proposals are not errors (they are an `Option::None` from the
//! move engine). Configuration problems surface before the first step;
//! invariant violations abort the run and carry the offending snapshot.

use crate::lattice::Pos;
use crate::moves::MoveKind;
use thiserror::Error;

/// Caller errors caught at run setup, before any step executes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("chain needs at least one bead")]
    EmptyChain,
    #[error("step budget must be positive")]
    NoSteps,
    #[error("sampling cadence must be positive")]
    NoSampleCadence,
    #[error("weight for the {kind} move must be non-negative, got {weight}")]
    NegativeWeight { kind: MoveKind, weight: f64 },
    #[error("move weights must sum to 1, got {sum}")]
    BadWeights { sum: f64 },
    #[error("the {kind} move has nonzero weight but needs at least {min} beads, chain has {n}")]
    ChainTooShort { kind: MoveKind, min: usize, n: usize },
}

/// Fatal failures. An invariant violation means the move engine committed
/// a structurally invalid state; the run is aborted, never resumed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("connectivity violated at step {step} (bug in move logic)")]
    ConnectivityViolated { step: u64, coords: Vec<Pos> },
    #[error("overlap detected at step {step} (bug in occupancy bookkeeping)")]
    OverlapDetected { step: u64, coords: Vec<Pos> },
}
