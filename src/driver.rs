//! The Monte Carlo step loop.
//!
//! The model is athermal: every structurally valid proposal is accepted
//! unconditionally, so the loop reduces to pick a move kind, ask the
//! proposal engine, commit or skip. One seeded `ChaCha20Rng` stream is
//! consumed in a fixed order per step (move-kind draw first, then the
//! draws documented in [`crate::moves`]), so a fixed seed reproduces an
//! identical trajectory.

use crate::error::{ConfigError, SimError};
use crate::lattice::Chain;
use crate::moves::{self, MoveKind};
use crate::observables::{self, Sample};
use rand::distributions::{Distribution, WeightedIndex};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Move-kind selection weights. The 0.4/0.4/0.2 split is an empirical
/// default, not a constant of the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveWeights {
    pub end: f64,
    pub corner: f64,
    pub crankshaft: f64,
}

impl Default for MoveWeights {
    fn default() -> Self {
        Self { end: 0.4, corner: 0.4, crankshaft: 0.2 }
    }
}

impl MoveWeights {
    fn as_pairs(self) -> [(MoveKind, f64); 3] {
        [
            (MoveKind::End, self.end),
            (MoveKind::CornerFlip, self.corner),
            (MoveKind::Crankshaft, self.crankshaft),
        ]
    }
}

/// Run-time configuration (single source of truth).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub n_beads: usize,
    pub n_steps: u64,
    /// Observables (and frames) are recorded at accepted steps whose step
    /// number is a multiple of this.
    pub sample_every: u64,
    /// Cadence of the global connectivity/self-avoidance re-checks;
    /// 0 disables them.
    pub check_every: u64,
    pub weights: MoveWeights,
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            n_beads: 6,
            n_steps: 20_000,
            sample_every: 50,
            check_every: 2_000,
            weights: MoveWeights::default(),
            seed: 123,
        }
    }
}

impl RunConfig {
    /// Reject impossible parameter sets before any step executes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_beads == 0 {
            return Err(ConfigError::EmptyChain);
        }
        if self.n_steps == 0 {
            return Err(ConfigError::NoSteps);
        }
        if self.sample_every == 0 {
            return Err(ConfigError::NoSampleCadence);
        }
        for (kind, w) in self.weights.as_pairs() {
            if w < 0.0 {
                return Err(ConfigError::NegativeWeight { kind, weight: w });
            }
        }
        let sum = self.weights.end + self.weights.corner + self.weights.crankshaft;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::BadWeights { sum });
        }
        // A move that can never act on this chain must not carry weight.
        for (kind, w) in self.weights.as_pairs() {
            if w > 0.0 && self.n_beads < kind.min_beads() {
                return Err(ConfigError::ChainTooShort {
                    kind,
                    min: kind.min_beads(),
                    n: self.n_beads,
                });
            }
        }
        Ok(())
    }
}

/// Receives sampled observables and chain snapshots at the sampling
/// cadence. Implementations must absorb their own I/O failures: a broken
/// sink is a tooling concern and must never abort the run.
pub trait Sink {
    fn on_sample(&mut self, sample: &Sample) {
        let _ = sample;
    }
    fn on_frame(&mut self, step: u64, chain: &Chain) {
        let _ = (step, chain);
    }
}

/// Discards everything; for callers that only want the return value.
pub struct NullSink;

impl Sink for NullSink {}

/// Final state plus the sampled time series and acceptance bookkeeping.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub chain: Chain,
    pub samples: Vec<Sample>,
    /// Committed proposals.
    pub accepted: u64,
    /// Every step counts as an attempt, including rejected proposals.
    pub attempted: u64,
}

impl RunOutput {
    pub fn acceptance(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempted as f64
        }
    }
}

/// Run a trajectory, discarding per-sample callbacks.
pub fn run(cfg: &RunConfig) -> Result<RunOutput, SimError> {
    run_with_sink(cfg, &mut NullSink)
}

/// Run a trajectory, forwarding each sample (and the current chain) to
/// `sink` at the sampling cadence.
pub fn run_with_sink(cfg: &RunConfig, sink: &mut dyn Sink) -> Result<RunOutput, SimError> {
    cfg.validate()?;

    let mut rng = ChaCha20Rng::seed_from_u64(cfg.seed);
    let kinds = [MoveKind::End, MoveKind::CornerFlip, MoveKind::Crankshaft];
    let w = cfg.weights;
    let pick = WeightedIndex::new([w.end, w.corner, w.crankshaft])
        .map_err(|_| ConfigError::BadWeights { sum: w.end + w.corner + w.crankshaft })?;

    let mut chain = Chain::straight(cfg.n_beads);
    let mut samples = Vec::new();
    let mut accepted = 0u64;
    let mut attempted = 0u64;

    for step in 1..=cfg.n_steps {
        attempted += 1;
        let kind = kinds[pick.sample(&mut rng)];
        let Some(next) = moves::propose(kind, &chain, &mut rng) else {
            // Rejected proposal: expected and frequent, nothing to undo.
            continue;
        };
        chain = next;
        accepted += 1;

        if step % cfg.sample_every == 0 {
            let s = observables::sample(step, &chain);
            sink.on_sample(&s);
            sink.on_frame(step, &chain);
            samples.push(s);
        }

        if cfg.check_every != 0 && step % cfg.check_every == 0 {
            if !chain.check_connectivity() {
                return Err(SimError::ConnectivityViolated {
                    step,
                    coords: chain.positions().to_vec(),
                });
            }
            if !chain.check_self_avoiding() {
                return Err(SimError::OverlapDetected {
                    step,
                    coords: chain.positions().to_vec(),
                });
            }
        }
    }

    Ok(RunOutput { chain, samples, accepted, attempted })
}
