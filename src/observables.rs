//! Scalar observables of a chain snapshot. All pure functions.

use crate::lattice::{neighbors, Chain};

/// One row of the sampled time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub step: u64,
    /// Euclidean end-to-end distance.
    pub end_to_end: f64,
    /// RMS distance of beads from their centroid.
    pub radius_of_gyration: f64,
    /// Nonbonded nearest-neighbor contacts.
    pub contacts: usize,
}

/// Euclidean distance between the first and last bead.
pub fn end_to_end_distance(chain: &Chain) -> f64 {
    let (x0, y0) = chain.pos(0);
    let (x1, y1) = chain.pos(chain.len() - 1);
    let (dx, dy) = ((x1 - x0) as f64, (y1 - y0) as f64);
    (dx * dx + dy * dy).sqrt()
}

/// Root-mean-square distance of all beads from their centroid.
pub fn radius_of_gyration(chain: &Chain) -> f64 {
    let n = chain.len() as f64;
    let xcm = chain.positions().iter().map(|p| p.0 as f64).sum::<f64>() / n;
    let ycm = chain.positions().iter().map(|p| p.1 as f64).sum::<f64>() / n;
    let rg2 = chain
        .positions()
        .iter()
        .map(|&(x, y)| {
            let (dx, dy) = (x as f64 - xcm, y as f64 - ycm);
            dx * dx + dy * dy
        })
        .sum::<f64>()
        / n;
    rg2.sqrt()
}

/// Count unordered bead pairs `(i, j)` with `|i - j| > 1` on adjacent
/// lattice sites. Probes the occupancy index around each bead, so it is
/// O(N) rather than an O(N^2) pair scan; `j > i + 1` applies both the
/// `i < j` ordering and the bonded-pair exclusion in one test.
pub fn count_contacts(chain: &Chain) -> usize {
    let mut contacts = 0;
    for (i, &p) in chain.positions().iter().enumerate() {
        for q in neighbors(p) {
            if let Some(j) = chain.bead_at(q) {
                if j > i + 1 {
                    contacts += 1;
                }
            }
        }
    }
    contacts
}

/// Snapshot all observables at `step`.
pub fn sample(step: u64, chain: &Chain) -> Sample {
    Sample {
        step,
        end_to_end: end_to_end_distance(chain),
        radius_of_gyration: radius_of_gyration(chain),
        contacts: count_contacts(chain),
    }
}
