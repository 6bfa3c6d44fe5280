//! Local move proposals for the self-avoiding chain.
//!
//! Each proposal is pure with respect to the caller's state: it either
//! returns a fully built replacement chain or `None`, never a partial
//! mutation. The driver decides whether to commit the result (for this
//! athermal model it always does).
//!
//! RNG draw order per call is fixed for reproducibility: the end move
//! draws the terminus coin first and the candidate index second; the two
//! internal moves draw a single bead index.

use crate::lattice::{is_neighbor, neighbors, Chain, Pos};
use rand::Rng;
use std::fmt;

/// The three local move kinds, selected per step by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    End,
    CornerFlip,
    Crankshaft,
}

impl MoveKind {
    /// Smallest chain this move can act on.
    pub fn min_beads(self) -> usize {
        match self {
            MoveKind::End => 2,
            MoveKind::CornerFlip => 3,
            MoveKind::Crankshaft => 4,
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoveKind::End => "end",
            MoveKind::CornerFlip => "corner flip",
            MoveKind::Crankshaft => "crankshaft",
        })
    }
}

/// Dispatch to the proposal function for `kind`.
pub fn propose(kind: MoveKind, chain: &Chain, rng: &mut impl Rng) -> Option<Chain> {
    match kind {
        MoveKind::End => propose_end_move(chain, rng),
        MoveKind::CornerFlip => propose_corner_flip(chain, rng),
        MoveKind::Crankshaft => propose_crankshaft(chain, rng),
    }
}

/// Relocate one terminus to a free neighbor of its anchor bead.
pub fn propose_end_move(chain: &Chain, rng: &mut impl Rng) -> Option<Chain> {
    let n = chain.len();
    if n < 2 {
        return None;
    }
    let end_idx = if rng.gen_bool(0.5) { 0 } else { n - 1 };
    let anchor_idx = if end_idx == 0 { 1 } else { n - 2 };
    let anchor = chain.pos(anchor_idx);

    // The old terminus is still in the occupancy index, so the filter
    // excludes it along with every other occupied site.
    let cands: Vec<Pos> = neighbors(anchor)
        .into_iter()
        .filter(|&p| !chain.is_occupied(p))
        .collect();
    if cands.is_empty() {
        return None;
    }
    let new_end = cands[rng.gen_range(0..cands.len())];

    let mut next = chain.clone();
    next.relocate(end_idx, new_end);
    Some(next)
}

/// Flip an internal bead to the opposite corner of the unit square spanned
/// by its two chain neighbors.
pub fn propose_corner_flip(chain: &Chain, rng: &mut impl Rng) -> Option<Chain> {
    let n = chain.len();
    if n < 3 {
        return None;
    }
    let i = rng.gen_range(1..n - 1);
    let prev = chain.pos(i - 1);
    let cur = chain.pos(i);
    let next = chain.pos(i + 1);
    debug_assert!(is_neighbor(prev, cur) && is_neighbor(cur, next));

    // A straight run has no opposite corner.
    if (prev.0 == cur.0 && cur.0 == next.0) || (prev.1 == cur.1 && cur.1 == next.1) {
        return None;
    }
    let flipped = (prev.0 + next.0 - cur.0, prev.1 + next.1 - cur.1);
    if chain.is_occupied(flipped) {
        return None;
    }

    let mut out = chain.clone();
    out.relocate(i, flipped);
    Some(out)
}

/// 180-degree flip of a two-bead segment about its flanking beads.
///
/// Beads `b = chain[i]` and `c = chain[i+1]` reflect through the midpoint
/// of their flanks `a` and `d` (which must already be lattice neighbors).
/// The reflected segment rejoins the backbone in reverse order: the image
/// of `c` bonds to `a` and the image of `b` bonds to `d`, so bead `i`
/// receives `a + d - c` and bead `i + 1` receives `a + d - b`.
pub fn propose_crankshaft(chain: &Chain, rng: &mut impl Rng) -> Option<Chain> {
    let n = chain.len();
    if n < 4 {
        return None;
    }
    let i = rng.gen_range(1..n - 2);
    let a = chain.pos(i - 1);
    let b = chain.pos(i);
    let c = chain.pos(i + 1);
    let d = chain.pos(i + 2);

    if !is_neighbor(a, d) {
        return None;
    }

    let new_b = (a.0 + d.0 - b.0, a.1 + d.1 - b.1);
    let new_c = (a.0 + d.0 - c.0, a.1 + d.1 - c.1);
    if new_b == new_c {
        return None;
    }
    // Reconstructed bonds along the new backbone path a -> new_c -> new_b -> d.
    if !(is_neighbor(a, new_c) && is_neighbor(new_c, new_b) && is_neighbor(new_b, d)) {
        return None;
    }
    // Overlap check: the moved beads may land on the two sites they vacate.
    let collides = |p: Pos| matches!(chain.bead_at(p), Some(j) if j != i && j != i + 1);
    if collides(new_b) || collides(new_c) {
        return None;
    }

    let mut out = chain.clone();
    out.relocate_pair(i, new_c, new_b);
    Some(out)
}
