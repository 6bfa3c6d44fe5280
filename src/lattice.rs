//! 2D lattice primitives and the chain/occupancy state.
//!
//! The chain is held twice: as the ordered bead coordinate sequence and as
//! the inverse site -> bead-index map. Every mutation goes through
//! `Chain::relocate` / `Chain::relocate_pair` so the two stay synchronized
//! within a single logical step.

use std::collections::{HashMap, HashSet};

/// A lattice site, addressed by integer coordinates.
pub type Pos = (i32, i32);

/// Fixed neighbor offsets. The order is part of the determinism contract:
/// randomized candidate selection downstream indexes into lists built in
/// this order.
pub const DIRS: [Pos; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four sites at unit Manhattan distance from `p`, in `DIRS` order.
pub fn neighbors(p: Pos) -> [Pos; 4] {
    DIRS.map(|(dx, dy)| (p.0 + dx, p.1 + dy))
}

/// True iff `a` and `b` are adjacent lattice sites (Manhattan distance 1).
pub fn is_neighbor(a: Pos, b: Pos) -> bool {
    (a.0 - b.0).abs() + (a.1 - b.1).abs() == 1
}

/// Bead coordinates in backbone order plus the inverse site -> index map.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    coords: Vec<Pos>,
    occupied: HashMap<Pos, usize>,
}

impl Chain {
    /// The standard initial condition: bead `i` at `(i, 0)`.
    ///
    /// Panics if `n == 0`; the lattice itself is unbounded, so there is no
    /// upper limit.
    pub fn straight(n: usize) -> Self {
        assert!(n >= 1, "chain needs at least one bead");
        let coords: Vec<Pos> = (0..n).map(|i| (i as i32, 0)).collect();
        let occupied = coords.iter().copied().enumerate().map(|(i, p)| (p, i)).collect();
        Self { coords, occupied }
    }

    /// Build a chain from an explicit coordinate sequence, or `None` if the
    /// sequence is empty, not connected, or revisits a site.
    pub fn from_coords(coords: Vec<Pos>) -> Option<Self> {
        if coords.is_empty() {
            return None;
        }
        let occupied = coords.iter().copied().enumerate().map(|(i, p)| (p, i)).collect();
        let chain = Self { coords, occupied };
        (chain.check_connectivity() && chain.check_self_avoiding()).then_some(chain)
    }

    /// Number of beads.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Bead coordinates in backbone order.
    #[inline]
    pub fn positions(&self) -> &[Pos] {
        &self.coords
    }

    /// Position of bead `i`.
    #[inline]
    pub fn pos(&self, i: usize) -> Pos {
        self.coords[i]
    }

    /// Index of the bead occupying `p`, if any.
    #[inline]
    pub fn bead_at(&self, p: Pos) -> Option<usize> {
        self.occupied.get(&p).copied()
    }

    #[inline]
    pub fn is_occupied(&self, p: Pos) -> bool {
        self.occupied.contains_key(&p)
    }

    /// Move bead `i` to `to`, keeping the occupancy index in sync.
    /// Caller guarantees `to` is unoccupied.
    pub(crate) fn relocate(&mut self, i: usize, to: Pos) {
        let from = self.coords[i];
        self.occupied.remove(&from);
        self.occupied.insert(to, i);
        self.coords[i] = to;
    }

    /// Move beads `i` and `i + 1` together. Both old sites are vacated
    /// before the new ones are claimed, so the targets may reuse them.
    pub(crate) fn relocate_pair(&mut self, i: usize, to_i: Pos, to_j: Pos) {
        let from_i = self.coords[i];
        let from_j = self.coords[i + 1];
        self.occupied.remove(&from_i);
        self.occupied.remove(&from_j);
        self.occupied.insert(to_i, i);
        self.occupied.insert(to_j, i + 1);
        self.coords[i] = to_i;
        self.coords[i + 1] = to_j;
    }

    /// True iff every consecutive bead pair is a lattice-neighbor pair.
    pub fn check_connectivity(&self) -> bool {
        self.coords.windows(2).all(|w| is_neighbor(w[0], w[1]))
    }

    /// True iff no site is visited twice.
    pub fn check_self_avoiding(&self) -> bool {
        let sites: HashSet<Pos> = self.coords.iter().copied().collect();
        sites.len() == self.coords.len()
    }

    /// True iff the occupancy index is the exact inverse of the coordinate
    /// sequence. Only violated by a bug in the move bookkeeping.
    pub fn check_occupancy(&self) -> bool {
        self.occupied.len() == self.coords.len()
            && self
                .coords
                .iter()
                .enumerate()
                .all(|(i, p)| self.occupied.get(p) == Some(&i))
    }

    /// Coordinates shifted so the rounded centroid sits at the origin.
    /// Visualization helper only; never fed back into the simulation.
    pub fn recentered(&self) -> Vec<Pos> {
        let n = self.coords.len() as f64;
        let xcm = self.coords.iter().map(|p| p.0 as f64).sum::<f64>() / n;
        let ycm = self.coords.iter().map(|p| p.1 as f64).sum::<f64>() / n;
        let (sx, sy) = (xcm.round() as i32, ycm.round() as i32);
        self.coords.iter().map(|&(x, y)| (x - sx, y - sy)).collect()
    }
}
