//! Candidate ranking for the palette reduction loop.
//!
//! The reduction works over 64 candidate nodes, one per hardware color.
//! For every *target* hardware color the table keeps all 64 candidates
//! ranked by perceptual distance to that target; the first live entry of
//! a ranking is the candidate that target currently maps to. Rankings
//! are flat per-target arrays with a head cursor that skips removed
//! candidates, so removing a candidate is a flag flip plus cursor
//! advances instead of 64 list unlinks.

use crate::color::{gamma_distance, EgaColor, EGA_COLORS};

pub(crate) struct RankTable {
    /// `dist[target][candidate]`, gamma-space distance.
    dist: Box<[[f64; EGA_COLORS]; EGA_COLORS]>,
    /// `order[target]`: candidate ids sorted ascending by distance to the
    /// target. The sort is stable, so equidistant candidates rank by id.
    order: Box<[[u8; EGA_COLORS]; EGA_COLORS]>,
    /// `head[target]`: position in `order[target]` of the nearest live
    /// candidate. Runs to `EGA_COLORS` when none are left.
    head: [usize; EGA_COLORS],
    alive: [bool; EGA_COLORS],
    removable: [bool; EGA_COLORS],
    alive_count: usize,
}

impl RankTable {
    /// Build the table with all 64 candidates live. Candidates flagged
    /// non-removable in `removable` are pinned and survive every
    /// reduction pass.
    pub(crate) fn new(removable: [bool; EGA_COLORS]) -> Self {
        let mut dist = Box::new([[0.0; EGA_COLORS]; EGA_COLORS]);
        for target in 0..EGA_COLORS {
            let target_rgba = EgaColor::from_index(target).to_rgba();
            for candidate in 0..EGA_COLORS {
                dist[target][candidate] =
                    gamma_distance(target_rgba, EgaColor::from_index(candidate).to_rgba());
            }
        }

        let mut order = Box::new([[0u8; EGA_COLORS]; EGA_COLORS]);
        for target in 0..EGA_COLORS {
            let mut ids: Vec<u8> = (0..EGA_COLORS as u8).collect();
            ids.sort_by(|&a, &b| {
                dist[target][a as usize].total_cmp(&dist[target][b as usize])
            });
            order[target].copy_from_slice(&ids);
        }

        Self {
            dist,
            order,
            head: [0; EGA_COLORS],
            alive: [true; EGA_COLORS],
            removable,
            alive_count: EGA_COLORS,
        }
    }

    /// Number of candidates still live.
    #[inline]
    pub(crate) fn alive_count(&self) -> usize {
        self.alive_count
    }

    #[inline]
    pub(crate) fn is_alive(&self, candidate: usize) -> bool {
        self.alive[candidate]
    }

    #[inline]
    pub(crate) fn is_removable(&self, candidate: usize) -> bool {
        self.removable[candidate]
    }

    /// The live candidate `target` currently maps to, or `None` once
    /// every candidate has been removed.
    pub(crate) fn head(&self, target: usize) -> Option<usize> {
        self.order[target]
            .get(self.head[target])
            .map(|&id| id as usize)
    }

    /// First live candidate ranked after the head of `target`.
    fn successor(&self, target: usize) -> Option<usize> {
        self.order[target][self.head[target] + 1..]
            .iter()
            .map(|&id| id as usize)
            .find(|&id| self.alive[id])
    }

    /// Total weighted error added by removing `candidate`: for every
    /// target it currently heads, the usage count times the distance gap
    /// to the target's next-best live candidate. Infinite when a used
    /// target would be left with no candidate at all.
    pub(crate) fn removal_cost(&self, candidate: usize, counts: &[u64; EGA_COLORS]) -> f64 {
        let mut cost = 0.0;
        for target in 0..EGA_COLORS {
            if counts[target] == 0 || self.head(target) != Some(candidate) {
                continue;
            }
            match self.successor(target) {
                Some(next) => {
                    cost += counts[target] as f64
                        * (self.dist[target][next] - self.dist[target][candidate]);
                }
                None => return f64::INFINITY,
            }
        }
        cost
    }

    /// Remove `candidate` and advance every ranking it was heading.
    pub(crate) fn remove(&mut self, candidate: usize) {
        debug_assert!(self.alive[candidate] && self.removable[candidate]);
        self.alive[candidate] = false;
        self.alive_count -= 1;
        for target in 0..EGA_COLORS {
            while self.head[target] < EGA_COLORS
                && !self.alive[self.order[target][self.head[target]] as usize]
            {
                self.head[target] += 1;
            }
        }
    }
}
