//! Incremental residual-requirement tracking.
//!
//! # Algorithm
//!
//! The tracker keeps a working copy of the requirement matrix in which a
//! pair is live iff neither endpoint is in the last observed solution,
//! plus per-element residual counts (live row sums). When asked to
//! reconcile against a new solution it:
//!
//! 1. Returns immediately if the sequence equals the stored snapshot.
//! 2. Computes `removed = previous - current` and
//!    `inserted = current - previous` as set differences.
//! 3. Restores, for every removed element, each original pair whose other
//!    endpoint is outside the current solution. A pair whose endpoints
//!    were both removed is restored once.
//! 4. Clears every live pair of each inserted element and zeroes its count.
//! 5. Stores the new solution as the snapshot.
//!
//! Restoration runs before clearing: an inserted element must see the
//! pairs that the removals just brought back. The work per call is
//! proportional to the number of changed elements times the row width;
//! unchanged elements are never visited.

use std::collections::HashSet;

use tracing::debug;

use super::requirements::RequirementMatrix;
use super::solution::Solution;
use super::types::Element;
use crate::error::{CgError, Result};

/// What one reconciliation changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Elements that left the solution.
    pub removed: usize,
    /// Elements that entered the solution.
    pub inserted: usize,
    /// Pairs brought back to live.
    pub restored: usize,
    /// Pairs cleared.
    pub cleared: usize,
}

impl ReconcileStats {
    /// True when the solution was unchanged as a set.
    pub fn is_noop(&self) -> bool {
        self.removed == 0 && self.inserted == 0
    }
}

/// Residual state kept consistent with the last reconciled solution.
#[derive(Debug, Clone)]
pub struct ResidualTracker {
    live: RequirementMatrix,
    residual: Vec<usize>,
    total: usize,
    previous: Solution,
}

impl ResidualTracker {
    /// Creates a tracker for the empty solution: every original pair live.
    pub fn new(original: &RequirementMatrix) -> Self {
        let residual: Vec<usize> = (0..original.size()).map(|e| original.row_sum(e)).collect();
        let total = residual.iter().sum();
        Self {
            live: original.clone(),
            residual,
            total,
            previous: Solution::new(),
        }
    }

    /// Brings the state in sync with `current`.
    ///
    /// `original` must be the matrix the tracker was created from. An error
    /// means the caller broke the mutation discipline; the state is no
    /// longer trustworthy afterwards.
    pub fn reconcile(
        &mut self,
        original: &RequirementMatrix,
        current: &Solution,
    ) -> Result<ReconcileStats> {
        if self.previous == *current {
            return Ok(ReconcileStats::default());
        }
        if original.size() != self.live.size() {
            return Err(CgError::InvariantViolation(format!(
                "original matrix has {} elements, tracker was built for {}",
                original.size(),
                self.live.size()
            )));
        }

        let mut removed: Vec<Element> = self.previous.difference(current).collect();
        let mut inserted: Vec<Element> = current.difference(&self.previous).collect();
        removed.sort_unstable();
        inserted.sort_unstable();

        let n = self.live.size();
        if let Some(&e) = removed.iter().chain(&inserted).find(|&&e| e >= n) {
            return Err(CgError::InvariantViolation(format!(
                "element {e} is outside the universe 0..{n}"
            )));
        }

        let mut stats = ReconcileStats {
            removed: removed.len(),
            inserted: inserted.len(),
            ..ReconcileStats::default()
        };

        let mut visited: HashSet<(Element, Element)> = HashSet::new();
        for &r in &removed {
            for j in original.neighbors(r) {
                if current.contains(j) || !visited.insert((r.min(j), r.max(j))) {
                    continue;
                }
                debug_assert!(!self.live.get(r, j), "pair ({r}, {j}) already live");
                self.live.set(r, j);
                self.residual[r] += 1;
                self.residual[j] += 1;
                self.total += 2;
                stats.restored += 1;
            }
        }

        for &m in &inserted {
            let neighbors: Vec<Element> = self.live.neighbors(m).collect();
            if neighbors.len() != self.residual[m] {
                return Err(CgError::InvariantViolation(format!(
                    "residual count of {m} is {}, but it has {} live pairs",
                    self.residual[m],
                    neighbors.len()
                )));
            }
            for &i in &neighbors {
                self.residual[i] = self.residual[i].checked_sub(1).ok_or_else(|| {
                    CgError::InvariantViolation(format!("residual count of {i} would go negative"))
                })?;
                self.live.clear(m, i);
            }
            self.residual[m] = 0;
            self.total -= 2 * neighbors.len();
            stats.cleared += neighbors.len();
        }

        self.previous = current.clone();
        debug!(
            removed = stats.removed,
            inserted = stats.inserted,
            restored = stats.restored,
            cleared = stats.cleared,
            "reconciled residual state"
        );
        Ok(stats)
    }

    /// Residual count of `element`, or `None` outside the universe.
    pub fn residual(&self, element: Element) -> Option<usize> {
        self.residual.get(element).copied()
    }

    /// All residual counts, indexed by element.
    pub fn residuals(&self) -> &[usize] {
        &self.residual
    }

    /// Largest residual count (0 for an empty universe).
    pub fn max_residual(&self) -> usize {
        self.residual.iter().copied().max().unwrap_or(0)
    }

    /// Sum of residual counts; every live pair contributes two.
    pub fn total_residual(&self) -> usize {
        self.total
    }

    /// True iff no requirement is left unsatisfied.
    pub fn is_feasible(&self) -> bool {
        self.total == 0
    }

    /// Working matrix of live pairs.
    pub fn live(&self) -> &RequirementMatrix {
        &self.live
    }

    /// Solution observed by the last reconciliation.
    pub fn snapshot(&self) -> &Solution {
        &self.previous
    }
}
