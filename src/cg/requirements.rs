//! Dense pairwise requirement structure.

use bitvec::prelude::*;

use super::types::Element;
use crate::error::{CgError, Result};

/// Symmetric 0/1 matrix over `n` elements, one bit row per element.
///
/// Entry `(i, j)` set means "the requirement between `i` and `j` is
/// live". For Vertex Cover this is the adjacency matrix: the original
/// instance keeps every edge, the tracker's working copy keeps only the
/// edges not yet covered. The diagonal is always clear.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequirementMatrix {
    rows: Vec<BitVec>,
}

impl RequirementMatrix {
    /// Creates a matrix over `n` elements with no requirements.
    pub fn new(n: usize) -> Self {
        Self {
            rows: (0..n).map(|_| bitvec![0; n]).collect(),
        }
    }

    /// Builds a matrix from unordered pairs (0-based).
    ///
    /// Self pairs are ignored and repeated pairs collapse. A pair with an
    /// endpoint outside `0..n` is rejected.
    pub fn from_pairs(n: usize, pairs: &[(Element, Element)]) -> Result<Self> {
        let mut matrix = Self::new(n);
        for &(u, v) in pairs {
            if u >= n || v >= n {
                return Err(CgError::InvalidParameter(format!(
                    "pair ({u}, {v}) is outside the universe 0..{n}"
                )));
            }
            if u != v {
                matrix.set(u, v);
            }
        }
        Ok(matrix)
    }

    /// Number of elements (rows).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Whether `(i, j)` is live. Out-of-range indices read as `false`.
    pub fn get(&self, i: Element, j: Element) -> bool {
        self.rows
            .get(i)
            .and_then(|row| row.get(j).map(|bit| *bit))
            .unwrap_or(false)
    }

    /// Sets `(i, j)` and `(j, i)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn set(&mut self, i: Element, j: Element) {
        self.rows[i].set(j, true);
        self.rows[j].set(i, true);
    }

    /// Clears `(i, j)` and `(j, i)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn clear(&mut self, i: Element, j: Element) {
        self.rows[i].set(j, false);
        self.rows[j].set(i, false);
    }

    /// Number of live entries in row `i`.
    pub fn row_sum(&self, i: Element) -> usize {
        self.rows.get(i).map_or(0, |row| row.count_ones())
    }

    /// Column indices of the live entries in row `i`, ascending.
    pub fn neighbors(&self, i: Element) -> impl Iterator<Item = Element> + '_ {
        self.rows.get(i).into_iter().flat_map(|row| row.iter_ones())
    }

    /// Number of live unordered pairs.
    pub fn pair_count(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones()).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_is_symmetric() {
        let m = RequirementMatrix::from_pairs(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert!(m.get(0, 1) && m.get(1, 0));
        assert!(!m.get(0, 2));
        assert_eq!(m.row_sum(1), 2);
        assert_eq!(m.row_sum(0), 1);
        assert_eq!(m.pair_count(), 3);
    }

    #[test]
    fn test_self_and_duplicate_pairs() {
        let m = RequirementMatrix::from_pairs(3, &[(0, 0), (0, 1), (1, 0)]).unwrap();
        assert!(!m.get(0, 0));
        assert_eq!(m.pair_count(), 1);
    }

    #[test]
    fn test_out_of_range_pair_rejected() {
        let err = RequirementMatrix::from_pairs(2, &[(0, 2)]).unwrap_err();
        assert!(matches!(err, CgError::InvalidParameter(_)));
    }

    #[test]
    fn test_clear_and_neighbors() {
        let mut m = RequirementMatrix::from_pairs(4, &[(0, 1), (0, 3), (1, 2)]).unwrap();
        assert_eq!(m.neighbors(0).collect::<Vec<_>>(), vec![1, 3]);
        m.clear(3, 0);
        assert_eq!(m.neighbors(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(m.neighbors(9).count(), 0);
        assert!(!m.get(9, 0));
    }
}
