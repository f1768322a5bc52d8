//! Tie-breaking among equally scored candidates.

use rand::Rng;

use super::types::Element;

/// Policy for picking one element out of a tie set.
///
/// Every decision draws exactly one value from the generator, whichever
/// policy is active, so the random stream seen by later decisions only
/// depends on the seed and on how many ties were broken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Uniform choice with the seeded generator.
    #[default]
    Random,

    /// First candidate of the tie set, in universe order.
    First,
}

impl TieBreak {
    /// Chooses one of `candidates`, or `None` if the slice is empty.
    ///
    /// A pure function of `(candidates, rng state)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use carousel_greedy::cg::TieBreak;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut a = ChaCha8Rng::seed_from_u64(1);
    /// let mut b = ChaCha8Rng::seed_from_u64(1);
    /// let ties = [4, 9, 2];
    /// assert_eq!(
    ///     TieBreak::Random.choose(&ties, &mut a),
    ///     TieBreak::Random.choose(&ties, &mut b),
    /// );
    /// ```
    pub fn choose<R: Rng + ?Sized>(&self, candidates: &[Element], rng: &mut R) -> Option<Element> {
        if candidates.is_empty() {
            return None;
        }
        let draw = rng.random_range(0..candidates.len());
        match self {
            TieBreak::Random => Some(candidates[draw]),
            TieBreak::First => Some(candidates[0]),
        }
    }
}
