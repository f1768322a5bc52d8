//! Core trait for Carousel Greedy problems.

use std::fmt::Debug;

use super::solution::Solution;
use crate::error::Result;

/// Opaque identifier of a candidate element, drawn from `0..N`.
pub type Element = usize;

/// Defines a covering/selection problem for Carousel Greedy.
///
/// The implementing type holds the immutable instance data (for Vertex
/// Cover, the original edge set). Mutable evaluation state lives in a
/// separate [`Context`](CgProblem::Context) that the engine creates once,
/// owns, and hands to every call. An adapter that maintains state
/// incrementally must bring the context in sync with `solution` before
/// answering.
///
/// # Examples
///
/// ```
/// use carousel_greedy::cg::{CgProblem, Element, Solution};
/// use carousel_greedy::Result;
///
/// /// Pick elements until their weights sum to at least `target`.
/// struct Knapsack { weights: Vec<u32>, target: u32 }
///
/// impl CgProblem for Knapsack {
///     type Context = ();
///     type Score = u32;
///
///     fn create_context(&self) {}
///
///     fn feasible(&self, _: &mut (), solution: &Solution) -> Result<bool> {
///         let total: u32 = solution.iter().map(|&e| self.weights[e]).sum();
///         Ok(total >= self.target)
///     }
///
///     fn score(&self, _: &mut (), _: &Solution, candidate: Element) -> Result<u32> {
///         Ok(self.weights[candidate])
///     }
/// }
/// ```
pub trait CgProblem {
    /// Mutable state shared by `feasible` and `score` across calls.
    type Context;

    /// Greedy score; higher is better. Only used for argmax and tie sets.
    type Score: PartialOrd + Copy + Debug;

    /// Creates the context for the empty solution.
    fn create_context(&self) -> Self::Context;

    /// Returns whether `solution` satisfies every requirement.
    fn feasible(&self, ctx: &mut Self::Context, solution: &Solution) -> Result<bool>;

    /// Scores adding `candidate` to `solution`.
    fn score(
        &self,
        ctx: &mut Self::Context,
        solution: &Solution,
        candidate: Element,
    ) -> Result<Self::Score>;
}
