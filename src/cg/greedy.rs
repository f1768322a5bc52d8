//! Greedy construction.
//!
//! Repeatedly scores every candidate outside the solution, keeps the
//! best-scored tie set, lets the [`TieBreak`] pick one and appends it,
//! until the problem reports feasibility. The carousel's completion phase
//! runs the same loop on a partial solution.

use rand::Rng;
use tracing::debug;

use super::solution::Solution;
use super::tie_break::TieBreak;
use super::types::{CgProblem, Element};
use crate::error::{CgError, Result};

/// Builds feasible solutions by max-score insertion.
pub struct GreedyBuilder;

impl GreedyBuilder {
    /// Builds a feasible solution from scratch.
    ///
    /// # Errors
    ///
    /// [`CgError::Instance`] if every element of `universe` is selected and
    /// the solution is still infeasible.
    pub fn build<P, R>(
        problem: &P,
        ctx: &mut P::Context,
        universe: &[Element],
        tie_break: TieBreak,
        rng: &mut R,
    ) -> Result<Solution>
    where
        P: CgProblem,
        R: Rng + ?Sized,
    {
        let mut solution = Solution::new();
        Self::complete(problem, ctx, universe, &mut solution, tie_break, rng)?;
        Ok(solution)
    }

    /// Extends `solution` until it is feasible. Returns how many elements
    /// were appended.
    pub fn complete<P, R>(
        problem: &P,
        ctx: &mut P::Context,
        universe: &[Element],
        solution: &mut Solution,
        tie_break: TieBreak,
        rng: &mut R,
    ) -> Result<usize>
    where
        P: CgProblem,
        R: Rng + ?Sized,
    {
        let mut added = 0;
        while !problem.feasible(ctx, solution)? {
            let element = add_best_candidate(problem, ctx, universe, solution, tie_break, rng)?;
            added += 1;
            debug!(element, size = solution.len(), "added best candidate");
        }
        Ok(added)
    }
}

/// Appends the tie-broken best candidate to `solution` and returns it.
pub(crate) fn add_best_candidate<P, R>(
    problem: &P,
    ctx: &mut P::Context,
    universe: &[Element],
    solution: &mut Solution,
    tie_break: TieBreak,
    rng: &mut R,
) -> Result<Element>
where
    P: CgProblem,
    R: Rng + ?Sized,
{
    let ties = best_candidates(problem, ctx, universe, solution)?;
    let element = tie_break.choose(&ties, rng).ok_or_else(|| {
        CgError::Instance(format!(
            "no candidate left outside a solution of {} elements (universe of {})",
            solution.len(),
            universe.len()
        ))
    })?;
    solution.push_back(element);
    Ok(element)
}

/// Candidates outside `solution` that reach the maximum score, in
/// universe order.
///
/// Scores must be totally ordered among themselves; an incomparable score
/// (a NaN float, say) is an [`CgError::InvariantViolation`].
pub(crate) fn best_candidates<P: CgProblem>(
    problem: &P,
    ctx: &mut P::Context,
    universe: &[Element],
    solution: &Solution,
) -> Result<Vec<Element>> {
    let mut best: Option<P::Score> = None;
    let mut ties = Vec::new();

    for &candidate in universe {
        if solution.contains(candidate) {
            continue;
        }
        let score = problem.score(ctx, solution, candidate)?;
        if score.partial_cmp(&score).is_none() {
            return Err(incomparable(candidate, score));
        }
        match best {
            None => {
                best = Some(score);
                ties.push(candidate);
            }
            Some(current) => match score.partial_cmp(&current) {
                Some(std::cmp::Ordering::Greater) => {
                    best = Some(score);
                    ties.clear();
                    ties.push(candidate);
                }
                Some(std::cmp::Ordering::Equal) => ties.push(candidate),
                Some(std::cmp::Ordering::Less) => {}
                None => return Err(incomparable(candidate, score)),
            },
        }
    }

    Ok(ties)
}

fn incomparable<S: std::fmt::Debug>(candidate: Element, score: S) -> CgError {
    CgError::InvariantViolation(format!(
        "score {score:?} of candidate {candidate} is not comparable"
    ))
}
