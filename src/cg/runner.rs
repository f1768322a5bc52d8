//! Carousel Greedy execution engine.
//!
//! # Algorithm
//!
//! 1. Build a greedy solution (cached across runs)
//! 2. Strip: drop the most recent `floor(len * beta)` greedy elements
//! 3. Carousel: for `alpha * len` iterations
//!    a. Age out the oldest element (front of the sequence)
//!    b. Append the tie-broken best candidate (back of the sequence)
//! 4. Complete: append best candidates until feasible
//!
//! # Reference
//!
//! Cerrone, C., Cerulli, R., & Golden, B. (2017). "Carousel greedy: A
//! generalized greedy algorithm with applications in optimization",
//! *Computers & Operations Research* 85, 97-112.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace};

use super::config::{validate_parameters, CgConfig};
use super::greedy::{add_best_candidate, GreedyBuilder};
use super::solution::Solution;
use super::tie_break::TieBreak;
use super::types::{CgProblem, Element};
use crate::error::{CgError, Result};

/// Result of a Carousel Greedy run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CgResult {
    /// Final feasible solution.
    pub solution: Solution,
    /// The plain greedy solution the run started from.
    pub greedy: Solution,
    /// Greedy elements discarded by the strip phase.
    pub stripped: usize,
    /// Carousel iterations executed.
    pub iterations: usize,
    /// Elements appended by the completion phase.
    pub completion_additions: usize,
    /// Solution size after each carousel iteration.
    pub size_history: Vec<usize>,
}

impl CgResult {
    /// Size reduction relative to the greedy solution (negative if larger).
    pub fn improvement(&self) -> isize {
        self.greedy.len() as isize - self.solution.len() as isize
    }
}

/// Carousel Greedy engine over a problem adapter.
///
/// Owns the adapter's context, the candidate universe, and the seeded
/// generator, and is the only mutator of the solutions it produces.
pub struct CarouselEngine<P: CgProblem> {
    problem: P,
    context: P::Context,
    universe: Vec<Element>,
    rng: ChaCha8Rng,
    tie_break: TieBreak,
    greedy_solution: Option<Solution>,
    cg_solution: Option<Solution>,
}

impl<P: CgProblem> CarouselEngine<P> {
    /// Creates an engine. Repeated elements in `universe` keep their
    /// first position.
    pub fn new(problem: P, universe: Vec<Element>, seed: u64) -> Self {
        let context = problem.create_context();
        let universe: Vec<Element> = Solution::from(universe).into();
        Self {
            problem,
            context,
            universe,
            rng: ChaCha8Rng::seed_from_u64(seed),
            tie_break: TieBreak::default(),
            greedy_solution: None,
            cg_solution: None,
        }
    }

    /// Sets the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Adapter context as left by the last query.
    pub fn context(&self) -> &P::Context {
        &self.context
    }

    pub fn universe(&self) -> &[Element] {
        &self.universe
    }

    /// Greedy solution, once built.
    pub fn greedy_solution(&self) -> Option<&Solution> {
        self.greedy_solution.as_ref()
    }

    /// Result of the last successful [`minimize`](Self::minimize).
    pub fn cg_solution(&self) -> Option<&Solution> {
        self.cg_solution.as_ref()
    }

    /// Builds the greedy solution on first call and returns the cached
    /// one afterwards.
    pub fn greedy(&mut self) -> Result<&Solution> {
        let solution = match self.greedy_solution.take() {
            Some(cached) => cached,
            None => {
                let built = GreedyBuilder::build(
                    &self.problem,
                    &mut self.context,
                    &self.universe,
                    self.tie_break,
                    &mut self.rng,
                )?;
                info!(size = built.len(), "greedy solution built");
                built
            }
        };
        let cached: &Solution = self.greedy_solution.insert(solution);
        Ok(cached)
    }

    /// Runs strip, carousel, and completion phases; returns the feasible
    /// final solution.
    ///
    /// # Errors
    ///
    /// - [`CgError::InvalidParameter`](crate::CgError::InvalidParameter)
    ///   for `alpha == 0` or `beta` outside (0, 1], before anything runs.
    ///   Also when `alpha` times the greedy size overflows `usize`; the
    ///   greedy solution is built and cached by then.
    /// - [`CgError::Instance`](crate::CgError::Instance) if feasibility
    ///   cannot be reached with the whole universe.
    pub fn minimize(&mut self, alpha: usize, beta: f64) -> Result<Solution> {
        self.run(alpha, beta).map(|result| result.solution)
    }

    /// Same as [`minimize`](Self::minimize), with run statistics.
    pub fn run(&mut self, alpha: usize, beta: f64) -> Result<CgResult> {
        validate_parameters(alpha, beta)?;

        let greedy = self.greedy()?.clone();
        let iterations = alpha.checked_mul(greedy.len()).ok_or_else(|| {
            CgError::InvalidParameter(format!(
                "alpha {alpha} times greedy size {} overflows the iteration count",
                greedy.len()
            ))
        })?;
        let mut solution = greedy.clone();

        // Strip phase
        let stripped = ((greedy.len() as f64) * beta).floor() as usize;
        for _ in 0..stripped {
            solution.pop_back();
        }
        self.problem.feasible(&mut self.context, &solution)?;
        info!(stripped, remaining = solution.len(), "stripped greedy tail");

        // Carousel phase
        let mut size_history = Vec::new();
        for iteration in 0..iterations {
            let aged_out = solution.pop_front();
            let added = add_best_candidate(
                &self.problem,
                &mut self.context,
                &self.universe,
                &mut solution,
                self.tie_break,
                &mut self.rng,
            )?;
            trace!(
                iteration,
                ?aged_out,
                added,
                size = solution.len(),
                "carousel step"
            );
            size_history.push(solution.len());
        }
        info!(iterations, size = solution.len(), "carousel phase finished");

        // Completion phase
        let completion_additions = GreedyBuilder::complete(
            &self.problem,
            &mut self.context,
            &self.universe,
            &mut solution,
            self.tie_break,
            &mut self.rng,
        )?;
        info!(
            greedy = greedy.len(),
            completion_additions,
            size = solution.len(),
            "carousel greedy finished"
        );

        self.cg_solution = Some(solution.clone());
        Ok(CgResult {
            solution,
            greedy,
            stripped,
            iterations,
            completion_additions,
            size_history,
        })
    }
}

/// One-shot Carousel Greedy runner.
pub struct CarouselRunner;

impl CarouselRunner {
    /// Builds an engine from `config` and runs it once.
    ///
    /// # Examples
    ///
    /// ```
    /// use carousel_greedy::cg::{CarouselRunner, CgConfig};
    /// use carousel_greedy::vc::VertexCover;
    ///
    /// let problem = VertexCover::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
    /// let config = CgConfig::default().with_seed(1);
    /// let result = CarouselRunner::run(problem, (0..4).collect(), &config).unwrap();
    /// assert_eq!(result.solution.len(), 2);
    /// ```
    pub fn run<P: CgProblem>(
        problem: P,
        universe: Vec<Element>,
        config: &CgConfig,
    ) -> Result<CgResult> {
        config.validate()?;
        let seed = config.seed.unwrap_or(42);
        let mut engine =
            CarouselEngine::new(problem, universe, seed).with_tie_break(config.tie_break);
        engine.run(config.alpha, config.beta)
    }
}
