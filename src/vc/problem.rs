//! Vertex Cover adapters.

use crate::cg::{CgProblem, Element, RequirementMatrix, ResidualTracker, Solution};
use crate::error::{CgError, Result};

/// Minimum Vertex Cover with incremental residual tracking.
///
/// The problem owns the original adjacency matrix; the engine-owned
/// [`ResidualTracker`] context holds the uncovered edges. Each query first
/// reconciles the tracker against the solution it is asked about, so a
/// score is the candidate's number of uncovered incident edges and
/// feasibility is "no uncovered edge left".
#[derive(Debug, Clone)]
pub struct VertexCover {
    graph: RequirementMatrix,
}

impl VertexCover {
    pub fn new(graph: RequirementMatrix) -> Self {
        Self { graph }
    }

    /// Builds the instance from 0-based edges over `n` vertices.
    pub fn from_edges(n: usize, edges: &[(Element, Element)]) -> Result<Self> {
        RequirementMatrix::from_pairs(n, edges).map(Self::new)
    }

    /// Original adjacency matrix.
    pub fn graph(&self) -> &RequirementMatrix {
        &self.graph
    }

    /// Every vertex, in index order.
    pub fn vertices(&self) -> Vec<Element> {
        (0..self.graph.size()).collect()
    }
}

impl CgProblem for VertexCover {
    type Context = ResidualTracker;
    type Score = usize;

    fn create_context(&self) -> ResidualTracker {
        ResidualTracker::new(&self.graph)
    }

    fn feasible(&self, tracker: &mut ResidualTracker, solution: &Solution) -> Result<bool> {
        tracker.reconcile(&self.graph, solution)?;
        Ok(tracker.is_feasible())
    }

    fn score(
        &self,
        tracker: &mut ResidualTracker,
        solution: &Solution,
        candidate: Element,
    ) -> Result<usize> {
        tracker.reconcile(&self.graph, solution)?;
        tracker.residual(candidate).ok_or_else(|| {
            CgError::InvariantViolation(format!(
                "candidate {candidate} is outside the universe 0..{}",
                self.graph.size()
            ))
        })
    }
}

/// Minimum Vertex Cover evaluated from scratch on every query.
///
/// Scans every edge per call. Gives the same scores as [`VertexCover`],
/// so both adapters produce identical runs for the same seed; useful as a
/// reference when validating incremental adapters.
#[derive(Debug, Clone)]
pub struct ScanVertexCover {
    graph: RequirementMatrix,
}

impl ScanVertexCover {
    pub fn new(graph: RequirementMatrix) -> Self {
        Self { graph }
    }
}

impl CgProblem for ScanVertexCover {
    type Context = ();
    type Score = usize;

    fn create_context(&self) {}

    fn feasible(&self, _: &mut (), solution: &Solution) -> Result<bool> {
        Ok(is_vertex_cover(&self.graph, solution))
    }

    fn score(&self, _: &mut (), solution: &Solution, candidate: Element) -> Result<usize> {
        if solution.contains(candidate) {
            return Ok(0);
        }
        Ok(self
            .graph
            .neighbors(candidate)
            .filter(|&j| !solution.contains(j))
            .count())
    }
}

/// Whether every edge of `graph` has an endpoint in `solution`.
pub fn is_vertex_cover(graph: &RequirementMatrix, solution: &Solution) -> bool {
    (0..graph.size())
        .filter(|&i| !solution.contains(i))
        .all(|i| graph.neighbors(i).all(|j| solution.contains(j)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cg::greedy::add_best_candidate;
    use crate::cg::{CarouselEngine, CarouselRunner, CgConfig, GreedyBuilder, TieBreak};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn path4() -> VertexCover {
        VertexCover::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    /// Deterministic pseudo-random graph (LCG), so tests need no fixtures.
    fn random_graph(n: usize, density_percent: u64, seed: u64) -> RequirementMatrix {
        let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                if (state >> 33) % 100 < density_percent {
                    edges.push((i, j));
                }
            }
        }
        RequirementMatrix::from_pairs(n, &edges).unwrap()
    }

    #[test]
    fn test_feasibility_on_path() {
        let problem = path4();
        let mut tracker = problem.create_context();
        assert!(!problem.feasible(&mut tracker, &vec![1].into()).unwrap());
        assert!(problem.feasible(&mut tracker, &vec![1, 3].into()).unwrap());
        assert!(!problem.feasible(&mut tracker, &Solution::new()).unwrap());
    }

    #[test]
    fn test_score_is_uncovered_degree() {
        let problem = path4();
        let mut tracker = problem.create_context();
        let empty = Solution::new();
        let scores: Vec<usize> = (0..4)
            .map(|c| problem.score(&mut tracker, &empty, c).unwrap())
            .collect();
        assert_eq!(scores, vec![1, 2, 2, 1]);

        let with_one: Solution = vec![1].into();
        assert_eq!(problem.score(&mut tracker, &with_one, 2).unwrap(), 1);
        assert_eq!(problem.score(&mut tracker, &with_one, 0).unwrap(), 0);
    }

    #[test]
    fn test_score_outside_universe() {
        let problem = path4();
        let mut tracker = problem.create_context();
        let err = problem.score(&mut tracker, &Solution::new(), 9).unwrap_err();
        assert!(matches!(err, CgError::InvariantViolation(_)));
    }

    #[test]
    fn test_greedy_on_path_picks_middle_first() {
        for seed in 0..20 {
            let problem = path4();
            let mut tracker = problem.create_context();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let solution = GreedyBuilder::build(
                &problem,
                &mut tracker,
                &[0, 1, 2, 3],
                TieBreak::Random,
                &mut rng,
            )
            .unwrap();
            let first = solution.front().unwrap();
            assert!(first == 1 || first == 2, "seed {seed}: first pick {first}");
            assert_eq!(solution.len(), 2, "seed {seed}: {:?}", solution.to_vec());
            assert!(is_vertex_cover(problem.graph(), &solution));
        }
    }

    #[test]
    fn test_each_addition_reduces_residual_mass() {
        let problem = VertexCover::new(random_graph(30, 20, 3));
        let universe = problem.vertices();
        let mut tracker = problem.create_context();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut solution = Solution::new();
        while !problem.feasible(&mut tracker, &solution).unwrap() {
            let before = tracker.total_residual();
            add_best_candidate(
                &problem,
                &mut tracker,
                &universe,
                &mut solution,
                TieBreak::Random,
                &mut rng,
            )
            .unwrap();
            problem.feasible(&mut tracker, &solution).unwrap();
            assert!(tracker.total_residual() < before);
        }
    }

    #[test]
    fn test_full_strip_still_feasible() {
        let problem = VertexCover::new(random_graph(25, 30, 8));
        let graph = problem.graph().clone();
        let mut engine = CarouselEngine::new(problem, graph_vertices(&graph), 8);
        let result = engine.run(3, 1.0).unwrap();
        assert_eq!(result.stripped, result.greedy.len());
        assert!(is_vertex_cover(&graph, &result.solution));
    }

    fn graph_vertices(graph: &RequirementMatrix) -> Vec<Element> {
        (0..graph.size()).collect()
    }

    #[test]
    fn test_tracker_consistent_with_final_solution() {
        let problem = VertexCover::new(random_graph(20, 25, 5));
        let graph = problem.graph().clone();
        let mut engine = CarouselEngine::new(problem, graph_vertices(&graph), 5);
        let solution = engine.minimize(5, 0.2).unwrap();

        let mut fresh = ResidualTracker::new(&graph);
        fresh.reconcile(&graph, &solution).unwrap();
        assert_eq!(engine.context().residuals(), fresh.residuals());
        assert_eq!(engine.context().live(), fresh.live());
        assert!(engine.context().is_feasible());
    }

    #[test]
    fn test_incremental_matches_edge_scan() {
        for seed in 0..5 {
            let graph = random_graph(24, 20, seed);
            let config = CgConfig::default().with_alpha(4).with_beta(0.3).with_seed(seed);
            let vertices = graph_vertices(&graph);
            let fast =
                CarouselRunner::run(VertexCover::new(graph.clone()), vertices.clone(), &config)
                    .unwrap();
            let slow = CarouselRunner::run(ScanVertexCover::new(graph.clone()), vertices, &config)
                .unwrap();
            assert_eq!(fast.greedy, slow.greedy, "seed {seed}");
            assert_eq!(fast.solution, slow.solution, "seed {seed}");
        }
    }

    #[test]
    fn test_edgeless_graph() {
        let problem = VertexCover::from_edges(3, &[]).unwrap();
        let result = CarouselRunner::run(problem, vec![0, 1, 2], &CgConfig::default()).unwrap();
        assert!(result.greedy.is_empty());
        assert!(result.solution.is_empty());
    }

    #[test]
    fn test_partial_universe_is_instance_error() {
        // Edge 0-1 cannot be covered when neither endpoint is a candidate.
        let problem = path4();
        let err = CarouselRunner::run(problem, vec![2, 3], &CgConfig::default()).unwrap_err();
        assert!(matches!(err, CgError::Instance(_)));
    }

    #[test]
    fn test_is_vertex_cover() {
        let g = path4();
        assert!(is_vertex_cover(g.graph(), &vec![0, 2].into()));
        assert!(!is_vertex_cover(g.graph(), &vec![0, 3].into()));
        assert!(is_vertex_cover(&RequirementMatrix::new(2), &Solution::new()));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_minimize_returns_cover(
            n in 2usize..16,
            density in 5u64..70,
            graph_seed in any::<u64>(),
            seed in any::<u64>(),
            alpha in 1usize..6,
            beta in 0.01f64..=1.0,
        ) {
            let graph = random_graph(n, density, graph_seed);
            let vertices = graph_vertices(&graph);
            let mut engine = CarouselEngine::new(VertexCover::new(graph.clone()), vertices, seed);
            let solution = engine.minimize(alpha, beta).unwrap();
            prop_assert!(is_vertex_cover(&graph, &solution));
            let distinct: std::collections::HashSet<_> = solution.iter().collect();
            prop_assert_eq!(distinct.len(), solution.len());
        }

        #[test]
        fn prop_same_seed_same_solution(graph_seed in any::<u64>(), seed in any::<u64>()) {
            let graph = random_graph(12, 30, graph_seed);
            let config = CgConfig::default().with_alpha(3).with_seed(seed);
            let vertices = graph_vertices(&graph);
            let a = CarouselRunner::run(VertexCover::new(graph.clone()), vertices.clone(), &config)
                .unwrap();
            let b = CarouselRunner::run(VertexCover::new(graph), vertices, &config).unwrap();
            prop_assert_eq!(a.solution, b.solution);
        }
    }
}
