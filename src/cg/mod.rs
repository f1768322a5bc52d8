//! Carousel Greedy (CG).
//!
//! A constructive metaheuristic that extends a plain greedy algorithm:
//! after building a greedy solution it discards the latest choices, then
//! repeatedly ages out the oldest selected element while greedily adding
//! a new one, and finally completes the solution back to feasibility.
//!
//! # Core Traits
//!
//! - [`CgProblem`]: feasibility and greedy score over an explicit context
//!
//! # Key Types
//!
//! - [`Solution`]: ordered, duplicate-free element sequence (aging order)
//! - [`RequirementMatrix`] / [`ResidualTracker`]: pairwise requirements and
//!   their incrementally maintained uncovered part
//! - [`GreedyBuilder`]: max-score construction
//! - [`CarouselEngine`] / [`CarouselRunner`]: the strip/carousel/complete loop
//! - [`CgConfig`], [`TieBreak`]: run parameters
//!
//! # References
//!
//! - Cerrone, Cerulli & Golden (2017), "Carousel greedy: A generalized
//!   greedy algorithm with applications in optimization"

mod config;
pub(crate) mod greedy;
mod requirements;
mod runner;
mod solution;
mod tie_break;
mod tracker;
mod types;

pub use config::CgConfig;
pub use greedy::GreedyBuilder;
pub use requirements::RequirementMatrix;
pub use runner::{CarouselEngine, CarouselRunner, CgResult};
pub use solution::Solution;
pub use tie_break::TieBreak;
pub use tracker::{ReconcileStats, ResidualTracker};
pub use types::{CgProblem, Element};
