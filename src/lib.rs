//! Carousel Greedy metaheuristic.
//!
//! Provides a generic, callback-driven Carousel Greedy engine for
//! covering/selection problems and a Minimum Vertex Cover instantiation:
//!
//! - **Carousel Greedy (CG)**: greedy construction followed by an aging
//!   loop that removes the oldest choice and greedily re-inserts, then a
//!   completion phase back to feasibility.
//! - **Incremental state tracking**: pairwise requirement state reconciled
//!   against each new solution by applying only the set difference.
//! - **Vertex Cover**: incremental and from-scratch adapters plus a DIMACS
//!   instance reader.
//!
//! # Example
//!
//! ```
//! use carousel_greedy::cg::CarouselEngine;
//! use carousel_greedy::vc::{is_vertex_cover, VertexCover};
//!
//! let problem = VertexCover::from_edges(5, &[(0, 1), (0, 2), (0, 3), (3, 4)]).unwrap();
//! let graph = problem.graph().clone();
//! let mut engine = CarouselEngine::new(problem, (0..5).collect(), 1);
//! let cover = engine.minimize(10, 0.1).unwrap();
//! assert!(is_vertex_cover(&graph, &cover));
//! assert!(engine.greedy_solution().is_some());
//! ```

pub mod cg;
mod error;
pub mod vc;

pub use error::{CgError, Result};
