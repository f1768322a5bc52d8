//! Minimum Vertex Cover instantiation.
//!
//! Elements are vertices, requirements are edges. [`VertexCover`] keeps
//! the uncovered edges in a [`ResidualTracker`](crate::cg::ResidualTracker)
//! context; [`ScanVertexCover`] recomputes everything per query.

mod graph;
mod problem;

pub use graph::{read_mis, read_mis_file};
pub use problem::{is_vertex_cover, ScanVertexCover, VertexCover};
