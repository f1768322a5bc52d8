//! DIMACS edge-list reader for Vertex Cover instances.
//!
//! Accepts the `.mis`/`.clq` layout: `c` comment lines, one
//! `p <format> <n> <m>` problem line, then `e <u> <v>` edge lines with
//! 1-based vertex ids. Other line types are ignored. Self loops are
//! dropped and repeated edges collapse.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::cg::{Element, RequirementMatrix};
use crate::error::{CgError, Result};

/// Reads an instance from a DIMACS stream.
///
/// # Examples
///
/// ```
/// use carousel_greedy::vc::read_mis;
///
/// let text = "c path\np edge 3 2\ne 1 2\ne 2 3\n";
/// let graph = read_mis(text.as_bytes()).unwrap();
/// assert_eq!(graph.size(), 3);
/// assert_eq!(graph.pair_count(), 2);
/// ```
pub fn read_mis<R: Read>(reader: R) -> Result<RequirementMatrix> {
    let mut n: Option<usize> = None;
    let mut edges: Vec<(Element, Element)> = Vec::new();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.first().copied() {
            None | Some("c") => {}
            Some("p") => {
                if n.is_some() {
                    return Err(parse_error(line_no, "duplicate problem line"));
                }
                if parts.len() < 4 {
                    return Err(parse_error(line_no, "expected `p <format> <n> <m>`"));
                }
                let vertices = parse_count(parts[2], line_no)?;
                let declared_edges = parse_count(parts[3], line_no)?;
                edges.reserve(declared_edges.min(1 << 20));
                n = Some(vertices);
            }
            Some("e") => {
                let Some(vertices) = n else {
                    return Err(parse_error(line_no, "edge line before problem line"));
                };
                if parts.len() < 3 {
                    return Err(parse_error(line_no, "expected `e <u> <v>`"));
                }
                let u = parse_vertex(parts[1], vertices, line_no)?;
                let v = parse_vertex(parts[2], vertices, line_no)?;
                edges.push((u, v));
            }
            Some(_) => {}
        }
    }

    let n = n.ok_or_else(|| parse_error(0, "missing problem line"))?;
    RequirementMatrix::from_pairs(n, &edges)
}

/// Reads an instance from a DIMACS file.
pub fn read_mis_file<P: AsRef<Path>>(path: P) -> Result<RequirementMatrix> {
    read_mis(File::open(path)?)
}

fn parse_error(line: usize, reason: &str) -> CgError {
    CgError::Parse {
        line,
        reason: reason.to_string(),
    }
}

fn parse_count(token: &str, line: usize) -> Result<usize> {
    token
        .parse()
        .map_err(|_| parse_error(line, &format!("`{token}` is not a count")))
}

/// Parses a 1-based vertex id into a 0-based element.
fn parse_vertex(token: &str, n: usize, line: usize) -> Result<Element> {
    let id: usize = token
        .parse()
        .map_err(|_| parse_error(line, &format!("`{token}` is not a vertex id")))?;
    if id == 0 || id > n {
        return Err(parse_error(line, &format!("vertex {id} out of range 1..={n}")));
    }
    Ok(id - 1)
}
