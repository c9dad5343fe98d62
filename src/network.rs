//! Reading graphs from their text matrix form.
//!
//! ```text
//! -,16,12
//! 16,-,-
//! 12,-,-
//! ```
//!
//! Row `i`, column `j` holds the weight of the edge between vertices `i` and `j`, or `-` if there is none.

use std::io::BufRead;
use std::str::FromStr;

use itertools::Itertools;
use ndarray::Array2;
use tracing::debug;

use crate::edge::Weight;
use crate::error::{GraphError, MalformedReason};
use crate::graph::WeightedGraph;

const NO_EDGE: &str = "-";

fn malformed(row: usize, reason: MalformedReason) -> GraphError {
    GraphError::MalformedInput { row, reason }
}

fn parse_row(row: usize, line: &str) -> Result<Vec<Option<Weight>>, GraphError> {
    line.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(column, token)| match token {
            NO_EDGE => Ok(None),
            // zero fails to parse as a Weight, which is what we want
            _ => token.parse::<Weight>()
                .map(Some)
                .map_err(|_| malformed(row, MalformedReason::BadToken { column, token: token.to_owned() })),
        })
        .collect()
}

impl WeightedGraph {
    /// Read a graph in the text matrix form from `reader`.
    ///
    /// Blank lines are skipped. The matrix must be square, symmetric, and empty on the diagonal;
    /// anything else is reported as [`GraphError::MalformedInput`] naming the first offending row.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, GraphError> {
        let mut rows: Vec<Vec<Option<Weight>>> = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| malformed(rows.len(), MalformedReason::Io(e.to_string())))?;
            if line.trim().is_empty() {
                continue;
            }
            rows.push(parse_row(rows.len(), &line)?);
        }

        let n = rows.len();
        if let Some((row, cells)) = rows.iter().find_position(|cells| cells.len() != n) {
            return Err(malformed(row, MalformedReason::RaggedRow { expected: n, found: cells.len() }));
        }

        let cells = Array2::from_shape_fn((n, n), |(i, j)| rows[i][j]);

        if let Some(row) = (0..n).find(|&i| cells[[i, i]].is_some()) {
            return Err(malformed(row, MalformedReason::DiagonalWeight));
        }
        if let Some((row, column)) = (0..n).tuple_combinations().find(|&(i, j)| cells[[i, j]] != cells[[j, i]]) {
            return Err(malformed(row, MalformedReason::Asymmetric { column }));
        }

        let graph = WeightedGraph::from_cells(cells);
        debug!(vertices = n, edges = graph.edge_count(), "loaded network");
        Ok(graph)
    }
}

/// Parses the text matrix form; see [`WeightedGraph::from_reader`].
impl FromStr for WeightedGraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}
