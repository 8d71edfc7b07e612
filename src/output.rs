use crate::grid::Grid;
use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// The writer-facing snapshot of a generated pattern: the point-lattice
/// dimension and the flat segment-endpoint index list, consumed pairwise by
/// a downstream renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    pub point_dim: usize,
    pub indices: Vec<usize>,
}

impl Pattern {
    /// Snapshots a square grid. The dump format carries a single lattice
    /// dimension, so rectangular grids have no file representation.
    pub fn from_grid(grid: &Grid) -> Self {
        assert_eq!(grid.width(), grid.height());
        Self {
            point_dim: grid.width() + 1,
            indices: grid.links(),
        }
    }
}

/// Writes the text dump: the lattice dimension on the first line, then one
/// point index per line.
pub fn write_text(w: &mut impl Write, pattern: &Pattern) -> Result<()> {
    let body = std::iter::once(pattern.point_dim)
        .chain(pattern.indices.iter().copied())
        .join("\n");
    w.write_all(body.as_bytes())?;
    Ok(())
}

pub fn write_json(w: &mut impl Write, pattern: &Pattern, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(w, pattern)?;
    } else {
        serde_json::to_writer_pretty(w, pattern)?;
    }
    Ok(())
}

/// Parses a text dump back into a pattern. Blank lines are skipped.
pub fn read_text(r: impl BufRead) -> Result<Pattern> {
    let mut values = vec![];
    for (n, line) in r.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        values.push(
            line.parse::<usize>()
                .with_context(|| format!("line {}: not a point index: {:?}", n + 1, line))?,
        );
    }
    let (&point_dim, indices) = values.split_first().context("empty pattern file")?;
    Ok(Pattern {
        point_dim,
        indices: indices.to_vec(),
    })
}
