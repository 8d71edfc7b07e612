use crate::mat;
use crate::output::Pattern;
use anyhow::{Result, bail};
use itertools::Itertools;

/// Counts how many emitted segment endpoints land on each lattice point.
pub fn degree_lattice(
    point_width: usize,
    point_height: usize,
    indices: &[usize],
) -> Vec<Vec<usize>> {
    let mut degrees = mat![0usize; point_height; point_width];
    for &i in indices {
        degrees[i / point_width][i % point_width] += 1;
    }
    degrees
}

/// A segment set decomposes into closed loops exactly when every lattice
/// point has even degree.
pub fn is_closed(point_width: usize, point_height: usize, indices: &[usize]) -> bool {
    degree_lattice(point_width, point_height, indices)
        .iter()
        .flatten()
        .all(|&d| d % 2 == 0)
}

/// Whether the two point indices name horizontally or vertically adjacent
/// lattice points.
pub fn is_unit_segment(point_width: usize, a: usize, b: usize) -> bool {
    let (ax, ay) = (a % point_width, a / point_width);
    let (bx, by) = (b % point_width, b / point_width);
    ax.abs_diff(bx) + ay.abs_diff(by) == 1
}

/// Checks a dumped pattern end to end: pairable index list, indices inside
/// the lattice, unit-length segments, even degree everywhere.
pub fn validate(pattern: &Pattern) -> Result<()> {
    let dim = pattern.point_dim;
    if pattern.indices.len() % 2 != 0 {
        bail!("odd index count: {}", pattern.indices.len());
    }
    for &i in &pattern.indices {
        if i >= dim * dim {
            bail!("point index {} outside the {}x{} lattice", i, dim, dim);
        }
    }
    for (a, b) in pattern.indices.iter().copied().tuples() {
        if !is_unit_segment(dim, a, b) {
            bail!("segment ({}, {}) does not join adjacent points", a, b);
        }
    }
    if !is_closed(dim, dim, &pattern.indices) {
        bail!("pattern has dangling endpoints");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(point_dim: usize, indices: Vec<usize>) -> Pattern {
        Pattern { point_dim, indices }
    }

    #[test]
    fn a_unit_square_validates() {
        let p = pattern(6, vec![14, 15, 14, 20, 15, 21, 20, 21]);
        assert!(validate(&p).is_ok());
    }

    #[test]
    fn a_blank_pattern_validates() {
        assert!(validate(&pattern(6, vec![])).is_ok());
    }

    #[test]
    fn degree_lattice_counts_every_endpoint() {
        let degrees = degree_lattice(6, 6, &[14, 15, 14, 20, 15, 21, 20, 21]);
        assert_eq!(degrees[2][2], 2);
        assert_eq!(degrees[2][3], 2);
        assert_eq!(degrees[3][2], 2);
        assert_eq!(degrees[3][3], 2);
        assert_eq!(degrees[0][0], 0);
    }

    #[test]
    fn odd_index_counts_are_rejected() {
        assert!(validate(&pattern(6, vec![14, 15, 14])).is_err());
    }

    #[test]
    fn out_of_lattice_indices_are_rejected() {
        assert!(validate(&pattern(3, vec![0, 9])).is_err());
    }

    #[test]
    fn diagonal_segments_are_rejected() {
        // 0 is (0,0), 7 is (1,1) on a 6-wide lattice.
        assert!(!is_unit_segment(6, 0, 7));
        assert!(validate(&pattern(6, vec![0, 7])).is_err());
    }

    #[test]
    fn row_wrapping_segments_are_rejected() {
        // 5 is the end of row 0, 6 the start of row 1; the flat indices
        // differ by one but the points are not adjacent.
        assert!(!is_unit_segment(6, 5, 6));
    }

    #[test]
    fn open_paths_are_rejected() {
        assert!(!is_closed(6, 6, &[0, 1]));
        assert!(validate(&pattern(6, vec![0, 1])).is_err());
    }
}
