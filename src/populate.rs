//! # Population Strategies
//!
//! This module provides the strategies that drive random toggles over a
//! [`Grid`]. Both take the generator as an argument, so deterministic
//! sequences can stand in for OS entropy in tests.

use crate::grid::Grid;
use rand::Rng;

/// Toggles `count` randomly chosen interior cells.
///
/// Coordinates are drawn uniformly and independently with replacement, so
/// the same cell may be hit more than once; repeated hits cancel out in
/// pairs. Counts larger than the interior area are allowed and simply
/// produce more cancellation.
///
/// # Arguments
/// * `grid` - The grid to populate.
/// * `count` - The number of toggles to perform.
/// * `rng` - The random source for coordinate draws.
pub fn scatter(grid: &mut Grid, count: usize, rng: &mut impl Rng) {
    let max_x = grid.width() - 2;
    let max_y = grid.height() - 2;
    for _ in 0..count {
        let x = rng.random_range(1..=max_x);
        let y = rng.random_range(1..=max_y);
        grid.toggle(x, y);
    }
}

/// Visits every interior cell once and toggles it with probability 1/2.
pub fn fill(grid: &mut Grid, rng: &mut impl Rng) {
    for y in 1..grid.height() - 1 {
        for x in 1..grid.width() - 1 {
            if rng.random_bool(0.5) {
                grid.toggle(x, y);
            }
        }
    }
}
