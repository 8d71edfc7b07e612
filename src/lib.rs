// # Loopgen: Random Closed-Loop Patterns on a Grid
//
// This crate generates random closed-loop line patterns on a rectangular
// cell grid. Every cell tracks four edge-link parity flags; toggling a cell
// flips its own flags together with the mirrored flags of its neighbors, so
// every point of the underlying lattice keeps even degree and the emitted
// segments always decompose into closed loops.

/// The cell/link grid and the loop-preserving toggle operation.
pub mod grid;

/// Population strategies that drive random toggles over a grid.
pub mod populate;

/// Pattern snapshots and their text/JSON writers.
pub mod output;

/// Validation of dumped patterns (index range, segment shape, degree parity).
pub mod check;

/// Named generation presets.
pub mod presets;

/// A macro for convenient initialization of vectors, including nested vectors for multi-dimensional arrays.
///
/// # Examples
///
/// ```
/// use loopgen::mat;
/// // A simple vector
/// let v1 = mat![1, 2, 3];
///
/// // A 2x3 matrix initialized with zeros
/// let m1 = mat![0; 2; 3];
/// assert_eq!(m1, vec![vec![0, 0, 0], vec![0, 0, 0]]);
/// ```
#[macro_export]
macro_rules! mat {
    ($($e:expr),*) => { vec![$($e),*] };
    ($($e:expr,)*) => { vec![$($e),*] };
    ($e:expr; $d:expr) => { vec![$e; $d] };
    ($e:expr; $d:expr $(; $ds:expr)+) => { vec![mat![$e $(; $ds)*]; $d] };
}
