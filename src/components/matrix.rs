//! Relationship Matrix
//!
//! Dense N×N store of pairwise relationship strengths. Two invariants hold at
//! every point in a run: the matrix is exactly symmetric, and the diagonal is
//! zero (no self-relationship). All mutation goes through methods that keep
//! the symmetric write-back in one place.

use serde::{Deserialize, Serialize};

/// Symmetric, zero-diagonal matrix of relationship strengths.
///
/// Index `i` corresponds positionally to the i-th student in cohort order.
/// Values are unbounded signed reals; only the structural-pressure rule
/// clamps them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl RelationshipMatrix {
    /// Allocate a zero-filled N×N matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            cells: vec![0.0; n * n],
        }
    }

    /// Number of rows (= columns = cohort size).
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.n + j]
    }

    /// Add `delta` to both `[i][j]` and `[j][i]`.
    ///
    /// This is the only mutation the daily drift pass performs; symmetry is
    /// preserved by construction. The diagonal is never touched (`i != j`).
    pub fn add_pair(&mut self, i: usize, j: usize, delta: f64) {
        debug_assert!(i != j, "no self-relationship");
        self.cells[i * self.n + j] += delta;
        self.cells[j * self.n + i] += delta;
    }

    /// Set both `[i][j]` and `[j][i]` to `value`.
    pub fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i != j, "no self-relationship");
        self.cells[i * self.n + j] = value;
        self.cells[j * self.n + i] = value;
    }

    /// Add `delta` to the single cell `[a][b]`.
    ///
    /// Used by the pressure pass, which writes each ordered cell
    /// independently; symmetry there follows from the snapshot being
    /// symmetric, not from this method.
    pub(crate) fn add_cell(&mut self, a: usize, b: usize, delta: f64) {
        self.cells[a * self.n + b] += delta;
    }

    /// Clamp every cell to `[-bound, bound]`.
    pub fn clamp_all(&mut self, bound: f64) {
        for cell in &mut self.cells {
            *cell = cell.clamp(-bound, bound);
        }
    }

    /// Exact symmetry check (bitwise f64 equality).
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// True when every diagonal cell is exactly zero.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.n).all(|i| self.get(i, i) == 0.0)
    }

    /// Largest absolute cell value (0.0 for an empty matrix).
    pub fn max_abs(&self) -> f64 {
        self.cells.iter().fold(0.0, |acc, c| acc.max(c.abs()))
    }

    /// Copy out as row vectors, for reports and serialization.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.n)
            .map(|i| (0..self.n).map(|j| self.get(i, j)).collect())
            .collect()
    }
}
