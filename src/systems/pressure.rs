//! Structural Pressure
//!
//! Second-order propagation pass: pairs with strong relationships to common
//! third parties get pulled further in that shared direction, a balance-theory
//! style reinforcement of cliques. This is the one O(N³) algorithm in the
//! crate and the reason cohorts stay in the tens.

use serde::{Deserialize, Serialize};

use crate::components::RelationshipMatrix;

/// Parameters for the pressure pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureParams {
    /// Coupling coefficient `k` scaling every pressure term.
    pub coupling: f64,
    /// Saturation bound; every cell is clamped to `[-clamp, clamp]` at the
    /// end of the day. Without it the quadratic feedback is unbounded.
    pub clamp: f64,
}

impl PressureParams {
    pub const COUPLING: f64 = 0.0015;
    pub const CLAMP: f64 = 20.0;
}

impl Default for PressureParams {
    fn default() -> Self {
        Self {
            coupling: Self::COUPLING,
            clamp: Self::CLAMP,
        }
    }
}

/// Apply one day of structural pressure to a post-drift matrix.
///
/// Reads `current` as an immutable snapshot and returns the next-day matrix:
///
/// ```text
/// next[a][b] = clamp(current[a][b] + k * Σ_{c != a, c != b} current[a][c] * current[c][b])
/// ```
///
/// for every ordered pair `a != b`. The two sides of a pair are computed
/// independently, but because `current` is symmetric the two sums contain the
/// same products and land on identical values, so symmetry survives the pass.
/// The snapshot-then-replace shape is load-bearing: writing pressure into a
/// matrix that is still being read would make the result depend on iteration
/// order.
pub fn propagate_pressure(
    current: &RelationshipMatrix,
    params: &PressureParams,
) -> RelationshipMatrix {
    let n = current.size();
    let mut next = current.clone();

    for a in 0..n {
        for b in 0..n {
            if a == b {
                continue;
            }
            let mut pressure_sum = 0.0;
            for c in 0..n {
                if c != a && c != b {
                    pressure_sum += current.get(a, c) * current.get(c, b);
                }
            }
            next.add_cell(a, b, params.coupling * pressure_sum);
        }
    }

    next.clamp_all(params.clamp);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_matrix_stays_zero() {
        let m = RelationshipMatrix::zeros(4);
        let next = propagate_pressure(&m, &PressureParams::default());
        assert_eq!(next, m);
    }

    #[test]
    fn triangle_pressure_uses_only_third_parties() {
        let mut m = RelationshipMatrix::zeros(3);
        m.set_pair(0, 1, 2.0);
        m.set_pair(0, 2, 3.0);
        m.set_pair(1, 2, 5.0);
        let params = PressureParams::default();

        let next = propagate_pressure(&m, &params);

        // pressure(0,1) = k * M[0][2] * M[2][1]
        assert_eq!(next.get(0, 1), 2.0 + params.coupling * 3.0 * 5.0);
        // pressure(0,2) = k * M[0][1] * M[1][2]
        assert_eq!(next.get(0, 2), 3.0 + params.coupling * 2.0 * 5.0);
        assert!(next.is_symmetric());
    }

    #[test]
    fn endpoints_never_contribute_to_their_own_pressure() {
        // Poison the diagonal directly; a c == a or c == b term would pick
        // these up and skew the sums.
        let mut m = RelationshipMatrix::zeros(3);
        m.add_cell(0, 0, 100.0);
        m.add_cell(1, 1, 100.0);
        m.set_pair(0, 1, 2.0);
        m.set_pair(0, 2, 3.0);
        m.set_pair(1, 2, 5.0);
        let params = PressureParams::default();

        let next = propagate_pressure(&m, &params);
        assert_eq!(next.get(0, 1), 2.0 + params.coupling * 3.0 * 5.0);
    }

    #[test]
    fn two_students_have_no_third_party() {
        let mut m = RelationshipMatrix::zeros(2);
        m.set_pair(0, 1, 7.0);
        let next = propagate_pressure(&m, &PressureParams::default());
        assert_eq!(next.get(0, 1), 7.0);
    }

    #[test]
    fn clamp_saturates_runaway_cells() {
        let mut m = RelationshipMatrix::zeros(3);
        m.set_pair(0, 1, 19.0);
        m.set_pair(0, 2, 19.0);
        m.set_pair(1, 2, 19.0);
        let next = propagate_pressure(&m, &PressureParams::default());
        // 19 + 0.0015 * 19 * 19 > 19.5, still under the bound
        assert!(next.get(0, 1) > 19.0);
        assert!(next.max_abs() <= PressureParams::CLAMP);

        let mut hot = RelationshipMatrix::zeros(3);
        hot.set_pair(0, 1, 20.0);
        hot.set_pair(0, 2, 20.0);
        hot.set_pair(1, 2, 20.0);
        let next = propagate_pressure(&hot, &PressureParams::default());
        assert_eq!(next.get(0, 1), 20.0);
    }
}
