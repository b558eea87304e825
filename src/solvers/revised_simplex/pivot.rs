use ndarray::Array1;

use crate::float::Float;

/// The comparison policy that selects the entering column and the leaving row.
///
/// Tie-breaking is part of the policy: with [`PivotRule::Dantzig`], ties are
/// broken towards the lowest index, which makes the pivot sequence fully
/// deterministic for a given problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotRule {
    /// Most negative reduced cost enters; minimum-ratio row leaves. Can cycle
    /// on degenerate problems; the iteration cap is the only safeguard.
    #[default]
    Dantzig,
}

impl PivotRule {
    /// The column that enters the basis, or `None` if every reduced cost is
    /// within `tol` of non-negative and the current basis is optimal.
    pub(crate) fn entering<F: Float>(&self, reduced_costs: &Array1<F>, tol: F) -> Option<usize> {
        match self {
            PivotRule::Dantzig => {
                let mut best: Option<(usize, F)> = None;
                for (j, &r) in reduced_costs.iter().enumerate() {
                    // strict comparison keeps the lowest index on ties
                    if best.map_or(true, |(_, v)| r < v) {
                        best = Some((j, r));
                    }
                }
                best.filter(|&(_, r)| r < -tol).map(|(j, _)| j)
            }
        }
    }

    /// The leaving row and its ratio, picked from the ratio-test candidates,
    /// or `None` if there are no candidates and the problem is unbounded.
    pub(crate) fn leaving<F: Float>(&self, candidates: &[(usize, F)]) -> Option<(usize, F)> {
        match self {
            PivotRule::Dantzig => {
                let mut best: Option<(usize, F)> = None;
                for &(row, ratio) in candidates {
                    if best.map_or(true, |(_, r)| ratio < r) {
                        best = Some((row, ratio));
                    }
                }
                best
            }
        }
    }
}

/// The ratio-test candidates for a pivot direction: every row whose direction
/// component exceeds `tol`, paired with the ratio of its basic value to that
/// component. Rows with a near-zero or negative component place no limit on
/// the step and are skipped.
pub(crate) fn ratio_candidates<F: Float>(
    basic_values: &Array1<F>,
    direction: &Array1<F>,
    tol: F,
) -> Vec<(usize, F)> {
    direction
        .iter()
        .enumerate()
        .filter(|&(_, &d)| d > tol)
        .map(|(i, &d)| (i, basic_values[i] / d))
        .collect()
}
