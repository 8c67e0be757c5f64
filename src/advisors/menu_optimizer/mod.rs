//! Thin facade over [`crate::solver`], kept under the teacher's
//! `advisors::menu_optimizer` naming convention (see `DESIGN.md`) even
//! though the dispatch machinery that used to live here —
//! `OptimizationAlgorithm`, `AlgorithmFactory`, the async genetic-algorithm
//! wrapper — does not apply to a single closed-form integer program with
//! exactly one backend (spec.md §9's explicit rejection of dynamic dispatch
//! or per-tier polymorphism).

use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::models::Solution;
use crate::solver::{self, SolveRequest};

/// Solves one meal using `config`'s defaults for any field `request` leaves
/// unset.
pub fn recommend_meal(request: &SolveRequest, config: &SolverConfig) -> Result<Solution, SolverError> {
    solver::solve(
        request,
        &config.default_priorities,
        config.default_strategy,
        config.default_timeout_s,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::Targets;

    #[test]
    fn default_scenario_is_feasible() {
        let request = SolveRequest {
            ingredients: fixtures::baseline_ingredients(),
            targets: Targets::default(),
            ..Default::default()
        };
        let config = SolverConfig::default();
        let solution = recommend_meal(&request, &config).expect("no overflow for the default scenario");
        assert!(solution.is_feasible());
    }
}
