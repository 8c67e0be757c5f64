//! The solver pipeline's public entry point (spec.md §2, §6): coefficient
//! layer -> model builder -> objective composer -> driver, grounded on
//! `daily_chow.solver.solve`.

pub mod coefficients;
pub mod driver;
pub mod model_builder;
pub mod objective;

use crate::config::MicroStrategy;
use crate::error::SolverError;
use crate::models::{
    priority, IngredientInput, MacroConstraint, MacroRatio, Priority, Solution, Targets,
};
use crate::nutrient::MicroKey;
use std::collections::HashMap;

/// Everything a single `solve` call needs; request-scoped, no retained
/// state between calls (spec.md §3 Lifecycles).
#[derive(Debug, Clone, Default)]
pub struct SolveRequest {
    pub ingredients: Vec<IngredientInput>,
    pub targets: Targets,
    pub micro_targets: HashMap<MicroKey, f64>,
    pub micro_uls: HashMap<MicroKey, f64>,
    pub macro_ratio: Option<MacroRatio>,
    pub macro_constraints: Vec<MacroConstraint>,
    /// `None` means "use the caller's configured default priority order"
    /// (spec.md §6); `Some(vec![])` is a caller-supplied empty list, which
    /// normalizes to `[TotalWeight]`.
    pub priorities: Option<Vec<Priority>>,
    pub strategy: Option<MicroStrategy>,
    pub timeout_s: Option<f64>,
}

/// Builds and solves the integer program for one meal (spec.md §2).
///
/// `default_priorities`/`default_strategy`/`default_timeout_s` come from the
/// caller's `SolverConfig` and are used only when `request` leaves the
/// corresponding field unset.
#[tracing::instrument(skip_all, fields(
    solve_id = %uuid::Uuid::new_v4(),
    ingredient_count = request.ingredients.len(),
))]
pub fn solve(
    request: &SolveRequest,
    default_priorities: &[Priority],
    default_strategy: MicroStrategy,
    default_timeout_s: f64,
) -> Result<Solution, SolverError> {
    if request.ingredients.is_empty() {
        tracing::debug!("empty ingredient list, returning infeasible");
        return Ok(Solution::infeasible());
    }

    let priorities = match &request.priorities {
        Some(list) => priority::normalize(list.clone()),
        None => priority::normalize(default_priorities.to_vec()),
    };
    let strategy = request.strategy.unwrap_or(default_strategy);
    let timeout_s = request.timeout_s.unwrap_or(default_timeout_s);

    let want_diversity = priorities.contains(&Priority::IngredientDiversity);

    let built = model_builder::build(
        &request.ingredients,
        request.targets,
        &request.micro_targets,
        &request.micro_uls,
        request.macro_ratio,
        &request.macro_constraints,
        want_diversity,
    );

    let objective = objective::compose(&built, &priorities, strategy)?;

    tracing::debug!(priority_count = priorities.len(), timeout_s, "solving");
    Ok(driver::drive(built, objective, &request.ingredients, timeout_s))
}
