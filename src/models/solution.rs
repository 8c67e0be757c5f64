//! The solver's output value, grounded on `daily_chow.solver.{Solution,
//! SolvedIngredient}`.

use crate::nutrient::MicroKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionStatus {
    Optimal,
    Feasible,
    Infeasible,
}

/// One ingredient's realized serving, in grams and real (unscaled) units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolvedIngredient {
    pub ingredient_id: u64,
    pub grams: u32,
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub fiber_g: f64,
}

/// The solver's output. On `Infeasible`, `ingredients` is empty and every
/// realized total is zero (spec.md §3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub status: SolutionStatus,
    pub ingredients: Vec<SolvedIngredient>,
    pub meal_calories_kcal: f64,
    pub meal_protein_g: f64,
    pub meal_fat_g: f64,
    pub meal_carbs_g: f64,
    pub meal_fiber_g: f64,
    pub meal_micros: HashMap<MicroKey, f64>,
    /// The composed lexicographic objective's scalar value at the found
    /// solution. `None` when infeasible.
    pub objective_value: Option<f64>,
}

impl Solution {
    pub fn infeasible() -> Self {
        Self {
            status: SolutionStatus::Infeasible,
            ingredients: Vec::new(),
            meal_calories_kcal: 0.0,
            meal_protein_g: 0.0,
            meal_fat_g: 0.0,
            meal_carbs_g: 0.0,
            meal_fiber_g: 0.0,
            meal_micros: HashMap::new(),
            objective_value: None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(
            self.status,
            SolutionStatus::Optimal | SolutionStatus::Feasible
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infeasible_solution_is_zeroed() {
        let s = Solution::infeasible();
        assert!(!s.is_feasible());
        assert!(s.ingredients.is_empty());
        assert_eq!(s.meal_calories_kcal, 0.0);
        assert!(s.objective_value.is_none());
    }
}
