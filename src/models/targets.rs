//! Calorie/macro target types, grounded on `daily_chow.solver.{Targets,
//! MacroConstraint, MacroRatio}`.

use serde::{Deserialize, Serialize};

/// Calorie band for the meal: `[meal_calories_kcal - cal_tolerance,
/// meal_calories_kcal + cal_tolerance]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Targets {
    pub meal_calories_kcal: u32,
    pub cal_tolerance: u32,
}

impl Default for Targets {
    fn default() -> Self {
        // Same default the Python original used: a 2780 kcal meal (a 3500
        // kcal day minus a 720 kcal smoothie pinned outside this meal).
        Self {
            meal_calories_kcal: 2780,
            cal_tolerance: 50,
        }
    }
}

/// One of the four tracked macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroNutrient {
    Protein,
    Fat,
    Carbs,
    Fiber,
}

/// Constraint comparison mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroMode {
    Gte,
    Lte,
    Eq,
    /// No constraint — present so a caller can hand in a full fixed-size
    /// list of constraints and disable entries positionally, matching the
    /// Python original's `mode: str` with `"none"` as a valid value.
    None,
}

/// A hard or soft bound on one macronutrient's total grams.
///
/// Hard constraints are enforced in the feasibility region; soft
/// ("loose") constraints contribute a normalized percentage-deviation term
/// to the objective (spec.md §4.2).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroConstraint {
    pub nutrient: MacroNutrient,
    pub mode: MacroMode,
    pub grams: u32,
    pub hard: bool,
}

/// Target calorie-split percentages for the macro-ratio soft objective,
/// plus macro grams already committed outside this meal (spec.md §3).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    pub carb_pct: u32,
    pub protein_pct: u32,
    pub fat_pct: u32,
    pub pinned_carb_g: f64,
    pub pinned_protein_g: f64,
    pub pinned_fat_g: f64,
}

impl MacroRatio {
    /// `true` if the three percentages sum to 100, per spec.md §3's
    /// invariant. Construction does not enforce this — callers that violate
    /// it get a best-effort linearization rather than a hard failure, since
    /// the ratio objective is advisory, not a hard constraint.
    pub fn percentages_sum_to_100(&self) -> bool {
        self.carb_pct + self.protein_pct + self.fat_pct == 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_match_the_reference_scenario() {
        let t = Targets::default();
        assert_eq!(t.meal_calories_kcal, 2780);
        assert_eq!(t.cal_tolerance, 50);
    }

    #[test]
    fn ratio_sum_check() {
        let r = MacroRatio {
            carb_pct: 30,
            protein_pct: 20,
            fat_pct: 50,
            pinned_carb_g: 0.0,
            pinned_protein_g: 0.0,
            pinned_fat_g: 0.0,
        };
        assert!(r.percentages_sum_to_100());
    }
}
