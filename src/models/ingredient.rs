//! Ingredient and per-solve ingredient-bound types.
//!
//! Grounded on the teacher's `models::food::{Food, NutritionFacts}` — the
//! macro fields are kept in the same shape; the teacher's fixed
//! micronutrient struct fields (`sodium_mg`, `vitamin_c_mg`, ...) are
//! generalized into an open `MicroKey -> f64` map since spec.md requires an
//! arbitrary caller-selected subset of the 20 canonical nutrients rather
//! than a fixed compile-time set (see `DESIGN.md`).

use crate::nutrient::MicroKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-100g macronutrient densities, in the same units the teacher's
/// `NutritionFacts` used for these five fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroVector {
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub fiber_g: f64,
}

/// A food category tag, carried over loosely from the teacher's
/// `FoodCategory` enum but left as a caller-defined string: the core never
/// branches on category (whole-foods filtering happens upstream, spec.md §6).
pub type Category = String;

/// A candidate food: immutable input to the solver (spec.md §3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u64,
    pub label: String,
    pub per_100g: MacroVector,
    pub micros_per_100g: HashMap<MicroKey, f64>,
    pub category: Category,
}

impl Ingredient {
    /// Per-100g amount for `key`, or `0.0` if this ingredient doesn't carry
    /// that nutrient — not an error, per spec.md §7.
    pub fn micro_per_100g(&self, key: MicroKey) -> f64 {
        self.micros_per_100g.get(&key).copied().unwrap_or(0.0)
    }
}

/// An ingredient plus the integer gram bounds that define its decision
/// variable's domain. Invariant: `0 <= min_g <= max_g`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientInput {
    pub ingredient: Ingredient,
    pub min_g: u32,
    pub max_g: u32,
}

impl IngredientInput {
    /// Constructs a bounded ingredient input. Returns `None` if the bound
    /// invariant `min_g <= max_g` is violated — the core never silently
    /// clamps caller-supplied bounds.
    pub fn new(ingredient: Ingredient, min_g: u32, max_g: u32) -> Option<Self> {
        if min_g > max_g {
            return None;
        }
        Some(Self {
            ingredient,
            min_g,
            max_g,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> Ingredient {
        Ingredient {
            id: 1,
            label: "White Rice".into(),
            per_100g: MacroVector {
                calories_kcal: 130.0,
                protein_g: 2.7,
                fat_g: 0.3,
                carbs_g: 28.0,
                fiber_g: 0.4,
            },
            micros_per_100g: HashMap::from([(MicroKey::IronMg, 0.2)]),
            category: "grains".into(),
        }
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert!(IngredientInput::new(rice(), 10, 5).is_none());
    }

    #[test]
    fn accepts_degenerate_zero_bound() {
        assert!(IngredientInput::new(rice(), 0, 0).is_some());
    }

    #[test]
    fn missing_micro_is_zero_not_error() {
        let r = rice();
        assert_eq!(r.micro_per_100g(MicroKey::CalciumMg), 0.0);
        assert_eq!(r.micro_per_100g(MicroKey::IronMg), 0.2);
    }
}
