//! Fixed-point coefficient scaling (spec.md §4.1), grounded on
//! `daily_chow.solver._scaled_coeff`/`_micro_coeff`.
//!
//! Nutrition data arrives as per-100g floating point densities. Integer
//! programming needs integer coefficients, so every density is scaled and
//! rounded once per solve and reused — never recomputed per constraint.

use crate::models::IngredientInput;
use crate::nutrient::MicroKey;
use rayon::prelude::*;
use std::collections::HashMap;

/// Coarse scale for calories and macros: hundredths of a gram/kcal.
pub const S_MACRO: i64 = 100;
/// Fine scale for micronutrients: ten-thousandths, so values like 0.05
/// mg/100g round correctly.
pub const S_MICRO: i64 = 10_000;

pub fn scaled_macro_coeff(per_100g: f64) -> i64 {
    (per_100g * S_MACRO as f64 / 100.0).round() as i64
}

pub fn scaled_micro_coeff(per_100g: f64) -> i64 {
    (per_100g * S_MICRO as f64 / 100.0).round() as i64
}

/// Per-gram macro coefficients for one ingredient, at `S_MACRO`.
#[derive(Debug, Clone, Copy)]
pub struct MacroCoeffs {
    pub calories: i64,
    pub protein: i64,
    pub fat: i64,
    pub carbs: i64,
    pub fiber: i64,
}

/// Precomputes per-gram macro coefficients for every ingredient, in input
/// order. Ingredient count is typically small (tens), but this is embarrassingly
/// parallel and the rest of the pipeline already depends on `rayon`.
pub fn precompute_macro_coeffs(inputs: &[IngredientInput]) -> Vec<MacroCoeffs> {
    inputs
        .par_iter()
        .map(|inp| {
            let f = &inp.ingredient.per_100g;
            MacroCoeffs {
                calories: scaled_macro_coeff(f.calories_kcal),
                protein: scaled_macro_coeff(f.protein_g),
                fat: scaled_macro_coeff(f.fat_g),
                carbs: scaled_macro_coeff(f.carbs_g),
                fiber: scaled_macro_coeff(f.fiber_g),
            }
        })
        .collect()
}

/// Precomputes per-gram micronutrient coefficients, one vector per
/// requested key, aligned with `inputs`' order. Only the keys that actually
/// appear in `micro_targets`/`micro_uls` are computed — an ingredient
/// missing a key contributes a zero coefficient (spec.md §7 "out-of-range
/// reference").
pub fn precompute_micro_coeffs(
    inputs: &[IngredientInput],
    keys: &[MicroKey],
) -> HashMap<MicroKey, Vec<i64>> {
    keys.par_iter()
        .map(|&key| {
            let coeffs = inputs
                .iter()
                .map(|inp| scaled_micro_coeff(inp.ingredient.micro_per_100g(key)))
                .collect();
            (key, coeffs)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_scale_round_trips_whole_grams() {
        // 130 kcal/100g -> 130 centi-kcal per gram.
        assert_eq!(scaled_macro_coeff(130.0), 130);
    }

    #[test]
    fn micro_scale_preserves_small_densities() {
        // 0.05 mg/100g -> round(0.05 * 10_000 / 100) = round(5.0) = 5.
        assert_eq!(scaled_micro_coeff(0.05), 5);
    }

    #[test]
    fn micro_scale_rounds_half_up_consistently() {
        assert_eq!(scaled_micro_coeff(0.0), 0);
    }
}
