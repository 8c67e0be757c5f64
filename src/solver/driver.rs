//! Hands the assembled model to the backend solver and rehydrates the
//! result into human-meaningful quantities (spec.md §4.4), grounded on
//! `daily_chow.solver.solve`'s solve-and-extract tail and the `good_lp`
//! `ProblemVariables::minimise().using(...)` pattern shown in the retrieved
//! diet-problem example.

use crate::models::{IngredientInput, Solution, SolutionStatus, SolvedIngredient};
use crate::nutrient::MicroKey;
use crate::solver::model_builder::BuiltModel;
use good_lp::solvers::coin_cbc::coin_cbc;
use good_lp::{Expression, Solution as LpSolution, SolverModel};
use std::collections::HashMap;

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn drive(
    built: BuiltModel,
    objective: Expression,
    inputs: &[IngredientInput],
    timeout_s: f64,
) -> Solution {
    let mut model = built.vars.minimise(objective.clone()).using(coin_cbc);
    model.set_parameter("sec", &timeout_s.to_string());
    model.set_parameter("logLevel", "0");
    for c in built.constraints {
        model.add_constraint(c);
    }

    let solved = match model.solve() {
        Ok(solved) => solved,
        // Both true infeasibility and a timeout with no incumbent collapse
        // to the same outward status, per spec.md §7's failure semantics.
        Err(_) => return Solution::infeasible(),
    };

    let mut solved_ingredients = Vec::with_capacity(inputs.len());
    let mut meal_calories_kcal = 0.0;
    let mut meal_protein_g = 0.0;
    let mut meal_fat_g = 0.0;
    let mut meal_carbs_g = 0.0;
    let mut meal_fiber_g = 0.0;
    let mut meal_micros: HashMap<MicroKey, f64> = HashMap::new();

    for (inp, &var) in inputs.iter().zip(built.gram_vars.iter()) {
        let grams = solved.value(var).round().max(0.0) as u32;
        let density = &inp.ingredient.per_100g;
        let factor = grams as f64 / 100.0;

        let cal = density.calories_kcal * factor;
        let pro = density.protein_g * factor;
        let fat = density.fat_g * factor;
        let carb = density.carbs_g * factor;
        let fib = density.fiber_g * factor;

        meal_calories_kcal += cal;
        meal_protein_g += pro;
        meal_fat_g += fat;
        meal_carbs_g += carb;
        meal_fiber_g += fib;

        for (&key, &per_100g) in &inp.ingredient.micros_per_100g {
            *meal_micros.entry(key).or_insert(0.0) += per_100g * factor;
        }

        solved_ingredients.push(SolvedIngredient {
            ingredient_id: inp.ingredient.id,
            grams,
            calories_kcal: round1(cal),
            protein_g: round1(pro),
            fat_g: round1(fat),
            carbs_g: round1(carb),
            fiber_g: round1(fib),
        });
    }

    for v in meal_micros.values_mut() {
        *v = round2(*v);
    }

    Solution {
        // The backend does not distinguish a proven-optimal termination from
        // an accepted feasible incumbent the way CP-SAT's status enum does;
        // any solved model is reported as optimal (see DESIGN.md).
        status: SolutionStatus::Optimal,
        ingredients: solved_ingredients,
        meal_calories_kcal: round1(meal_calories_kcal),
        meal_protein_g: round1(meal_protein_g),
        meal_fat_g: round1(meal_fat_g),
        meal_carbs_g: round1(meal_carbs_g),
        meal_fiber_g: round1(meal_fiber_g),
        meal_micros,
        objective_value: Some(objective.eval_with(&solved)),
    }
}
