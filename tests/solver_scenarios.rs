//! End-to-end solver scenarios, grounded on spec.md §8's concrete
//! end-to-end scenarios over the nine-ingredient baseline and on the shape
//! of `tests/test_solver.py`'s feasibility/constraint assertions.

use meal_solver::config::SolverConfig;
use meal_solver::nutrient::MicroKey;
use meal_solver::solver::SolveRequest;
use meal_solver::{
    advisors::menu_optimizer::recommend_meal, fixtures, MacroConstraint, MacroMode, MacroNutrient,
    MacroRatio, Priority, SolutionStatus, Targets,
};
use std::collections::HashMap;

fn default_request() -> SolveRequest {
    SolveRequest {
        ingredients: fixtures::baseline_ingredients(),
        targets: Targets::default(),
        ..Default::default()
    }
}

#[test]
fn default_targets_are_feasible_within_tolerance() {
    let request = default_request();
    let config = SolverConfig::default();
    let solution = recommend_meal(&request, &config).unwrap();

    assert!(matches!(
        solution.status,
        SolutionStatus::Optimal | SolutionStatus::Feasible
    ));
    assert!((solution.meal_calories_kcal - 2780.0).abs() <= 51.0);
}

#[test]
fn hard_protein_floor_is_respected() {
    let mut request = default_request();
    request.macro_constraints.push(MacroConstraint {
        nutrient: MacroNutrient::Protein,
        mode: MacroMode::Gte,
        grams: 130,
        hard: true,
    });

    let config = SolverConfig::default();
    let solution = recommend_meal(&request, &config).unwrap();

    assert!(solution.is_feasible());
    assert!(solution.meal_protein_g >= 129.0);
}

#[test]
fn micro_targets_without_ul_distribute_shortfall() {
    let mut request = default_request();
    request.micro_targets = HashMap::from([
        (MicroKey::IronMg, 10.0),
        (MicroKey::CalciumMg, 800.0),
        (MicroKey::MagnesiumMg, 500.0),
        (MicroKey::VitaminCMg, 200.0),
    ]);

    let config = SolverConfig::default();
    let solution = recommend_meal(&request, &config).unwrap();
    assert!(solution.is_feasible());

    for (key, target) in &request.micro_targets {
        let realized = solution.meal_micros.get(key).copied().unwrap_or(0.0);
        assert!(
            realized >= 0.05 * target,
            "{key:?}: realized {realized} is less than 5% of target {target}"
        );
    }
}

#[test]
fn ul_cap_reduces_realized_iron_below_prior_solve() {
    let mut request = default_request();
    request.micro_targets = HashMap::from([
        (MicroKey::IronMg, 10.0),
        (MicroKey::CalciumMg, 800.0),
        (MicroKey::MagnesiumMg, 500.0),
        (MicroKey::VitaminCMg, 200.0),
    ]);
    let config = SolverConfig::default();

    let first = recommend_meal(&request, &config).unwrap();
    assert!(first.is_feasible());
    let iron_1 = first.meal_micros[&MicroKey::IronMg];

    request.micro_uls = HashMap::from([(MicroKey::IronMg, 0.85 * iron_1)]);
    let second = recommend_meal(&request, &config).unwrap();
    assert!(second.is_feasible());
    let iron_2 = second.meal_micros[&MicroKey::IronMg];

    assert!(iron_2 <= 0.85 * iron_1 + 0.1);
    assert!(iron_2 < iron_1);
}

#[test]
fn prioritizing_micros_over_total_weight_never_loses_micro_coverage() {
    let mut request = default_request();
    request.micro_targets = HashMap::from([
        (MicroKey::IronMg, 10.0),
        (MicroKey::CalciumMg, 800.0),
        (MicroKey::MagnesiumMg, 500.0),
        (MicroKey::VitaminCMg, 200.0),
    ]);
    let config = SolverConfig::default();

    request.priorities = Some(vec![Priority::Micros, Priority::TotalWeight]);
    let micros_first = recommend_meal(&request, &config).unwrap();

    request.priorities = Some(vec![Priority::TotalWeight, Priority::Micros]);
    let weight_first = recommend_meal(&request, &config).unwrap();

    assert!(micros_first.is_feasible() && weight_first.is_feasible());
    let total_grams = |sol: &meal_solver::Solution| -> u32 { sol.ingredients.iter().map(|i| i.grams).sum() };
    assert!(total_grams(&micros_first) >= total_grams(&weight_first));
}

#[test]
fn high_fat_ratio_yields_more_realized_fat_than_low_fat_ratio() {
    let config = SolverConfig::default();

    let mut low_fat = default_request();
    low_fat.macro_ratio = Some(MacroRatio {
        carb_pct: 60,
        protein_pct: 25,
        fat_pct: 15,
        pinned_carb_g: 0.0,
        pinned_protein_g: 0.0,
        pinned_fat_g: 0.0,
    });
    low_fat.priorities = Some(vec![Priority::MacroRatio, Priority::TotalWeight]);

    let mut high_fat = default_request();
    high_fat.macro_ratio = Some(MacroRatio {
        carb_pct: 30,
        protein_pct: 20,
        fat_pct: 50,
        pinned_carb_g: 0.0,
        pinned_protein_g: 0.0,
        pinned_fat_g: 0.0,
    });
    high_fat.priorities = Some(vec![Priority::MacroRatio, Priority::TotalWeight]);

    let low = recommend_meal(&low_fat, &config).unwrap();
    let high = recommend_meal(&high_fat, &config).unwrap();

    assert!(low.is_feasible() && high.is_feasible());
    assert!(high.meal_fat_g > low.meal_fat_g);
}

#[test]
fn macro_ratio_signal_survives_alongside_a_coexisting_loose_macro_constraint() {
    // Both the macro-ratio witness and a loose macro-constraint deviation
    // feed the same combined MACRO_RATIO-tier minimax witness
    // (model_builder's `macro_ratio_combined`); the loose deviation must be
    // normalized to the same percentage scale the ratio witness uses, or it
    // dominates the witness and the ratio tier becomes a no-op.
    let config = SolverConfig::default();
    let loose_fiber = MacroConstraint {
        nutrient: MacroNutrient::Fiber,
        mode: MacroMode::Gte,
        grams: 25,
        hard: false,
    };

    let mut low_fat = default_request();
    low_fat.macro_constraints = vec![loose_fiber];
    low_fat.macro_ratio = Some(MacroRatio {
        carb_pct: 60,
        protein_pct: 25,
        fat_pct: 15,
        pinned_carb_g: 0.0,
        pinned_protein_g: 0.0,
        pinned_fat_g: 0.0,
    });
    low_fat.priorities = Some(vec![Priority::MacroRatio, Priority::TotalWeight]);

    let mut high_fat = default_request();
    high_fat.macro_constraints = vec![loose_fiber];
    high_fat.macro_ratio = Some(MacroRatio {
        carb_pct: 30,
        protein_pct: 20,
        fat_pct: 50,
        pinned_carb_g: 0.0,
        pinned_protein_g: 0.0,
        pinned_fat_g: 0.0,
    });
    high_fat.priorities = Some(vec![Priority::MacroRatio, Priority::TotalWeight]);

    let low = recommend_meal(&low_fat, &config).unwrap();
    let high = recommend_meal(&high_fat, &config).unwrap();

    assert!(low.is_feasible() && high.is_feasible());
    assert!(high.meal_fat_g > low.meal_fat_g);
}

#[test]
fn full_stress_scenario_passes_the_overflow_preflight() {
    let mut request = default_request();
    request.micro_targets = MicroKey::ALL
        .iter()
        .map(|&k| (k, 10.0))
        .collect::<HashMap<_, _>>();
    request.macro_ratio = Some(MacroRatio {
        carb_pct: 50,
        protein_pct: 25,
        fat_pct: 25,
        pinned_carb_g: 0.0,
        pinned_protein_g: 0.0,
        pinned_fat_g: 0.0,
    });
    request.macro_constraints = vec![MacroConstraint {
        nutrient: MacroNutrient::Fiber,
        mode: MacroMode::Gte,
        grams: 25,
        hard: false,
    }];
    request.priorities = Some(vec![
        Priority::Micros,
        Priority::MacroRatio,
        Priority::IngredientDiversity,
        Priority::TotalWeight,
    ]);
    let config = SolverConfig::default();
    let solution = recommend_meal(&request, &config).expect("pre-flight must accept the full stress scenario");
    assert!(solution.is_feasible());
}

#[test]
fn empty_ingredient_list_is_infeasible() {
    let request = SolveRequest::default();
    let config = SolverConfig::default();
    let solution = recommend_meal(&request, &config).unwrap();
    assert_eq!(solution.status, SolutionStatus::Infeasible);
    assert!(solution.ingredients.is_empty());
    assert_eq!(solution.meal_calories_kcal, 0.0);
}

#[test]
fn zero_bound_ingredient_with_nonzero_calorie_target_is_infeasible() {
    let ingredient = fixtures::baseline_ingredients().remove(0);
    let zero_bound = meal_solver::IngredientInput::new(ingredient.ingredient, 0, 0).unwrap();
    let request = SolveRequest {
        ingredients: vec![zero_bound],
        targets: Targets::default(),
        ..Default::default()
    };
    let config = SolverConfig::default();
    let solution = recommend_meal(&request, &config).unwrap();
    assert_eq!(solution.status, SolutionStatus::Infeasible);
}

#[test]
fn physically_impossible_loose_constraint_still_yields_a_feasible_solution() {
    // Chicken thigh forced to exactly 200g (18.6g protein/100g => 37.2g
    // protein) makes "protein <= 1g" physically impossible to satisfy, but
    // since the constraint is soft it must not block feasibility — the
    // deviation term just comes out nonzero (spec.md §8 boundary behaviors).
    let mut ingredients = fixtures::baseline_ingredients();
    for input in ingredients.iter_mut() {
        if input.ingredient.label == "Chicken Thigh" {
            *input = meal_solver::IngredientInput::new(input.ingredient.clone(), 200, 200).unwrap();
        } else {
            *input = meal_solver::IngredientInput::new(input.ingredient.clone(), 0, 0).unwrap();
        }
    }

    let request = SolveRequest {
        ingredients,
        targets: Targets {
            meal_calories_kcal: 420,
            cal_tolerance: 50,
        },
        macro_constraints: vec![MacroConstraint {
            nutrient: MacroNutrient::Protein,
            mode: MacroMode::Lte,
            grams: 1,
            hard: false,
        }],
        ..Default::default()
    };
    let config = SolverConfig::default();
    let solution = recommend_meal(&request, &config).unwrap();

    assert!(solution.is_feasible());
    assert!(solution.meal_protein_g > 1.0);
}

#[test]
fn all_unknown_priorities_fall_back_to_total_weight_minimization() {
    let request = default_request();
    let config = SolverConfig {
        default_priorities: vec![],
        ..SolverConfig::default()
    };
    let solution = recommend_meal(&request, &config).unwrap();
    assert!(solution.is_feasible());
}
