//! Solves the baseline nine-ingredient scenario and prints the result.
//! Grounded on the teacher's plain synchronous `examples/mcp_test.rs` demo
//! style (kept under `demos/` here rather than `examples/`).

use meal_solver::config::SolverConfig;
use meal_solver::solver::SolveRequest;
use meal_solver::{advisors::menu_optimizer, fixtures, Targets};

fn main() {
    tracing_subscriber::fmt::init();

    let request = SolveRequest {
        ingredients: fixtures::baseline_ingredients(),
        targets: Targets::default(),
        ..Default::default()
    };
    let config = SolverConfig::default();

    match menu_optimizer::recommend_meal(&request, &config) {
        Ok(solution) => {
            println!("status: {:?}", solution.status);
            println!(
                "meal: {:.1} kcal, {:.1}g protein, {:.1}g fat, {:.1}g carbs, {:.1}g fiber",
                solution.meal_calories_kcal,
                solution.meal_protein_g,
                solution.meal_fat_g,
                solution.meal_carbs_g,
                solution.meal_fiber_g,
            );
            for ing in &solution.ingredients {
                println!("  ingredient {}: {} g", ing.ingredient_id, ing.grams);
            }
        }
        Err(e) => {
            eprintln!("solve failed: {e}");
            std::process::exit(1);
        }
    }
}
