//! DRI/UL tables exercised the way a caller actually uses them: resolving a
//! demographic cell and feeding it into a solve request (spec.md §6 "the
//! core itself does not resolve demographics").

use meal_solver::config::SolverConfig;
use meal_solver::dri::{dri_targets, ul_targets, AgeGroup, Sex};
use meal_solver::solver::SolveRequest;
use meal_solver::{advisors::menu_optimizer::recommend_meal, fixtures, Targets};

#[test]
fn resolved_dri_targets_feed_a_feasible_solve() {
    let targets = dri_targets(Sex::Female, AgeGroup::Age31To50).clone();
    let uls = ul_targets(Sex::Female, AgeGroup::Age31To50).clone();

    let request = SolveRequest {
        ingredients: fixtures::baseline_ingredients(),
        targets: Targets::default(),
        micro_targets: targets,
        micro_uls: uls,
        ..Default::default()
    };
    let config = SolverConfig::default();
    let solution = recommend_meal(&request, &config).expect("full DRI/UL table must pass the overflow pre-flight");
    assert!(solution.is_feasible());
}

#[test]
fn every_demographic_cell_is_internally_consistent() {
    for sex in [Sex::Male, Sex::Female] {
        for age in [
            AgeGroup::Age19To30,
            AgeGroup::Age31To50,
            AgeGroup::Age51To70,
            AgeGroup::Age71Plus,
        ] {
            let targets = dri_targets(sex, age);
            let uls = ul_targets(sex, age);
            assert!(!targets.is_empty());
            assert!(!uls.is_empty());
        }
    }
}
