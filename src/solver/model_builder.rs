//! Decision variables, hard constraints, and soft-objective witness terms
//! (spec.md §4.2), grounded on `daily_chow.solver.solve`'s model-assembly
//! section and the `good_lp` usage shown in the diet-problem example in the
//! retrieved reference pack (see `DESIGN.md`).

use crate::models::{IngredientInput, MacroConstraint, MacroMode, MacroNutrient, MacroRatio, Targets};
use crate::nutrient::MicroKey;
use crate::solver::coefficients::{self, MacroCoeffs, S_MACRO, S_MICRO};
use good_lp::{constraint, variable, Constraint, Expression, ProblemVariables, Variable};
use std::collections::HashMap;

/// Basis-point scale for macro-ratio and loose-macro-constraint percentage
/// deviations: 10_000 = 100.00%.
pub const PCT_SCALE: i64 = 10_000;
/// Coarser percentage scale deliberately used for the micros tier, per
/// spec.md §4.3's "compact scales" rationale: 1% precision keeps the full
/// lex chain inside int64 even with all 20 canonical nutrients active.
pub const MICRO_PCT: i64 = 100;

/// One candidate term for the lexicographic objective: a nonnegative
/// expression together with the tightest known upper bound on its value.
pub struct ObjectiveTerm {
    pub expr: Expression,
    pub max_value: i64,
}

/// Witnesses produced inside the MICROS tier, in spec.md §4.3's sub-priority
/// order: UL proximity first, then coverage (worst-case and sum, ordered by
/// strategy).
#[derive(Default)]
pub struct MicroWitnesses {
    pub worst_ul_prox: Option<ObjectiveTerm>,
    pub worst_pct: Option<ObjectiveTerm>,
    pub sum_pct: Option<ObjectiveTerm>,
}

pub struct BuiltModel {
    pub vars: ProblemVariables,
    pub constraints: Vec<Constraint>,
    pub gram_vars: Vec<Variable>,
    pub micro: MicroWitnesses,
    pub macro_ratio: Option<ObjectiveTerm>,
    pub diversity: Option<ObjectiveTerm>,
    pub total_weight: ObjectiveTerm,
}

fn macro_total(coeffs: &[MacroCoeffs], gram_vars: &[Variable], pick: impl Fn(&MacroCoeffs) -> i64) -> Expression {
    gram_vars
        .iter()
        .zip(coeffs.iter())
        .map(|(&v, c)| Expression::from(v) * pick(c) as f64)
        .sum()
}

fn macro_expr_for<'a>(
    nutrient: MacroNutrient,
    totals: &'a HashMap<MacroNutrient, Expression>,
) -> &'a Expression {
    totals.get(&nutrient).expect("every macro nutrient has a total expression")
}

fn macro_coeff_for(nutrient: MacroNutrient, c: &MacroCoeffs) -> i64 {
    match nutrient {
        MacroNutrient::Protein => c.protein,
        MacroNutrient::Fat => c.fat,
        MacroNutrient::Carbs => c.carbs,
        MacroNutrient::Fiber => c.fiber,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn build(
    inputs: &[IngredientInput],
    targets: Targets,
    micro_targets: &HashMap<MicroKey, f64>,
    micro_uls: &HashMap<MicroKey, f64>,
    macro_ratio: Option<MacroRatio>,
    macro_constraints: &[MacroConstraint],
    want_diversity: bool,
) -> BuiltModel {
    let mut vars = ProblemVariables::new();
    let mut constraints: Vec<Constraint> = Vec::new();

    // ── Decision variables ────────────────────────────────────────
    let gram_vars: Vec<Variable> = inputs
        .iter()
        .map(|inp| {
            vars.add(
                variable()
                    .integer()
                    .min(inp.min_g as f64)
                    .max(inp.max_g as f64),
            )
        })
        .collect();

    let macro_coeffs = coefficients::precompute_macro_coeffs(inputs);

    let total_cal = macro_total(&macro_coeffs, &gram_vars, |c| c.calories);
    let mut macro_totals: HashMap<MacroNutrient, Expression> = HashMap::new();
    macro_totals.insert(MacroNutrient::Protein, macro_total(&macro_coeffs, &gram_vars, |c| c.protein));
    macro_totals.insert(MacroNutrient::Fat, macro_total(&macro_coeffs, &gram_vars, |c| c.fat));
    macro_totals.insert(MacroNutrient::Carbs, macro_total(&macro_coeffs, &gram_vars, |c| c.carbs));
    macro_totals.insert(MacroNutrient::Fiber, macro_total(&macro_coeffs, &gram_vars, |c| c.fiber));

    // ── Calorie band ──────────────────────────────────────────────
    let cal_target_scaled = targets.meal_calories_kcal as i64 * S_MACRO;
    let cal_tol_scaled = targets.cal_tolerance as i64 * S_MACRO;
    let cal_dev = vars.add(
        variable()
            .integer()
            .min(-cal_tol_scaled as f64)
            .max(cal_tol_scaled as f64),
    );
    constraints.push(constraint!(total_cal.clone() - cal_target_scaled as f64 == cal_dev));

    // ── Macro constraints ─────────────────────────────────────────
    let mut loose_pct_vars: Vec<Variable> = Vec::new();
    let mut ratio_excluded: std::collections::HashSet<MacroNutrient> = std::collections::HashSet::new();

    for mc in macro_constraints {
        if mc.mode == MacroMode::None {
            continue;
        }
        ratio_excluded.insert(mc.nutrient);
        let expr = macro_expr_for(mc.nutrient, &macro_totals).clone();
        let target_scaled = mc.grams as i64 * S_MACRO;

        if mc.hard {
            match mc.mode {
                MacroMode::Gte => constraints.push(constraint!(expr >= target_scaled as f64)),
                MacroMode::Lte => constraints.push(constraint!(expr <= target_scaled as f64)),
                MacroMode::Eq => {
                    constraints.push(constraint!(expr.clone() >= target_scaled as f64));
                    constraints.push(constraint!(expr <= target_scaled as f64));
                }
                MacroMode::None => unreachable!(),
            }
        } else {
            let coeff_pick = |c: &MacroCoeffs| macro_coeff_for(mc.nutrient, c);
            let max_possible: i64 = inputs
                .iter()
                .zip(macro_coeffs.iter())
                .map(|(inp, c)| inp.max_g as i64 * coeff_pick(c))
                .sum();
            let dev_bound = max_possible.max(target_scaled).max(1);
            let dev = vars.add(variable().integer().min(0.0).max(dev_bound as f64));

            match mc.mode {
                MacroMode::Gte => {
                    constraints.push(constraint!(dev >= expr * -1.0 + target_scaled as f64));
                }
                MacroMode::Lte => {
                    constraints.push(constraint!(dev >= expr - target_scaled as f64));
                }
                MacroMode::Eq => {
                    let diff = vars.add(
                        variable()
                            .integer()
                            .min(-dev_bound as f64)
                            .max(dev_bound as f64),
                    );
                    constraints.push(constraint!(diff == expr - target_scaled as f64));
                    constraints.push(constraint!(dev >= diff));
                    constraints.push(constraint!(dev >= -diff));
                }
                MacroMode::None => unreachable!(),
            }

            // Lift the raw gram-scale deviation to a normalized percentage
            // variable before it ever touches a shared minimax witness,
            // per spec.md §4.2/§9: `gte` normalizes by the target itself,
            // `lte`/`eq` by the deviation's own upper bound.
            let norm_denom = match mc.mode {
                MacroMode::Gte => target_scaled.max(1),
                _ => dev_bound,
            };
            let pct = vars.add(variable().integer().min(0.0).max(PCT_SCALE as f64));
            constraints.push(constraint!(
                Expression::from(pct) * norm_denom as f64 >= Expression::from(dev) * PCT_SCALE as f64
            ));
            loose_pct_vars.push(pct);
        }
    }

    let worst_loose = if loose_pct_vars.is_empty() {
        None
    } else {
        let w = vars.add(variable().integer().min(0.0).max(PCT_SCALE as f64));
        for &dv in &loose_pct_vars {
            constraints.push(constraint!(w >= dv));
        }
        Some(ObjectiveTerm {
            expr: w.into(),
            max_value: PCT_SCALE,
        })
    };

    // ── Micronutrient expressions (memoized, built lazily per key) ─
    let mut relevant_keys: Vec<MicroKey> = micro_targets.keys().chain(micro_uls.keys()).copied().collect();
    relevant_keys.sort();
    relevant_keys.dedup();
    let micro_coeffs = coefficients::precompute_micro_coeffs(inputs, &relevant_keys);
    let mut micro_exprs: HashMap<MicroKey, Expression> = HashMap::new();
    for key in &relevant_keys {
        let coeffs = &micro_coeffs[key];
        if coeffs.iter().all(|&c| c == 0) {
            // spec.md §7 "out-of-range reference": no ingredient in this
            // solve carries `key` at all, so its total is identically zero.
            // Not an error — shortfall logic below treats it as full
            // shortfall — but worth a warning, since it usually means a
            // caller typo'd a key or picked an ingredient set missing it.
            tracing::warn!(micro_key = %key, "micronutrient target/UL key has zero total across every candidate ingredient");
        }
        let expr: Expression = gram_vars
            .iter()
            .zip(coeffs.iter())
            .filter(|(_, &c)| c != 0)
            .map(|(&v, &c)| Expression::from(v) * c as f64)
            .sum();
        micro_exprs.insert(*key, expr);
    }

    // ── UL hard caps ──────────────────────────────────────────────
    for (key, ul_val) in micro_uls {
        let ul_scaled = (*ul_val * S_MICRO as f64).round() as i64;
        if ul_scaled <= 0 {
            continue;
        }
        constraints.push(constraint!(micro_exprs[key].clone() <= ul_scaled as f64));
    }

    // ── Micronutrient coverage minimax (worst_pct, sum_pct) ────────
    let mut pct_short_vars: Vec<Variable> = Vec::new();
    for (key, target_val) in micro_targets {
        let target_scaled = (*target_val * S_MICRO as f64).round() as i64;
        if target_scaled <= 0 {
            continue;
        }
        let total = micro_exprs
            .entry(*key)
            .or_insert_with(Expression::default)
            .clone();

        let shortfall = vars.add(variable().integer().min(0.0).max(target_scaled as f64));
        constraints.push(constraint!(shortfall >= total * -1.0 + target_scaled as f64));

        let pct_short = vars.add(variable().integer().min(0.0).max(MICRO_PCT as f64));
        constraints.push(constraint!(
            Expression::from(pct_short) * target_scaled as f64 >= Expression::from(shortfall) * MICRO_PCT as f64
        ));
        pct_short_vars.push(pct_short);
    }

    let (worst_pct, sum_pct) = if pct_short_vars.is_empty() {
        (None, None)
    } else {
        let worst = vars.add(variable().integer().min(0.0).max(MICRO_PCT as f64));
        for &ps in &pct_short_vars {
            constraints.push(constraint!(worst >= ps));
        }
        let sum_expr: Expression = pct_short_vars.iter().map(|&v| Expression::from(v)).sum();
        let max_sum = pct_short_vars.len() as i64 * MICRO_PCT;
        (
            Some(ObjectiveTerm { expr: worst.into(), max_value: MICRO_PCT }),
            Some(ObjectiveTerm { expr: sum_expr, max_value: max_sum }),
        )
    };

    // ── UL proximity sub-objective ──────────────────────────────────
    let mut ul_prox_vars: Vec<Variable> = Vec::new();
    for (key, ul_val) in micro_uls {
        let Some(target_val) = micro_targets.get(key) else { continue };
        let ul_scaled = (*ul_val * S_MICRO as f64).round() as i64;
        let target_scaled = (*target_val * S_MICRO as f64).round() as i64;
        let headroom = ul_scaled - target_scaled;
        if headroom <= 0 {
            continue;
        }
        let total = micro_exprs
            .entry(*key)
            .or_insert_with(Expression::default)
            .clone();

        let excess = vars.add(variable().integer().min(0.0).max(headroom as f64));
        constraints.push(constraint!(excess >= total - target_scaled as f64));

        let ul_prox = vars.add(variable().integer().min(0.0).max(100.0));
        constraints.push(constraint!(
            Expression::from(ul_prox) * headroom as f64 >= Expression::from(excess) * 100.0
        ));
        ul_prox_vars.push(ul_prox);
    }

    let worst_ul_prox = if ul_prox_vars.is_empty() {
        None
    } else {
        let worst = vars.add(variable().integer().min(0.0).max(100.0));
        for &up in &ul_prox_vars {
            constraints.push(constraint!(worst >= up));
        }
        Some(ObjectiveTerm { expr: worst.into(), max_value: 100 })
    };

    // ── Macro-ratio sub-objective ───────────────────────────────────
    let macro_ratio_term = macro_ratio.map(|ratio| {
        let pinned_carb_cal = (ratio.pinned_carb_g * 4.0 * S_MACRO as f64).round() as i64;
        let pinned_pro_cal = (ratio.pinned_protein_g * 4.0 * S_MACRO as f64).round() as i64;
        let pinned_fat_cal = (ratio.pinned_fat_g * 9.0 * S_MACRO as f64).round() as i64;

        let day_carb_cal = macro_totals[&MacroNutrient::Carbs].clone() * 4.0 + pinned_carb_cal as f64;
        let day_pro_cal = macro_totals[&MacroNutrient::Protein].clone() * 4.0 + pinned_pro_cal as f64;
        let day_fat_cal = macro_totals[&MacroNutrient::Fat].clone() * 9.0 + pinned_fat_cal as f64;
        let day_total_cal = day_carb_cal.clone() + day_pro_cal.clone() + day_fat_cal.clone();

        let max_cal: i64 = inputs
            .iter()
            .zip(macro_coeffs.iter())
            .map(|(inp, c)| inp.max_g as i64 * (c.carbs * 4 + c.protein * 4 + c.fat * 9))
            .sum::<i64>()
            + pinned_carb_cal
            + pinned_pro_cal
            + pinned_fat_cal;

        let pinned_cal = pinned_carb_cal + pinned_pro_cal + pinned_fat_cal;
        let cal_denom = targets.meal_calories_kcal as i64 * S_MACRO + pinned_cal;

        let mut dev_vars: Vec<Variable> = Vec::new();
        let legs: [(MacroNutrient, Expression, u32); 3] = [
            (MacroNutrient::Carbs, day_carb_cal, ratio.carb_pct),
            (MacroNutrient::Protein, day_pro_cal, ratio.protein_pct),
            (MacroNutrient::Fat, day_fat_cal, ratio.fat_pct),
        ];
        for (nutrient, cal_expr, target_pct) in legs {
            if ratio_excluded.contains(&nutrient) {
                continue;
            }
            let diff_expr = cal_expr * 100.0 - day_total_cal.clone() * target_pct as f64;
            let bound = (max_cal as f64 * 100.0).max(1.0);
            let diff = vars.add(variable().integer().min(-bound).max(bound));
            constraints.push(constraint!(diff == diff_expr));

            let abs_diff = vars.add(variable().integer().min(0.0).max(bound));
            constraints.push(constraint!(abs_diff >= diff));
            constraints.push(constraint!(abs_diff >= -diff));

            let pct_dev = vars.add(variable().integer().min(0.0).max(PCT_SCALE as f64));
            constraints.push(constraint!(
                Expression::from(pct_dev) * (cal_denom as f64 * 100.0)
                    >= Expression::from(abs_diff) * PCT_SCALE as f64
            ));
            dev_vars.push(pct_dev);
        }

        if dev_vars.is_empty() {
            None
        } else {
            let worst = vars.add(variable().integer().min(0.0).max(PCT_SCALE as f64));
            for &dv in &dev_vars {
                constraints.push(constraint!(worst >= dv));
            }
            Some(ObjectiveTerm { expr: worst.into(), max_value: PCT_SCALE })
        }
    }).flatten();

    // Combine the macro-ratio witness and the loose-macro-deviation witness
    // into one chain link, per spec.md §4.3: both are already normalized to
    // comparable percentage scales, so a shared minimax witness dominates
    // both without adding a second weight tier.
    let macro_ratio_combined = match (macro_ratio_term, worst_loose) {
        (Some(a), Some(b)) => {
            let max_value = a.max_value.max(b.max_value);
            let w = vars.add(variable().integer().min(0.0).max(max_value as f64));
            constraints.push(constraint!(w >= a.expr));
            constraints.push(constraint!(w >= b.expr));
            Some(ObjectiveTerm { expr: w.into(), max_value })
        }
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    };

    // ── Ingredient diversity ─────────────────────────────────────────
    let diversity_term = if want_diversity && !gram_vars.is_empty() {
        let max_bound = inputs.iter().map(|inp| inp.max_g).max().unwrap_or(0);
        let max_gram = vars.add(variable().integer().min(0.0).max(max_bound as f64));
        for &v in &gram_vars {
            constraints.push(constraint!(max_gram >= v));
        }
        Some(ObjectiveTerm { expr: max_gram.into(), max_value: max_bound as i64 })
    } else {
        None
    };

    // ── Total weight ───────────────────────────────────────────────
    let total_grams: Expression = gram_vars.iter().map(|&v| Expression::from(v)).sum();
    let max_total: i64 = inputs.iter().map(|inp| inp.max_g as i64).sum();
    let total_weight_term = ObjectiveTerm { expr: total_grams, max_value: max_total.max(1) };

    BuiltModel {
        vars,
        constraints,
        gram_vars,
        micro: MicroWitnesses { worst_ul_prox, worst_pct, sum_pct },
        macro_ratio: macro_ratio_combined,
        diversity: diversity_term,
        total_weight: total_weight_term,
    }
}
