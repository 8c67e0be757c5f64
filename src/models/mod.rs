//! Request-scoped value types. All values here are plain data: the solver
//! retains no state between calls (spec.md §3 Lifecycles).

pub mod ingredient;
pub mod priority;
pub mod solution;
pub mod targets;

pub use ingredient::{Ingredient, IngredientInput, MacroVector};
pub use priority::Priority;
pub use solution::{SolvedIngredient, Solution, SolutionStatus};
pub use targets::{MacroConstraint, MacroMode, MacroNutrient, MacroRatio, Targets};
