//! Integer nutrition solver for a single meal.
//!
//! Builds and solves an integer program over candidate ingredients' gram
//! amounts such that the meal lands within a calorie band, respects
//! optional macro bounds, never exceeds per-nutrient upper intake levels,
//! and optimizes a user-ordered hierarchy of soft goals. See
//! [`advisors::menu_optimizer::recommend_meal`] for the main entry point.

pub mod advisors;
pub mod boundary;
pub mod config;
pub mod dri;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod nutrient;
pub mod solver;

pub use config::SolverConfig;
pub use error::SolverError;
pub use models::{
    Ingredient, IngredientInput, MacroConstraint, MacroMode, MacroNutrient, MacroRatio,
    MacroVector, Priority, Solution, SolutionStatus, SolvedIngredient, Targets,
};
pub use nutrient::MicroKey;
pub use solver::SolveRequest;
