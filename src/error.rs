//! Domain error type, following the teacher's `thiserror` ambient pattern
//! (see `DESIGN.md`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    /// The lexicographic weight chain would exceed the solver's safe integer
    /// range before a single constraint is even built (spec.md §4.3's
    /// pre-flight guard). Carries the tier index at which the overflow was
    /// detected.
    #[error("lexicographic objective weights overflow at priority index {tier_index}")]
    ObjectiveOverflow { tier_index: usize },

    /// Config file present but unparsable.
    #[error("failed to load solver config from {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
