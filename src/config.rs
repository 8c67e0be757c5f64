//! Process-level solver configuration, following the teacher's `toml`-backed
//! config pattern (see `DESIGN.md`).

use crate::error::SolverError;
use crate::models::Priority;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Knobs that apply across calls to `solve()` but aren't part of any single
/// request (spec.md §6). Request-level values (ingredients, targets,
/// priorities) always take precedence over these defaults when both are
/// supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Wall-clock budget handed to the backend solver, in seconds.
    pub default_timeout_s: f64,
    /// Priority order used when a caller passes no explicit list.
    pub default_priorities: Vec<Priority>,
    /// Tie-breaking strategy for the micronutrient minimax sub-objective:
    /// `"depth"` weighs the worst-case shortfall only; `"breadth"` adds the
    /// summed-shortfall tiebreaker (spec.md §4.2).
    pub default_strategy: MicroStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MicroStrategy {
    Depth,
    Breadth,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            default_timeout_s: 5.0,
            default_priorities: Priority::DEFAULT.to_vec(),
            default_strategy: MicroStrategy::Depth,
        }
    }
}

impl SolverConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, SolverError> {
        toml::from_str(text).map_err(|source| SolverError::Config {
            path: "<inline>".to_string(),
            source,
        })
    }

    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, SolverError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SolverError::Config {
            path: path.display().to_string(),
            source: toml::de::Error::custom(e.to_string()),
        })?;
        toml::from_str(&text).map_err(|source| SolverError::Config {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_spec_defaults() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.default_timeout_s, 5.0);
        assert_eq!(cfg.default_priorities, Priority::DEFAULT.to_vec());
        assert_eq!(cfg.default_strategy, MicroStrategy::Depth);
    }

    #[test]
    fn parses_partial_overrides() {
        let cfg = SolverConfig::from_toml_str("default_timeout_s = 5.0\n").unwrap();
        assert_eq!(cfg.default_timeout_s, 5.0);
        assert_eq!(cfg.default_strategy, MicroStrategy::Depth);
    }

    #[test]
    fn loads_from_a_config_file_on_disk() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_timeout_s = 2.5\ndefault_strategy = \"breadth\"").unwrap();

        let cfg = SolverConfig::from_toml_path(file.path()).unwrap();
        assert_eq!(cfg.default_timeout_s, 2.5);
        assert_eq!(cfg.default_strategy, MicroStrategy::Breadth);
    }

    #[test]
    fn missing_config_file_reports_the_path() {
        let err = SolverConfig::from_toml_path("/nonexistent/solver.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/solver.toml"));
    }
}
