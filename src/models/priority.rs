//! The soft-goal priority list.
//!
//! Represented as "a tagged enumeration over a closed variant set ...
//! composed ... in order" per spec.md §9, rather than dynamic dispatch or
//! per-tier polymorphism — the recommendation spec.md makes explicitly when
//! discussing how a systems-language port should differ from the teacher's
//! `OptimizationAlgorithm` trait-object style (see `DESIGN.md`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Micros,
    MacroRatio,
    IngredientDiversity,
    TotalWeight,
}

impl Priority {
    /// Default priority order used when the caller passes no priority list
    /// at all (spec.md §6).
    pub const DEFAULT: [Priority; 4] = [
        Priority::Micros,
        Priority::MacroRatio,
        Priority::IngredientDiversity,
        Priority::TotalWeight,
    ];

    fn tag(self) -> &'static str {
        match self {
            Priority::Micros => "micros",
            Priority::MacroRatio => "macro_ratio",
            Priority::IngredientDiversity => "ingredient_diversity",
            Priority::TotalWeight => "total_weight",
        }
    }

    /// Parses a raw string tag, used at the boundary where priorities
    /// arrive as caller-supplied strings (e.g. from an HTTP/MCP request)
    /// rather than already-typed `Priority` values. Unknown tags return
    /// `None`; `normalize` then drops them, per spec.md §3 "unknown
    /// entries are ignored."
    pub fn parse_tag(tag: &str) -> Option<Priority> {
        match tag {
            "micros" => Some(Priority::Micros),
            "macro_ratio" => Some(Priority::MacroRatio),
            "ingredient_diversity" => Some(Priority::IngredientDiversity),
            "total_weight" => Some(Priority::TotalWeight),
            _ => None,
        }
    }
}

/// Normalizes a caller-supplied priority list per spec.md §3: duplicates
/// are dropped (first occurrence wins, since composition order matters),
/// and an empty list falls back to `[TotalWeight]`.
///
/// Note this is distinct from the "no list at all" case, which uses
/// `Priority::DEFAULT` instead (spec.md §6) — that distinction is made by
/// the caller of `solve()`, not by this function.
pub fn normalize(list: Vec<Priority>) -> Vec<Priority> {
    let mut seen = Vec::with_capacity(list.len());
    for p in list {
        if !seen.contains(&p) {
            seen.push(p);
        }
    }
    if seen.is_empty() {
        seen.push(Priority::TotalWeight);
    }
    seen
}

/// Parses and normalizes a raw tag list from an external boundary: unknown
/// tags and duplicates are dropped; an empty or all-unknown list falls back
/// to `[TotalWeight]`.
pub fn parse_and_normalize(tags: &[String]) -> Vec<Priority> {
    let parsed: Vec<Priority> = tags.iter().filter_map(|t| Priority::parse_tag(t)).collect();
    normalize(parsed)
}
