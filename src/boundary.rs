//! Documents the external-collaborator contract (spec.md §1, §6) without
//! implementing any side of it: this crate is the reusable core, not the
//! system around it.
//!
//! The following are deliberately out of scope and specified only at their
//! boundary:
//!
//! - **USDA-data ingest.** Builds the food database this crate's
//!   [`crate::models::Ingredient`] values are drawn from: merging reference
//!   sources, deduplicating, filtering categories, rejecting
//!   ultra-processed items by description, and extracting the 20 canonical
//!   nutrients into each ingredient's per-100g map. This crate consumes an
//!   already-joined `Ingredient`; the byte layout of the upstream source
//!   data is out of scope.
//! - **HTTP / MCP surface.** Exposes [`crate::advisors::menu_optimizer::recommend_meal`]
//!   over a network protocol. Request/response (de)serialization uses the
//!   `serde` derives already on every request/response type in this crate,
//!   so a thin transport layer is all an embedder needs to add.
//! - **Terminal / graphical front-ends.** Render a `Solution` to a user and
//!   collect ingredient selections and bounds.
//! - **Persistent user-preference storage.** Demographics (`Sex`,
//!   `AgeGroup`), prior pinned-macro commitments, and saved priority orders
//!   live outside this crate; callers resolve them into `MicroTargets`,
//!   `MicroULs`, and `MacroRatio` before calling `solve`.
//! - **Food-search UI.** Lets a user browse and select ingredients before
//!   constructing an `IngredientInput` list.
//!
//! The core does not resolve demographics itself — [`crate::dri::dri_targets`]
//! and [`crate::dri::ul_targets`] are exposed so a caller can do that
//! resolution, but `solve` only ever sees already-reduced `MicroTargets`/
//! `MicroULs` maps.
