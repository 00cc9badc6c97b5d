//! Common type aliases used throughout the engine.

/// Search depth in plies.
pub type Depth = u32;

/// Evaluation score. Positive favors Black inside evaluators; search results
/// are rescaled to the perspective of the searching side.
pub type Score = i32;
