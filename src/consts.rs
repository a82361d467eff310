//! Numeric constants shared across the simulation.

/// Tolerance for float comparisons (normalization checks, symmetry checks).
pub const FLOAT_COMPARISON_EPSILON: f64 = 1e-9;

/// An asset counts as "active" in a portfolio when its allocation
/// strictly exceeds this threshold.
pub const ACTIVE_ALLOCATION_THRESHOLD: f64 = 0.01;

/// Raw allocation weights are drawn as uniform integers in
/// `[0, RAW_WEIGHT_DRAW_BOUND)` before normalization.
pub const RAW_WEIGHT_DRAW_BOUND: u32 = 100;
