#[path = "property/score_bounds.rs"]
mod score_bounds;

#[path = "property/delta_positive.rs"]
mod delta_positive;

#[path = "property/determinism.rs"]
mod determinism;
