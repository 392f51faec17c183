//! Shot planning and hole scoring for the Greenside course engine.
//!
//! This crate implements a three-level evaluation architecture:
//!
//! 1. **Shot Evaluation** ([`shot`]) - Prices a single candidate shot as an
//!    expected stroke cost: base stroke, dispersion-driven landing risk,
//!    and water-carry risk.
//!
//! 2. **Shot Planning** ([`solver`]) - Finds the minimum expected-cost
//!    route of shots from tee to green with uniform-cost search over an
//!    implicit graph of tile positions.
//!
//! 3. **Hole Scoring** ([`score`]) - Runs the solver for the two fixed
//!    skill profiles and aggregates the winning plan into par,
//!    reachability, corridor composition, and the four 0-100 quality
//!    scores (playability, difficulty, aesthetics, overall).
//!
//! ```text
//! Hole Scoring (per-hole quality metrics)
//!     ↓ uses
//! Shot Planning (route tee → green)
//!     ↓ uses
//! Shot Evaluation (price a single shot)
//! ```
//!
//! # Determinism
//!
//! Every "probability" in the engine is a closed-form weighted average,
//! never a random draw: identical inputs always produce bit-identical
//! outputs. All balance numbers live in one injected [`config::EvalConfig`]
//! value, so tuning runs and tests can re-parameterize the engine without
//! shared mutable state.
//!
//! # Errors
//!
//! Nothing here throws or returns `Result`: abnormal conditions are data.
//! An impossible shot is an invalid evaluation with infinite cost, an
//! unroutable hole is an unreachable solve, and a malformed hole still
//! scores - with sentinel values and explanatory issue strings.

pub mod config;
pub mod score;
pub mod shot;
pub mod solver;
