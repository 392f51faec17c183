//! Balance configuration for the evaluation engine.
//!
//! Every tuning number in the engine lives here, in one value that callers
//! pass into each component. Nothing reads ambient/global state, so the
//! same engine can be re-parameterized for tuning runs or tests without
//! touching shared globals. `#[serde(default)]` lets tuning files override
//! only the knobs they care about.

use greenside_course::Terrain;
use serde::{Deserialize, Serialize};

/// All balance knobs for the shot cost model, solver, and hole scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Utilization above which the dispersion ramp kicks in.
    pub utilization_threshold: f32,
    /// Dispersion multiplier growth per unit of over-threshold utilization.
    pub dispersion_ramp: f32,
    /// Utilization above which a shot is physically invalid. Matches the
    /// solver's range inflation so sampled candidates stay legal.
    pub max_utilization: f32,
    /// Extra carry demanded beyond a water run, in yards.
    pub carry_buffer_yards: f32,
    /// Utilization at which the short-miss probability starts rising.
    pub short_miss_start: f32,
    /// Short-miss probability cap, reached at utilization 1.0.
    pub short_miss_max_probability: f32,
    /// Penalty strokes for a ball in the water.
    pub water_penalty_strokes: f32,
    /// Penalty strokes for a ball in a bunker.
    pub sand_penalty_strokes: f32,
    /// Penalty strokes for a ball in deep rough.
    pub deep_rough_penalty_strokes: f32,
    /// Penalty strokes for a ball in the rough.
    pub rough_penalty_strokes: f32,
    /// Cap on the landing footprint radius, in tiles.
    pub landing_max_radius: i32,
    /// Fractions of a club's (inflated) range sampled as candidate targets.
    pub distance_fractions: [f32; 4],
    /// Range inflation applied to candidate generation, permitting a
    /// slight overswing.
    pub range_inflation: f32,
    /// Hard cap on solver node expansions; a runaway-compute guard only.
    pub expansion_cap: usize,
    /// Routes costlier than this are reported unreachable.
    pub max_expected_shots: f32,
    /// Scratch shot count at or under which a hole is reachable in two.
    pub reachable_in_two_shots: f32,
    /// Minimum tee-to-green distance for a valid hole, in yards.
    pub min_hole_yards: f32,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            utilization_threshold: 0.9,
            dispersion_ramp: 2.2,
            max_utilization: 1.05,
            carry_buffer_yards: 10.0,
            short_miss_start: 0.92,
            short_miss_max_probability: 0.22,
            water_penalty_strokes: 2.6,
            sand_penalty_strokes: 0.6,
            deep_rough_penalty_strokes: 0.85,
            rough_penalty_strokes: 0.2,
            landing_max_radius: 6,
            distance_fractions: [0.55, 0.75, 0.92, 1.0],
            range_inflation: 1.05,
            expansion_cap: 12_000,
            max_expected_shots: 6.0,
            reachable_in_two_shots: 2.3,
            min_hole_yards: 90.0,
        }
    }
}

impl EvalConfig {
    /// Expected penalty strokes for a ball coming to rest on `terrain`.
    #[must_use]
    pub const fn landing_penalty_strokes(&self, terrain: Terrain) -> f32 {
        match terrain {
            Terrain::Water => self.water_penalty_strokes,
            Terrain::Sand => self.sand_penalty_strokes,
            Terrain::DeepRough => self.deep_rough_penalty_strokes,
            Terrain::Rough => self.rough_penalty_strokes,
            Terrain::Fairway | Terrain::Green | Terrain::Tee | Terrain::Path => 0.0,
        }
    }
}
