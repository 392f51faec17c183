//! Shot cost model: the expected stroke cost of a single candidate shot.
//!
//! Given an origin, a target, a golfer, and a club, the model combines:
//!
//! 1. **Base geometry** - distance, utilization of the club's carry, and a
//!    dispersion ramp that widens the landing scatter once a swing goes
//!    past its comfortable range.
//! 2. **Water-carry risk** - the longest contiguous water run along the
//!    straight shot line must be carried in the air; a club that cannot do
//!    so makes the shot invalid, one that barely can pays a short-miss
//!    penalty.
//! 3. **Landing-terrain risk** - a Gaussian-weighted footprint around the
//!    target turns the surrounding terrain into a probability distribution
//!    and prices the expected lie.
//!
//! The result is a closed-form expectation. There is no sampling anywhere:
//! identical inputs always produce identical evaluations.

use greenside_course::{ClubSpec, Course, GolferProfile, Terrain, TilePos};

use crate::config::EvalConfig;

/// The guaranteed cost of taking a shot at all.
pub const BASE_STROKE: f32 = 1.0;

/// Utilization reported for a club with no usable carry.
const UNUSABLE_UTILIZATION: f32 = 99.0;

/// Expected-cost breakdown of one candidate shot.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotEvaluation {
    pub distance_yards: f32,
    pub utilization: f32,
    pub dispersion_tiles: f32,
    pub expected_landing_penalty: f32,
    pub expected_carry_penalty: f32,
    /// Total expected strokes; `+inf` when the shot is invalid.
    pub expected_cost: f32,
    pub is_valid: bool,
    /// Human-readable diagnostics; never used for control flow.
    pub trace: Vec<String>,
}

impl ShotEvaluation {
    fn invalid(
        distance_yards: f32,
        utilization: f32,
        dispersion_tiles: f32,
        trace: Vec<String>,
    ) -> Self {
        Self {
            distance_yards,
            utilization,
            dispersion_tiles,
            expected_landing_penalty: 0.0,
            expected_carry_penalty: 0.0,
            expected_cost: f32::INFINITY,
            is_valid: false,
            trace,
        }
    }
}

/// Evaluates the expected cost of hitting `club` from `from` to `to`.
#[must_use]
pub fn evaluate_shot(
    course: &Course,
    from: TilePos,
    to: TilePos,
    golfer: &GolferProfile,
    club: &ClubSpec,
    config: &EvalConfig,
) -> ShotEvaluation {
    let tile_distance = from.distance_to(to);
    let distance_yards = tile_distance * golfer.yards_per_tile;
    let utilization = if club.carry_yards > 0.0 {
        distance_yards / club.carry_yards
    } else {
        UNUSABLE_UTILIZATION
    };
    let over = (utilization - config.utilization_threshold).max(0.0);
    let dispersion_tiles = club.dispersion_tiles * (1.0 + over * config.dispersion_ramp);

    let mut trace = vec![format!(
        "{}: {distance_yards:.0}y, utilization {utilization:.2}, dispersion {dispersion_tiles:.2} tiles",
        club.name
    )];

    if utilization > config.max_utilization {
        trace.push("target beyond usable range".to_owned());
        return ShotEvaluation::invalid(distance_yards, utilization, dispersion_tiles, trace);
    }

    let mut expected_carry_penalty = 0.0;
    let run_tiles = longest_water_run(course, from, to);
    if run_tiles > 0 {
        #[expect(clippy::cast_precision_loss)]
        let run_yards = run_tiles as f32 * golfer.yards_per_tile;
        let required_yards = run_yards + config.carry_buffer_yards;
        if club.carry_yards < required_yards {
            trace.push(format!(
                "cannot carry {run_yards:.0}y of water ({required_yards:.0}y needed, {:.0}y available)",
                club.carry_yards
            ));
            return ShotEvaluation::invalid(distance_yards, utilization, dispersion_tiles, trace);
        }
        let short_miss = short_miss_probability(utilization, config);
        if short_miss > 0.0 {
            expected_carry_penalty = short_miss * config.water_penalty_strokes;
            trace.push(format!(
                "forced carry of {run_yards:.0}y: {:.0}% short-miss risk",
                short_miss * 100.0
            ));
        }
    }

    let landing = LandingDistribution::around(course, to, dispersion_tiles, config);
    let expected_landing_penalty = landing.expected_penalty(config);

    ShotEvaluation {
        distance_yards,
        utilization,
        dispersion_tiles,
        expected_landing_penalty,
        expected_carry_penalty,
        expected_cost: BASE_STROKE + expected_landing_penalty + expected_carry_penalty,
        is_valid: true,
        trace,
    }
}

/// Probability of coming up short on a forced carry.
///
/// Zero up to the configured start utilization, then linear to the capped
/// maximum at utilization 1.0 (and flat beyond it).
fn short_miss_probability(utilization: f32, config: &EvalConfig) -> f32 {
    let span = 1.0 - config.short_miss_start;
    if span <= 0.0 || utilization <= config.short_miss_start {
        return 0.0;
    }
    let t = ((utilization - config.short_miss_start) / span).min(1.0);
    t * config.short_miss_max_probability
}

/// Rasterizes the straight line from `from` to `to`, inclusive of both
/// endpoints (Bresenham).
#[must_use]
pub fn grid_line(from: TilePos, to: TilePos) -> Vec<TilePos> {
    let mut points = Vec::new();
    let (mut x, mut y) = (from.x, from.y);
    let dx = (to.x - from.x).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let dy = -(to.y - from.y).abs();
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        points.push(TilePos::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Longest contiguous run of water tiles along the shot line, in tiles.
/// The origin tile is excluded from the scan.
fn longest_water_run(course: &Course, from: TilePos, to: TilePos) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for pos in grid_line(from, to).into_iter().skip(1) {
        if course.terrain_at(pos).is_some_and(Terrain::is_water) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Gaussian-weighted terrain distribution of a shot's landing footprint.
///
/// Tiles within `dispersion` of the target are weighted by
/// `exp(-d²/(2σ²))` and bucketed by terrain; out-of-bounds tiles carry no
/// weight. A degenerate footprint (zero total weight) prices to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingDistribution {
    weights: [f32; Terrain::LEN],
    total_weight: f32,
}

impl LandingDistribution {
    #[must_use]
    pub fn around(
        course: &Course,
        center: TilePos,
        dispersion_tiles: f32,
        config: &EvalConfig,
    ) -> Self {
        #[expect(clippy::cast_possible_truncation)]
        let radius = config.landing_max_radius.min(dispersion_tiles.ceil() as i32);
        let sigma = (dispersion_tiles * 0.55).max(0.8);
        let dispersion_sq = dispersion_tiles * dispersion_tiles;
        let two_sigma_sq = 2.0 * sigma * sigma;

        let mut weights = [0.0; Terrain::LEN];
        let mut total_weight = 0.0;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                #[expect(clippy::cast_precision_loss)]
                let offset_sq = (dx * dx + dy * dy) as f32;
                if offset_sq > dispersion_sq {
                    continue;
                }
                let Some(terrain) = course.terrain_at(center.offset(dx, dy)) else {
                    continue;
                };
                let weight = (-offset_sq / two_sigma_sq).exp();
                weights[terrain.index()] += weight;
                total_weight += weight;
            }
        }
        Self {
            weights,
            total_weight,
        }
    }

    /// Probability of landing on `terrain`; zero for a degenerate footprint.
    #[must_use]
    pub fn probability(&self, terrain: Terrain) -> f32 {
        if self.total_weight > 0.0 {
            self.weights[terrain.index()] / self.total_weight
        } else {
            0.0
        }
    }

    /// Probability-weighted penalty strokes of the expected lie.
    #[must_use]
    pub fn expected_penalty(&self, config: &EvalConfig) -> f32 {
        Terrain::ALL
            .iter()
            .map(|&terrain| self.probability(terrain) * config.landing_penalty_strokes(terrain))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenside_course::GolferKind;

    fn test_club(carry_yards: f32, dispersion_tiles: f32) -> ClubSpec {
        ClubSpec {
            name: "test club",
            carry_yards,
            dispersion_tiles,
        }
    }

    fn fairway_course(width: usize, height: usize) -> Course {
        Course::filled(width, height, Terrain::Fairway, 10.0)
    }

    fn profile(course: &Course) -> GolferProfile {
        GolferProfile::of(GolferKind::Scratch, Some(course))
    }

    #[test]
    fn dispersion_ramp_kicks_in_past_threshold() {
        let course = fairway_course(30, 5);
        let golfer = profile(&course);
        let club = test_club(100.0, 1.0);
        let config = EvalConfig::default();

        // 100y with a 100y club: utilization 1.0, 0.1 over threshold.
        let full = evaluate_shot(
            &course,
            TilePos::new(0, 2),
            TilePos::new(10, 2),
            &golfer,
            &club,
            &config,
        );
        assert!(full.is_valid);
        assert!((full.utilization - 1.0).abs() < 1e-4);
        assert!((full.dispersion_tiles - 1.22).abs() < 1e-4);

        // 50y: utilization 0.5, under threshold, dispersion unchanged.
        let half = evaluate_shot(
            &course,
            TilePos::new(0, 2),
            TilePos::new(5, 2),
            &golfer,
            &club,
            &config,
        );
        assert!((half.dispersion_tiles - 1.0).abs() < 1e-4);
    }

    #[test]
    fn all_fairway_shot_costs_exactly_the_base_stroke() {
        let course = fairway_course(30, 9);
        let golfer = profile(&course);
        let club = test_club(200.0, 1.5);
        let eval = evaluate_shot(
            &course,
            TilePos::new(2, 4),
            TilePos::new(16, 4),
            &golfer,
            &club,
            &EvalConfig::default(),
        );
        assert!(eval.is_valid);
        assert!((eval.expected_cost - BASE_STROKE).abs() < 1e-5);
        assert!(eval.expected_landing_penalty.abs() < 1e-6);
        assert!(eval.expected_carry_penalty.abs() < 1e-6);
    }

    #[test]
    fn over_range_target_is_invalid() {
        let course = fairway_course(40, 5);
        let golfer = profile(&course);
        let club = test_club(100.0, 1.0);
        let eval = evaluate_shot(
            &course,
            TilePos::new(0, 2),
            TilePos::new(20, 2),
            &golfer,
            &club,
            &EvalConfig::default(),
        );
        assert!(!eval.is_valid);
        assert!(eval.expected_cost.is_infinite());
    }

    #[test]
    fn carry_gate_boundary_is_exact() {
        // Water tiles x=1..=2 on the shot row: a 2-tile (20y) run, so a
        // 30y carry is required with the default 10y buffer.
        let mut course = fairway_course(20, 3);
        course.set_terrain(TilePos::new(1, 1), Terrain::Water);
        course.set_terrain(TilePos::new(2, 1), Terrain::Water);
        let golfer = profile(&course);
        let config = EvalConfig::default();
        let from = TilePos::new(0, 1);
        let to = TilePos::new(3, 1);

        let exact = evaluate_shot(&course, from, to, &golfer, &test_club(30.0, 0.5), &config);
        assert!(exact.is_valid, "carry equal to the requirement clears");
        // Utilization 1.0 pays the full short-miss penalty.
        let expected_penalty = config.short_miss_max_probability * config.water_penalty_strokes;
        assert!((exact.expected_carry_penalty - expected_penalty).abs() < 1e-4);

        let short = evaluate_shot(&course, from, to, &golfer, &test_club(29.0, 0.5), &config);
        assert!(!short.is_valid, "one yard short of the requirement fails");
        assert!(short.expected_cost.is_infinite());
    }

    #[test]
    fn water_under_the_tee_is_not_a_carry() {
        let mut course = fairway_course(20, 3);
        course.set_terrain(TilePos::new(0, 1), Terrain::Water);
        let golfer = profile(&course);
        let eval = evaluate_shot(
            &course,
            TilePos::new(0, 1),
            TilePos::new(8, 1),
            &golfer,
            &test_club(100.0, 0.5),
            &EvalConfig::default(),
        );
        assert!(eval.is_valid);
        assert!(eval.expected_carry_penalty.abs() < 1e-6);
    }

    #[test]
    fn comfortable_carry_pays_no_short_miss_penalty() {
        let mut course = fairway_course(20, 3);
        course.set_terrain(TilePos::new(2, 1), Terrain::Water);
        let golfer = profile(&course);
        // 50y shot, 150y club: utilization 0.33, well under the 0.92 start.
        let eval = evaluate_shot(
            &course,
            TilePos::new(0, 1),
            TilePos::new(5, 1),
            &golfer,
            &test_club(150.0, 0.5),
            &EvalConfig::default(),
        );
        assert!(eval.is_valid);
        assert!(eval.expected_carry_penalty.abs() < 1e-6);
    }

    #[test]
    fn landing_distribution_normalizes() {
        let mut course = fairway_course(20, 20);
        course.fill_rect(TilePos::new(8, 8), TilePos::new(12, 12), Terrain::Sand);
        let config = EvalConfig::default();
        let distribution =
            LandingDistribution::around(&course, TilePos::new(10, 10), 3.0, &config);
        let total: f32 = Terrain::ALL
            .iter()
            .map(|&terrain| distribution.probability(terrain))
            .sum();
        assert!((total - 1.0).abs() < 1e-5);
        assert!(distribution.expected_penalty(&config) > 0.0);
    }

    #[test]
    fn degenerate_footprint_prices_to_zero() {
        let course = fairway_course(5, 5);
        let config = EvalConfig::default();
        let distribution =
            LandingDistribution::around(&course, TilePos::new(50, 50), 2.0, &config);
        assert!(distribution.expected_penalty(&config).abs() < f32::EPSILON);
        assert!(distribution.probability(Terrain::Fairway).abs() < f32::EPSILON);
    }

    #[test]
    fn riskier_surroundings_never_cheapen_a_shot() {
        let mut safe = fairway_course(20, 9);
        let golfer = profile(&safe);
        let club = test_club(120.0, 2.0);
        let config = EvalConfig::default();
        let from = TilePos::new(0, 4);
        let to = TilePos::new(10, 4);
        let base = evaluate_shot(&safe, from, to, &golfer, &club, &config);

        safe.fill_rect(TilePos::new(9, 3), TilePos::new(11, 5), Terrain::DeepRough);
        let risky = evaluate_shot(&safe, from, to, &golfer, &club, &config);
        assert!(risky.expected_cost > base.expected_cost);
    }

    #[test]
    fn grid_line_is_inclusive_and_connected() {
        let line = grid_line(TilePos::new(0, 0), TilePos::new(5, 3));
        assert_eq!(line.first(), Some(&TilePos::new(0, 0)));
        assert_eq!(line.last(), Some(&TilePos::new(5, 3)));
        for pair in line.windows(2) {
            assert_eq!(pair[0].chebyshev_distance(pair[1]), 1);
        }
    }
}
