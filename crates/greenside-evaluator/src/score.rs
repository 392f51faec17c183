//! Hole quality scoring: turning solver runs into 0-100 quality metrics.
//!
//! The scorer runs the shot-plan solver for the two fixed skill profiles
//! (scratch and bogey), derives par and reachability, builds a
//! visualization polyline from the scratch plan, samples the terrain along
//! and beside that corridor, buckets obstacles by their distance to it,
//! and folds everything into four composite scores:
//!
//! - **playability** - how forgiving the corridor is
//! - **difficulty** - how demanding the hole plays
//! - **aesthetics** - visual interest of hazards and planting near (but
//!   not on) the line of play
//! - **overall** - a weighted blend of the other three
//!
//! A hole is always scoreable: malformed layouts produce a fully-populated
//! score with explanatory issue strings, never an error.

use serde::Serialize;

use greenside_course::{
    Course, GolferKind, GolferProfile, Hole, ObstacleKind, ParSetting, Terrain, TilePos,
};

use crate::{
    config::EvalConfig,
    solver::{ShotPlanStep, ShotPlanner, ShotSolveResult},
};

/// Points sampled along each shot segment of the visualization polyline.
const POLYLINE_SAMPLES_PER_SEGMENT: usize = 9;

/// Fallback par reported for holes that cannot be routed or scored.
const SENTINEL_PAR: u32 = 4;

/// Terrain composition histogram over a set of sampled corridor points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorridorStats {
    pub samples: usize,
    pub fairway: usize,
    pub rough: usize,
    pub deep_rough: usize,
    pub sand: usize,
    pub water: usize,
    pub green: usize,
    pub tee: usize,
    pub path: usize,
}

impl CorridorStats {
    pub const fn record(&mut self, terrain: Terrain) {
        self.samples += 1;
        match terrain {
            Terrain::Fairway => self.fairway += 1,
            Terrain::Rough => self.rough += 1,
            Terrain::DeepRough => self.deep_rough += 1,
            Terrain::Sand => self.sand += 1,
            Terrain::Water => self.water += 1,
            Terrain::Green => self.green += 1,
            Terrain::Tee => self.tee += 1,
            Terrain::Path => self.path += 1,
        }
    }

    const fn count(&self, terrain: Terrain) -> usize {
        match terrain {
            Terrain::Fairway => self.fairway,
            Terrain::Rough => self.rough,
            Terrain::DeepRough => self.deep_rough,
            Terrain::Sand => self.sand,
            Terrain::Water => self.water,
            Terrain::Green => self.green,
            Terrain::Tee => self.tee,
            Terrain::Path => self.path,
        }
    }

    /// Fraction of samples on `terrain`; zero when nothing was sampled.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn fraction(&self, terrain: Terrain) -> f32 {
        if self.samples == 0 {
            0.0
        } else {
            self.count(terrain) as f32 / self.samples as f32
        }
    }
}

/// Trees and bushes bucketed by Chebyshev distance to the corridor:
/// on-line (0), near (1), scenic (2-3), off (>3).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ObstacleTally {
    pub trees_on_line: usize,
    pub trees_near: usize,
    pub trees_scenic: usize,
    pub trees_off: usize,
    pub bushes_on_line: usize,
    pub bushes_near: usize,
    pub bushes_scenic: usize,
    pub bushes_off: usize,
}

impl ObstacleTally {
    fn record(&mut self, kind: ObstacleKind, corridor_distance: i32) {
        let slot = match (kind, corridor_distance) {
            (ObstacleKind::Tree, 0) => &mut self.trees_on_line,
            (ObstacleKind::Tree, 1) => &mut self.trees_near,
            (ObstacleKind::Tree, 2..=3) => &mut self.trees_scenic,
            (ObstacleKind::Tree, _) => &mut self.trees_off,
            (ObstacleKind::Bush, 0) => &mut self.bushes_on_line,
            (ObstacleKind::Bush, 1) => &mut self.bushes_near,
            (ObstacleKind::Bush, 2..=3) => &mut self.bushes_scenic,
            (ObstacleKind::Bush, _) => &mut self.bushes_off,
            (ObstacleKind::Rock, _) => return,
        };
        *slot += 1;
    }
}

/// Per-hole aggregate quality score. Always fully populated, even for
/// incomplete or nonsensical holes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoleScore {
    /// Both tee and green markers are placed.
    pub complete: bool,
    pub is_valid: bool,
    pub par: u32,
    /// Expected shots to green for the scratch profile; `+inf` when
    /// unreachable.
    pub scratch_shots: f32,
    pub bogey_shots: f32,
    pub reachable_in_two: bool,
    pub straight_distance_tiles: f32,
    /// Cumulative length of the routed polyline; at least the straight
    /// distance whenever the route bends.
    pub effective_distance_tiles: f32,
    pub polyline: Vec<TilePos>,
    /// The scratch golfer's winning plan.
    pub plan: ShotSolveResult,
    pub corridor: CorridorStats,
    pub near_corridor: CorridorStats,
    pub obstacles: ObstacleTally,
    pub playability: f32,
    pub difficulty: f32,
    pub aesthetics: f32,
    pub overall: f32,
    pub issues: Vec<String>,
}

/// Scores holes on one course snapshot.
#[derive(Debug, Clone, Copy)]
pub struct HoleScorer<'a> {
    course: &'a Course,
    config: &'a EvalConfig,
}

impl<'a> HoleScorer<'a> {
    #[must_use]
    pub const fn new(course: &'a Course, config: &'a EvalConfig) -> Self {
        Self { course, config }
    }

    /// Produces the full quality score for one hole.
    #[must_use]
    pub fn score(&self, hole: &Hole) -> HoleScore {
        let (Some(tee), Some(green)) = (hole.tee, hole.green) else {
            return sentinel_score(hole, "missing tee or green placement");
        };

        let mut issues = Vec::new();
        let mut layout_ok = true;
        if !self.course.in_bounds(tee) {
            issues.push("tee is out of bounds".to_owned());
            layout_ok = false;
        }
        if !self.course.in_bounds(green) {
            issues.push("green is out of bounds".to_owned());
            layout_ok = false;
        }
        if tee == green {
            issues.push("tee and green overlap".to_owned());
            layout_ok = false;
        }
        let mut marker_on_hazard = |name: &str, pos: TilePos| match self.course.terrain_at(pos) {
            Some(terrain) if terrain.is_hazard() => {
                issues.push(format!("{name} sits on {terrain}"));
                layout_ok = false;
                true
            }
            _ => false,
        };
        let tee_on_hazard = marker_on_hazard("tee", tee);
        let green_on_hazard = marker_on_hazard("green", green);

        let scratch_profile = GolferProfile::of(GolferKind::Scratch, Some(self.course));
        let bogey_profile = GolferProfile::of(GolferKind::Bogey, Some(self.course));
        let scratch = ShotPlanner::new(self.course, &scratch_profile, self.config).solve(tee, green);
        let bogey = ShotPlanner::new(self.course, &bogey_profile, self.config).solve(tee, green);

        if !scratch.reachable {
            issues.push("no viable shot route from tee to green".to_owned());
        } else if scratch.expected_shots > self.config.max_expected_shots {
            issues.push("expected shots to green exceed the routing limit".to_owned());
        }

        let par = match hole.par {
            ParSetting::Manual(par) => par,
            ParSetting::Auto => auto_par(scratch.expected_shots),
        };
        let reachable_in_two =
            scratch.reachable && scratch.expected_shots <= self.config.reachable_in_two_shots;

        let polyline = plan_polyline(&scratch.steps, tee, green);
        let straight_distance_tiles = tee.distance_to(green);
        let effective_distance_tiles = polyline
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum();

        let mut corridor = CorridorStats::default();
        let mut near_corridor = CorridorStats::default();
        for &point in &polyline {
            if let Some(terrain) = self.course.terrain_at(point) {
                corridor.record(terrain);
            }
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    if let Some(terrain) = self.course.terrain_at(point.offset(dx, dy)) {
                        near_corridor.record(terrain);
                    }
                }
            }
        }

        let mut obstacles = ObstacleTally::default();
        for obstacle in self.course.obstacles() {
            let corridor_distance = polyline
                .iter()
                .map(|point| point.chebyshev_distance(obstacle.pos))
                .min()
                .unwrap_or(i32::MAX);
            obstacles.record(obstacle.kind, corridor_distance);
        }

        if corridor.fraction(Terrain::Water) > 0.3 {
            issues.push("route crosses heavy water".to_owned());
        }
        if corridor.fraction(Terrain::Rough) + corridor.fraction(Terrain::DeepRough) > 0.6 {
            issues.push("route is dominated by rough".to_owned());
        }

        let scores = CompositeInputs {
            corridor: &corridor,
            near_corridor: &near_corridor,
            obstacles: &obstacles,
            total_obstacles: self.course.obstacles().len(),
            tee_on_hazard,
            green_on_hazard,
            effective_distance_tiles,
            scratch_shots: scratch.expected_shots,
        }
        .compute();

        let straight_yards = straight_distance_tiles * self.course.yards_per_tile();
        let is_valid = layout_ok
            && scratch.reachable
            && scratch.expected_shots <= self.config.max_expected_shots
            && straight_yards >= self.config.min_hole_yards;

        HoleScore {
            complete: true,
            is_valid,
            par,
            scratch_shots: scratch.expected_shots,
            bogey_shots: bogey.expected_shots,
            reachable_in_two,
            straight_distance_tiles,
            effective_distance_tiles,
            polyline,
            plan: scratch,
            corridor,
            near_corridor,
            obstacles,
            playability: scores.playability,
            difficulty: scores.difficulty,
            aesthetics: scores.aesthetics,
            overall: scores.overall,
            issues,
        }
    }
}

fn sentinel_score(hole: &Hole, issue: &str) -> HoleScore {
    let par = match hole.par {
        ParSetting::Manual(par) => par,
        ParSetting::Auto => SENTINEL_PAR,
    };
    HoleScore {
        complete: false,
        is_valid: false,
        par,
        scratch_shots: f32::INFINITY,
        bogey_shots: f32::INFINITY,
        reachable_in_two: false,
        straight_distance_tiles: 0.0,
        effective_distance_tiles: 0.0,
        polyline: Vec::new(),
        plan: ShotSolveResult::unreachable(),
        corridor: CorridorStats::default(),
        near_corridor: CorridorStats::default(),
        obstacles: ObstacleTally::default(),
        playability: 0.0,
        difficulty: 0.0,
        aesthetics: 0.0,
        overall: 0.0,
        issues: vec![issue.to_owned()],
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn auto_par(scratch_shots: f32) -> u32 {
    if scratch_shots.is_finite() {
        ((scratch_shots + 2.0).round() as u32).clamp(3, 5)
    } else {
        5
    }
}

/// Samples the scratch plan into a deduplicated polyline for rendering and
/// corridor statistics. An empty plan degrades to the straight tee-green
/// segment.
fn plan_polyline(steps: &[ShotPlanStep], tee: TilePos, green: TilePos) -> Vec<TilePos> {
    let mut polyline: Vec<TilePos> = Vec::new();
    let mut push_deduped = |polyline: &mut Vec<TilePos>, point: TilePos| {
        if polyline.last() != Some(&point) {
            polyline.push(point);
        }
    };

    push_deduped(&mut polyline, tee);
    if steps.is_empty() {
        push_deduped(&mut polyline, green);
        return polyline;
    }

    #[expect(clippy::cast_precision_loss)]
    for step in steps {
        for i in 1..=POLYLINE_SAMPLES_PER_SEGMENT {
            let t = i as f32 / POLYLINE_SAMPLES_PER_SEGMENT as f32;
            let x = step.from.x as f32 + (step.to.x - step.from.x) as f32 * t;
            let y = step.from.y as f32 + (step.to.y - step.from.y) as f32 * t;
            #[expect(clippy::cast_possible_truncation)]
            let point = TilePos::new(x.round() as i32, y.round() as i32);
            push_deduped(&mut polyline, point);
        }
    }
    polyline
}

struct CompositeInputs<'a> {
    corridor: &'a CorridorStats,
    near_corridor: &'a CorridorStats,
    obstacles: &'a ObstacleTally,
    total_obstacles: usize,
    tee_on_hazard: bool,
    green_on_hazard: bool,
    effective_distance_tiles: f32,
    scratch_shots: f32,
}

struct CompositeScores {
    playability: f32,
    difficulty: f32,
    aesthetics: f32,
    overall: f32,
}

impl CompositeInputs<'_> {
    #[expect(clippy::cast_precision_loss)]
    fn compute(&self) -> CompositeScores {
        let fairway = self.corridor.fraction(Terrain::Fairway);
        let path = self.corridor.fraction(Terrain::Path);
        let rough = self.corridor.fraction(Terrain::Rough);
        let deep_rough = self.corridor.fraction(Terrain::DeepRough);
        let water = self.corridor.fraction(Terrain::Water);
        let sand = self.corridor.fraction(Terrain::Sand);
        let near_water = self.near_corridor.fraction(Terrain::Water);
        let near_sand = self.near_corridor.fraction(Terrain::Sand);
        let near_deep_rough = self.near_corridor.fraction(Terrain::DeepRough);

        let tee_hazard = indicator(self.tee_on_hazard);
        let green_hazard = indicator(self.green_on_hazard);
        let trees_on = self.obstacles.trees_on_line as f32;
        let bushes_on = self.obstacles.bushes_on_line as f32;
        let trees_near = self.obstacles.trees_near as f32;
        let bushes_near = self.obstacles.bushes_near as f32;

        let playability = clamp_score(
            90.0 + 35.0 * fairway + 10.0 * path
                - 70.0 * rough
                - 120.0 * deep_rough
                - 130.0 * water
                - 55.0 * sand
                - 25.0 * tee_hazard
                - 25.0 * green_hazard
                - 20.0 * trees_on
                - 10.0 * bushes_on
                - 10.0 * trees_near
                - 5.0 * bushes_near,
        );

        let hazard_load = 0.85 * water + 0.55 * sand + 0.25 * rough + 0.45 * deep_rough;
        let difficulty = clamp_score(
            20.0 + 65.0 * hazard_load
                + 28.0 * clamp_unit(self.effective_distance_tiles / 40.0)
                + 38.0 * clamp_unit((self.scratch_shots - 2.0) / 3.0)
                + 10.0 * tee_hazard
                + 10.0 * green_hazard
                + 12.0 * trees_on
                + 6.0 * bushes_on
                + 6.0 * trees_near
                + 3.0 * bushes_near,
        );

        let clutter = (self.total_obstacles as f32 - 22.0).max(0.0);
        let aesthetics = clamp_score(
            55.0 + 75.0 * (near_water + 0.6 * near_sand) - 120.0 * (water + 0.6 * sand)
                + 10.0 * (near_water.min(0.12) / 0.12)
                - 35.0 * clamp_unit(near_deep_rough - 0.12)
                + 4.0 * self.obstacles.trees_scenic as f32
                + 3.0 * self.obstacles.bushes_scenic as f32
                + 1.0 * self.obstacles.trees_off as f32
                + 0.5 * self.obstacles.bushes_off as f32
                - 12.0 * trees_on
                - 6.0 * bushes_on
                - 2.0 * clutter,
        );

        let on_hazard = water + sand;
        let on_bad_lie = rough + deep_rough + on_hazard;
        let overall = clamp_score(
            0.6 * playability + 0.25 * aesthetics + 0.15 * (100.0 - difficulty)
                - 30.0 * clamp_unit(on_hazard - 0.25)
                - 18.0 * clamp_unit(on_bad_lie - 0.55),
        );

        CompositeScores {
            playability,
            difficulty,
            aesthetics,
            overall,
        }
    }
}

const fn indicator(flag: bool) -> f32 {
    if flag { 1.0 } else { 0.0 }
}

fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

fn clamp_score(value: f32) -> f32 {
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenside_course::Obstacle;

    fn score_with_defaults(course: &Course, hole: &Hole) -> HoleScore {
        HoleScorer::new(course, &EvalConfig::default()).score(hole)
    }

    #[test]
    fn trivial_fairway_hole_scores_clean() {
        let course = Course::filled(110, 70, Terrain::Fairway, 10.0);
        let hole = Hole::new(TilePos::new(0, 0), TilePos::new(10, 0));
        let score = score_with_defaults(&course, &hole);

        assert!(score.complete);
        assert!(score.is_valid, "issues: {:?}", score.issues);
        assert!(score.issues.is_empty());
        assert_eq!(score.par, 3);
        assert!(score.reachable_in_two);
        assert!(score.scratch_shots >= 1.0 && score.scratch_shots < 1.2);
        assert!((score.straight_distance_tiles - 10.0).abs() < 1e-4);
        assert!((score.playability - 100.0).abs() < 1e-4);
        assert_eq!(score.corridor.samples, score.polyline.len());
        assert_eq!(score.corridor.fairway, score.corridor.samples);
    }

    #[test]
    fn missing_green_produces_sentinel() {
        let course = Course::filled(20, 20, Terrain::Fairway, 10.0);
        let hole = Hole {
            tee: Some(TilePos::new(1, 1)),
            green: None,
            par: ParSetting::Auto,
        };
        let score = score_with_defaults(&course, &hole);
        assert!(!score.complete);
        assert!(!score.is_valid);
        assert_eq!(score.par, 4);
        assert!(score.scratch_shots.is_infinite());
        assert!(score.polyline.is_empty());
        assert_eq!(score.issues.len(), 1);
        assert!(score.issues[0].contains("missing"));
    }

    #[test]
    fn manual_par_overrides_auto() {
        let course = Course::filled(110, 70, Terrain::Fairway, 10.0);
        let hole = Hole::new(TilePos::new(0, 0), TilePos::new(10, 0)).with_manual_par(5);
        assert_eq!(score_with_defaults(&course, &hole).par, 5);
    }

    #[test]
    fn sentinel_keeps_manual_par() {
        let course = Course::filled(20, 20, Terrain::Fairway, 10.0);
        let hole = Hole {
            tee: None,
            green: None,
            par: ParSetting::Manual(5),
        };
        assert_eq!(score_with_defaults(&course, &hole).par, 5);
    }

    #[test]
    fn blocked_hole_is_invalid_with_fallback_polyline() {
        let mut course = Course::filled(60, 11, Terrain::Fairway, 10.0);
        course.fill_rect(TilePos::new(10, 0), TilePos::new(45, 10), Terrain::Water);
        let tee = TilePos::new(0, 5);
        let green = TilePos::new(59, 5);
        let score = score_with_defaults(&course, &Hole::new(tee, green));

        assert!(score.complete);
        assert!(!score.is_valid);
        assert!(score.scratch_shots.is_infinite());
        assert_eq!(score.par, 5);
        assert!(score.issues.iter().any(|issue| issue.contains("no viable")));
        assert_eq!(score.polyline, vec![tee, green]);
    }

    #[test]
    fn short_hole_is_reachable_but_invalid() {
        let course = Course::filled(40, 40, Terrain::Fairway, 10.0);
        // 50y straight: routable, but under the 90y minimum.
        let score =
            score_with_defaults(&course, &Hole::new(TilePos::new(0, 0), TilePos::new(5, 0)));
        assert!(score.plan.reachable);
        assert!(!score.is_valid);
        assert!(score.issues.is_empty(), "distance gate is not an issue string");
    }

    #[test]
    fn tee_on_sand_is_a_layout_issue() {
        let mut course = Course::filled(40, 40, Terrain::Fairway, 10.0);
        course.set_terrain(TilePos::new(0, 0), Terrain::Sand);
        let score =
            score_with_defaults(&course, &Hole::new(TilePos::new(0, 0), TilePos::new(12, 0)));
        assert!(!score.is_valid);
        assert!(score.issues.iter().any(|issue| issue.contains("tee sits on sand")));
        // The hazard start also shows up in the composite scores.
        assert!(score.playability < 100.0);
    }

    #[test]
    fn overlapping_markers_are_flagged() {
        let course = Course::filled(20, 20, Terrain::Fairway, 10.0);
        let pos = TilePos::new(4, 4);
        let score = score_with_defaults(&course, &Hole::new(pos, pos));
        assert!(!score.is_valid);
        assert!(score.issues.iter().any(|issue| issue.contains("overlap")));
    }

    #[test]
    fn effective_distance_grows_when_the_route_bends() {
        // A water band too wide to carry forces the route through the
        // open strip below it, so the polyline is longer than the
        // straight line.
        let mut course = Course::filled(60, 21, Terrain::Fairway, 10.0);
        course.fill_rect(TilePos::new(14, 0), TilePos::new(44, 15), Terrain::Water);
        let score =
            score_with_defaults(&course, &Hole::new(TilePos::new(2, 5), TilePos::new(55, 5)));
        assert!(score.plan.reachable);
        assert!(score.effective_distance_tiles > score.straight_distance_tiles + 1.0);
    }

    #[test]
    fn obstacles_bucket_by_corridor_distance() {
        let course_base = Course::filled(60, 9, Terrain::Fairway, 10.0);
        let tee = TilePos::new(0, 4);
        let green = TilePos::new(20, 4);

        let mut course = course_base;
        // The corridor runs along y=4 and (11, 4) is a sampled polyline
        // point, so the distances below are 0, 1, 3, and far off.
        course.add_obstacle(Obstacle::new(TilePos::new(11, 4), ObstacleKind::Tree));
        course.add_obstacle(Obstacle::new(TilePos::new(11, 5), ObstacleKind::Bush));
        course.add_obstacle(Obstacle::new(TilePos::new(11, 7), ObstacleKind::Tree));
        course.add_obstacle(Obstacle::new(TilePos::new(50, 4), ObstacleKind::Bush));
        let score = score_with_defaults(&course, &Hole::new(tee, green));

        assert_eq!(score.obstacles.trees_on_line, 1);
        assert_eq!(score.obstacles.bushes_near, 1);
        assert_eq!(score.obstacles.trees_scenic, 1);
        assert_eq!(score.obstacles.bushes_off, 1);
    }

    #[test]
    fn water_beside_the_line_helps_aesthetics() {
        let open = Course::filled(60, 15, Terrain::Fairway, 10.0);
        let tee = TilePos::new(2, 7);
        let green = TilePos::new(40, 7);
        let plain = score_with_defaults(&open, &Hole::new(tee, green));

        let mut scenic_course = Course::filled(60, 15, Terrain::Fairway, 10.0);
        // A water strip one tile off the mid-segment of the corridor,
        // away from any landing zone: near-water without on-line water.
        scenic_course.fill_rect(TilePos::new(25, 8), TilePos::new(33, 8), Terrain::Water);
        let scenic = score_with_defaults(&scenic_course, &Hole::new(tee, green));

        assert!(scenic.plan.reachable);
        assert!(scenic.aesthetics > plain.aesthetics);
    }

    #[test]
    fn scoring_is_deterministic() {
        let mut course = Course::filled(60, 31, Terrain::Rough, 10.0);
        course.fill_rect(TilePos::new(5, 12), TilePos::new(52, 18), Terrain::Fairway);
        course.fill_rect(TilePos::new(25, 0), TilePos::new(29, 14), Terrain::Water);
        course.add_obstacle(Obstacle::new(TilePos::new(30, 16), ObstacleKind::Tree));
        let hole = Hole::new(TilePos::new(6, 15), TilePos::new(50, 15));
        let first = score_with_defaults(&course, &hole);
        let second = score_with_defaults(&course, &hole);
        assert_eq!(first, second);
    }
}
