//! Shot-plan solver: minimum expected-cost routing from tee to green.
//!
//! The solver runs uniform-cost (Dijkstra) search over an implicit graph:
//! nodes are tile positions, edges are candidate shots priced by the shot
//! cost model. The graph is never materialized - candidates are generated
//! lazily as each node is expanded:
//!
//! - for every club, four fractions of its (slightly inflated) range are
//!   sampled in the eight compass/diagonal directions, and
//! - for every club, a direct shot at the green is always proposed, so a
//!   dogleg green sitting off the coarse angular grid is never missed.
//!
//! Candidates that land out of bounds or on water are discarded, as are
//! shots the cost model rejects. A hard expansion cap bounds worst-case
//! work on pathological grids; hitting it reports the hole unreachable,
//! the same as true disconnection.

use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap},
    f32::consts::FRAC_1_SQRT_2,
};

use arrayvec::ArrayVec;
use serde::Serialize;

use greenside_course::{ClubSpec, Course, GolferProfile, TilePos};

use crate::{config::EvalConfig, shot::evaluate_shot};

/// Unit vectors of the eight compass/diagonal shot directions.
const DIRECTIONS: [(f32, f32); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    (-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
];

/// Fractions × directions plus the direct-to-green candidate.
const MAX_CANDIDATES: usize = 4 * DIRECTIONS.len() + 1;

/// One edge of the winning route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShotPlanStep {
    pub from: TilePos,
    pub to: TilePos,
    pub club: &'static str,
    pub expected_cost: f32,
    pub utilization: f32,
}

/// Outcome of a tee-to-green solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotSolveResult {
    pub reachable: bool,
    /// Total expected strokes to reach the green, excluding putting;
    /// `+inf` when unreachable.
    pub expected_shots: f32,
    /// Winning route in tee-to-green order; empty when unreachable.
    pub steps: Vec<ShotPlanStep>,
}

impl ShotSolveResult {
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            expected_shots: f32::INFINITY,
            steps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    cost: f32,
    pos: TilePos,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Ties broken on position so the search order is deterministic.
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.pos.cmp(&other.pos))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Plans multi-shot routes for one golfer on one course snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ShotPlanner<'a> {
    course: &'a Course,
    golfer: &'a GolferProfile,
    config: &'a EvalConfig,
}

impl<'a> ShotPlanner<'a> {
    #[must_use]
    pub const fn new(course: &'a Course, golfer: &'a GolferProfile, config: &'a EvalConfig) -> Self {
        Self {
            course,
            golfer,
            config,
        }
    }

    /// Finds the minimum expected-cost shot route from `tee` to `green`.
    #[must_use]
    pub fn solve(&self, tee: TilePos, green: TilePos) -> ShotSolveResult {
        let endpoints_playable = [tee, green].into_iter().all(|pos| {
            self.course
                .terrain_at(pos)
                .is_some_and(|terrain| !terrain.is_water())
        });
        if !endpoints_playable {
            return ShotSolveResult::unreachable();
        }

        let mut dist: HashMap<TilePos, f32> = HashMap::new();
        let mut prev: HashMap<TilePos, ShotPlanStep> = HashMap::new();
        let mut heap = BinaryHeap::new();
        dist.insert(tee, 0.0);
        heap.push(Reverse(Frontier {
            cost: 0.0,
            pos: tee,
        }));

        let mut expansions = 0;
        let mut goal_cost = None;
        while let Some(Reverse(Frontier { cost, pos })) = heap.pop() {
            if cost > dist.get(&pos).copied().unwrap_or(f32::INFINITY) {
                continue;
            }
            if pos == green {
                goal_cost = Some(cost);
                break;
            }
            expansions += 1;
            if expansions > self.config.expansion_cap {
                break;
            }

            for club in self.golfer.clubs {
                for target in self.candidate_targets(pos, green, club) {
                    if target == pos
                        || !self
                            .course
                            .terrain_at(target)
                            .is_some_and(|terrain| !terrain.is_water())
                    {
                        continue;
                    }
                    let eval =
                        evaluate_shot(self.course, pos, target, self.golfer, club, self.config);
                    if !eval.is_valid || !eval.expected_cost.is_finite() {
                        continue;
                    }
                    let next_cost = cost + eval.expected_cost;
                    if next_cost < dist.get(&target).copied().unwrap_or(f32::INFINITY) {
                        dist.insert(target, next_cost);
                        prev.insert(
                            target,
                            ShotPlanStep {
                                from: pos,
                                to: target,
                                club: club.name,
                                expected_cost: eval.expected_cost,
                                utilization: eval.utilization,
                            },
                        );
                        heap.push(Reverse(Frontier {
                            cost: next_cost,
                            pos: target,
                        }));
                    }
                }
            }
        }

        let Some(total) = goal_cost else {
            return ShotSolveResult::unreachable();
        };
        if total > self.config.max_expected_shots {
            return ShotSolveResult::unreachable();
        }

        let mut steps = Vec::new();
        let mut cursor = green;
        while cursor != tee {
            let step = prev[&cursor];
            cursor = step.from;
            steps.push(step);
        }
        steps.reverse();
        ShotSolveResult {
            reachable: true,
            expected_shots: total,
            steps,
        }
    }

    /// Candidate landing tiles for one club from one position.
    #[expect(clippy::cast_possible_truncation)]
    fn candidate_targets(
        &self,
        from: TilePos,
        green: TilePos,
        club: &ClubSpec,
    ) -> ArrayVec<TilePos, MAX_CANDIDATES> {
        let mut targets = ArrayVec::new();
        let range_tiles =
            club.carry_yards / self.golfer.yards_per_tile * self.config.range_inflation;
        for &fraction in &self.config.distance_fractions {
            let distance = range_tiles * fraction;
            for &(ux, uy) in &DIRECTIONS {
                targets.push(TilePos::new(
                    from.x + (ux * distance).round() as i32,
                    from.y + (uy * distance).round() as i32,
                ));
            }
        }
        targets.push(green);
        targets
    }
}
