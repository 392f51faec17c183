//! Playable-route pathfinding over the raw terrain grid.
//!
//! This is the shot-agnostic walkability check: a weighted Dijkstra over
//! the 4-connected grid that answers "does any walkable route exist from
//! here to there at all", ignoring clubs and shot mechanics entirely. The
//! hole linter uses it to flag holes that are fully blocked by water.

use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap},
};

use serde::Serialize;

use crate::course::{Course, ObstacleKind, Terrain, TilePos};

/// Walking cost of standing on a tile, before surcharges.
const fn base_tile_cost(terrain: Terrain) -> f32 {
    match terrain {
        Terrain::Fairway => 1.0,
        Terrain::Path | Terrain::Tee => 1.2,
        Terrain::Green => 1.4,
        Terrain::Rough => 2.2,
        Terrain::DeepRough => 3.4,
        Terrain::Sand => 2.8,
        Terrain::Water => f32::INFINITY,
    }
}

const WATER_ADJACENCY_COST: f32 = 0.9;
const SAND_ADJACENCY_COST: f32 = 0.25;
const TREE_COST: f32 = 5.0;
const BUSH_COST: f32 = 2.5;
const ROCK_COST: f32 = 4.0;

const CARDINAL_STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const NEIGHBOUR_STEPS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A walkable route between two tiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Visited tiles from start to goal, inclusive.
    pub tiles: Vec<TilePos>,
    /// Sum of per-tile entry costs along the route.
    pub total_cost: f32,
    /// Number of moves (`tiles.len() - 1`).
    pub steps: usize,
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

/// Finds the cheapest walkable route from `start` to `goal`.
///
/// Returns `None` when either endpoint is out of bounds or impassable, or
/// when no finite-cost route exists.
#[must_use]
pub fn find_best_playable_path(
    course: &Course,
    start: TilePos,
    goal: TilePos,
) -> Option<PathResult> {
    let costs = TileCosts::new(course);
    if !costs.cost(start)?.is_finite() || !costs.cost(goal)?.is_finite() {
        return None;
    }

    let mut dist: HashMap<TilePos, f32> = HashMap::new();
    let mut prev: HashMap<TilePos, TilePos> = HashMap::new();
    let mut heap = BinaryHeap::new();
    dist.insert(start, 0.0);
    heap.push(Reverse(Frontier {
        cost: 0.0,
        pos: start,
    }));

    while let Some(Reverse(Frontier { cost, pos })) = heap.pop() {
        if cost > dist.get(&pos).copied().unwrap_or(f32::INFINITY) {
            continue;
        }
        if pos == goal {
            return Some(reconstruct(&prev, start, goal, cost));
        }
        for (dx, dy) in CARDINAL_STEPS {
            let next = pos.offset(dx, dy);
            let Some(step_cost) = costs.cost(next) else {
                continue;
            };
            if !step_cost.is_finite() {
                continue;
            }
            let next_cost = cost + step_cost;
            if next_cost < dist.get(&next).copied().unwrap_or(f32::INFINITY) {
                dist.insert(next, next_cost);
                prev.insert(next, pos);
                heap.push(Reverse(Frontier {
                    cost: next_cost,
                    pos: next,
                }));
            }
        }
    }

    None
}

fn reconstruct(
    prev: &HashMap<TilePos, TilePos>,
    start: TilePos,
    goal: TilePos,
    total_cost: f32,
) -> PathResult {
    let mut tiles = vec![goal];
    let mut cursor = goal;
    while cursor != start {
        cursor = prev[&cursor];
        tiles.push(cursor);
    }
    tiles.reverse();
    let steps = tiles.len() - 1;
    PathResult {
        tiles,
        total_cost,
        steps,
    }
}

/// Per-tile entry costs: terrain base cost plus hazard-adjacency and
/// obstacle surcharges.
struct TileCosts<'a> {
    course: &'a Course,
    obstacle_costs: HashMap<TilePos, f32>,
}

impl<'a> TileCosts<'a> {
    fn new(course: &'a Course) -> Self {
        let mut obstacle_costs: HashMap<TilePos, f32> = HashMap::new();
        for obstacle in course.obstacles() {
            let surcharge = match obstacle.kind {
                ObstacleKind::Tree => TREE_COST,
                ObstacleKind::Bush => BUSH_COST,
                ObstacleKind::Rock => ROCK_COST,
            };
            *obstacle_costs.entry(obstacle.pos).or_insert(0.0) += surcharge;
        }
        Self {
            course,
            obstacle_costs,
        }
    }

    /// Entry cost of `pos`, `None` when out of bounds.
    fn cost(&self, pos: TilePos) -> Option<f32> {
        let terrain = self.course.terrain_at(pos)?;
        let mut cost = base_tile_cost(terrain);
        if !cost.is_finite() {
            return Some(cost);
        }
        for (dx, dy) in NEIGHBOUR_STEPS {
            match self.course.terrain_at(pos.offset(dx, dy)) {
                Some(Terrain::Water) => cost += WATER_ADJACENCY_COST,
                Some(Terrain::Sand) => cost += SAND_ADJACENCY_COST,
                _ => {}
            }
        }
        if let Some(surcharge) = self.obstacle_costs.get(&pos) {
            cost += surcharge;
        }
        Some(cost)
    }
}
