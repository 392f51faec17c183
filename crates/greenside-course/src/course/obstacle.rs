use serde::{Deserialize, Serialize};

use super::grid::TilePos;

/// Kind of a point obstacle placed on top of the terrain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleKind {
    #[display("tree")]
    Tree,
    #[display("bush")]
    Bush,
    #[display("rock")]
    Rock,
}

/// A point obstacle. Obstacles live in an overlay list on the course and do
/// not change the terrain of the tile they stand on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: TilePos,
    pub kind: ObstacleKind,
}

impl Obstacle {
    #[must_use]
    pub const fn new(pos: TilePos, kind: ObstacleKind) -> Self {
        Self { pos, kind }
    }
}
