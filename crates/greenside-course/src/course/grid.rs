use serde::{Deserialize, Serialize};

use super::{obstacle::Obstacle, terrain::Terrain};

/// Default yards-per-tile conversion, used when a course does not configure
/// its own scale.
pub const DEFAULT_YARDS_PER_TILE: f32 = 10.0;

/// Integer tile coordinate on the course grid.
///
/// Positions are allowed to be out of bounds (e.g. candidate shot targets
/// near the edge of the course); [`Course::in_bounds`] decides whether a
/// position refers to an actual tile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance to `other` in tiles.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn distance_to(self, other: TilePos) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        dx.hypot(dy)
    }

    /// Chebyshev (chessboard) distance to `other` in tiles.
    #[must_use]
    pub const fn chebyshev_distance(self, other: TilePos) -> i32 {
        let dx = (other.x - self.x).abs();
        let dy = (other.y - self.y).abs();
        if dx > dy { dx } else { dy }
    }
}

/// Snapshot of an editable course: a row-major terrain grid, the yard scale,
/// and the obstacle overlay.
///
/// The shot planning and scoring engine treats a `Course` as immutable
/// input; the mutators exist for the editing/generation side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    width: usize,
    height: usize,
    terrain: Vec<Terrain>,
    yards_per_tile: f32,
    obstacles: Vec<Obstacle>,
}

impl Course {
    /// Creates a course filled with the given terrain.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn filled(width: usize, height: usize, fill: Terrain, yards_per_tile: f32) -> Self {
        assert!(width > 0 && height > 0, "course must have at least one tile");
        Self {
            width,
            height,
            terrain: vec![fill; width * height],
            yards_per_tile,
            obstacles: Vec::new(),
        }
    }

    /// Creates an all-rough course at the default yard scale.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Terrain::Rough, DEFAULT_YARDS_PER_TILE)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn yards_per_tile(&self) -> f32 {
        self.yards_per_tile
    }

    pub const fn set_yards_per_tile(&mut self, yards_per_tile: f32) {
        self.yards_per_tile = yards_per_tile;
    }

    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub const fn in_bounds(&self, pos: TilePos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    #[expect(clippy::cast_sign_loss)]
    const fn tile_index(&self, pos: TilePos) -> usize {
        pos.y as usize * self.width + pos.x as usize
    }

    /// Terrain at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn terrain_at(&self, pos: TilePos) -> Option<Terrain> {
        self.in_bounds(pos).then(|| self.terrain[self.tile_index(pos)])
    }

    /// Overwrites the terrain of an in-bounds tile.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set_terrain(&mut self, pos: TilePos, terrain: Terrain) {
        assert!(self.in_bounds(pos), "set_terrain out of bounds: {pos}");
        let index = self.tile_index(pos);
        self.terrain[index] = terrain;
    }

    /// Fills the axis-aligned rectangle spanned by the two corners
    /// (inclusive), clipped to the course bounds.
    pub fn fill_rect(&mut self, a: TilePos, b: TilePos, terrain: Terrain) {
        for y in a.y.min(b.y)..=a.y.max(b.y) {
            for x in a.x.min(b.x)..=a.x.max(b.x) {
                let pos = TilePos::new(x, y);
                if self.in_bounds(pos) {
                    let index = self.tile_index(pos);
                    self.terrain[index] = terrain;
                }
            }
        }
    }

    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_lookup_is_row_major() {
        let mut course = Course::new(4, 3);
        course.set_terrain(TilePos::new(2, 1), Terrain::Water);
        assert_eq!(course.terrain_at(TilePos::new(2, 1)), Some(Terrain::Water));
        assert_eq!(course.terrain_at(TilePos::new(1, 2)), Some(Terrain::Rough));
        assert_eq!(course.terrain_at(TilePos::new(4, 0)), None);
        assert_eq!(course.terrain_at(TilePos::new(-1, 0)), None);
    }

    #[test]
    fn distances() {
        let a = TilePos::new(0, 0);
        let b = TilePos::new(3, 4);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-6);
        assert_eq!(a.chebyshev_distance(b), 4);
        assert_eq!(b.chebyshev_distance(a), 4);
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut course = Course::new(4, 4);
        course.fill_rect(TilePos::new(2, 2), TilePos::new(10, 10), Terrain::Green);
        assert_eq!(course.terrain_at(TilePos::new(3, 3)), Some(Terrain::Green));
        assert_eq!(course.terrain_at(TilePos::new(1, 1)), Some(Terrain::Rough));
    }
}
