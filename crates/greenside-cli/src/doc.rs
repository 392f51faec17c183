//! Hand-editable JSON course documents.
//!
//! The document keeps terrain as one character per tile (`F`airway,
//! `R`ough, `D`eep rough, `S`and, `W`ater, `G`reen, `T`ee, `P`ath) so a
//! course stays readable and diffable in a text editor. Obstacles and
//! holes are plain lists. Documents produced by `greenside generate`
//! additionally carry their seed and a timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use greenside_course::{
    Course, Hole, Obstacle, ObstacleKind, ParSetting, Terrain, TilePos,
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CourseDocError {
    #[display("expected {expected} terrain rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[display("terrain row {row} has {found} tiles, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[display("unknown terrain character {character:?} at row {row}, column {column}")]
    UnknownTerrain {
        row: usize,
        column: usize,
        character: char,
    },
    #[display("obstacle at ({x}, {y}) is out of bounds")]
    ObstacleOutOfBounds { x: i32, y: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleDoc {
    pub x: i32,
    pub y: i32,
    pub kind: ObstacleKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tee: Option<[i32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<[i32; 2]>,
    /// Manual par; omitted means auto par.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub width: usize,
    pub height: usize,
    #[serde(default = "default_yards_per_tile")]
    pub yards_per_tile: f32,
    /// One string per grid row, one terrain character per tile.
    pub rows: Vec<String>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleDoc>,
    #[serde(default)]
    pub holes: Vec<HoleDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_yards_per_tile() -> f32 {
    greenside_course::DEFAULT_YARDS_PER_TILE
}

const fn terrain_char(terrain: Terrain) -> char {
    match terrain {
        Terrain::Fairway => 'F',
        Terrain::Rough => 'R',
        Terrain::DeepRough => 'D',
        Terrain::Sand => 'S',
        Terrain::Water => 'W',
        Terrain::Green => 'G',
        Terrain::Tee => 'T',
        Terrain::Path => 'P',
    }
}

const fn terrain_from_char(character: char) -> Option<Terrain> {
    match character {
        'F' => Some(Terrain::Fairway),
        'R' => Some(Terrain::Rough),
        'D' => Some(Terrain::DeepRough),
        'S' => Some(Terrain::Sand),
        'W' => Some(Terrain::Water),
        'G' => Some(Terrain::Green),
        'T' => Some(Terrain::Tee),
        'P' => Some(Terrain::Path),
        _ => None,
    }
}

impl CourseDoc {
    /// Validates the document and builds the course snapshot plus its
    /// hole definitions.
    pub fn to_course(&self) -> Result<(Course, Vec<Hole>), CourseDocError> {
        if self.rows.len() != self.height {
            return Err(CourseDocError::RowCount {
                expected: self.height,
                found: self.rows.len(),
            });
        }

        let mut course = Course::filled(
            self.width,
            self.height,
            Terrain::Rough,
            self.yards_per_tile,
        );
        for (row, line) in self.rows.iter().enumerate() {
            let found = line.chars().count();
            if found != self.width {
                return Err(CourseDocError::RowWidth {
                    row,
                    expected: self.width,
                    found,
                });
            }
            for (column, character) in line.chars().enumerate() {
                let terrain = terrain_from_char(character).ok_or(
                    CourseDocError::UnknownTerrain {
                        row,
                        column,
                        character,
                    },
                )?;
                #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                course.set_terrain(TilePos::new(column as i32, row as i32), terrain);
            }
        }

        for obstacle in &self.obstacles {
            let pos = TilePos::new(obstacle.x, obstacle.y);
            if !course.in_bounds(pos) {
                return Err(CourseDocError::ObstacleOutOfBounds {
                    x: obstacle.x,
                    y: obstacle.y,
                });
            }
            course.add_obstacle(Obstacle::new(pos, obstacle.kind));
        }

        let holes = self
            .holes
            .iter()
            .map(|hole| Hole {
                tee: hole.tee.map(|[x, y]| TilePos::new(x, y)),
                green: hole.green.map(|[x, y]| TilePos::new(x, y)),
                par: hole.par.map_or(ParSetting::Auto, ParSetting::Manual),
            })
            .collect();

        Ok((course, holes))
    }

    /// Renders a course snapshot back into document form.
    #[must_use]
    pub fn from_course(name: Option<String>, course: &Course, holes: &[Hole]) -> Self {
        let mut rows = Vec::with_capacity(course.height());
        #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        for y in 0..course.height() as i32 {
            let mut line = String::with_capacity(course.width());
            for x in 0..course.width() as i32 {
                let terrain = course
                    .terrain_at(TilePos::new(x, y))
                    .unwrap_or(Terrain::Rough);
                line.push(terrain_char(terrain));
            }
            rows.push(line);
        }

        let obstacles = course
            .obstacles()
            .iter()
            .map(|obstacle| ObstacleDoc {
                x: obstacle.pos.x,
                y: obstacle.pos.y,
                kind: obstacle.kind,
            })
            .collect();

        let holes = holes
            .iter()
            .map(|hole| HoleDoc {
                tee: hole.tee.map(|pos| [pos.x, pos.y]),
                green: hole.green.map(|pos| [pos.x, pos.y]),
                par: match hole.par {
                    ParSetting::Manual(par) => Some(par),
                    ParSetting::Auto => None,
                },
            })
            .collect();

        Self {
            name,
            width: course.width(),
            height: course.height(),
            yards_per_tile: course.yards_per_tile(),
            rows,
            obstacles,
            holes,
            generated_at: None,
            seed: None,
        }
    }
}
