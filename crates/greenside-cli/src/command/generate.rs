use std::path::PathBuf;

use anyhow::bail;
use chrono::Utc;
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use greenside_course::{
    Course, Hole, Obstacle, ObstacleKind, Terrain, TilePos,
};

use crate::{doc::CourseDoc, util::Output};

/// Minimum vertical room one hole needs for its corridor and features.
const MIN_BAND_HEIGHT: i32 = 10;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Course width in tiles
    #[arg(long, default_value_t = 64)]
    width: usize,
    /// Course height in tiles
    #[arg(long, default_value_t = 40)]
    height: usize,
    /// Number of holes to lay out, one per horizontal band
    #[arg(long, default_value_t = 1)]
    holes: usize,
    /// Generation seed; a random one is drawn (and reported) when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Course name stored in the document
    #[arg(long)]
    name: Option<String>,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    if arg.width < 24 {
        bail!("course width must be at least 24 tiles");
    }
    if arg.holes == 0 {
        bail!("at least one hole is required");
    }
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let band_height = (arg.height / arg.holes) as i32;
    if band_height < MIN_BAND_HEIGHT {
        bail!(
            "course height {} is too small for {} holes (each needs {MIN_BAND_HEIGHT} rows)",
            arg.height,
            arg.holes
        );
    }

    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let (course, holes) = generate_course(&mut rng, arg.width, arg.height, arg.holes);

    let mut course_doc = CourseDoc::from_course(arg.name.clone(), &course, &holes);
    course_doc.generated_at = Some(Utc::now());
    course_doc.seed = Some(seed);

    eprintln!(
        "generated {}x{} course with {} hole(s), seed {seed}",
        arg.width,
        arg.height,
        holes.len()
    );
    Output::create(arg.output.clone())?.write_json(&course_doc)
}

/// Lays out a rough-filled course with one fairway corridor per hole,
/// optional water and sand features, and scattered planting.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_course<R>(
    rng: &mut R,
    width: usize,
    height: usize,
    hole_count: usize,
) -> (Course, Vec<Hole>)
where
    R: Rng,
{
    let mut course = Course::new(width, height);
    let width = width as i32;
    let height = height as i32;
    let band_height = height / hole_count as i32;

    let mut holes = Vec::with_capacity(hole_count);
    for band in 0..hole_count as i32 {
        let band_top = band * band_height;
        let band_bottom = band_top + band_height - 1;
        let hole = carve_hole(rng, &mut course, width, band_top, band_bottom);
        holes.push(hole);
    }

    scatter_planting(rng, &mut course, width, height);
    (course, holes)
}

fn carve_hole<R>(
    rng: &mut R,
    course: &mut Course,
    width: i32,
    band_top: i32,
    band_bottom: i32,
) -> Hole
where
    R: Rng,
{
    let margin = 3;
    let tee = TilePos::new(
        rng.random_range(2..5),
        rng.random_range(band_top + margin..=band_bottom - margin),
    );
    let green = TilePos::new(
        rng.random_range(width - 6..width - 2),
        rng.random_range(band_top + margin..=band_bottom - margin),
    );

    // Fairway corridor drifting from tee toward the green's row.
    let mut y = tee.y;
    for x in tee.x..=green.x {
        let drift = if rng.random_bool(0.35) {
            rng.random_range(-1..=1)
        } else {
            (green.y - y).signum()
        };
        y = (y + drift).clamp(band_top + 1, band_bottom - 1);
        paint_disc(course, TilePos::new(x, y), 2, Terrain::Fairway);
    }

    // A pond beside (or across) the corridor, narrow enough to carry.
    if rng.random_bool(0.6) {
        let pond_x = rng.random_range(width / 3..2 * width / 3);
        let pond_y = rng.random_range(band_top + 1..=band_bottom - 1);
        let pond_w = rng.random_range(3..=6);
        let pond_h = rng.random_range(2..=4);
        course.fill_rect(
            TilePos::new(pond_x, pond_y),
            TilePos::new(pond_x + pond_w - 1, (pond_y + pond_h - 1).min(band_bottom)),
            Terrain::Water,
        );
    }

    // Greenside bunkers.
    for _ in 0..rng.random_range(1..=2) {
        let offset_x = rng.random_range(-3..=3);
        let offset_y = if rng.random_bool(0.5) {
            rng.random_range(2..=3)
        } else {
            -rng.random_range(2..=3)
        };
        let bunker = green.offset(offset_x, offset_y);
        if course.in_bounds(bunker) {
            course.set_terrain(bunker, Terrain::Sand);
        }
    }

    paint_disc(course, green, 1, Terrain::Green);
    course.set_terrain(green, Terrain::Green);
    course.set_terrain(tee, Terrain::Tee);
    Hole::new(tee, green)
}

fn paint_disc(course: &mut Course, center: TilePos, radius: i32, terrain: Terrain) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let pos = center.offset(dx, dy);
            if course.in_bounds(pos) {
                course.set_terrain(pos, terrain);
            }
        }
    }
}

/// Trees and bushes on the remaining rough, one attempt per ~60 tiles.
fn scatter_planting<R>(rng: &mut R, course: &mut Course, width: i32, height: i32)
where
    R: Rng,
{
    let attempts = (width * height) / 60;
    for _ in 0..attempts {
        let pos = TilePos::new(rng.random_range(0..width), rng.random_range(0..height));
        if course.terrain_at(pos) != Some(Terrain::Rough) {
            continue;
        }
        let roll: f32 = rng.random();
        let kind = if roll < 0.6 {
            ObstacleKind::Tree
        } else if roll < 0.92 {
            ObstacleKind::Bush
        } else {
            ObstacleKind::Rock
        };
        course.add_obstacle(Obstacle::new(pos, kind));
    }
}
