use std::path::PathBuf;

use anyhow::{Context, bail};

use greenside_course::find_best_playable_path;

use crate::{doc::CourseDoc, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RouteArg {
    /// Course document to check
    course: PathBuf,
    /// Hole index to check
    #[arg(long, default_value_t = 0)]
    hole: usize,
}

pub(crate) fn run(arg: &RouteArg) -> anyhow::Result<()> {
    let course_doc: CourseDoc = util::read_json_file("course", &arg.course)?;
    let (course, holes) = course_doc
        .to_course()
        .with_context(|| format!("invalid course document {}", arg.course.display()))?;
    let Some(hole) = holes.get(arg.hole) else {
        bail!("hole index {} out of range (course has {})", arg.hole, holes.len());
    };
    let (Some(tee), Some(green)) = (hole.tee, hole.green) else {
        bail!("hole {} is missing its tee or green marker", arg.hole);
    };

    match find_best_playable_path(&course, tee, green) {
        Some(path) => {
            println!(
                "hole {}: walkable in {} steps (cost {:.1})",
                arg.hole, path.steps, path.total_cost
            );
        }
        None => {
            println!("hole {}: no walkable route from {tee} to {green}", arg.hole);
        }
    }
    Ok(())
}
