use std::path::PathBuf;

use anyhow::{Context, bail};
use serde::Serialize;

use greenside_evaluator::{config::EvalConfig, score::{HoleScore, HoleScorer}};

use crate::{doc::CourseDoc, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoreArg {
    /// Course document to score
    course: PathBuf,
    /// Score only this hole index (defaults to every hole)
    #[arg(long)]
    hole: Option<usize>,
    /// Tuning configuration file overriding the default balance knobs
    #[arg(long)]
    config: Option<PathBuf>,
    /// Emit the full report as JSON instead of a summary table
    #[arg(long)]
    json: bool,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct ScoreReport {
    course: Option<String>,
    holes: Vec<HoleReport>,
}

#[derive(Debug, Clone, Serialize)]
struct HoleReport {
    index: usize,
    score: HoleScore,
}

pub(crate) fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let course_doc: CourseDoc = util::read_json_file("course", &arg.course)?;
    let (course, holes) = course_doc
        .to_course()
        .with_context(|| format!("invalid course document {}", arg.course.display()))?;
    let config = match &arg.config {
        Some(path) => util::read_json_file::<EvalConfig, _>("config", path)?,
        None => EvalConfig::default(),
    };

    if holes.is_empty() {
        bail!("course document defines no holes");
    }
    let selected: Vec<usize> = match arg.hole {
        Some(index) => {
            if index >= holes.len() {
                bail!("hole index {index} out of range (course has {})", holes.len());
            }
            vec![index]
        }
        None => (0..holes.len()).collect(),
    };

    let scorer = HoleScorer::new(&course, &config);
    let reports: Vec<HoleReport> = selected
        .into_iter()
        .map(|index| HoleReport {
            index,
            score: scorer.score(&holes[index]),
        })
        .collect();

    if arg.json {
        let report = ScoreReport {
            course: course_doc.name,
            holes: reports,
        };
        let mut output = util::Output::create(arg.output.clone())?;
        output.write_json(&report)
    } else {
        for report in &reports {
            print_summary(report);
        }
        Ok(())
    }
}

fn print_summary(report: &HoleReport) {
    let score = &report.score;
    let validity = if score.is_valid { "valid" } else { "invalid" };
    println!(
        "hole {}: par {} ({validity}), scratch {:.2}, bogey {:.2}",
        report.index, score.par, score.scratch_shots, score.bogey_shots
    );
    println!(
        "  playability {:>5.1}  difficulty {:>5.1}  aesthetics {:>5.1}  overall {:>5.1}",
        score.playability, score.difficulty, score.aesthetics, score.overall
    );
    println!(
        "  distance {:.1} tiles straight, {:.1} routed, {} plan steps",
        score.straight_distance_tiles,
        score.effective_distance_tiles,
        score.plan.steps.len()
    );
    for issue in &score.issues {
        println!("  ! {issue}");
    }
}
