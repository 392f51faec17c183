use clap::{Parser, Subcommand};

use self::{generate::GenerateArg, route::RouteArg, score::ScoreArg};

mod generate;
mod route;
mod score;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Score the holes of a course document
    Score(#[clap(flatten)] ScoreArg),
    /// Check whether a hole is walkable at all, ignoring shot mechanics
    Route(#[clap(flatten)] RouteArg),
    /// Generate a random course document from a seed
    Generate(#[clap(flatten)] GenerateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.command {
        Command::Score(arg) => score::run(&arg),
        Command::Route(arg) => route::run(&arg),
        Command::Generate(arg) => generate::run(&arg),
    }
}
