mod command;
mod doc;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
