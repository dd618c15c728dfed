mod command;
mod plot;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
