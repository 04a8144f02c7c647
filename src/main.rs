mod cli;
mod logging;
mod populate;
mod runner;

fn main() -> anyhow::Result<()> {
    logging::init();
    let app = cli::parse();
    runner::run(app)
}
