use ripperkit::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    ripperkit::cli::run_from_env()
}
