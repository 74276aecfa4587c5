mod cli;
mod config;
mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    platform::logging::initialize(
        cli.log.into(),
        folio_logging::level_from_name(&cli.log_level),
    );

    let config = config::load_config(cli.config.as_deref());
    let options = cli::resolve_options(cli, config);
    let view = platform::app::run_app(options)?;
    println!("{}", platform::ui::render::summary_line(&view));
    Ok(())
}
