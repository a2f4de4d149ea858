use bookdeal::app::commands;
use bookdeal::utils::logger;
use bookdeal::CliConfig;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let registry = match config.load_seed().and_then(|seed| seed.build_registry()) {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!("Failed to load seed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let output = commands::run(&registry, &config.command, config.format)?;
    print!("{}", output);

    Ok(())
}
