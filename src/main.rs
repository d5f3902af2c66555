use clap::Parser;
use factorial_prime::utils::logger;
use factorial_prime::{CheckEngine, CliConfig};

fn main() {
    let config = CliConfig::parse();

    if config.json {
        logger::init_json_logger(config.verbose, config.monitor);
    } else {
        logger::init_cli_logger(config.verbose, config.monitor);
    }

    tracing::debug!("CLI config: {:?}", config);
    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = CheckEngine::new_with_monitoring(config.output_format(), config.monitor);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let exit_code = engine.execute(stdin.lock(), &mut stdout, &mut stderr);

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
