use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn cli_filter(verbose: bool, monitor: bool) -> EnvFilter {
    let default = if verbose {
        "factorial_prime=debug,info"
    } else if monitor {
        "factorial_prime=info"
    } else {
        "factorial_prime=warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

// Logs go to stderr; stdout carries only the report.
pub fn init_cli_logger(verbose: bool, monitor: bool) {
    tracing_subscriber::registry()
        .with(cli_filter(verbose, monitor))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Structured variant used together with `--json` report output.
pub fn init_json_logger(verbose: bool, monitor: bool) {
    tracing_subscriber::registry()
        .with(cli_filter(verbose, monitor))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
