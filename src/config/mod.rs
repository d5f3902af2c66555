#[cfg(feature = "cli")]
use crate::core::engine::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "factorial-prime")]
#[command(about = "Reads a non-negative integer and reports its factorial and primality")]
pub struct CliConfig {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the report as a single JSON object instead of text
    #[arg(long)]
    pub json: bool,

    /// Log memory and elapsed time after each phase
    #[arg(long)]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
