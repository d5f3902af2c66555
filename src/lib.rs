pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::engine::{CheckEngine, OutputFormat, PROMPT};
pub use core::factorial::{checked_factorial, factorial};
pub use core::primality::is_prime;
pub use domain::model::{FactorialOutcome, Report};
pub use utils::error::{CheckError, Result};
