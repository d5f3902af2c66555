use crate::core::factorial::{checked_factorial, MAX_EXACT_FACTORIAL_INPUT};
use crate::core::primality::is_prime;
use crate::domain::model::{FactorialOutcome, Report};
use crate::utils::error::{CheckError, Result};
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::{narrow_count, validate_unsigned};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter a non-negative integer: ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Drives one Read -> Compute -> Report pass.
pub struct CheckEngine {
    format: OutputFormat,
    monitor: SystemMonitor,
}

impl CheckEngine {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(format: OutputFormat, enable_monitoring: bool) -> Self {
        Self {
            format,
            monitor: SystemMonitor::new(enable_monitoring),
        }
    }

    /// Derives the report for a single value. Pure.
    pub fn evaluate(input: u64) -> Report {
        Report {
            input,
            overflow_warning: input > MAX_EXACT_FACTORIAL_INPUT,
            factorial: FactorialOutcome::from(checked_factorial(narrow_count(input))),
            prime: is_prime(input),
        }
    }

    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<Report> {
        // Read
        if self.format == OutputFormat::Text {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }
        let token = read_token(input)?;
        let value = validate_unsigned(&token)?;
        tracing::debug!("Read input value {}", value);
        self.monitor.log_stats("Read");

        // Compute
        let report = Self::evaluate(value);
        tracing::debug!(
            "Computed factorial={:?} prime={}",
            report.factorial,
            report.prime
        );
        if report.overflow_warning {
            tracing::debug!("Input {} is above the exact factorial range", value);
        }
        self.monitor.log_stats("Compute");

        // Report
        match self.format {
            OutputFormat::Text => {
                for line in report.lines() {
                    writeln!(out, "{}", line)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        self.monitor.log_stats("Report");

        Ok(report)
    }

    /// Runs the pass and turns any failure into a diagnostic on `err`.
    /// Returns the process exit status.
    pub fn execute<R: BufRead, W: Write, E: Write>(&self, input: R, out: &mut W, err: &mut E) -> i32 {
        match self.run(input, out) {
            Ok(_) => 0,
            Err(e) => {
                tracing::debug!("Run failed: {:?}", e);
                // Nothing left to report to if stderr itself is gone.
                let _ = writeln!(err, "{}", e);
                e.exit_code()
            }
        }
    }
}

/// Returns the first whitespace-delimited token, skipping blank lines.
fn read_token<R: BufRead>(mut input: R) -> Result<String> {
    let mut line = String::new();
    loop {
        line.clear();
        let read = input.read_line(&mut line).map_err(|e| {
            tracing::debug!("Failed to read standard input: {}", e);
            CheckError::InvalidInput { token: None }
        })?;
        if read == 0 {
            tracing::debug!("Standard input closed before a value was read");
            return Err(CheckError::InvalidInput { token: None });
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(token.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_text(input: &str) -> (Result<Report>, String) {
        let engine = CheckEngine::new(OutputFormat::Text);
        let mut out = Vec::new();
        let result = engine.run(input.as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_evaluate_small_prime() {
        let report = CheckEngine::evaluate(2);
        assert!(!report.overflow_warning);
        assert_eq!(report.factorial, FactorialOutcome::Value(2));
        assert!(report.prime);
    }

    #[test]
    fn test_evaluate_above_u32_range_still_overflows() {
        let report = CheckEngine::evaluate(4_294_967_296);
        assert!(report.overflow_warning);
        assert_eq!(report.factorial, FactorialOutcome::Overflow);
        assert!(!report.prime);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        assert_eq!(CheckEngine::evaluate(17), CheckEngine::evaluate(17));
        assert_eq!(CheckEngine::evaluate(21), CheckEngine::evaluate(21));
    }

    #[test]
    fn test_run_prints_prompt_then_report() {
        let (result, out) = run_text("5\n");
        assert_eq!(result.unwrap().input, 5);
        assert_eq!(out, format!("{}5! = 120\n5 is prime\n", PROMPT));
    }

    #[test]
    fn test_read_token_skips_blank_lines_and_leading_whitespace() {
        let (result, out) = run_text("\n   \n\t  7 trailing ignored\n");
        assert_eq!(result.unwrap().input, 7);
        assert!(out.contains("7! = 5040\n"));
        assert!(out.contains("7 is prime\n"));
    }

    #[test]
    fn test_run_rejects_empty_input() {
        let (result, out) = run_text("");
        assert!(matches!(result, Err(CheckError::InvalidInput { token: None })));
        assert_eq!(out, PROMPT);

        let (result, _) = run_text("   \n\n");
        assert!(matches!(result, Err(CheckError::InvalidInput { token: None })));
    }

    #[test]
    fn test_run_rejects_invalid_utf8() {
        let engine = CheckEngine::new(OutputFormat::Text);
        let mut out = Vec::new();
        let result = engine.run(&[0xff, 0xfe, b'\n'][..], &mut out);
        assert!(matches!(result, Err(CheckError::InvalidInput { .. })));
    }

    #[test]
    fn test_run_ignores_trailing_characters_in_token() {
        let (result, out) = run_text("12abc\n");
        assert_eq!(result.unwrap().input, 12);
        assert!(out.contains("12! = 479001600\n"));
        assert!(out.contains("12 is not prime\n"));

        let (result, out) = run_text("0x10\n");
        assert_eq!(result.unwrap().input, 0);
        assert!(out.contains("0! = 1\n"));
    }

    #[test]
    fn test_execute_writes_diagnostic() {
        let engine = CheckEngine::new(OutputFormat::Text);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = engine.execute("-3\n".as_bytes(), &mut out, &mut err);
        assert_eq!(code, 1);
        assert_eq!(String::from_utf8(err).unwrap(), "Invalid input\n");
        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
    }

    #[test]
    fn test_json_format_skips_prompt() {
        let engine = CheckEngine::new_with_monitoring(OutputFormat::Json, false);
        let mut out = Vec::new();
        engine.run("21".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(PROMPT));
        let report: Report = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(report.factorial, FactorialOutcome::Overflow);
        assert!(report.overflow_warning);
    }
}
