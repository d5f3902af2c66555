use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum FactorialOutcome {
    Value(u64),
    Overflow,
}

impl From<Option<u64>> for FactorialOutcome {
    fn from(value: Option<u64>) -> Self {
        match value {
            Some(v) => FactorialOutcome::Value(v),
            None => FactorialOutcome::Overflow,
        }
    }
}

/// Everything one run derives from a single input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub input: u64,
    pub overflow_warning: bool,
    pub factorial: FactorialOutcome,
    pub prime: bool,
}

impl Report {
    /// Text lines printed after the prompt, in output order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);
        if self.overflow_warning {
            lines.push(format!(
                "Warning: factorial may overflow u64 for values > {}",
                crate::core::factorial::MAX_EXACT_FACTORIAL_INPUT
            ));
        }
        match self.factorial {
            FactorialOutcome::Value(v) => lines.push(format!("{}! = {}", self.input, v)),
            FactorialOutcome::Overflow => {
                lines.push(format!("Factorial overflowed for {}", self.input))
            }
        }
        if self.prime {
            lines.push(format!("{} is prime", self.input));
        } else {
            lines.push(format!("{} is not prime", self.input));
        }
        lines
    }
}
