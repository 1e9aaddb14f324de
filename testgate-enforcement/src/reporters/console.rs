//! Console reporter — human-readable output with color codes.

use testgate_core::types::Verdict;

use super::Reporter;
use crate::gates::GateResult;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn verdict_symbol(verdict: &Verdict) -> &'static str {
        match verdict {
            Verdict::Pass => "✓",
            Verdict::Unstable => "⚠",
        }
    }

    fn color_start(&self, verdict: &Verdict) -> &'static str {
        if !self.use_color {
            return "";
        }
        match verdict {
            Verdict::Pass => "\x1b[32m",     // green
            Verdict::Unstable => "\x1b[33m", // yellow
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, result: &GateResult) -> Result<String, String> {
        let mut output = String::new();

        output.push_str("╔══════════════════════════════════════════╗\n");
        output.push_str("║        Testgate Quality Gate Report      ║\n");
        output.push_str("╚══════════════════════════════════════════╝\n\n");

        for line in &result.log {
            output.push_str(&format!("  {line}\n"));
        }
        output.push('\n');

        let symbol = Self::verdict_symbol(&result.verdict);
        let cs = self.color_start(&result.verdict);
        let ce = self.color_end();
        match result.verdict {
            Verdict::Pass => {
                output.push_str(&format!("{cs}Result: PASSED {symbol}{ce}\n"));
            }
            Verdict::Unstable => {
                output.push_str(&format!("{cs}Result: UNSTABLE {symbol}{ce}\n"));
            }
        }

        Ok(output)
    }
}
