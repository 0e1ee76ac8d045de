//! Built-in spot checks that exercise the loaded configuration end to end.
//!
//! `--check` runs these instead of the prompt loop. They encode the
//! routing outcomes the stock configuration is expected to produce, so a
//! deployment can verify a config edit did not break the common cases.

use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::engine::TaggerEngine;
use crate::utils::RULE_WIDTH;

/// One spot check: a message and the pair it must resolve to.
#[derive(Debug, Clone, Copy)]
pub struct CheckCase {
    pub message: &'static str,
    pub expected_primary: &'static str,
    pub expected_secondary: &'static str,
}

/// Routing outcomes the stock configuration must produce.
pub const CHECK_CASES: [CheckCase; 3] = [
    CheckCase {
        message: "I want to buy your product and see pricing",
        expected_primary: "SALES",
        expected_secondary: "OTHER",
    },
    CheckCase {
        message: "My account is broken and I need help now",
        expected_primary: "SUPPORT",
        expected_secondary: "OTHER",
    },
    CheckCase {
        message: "Why was I charged twice on my invoice?",
        expected_primary: "BILLING",
        expected_secondary: "OTHER",
    },
];

/// Run every spot check against `engine`, writing a report to `writer`.
///
/// Returns the number of failed checks; the caller decides the exit
/// status.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub async fn run_checks<W>(engine: &TaggerEngine, writer: &mut W) -> io::Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let rule = "=".repeat(RULE_WIDTH);
    let divider = "-".repeat(RULE_WIDTH);
    let header = format!("\n{rule}\n  RUNNING CONFIGURATION SPOT CHECKS\n{rule}\n\n");
    writer.write_all(header.as_bytes()).await?;

    let mut passed: usize = 0;
    let mut failed: usize = 0;
    for (number, case) in (1_usize..).zip(CHECK_CASES.iter()) {
        let result = engine.analyze(case.message);
        let ok = result.primary == case.expected_primary
            && result.secondary == case.expected_secondary;
        if ok {
            passed = passed.saturating_add(1);
        } else {
            failed = failed.saturating_add(1);
        }

        let message = case.message;
        let expected_primary = case.expected_primary;
        let expected_secondary = case.expected_secondary;
        let actual_primary = &result.primary;
        let actual_secondary = &result.secondary;
        let verdict = if ok { "PASSED" } else { "FAILED" };
        writer
            .write_all(
                format!(
                    "Check #{number}\n\
                     Message: \"{message}\"\n\
                     Expected: Primary={expected_primary}, Secondary={expected_secondary}\n\
                     Actual:   Primary={actual_primary}, Secondary={actual_secondary}\n\
                     {verdict}\n\
                     {divider}\n\n"
                )
                .as_bytes(),
            )
            .await?;
    }

    let total = CHECK_CASES.len();
    let summary = format!("Results: {passed} passed, {failed} failed out of {total} checks\n");
    writer.write_all(summary.as_bytes()).await?;
    writer.flush().await?;
    info!(passed, failed, "Spot checks finished");
    Ok(failed)
}
