//! Interactive front end: welcome banner, prompt loop and result display.
//!
//! The loop is generic over its reader and writer so tests can drive it
//! with in-memory buffers. Results go to the writer (stdout in
//! production); log records never do.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::config::TagConfig;
use crate::engine::{TagResult, TaggerEngine};
use crate::metrics::{generate_message_id, OperationTimer};
use crate::utils::RULE_WIDTH;

/// Inputs that end the session, compared case-insensitively.
const EXIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

/// Whether a trimmed input line asks to end the session.
#[must_use]
pub fn is_exit_command(input: &str) -> bool {
    EXIT_COMMANDS.contains(&input.to_lowercase().as_str())
}

/// The banner shown when the session opens, listing the loaded tags.
#[must_use]
pub fn welcome_banner(config: &TagConfig) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let stars = "*".repeat(RULE_WIDTH);
    let tags = config.tag_names().collect::<Vec<_>>().join(", ");
    format!(
        "{rule}\n\
         WELCOME TO THE TAGTRIAGE MESSAGE TAGGER\n\
         {rule}\n\
         \n\
         Loaded {count} tags: {tags}\n\
         \n\
         Enter a customer message to analyze.\n\
         Here are some example messages you can try:\n\
         {stars}\n\
         - I need help with my order.\n\
         - Can you assist me with a technical issue?\n\
         - I'm looking for information on my account.\n\
         {stars}\n\
         Type 'quit' or 'exit' to stop.\n\
         \n",
        count = config.len(),
    )
}

/// Format one analysis result the way the terminal shows it.
#[must_use]
pub fn format_result(result: &TagResult) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let primary = &result.primary;
    let secondary = &result.secondary;
    format!("\n{rule}\nPrimary Tag:   {primary}\nSecondary Tag: {secondary}\n{rule}\n\n")
}

/// Run the prompt loop until an exit command or end of input.
///
/// Returns the number of messages analyzed. Empty lines are re-prompted
/// with a hint rather than analyzed; everything else goes through the
/// engine and the result block is written back. Ctrl-C handling lives in
/// the binary so this stays drivable from plain buffers.
///
/// # Errors
///
/// Returns any I/O error from the reader or writer.
pub async fn run_interactive<R, W>(
    engine: &TaggerEngine,
    reader: R,
    writer: &mut W,
) -> io::Result<u64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(welcome_banner(engine.config()).as_bytes())
        .await?;
    writer.flush().await?;

    let mut lines = reader.lines();
    let mut analyzed: u64 = 0;
    loop {
        writer.write_all(b"Enter message: ").await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            writer.write_all(b"\n\nEnd of input. Goodbye!\n").await?;
            writer.flush().await?;
            break;
        };
        let message = line.trim();

        if is_exit_command(message) {
            writer
                .write_all(b"\nThank you for using tagtriage!\n")
                .await?;
            writer.flush().await?;
            break;
        }
        if message.is_empty() {
            writer.write_all(b"Please enter a valid message.\n\n").await?;
            writer.flush().await?;
            continue;
        }

        let message_id = generate_message_id();
        let _timer = OperationTimer::new("analyze_message");
        let result = engine.analyze(message);
        debug!(
            message_id = %message_id,
            chars = message.len(),
            primary = %result.primary,
            secondary = %result.secondary,
            "Analyzed message"
        );
        analyzed = analyzed.saturating_add(1);

        writer.write_all(format_result(&result).as_bytes()).await?;
        writer.flush().await?;
    }
    Ok(analyzed)
}
