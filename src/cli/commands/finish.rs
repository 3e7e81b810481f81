//! Finish the unloading session

use std::io::{self, BufRead, Write};

use dockscan::output::{OperationResult, OutputMode};

use super::Context;

/// Delete all scanned data and reset the session
///
/// Asks for confirmation on stdin unless `yes` is set. JSON mode never
/// prompts and requires `yes`.
pub fn finish(yes: bool, ctx: &Context) -> anyhow::Result<()> {
    if !yes {
        if ctx.mode == OutputMode::Json {
            anyhow::bail!("finish deletes all scanned data; pass --yes to confirm");
        }
        if !confirm("Finish unloading? All scanned data will be deleted. [y/N] ")? {
            OperationResult {
                success: false,
                message: "Cancelled.".to_string(),
            }
            .render(ctx.mode);
            return Ok(());
        }
    }

    let mut session = ctx.open_session();
    session.finish()?;

    OperationResult {
        success: true,
        message: "Session finished. All scanned data was deleted.".to_string(),
    }
    .render(ctx.mode);
    Ok(())
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
