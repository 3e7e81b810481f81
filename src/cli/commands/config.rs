//! Inspect or initialize configuration

use dockscan::config::Config;
use dockscan::output::{OperationResult, OutputMode};
use dockscan::paths;

use super::Context;
use crate::cli::app::ConfigAction;

/// Run a config subcommand
pub fn config(action: &ConfigAction, ctx: &Context) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => show(ctx),
        ConfigAction::Init { force } => init(*force, ctx),
    }
}

fn show(ctx: &Context) -> anyhow::Result<()> {
    match ctx.mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&ctx.config)?);
        },
        OutputMode::Human => {
            println!("# {}", paths::config_file(&ctx.home).display());
            print!("{}", toml::to_string_pretty(&ctx.config)?);
        },
    }
    Ok(())
}

fn init(force: bool, ctx: &Context) -> anyhow::Result<()> {
    let path = paths::config_file(&ctx.home);
    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!("Config already exists at {}. Use --force to overwrite.", path.display()),
        }
        .render(ctx.mode);
        return Ok(());
    }

    Config::default().save(&path)?;
    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(ctx.mode);
    Ok(())
}
