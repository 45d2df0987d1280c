//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data root, load configuration and the collection
//! 3. **Dispatch**: Apply filter flags to the session and call the API
//! 4. **Output Formatting**: Rendered text, or JSON with `--json`
//! 5. **Error Handling**: Errors bubble up to `main`, which prints them and exits 1

use super::logging::init_logging;
use super::render::{render_detail, render_facets, render_list, render_messages};
use super::setup::{Cli, Commands, FilterArgs};
use acervoapp::api::{CmdResult, Session};
use acervoapp::config::AcervoConfig;
use acervoapp::init::{initialize, AcervoContext};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.data.clone())?;

    let command = cli.command.unwrap_or(Commands::List {
        filter: FilterArgs::default(),
    });

    match command {
        Commands::Config { key } => handle_config(&ctx.config, key.as_deref()),
        Commands::List { filter } => {
            let session = open_session(&ctx, &filter)?;
            print_result(&session.results(), cli.json, |result| {
                render_list(&result.listed_items)
            })
        }
        Commands::Facets => {
            let session = open_session(&ctx, &FilterArgs::default())?;
            print_result(&session.facets(), cli.json, |result| {
                result
                    .facets
                    .as_ref()
                    .map(render_facets)
                    .unwrap_or_default()
            })
        }
        Commands::Show { selector, filter } => {
            let session = open_session(&ctx, &filter)?;
            let result = session.show(&selector)?;
            print_result(&result, cli.json, |result| {
                result.detail.as_ref().map(render_detail).unwrap_or_default()
            })
        }
    }
}

/// Load the collection and apply the filter flags.
fn open_session(ctx: &AcervoContext, filter: &FilterArgs) -> Result<Session> {
    let mut session = ctx.api.load().with_context(|| {
        format!(
            "could not load the collection from {}",
            ctx.data_root.display()
        )
    })?;
    session.apply_filter(filter.to_filter(ctx.api.default_sort()));
    tracing::debug!(filter = ?session.filter(), "session ready");
    Ok(session)
}

fn print_result<F>(result: &CmdResult, json: bool, render: F) -> Result<()>
where
    F: FnOnce(&CmdResult) -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    print!("{}", render(result));
    print!("{}", render_messages(&result.messages));
    Ok(())
}

/// `acervo config [key]`: print resolved values as `key = value`.
fn handle_config(config: &AcervoConfig, key: Option<&str>) -> Result<()> {
    let table = match toml::Value::try_from(config)? {
        toml::Value::Table(table) => table,
        other => return Err(anyhow!("unexpected configuration shape: {}", other)),
    };

    match key {
        None => {
            for (k, v) in &table {
                println!("{} = {}", k, format_toml_value(v));
            }
        }
        Some(key) => {
            let normalized = key.replace('-', "_");
            let value = table
                .get(&normalized)
                .ok_or_else(|| anyhow!("unknown configuration key: {}", key))?;
            println!("{}", format_toml_value(value));
        }
    }
    Ok(())
}

/// Format a TOML value for display.
fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_toml_value() {
        assert_eq!(
            format_toml_value(&toml::Value::String("nugep-oficial".into())),
            "\"nugep-oficial\""
        );
        assert_eq!(format_toml_value(&toml::Value::Integer(3)), "3");
    }

    #[test]
    fn test_config_unknown_key_fails() {
        let config = AcervoConfig::default();
        assert!(handle_config(&config, Some("nope")).is_err());
        assert!(handle_config(&config, Some("default-sort")).is_ok());
        assert!(handle_config(&config, None).is_ok());
    }
}
