pub mod export;
pub mod init;
pub mod product;
pub mod store;
pub mod task;

use crate::db::db::Db;
use crate::db::error::StoreError;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error, msg_success, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Add, update, delete and list products")]
    Product(product::ProductArgs),
    #[command(about = "Add, rename, delete and list tasks")]
    Task(task::TaskArgs),
    #[command(about = "Inspect or reset the database")]
    Db(store::StoreArgs),
    #[command(about = "Export all records as JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parses arguments and runs the command. Store commands share one `Db`.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Product(args) => with_store(|db| product::cmd(db, args)),
            Commands::Task(args) => with_store(|db| task::cmd(db, args)),
            Commands::Db(args) => with_store(|db| store::cmd(db, args)),
            Commands::Export(args) => with_store(|db| export::cmd(db, args)),
        }
    }
}

/// Opens the configured store, runs `command` against it and closes it.
fn with_store(command: impl FnOnce(&mut Db) -> Result<()>) -> Result<()> {
    let config = Config::read()?;
    let mut db = Db::from_config(&config.database)?;

    let result = command(&mut db);
    finish(result, db.close())
}

/// Combines a command's outcome with the result of closing the store.
///
/// A command error always wins; a close error is only reported on its own
/// when the command itself succeeded.
pub fn finish(result: Result<()>, closed: Result<(), StoreError>) -> Result<()> {
    match (result, closed) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(e)) => Err(e.into()),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_error)) => {
            msg_error!(Message::DatabaseCloseFailed(close_error.to_string()));
            Err(e)
        }
    }
}

/// Rejects empty or whitespace-only input and returns it unchanged otherwise.
///
/// Names are matched exactly by the store, so surrounding spaces are kept.
pub fn require_name(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        msg_bail_anyhow!(Message::EmptyName);
    }
    Ok(raw.to_string())
}

pub fn parse_id(raw: &str) -> Result<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) => Ok(id),
        Err(_) => msg_bail_anyhow!(Message::InvalidId(raw.to_string())),
    }
}

/// Prints the outcome of a keyed mutation.
///
/// A missing record is a warning (`missing`), not a failure; only storage
/// errors are returned.
pub fn report(result: Result<usize, StoreError>, success: impl FnOnce(usize) -> Message, missing: Message) -> Result<()> {
    match result {
        Ok(count) => msg_success!(success(count)),
        Err(e) if e.is_not_found() => msg_warning!(missing),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Asks for confirmation unless `assume_yes` is set.
pub(crate) fn confirm(prompt: Message, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?;
    Ok(confirmed)
}
