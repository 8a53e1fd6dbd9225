use super::confirm;
use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct StoreArgs {
    #[command(subcommand)]
    command: StoreCommand,
}

#[derive(Debug, Subcommand)]
enum StoreCommand {
    #[command(about = "Show the stored and expected schema version")]
    Version,
    #[command(about = "Drop and recreate all tables, discarding every record")]
    Reset {
        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

pub fn cmd(db: &mut Db, args: StoreArgs) -> Result<()> {
    match args.command {
        StoreCommand::Version => {
            msg_print!(Message::SchemaVersion {
                stored: db.schema_version()?,
                expected: db.expected_version(),
            });
        }
        StoreCommand::Reset { yes } => {
            if !confirm(Message::ConfirmDatabaseReset, yes)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            db.reset()?;
            msg_success!(Message::DatabaseReset);
        }
    }

    Ok(())
}
