use crate::db::db::Db;
use crate::libs::export::Exporter;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, help = "Output file (default: stdout)")]
    output: Option<PathBuf>,
}

pub fn cmd(db: &Db, args: ExportArgs) -> Result<()> {
    if let Some(path) = Exporter::new(args.output).export(db)? {
        msg_success!(Message::ExportSuccess(path.display().to_string()));
    }

    Ok(())
}
