use super::{confirm, parse_id, report, require_name};
use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    #[command(about = "Add a task")]
    Add { name: String },
    #[command(about = "Replace the text of a task")]
    Edit {
        target: String,
        new_name: String,
        #[arg(long, help = "Treat TARGET as a task id instead of its text")]
        id: bool,
    },
    #[command(about = "Delete a task")]
    Delete {
        target: String,
        #[arg(long, help = "Treat TARGET as a task id instead of its text")]
        id: bool,
        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
    #[command(about = "List all tasks")]
    List,
}

pub fn cmd(db: &Db, args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::Add { name } => {
            let name = require_name(&name)?;
            let id = db.tasks().insert(&Task::new(&name))?;
            msg_success!(Message::TaskCreated(name, id));
        }
        TaskCommand::Edit { target, new_name, id } => {
            let key = require_name(&target)?;
            let new_name = require_name(&new_name)?;
            let result = if id {
                db.tasks().rename_by_id(parse_id(&key)?, &new_name)
            } else {
                db.tasks().rename(&key, &new_name)
            };
            let missing = Message::TaskNotFound(key.clone());
            report(result, |count| Message::TaskRenamed { from: key, to: new_name, count }, missing)?;
        }
        TaskCommand::Delete { target, id, yes } => {
            let key = require_name(&target)?;
            if !confirm(Message::ConfirmDeleteTask(key.clone()), yes)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            let result = if id {
                db.tasks().delete_by_id(parse_id(&key)?)
            } else {
                db.tasks().delete(&key)
            };
            let missing = Message::TaskNotFound(key.clone());
            report(result, |count| Message::TaskDeleted(key, count), missing)?;
        }
        TaskCommand::List => {}
    }

    let tasks = db.tasks().get_all()?;
    if tasks.is_empty() {
        msg_info!(Message::TasksEmpty);
        return Ok(());
    }
    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks);

    Ok(())
}
