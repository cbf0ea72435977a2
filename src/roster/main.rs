use clap::Parser;
use colored::*;
use roster::api::{CmdMessage, MessageLevel, RosterApi};
use roster::error::{Result, RosterError};
use roster::model::Record;
use roster::store::fs::FileStore;
use std::str::FromStr;

mod args;
use args::{Cli, Operation};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let operation = match cli.operation.as_deref() {
        None | Some("") => return Err(RosterError::MissingFlag("operation")),
        Some(op) => Operation::from_str(op)?,
    };
    let file_name = require_flag(cli.file_name.as_deref(), "fileName")?;

    let mut api = RosterApi::new(FileStore::new(file_name));

    let result = match operation {
        Operation::Add => {
            let item = require_flag(cli.item.as_deref(), "item")?;
            api.add_record(Record::from_json(item)?)?
        }
        Operation::List => api.list_records()?,
        Operation::FindById => {
            let id = require_flag(cli.id.as_deref(), "id")?;
            api.find_by_id(id)?
        }
        Operation::Remove => {
            let id = require_flag(cli.id.as_deref(), "id")?;
            api.remove_by_id(id)?
        }
    };

    if let Some(record) = &result.found {
        println!("{}", serde_json::to_string(record)?);
    }
    if !result.listed.is_empty() {
        println!("{}", serde_json::to_string(&result.listed)?);
    }
    print_messages(&result.messages);
    Ok(())
}

fn require_flag<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RosterError::MissingFlag(name)),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
