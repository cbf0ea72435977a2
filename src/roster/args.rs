use clap::Parser;
use roster::error::RosterError;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "File-backed JSON record keeper", long_about = None)]
pub struct Cli {
    /// Operation to perform: add, list, findById, remove
    #[arg(long)]
    pub operation: Option<String>,

    /// Path to the backing JSON file
    #[arg(long = "fileName")]
    pub file_name: Option<String>,

    /// JSON-encoded record, e.g. '{"id":"1","email":"a@b.com","age":30}'
    #[arg(long)]
    pub item: Option<String>,

    /// Target record id
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    List,
    FindById,
    Remove,
}

impl FromStr for Operation {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "list" => Ok(Operation::List),
            "findById" => Ok(Operation::FindById),
            "remove" => Ok(Operation::Remove),
            other => Err(RosterError::UnknownOperation(other.to_string())),
        }
    }
}
