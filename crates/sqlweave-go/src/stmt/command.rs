use sqlweave_core::{Error, Result};

use std::fmt;

/// The command tag of a query (`-- name: GetAuthor :one`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Scan at most one row
    One,

    /// Scan every row
    Many,

    /// Execute, discarding the result
    Exec,

    /// Execute, returning the affected row count
    ExecRows,

    /// Execute, returning the driver's result
    ExecResult,

    /// Execute, returning the last inserted id
    ExecLastId,

    /// Bulk insert through the driver's copy API
    CopyFrom,

    BatchOne,
    BatchMany,
    BatchExec,
}

impl Command {
    pub fn parse(tag: &str) -> Result<Command> {
        Ok(match tag {
            ":one" => Command::One,
            ":many" => Command::Many,
            ":exec" => Command::Exec,
            ":execrows" => Command::ExecRows,
            ":execresult" => Command::ExecResult,
            ":execlastid" => Command::ExecLastId,
            ":copyfrom" => Command::CopyFrom,
            ":batchone" => Command::BatchOne,
            ":batchmany" => Command::BatchMany,
            ":batchexec" => Command::BatchExec,
            _ => {
                return Err(Error::invalid_statement(format!(
                    "unknown command `{tag}`"
                )))
            }
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Command::One => ":one",
            Command::Many => ":many",
            Command::Exec => ":exec",
            Command::ExecRows => ":execrows",
            Command::ExecResult => ":execresult",
            Command::ExecLastId => ":execlastid",
            Command::CopyFrom => ":copyfrom",
            Command::BatchOne => ":batchone",
            Command::BatchMany => ":batchmany",
            Command::BatchExec => ":batchexec",
        }
    }

    /// True when rows are read back from the database.
    pub fn is_scanned(self) -> bool {
        matches!(
            self,
            Command::One | Command::Many | Command::BatchOne | Command::BatchMany
        )
    }

    pub fn is_batch(self) -> bool {
        matches!(
            self,
            Command::BatchOne | Command::BatchMany | Command::BatchExec
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
