mod cd;
pub use cd::cd;

mod ls;
pub use ls::ls;

use std::collections::HashMap;
use thiserror::Error;

use crate::client::ClientError;
use crate::session::Session;

// ====== ERROR ======

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    ArgumentCount(&'static str),

    #[error("cd requires a directory")]
    NotADirectory,

    #[error(transparent)]
    Client(#[from] ClientError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

// ====== TABLE ======

/// Runs one command against the session. `Ok` holds the text to print.
pub type Handler = fn(&mut Session, &[&str]) -> ServiceResult<String>;

pub type CommandTable = HashMap<&'static str, Handler>;

/// Every command the shell knows, keyed by its case-sensitive name.
pub fn command_table() -> CommandTable {
    let mut map = CommandTable::new();
    map.insert("cd", cd as Handler);
    map.insert("ls", ls as Handler);
    map
}
