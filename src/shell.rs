use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::logger;
use crate::services::{self, CommandTable};
use crate::session::Session;

/// Why the loop stopped before the end of input.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Cannot read input: {0}")]
    Input(io::Error),

    #[error("Cannot write output: {0}")]
    Output(io::Error),
}

/// The prompt loop: read a line, run the command it names, print the result.
pub struct Shell {
    session: Session,
    commands: CommandTable,
}

impl Shell {
    pub fn new(session: Session) -> Self {
        Self::with_commands(session, services::command_table())
    }

    pub fn with_commands(session: Session, commands: CommandTable) -> Self {
        Self { session, commands }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn prompt(&self) -> String {
        format!("{}> ", self.session.wd())
    }

    /// Run until `input` ends.
    ///
    /// Failing commands are reported on `output` and the loop goes on. Only
    /// I/O errors on `input` or `output` end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<(), ShellError> {
        let mut buf = Vec::new();
        loop {
            output.write_all(self.prompt().as_bytes()).map_err(ShellError::Output)?;
            output.flush().map_err(ShellError::Output)?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).map_err(ShellError::Input)? == 0 {
                logger::log("[SHELL] end of input");
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buf);
            output.write_all(self.execute(&line).as_bytes()).map_err(ShellError::Output)?;
        }
    }

    /// Run one input line and return what to print for it.
    pub fn execute(&mut self, line: &str) -> String {
        let input: Vec<&str> = line.split_whitespace().collect();
        let (cmd, args) = match input.split_first() {
            Some((cmd, args)) => (*cmd, args),
            None => return String::new(),
        };

        let handler = match self.commands.get(cmd) {
            Some(h) => *h,
            None => {
                logger::log(&format!("[SHELL] unknown command: {cmd}"));
                return format!("Unknown command: {cmd}\n");
            }
        };

        logger::log(&format!("[SHELL] {cmd} {args:?} in {}", self.session.wd()));
        match handler(&mut self.session, args) {
            Ok(s) => s,
            Err(e) => {
                logger::log(&format!("[SHELL] {cmd} failed: {e:?}"));
                format!("Error: {e}\n")
            }
        }
    }
}
