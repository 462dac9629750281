//! The read-eval-print loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use super::{Command, Session, ShellConfig, display};

/// An interactive shell over a [`Session`].
pub struct Shell {
    config: ShellConfig,
    session: Session,
}

impl Shell {
    /// Create a shell with an empty session.
    pub fn new(config: ShellConfig) -> Self {
        Self::with_session(config, Session::new())
    }

    /// Create a shell over an existing session.
    pub fn with_session(config: ShellConfig, session: Session) -> Self {
        Self { config, session }
    }

    /// The shell's session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read commands from `input` until `exit` or end of input.
    ///
    /// Unless the configuration names the system, the first line of input
    /// is taken as its name. Blank lines are skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        let mut lines = input.lines();

        let system_name = match &self.config.system_name {
            Some(name) => name.clone(),
            None => {
                write!(output, "{}", self.config.prompt)?;
                output.flush()?;
                match lines.next() {
                    Some(line) => line?.trim().to_string(),
                    None => return Ok(()),
                }
            }
        };
        info!(system = %system_name, "Shell started");

        loop {
            write!(output, "[{}] {}", system_name, self.config.prompt)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            let line = line?;
            if self.config.echo_commands {
                writeln!(output, "{}", line.trim_end())?;
            }
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    info!(error = %e, "Rejected command");
                    writeln!(output, "{}", display::command_error(&e))?;
                    continue;
                }
            };
            if command == Command::Exit {
                break;
            }

            debug!(?command, "Executing");
            for out in self.session.execute(&command) {
                writeln!(output, "{out}")?;
            }
        }

        info!(system = %system_name, "Shell finished");
        Ok(())
    }
}
