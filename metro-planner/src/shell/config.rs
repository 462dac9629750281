//! Configuration for the interactive shell.

/// Configuration parameters for a shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Name shown in the prompt.
    /// When `None`, the first input line supplies it.
    pub system_name: Option<String>,

    /// Text printed after the system name to ask for a command.
    pub prompt: String,

    /// Write each command back after the prompt.
    /// Makes transcripts readable when input is not a terminal.
    pub echo_commands: bool,
}

impl ShellConfig {
    /// Set the system name.
    pub fn with_system_name(mut self, name: impl Into<String>) -> Self {
        self.system_name = Some(name.into());
        self
    }

    /// Set the prompt text.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Enable or disable command echo.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo_commands = echo;
        self
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            system_name: None,
            prompt: ">>> ".to_string(),
            echo_commands: false,
        }
    }
}
