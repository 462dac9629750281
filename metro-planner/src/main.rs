use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use clap::builder::FalseyValueParser;
use metro_planner::shell::{Shell, ShellConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "metro-planner", about = "Metro network trip planner shell")]
struct Args {
    /// Read commands from this file instead of stdin
    script: Option<PathBuf>,

    /// Name of the metro system; otherwise the first input line names it
    #[arg(long, env = "METRO_SYSTEM_NAME")]
    system_name: Option<String>,

    /// Echo each command after the prompt
    #[arg(long, env = "METRO_ECHO", value_parser = FalseyValueParser::new())]
    echo: bool,
}

impl Args {
    fn shell_config(&self) -> ShellConfig {
        let mut config = ShellConfig::default().with_echo(self.echo);
        if let Some(name) = self.system_name.as_deref().map(str::trim) {
            if !name.is_empty() {
                config = config.with_system_name(name);
            }
        }
        config
    }

    fn open_input(&self) -> io::Result<Box<dyn BufRead>> {
        match &self.script {
            Some(path) => {
                tracing::info!(script = %path.display(), "Running script");
                Ok(Box::new(BufReader::new(File::open(path)?)))
            }
            None => Ok(Box::new(io::stdin().lock())),
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with shell output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut shell = Shell::new(args.shell_config());
    let input = args.open_input()?;

    let stdout = io::stdout();
    let mut output = stdout.lock();
    shell.run(input, &mut output)
}
