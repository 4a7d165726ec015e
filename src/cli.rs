mod run;
mod terminal;

use clap::ArgAction;
use run::Run;
use self_test::SelfTest;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);
        self.command.run()
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries script results, so diagnostics go to stderr
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Execute an operation script against a new list
    ///
    /// Scripts hold one operation per line: append, insert, remove-first,
    /// head, tail, len, get, to-list, clear. '#' starts a comment.
    Run(Run),

    /// Run the reference scenario against the list implementation
    SelfTest(SelfTest),
}

impl Command {
    fn run(self) -> anyhow::Result<()> {
        match self {
            Self::Run(command) => command.run()?,
            Self::SelfTest(command) => command.run()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parses_run_with_options() {
        let cli = Cli::try_parse_from([
            "singly",
            "-vv",
            "run",
            "ops.txt",
            "--values",
            "text",
            "--output",
            "json",
            "--keep-going",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Run(_)));
    }

    #[test]
    fn parses_self_test() {
        let cli = Cli::try_parse_from(["singly", "self-test"]).unwrap();
        assert!(matches!(cli.command, Command::SelfTest(_)));
    }

    #[test]
    fn requires_a_command() {
        assert!(Cli::try_parse_from(["singly"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
