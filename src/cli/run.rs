use std::{
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use singly::{Config, Runner, script::Script};
use tracing::instrument;

use super::terminal::{Tone, style, supports_color};

/// Config file picked up from the working directory when `--config` is not
/// given.
const DEFAULT_CONFIG: &str = "singly.toml";

#[derive(Debug, Parser)]
#[command(about = "Execute an operation script against a new list")]
pub struct Run {
    /// Path to the script, or '-' to read standard input
    script: PathBuf,

    /// How values in the script are interpreted
    #[arg(long, value_name = "KIND", default_value = "int")]
    values: ValueKind,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,

    /// Path to a config file (defaults to ./singly.toml if present)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Record out-of-bounds lookups and carry on instead of stopping
    #[arg(long)]
    keep_going: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum ValueKind {
    /// Signed 64-bit integers
    #[default]
    Int,
    /// Free text; the rest of the line after the operation
    Text,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Run {
    #[instrument(level = "debug", skip(self), fields(script = %self.script.display()))]
    pub fn run(self) -> anyhow::Result<()> {
        let source = self.read_script()?;

        let mut config = self.load_config()?;
        if self.keep_going {
            config.stop_on_error = false;
        }

        match self.values {
            ValueKind::Int => self.execute::<i64>(&source, config),
            ValueKind::Text => self.execute::<String>(&source, config),
        }
    }

    fn read_script(&self) -> anyhow::Result<String> {
        if self.script == Path::new("-") {
            return std::io::read_to_string(std::io::stdin())
                .context("failed to read script from stdin");
        }
        std::fs::read_to_string(&self.script)
            .with_context(|| format!("failed to read script {}", self.script.display()))
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let path = match &self.config {
            Some(path) => path.as_path(),
            None if Path::new(DEFAULT_CONFIG).is_file() => Path::new(DEFAULT_CONFIG),
            None => {
                tracing::debug!("no {DEFAULT_CONFIG} found, using default config");
                return Ok(Config::default());
            }
        };

        tracing::debug!("Loading config from {}", path.display());
        Config::load(path).with_context(|| format!("failed to load config {}", path.display()))
    }

    fn execute<V>(&self, source: &str, config: Config) -> anyhow::Result<()>
    where
        V: FromStr + Clone + Display + Serialize,
        V::Err: Display,
    {
        let script: Script<V> = source
            .parse()
            .with_context(|| format!("failed to parse script {}", self.script.display()))?;

        let mut runner = Runner::new(config);
        let result = runner.run(script);

        // Whatever ran before a failure is still reported.
        match self.output {
            OutputFormat::Text => print!("{}", render_text(&runner, supports_color())),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(runner.transcript())?);
            }
        }

        result.context("script stopped")?;
        Ok(())
    }
}

/// Renders the transcript as text, one line per echoed operation or result.
fn render_text<V: Display>(runner: &Runner<V>, colour: bool) -> String {
    let config = runner.config();
    let mut out = String::new();

    for entry in runner.transcript() {
        if config.echo {
            out.push_str(&style(&format!("> {}", entry.operation), Tone::Muted, colour));
            out.push('\n');
        }
        if let Some(text) = entry.outcome.render(config.empty_marker()) {
            out.push_str(&style(&text, Tone::from(&entry.outcome), colour));
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn command(script: PathBuf, config: Option<PathBuf>) -> Run {
        Run {
            script,
            values: ValueKind::Int,
            output: OutputFormat::Json,
            config,
            keep_going: false,
        }
    }

    #[test]
    fn reads_script_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"append 1\nhead\n").unwrap();

        let run = command(file.path().to_path_buf(), None);
        assert_eq!(run.read_script().unwrap(), "append 1\nhead\n");
    }

    #[test]
    fn missing_script_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let run = command(tmp.path().join("nope.txt"), None);

        let error = run.read_script().unwrap_err();
        assert!(error.to_string().starts_with("failed to read script"));
    }

    #[test]
    fn loads_explicit_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\necho = true\n").unwrap();

        let run = command(PathBuf::from("-"), Some(file.path().to_path_buf()));
        let config = run.load_config().unwrap();
        assert!(config.echo);
        assert!(config.stop_on_error);
    }

    #[test]
    fn execute_reports_parse_errors() {
        let run = command(PathBuf::from("inline"), None);
        let error = run
            .execute::<i64>("append 1\nappend x\n", Config::default())
            .unwrap_err();

        assert_eq!(error.to_string(), "failed to parse script inline");
        let cause = error.root_cause().to_string();
        assert!(cause.starts_with("invalid value 'x'"), "{cause}");
    }

    #[test]
    fn execute_fails_when_lookup_stops_the_run() {
        let run = command(PathBuf::from("inline"), None);
        let error = run
            .execute::<i64>("append 1\nget 5\n", Config::default())
            .unwrap_err();

        assert_eq!(error.to_string(), "script stopped");
    }

    fn run_script<V>(source: &str, config: Config) -> Runner<V>
    where
        V: FromStr + Clone + Display,
        V::Err: Display,
    {
        let mut runner = Runner::new(config);
        runner.run(source.parse().unwrap()).unwrap();
        runner
    }

    #[test]
    fn text_output_lists_results() {
        let runner = run_script::<String>(
            "append hello world\nappend bye\ntail\nto-list\nremove-first\nlen\n",
            Config::default(),
        );

        assert_eq!(
            render_text(&runner, false),
            "bye\n[hello world, bye]\nhello world\n1\n"
        );
    }

    #[test]
    fn text_output_uses_empty_marker_and_echo() {
        let mut config = Config::default();
        config.echo = true;
        config.set_empty_marker("None".to_string());
        let runner = run_script::<i64>("head\nappend 1\n", config);

        assert_eq!(
            render_text(&runner, false),
            "> head\nNone\n> append 1\n"
        );
    }

    #[test]
    fn text_output_reports_skipped_lookups() {
        let mut config = Config::default();
        config.stop_on_error = false;
        let runner = run_script::<i64>("get -1\n", config);

        assert_eq!(
            render_text(&runner, false),
            "index -1 out of bounds for list of length 0\n"
        );
    }
}
