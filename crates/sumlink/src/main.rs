mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "sumlink", version, about = "Varint-framed adder over byte links")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value_t = tracing::Level::INFO, global = true)]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);

    match cmd::run(cli.command, format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_subcommand() {
        let cli = Cli::try_parse_from(["sumlink", "serve", "/tmp/test.sock", "--once"])
            .expect("serve args should parse");
        assert!(matches!(cli.command, Command::Serve(_)));
    }

    #[test]
    fn parses_add_subcommand() {
        let cli = Cli::try_parse_from(["sumlink", "add", "/tmp/test.sock", "2", "3"])
            .expect("add args should parse");
        match cli.command {
            Command::Add(args) => {
                assert_eq!((args.one, args.two), (2, 3));
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_addends() {
        let err = Cli::try_parse_from(["sumlink", "add", "/tmp/test.sock", "two", "3"])
            .expect_err("non-numeric addend should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn parses_log_level_override() {
        let cli = Cli::try_parse_from([
            "sumlink",
            "--log-level",
            "debug",
            "serve",
            "/tmp/test.sock",
        ])
        .expect("log level should parse");
        assert_eq!(cli.log_level, tracing::Level::DEBUG);
    }
}
