use std::env;
use std::ffi::OsString;
use std::iter;

use clap::Parser;
use cron_parser::CronParser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Environment variable selecting the log level (`off` .. `trace`).
const LOG_ENV: &str = "CRON_PARSER_LOG";

#[derive(Parser)]
#[command(
    name = "cron-parser",
    about = "Expand a cron line into the times it fires on",
    version,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Cron line as a single argument (e.g., "*/15 0 1,15 * 1-5 /usr/bin/find")
    expression: Vec<OsString>,
}

impl Cli {
    /// Every user argument is a value, including `--` and anything that
    /// looks like a flag.
    fn from_args() -> Result<Self, clap::Error> {
        let mut args = env::args_os();
        let program = args.next().unwrap_or_else(|| "cron-parser".into());
        let argv = iter::once(program)
            .chain(iter::once(OsString::from("--")))
            .chain(args);
        Self::try_parse_from(argv)
    }
}

fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    // logs go to stderr so stdout carries only the table
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("cron-parser: logging disabled: {e}");
    }
}

fn main() {
    init_logging();
    let cli = match Cli::from_args() {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let [ref expression] = cli.expression[..] else {
        log::debug!("got {} arguments", cli.expression.len());
        println!("Invalid number of arguments");
        return;
    };

    let mut parser = CronParser::new();
    if !parser.parse_os_str(expression) {
        if let Some(error) = parser.error_kind() {
            if error.is_field_error() {
                log::debug!("field rejected: {error:?}");
            } else {
                log::debug!("line rejected: {error:?}");
            }
            println!("{error}");
        }
        return;
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = parser.output(&mut stdout) {
        log::error!("failed to write output: {e}");
    }
}
