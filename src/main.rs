use std::{
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use quartz::{NumberValue, Session, SessionConfig, parse, run};
use tracing_subscriber::EnvFilter;

/// quartz is a tiny arithmetic expression language with variables.
///
/// Without an expression argument, quartz starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate this expression once and exit instead of starting the
    /// prompt.
    expression: Option<String>,

    /// Name of the input shown in diagnostics.
    #[arg(short = 'n', long, default_value = "<stdin>")]
    source_name: String,

    /// When to color the output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Define a variable before evaluating anything, as `NAME=NUMBER`.
    /// May be repeated.
    #[arg(short, long = "define", value_name = "NAME=NUMBER", value_parser = parse_binding)]
    defines: Vec<(String, NumberValue)>,

    /// Print the parsed syntax tree instead of evaluating.
    #[arg(long)]
    ast: bool,

    /// Log what the interpreter is doing to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Settings derived from the command line.
struct AppConfig {
    source_name:   String,
    color_enabled: bool,
    print_ast:     bool,
}

impl AppConfig {
    fn from_args(args: &Args) -> Self {
        let color_enabled = match args.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        Self { source_name: args.source_name.clone(),
               color_enabled,
               print_ast: args.ast }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = AppConfig::from_args(&args);

    let mut session_config = SessionConfig::default();
    session_config.bindings.extend(args.defines);
    let mut session = Session::with_config(session_config);

    if let Some(expression) = args.expression {
        let ok = evaluate(&mut session, &expression, &config);
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    run_prompt(&mut session, &config)?;
    Ok(ExitCode::SUCCESS)
}

/// Installs the stderr logger. `QUARTZ_LOG` overrides the level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("QUARTZ_LOG").unwrap_or_else(|_| {
                                                          EnvFilter::new(default_level)
                                                      });

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .without_time()
                             .init();
}

/// Reads and evaluates lines until end of input or `exit`.
fn run_prompt(session: &mut Session, config: &AppConfig) -> anyhow::Result<()> {
    let banner = format!("Quartz - v{}", env!("CARGO_PKG_VERSION"));
    if config.color_enabled {
        println!("{}", banner.cyan());
    } else {
        println!("{banner}");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n> ");
        io::stdout().flush().context("failed to write the prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;
        let text = line.trim_end_matches(['\r', '\n']);

        match text.trim() {
            "" => continue,
            "exit" | "quit" => break,
            _ => {},
        }

        evaluate(session, text, config);
    }

    tracing::debug!(variables = session.variables().len(), "leaving prompt");
    Ok(())
}

/// Evaluates one input and prints the outcome. Returns `false` on error.
fn evaluate(session: &mut Session, text: &str, config: &AppConfig) -> bool {
    if config.print_ast {
        return match parse(&config.source_name, text) {
            Ok(ast) => {
                println!("  {ast}");
                true
            },
            Err(e) => {
                print_error(&e.to_string(), config);
                false
            },
        };
    }

    match run(session, &config.source_name, text) {
        Ok(value) => {
            println!("  {value}");
            true
        },
        Err(e) => {
            print_error(&e.to_string(), config);
            false
        },
    }
}

fn print_error(message: &str, config: &AppConfig) {
    if config.color_enabled {
        println!("{}", message.red());
    } else {
        println!("{message}");
    }
}

/// Parses a `NAME=NUMBER` command-line binding.
fn parse_binding(raw: &str) -> Result<(String, NumberValue), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=NUMBER, found '{raw}'"))?;
    let name = name.trim();

    let mut chars = name.chars();
    let valid_name = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                     && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_name || name == "def" {
        return Err(format!("'{name}' is not a valid variable name"));
    }

    let value = value.trim();
    let number = if let Ok(n) = value.parse::<i64>() {
        NumberValue::Int(n)
    } else {
        value.parse::<f64>()
             .map(NumberValue::Float)
             .map_err(|_| format!("'{value}' is not a number"))?
    };

    Ok((name.to_string(), number))
}
