use std::io;
use std::process::ExitCode;

use calculadora::{Config, MultiplyMode, run};
use clap::{ArgAction, Parser};
use tracing_subscriber::{EnvFilter, fmt};

/// Калькулятор: читает `<число> <оператор> <число>` из stdin.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Поведение ветки '*'
    #[arg(long, value_enum, default_value = "as-is")]
    multiply: MultiplyMode,

    /// Печатать приглашение перед вводом
    #[arg(long)]
    prompt: bool,

    /// Подробнее в stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Config::default()
            .with_multiply(args.multiply)
            .with_prompt(args.prompt)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout занят результатом
    fmt::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::from(&args);
    let mut stdout = io::stdout().lock();

    match run(io::stdin().lock(), &mut stdout, &config) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("Ошибка: {e}");
            ExitCode::FAILURE
        }
    }
}
