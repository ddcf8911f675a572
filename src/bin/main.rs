use markov_convert::config::{parse_command, Command};
use markov_convert::errors::{ConvertError, EXIT_OK};
use markov_convert::progress::{ConsoleProgress, Progress, Silent};
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = match parse_command(std::env::args_os()) {
        Ok(Command::Convert(config)) => config,
        Ok(Command::Info(e)) => e.exit(),
        Err(e) => {
            println!("Usage: markov-convert <file>");
            exit(e.exit_code());
        }
    };

    let mut console;
    let mut silent = Silent;
    let progress: &mut dyn Progress = if config.quiet {
        &mut silent
    } else {
        console = ConsoleProgress::stdout();
        &mut console
    };

    match markov_convert::run(&config, progress) {
        Ok(_) => exit(EXIT_OK),
        Err(e) => {
            report(&e);
            exit(e.exit_code());
        }
    }
}

fn report(err: &ConvertError) {
    match err {
        ConvertError::Io { .. } | ConvertError::PathPersist(_) => {
            eprintln!("Something went wrong! More details:");
            eprintln!("{:?}", err);
        }
        _ => eprintln!("{}", err),
    }
}
