use std::io::{self, Write};
use std::process;

use clap::Parser;
use log::error;

mod app;
mod cli;
mod config;
mod error;
mod model;
mod services;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let (lines, code) = match app::run(&cli) {
        Ok(lines) => (lines, 0),
        Err(e) => {
            error!("{e}");
            (e.report(), e.exit_code())
        }
    };

    let mut stdout = io::stdout().lock();
    for line in &lines {
        if writeln!(stdout, "{line}").is_err() {
            break;
        }
    }
    let _ = stdout.flush();

    if code != 0 {
        process::exit(code);
    }
}
