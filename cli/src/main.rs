mod commands;
pub mod persistence;

use std::{
    fs::{self, File},
    io::IsTerminal,
    process::ExitCode,
    sync::OnceLock,
};

use clap::Parser;
use commands::Commands;
use directories::ProjectDirs;

static INTERACTIVE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match commands::execute(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:?}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn is_interactive() -> bool {
    *INTERACTIVE.get_or_init(|| std::io::stdout().is_terminal())
}

fn init_logging() {
    let file = ProjectDirs::from("rs", "", persistence::APP_NAME).and_then(|proj_dirs| {
        let dir = proj_dirs.config_dir();
        fs::create_dir_all(dir).ok()?;
        File::create(dir.join("default.log")).ok()
    });
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(file) = file {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
}
