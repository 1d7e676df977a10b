mod platform;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use platform::config::{self, DEFAULT_CONFIG_PATH};

#[derive(Parser, Debug)]
#[command(name = "news_app", version, about = "Top headlines in a searchable, sortable table")]
struct Cli {
    /// RON configuration file; missing means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve paginated headlines as JSON.
    Serve {
        /// Address to listen on, overriding the config file.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Browse headlines in the terminal (the default).
    Browse {
        /// Base url of a running `serve`; without it headlines are fetched directly.
        #[arg(long)]
        server: Option<String>,
        /// Page to open first.
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("news_app: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_with_env(&cli.config)?;
    match cli.command.unwrap_or(Command::Browse {
        server: None,
        page: 1,
    }) {
        Command::Serve { bind } => platform::run_serve(&config, bind),
        Command::Browse { server, page } => platform::run_browse(&config, server, page),
    }
}
