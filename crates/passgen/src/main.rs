use clap::{Parser, Subcommand};
use passgen::{
    commands::{generate, history},
    Result,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Passgen {
    /// Directory containing the history document.
    #[clap(long, env = "PASSGEN_DATA")]
    data_dir: Option<PathBuf>,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a new password.
    Generate {
        /// Password length.
        #[clap(short, long)]
        length: Option<u16>,

        /// Exclude numeric digits.
        #[clap(long)]
        no_digits: bool,

        /// Exclude letters.
        #[clap(long)]
        no_letters: bool,

        /// Exclude symbols.
        #[clap(long)]
        no_symbols: bool,

        /// Copy the generated password to the clipboard.
        #[clap(short, long)]
        copy: bool,
    },
    /// Print previously generated passwords.
    History,
}

async fn run() -> Result<()> {
    let args = Passgen::parse();
    let data_dir = passgen::data_dir(args.data_dir)?;
    match args.cmd {
        Command::Generate {
            length,
            no_digits,
            no_letters,
            no_symbols,
            copy,
        } => {
            generate::run(
                &data_dir,
                generate::GenerateOptions {
                    length,
                    no_digits,
                    no_letters,
                    no_symbols,
                    copy,
                },
            )
            .await?
        }
        Command::History => history::run(&data_dir).await?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "passgen=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
    }

    Ok(())
}
