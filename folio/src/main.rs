use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use folio::commands::{contact::ContactCommand, serve::serve, show::ShowCommand};
use folio_config::DEFAULT_CONFIG_PATH;
use folio_core_portfolio_impl::PortfolioFeatureServiceImpl;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !matches!(cli.command, Command::Completion { .. }) {
        init_tracing();
    }

    match cli.command {
        Command::Serve => serve(load_config(&cli.config)?).await?,
        Command::Contact(command) => command.invoke(load_config(&cli.config)?).await?,
        Command::Show { command } => {
            command
                .invoke(PortfolioFeatureServiceImpl::default())
                .await?
        }
        Command::CheckConfig { verbose } => {
            let config = load_config(&cli.config)?;
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { shell } => clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        ),
    }

    Ok(())
}

fn load_config(extra: &[PathBuf]) -> anyhow::Result<folio_config::Config> {
    let paths = std::iter::once(Path::new(DEFAULT_CONFIG_PATH))
        .chain(extra.iter().map(PathBuf::as_path))
        .collect::<Vec<_>>();
    folio_config::load(&paths).context("Failed to load config")
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Additional config files, applied in order on top of the defaults
    #[arg(short, long, env = "FOLIO_CONFIG", value_delimiter = ':', global = true)]
    config: Vec<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the REST API server
    #[command(aliases(["run", "start"]))]
    Serve,
    /// Submit one message through the contact form
    #[command(aliases(["c"]))]
    Contact(ContactCommand),
    /// Render a section of the portfolio in the terminal
    Show {
        #[command(subcommand)]
        command: ShowCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
