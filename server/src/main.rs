//! mxnan server and site tool.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for the mxnan site.
#[derive(Parser)]
#[command(name = "mxnan", version, about = "Serve and maintain the mxnan site")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "mxnan.toml", global = true)]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Pre-render static routes, then serve the site
    Serve,
    /// Generate static routes and exit
    Prerender,
    /// Validate configuration and posts
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Create a new draft post
    New {
        /// Slug of the post, also its file name
        slug: String,
        /// Post title (defaults to the slug)
        #[arg(short, long)]
        title: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    server::init_tracing(cli.verbose);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => server::cmd::serve::run(&cli.config).await?,
        Commands::Prerender => server::cmd::prerender::run(&cli.config).await?,
        Commands::Check { strict } => server::cmd::check::run(&cli.config, strict)?,
        Commands::New { slug, title } => {
            server::cmd::new::run(&cli.config, &slug, title.as_deref())?;
        }
    }

    Ok(())
}
