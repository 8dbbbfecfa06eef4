use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use goshawk_cli::{OutputFormat, commands};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "goshawk")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A browser end-to-end test harness: configured WebDriver sessions and failure capture",
    long_about = "Goshawk resolves a declarative configuration (config file, environment \
                  overrides, CLI flags) into validated browser launch options, opens one \
                  WebDriver session per scenario, and captures diagnostics when things fail."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the harness config file
    #[arg(short, long, global = true, default_value = "goshawk.toml")]
    config: PathBuf,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved harness configuration
    Config {
        /// Browser to use (chrome, firefox, edge), overriding config and environment
        #[arg(long)]
        browser: Option<String>,
    },

    /// Open a browser session and save a full-page screenshot
    Capture {
        /// URL to capture (defaults to the configured base url)
        #[arg(long)]
        url: Option<String>,

        /// Browser to use (chrome, firefox, edge), overriding config and environment
        #[arg(long)]
        browser: Option<String>,

        /// Directory for the screenshot (defaults to the configured screenshot dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// WebDriver endpoint, e.g. http://localhost:4444
        #[arg(long)]
        webdriver_url: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Config { browser } => {
            commands::config::execute(&cli.config, browser.as_deref(), cli.format)
        }
        Commands::Capture {
            url,
            browser,
            output,
            webdriver_url,
        } => commands::capture::execute(
            &cli.config,
            url.as_deref(),
            browser.as_deref(),
            output,
            webdriver_url.as_deref(),
        ),
        Commands::Completions { shell } => {
            commands::completion::execute(shell, &mut Cli::command())
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("goshawk=debug,goshawk_core=debug,goshawk_browser=debug,goshawk_harness=debug")
    } else {
        EnvFilter::new("goshawk=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
