mod cmd;
mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use ideaforge_core::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ideaforge",
    about = "Turn a project idea into epics, tasks and stories, then push them to Jira",
    version,
    propagate_version = true
)]
struct Cli {
    /// YAML config file (environment variables override it)
    #[arg(long, global = true, env = "IDEAFORGE_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API and web UI
    Serve {
        /// Port to listen on (overrides config; 0 = OS-assigned)
        #[arg(long)]
        port: Option<u16>,

        /// Open the UI in a browser
        #[arg(long)]
        open: bool,
    },

    /// List models offered by the local model server and OpenAI
    Models,

    /// Generate epics, tasks and stories for an idea
    Generate {
        /// Free-text project idea
        #[arg(long)]
        idea: String,

        /// Model id (gpt-* and claude-* go to OpenAI/Anthropic, others to the local server)
        #[arg(long)]
        model: String,
    },

    /// List Jira projects visible to the configured account
    Projects,

    /// Clean up PlantUML read from stdin
    Uml {
        /// Also print the rendering URL
        #[arg(long)]
        url: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Serve { port, open } => cmd::serve::run(config, port, open),
        Commands::Models => cmd::models::run(config, cli.json),
        Commands::Generate { idea, model } => cmd::generate::run(config, &idea, &model, cli.json),
        Commands::Projects => cmd::projects::run(config, cli.json),
        Commands::Uml { url } => cmd::uml::run(&config, url),
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    Config::load(path).with_context(|| match path {
        Some(p) => format!("failed to load config from {}", p.display()),
        None => "failed to load config from environment".to_string(),
    })
}
