//! jix - query a Jira-compatible tracker, narrow the hits with fzf, then
//! open the chosen issue in a browser or render its detail in the terminal.
//!
//! Two modes:
//! - batch: `-e`/`-f` runs a JQL query, pipes the matches through fzf, and
//!   opens the chosen issue's browse page
//! - view: positional KEYs skip the search and render each issue's full
//!   detail (description, subtasks, comments) to stdout

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser};
use jix_core::{dispatch, Endpoint, FuzzySelector, Issue, JiraClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod browser;
mod view;

#[derive(Parser, Debug)]
#[command(
    name = "jix",
    author,
    version,
    about = "Fuzzy-find Jira issues from a JQL query and act on the choice"
)]
struct Cli {
    /// Execute the JQL expression in FILE (entire trimmed contents)
    #[arg(long, short = 'f', value_name = "PATH", conflicts_with_all = ["expression", "keys"])]
    file: Option<PathBuf>,

    /// Execute an inline JQL expression
    #[arg(long, short = 'e', value_name = "JQL", conflicts_with = "keys")]
    expression: Option<String>,

    /// Issue keys to render directly, bypassing search
    #[arg(value_name = "KEY")]
    keys: Vec<String>,

    /// Disable the fzf preview pane
    #[arg(long)]
    no_preview: bool,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        // progress/echo lines belong on stderr; stdout carries only the
        // Launching line and rendered issue detail
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.file.is_none() && cli.expression.is_none() && cli.keys.is_empty() {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let endpoint = Endpoint::from_env()?;

    if !cli.keys.is_empty() {
        return view::run_view(&cli.keys, endpoint).await;
    }

    let jql = match (&cli.file, &cli.expression) {
        (Some(path), None) => std::fs::read_to_string(path)
            .with_context(|| format!("couldn't read file: {}", path.display()))?
            .trim()
            .to_string(),
        (None, Some(expr)) => expr.clone(),
        // clap's conflicts_with rules out both-set; both-none is handled above
        _ => unreachable!("argument parsing guarantees one query source"),
    };

    run_pipeline(&jql, endpoint, cli.no_preview).await
}

async fn run_pipeline(jql: &str, endpoint: Endpoint, no_preview: bool) -> Result<()> {
    info!("Executing query: '{jql}'");

    let client = JiraClient::new(endpoint);
    let issues = client.search(jql).await?;
    if issues.is_empty() {
        info!("query matched no issues");
        return Ok(());
    }

    let lines: Vec<String> = issues.iter().map(Issue::display_line).collect();

    // The preview pane re-invokes this binary in view mode with the
    // highlighted candidate's key.
    let preview = if no_preview {
        None
    } else {
        std::env::current_exe()
            .ok()
            .map(|p| p.display().to_string())
    };
    let selector = FuzzySelector::fzf(preview.as_deref());
    let selection = selector.select(&lines).await?;

    dispatch(&selection, client.endpoint(), &browser::PythonLauncher)?;
    Ok(())
}
