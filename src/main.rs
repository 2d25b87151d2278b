use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mentormatch::api::ApiClient;
use mentormatch::config::Config;
use mentormatch::state::mentors::MentorAction;
use mentormatch::state::Store;
use mentormatch::trace;

/// Fetch the mentor collection and print a summary.
#[derive(Debug, Parser)]
#[command(name = "mentormatch", version)]
struct Cli {
    /// Path to a config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the API base URL from the config.
    #[arg(long)]
    base_url: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    trace::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path).context("loading config")?,
        None => Config::load().context("loading config")?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate().context("validating base URL override")?;
    }

    let client = ApiClient::new(&config.api);
    let mentors = client
        .fetch_mentors()
        .await
        .context("fetching mentors")?;

    let mut store = Store::new();
    store.dispatch(MentorAction::Set(mentors));

    let state = store.state();
    println!("{} mentors", state.mentors.len());
    for mentor in &state.mentors {
        let locale = mentor.locale.as_deref().unwrap_or("-");
        println!("  #{:<4} {:<24} {:<10} {}", mentor.id, mentor.name, locale, mentor.preferences.title);
    }

    Ok(())
}
