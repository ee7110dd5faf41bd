use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use explorer_client::api::ExplorerClient;
use explorer_client::config::Config;
use explorer_client::dispatch::IntentDispatcher;
use explorer_client::logging::init_tracing;
use explorer_client::model::{AppState, ModelEvent, ModelIntent};
use explorer_client::storage::{FileStore, PersistedState};
use explorer_client::store::Store;

#[derive(Debug, Parser)]
#[command(name = "explorer-client", version, about = "Drive the explorer classification service")]
struct Cli {
    /// Config file (default: <config_dir>/explorer-client/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the service base URL from the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all models known to the service
    Models,
    /// Create a new model
    Create { name: String },
    /// Make a model the current one and remember it
    Enable { name: String },
    /// Fetch stats for a model
    Stats {
        #[arg(long)]
        model: Option<String>,
    },
    /// Post page annotations (slot=value pairs) to a model
    Annotate {
        #[arg(long)]
        model: Option<String>,
        /// e.g. --set page3-ann=5
        #[arg(long = "set", value_parser = parse_annotation, required = true)]
        annotations: Vec<(String, i64)>,
    },
    /// Search through a model
    Search {
        #[arg(long)]
        model: Option<String>,
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },
    /// Upload seed URLs for a model
    Seed {
        #[arg(long)]
        model: Option<String>,
        #[arg(required = true, num_args = 1..)]
        urls: Vec<String>,
    },
    /// Set one page slot annotation and show the resulting map
    Relevancy { slot: String, value: i64 },
    /// Show the current time as the service UI would
    Clock,
    /// Show the persisted current model
    Status,
}

fn parse_annotation(raw: &str) -> Result<(String, i64), String> {
    let (slot, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected slot=value, got '{raw}'"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value for '{slot}': {e}"))?;
    Ok((slot.trim().to_string(), value))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("warn");
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.service.base_url = base_url;
        config.validate().context("Invalid --base-url")?;
    }

    let storage_path = config
        .storage
        .path
        .clone()
        .unwrap_or_else(FileStore::default_path);
    tracing::info!(
        base_url = %config.service.base_url,
        storage = %storage_path.display(),
        "Starting explorer client"
    );

    let api = ExplorerClient::new(&config.service).context("Failed to create service client")?;
    let dispatcher = IntentDispatcher::new(Arc::new(api), Arc::new(FileStore::new(storage_path)));
    let store = Store::new(dispatcher);

    let snapshot = run(&store, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?);
    Ok(())
}

async fn run(store: &Store, command: Command) -> anyhow::Result<Arc<AppState>> {
    let snapshot = match command {
        Command::Models => store.dispatch(ModelIntent::ListModels).await?,
        Command::Create { name } => store.dispatch(ModelIntent::CreateModel { name }).await?,
        Command::Enable { name } => store.dispatch(ModelIntent::EnableModel { name }).await?,
        Command::Stats { model } => {
            let model = resolve_model(store, model)?;
            store.dispatch(ModelIntent::FetchModelStats { model }).await?
        }
        Command::Annotate { model, annotations } => {
            let model = resolve_model(store, model)?;
            for (slot, value) in annotations {
                store.dispatch(ModelIntent::SetRelevancy { slot, value }).await?;
            }
            let annotations = store.dispatcher().relevancy();
            store
                .dispatch(ModelIntent::UpdateModel {
                    name: model,
                    annotations,
                })
                .await?
        }
        Command::Search { model, term } => {
            let model = resolve_model(store, model)?;
            store
                .dispatch(ModelIntent::SetSearchInProgress { in_progress: true })
                .await?;
            store
                .dispatch(ModelIntent::Search {
                    model,
                    term: term.join(" "),
                })
                .await
                .context("Search failed")?
        }
        Command::Seed { model, urls } => {
            let model = resolve_model(store, model)?;
            store
                .dispatch(ModelIntent::SaveSeedUrls { model, urls })
                .await
                .context("Seed upload failed")?
        }
        Command::Relevancy { slot, value } => {
            store.dispatch(ModelIntent::SetRelevancy { slot, value }).await?
        }
        Command::Clock => store.dispatch(ModelIntent::RefreshClock).await?,
        Command::Status => {
            let persisted = PersistedState::load(store.dispatcher().storage()).unwrap_or_default();
            match persisted.current_model {
                Some(name) => store.apply(&ModelEvent::ModelEnabled(name)),
                None => store.snapshot(),
            }
        }
    };
    Ok(snapshot)
}

/// Explicit `--model`, else the persisted current model.
fn resolve_model(store: &Store, explicit: Option<String>) -> anyhow::Result<String> {
    if let Some(model) = explicit {
        return Ok(model);
    }
    match PersistedState::load(store.dispatcher().storage()).and_then(|s| s.current_model) {
        Some(model) => Ok(model),
        None => bail!("No model selected; run `explorer-client enable <name>` or pass --model"),
    }
}
