//! Ask the farm assistant a question, optionally grounded in local text files.
//!
//! ```text
//! HARVEST_COMPLETION_API_KEY=... cargo run --example ask -- "水稻病害怎么防治" docs/rice.txt
//! ```
//!
//! Pass `--no-grounding` to skip retrieval.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};

use harvest::{
    AnswerOrchestrator, CacheRegistry, CacheSweeper, ChatCompletionClient, Config,
    InMemoryDocumentStore, SearchEngine, StoreError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut use_grounding = true;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--no-grounding" {
            use_grounding = false;
        } else {
            positional.push(arg);
        }
    }
    let Some((question, files)) = positional.split_first() else {
        bail!("usage: ask [--no-grounding] <question> [file ...]");
    };

    let config = Config::from_env()?;
    config.validate()?;
    config.require_api_key()?;

    tracing::info!(
        method = %config.similarity_method,
        model = %config.completion_model,
        "harvest starting"
    );

    let store = Arc::new(InMemoryDocumentStore::new(config.chunking()));
    for file in files {
        let path = Path::new(file);
        let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file.as_str());
        match store.upload(&bytes, filename) {
            Ok(receipt) => tracing::info!(
                filename,
                chunks = receipt.chunk_count,
                "document loaded"
            ),
            Err(err @ StoreError::Duplicate { .. }) => tracing::warn!(%err, "skipped"),
            Err(err) => return Err(err).with_context(|| format!("loading {filename}")),
        }
    }

    let registry = Arc::new(CacheRegistry::new(config.registry_config()));
    let sweeper = CacheSweeper::new(Arc::clone(&registry), config.sweep_interval);
    let sweeper_task = sweeper.start();

    let engine = SearchEngine::new(store, &registry, config.similarity_method)?;
    let client = ChatCompletionClient::new(config.chat_client_config())?;
    let orchestrator = AnswerOrchestrator::new(engine, client, &registry)?
        .with_retry(config.retry_policy())
        .with_timeout(config.completion_timeout);

    let answer = orchestrator.answer(question, use_grounding).await;
    println!("{}", serde_json::to_string_pretty(&answer)?);

    let stats = orchestrator.cache_stats();
    tracing::info!(
        cached = stats.total_cached_items,
        hit_rate = stats.overall_hit_rate,
        "cache stats"
    );

    sweeper.stop();
    sweeper_task.await?;
    Ok(())
}
