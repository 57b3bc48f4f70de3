//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::AppConfig;
use crate::error::Result;
use crate::pagination::{PageProvider, QueryArgs};
use crate::session::{BrowseSession, FetchOutcome, FetchPolicy, SessionConfig};
use crate::store::{seed_directory, DirectoryStore, EntrySource, MemoryStore};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Seed { repeat } => self.seed(&config, *repeat),
            Commands::Query { offset, limit } => self.query(&config, *offset, *limit),
            Commands::Browse {
                page_size,
                policy,
                max_pages,
                snapshot,
            } => {
                self.browse(&config, *page_size, *policy, *max_pages, *snapshot)
                    .await
            }
            Commands::Serve { port } => {
                let store = self.open_store(&config)?;
                let port = port.unwrap_or(config.server.port);
                crate::cli::serve(Arc::new(PageProvider::new(store)), port).await
            }
        }
    }

    /// Load the config file (if any) and apply CLI overrides
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.cli.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(root) = &self.cli.root {
            config.store.root.clone_from(root);
        }

        Ok(config)
    }

    /// Open the directory store, seeding it first when configured
    fn open_store(&self, config: &AppConfig) -> Result<DirectoryStore> {
        if config.store.seed_on_start {
            seed_directory(&config.store.root, &config.store.seed)?;
        }
        Ok(DirectoryStore::new(&config.store.root))
    }

    /// Write sample files
    fn seed(&self, config: &AppConfig, repeat: Option<usize>) -> Result<()> {
        let mut seed = config.store.seed.clone();
        if let Some(repeat) = repeat {
            seed.repeat = repeat;
        }

        let written = seed_directory(&config.store.root, &seed)?;
        self.output_message(&json!({
            "type": "SEED",
            "root": config.store.root.display().to_string(),
            "written": written,
        }))
    }

    /// Run one page query and print the page
    fn query(&self, config: &AppConfig, offset: Option<i64>, limit: Option<i64>) -> Result<()> {
        let store = self.open_store(config)?;
        let provider = PageProvider::new(store);
        let request = QueryArgs { offset, limit }.into_request();

        tracing::debug!("Querying {} with {}", provider.source().describe(), request);
        let page = provider.query(&request)?;

        self.output_message(&json!({
            "type": "PAGE",
            "request": QueryArgs::from(request),
            "page": page,
        }))
    }

    /// Scroll through the store one page at a time
    async fn browse(
        &self,
        config: &AppConfig,
        page_size: Option<usize>,
        policy: Option<FetchPolicy>,
        max_pages: Option<usize>,
        snapshot: bool,
    ) -> Result<()> {
        let session_config = self.session_config(config, page_size, policy, snapshot);
        let store = self.open_store(config)?;

        let source: Box<dyn EntrySource> = if session_config.snapshot {
            Box::new(MemoryStore::snapshot_of(&store)?)
        } else {
            Box::new(store)
        };
        tracing::info!(
            "Browsing {} (page_size={}, policy={:?})",
            source.describe(),
            session_config.page_size,
            session_config.policy
        );

        let provider = Arc::new(PageProvider::new(source));
        let mut session = BrowseSession::new(provider, &session_config)?;

        let started = Instant::now();
        let mut pages = 0usize;
        let mut outcome = session.start().await?;

        loop {
            match outcome {
                FetchOutcome::Fetched(summary) => {
                    pages += 1;
                    self.output_message(&json!({
                        "type": "FETCH",
                        "message": summary.to_string(),
                        "summary": summary,
                    }))?;
                }
                FetchOutcome::Empty { total_size } => {
                    tracing::debug!("No entries past the end (total_size={})", total_size);
                    break;
                }
                FetchOutcome::AlreadyLoaded { page_id } => {
                    tracing::debug!("Page {} already loaded, stopping", page_id);
                    break;
                }
                FetchOutcome::NotNeeded => break,
            }

            if max_pages.is_some_and(|max| pages >= max) {
                break;
            }

            // The simulated display keeps the last fetched row in view
            let last_visible = session.accumulator().fetched_count();
            outcome = session.on_scroll(last_visible).await?;
        }

        let result = session.snapshot();
        self.output_message(&json!({
            "type": "RESULT",
            "fetched": result.fetched_count(),
            "total_size": result.total_size,
            "stats": session.stats(),
            "duration_ms": u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        }))
    }

    fn session_config(
        &self,
        config: &AppConfig,
        page_size: Option<usize>,
        policy: Option<FetchPolicy>,
        snapshot: bool,
    ) -> SessionConfig {
        let mut session = config.session.clone();
        if let Some(page_size) = page_size {
            session = session.with_page_size(page_size);
        }
        if let Some(policy) = policy {
            session = session.with_policy(policy);
        }
        session.snapshot |= snapshot;
        session
    }

    /// Print a message in the selected format
    fn output_message(&self, msg: &Value) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(msg)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(msg)?,
        };
        println!("{rendered}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn runner(args: &[&str]) -> Runner {
        Runner::new(Cli::parse_from(args))
    }

    #[test]
    fn test_root_flag_overrides_config() {
        let runner = runner(&["dirpage", "--root", "/tmp/elsewhere", "seed"]);
        let config = runner.load_config().unwrap();
        assert_eq!(config.store.root.to_str(), Some("/tmp/elsewhere"));
    }

    #[test]
    fn test_session_overrides() {
        let runner = runner(&["dirpage", "browse"]);
        let config = AppConfig::default();

        let session =
            runner.session_config(&config, Some(5), Some(FetchPolicy::ContainingPage), true);
        assert_eq!(session.page_size, 5);
        assert_eq!(session.policy, FetchPolicy::ContainingPage);
        assert!(session.snapshot);

        let session = runner.session_config(&config, None, None, false);
        assert_eq!(session, SessionConfig::default());
    }

    #[tokio::test]
    async fn test_seed_then_browse() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("images");
        let root_arg = root.to_str().unwrap();

        runner(&["dirpage", "--root", root_arg, "seed", "--repeat", "7"])
            .run()
            .await
            .unwrap();
        assert_eq!(std::fs::read_dir(&root).unwrap().count(), 7);

        runner(&["dirpage", "--root", root_arg, "browse", "--page-size", "3"])
            .run()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_query_rejects_negative_limit() {
        let dir = tempfile::tempdir().unwrap();
        let root_arg = dir.path().to_str().unwrap();

        let err = runner(&["dirpage", "--root", root_arg, "query", "--limit", "-1"])
            .run()
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: limit must not be less than 0"
        );
    }
}
