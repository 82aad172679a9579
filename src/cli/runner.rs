//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{self, AppState};
use crate::config::AppConfig;
use crate::error::{Result, ResultExt};
use crate::graphql::{GraphQlLaunchSource, LaunchSource};
use crate::loader::load_seed;
use crate::pagination::PageCursor;
use crate::types::LaunchRecord;
use crate::view::{format_launch_date, render_page, ViewState};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

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
            Commands::Serve { host, port } => {
                let config = config.with_bind(host.clone(), *port)?;
                self.serve(&config).await
            }
            Commands::Fetch { page } => self.fetch(&config, *page).await,
            Commands::Render { output } => self.render(&config, output.as_deref()).await,
            Commands::Check => self.check(&config).await,
        }
    }

    /// Config file (if any) with CLI overrides applied
    fn load_config(&self) -> Result<AppConfig> {
        AppConfig::load(self.cli.config.as_deref())?.with_endpoint(self.cli.endpoint.clone())
    }

    fn source(&self, config: &AppConfig) -> Result<Arc<dyn LaunchSource>> {
        let client = config.http_client()?;
        Ok(Arc::new(GraphQlLaunchSource::new(
            config.endpoint.clone(),
            client,
        )))
    }

    /// Seed, then serve until the process is stopped
    async fn serve(&self, config: &AppConfig) -> Result<()> {
        let source = self.source(config)?;
        let seed = load_seed(source.as_ref()).await?;
        let addr = config.server.socket_addr()?;
        let state = AppState::with_session_ttl(source, seed, config.server.session_ttl());
        server::serve(state, addr).await
    }

    /// Print one page
    async fn fetch(&self, config: &AppConfig, page: u64) -> Result<()> {
        let cursor = PageCursor::from_page(page)?;
        let source = self.source(config)?;
        let launches = source.launches_past(cursor).await?;

        match self.cli.format {
            OutputFormat::Json => {
                for launch in &launches {
                    println!("{}", serde_json::to_string(launch)?);
                }
            }
            OutputFormat::Pretty => {
                println!("{cursor}");
                if launches.is_empty() {
                    println!("  (no launches)");
                }
                for launch in &launches {
                    println!("{}", pretty_line(launch));
                }
            }
        }
        Ok(())
    }

    /// Write the seed page as HTML
    async fn render(&self, config: &AppConfig, output: Option<&Path>) -> Result<()> {
        let source = self.source(config)?;
        let seed = load_seed(source.as_ref()).await?;
        let html = render_page(&ViewState::from_seed(&seed));

        match output {
            Some(path) => {
                tokio::fs::write(path, html)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), "wrote seed page");
            }
            None => print!("{html}"),
        }
        Ok(())
    }

    /// Query the first page and report
    async fn check(&self, config: &AppConfig) -> Result<()> {
        let source = self.source(config)?;
        let started = Instant::now();
        let launches = source.launches_past(PageCursor::first()).await?;
        println!(
            "OK: {} returned {} launches in {:?}",
            config.endpoint,
            launches.len(),
            started.elapsed()
        );
        Ok(())
    }
}

/// One-line summary of a launch
pub(crate) fn pretty_line(launch: &LaunchRecord) -> String {
    format!(
        "{:>5}  {:<10}  {} ({}, {})",
        launch.id,
        format_launch_date(&launch.launch_date_local),
        launch.mission_name,
        launch.rocket.rocket_name,
        launch.launch_site.site_name_long
    )
}
