//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use papertrend_core::client::{ApiClient, ApiConfig};
use papertrend_core::config::ClientConfig;
use papertrend_core::error::Result;
use papertrend_core::trends::{RankingKey, ViewState};

/// Resolve configuration: file, then environment, then `--base-url`
pub fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load_from(path)?.with_env_overrides(),
        None => ClientConfig::load()?,
    };

    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }

    Ok(config)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: ClientConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        Ok(Self {
            cli,
            config: load_config(cli)?,
            start,
        })
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(ApiConfig::from(&self.config))
    }

    /// View parameters from flags, falling back to the configured defaults
    pub fn view_state(
        &self,
        sort: Option<RankingKey>,
        window: Option<usize>,
        top_n: Option<usize>,
        category: Option<&str>,
    ) -> ViewState {
        let view = ViewState::new()
            .with_ranking(sort.unwrap_or(self.config.ranking))
            .with_window(window.unwrap_or(self.config.sparkline_window))
            .with_top_n(top_n.unwrap_or(self.config.default_top_n));

        match category {
            Some(name) => view.with_selected(name),
            None => view,
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("papertrend {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Research publication trends, search and recommendations.");
        println!();
        println!("Run `papertrend --help` for usage information.");
        Ok(())
    }
}
