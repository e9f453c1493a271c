//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::collection::{HalContext, PagedCollection};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use futures::StreamExt;
use std::io::Write;
use tracing::{debug, info};

/// Pages printed by the CLI hold raw JSON items
type Page = PagedCollection<JsonValue>;

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
        let context = HalContext::from_config(&self.load_config()?)?;

        match &self.cli.command {
            Commands::Get { url } => self.print(&self.load(&context, url).await?),
            Commands::Next { url } => self.print(&self.load(&context, url).await?.next().await?),
            Commands::Prev { url } => self.print(&self.load(&context, url).await?.prev().await?),
            Commands::First { url } => {
                self.print(&self.load(&context, url).await?.first().await?)
            }
            Commands::Last { url } => self.print(&self.load(&context, url).await?.last().await?),
            Commands::Page { url, number } => {
                self.print(&self.load(&context, url).await?.page(*number).await?)
            }
            Commands::Size { url, size } => {
                self.print(&self.load(&context, url).await?.size(*size).await?)
            }
            Commands::Sort { url, sort } => {
                let page = self.load(&context, url).await?;
                self.print(&page.sort_elements(sort.clone()).await?)
            }
            Commands::Walk { url, max_pages } => {
                let pages = self
                    .load(&context, url)
                    .await?
                    .into_pages()
                    .take(max_pages.unwrap_or(usize::MAX));
                futures::pin_mut!(pages);
                let mut count = 0usize;
                while let Some(page) = pages.next().await {
                    self.print(&page?)?;
                    count += 1;
                }
                info!(pages = count, "Walk finished");
                Ok(())
            }
        }
    }

    /// Build the client configuration from the config file and flags
    pub fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default(),
        };

        if let Some(root) = &self.cli.root_url {
            config.root_url = Some(root.clone());
        }
        if let Some(proxy) = &self.cli.proxy_url {
            config.proxy_url = Some(proxy.clone());
        }
        for header in &self.cli.headers {
            let (name, value) = parse_header(header)?;
            config.headers.insert(name, value);
        }

        config.validate()?;
        Ok(config)
    }

    async fn load(&self, context: &HalContext, url: &str) -> Result<Page> {
        debug!(url, "Loading collection");
        PagedCollection::fetch(context.clone(), url).await
    }

    fn print(&self, page: &Page) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(page)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(page)?,
        };
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{rendered}")?;
        Ok(())
    }
}

/// Split a `Name: value` header argument
pub(crate) fn parse_header(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| Error::invalid_header(raw, "expected 'Name: value'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid_header(raw, "empty header name"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn runner(args: &[&str]) -> Runner {
        Runner::new(Cli::try_parse_from(args.iter().copied()).unwrap())
    }

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("X-Tenant: acme").unwrap(),
            ("X-Tenant".to_string(), "acme".to_string())
        );
        assert_eq!(
            parse_header("Accept:application/hal+json").unwrap(),
            ("Accept".to_string(), "application/hal+json".to_string())
        );
        assert!(parse_header("no-colon").is_err());
        assert!(parse_header(": value").is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let runner = runner(&[
            "hal-pager",
            "--root-url",
            "http://backend/api",
            "--proxy-url",
            "http://proxy/api",
            "-H",
            "X-Tenant: acme",
            "get",
            "http://backend/api/users",
        ]);

        let config = runner.load_config().unwrap();
        assert_eq!(config.root_url.as_deref(), Some("http://backend/api"));
        assert_eq!(config.proxy_url.as_deref(), Some("http://proxy/api"));
        assert_eq!(config.headers.get("X-Tenant"), Some(&"acme".to_string()));
    }

    #[test]
    fn test_proxy_flag_without_root_fails() {
        let runner = runner(&[
            "hal-pager",
            "--proxy-url",
            "http://proxy/api",
            "get",
            "http://backend/api/users",
        ]);

        assert!(runner.load_config().is_err());
    }
}
