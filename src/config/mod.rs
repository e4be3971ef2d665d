//! Site configuration management for `qsite.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[content]` | Document source (HTTP or directory), failures  |
//! | `[serve]`   | Static host (interface, port, site root)       |
//! | `[contact]` | Contact form submission endpoint               |
//!
//! The file is optional: without it every field takes its default and
//! paths resolve against the working directory.
//!
//! # Example
//!
//! ```toml
//! [content]
//! dir = "site/data"
//! failure = "surface"
//!
//! [serve]
//! port = 5277
//!
//! [contact]
//! endpoint = "https://forms.example.com/inquiry"
//! ```

mod contact;
mod content;
pub mod defaults;
mod error;
mod handle;
mod serve;

pub use contact::ContactConfig;
pub use content::ContentConfig;
pub use handle::{cfg, init_config};
pub use serve::ServeConfig;

use error::ConfigError;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing qsite.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Content store settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Static host settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Contact form settings
    #[serde(default)]
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load `qsite.toml` (if present), apply CLI overrides and validate.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let root = Self::normalize_path(&root);

        Self::update_option(&mut self.content.dir, cli.content.as_ref());
        if let Some(base_url) = &cli.base_url {
            self.content.base_url = Some(base_url.clone());
        }
        Self::update_option(&mut self.content.failure, cli.failure.as_ref());

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.content.dir = Self::normalize_path(&root.join(&self.content.dir));
        self.serve.root = Self::normalize_path(&root.join(&self.serve.root));

        if let Commands::Serve { interface, port } = &cli.command {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.content.prefix;
        if !prefix.is_empty() && !prefix.starts_with('/') {
            bail!(ConfigError::Validation(
                "[content.prefix] must be empty or start with `/`".into()
            ));
        }

        if let Some(base_url) = &self.content.base_url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[content.base_url] must start with http:// or https://".into()
            ));
        }

        if let Some(endpoint) = &self.contact.endpoint
            && !endpoint.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[contact.endpoint] must start with http:// or https://".into()
            ));
        }

        if let Some(Commands::Serve { .. }) = self.cli.map(|cli| &cli.command) {
            if !self.serve.root.is_dir() {
                bail!(ConfigError::Validation(format!(
                    "[serve.root] `{}` is not a directory",
                    self.serve.root.display()
                )));
            }
            if self.serve.interface.parse::<std::net::IpAddr>().is_err() {
                bail!(ConfigError::Validation(
                    "[serve.interface] must be an IP address".into()
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
