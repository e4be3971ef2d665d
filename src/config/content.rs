//! `[content]` section configuration.
//!
//! Where the fetch layer reads documents from, and what a page does when
//! a read fails.

use super::defaults;
use crate::loader::FailurePolicy;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in qsite.toml.
///
/// # Example
/// ```toml
/// [content]
/// base_url = "https://qubitwise.example"  # read over HTTP
/// prefix = "/data"
/// failure = "degrade"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Site origin to fetch documents from. When unset, documents are
    /// read from `dir`.
    #[serde(default = "defaults::content::base_url")]
    #[educe(Default = defaults::content::base_url())]
    pub base_url: Option<String>,

    /// URL path prefix of the documents (default: `/data`).
    #[serde(default = "defaults::content::prefix")]
    #[educe(Default = defaults::content::prefix())]
    pub prefix: String,

    /// Content directory, relative to the project root.
    #[serde(default = "defaults::content::dir")]
    #[educe(Default = defaults::content::dir())]
    pub dir: PathBuf,

    /// `surface` shows an error state, `degrade` renders with empty data.
    #[serde(default)]
    pub failure: FailurePolicy,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use crate::loader::FailurePolicy;

    #[test]
    fn test_content_config() {
        let config = r#"
            [content]
            base_url = "http://127.0.0.1:5277"
            prefix = "/static/data"
            failure = "degrade"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.content.base_url.as_deref(),
            Some("http://127.0.0.1:5277")
        );
        assert_eq!(config.content.prefix, "/static/data");
        assert_eq!(config.content.failure, FailurePolicy::Degrade);
    }

    #[test]
    fn test_content_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.content.base_url, None);
        assert_eq!(config.content.prefix, "/data");
        assert!(config.content.dir.ends_with("site/data"));
        assert_eq!(config.content.failure, FailurePolicy::Surface);
    }

    #[test]
    fn test_unknown_failure_policy() {
        let config = r#"
            [content]
            failure = "retry"
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }
}
