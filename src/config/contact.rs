//! `[contact]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[contact]` section in qsite.toml - where contact inquiries go.
///
/// # Example
/// ```toml
/// [contact]
/// endpoint = "https://forms.example.com/inquiry"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    /// Form-processing endpoint. Inquiries are only logged when unset.
    #[serde(default = "defaults::contact::endpoint")]
    #[educe(Default = defaults::contact::endpoint())]
    pub endpoint: Option<String>,
}
