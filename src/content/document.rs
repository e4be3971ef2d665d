//! Named documents of the content store.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One document per content domain.
///
/// The wire name doubles as the file stem: `DocumentName::CaseStudies`
/// lives at `<prefix>/case-studies.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentName {
    Company,
    Services,
    Industries,
    Solutions,
    CaseStudies,
    Technology,
    #[serde(rename = "opensource")]
    OpenSource,
    Resources,
    Process,
    Tools,
    Social,
}

impl DocumentName {
    /// Every document in the store, in navigation order.
    pub const ALL: [DocumentName; 11] = [
        Self::Company,
        Self::Services,
        Self::Industries,
        Self::Solutions,
        Self::CaseStudies,
        Self::Technology,
        Self::OpenSource,
        Self::Resources,
        Self::Process,
        Self::Tools,
        Self::Social,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Services => "services",
            Self::Industries => "industries",
            Self::Solutions => "solutions",
            Self::CaseStudies => "case-studies",
            Self::Technology => "technology",
            Self::OpenSource => "opensource",
            Self::Resources => "resources",
            Self::Process => "process",
            Self::Tools => "tools",
            Self::Social => "social",
        }
    }

    /// File name inside the content directory (e.g. `case-studies.json`).
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }

    /// URL path under a prefix, e.g. `/data` -> `/data/company.json`.
    ///
    /// Trailing slashes on the prefix are ignored; an empty prefix serves
    /// from the root.
    pub fn url_path(self, prefix: &str) -> String {
        let prefix = prefix.trim_end_matches('/');
        format!("{prefix}/{}", self.file_name())
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for names outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document `{0}`")]
pub struct UnknownDocument(pub String);

impl FromStr for DocumentName {
    type Err = UnknownDocument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stem = s.strip_suffix(".json").unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == stem)
            // `open-source` is the route name; accept it as an alias
            .or_else(|| (stem == "open-source").then_some(Self::OpenSource))
            .ok_or_else(|| UnknownDocument(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_path_with_prefix() {
        assert_eq!(DocumentName::Company.url_path("/data"), "/data/company.json");
        assert_eq!(
            DocumentName::CaseStudies.url_path("/data/"),
            "/data/case-studies.json"
        );
        assert_eq!(DocumentName::Social.url_path(""), "/social.json");
    }

    #[test]
    fn test_parse_roundtrips_every_name() {
        for name in DocumentName::ALL {
            assert_eq!(name.as_str().parse::<DocumentName>(), Ok(name));
        }
    }

    #[test]
    fn test_parse_accepts_file_name_and_alias() {
        assert_eq!("tools.json".parse(), Ok(DocumentName::Tools));
        assert_eq!("open-source".parse(), Ok(DocumentName::OpenSource));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "pricing".parse::<DocumentName>().unwrap_err();
        assert_eq!(err.to_string(), "unknown document `pricing`");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&DocumentName::OpenSource).unwrap();
        assert_eq!(json, "\"opensource\"");
        let name: DocumentName = serde_json::from_str("\"case-studies\"").unwrap();
        assert_eq!(name, DocumentName::CaseStudies);
    }
}
