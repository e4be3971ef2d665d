//! Content store access.
//!
//! The site's content lives in static JSON documents, one per content
//! domain, served under a path prefix (default `/data`):
//!
//! ```text
//! ┌──────────────┐   read(name)   ┌───────────────┐   GET /data/<name>.json
//! │ContentClient │ ─────────────► │ ContentSource │ ─────────────────────────►
//! │ decode/find  │ ◄───────────── │ Http | Dir    │   or <dir>/<name>.json
//! └──────────────┘   raw body     └───────────────┘
//! ```
//!
//! The store is read-only and nothing is cached: each call reads again.

mod client;
mod document;
mod error;
mod source;
mod types;

pub use client::ContentClient;
pub use document::DocumentName;
pub use error::ContentError;
pub use source::{ContentSource, DirSource, HttpSource};
pub use types::*;

use crate::config::ContentConfig;

/// Build the source selected by `[content]`: HTTP when `base_url` is set,
/// the content directory otherwise.
pub fn source_from_config(config: &ContentConfig) -> Box<dyn ContentSource> {
    match &config.base_url {
        Some(base_url) => Box::new(HttpSource::new(base_url, &config.prefix)),
        None => Box::new(DirSource::new(&config.dir)),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory store seeded from the bundled site content.

    use super::{ContentError, ContentSource, DocumentName};
    use parking_lot::Mutex;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemorySource {
        docs: HashMap<DocumentName, String>,
        reads: Mutex<HashMap<DocumentName, usize>>,
    }

    impl MemorySource {
        pub fn with(mut self, name: DocumentName, body: &str) -> Self {
            self.docs.insert(name, body.to_owned());
            self
        }

        pub fn without(mut self, name: DocumentName) -> Self {
            self.docs.remove(&name);
            self
        }

        pub fn reads(&self, name: DocumentName) -> usize {
            self.reads.lock().get(&name).copied().unwrap_or(0)
        }
    }

    impl ContentSource for MemorySource {
        fn read(&self, name: DocumentName) -> Result<String, ContentError> {
            *self.reads.lock().entry(name).or_default() += 1;
            self.docs.get(&name).cloned().ok_or(ContentError::Status {
                document: name,
                status: 404,
            })
        }

        fn locate(&self, name: DocumentName) -> String {
            format!("memory:{name}")
        }
    }

    macro_rules! site_doc {
        ($file:literal) => {
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site/data/", $file))
        };
    }

    /// Every document of the bundled site.
    pub fn fixture_store() -> MemorySource {
        MemorySource::default()
            .with(DocumentName::Company, site_doc!("company.json"))
            .with(DocumentName::Services, site_doc!("services.json"))
            .with(DocumentName::Industries, site_doc!("industries.json"))
            .with(DocumentName::Solutions, site_doc!("solutions.json"))
            .with(DocumentName::CaseStudies, site_doc!("case-studies.json"))
            .with(DocumentName::Technology, site_doc!("technology.json"))
            .with(DocumentName::OpenSource, site_doc!("opensource.json"))
            .with(DocumentName::Resources, site_doc!("resources.json"))
            .with(DocumentName::Process, site_doc!("process.json"))
            .with(DocumentName::Tools, site_doc!("tools.json"))
            .with(DocumentName::Social, site_doc!("social.json"))
    }
}
