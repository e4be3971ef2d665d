//! Raw document reads.
//!
//! A [`ContentSource`] performs exactly one read per call: no retry, no
//! cache. Decoding and record lookup live in [`super::ContentClient`].

use super::{ContentError, DocumentName};
use std::{fs, io, path::PathBuf};

/// Where documents are read from.
pub trait ContentSource: Send + Sync {
    /// Read the raw body of one document.
    fn read(&self, name: DocumentName) -> Result<String, ContentError>;

    /// Human-readable location of `name`, used in logs.
    fn locate(&self, name: DocumentName) -> String;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn read(&self, name: DocumentName) -> Result<String, ContentError> {
        (**self).read(name)
    }

    fn locate(&self, name: DocumentName) -> String {
        (**self).locate(name)
    }
}

impl<S: ContentSource + ?Sized> ContentSource for Box<S> {
    fn read(&self, name: DocumentName) -> Result<String, ContentError> {
        (**self).read(name)
    }

    fn locate(&self, name: DocumentName) -> String {
        (**self).locate(name)
    }
}

// ============================================================================
// HTTP
// ============================================================================

/// Reads `<base_url><prefix>/<name>.json` over HTTP.
pub struct HttpSource {
    agent: ureq::Agent,
    base_url: String,
    prefix: String,
}

impl HttpSource {
    pub fn new(base_url: &str, prefix: &str) -> Self {
        // Status codes are checked here so errors can name the document.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            prefix: prefix.to_owned(),
        }
    }

    fn url(&self, name: DocumentName) -> String {
        format!("{}{}", self.base_url, name.url_path(&self.prefix))
    }
}

impl ContentSource for HttpSource {
    fn read(&self, name: DocumentName) -> Result<String, ContentError> {
        let mut response =
            self.agent
                .get(&self.url(name))
                .call()
                .map_err(|err| ContentError::Fetch {
                    document: name,
                    reason: err.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                document: name,
                status: status.as_u16(),
            });
        }

        response
            .body_mut()
            .read_to_string()
            .map_err(|err| ContentError::Fetch {
                document: name,
                reason: err.to_string(),
            })
    }

    fn locate(&self, name: DocumentName) -> String {
        self.url(name)
    }
}

// ============================================================================
// Filesystem
// ============================================================================

/// Reads `<dir>/<name>.json` from disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, name: DocumentName) -> PathBuf {
        self.dir.join(name.file_name())
    }
}

impl ContentSource for DirSource {
    fn read(&self, name: DocumentName) -> Result<String, ContentError> {
        fs::read_to_string(self.path(name)).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ContentError::Status {
                document: name,
                status: 404,
            },
            _ => ContentError::Fetch {
                document: name,
                reason: err.to_string(),
            },
        })
    }

    fn locate(&self, name: DocumentName) -> String {
        self.path(name).display().to_string()
    }
}
