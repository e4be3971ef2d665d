//! The fetch layer: one read per call, validated and decoded.

use super::{
    CaseStudy, CompanyProfile, ContentError, ContentSource, DocumentName, Industry, OpenSource,
    Process, Resources, Service, SocialLink, Solution, Technology, Tool,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A parsed document as delivered by the store.
pub type Document = Value;

/// Typed client over a [`ContentSource`].
///
/// Holds no state besides the source: every call is a fresh read.
pub struct ContentClient<S> {
    source: S,
}

impl<S: ContentSource> ContentClient<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Read one named document and parse it as JSON.
    pub fn fetch_document(&self, name: DocumentName) -> Result<Document, ContentError> {
        self.fetch(name)
    }

    /// Read one named document and decode it into `T`.
    pub fn fetch<T: DeserializeOwned>(&self, name: DocumentName) -> Result<T, ContentError> {
        let body = self.source.read(name)?;
        serde_json::from_str(&body).map_err(|source| ContentError::Decode {
            document: name,
            source,
        })
    }

    /// Fetch the case-studies collection and pick the record with `id`.
    ///
    /// Ids are compared verbatim, so route parameters can be passed as-is.
    pub fn fetch_case_study(&self, id: &str) -> Result<CaseStudy, ContentError> {
        self.case_studies()?
            .into_iter()
            .find(|study| study.id == id)
            .ok_or_else(|| ContentError::NotFound { id: id.to_owned() })
    }

    pub fn company(&self) -> Result<CompanyProfile, ContentError> {
        self.fetch(DocumentName::Company)
    }

    pub fn services(&self) -> Result<Vec<Service>, ContentError> {
        self.fetch(DocumentName::Services)
    }

    pub fn industries(&self) -> Result<Vec<Industry>, ContentError> {
        self.fetch(DocumentName::Industries)
    }

    pub fn solutions(&self) -> Result<Vec<Solution>, ContentError> {
        self.fetch(DocumentName::Solutions)
    }

    pub fn case_studies(&self) -> Result<Vec<CaseStudy>, ContentError> {
        self.fetch(DocumentName::CaseStudies)
    }

    pub fn technology(&self) -> Result<Technology, ContentError> {
        self.fetch(DocumentName::Technology)
    }

    pub fn open_source(&self) -> Result<OpenSource, ContentError> {
        self.fetch(DocumentName::OpenSource)
    }

    pub fn resources(&self) -> Result<Resources, ContentError> {
        self.fetch(DocumentName::Resources)
    }

    pub fn process(&self) -> Result<Process, ContentError> {
        self.fetch(DocumentName::Process)
    }

    pub fn tools(&self) -> Result<Vec<Tool>, ContentError> {
        self.fetch(DocumentName::Tools)
    }

    pub fn social(&self) -> Result<Vec<SocialLink>, ContentError> {
        self.fetch(DocumentName::Social)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::{MemorySource, fixture_store};

    #[test]
    fn test_fetch_document_parses_json() {
        let client = ContentClient::new(fixture_store());
        let doc = client.fetch_document(DocumentName::Company).unwrap();
        assert_eq!(doc["mission"], "Separate quantum signal from hype.");
    }

    #[test]
    fn test_every_fixture_document_decodes() {
        let client = ContentClient::new(fixture_store());
        client.company().unwrap();
        client.services().unwrap();
        client.industries().unwrap();
        client.solutions().unwrap();
        client.case_studies().unwrap();
        client.technology().unwrap();
        client.open_source().unwrap();
        client.resources().unwrap();
        client.process().unwrap();
        client.tools().unwrap();
        client.social().unwrap();
    }

    #[test]
    fn test_missing_document_names_it() {
        let client = ContentClient::new(MemorySource::default());
        for name in DocumentName::ALL {
            let err = client.fetch_document(name).unwrap_err();
            assert!(err.is_fetch());
            assert_eq!(err.document(), Some(name));
        }
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let source = MemorySource::default().with(DocumentName::Tools, "[{ not json");
        let client = ContentClient::new(source);
        let err = client.tools().unwrap_err();
        assert!(matches!(
            err,
            ContentError::Decode {
                document: DocumentName::Tools,
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let source = MemorySource::default().with(DocumentName::Services, r#"{"id": "x"}"#);
        let client = ContentClient::new(source);
        assert!(matches!(
            client.services(),
            Err(ContentError::Decode { .. })
        ));
    }

    #[test]
    fn test_fetch_case_study_found() {
        let client = ContentClient::new(fixture_store());
        let study = client.fetch_case_study("portfolio-risk").unwrap();
        assert_eq!(study.title, "Portfolio risk sampling");
    }

    #[test]
    fn test_fetch_case_study_not_found() {
        let client = ContentClient::new(fixture_store());
        let err = client.fetch_case_study("acme-logistics").unwrap_err();
        assert!(matches!(err, ContentError::NotFound { ref id } if id == "acme-logistics"));
    }

    #[test]
    fn test_fetch_case_study_is_exact_match() {
        let client = ContentClient::new(fixture_store());
        assert!(client.fetch_case_study("Portfolio-Risk").is_err());
        assert!(client.fetch_case_study("").is_err());
    }

    #[test]
    fn test_fetch_case_study_propagates_fetch_error() {
        let client = ContentClient::new(MemorySource::default());
        let err = client.fetch_case_study("portfolio-risk").unwrap_err();
        assert_eq!(err.document(), Some(DocumentName::CaseStudies));
    }

    #[test]
    fn test_repeated_fetches_are_equal_and_uncached() {
        let source = fixture_store();
        let client = ContentClient::new(&source);
        let first = client.fetch_document(DocumentName::Industries).unwrap();
        let second = client.fetch_document(DocumentName::Industries).unwrap();
        assert_eq!(first, second);
        assert_eq!(source.reads(DocumentName::Industries), 2);
    }
}
