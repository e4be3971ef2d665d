//! `qsite check`: fetch every document and validate it.
//!
//! A document passes when it decodes into its record shape and every
//! listing in it has unique render keys.

use crate::{
    config::cfg,
    content::{
        ContentClient, ContentError, ContentSource, DocumentName, Keyed, duplicate_keys,
        source_from_config,
    },
    log,
    utils::log::Progress,
};
use anyhow::{Result, bail};
use rayon::prelude::*;

/// Outcome for one document.
#[derive(Debug)]
pub struct Report {
    pub document: DocumentName,
    /// Duplicate-key findings, or the error that stopped decoding.
    pub outcome: Result<Vec<String>, ContentError>,
}

impl Report {
    pub fn passed(&self) -> bool {
        matches!(&self.outcome, Ok(findings) if findings.is_empty())
    }
}

/// Check the configured content store.
pub fn run_check() -> Result<()> {
    let c = cfg();
    let client = ContentClient::new(source_from_config(&c.content));

    let progress = Progress::new("check", DocumentName::ALL.len());
    let reports = check_all(&client, Some(&progress));
    progress.finish();

    let mut failed = 0;
    for report in &reports {
        if report.passed() {
            log!("check"; "{} ok", report.document);
            continue;
        }
        failed += 1;
        match &report.outcome {
            Ok(findings) => {
                for finding in findings {
                    log!("error"; "{}: {finding}", report.document);
                }
            }
            Err(err) => {
                log!("error"; "{err} ({})", client.source().locate(report.document));
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} documents failed", reports.len());
    }
    log!("check"; "all {} documents ok", reports.len());
    Ok(())
}

/// Check every document in parallel. Reports keep store order.
pub fn check_all<S: ContentSource>(
    client: &ContentClient<S>,
    progress: Option<&Progress>,
) -> Vec<Report> {
    DocumentName::ALL
        .par_iter()
        .map(|&document| {
            let outcome = check_document(client, document);
            if let Some(progress) = progress {
                progress.inc();
            }
            Report { document, outcome }
        })
        .collect()
}

fn check_document<S: ContentSource>(
    client: &ContentClient<S>,
    document: DocumentName,
) -> Result<Vec<String>, ContentError> {
    let findings = match document {
        DocumentName::Company => {
            let company = client.company()?;
            [dupes("stats", &company.stats), dupes("values", &company.values)].concat()
        }
        DocumentName::Services => dupes("services", &client.services()?),
        DocumentName::Industries => dupes("industries", &client.industries()?),
        DocumentName::Solutions => dupes("solutions", &client.solutions()?),
        DocumentName::CaseStudies => dupes("case studies", &client.case_studies()?),
        DocumentName::Technology => {
            let tech = client.technology()?;
            [
                dupes("sdks", &tech.sdks),
                dupes("platforms", &tech.platforms),
                dupes("classical", &tech.classical),
            ]
            .concat()
        }
        DocumentName::OpenSource => dupes("projects", &client.open_source()?.projects),
        DocumentName::Resources => {
            let resources = client.resources()?;
            [
                dupes("explainers", &resources.explainers),
                dupes("reports", &resources.reports),
                dupes("glossary", &resources.glossary),
            ]
            .concat()
        }
        DocumentName::Process => dupes("steps", &client.process()?.process),
        DocumentName::Tools => dupes("tools", &client.tools()?),
        DocumentName::Social => dupes("links", &client.social()?),
    };
    Ok(findings)
}

fn dupes<T: Keyed>(listing: &str, items: &[T]) -> Vec<String> {
    duplicate_keys(items)
        .into_iter()
        .map(|key| format!("{listing}: duplicate key `{key}`"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::fixture_store;

    #[test]
    fn test_bundled_site_passes() {
        let client = ContentClient::new(fixture_store());
        let reports = check_all(&client, None);

        assert_eq!(reports.len(), DocumentName::ALL.len());
        for report in &reports {
            assert!(report.passed(), "{}: {:?}", report.document, report.outcome);
        }
    }

    #[test]
    fn test_reports_keep_store_order() {
        let client = ContentClient::new(fixture_store());
        let order: Vec<_> = check_all(&client, None).iter().map(|r| r.document).collect();
        assert_eq!(order, DocumentName::ALL);
    }

    #[test]
    fn test_missing_and_malformed_documents_fail() {
        let source = fixture_store()
            .without(DocumentName::Social)
            .with(DocumentName::Tools, r#"{"tools": []}"#);
        let client = ContentClient::new(source);
        let reports = check_all(&client, None);

        let social = &reports[10];
        assert!(social.outcome.as_ref().is_err_and(ContentError::is_fetch));
        let tools = &reports[9];
        assert!(matches!(tools.outcome, Err(ContentError::Decode { .. })));
    }

    #[test]
    fn test_duplicate_keys_are_reported() {
        let services = r#"[
            {"id": "pilot", "title": "A", "shortDescription": "", "icon": "Compass", "color": "",
             "timeline": "", "businessProblem": "", "deliverables": [], "outcomes": ""},
            {"id": "pilot", "title": "B", "shortDescription": "", "icon": "Compass", "color": "",
             "timeline": "", "businessProblem": "", "deliverables": [], "outcomes": ""}
        ]"#;
        let client = ContentClient::new(fixture_store().with(DocumentName::Services, services));
        let report = &check_all(&client, None)[1];

        assert!(!report.passed());
        assert_eq!(
            report.outcome.as_ref().unwrap(),
            &vec!["services: duplicate key `pilot`".to_owned()]
        );
    }
}
