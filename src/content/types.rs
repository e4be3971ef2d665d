//! Typed records of the content documents.
//!
//! Field names follow the JSON documents (camelCase on the wire). Fields
//! the pages never read are ignored, so content authors can add
//! presentational data without breaking decoding.

use serde::{Deserialize, Serialize};

/// A record that carries a stable key for listing renders.
///
/// `id` where the document has one, otherwise `title`, `name` or `term`.
pub trait Keyed {
    fn key(&self) -> &str;
}

macro_rules! keyed_by {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(impl Keyed for $ty {
            fn key(&self) -> &str {
                &self.$field
            }
        })*
    };
}

// ============================================================================
// company.json
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default)]
    pub name: String,
    pub description: String,
    pub mission: String,
    pub philosophy: String,
    pub commitment: String,
    pub tagline: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub values: Vec<CoreValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreValue {
    pub title: String,
    pub description: String,
    pub icon: String,
}

// ============================================================================
// services.json / industries.json / solutions.json
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub short_description: String,
    #[serde(default)]
    pub description: Option<String>,
    pub icon: String,
    pub color: String,
    pub timeline: String,
    #[serde(default)]
    pub business_problem: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub outcomes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Industry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub decision_problems: Vec<String>,
    #[serde(default)]
    pub near_term_pilots: Vec<String>,
    #[serde(default)]
    pub data_required: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub approach: String,
}

// ============================================================================
// case-studies.json
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub industry: String,
    pub color: String,
    pub timeline: String,
    pub problem: String,
    #[serde(default)]
    pub what_was_tested: String,
    #[serde(default)]
    pub results: CaseStudyResults,
    #[serde(default)]
    pub business_insight: String,
}

/// Outcome of a case study, including what did not pan out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyResults {
    #[serde(default)]
    pub worked: Vec<String>,
    #[serde(default)]
    pub did_not_work: Vec<String>,
}

// ============================================================================
// technology.json
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    #[serde(default)]
    pub sdks: Vec<Sdk>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub classical: Vec<ClassicalTool>,
    #[serde(default)]
    pub why_hybrid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sdk {
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicalTool {
    pub name: String,
    pub description: String,
}

// ============================================================================
// opensource.json
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSource {
    #[serde(default)]
    pub contributions: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub why_open_source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: String,
}

// ============================================================================
// resources.json
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default)]
    pub explainers: Vec<Explainer>,
    #[serde(default)]
    pub reports: Vec<Report>,
    #[serde(default)]
    pub glossary: Vec<GlossaryTerm>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explainer {
    pub title: String,
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub read_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub pages: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
}

// ============================================================================
// process.json
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Process {
    #[serde(default)]
    pub process: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub duration: String,
    pub icon: String,
}

// ============================================================================
// tools.json / social.json
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub status: ToolStatus,
}

/// Availability badge of a labs tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolStatus {
    Available,
    ComingSoon,
    /// Any status the site has no badge for.
    #[default]
    #[serde(other)]
    Unlisted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

keyed_by! {
    Stat => label,
    CoreValue => title,
    Service => id,
    Industry => id,
    Solution => id,
    CaseStudy => id,
    Sdk => name,
    Platform => name,
    ClassicalTool => name,
    Project => name,
    Explainer => title,
    Report => title,
    GlossaryTerm => term,
    Tool => id,
    SocialLink => name,
}

impl Keyed for ProcessStep {
    fn key(&self) -> &str {
        &self.title
    }
}

/// Keys that occur more than once in a listing, in first-seen order.
pub fn duplicate_keys<T: Keyed>(items: &[T]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut dupes = Vec::new();
    for item in items {
        let key = item.key();
        if !seen.insert(key) && !dupes.iter().any(|d: &String| d == key) {
            dupes.push(key.to_owned());
        }
    }
    dupes
}
