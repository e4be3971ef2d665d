//! Terminal rendering of page views.

use super::{HOME_SERVICES, PageView, Route};
use crate::content::{CaseStudy, CompanyProfile, ContentError, ToolStatus};
use crate::icons::{IconRegistry, IconRenderer, fallback};
use crate::loader::Resource;
use colored::Colorize;
use std::fmt::Write;

/// Render the current state of a page.
pub fn render_page(route: &Route, resource: &Resource<PageView>) -> String {
    let mut page = Page::new(IconRegistry::default());
    match resource {
        Resource::Loading => page.loading(),
        Resource::Failed(err) => page.error_state(route, err),
        Resource::Ready(view) => page.view(view),
    }
    page.buf
}

/// Output buffer plus the icon set used for tags.
struct Page<I> {
    icons: I,
    buf: String,
}

// `write!` into a String cannot fail.
macro_rules! out {
    ($page:expr) => {
        $page.buf.push('\n')
    };
    ($page:expr, $($arg:tt)*) => {{
        let _ = writeln!($page.buf, $($arg)*);
    }};
}

impl<I: IconRenderer> Page<I> {
    fn new(icons: I) -> Self {
        Self {
            icons,
            buf: String::new(),
        }
    }

    fn loading(&mut self) {
        out!(self, "{}", "⟳ loading…".dimmed());
    }

    fn error_state(&mut self, route: &Route, err: &ContentError) {
        let title = if err.is_not_found() {
            "Case study not found"
        } else {
            "Something went wrong"
        };
        out!(self, "{} {}", "✖".bright_red().bold(), title.bold());
        out!(self, "  {err}");
        out!(self, "  Please try again or contact support if the problem persists.");
        out!(self, "  Try again: qsite page {}", route.path());
    }

    fn title(&mut self, title: &str, subtitle: &str) {
        out!(self, "{}", title.bright_blue().bold());
        if !subtitle.is_empty() {
            out!(self, "{}", subtitle.dimmed());
        }
        out!(self);
    }

    fn section(&mut self, title: &str) {
        out!(self, "{}", title.bold().underline());
    }

    fn card(&mut self, tag: &str, fallback: &str, title: &str, body: &str) {
        let glyph = self.icons.render_or(tag, fallback);
        out!(self, "{glyph}  {}", title.bold());
        if !body.is_empty() {
            out!(self, "   {body}");
        }
    }

    fn bullets(&mut self, label: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        out!(self, "   {}", label.italic());
        for item in items {
            out!(self, "     - {item}");
        }
    }

    fn view(&mut self, view: &PageView) {
        match view {
            PageView::Home { company, services } => self.home(company, services),
            PageView::Services(services) => {
                self.title("Services", "Structured engagements with measurable outcomes.");
                for service in services {
                    self.card(&service.icon, fallback::SERVICE, &service.title, &service.short_description);
                    out!(self, "   Timeline: {}", service.timeline);
                    if !service.business_problem.is_empty() {
                        out!(self, "   Problem: {}", service.business_problem);
                    }
                    self.bullets("Deliverables", &service.deliverables);
                    if !service.outcomes.is_empty() {
                        out!(self, "   Outcomes: {}", service.outcomes);
                    }
                    out!(self);
                }
            }
            PageView::Industries(industries) => {
                self.title("Industries", "Where near-term quantum pilots are worth testing.");
                for industry in industries {
                    self.card(&industry.icon, fallback::INDUSTRY, &industry.name, &industry.description);
                    self.bullets("Decision problems", &industry.decision_problems);
                    self.bullets("Near-term pilots", &industry.near_term_pilots);
                    self.bullets("Data required", &industry.data_required);
                    out!(self);
                }
            }
            PageView::Solutions(solutions) => {
                self.title("Solutions", "Problem classes we benchmark.");
                for solution in solutions {
                    self.card(&solution.icon, fallback::SOLUTION, &solution.title, &solution.description);
                    self.bullets("Use cases", &solution.use_cases);
                    if !solution.approach.is_empty() {
                        out!(self, "   Approach: {}", solution.approach);
                    }
                    out!(self);
                }
            }
            PageView::HowWeWork(process) => {
                self.title("How We Work", "Baselines first, honest reporting last.");
                for step in &process.process {
                    let heading = format!("Step {}: {}", step.step, step.title);
                    self.card(&step.icon, fallback::STEP, &heading, &step.description);
                    if !step.duration.is_empty() {
                        out!(self, "   Duration: {}", step.duration);
                    }
                }
            }
            PageView::Technology(tech) => {
                self.title("Technology", "Open, portable, vendor-neutral.");
                self.section("Quantum SDKs");
                for sdk in &tech.sdks {
                    out!(self, "  {} <{}>", sdk.name.bold(), sdk.url);
                    out!(self, "   {}", sdk.description);
                }
                out!(self);
                self.section("Cloud Platforms");
                for platform in &tech.platforms {
                    out!(self, "  {}: {}", platform.name.bold(), platform.description);
                }
                out!(self);
                self.section("Classical Tools");
                for tool in &tech.classical {
                    out!(self, "  {}: {}", tool.name.bold(), tool.description);
                }
                if !tech.why_hybrid.is_empty() {
                    out!(self);
                    self.section("Why Hybrid");
                    out!(self, "  {}", tech.why_hybrid);
                }
            }
            PageView::OpenSource(data) => {
                self.title("Open Source", "");
                self.section("Our Contributions");
                for contribution in &data.contributions {
                    out!(self, "  - {contribution}");
                }
                out!(self);
                self.section("Supported Projects");
                for project in &data.projects {
                    out!(self, "  {} <{}>", project.name.bold(), project.url);
                    out!(self, "   {}", project.description);
                }
                if !data.why_open_source.is_empty() {
                    out!(self);
                    out!(self, "  {}", data.why_open_source);
                }
            }
            PageView::Resources(resources) => {
                self.title("Resources", "");
                self.section("Explainers");
                for item in &resources.explainers {
                    out!(self, "  [{}] {} ({} read)", item.kind, item.title.bold(), item.read_time);
                    out!(self, "   {}", item.description);
                }
                out!(self);
                self.section("Reports");
                for item in &resources.reports {
                    out!(self, "  [{}] {} ({} pages)", item.kind, item.title.bold(), item.pages);
                    out!(self, "   {}", item.description);
                }
                out!(self);
                self.section("Glossary");
                for item in &resources.glossary {
                    out!(self, "  {}: {}", item.term.bold(), item.definition);
                }
            }
            PageView::Labs(tools) => {
                self.title("Labs", "Small tools from our practice.");
                for tool in tools {
                    let badge = match tool.status {
                        ToolStatus::Available => " [available]".green().to_string(),
                        ToolStatus::ComingSoon => " [coming soon]".yellow().to_string(),
                        ToolStatus::Unlisted => String::new(),
                    };
                    let heading = format!("{}{badge}", tool.title);
                    self.card(&tool.icon, fallback::TOOL, &heading, &tool.description);
                }
            }
            PageView::CaseStudies(studies) => {
                self.title("Case Studies", "Real projects, real results, including what didn't work.");
                if studies.is_empty() {
                    out!(self, "{}", "No case studies yet.".dimmed());
                }
                for study in studies {
                    out!(self, "{} ({}, {})", study.title.bold(), study.industry, study.timeline);
                    out!(self, "   {}", study.problem);
                    out!(self, "   -> qsite page /case-studies/{}", study.id);
                }
            }
            PageView::CaseStudy(study) => self.case_study(study),
            PageView::About(company) => {
                self.title("About", &company.tagline);
                self.section("Mission");
                out!(self, "  {}", company.mission);
                self.section("Philosophy");
                out!(self, "  {}", company.philosophy);
                self.section("Commitment");
                out!(self, "  {}", company.commitment);
                out!(self);
                self.values(company);
            }
            PageView::Contact => {
                self.title(
                    "Contact",
                    "Tell us about your problem. We'll give you an honest assessment.",
                );
                out!(self, "  qsite contact --name <NAME> --email <EMAIL> --industry <INDUSTRY> \\");
                out!(self, "                --problem <TEXT> [--company <NAME>] [--data-ready]");
            }
        }
    }

    fn home(&mut self, company: &CompanyProfile, services: &[crate::content::Service]) {
        self.title("Evidence-Based, Vendor-Neutral", &company.description);
        for stat in &company.stats {
            out!(self, "  {:>6}  {}", stat.value.bold(), stat.label);
        }
        out!(self);
        self.section("Our Approach");
        self.values(company);
        out!(self);
        self.section("What We Do");
        for service in services.iter().take(HOME_SERVICES) {
            self.card(&service.icon, fallback::SERVICE, &service.title, &service.short_description);
            out!(self, "   Timeline: {}", service.timeline);
        }
    }

    fn values(&mut self, company: &CompanyProfile) {
        for value in &company.values {
            self.card(&value.icon, fallback::VALUE, &value.title, &value.description);
        }
    }

    fn case_study(&mut self, study: &CaseStudy) {
        self.title(&study.title, &format!("{} · {}", study.industry, study.timeline));
        self.section("The Problem");
        out!(self, "  {}", study.problem);
        if !study.what_was_tested.is_empty() {
            self.section("What We Tested");
            out!(self, "  {}", study.what_was_tested);
        }
        self.section("Results");
        for item in &study.results.worked {
            out!(self, "  {} {item}", "✔".green());
        }
        for item in &study.results.did_not_work {
            out!(self, "  {} {item}", "✘".red());
        }
        if !study.business_insight.is_empty() {
            self.section("Business Insight");
            out!(self, "  {}", study.business_insight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DocumentName, Tool};

    #[test]
    fn test_loading_state() {
        let text = render_page(&Route::Services, &Resource::Loading);
        assert!(text.contains("loading"));
    }

    #[test]
    fn test_error_state_has_retry_hint() {
        let err = ContentError::Status {
            document: DocumentName::Services,
            status: 500,
        };
        let text = render_page(&Route::Services, &Resource::Failed(err));
        assert!(text.contains("Something went wrong"));
        assert!(text.contains("qsite page /services"));
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        let tools = vec![Tool {
            id: "x".into(),
            title: "Mystery".into(),
            description: "Unknown icon".into(),
            icon: "Rocket".into(),
            status: ToolStatus::Unlisted,
        }];
        let text = render_page(&Route::Labs, &Resource::Ready(PageView::Labs(tools)));
        assert!(text.contains("🧪"));
    }

    #[test]
    fn test_empty_case_study_listing() {
        let text = render_page(
            &Route::CaseStudies,
            &Resource::Ready(PageView::CaseStudies(Vec::new())),
        );
        assert!(text.contains("No case studies yet."));
    }
}
