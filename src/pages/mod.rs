//! Page loaders.
//!
//! Each route requests its document(s) once per mount through the fetch
//! layer and resolves into a [`Resource<PageView>`]. Pages that need two
//! documents fetch them concurrently and resolve at the join.

mod render;
mod route;

pub use render::render_page;
pub use route::Route;

use crate::content::{
    CaseStudy, CompanyProfile, ContentClient, ContentSource, Industry, OpenSource, Process,
    Resources, Service, Solution, Technology, Tool,
};
use crate::loader::{FailurePolicy, Resource, join};

/// Services shown on the landing page.
pub const HOME_SERVICES: usize = 4;

/// Data a page renders once ready.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Home {
        company: CompanyProfile,
        services: Vec<Service>,
    },
    Services(Vec<Service>),
    Industries(Vec<Industry>),
    Solutions(Vec<Solution>),
    HowWeWork(Process),
    Technology(Technology),
    OpenSource(OpenSource),
    Resources(Resources),
    Labs(Vec<Tool>),
    CaseStudies(Vec<CaseStudy>),
    CaseStudy(CaseStudy),
    About(CompanyProfile),
    /// The contact page needs no documents.
    Contact,
}

/// Load the data for `route`.
pub fn load_page<S: ContentSource>(
    client: &ContentClient<S>,
    route: &Route,
    policy: FailurePolicy,
) -> Resource<PageView> {
    let page = route.name();
    match route {
        Route::Home => policy
            .resolve_pair(page, join(|| client.company(), || client.services()))
            .map(|(company, services)| PageView::Home { company, services }),
        Route::Services => policy.resolve(page, client.services()).map(PageView::Services),
        Route::Industries => policy
            .resolve(page, client.industries())
            .map(PageView::Industries),
        Route::Solutions => policy
            .resolve(page, client.solutions())
            .map(PageView::Solutions),
        Route::HowWeWork => policy.resolve(page, client.process()).map(PageView::HowWeWork),
        Route::Technology => policy
            .resolve(page, client.technology())
            .map(PageView::Technology),
        Route::OpenSource => policy
            .resolve(page, client.open_source())
            .map(PageView::OpenSource),
        Route::Resources => policy
            .resolve(page, client.resources())
            .map(PageView::Resources),
        Route::Labs => policy.resolve(page, client.tools()).map(PageView::Labs),
        Route::CaseStudies => policy
            .resolve(page, client.case_studies())
            .map(PageView::CaseStudies),
        // A single record has no empty form to degrade to.
        Route::CaseStudy(id) => Resource::from(client.fetch_case_study(id)).map(PageView::CaseStudy),
        Route::About => policy.resolve(page, client.company()).map(PageView::About),
        Route::Contact => Resource::Ready(PageView::Contact),
    }
}
