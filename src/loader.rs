//! Async-resource loading contract shared by every page.
//!
//! A page's data is a [`Resource`]: `Loading` until its fetch resolves,
//! then `Ready` or `Failed`. Pages never track ad hoc `loading`/`error`
//! flags of their own.
//!
//! ```text
//!            mount()
//!   ┌─────────┐ ─────► fetch ──┬── Ok ───► Ready(T)
//!   │ Loading │                │
//!   └─────────┘ ◄──────────────┴── Err ──► Failed(err)   (Surface)
//!        ▲                          └────► Ready(default) (Degrade, logged)
//!        └──────── unmount() / remount
//! ```

use crate::content::ContentError;
use crate::log;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

// ============================================================================
// Resource
// ============================================================================

/// State of one page's data.
#[derive(Debug, Default)]
pub enum Resource<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(ContentError),
}

impl<T> Resource<T> {
    #[allow(dead_code)]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[allow(dead_code)]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub const fn error(&self) -> Option<&ContentError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Self::Loading => Resource::Loading,
            Self::Ready(value) => Resource::Ready(f(value)),
            Self::Failed(err) => Resource::Failed(err),
        }
    }
}

impl<T> From<Result<T, ContentError>> for Resource<T> {
    fn from(result: Result<T, ContentError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }
}

// ============================================================================
// Failure policy
// ============================================================================

/// What a page does when its fetch fails.
///
/// Applied uniformly to every listing page. Lookups of a single record
/// (case study detail) always surface their error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Show the error state with a retry hint.
    #[default]
    Surface,
    /// Log the error and render the page with empty data.
    Degrade,
}

impl FailurePolicy {
    /// Turn one fetch result into a page resource.
    pub fn resolve<T: Default>(self, page: &str, result: Result<T, ContentError>) -> Resource<T> {
        match (self, result) {
            (_, Ok(value)) => Resource::Ready(value),
            (Self::Surface, Err(err)) => Resource::Failed(err),
            (Self::Degrade, Err(err)) => Resource::Ready(Self::degrade(page, err)),
        }
    }

    /// Resolve two fetches that were joined.
    ///
    /// Under `Surface` the first failure fails the page. Under `Degrade` the
    /// page is ready with whatever succeeded.
    pub fn resolve_pair<A: Default, B: Default>(
        self,
        page: &str,
        results: (Result<A, ContentError>, Result<B, ContentError>),
    ) -> Resource<(A, B)> {
        match (self, results) {
            (_, (Ok(a), Ok(b))) => Resource::Ready((a, b)),
            (Self::Surface, (Err(err), _) | (Ok(_), Err(err))) => Resource::Failed(err),
            (Self::Degrade, (a, b)) => Resource::Ready((
                a.unwrap_or_else(|err| Self::degrade(page, err)),
                b.unwrap_or_else(|err| Self::degrade(page, err)),
            )),
        }
    }

    fn degrade<T: Default>(page: &str, err: ContentError) -> T {
        log!("page"; "{page}: {err}, rendering without it");
        T::default()
    }
}

/// Run two fetches concurrently and wait for both.
pub fn join<A, B, FA, FB>(fa: FA, fb: FB) -> (Result<A, ContentError>, Result<B, ContentError>)
where
    A: Send,
    B: Send,
    FA: FnOnce() -> Result<A, ContentError> + Send,
    FB: FnOnce() -> Result<B, ContentError> + Send,
{
    rayon::join(fa, fb)
}

// ============================================================================
// Page state
// ============================================================================

/// Ticket for one mount; completing with a stale ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mount(u64);

/// The local state a page owns while mounted.
///
/// Every mount restarts from `Loading`. Results that arrive after the page
/// was unmounted or remounted are dropped instead of overwriting newer
/// state.
#[derive(Debug, Default)]
pub struct PageState<T> {
    generation: AtomicU64,
    resource: RwLock<Resource<T>>,
}

impl<T> PageState<T> {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            resource: RwLock::new(Resource::Loading),
        }
    }

    /// Mount the page: reset to `Loading`, run `load`, store its result.
    ///
    /// Returns `false` if the page was unmounted while loading.
    pub fn mount(&self, load: impl FnOnce() -> Resource<T>) -> bool {
        let mount = self.begin();
        self.complete(mount, load())
    }

    /// Start a mount and return its ticket.
    pub fn begin(&self) -> Mount {
        let mut slot = self.resource.write();
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        *slot = Resource::Loading;
        Mount(generation)
    }

    /// Store the result of `mount` if it is still the current mount.
    pub fn complete(&self, mount: Mount, resource: Resource<T>) -> bool {
        let mut slot = self.resource.write();
        if self.generation.load(Ordering::Acquire) != mount.0 {
            return false;
        }
        *slot = resource;
        true
    }

    /// Discard the state; any in-flight result is dropped on arrival.
    pub fn unmount(&self) {
        let mut slot = self.resource.write();
        self.generation.fetch_add(1, Ordering::AcqRel);
        *slot = Resource::Loading;
    }

    /// Borrow the current resource.
    pub fn with<R>(&self, f: impl FnOnce(&Resource<T>) -> R) -> R {
        f(&self.resource.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DocumentName;

    fn missing(document: DocumentName) -> ContentError {
        ContentError::Status {
            document,
            status: 404,
        }
    }

    #[test]
    fn test_resource_from_result() {
        let ready = Resource::from(Ok::<u32, ContentError>(3));
        assert_eq!(ready.ready(), Some(&3));

        let failed = Resource::<u32>::from(Err(missing(DocumentName::Tools)));
        assert!(failed.error().is_some());
        assert!(!failed.is_ready());
    }

    #[test]
    fn test_resource_map_keeps_state() {
        let loading: Resource<u32> = Resource::Loading;
        assert!(loading.map(|n| n * 2).is_loading());

        let ready = Resource::Ready(2).map(|n| n * 2);
        assert_eq!(ready.ready(), Some(&4));
    }

    #[test]
    fn test_surface_policy_fails_page() {
        let resource: Resource<Vec<u32>> =
            FailurePolicy::Surface.resolve("case-studies", Err(missing(DocumentName::CaseStudies)));
        assert_eq!(
            resource.error().and_then(ContentError::document),
            Some(DocumentName::CaseStudies)
        );
    }

    #[test]
    fn test_degrade_policy_renders_empty() {
        let resource: Resource<Vec<u32>> =
            FailurePolicy::Degrade.resolve("case-studies", Err(missing(DocumentName::CaseStudies)));
        assert_eq!(resource.ready(), Some(&Vec::new()));
    }

    #[test]
    fn test_pair_surface_observes_either_failure() {
        let results: (Result<u32, _>, Result<Vec<u32>, _>) =
            (Ok(1), Err(missing(DocumentName::Services)));
        let resource = FailurePolicy::Surface.resolve_pair("home", results);
        assert_eq!(
            resource.error().and_then(ContentError::document),
            Some(DocumentName::Services)
        );
    }

    #[test]
    fn test_pair_degrade_keeps_successful_half() {
        let results: (Result<u32, _>, Result<Vec<u32>, _>) =
            (Ok(7), Err(missing(DocumentName::Services)));
        let resource = FailurePolicy::Degrade.resolve_pair("home", results);
        assert_eq!(resource.ready(), Some(&(7, Vec::new())));
    }

    #[test]
    fn test_join_runs_both() {
        let (a, b) = join(|| Ok(1u8), || Err::<u8, _>(missing(DocumentName::Social)));
        assert_eq!(a.unwrap(), 1);
        assert!(b.is_err());
    }

    #[test]
    fn test_page_state_mount_transitions() {
        let state = PageState::new();
        assert!(state.with(Resource::is_loading));

        assert!(state.mount(|| Resource::Ready("company")));
        assert_eq!(state.with(|r| r.ready().copied()), Some("company"));

        // Remount restarts from Loading before the new result lands.
        let mount = state.begin();
        assert!(state.with(Resource::is_loading));
        assert!(state.complete(mount, Resource::Ready("again")));
    }

    #[test]
    fn test_page_state_drops_result_after_unmount() {
        let state = PageState::new();
        let mount = state.begin();
        state.unmount();

        assert!(!state.complete(mount, Resource::Ready(1)));
        assert!(state.with(Resource::is_loading));
    }

    #[test]
    fn test_page_state_drops_stale_mount() {
        let state = PageState::new();
        let first = state.begin();
        let second = state.begin();

        assert!(state.complete(second, Resource::Ready(2)));
        assert!(!state.complete(first, Resource::Ready(1)));
        assert_eq!(state.with(|r| r.ready().copied()), Some(2));
    }
}
