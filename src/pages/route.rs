//! The site's path table.

use std::{fmt, str::FromStr};
use thiserror::Error;

/// One route of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Services,
    Industries,
    Solutions,
    HowWeWork,
    Technology,
    OpenSource,
    Resources,
    Labs,
    CaseStudies,
    /// `/case-studies/<id>`; the id is used verbatim for the lookup.
    CaseStudy(String),
    About,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no page at `{0}`")]
pub struct UnknownRoute(pub String);

impl Route {
    /// Short name used in log prefixes.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::Industries => "industries",
            Self::Solutions => "solutions",
            Self::HowWeWork => "how-we-work",
            Self::Technology => "technology",
            Self::OpenSource => "open-source",
            Self::Resources => "resources",
            Self::Labs => "labs",
            Self::CaseStudies => "case-studies",
            Self::CaseStudy(_) => "case-study",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::CaseStudy(id) => format!("/case-studies/{}", urlencoding::encode(id)),
            other => format!("/{}", other.name()),
        }
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    /// Parse a site path. Leading/trailing slashes and a query string are
    /// ignored; `home` is accepted as an alias of `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_matches('/');

        let route = match path {
            "" | "home" => Self::Home,
            "services" => Self::Services,
            "industries" => Self::Industries,
            "solutions" => Self::Solutions,
            "how-we-work" => Self::HowWeWork,
            "technology" => Self::Technology,
            "open-source" => Self::OpenSource,
            "resources" => Self::Resources,
            "labs" => Self::Labs,
            "case-studies" => Self::CaseStudies,
            "about" => Self::About,
            "contact" => Self::Contact,
            _ => match path.split_once('/') {
                Some(("case-studies", id)) if !id.is_empty() && !id.contains('/') => {
                    let id = urlencoding::decode(id)
                        .map(std::borrow::Cow::into_owned)
                        .unwrap_or_else(|_| id.to_owned());
                    Self::CaseStudy(id)
                }
                _ => return Err(UnknownRoute(s.to_owned())),
            },
        };
        Ok(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!("/".parse(), Ok(Route::Home));
        assert_eq!("".parse(), Ok(Route::Home));
        assert_eq!("/how-we-work/".parse(), Ok(Route::HowWeWork));
        assert_eq!("labs".parse(), Ok(Route::Labs));
        assert_eq!("/contact?ref=nav".parse(), Ok(Route::Contact));
    }

    #[test]
    fn test_parse_case_study_id_verbatim() {
        assert_eq!(
            "/case-studies/acme-logistics".parse(),
            Ok(Route::CaseStudy("acme-logistics".into()))
        );
        assert_eq!(
            "/case-studies/Route%20Opt".parse(),
            Ok(Route::CaseStudy("Route Opt".into()))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert!("/pricing".parse::<Route>().is_err());
        assert!("/case-studies/a/b".parse::<Route>().is_err());
        assert!("/services/cpu".parse::<Route>().is_err());
    }

    #[test]
    fn test_path_roundtrip() {
        for route in [
            Route::Home,
            Route::OpenSource,
            Route::CaseStudy("depot-routing".into()),
        ] {
            assert_eq!(route.path().parse(), Ok(route));
        }
    }
}
