//! Front-end route table and path resolution.
//!
//! The table is static and immutable. Resolution rules follow the routing
//! library the views are mounted with:
//! - query string and fragment are ignored
//! - one trailing slash is ignored; other empty segments never match
//! - static segments compare case-insensitively
//! - `:name` segments capture one non-empty, percent-decoded segment
//! - there is no catch-all; an unknown path resolves to `None`

use std::collections::BTreeMap;

/// Presentation component a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    StockDetail,
    Admin,
}

/// One path → view binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Pattern, e.g. `/stock/:symbol`.
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    /// Forward path parameters to the view as inputs.
    pub props: bool,
}

/// The application's routes.
pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        name: "Home",
        view: View::Home,
        props: false,
    },
    RouteEntry {
        path: "/stock/:symbol",
        name: "StockDetail",
        view: View::StockDetail,
        props: true,
    },
    RouteEntry {
        path: "/admin",
        name: "Admin",
        view: View::Admin,
        props: false,
    },
];

pub type RouteParams = BTreeMap<String, String>;

/// A resolved navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static RouteEntry,
    pub params: RouteParams,
}

impl RouteMatch {
    pub fn view(&self) -> View {
        self.route.view
    }

    pub fn name(&self) -> &'static str {
        self.route.name
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Inputs handed to the view: the path params when the route forwards them.
    pub fn props(&self) -> RouteParams {
        if self.route.props {
            self.params.clone()
        } else {
            RouteParams::new()
        }
    }
}

/// Resolves paths against a static route table.
#[derive(Debug, Clone, Copy)]
pub struct Router {
    routes: &'static [RouteEntry],
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Router over [`ROUTES`].
    pub fn new() -> Self {
        Self::with_routes(ROUTES)
    }

    pub fn with_routes(routes: &'static [RouteEntry]) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &'static [RouteEntry] {
        self.routes
    }

    pub fn by_name(&self, name: &str) -> Option<&'static RouteEntry> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// First route whose pattern matches `location`.
    pub fn resolve(&self, location: &str) -> Option<RouteMatch> {
        let segments = split_location(location)?;
        self.routes.iter().find_map(|route| {
            match_pattern(route.path, &segments).map(|params| RouteMatch { route, params })
        })
    }

    /// Build the path of the route named `name`, encoding each parameter value.
    ///
    /// Returns `None` for an unknown route or a missing/empty parameter.
    pub fn href(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        let route = self.by_name(name)?;
        let mut out = String::new();
        for segment in pattern_segments(route.path) {
            out.push('/');
            match segment.strip_prefix(':') {
                Some(key) => {
                    let value = params
                        .iter()
                        .find(|(k, _)| *k == key)
                        .map(|(_, v)| *v)
                        .filter(|v| !v.is_empty())?;
                    out.push_str(&urlencoding::encode(value));
                }
                None => out.push_str(segment),
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        Some(out)
    }
}

fn pattern_segments(pattern: &str) -> impl Iterator<Item = &str> {
    pattern.split('/').filter(|s| !s.is_empty())
}

/// Path segments of `location`, without query, fragment and trailing slash.
fn split_location(location: &str) -> Option<Vec<&str>> {
    let path = location.split('#').next().unwrap_or("");
    let path = path.split('?').next().unwrap_or("");
    let path = path.strip_prefix('/')?;
    if path.is_empty() {
        return Some(Vec::new());
    }
    let path = path.strip_suffix('/').unwrap_or(path);
    let segments: Vec<&str> = path.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    Some(segments)
}

fn match_pattern(pattern: &str, segments: &[&str]) -> Option<RouteParams> {
    let expected: Vec<&str> = pattern_segments(pattern).collect();
    if expected.len() != segments.len() {
        return None;
    }

    let mut params = RouteParams::new();
    for (want, got) in expected.iter().zip(segments) {
        match want.strip_prefix(':') {
            Some(key) => {
                if got.is_empty() {
                    return None;
                }
                let value = urlencoding::decode(got).ok()?;
                params.insert(key.to_string(), value.into_owned());
            }
            None => {
                if !want.eq_ignore_ascii_case(got) {
                    return None;
                }
            }
        }
    }
    Some(params)
}
