//! Static navigation table: path patterns mapped to named views.
//!
//! This is pure path→view resolution; history mechanics and view mounting
//! live elsewhere. There is no authentication guard.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteName {
    Home,
    Dashboard,
    WorkshopDetail,
    Login,
    /// Policy for paths matching no declared pattern: resolve to this view
    /// with empty params and the default layout.
    NotFound,
}

/// Presentation hint consumed by the external layout chooser. `Empty`
/// suppresses the standard chrome (used by the login page).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Default,
    Empty,
}

pub struct RouteDef {
    pub path: &'static str,
    pub name: RouteName,
    pub layout: Layout,
}

pub const ROUTES: [RouteDef; 4] = [
    RouteDef {
        path: "/",
        name: RouteName::Home,
        layout: Layout::Default,
    },
    RouteDef {
        path: "/dashboard",
        name: RouteName::Dashboard,
        layout: Layout::Default,
    },
    RouteDef {
        path: "/workshop/:id",
        name: RouteName::WorkshopDetail,
        layout: Layout::Default,
    },
    RouteDef {
        path: "/login",
        name: RouteName::Login,
        layout: Layout::Empty,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: RouteName,
    pub layout: Layout,
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    fn not_found() -> Self {
        Self {
            name: RouteName::NotFound,
            layout: Layout::Default,
            params: HashMap::new(),
        }
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Tries a single pattern against a path, collecting `:name` captures.
fn match_pattern(pattern: &str, path: &str) -> Option<(HashMap<String, String>, usize)> {
    let pattern_segs = segments(pattern);
    let path_segs = segments(path);
    if pattern_segs.len() != path_segs.len() {
        return None;
    }

    let mut params = HashMap::new();
    let mut literal_matches = 0;
    for (pat, seg) in pattern_segs.iter().zip(&path_segs) {
        if let Some(name) = pat.strip_prefix(':') {
            params.insert(name.to_string(), (*seg).to_string());
        } else if pat == seg {
            literal_matches += 1;
        } else {
            return None;
        }
    }
    Some((params, literal_matches))
}

/// Resolves a path to the most specific matching route. Literal segments rank
/// above captures, so `/login` can never be swallowed by a parameterized
/// pattern. Unmatched paths resolve to [`RouteName::NotFound`].
pub fn resolve(path: &str) -> RouteMatch {
    let mut best: Option<(RouteMatch, usize)> = None;
    for route in &ROUTES {
        if let Some((params, literal_matches)) = match_pattern(route.path, path) {
            let candidate = RouteMatch {
                name: route.name,
                layout: route.layout,
                params,
            };
            match &best {
                Some((_, score)) if *score >= literal_matches => {}
                _ => best = Some((candidate, literal_matches)),
            }
        }
    }
    best.map(|(m, _)| m).unwrap_or_else(RouteMatch::not_found)
}

/// Reverse lookup: builds the path for a route name, substituting `:name`
/// segments from `params`. Returns `None` for an unknown name or a missing
/// parameter.
pub fn path_for(name: RouteName, params: &HashMap<String, String>) -> Option<String> {
    let route = ROUTES.iter().find(|r| r.name == name)?;
    let mut out = String::new();
    for seg in segments(route.path) {
        out.push('/');
        if let Some(param) = seg.strip_prefix(':') {
            out.push_str(params.get(param)?);
        } else {
            out.push_str(seg);
        }
    }
    if out.is_empty() {
        out.push('/');
    }
    Some(out)
}
