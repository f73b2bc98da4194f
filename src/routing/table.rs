//! Fixed route table
//!
//! Routes are data: each request path maps to exactly one [`RouteKind`].
//! Matching is exact on the path component; anything absent from the table
//! is handled by the not-found response.

use crate::assets::embedded::{ICON_PNG, INDEX_HTML, SCRIPT_JS, STYLE_CSS};
use crate::error::RouteTableError;
use crate::http::mime;
use std::borrow::Cow;
use std::collections::HashMap;

/// What a matched route serves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind {
    /// A bundled resource served verbatim with the route's MIME type
    StaticAsset {
        resource: Cow<'static, str>,
        mime: Cow<'static, str>,
    },
    /// JSON view of the host's current player
    PlayerSnapshot,
}

impl RouteKind {
    pub const fn asset(resource: &'static str, mime: &'static str) -> Self {
        Self::StaticAsset {
            resource: Cow::Borrowed(resource),
            mime: Cow::Borrowed(mime),
        }
    }
}

pub const PLAYER_PATH: &str = "/player";

/// The web UI surface served out of the box
pub const DEFAULT_ROUTES: &[(&str, RouteKind)] = &[
    ("/", RouteKind::asset(INDEX_HTML, mime::TEXT_HTML)),
    ("/index.html", RouteKind::asset(INDEX_HTML, mime::TEXT_HTML)),
    ("/script.js", RouteKind::asset(SCRIPT_JS, mime::APPLICATION_JAVASCRIPT)),
    ("/style.css", RouteKind::asset(STYLE_CSS, mime::TEXT_CSS)),
    ("/resources/css/style.css", RouteKind::asset(STYLE_CSS, mime::TEXT_CSS)),
    ("/icon.png", RouteKind::asset(ICON_PNG, mime::IMAGE_PNG)),
    (PLAYER_PATH, RouteKind::PlayerSnapshot),
];

/// Immutable path → handler mapping
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, RouteKind>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Exact-match lookup on the request path
    pub fn lookup(&self, path: &str) -> Option<&RouteKind> {
        self.routes.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteKind)> {
        self.routes.iter().map(|(path, kind)| (path.as_str(), kind))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: DEFAULT_ROUTES
                .iter()
                .map(|(path, kind)| ((*path).to_string(), kind.clone()))
                .collect(),
        }
    }
}

/// Collects route declarations, rejecting duplicates
///
/// The first invalid declaration is remembered and reported by
/// [`RouteTableBuilder::build`].
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: HashMap<String, RouteKind>,
    error: Option<RouteTableError>,
}

impl RouteTableBuilder {
    /// Declare every route in [`DEFAULT_ROUTES`]
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        for (path, kind) in DEFAULT_ROUTES {
            self = self.route(*path, kind.clone());
        }
        self
    }

    /// Declare an auxiliary asset (image, font, stylesheet)
    #[must_use]
    pub fn static_asset(
        self,
        path: impl Into<String>,
        resource: impl Into<String>,
        mime: impl Into<String>,
    ) -> Self {
        self.route(
            path,
            RouteKind::StaticAsset {
                resource: Cow::Owned(resource.into()),
                mime: Cow::Owned(mime.into()),
            },
        )
    }

    /// Declare a path serving the player snapshot
    #[must_use]
    pub fn player_snapshot(self, path: impl Into<String>) -> Self {
        self.route(path, RouteKind::PlayerSnapshot)
    }

    #[must_use]
    pub fn route(mut self, path: impl Into<String>, kind: RouteKind) -> Self {
        if self.error.is_some() {
            return self;
        }
        let path = path.into();
        if !path.starts_with('/') {
            self.error = Some(RouteTableError::InvalidUri(path));
        } else if self.routes.contains_key(&path) {
            self.error = Some(RouteTableError::DuplicateUri(path));
        } else {
            self.routes.insert(path, kind);
        }
        self
    }

    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(RouteTable {
                routes: self.routes,
            }),
        }
    }
}
