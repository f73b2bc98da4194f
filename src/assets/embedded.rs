//! Resources compiled into the binary

use super::ResourceSet;
use crate::error::AssetError;
use hyper::body::Bytes;
use std::collections::HashMap;

pub const INDEX_HTML: &str = "web/index.html";
pub const SCRIPT_JS: &str = "web/script.js";
pub const STYLE_CSS: &str = "web/style.css";
pub const ICON_PNG: &str = "web/icon.png";

/// Files shipped with the crate, keyed by logical path
const BUNDLED: &[(&str, &[u8])] = &[
    (INDEX_HTML, include_bytes!("../../web/index.html")),
    (SCRIPT_JS, include_bytes!("../../web/script.js")),
    (STYLE_CSS, include_bytes!("../../web/style.css")),
    (ICON_PNG, include_bytes!("../../web/icon.png")),
];

/// In-memory resource set backed by `'static` byte slices
#[derive(Debug, Clone)]
pub struct EmbeddedAssets {
    entries: HashMap<&'static str, &'static [u8]>,
}

impl EmbeddedAssets {
    /// The web UI bundled with this crate
    pub fn bundled() -> Self {
        Self::from_entries(BUNDLED.iter().copied())
    }

    /// Build a set from caller-provided static data
    pub fn from_entries(entries: impl IntoIterator<Item = (&'static str, &'static [u8])>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EmbeddedAssets {
    fn default() -> Self {
        Self::bundled()
    }
}

impl ResourceSet for EmbeddedAssets {
    fn load(&self, path: &str) -> Result<Bytes, AssetError> {
        self.entries
            .get(path)
            .map(|data| Bytes::from_static(data))
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_contains_web_ui() {
        let assets = EmbeddedAssets::bundled();
        for path in [INDEX_HTML, SCRIPT_JS, STYLE_CSS, ICON_PNG] {
            assert!(assets.contains(path), "missing bundled resource {path}");
        }
        assert_eq!(assets.len(), 4);
    }

    #[test]
    fn test_load_is_byte_exact() {
        let assets = EmbeddedAssets::bundled();
        let icon = assets.load(ICON_PNG).unwrap();
        assert_eq!(&icon[..], include_bytes!("../../web/icon.png"));
        assert_eq!(&icon[..8], b"\x89PNG\r\n\x1a\n");

        let html = assets.load(INDEX_HTML).unwrap();
        assert_eq!(&html[..], include_bytes!("../../web/index.html"));
    }

    #[test]
    fn test_non_ascii_bytes_untouched() {
        static TEXT: &[u8] = "h\u{e9}llo \u{1f600}".as_bytes();
        let assets = EmbeddedAssets::from_entries([("web/x.txt", TEXT)]);
        assert_eq!(&assets.load("web/x.txt").unwrap()[..], TEXT);
    }

    #[test]
    fn test_missing_resource() {
        let assets = EmbeddedAssets::bundled();
        let err = assets.load("web/missing.css").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "resource not found: web/missing.css");
    }
}
