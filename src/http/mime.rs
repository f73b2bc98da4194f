//! MIME types used by the declared routes
//!
//! Content types are attached to routes explicitly, never sniffed from
//! content or file extension.

pub const TEXT_HTML: &str = "text/html";
pub const TEXT_CSS: &str = "text/css";
pub const TEXT_PLAIN: &str = "text/plain";
pub const APPLICATION_JAVASCRIPT: &str = "application/javascript";
pub const APPLICATION_JSON: &str = "application/json";
pub const IMAGE_PNG: &str = "image/png";
pub const FONT_WOFF2: &str = "font/woff2";
pub const FONT_TTF: &str = "font/ttf";
