//! HTTP protocol layer module
//!
//! Response builders and MIME constants, decoupled from routing.

pub mod mime;
pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_405_response, build_500_response, build_asset_response,
    build_json_response,
};
