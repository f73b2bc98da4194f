//! Routing module
//!
//! Holds the route table consulted once per request.

pub mod table;

pub use table::{RouteKind, RouteTable, RouteTableBuilder, DEFAULT_ROUTES, PLAYER_PATH};
