// Server module entry point
// Listener binding, connection serving, accept loop and lifecycle

pub mod connection;
pub mod lifecycle;
pub mod listener;

// `loop` is a keyword, so the module is exposed as server_loop
#[path = "loop.rs"]
pub mod server_loop;

pub use lifecycle::{launch, ServerHandle, WebUiServer};
pub use listener::bind_listener;
