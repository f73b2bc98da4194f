// Listener module
// Binds the loopback socket on the caller's thread so bind errors surface before serving starts

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;

use crate::error::ServerError;

const BACKLOG: i32 = 128;

/// Create a non-blocking std listener bound to `addr`
///
/// `SO_REUSEADDR` lets the host rebind the port right after a previous run
/// left it in `TIME_WAIT`. It is not set on Windows, where it would also let
/// the bind succeed on a port another process is listening on. The result is
/// handed to tokio inside the server runtime.
pub fn bind_listener(addr: SocketAddr) -> Result<std::net::TcpListener, ServerError> {
    open_socket(addr).map_err(|source| ServerError::Bind { addr, source })
}

fn open_socket(addr: SocketAddr) -> std::io::Result<std::net::TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    #[cfg(not(windows))]
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;

    Ok(socket.into())
}
