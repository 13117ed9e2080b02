//! The HTTP server
//!
//! Owns the single TCP listener and runs the accept loop: one spawned
//! task per connection, HTTP/1.1 via hyper, every request dispatched to
//! [`handler::handle`]. There is no shutdown path; the listener lives as
//! long as the process does.

use std::net::SocketAddr;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::error::{Error, Result};
use crate::handler;

/// The listening server: one bound TCP listener for the process lifetime.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds a listener on `addr`.
    ///
    /// Fails with [`Error::Bind`] if the port cannot be acquired (already
    /// in use, insufficient privilege). Never retried; there is no
    /// fallback port.
    pub async fn bind(addr: SocketAddr) -> Result<Server> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        Ok(Server { listener })
    }

    /// The address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until the process dies.
    ///
    /// Each connection is served on its own task, so a broken connection
    /// never takes the loop down. A failed `accept` does: listener errors
    /// are fatal, not retried.
    pub async fn serve(self) -> Result<()> {
        loop {
            let (stream, peer) = self.listener.accept().await?;

            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                let service = service_fn(move |req| handler::handle(peer, req));

                if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                    // Routine disconnects are not worth a line.
                    if !e.to_string().contains("connection closed") {
                        eprintln!("connection error from ({peer}): {e}");
                    }
                }
            });
        }
    }
}
