//! The request handler
//!
//! Every request gets the same answer: one stdout line naming the peer,
//! then a fixed `200 text/plain` body. Method, path, headers and body of
//! the request are never inspected.

use std::convert::Infallible;
use std::net::SocketAddr;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Request, Response};

use crate::host;

/// Handles one request from `peer`: logs the access line, returns the
/// hostname line.
///
/// Nothing is read from `req`; any method on any path receives the same
/// response. The `Infallible` error type records that there is no failure
/// path here: exactly one response per request, on every path.
pub async fn handle(
    peer: SocketAddr,
    _req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    println!("{}", access_line(peer));
    Ok(response())
}

/// Builds the fixed response: status 200, `Content-Type: text/plain`,
/// body `   Hostname (<accessor>)\n`.
///
/// The body names the hostname *accessor*, not the host name it would
/// return; [`host::hostname`] is never invoked on this path. The exact
/// body bytes are part of the wire contract (see DESIGN.md).
pub fn response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(hostname_line())))
        .unwrap()
}

/// One stdout line per request, naming the peer that sent it.
fn access_line(peer: SocketAddr) -> String {
    format!("   Received request from ({peer})")
}

/// The response body: the accessor's own string form, constant for the
/// lifetime of the process.
fn hostname_line() -> String {
    format!(
        "   Hostname ({})\n",
        std::any::type_name_of_val(&host::hostname)
    )
}
