//! testapp-core: guts of a deliberately tiny HTTP test server
//!
//! One listener, one handler, one response. The server answers every
//! request with the same `200 text/plain` hostname line and writes one
//! stdout line per request naming the peer. Both lines are wire contract
//! for the harnesses that poke this thing, so they are kept byte-exact.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod handler;
pub mod host;
pub mod server;

// Re-exports
pub use error::{Error, Result};
pub use server::Server;
