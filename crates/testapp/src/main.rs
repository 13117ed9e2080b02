//! Minimal HTTP test server
//!
//! Binds port 8080 on all interfaces and answers every request with the
//! fixed hostname line. No flags, no environment, no shutdown path: kill
//! the process to stop it.

use std::net::{Ipv4Addr, SocketAddr};

use testapp_core::{Result, Server};

/// The fixed listen port.
const PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<()> {
    println!("[] testapp server starting...");

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT));
    let server = Server::bind(addr).await?;
    server.serve().await
}
