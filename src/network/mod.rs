//! Network Module
//!
//! TCP server and client connection handling.
//!
//! ## Architecture
//! - Single acceptor thread
//! - One worker thread per connection
//! - Each connection owns one session; teardown on every exit path
//!   discards that session's open transactions

mod server;
mod connection;

pub use server::Server;
pub use connection::Connection;
