//! TCP Server
//!
//! Accepts connections and dispatches each to its own worker thread.

use std::io::Write;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use crate::api::Api;
use crate::config::Config;
use crate::error::Result;
use crate::protocol::Response;
use crate::store::Store;
use super::connection::Connection;

/// TCP server for NestKV
pub struct Server {
    /// Server configuration
    config: Config,

    /// Bound listener socket
    listener: TcpListener,

    /// Command façade shared by all connections
    api: Api,

    /// Number of currently active connections
    active: Arc<AtomicUsize>,
}

impl Server {
    /// Bind the listener for the configured address.
    ///
    /// Binding failure is the one process-fatal error; everything after
    /// this point is per-connection and survivable.
    pub fn bind(config: Config, store: Arc<Store>) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr)?;
        tracing::info!("server listening on {}", listener.local_addr()?);

        Ok(Self {
            config,
            listener,
            api: Api::new(store),
            active: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// The address the listener actually bound (useful with port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Run the accept loop (blocking).
    ///
    /// Per-connection errors are logged and never stop the loop.
    pub fn run(&self) -> Result<()> {
        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => self.accept(stream),
                Err(e) => {
                    tracing::warn!("error accepting connection: {}", e);
                }
            }
        }
        Ok(())
    }

    /// Hand an accepted stream to a worker thread
    fn accept(&self, stream: TcpStream) {
        if self.active.load(Ordering::Acquire) >= self.config.max_connections {
            tracing::warn!("connection limit reached, refusing new connection");
            Self::refuse(stream);
            return;
        }

        self.active.fetch_add(1, Ordering::AcqRel);

        let api = self.api.clone();
        let active = Arc::clone(&self.active);
        let read_timeout = self.config.read_timeout_ms;
        let write_timeout = self.config.write_timeout_ms;

        thread::spawn(move || {
            let result = Connection::new(stream, api).and_then(|mut conn| {
                conn.set_timeouts(read_timeout, write_timeout)?;
                conn.handle()
            });

            if let Err(e) = result {
                tracing::warn!("connection handler failed: {}", e);
            }

            active.fetch_sub(1, Ordering::AcqRel);
        });
    }

    /// Tell a surplus client it is being turned away, then drop the stream
    fn refuse(mut stream: TcpStream) {
        let response = Response::error("server is at its connection limit");
        let _ = writeln!(stream, "{}", response.to_json());
    }
}
