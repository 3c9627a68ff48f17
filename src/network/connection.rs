//! Connection Handler
//!
//! Handles individual client connections: one line in, one JSON line out.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::api::Api;
use crate::error::{NestError, Result};
use crate::protocol::{Command, Response};
use crate::session::SessionId;

/// Handles a single client connection
pub struct Connection {
    /// TCP stream reader (buffered for line framing)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Command façade over the shared store
    api: Api,

    /// This connection's session identity
    session: SessionId,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    ///
    /// Sets up buffered I/O and allocates a fresh session identity.
    pub fn new(stream: TcpStream, api: Api) -> Result<Self> {
        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            api,
            session: SessionId::next(),
            peer_addr,
        })
    }

    /// Configure connection timeouts (0 disables)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        let read_stream = self.reader.get_ref();
        let write_stream = self.writer.get_ref();

        if read_ms > 0 {
            read_stream.set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            write_stream.set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }

        Ok(())
    }

    /// Handle the connection (blocking until closed)
    ///
    /// Whatever way the connection ends — clean `exit`, EOF, reset, or an
    /// I/O fault — the session is torn down afterwards, discarding any
    /// transaction the client left open.
    pub fn handle(&mut self) -> Result<()> {
        tracing::debug!("connection established from {} as {}", self.peer_addr, self.session);

        let result = self.serve();
        self.api.store().end_session(self.session);

        tracing::debug!("connection closed: {}", self.peer_addr);
        result
    }

    /// The request/response loop
    fn serve(&mut self) -> Result<()> {
        let mut line = String::new();

        loop {
            line.clear();
            let bytes_read = match self.reader.read_line(&mut line) {
                Ok(n) => n,
                Err(ref e) if e.kind() == std::io::ErrorKind::ConnectionReset => {
                    // Connection reset by peer
                    tracing::debug!("connection reset by client {}", self.peer_addr);
                    return Ok(());
                }
                Err(ref e) if e.kind() == std::io::ErrorKind::ConnectionAborted => {
                    // Connection aborted
                    tracing::debug!("connection aborted by client {}", self.peer_addr);
                    return Ok(());
                }
                Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    // Read timeout - close the idle connection
                    tracing::debug!("read timeout for client {}", self.peer_addr);
                    return Ok(());
                }
                Err(ref e) if e.kind() == std::io::ErrorKind::TimedOut => {
                    // Read timeout (Windows uses TimedOut instead of WouldBlock)
                    tracing::debug!("read timeout for client {}", self.peer_addr);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("error reading from {}: {}", self.peer_addr, e);
                    return Err(NestError::Io(e));
                }
            };

            if bytes_read == 0 {
                // Client disconnected gracefully
                tracing::debug!("client {} disconnected", self.peer_addr);
                return Ok(());
            }

            let request = line.trim();
            tracing::trace!("received from {}: {}", self.peer_addr, request);

            // Session-closing command, handled before tokenizing
            if request.eq_ignore_ascii_case("exit") {
                let _ = self.send_response(&Response::ok_mesg("goodbye"));
                return Ok(());
            }

            let response = match Command::parse(request) {
                Ok(command) => self.api.dispatch(self.session, command),
                Err(e) => Response::error(e.to_string()),
            };

            if let Err(e) = self.send_response(&response) {
                // If the client disconnected before we could send the response
                // (connection abort/reset/broken pipe), log and exit gracefully
                // rather than treating it as a server error.
                if let NestError::Io(ref io_err) = e {
                    match io_err.kind() {
                        std::io::ErrorKind::ConnectionAborted
                        | std::io::ErrorKind::ConnectionReset
                        | std::io::ErrorKind::BrokenPipe => {
                            tracing::debug!(
                                "client {} disconnected before response could be sent: {}",
                                self.peer_addr, e
                            );
                            return Ok(());
                        }
                        _ => {}
                    }
                }
                tracing::warn!("error writing to {}: {}", self.peer_addr, e);
                return Err(e);
            }
        }
    }

    /// Send a response line to the client
    fn send_response(&mut self, response: &Response) -> Result<()> {
        writeln!(self.writer, "{}", response.to_json())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    /// Get this connection's session identity
    pub fn session(&self) -> SessionId {
        self.session
    }
}
