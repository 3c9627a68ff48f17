//! Command façade
//!
//! Translates parsed commands into store calls and wraps every outcome —
//! success or failure — into the wire response shape. Engine errors never
//! cross this boundary as anything but an `Error` response; one session's
//! fault cannot take down the connection loop.

use std::sync::Arc;

use crate::protocol::{Command, Response};
use crate::session::SessionId;
use crate::store::Store;

/// Dispatches commands against the store on behalf of a session
#[derive(Debug, Clone)]
pub struct Api {
    store: Arc<Store>,
}

impl Api {
    /// Create a façade over the given store
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Execute one command for the given session and produce its response
    pub fn dispatch(&self, session: SessionId, command: Command) -> Response {
        match command {
            Command::Put { key, value } => {
                self.store.put(session, key, value);
                Response::ok()
            }
            Command::Get { key } => match self.store.get(session, &key) {
                Some(value) => Response::ok_result(value),
                None => Response::ok_result(format!("{key} was not found.")),
            },
            Command::Del { key } => {
                let deleted = self.store.delete(session, &key);
                // Capitalized booleans are part of the wire contract.
                Response::ok_result(if deleted { "True" } else { "False" })
            }
            Command::Start => {
                self.store.start(session);
                Response::ok()
            }
            Command::Commit => match self.store.commit(session) {
                Ok(()) => Response::ok(),
                Err(e) => Response::error(e.to_string()),
            },
            Command::Rollback => match self.store.rollback(session) {
                Ok(()) => Response::ok(),
                Err(e) => Response::error(e.to_string()),
            },
        }
    }

    /// The store this façade dispatches to
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }
}
