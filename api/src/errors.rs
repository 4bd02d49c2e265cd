use std::io;
use thiserror::Error;

/// Failures that stop the server from starting or keep it from serving.
///
/// Request handling itself has no failure path.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to register metrics: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
