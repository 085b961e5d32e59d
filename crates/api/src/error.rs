//! Server startup and runtime errors.

use thiserror::Error;

/// Errors that stop the server process.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configured address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The Prometheus recorder could not be installed.
    #[error("failed to install Prometheus recorder: {0}")]
    MetricsRecorder(#[from] metrics_exporter_prometheus::BuildError),

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_error_names_address() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:5000".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(
            err.to_string(),
            "failed to bind 0.0.0.0:5000: address in use"
        );
    }
}
