//! Error types for server configuration operations.

use std::io;
use std::path::PathBuf;

/// Result type for server configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, editing or saving a server configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The instance failed its validity check.
    #[error("Invalid instance: {name}")]
    InvalidInstance {
        /// The instance name that was requested.
        name: String,
    },

    /// Reading the configuration file failed.
    #[error("Unable to read {path}: {source}")]
    Read {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The configuration file is not well-formed XML.
    #[error("Unable to parse {path}: {source}")]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying parser error.
        source: xmltree::ParseError,
    },

    /// Writing the configuration file failed.
    #[error("Unable to write {path}: {message}")]
    Write {
        /// The file being written.
        path: PathBuf,
        /// Human-readable error message.
        message: String,
    },

    /// The document lacks an element the operation requires.
    #[error("{path}: missing <{name}> element")]
    MissingElement {
        /// The file the document was loaded from.
        path: PathBuf,
        /// Tag of the missing element.
        name: String,
    },

    /// A connector with this name already exists.
    #[error("Connector already exists: {name}")]
    ConnectorExists {
        /// The connector ID.
        name: String,
    },

    /// No connector with this name exists.
    #[error("Connector not found: {name}")]
    ConnectorNotFound {
        /// The connector ID.
        name: String,
    },

    /// No SSL host configuration with this hostname exists in the connector.
    #[error("SSL host not found: {hostname}")]
    SslHostNotFound {
        /// The hostname that was looked up.
        hostname: String,
    },

    /// Unrecognized connector type token.
    #[error("Invalid connector type: {0}")]
    InvalidConnectorType(String),
}
