//! pki-server command implementations.

mod cert;
pub mod connector;
mod host;
