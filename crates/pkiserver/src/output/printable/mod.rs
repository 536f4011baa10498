//! Printable implementations for configuration elements.

mod connector;
mod sslhost;

pub use connector::ConnectorView;
pub use sslhost::{SslCertificateView, SslHostView};
