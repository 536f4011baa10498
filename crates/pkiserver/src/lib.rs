//! Server configuration editing for PKI server instances.
//!
//! This crate loads an instance's Tomcat descriptor (`conf/server.xml`),
//! manages the HTTP connectors declared in it and reads the SSL host and
//! certificate blocks nested under each connector.
//!
//! # Features
//!
//! - `output` - JSON/text output formatting (enabled by default)
//!
//! # Example
//!
//! ```ignore
//! use pkiserver::connector::{ConnectorType, TlsParams, apply_connector_type};
//! use pkiserver::instance::Instance;
//!
//! fn main() -> pkiserver::Result<()> {
//!     let instance = Instance::new("pki-tomcat");
//!     let mut config = instance.load_server_config()?;
//!
//!     let params = TlsParams {
//!         keystore_file: Some("/var/lib/pki/pki-tomcat/conf/keystore.p12".into()),
//!         ..Default::default()
//!     };
//!     apply_connector_type(config.connector_mut("Secure")?, ConnectorType::Jsse, &params);
//!     config.save()?;
//!
//!     for (name, _) in config.connectors() {
//!         println!("{}", name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod attr;
pub mod config;
pub mod connector;
pub mod error;
pub mod instance;
pub mod sslhost;

#[cfg(feature = "output")]
pub mod output;

// Re-export common types at crate root for convenience
pub use config::ServerConfig;
pub use error::{Error, Result};
pub use instance::Instance;
