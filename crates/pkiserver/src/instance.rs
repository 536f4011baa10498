//! PKI server instances on the local host.
//!
//! An instance lives under `<instance root>/<name>` and keeps its Tomcat
//! descriptor at `conf/server.xml`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ServerConfig;
use crate::error::{Error, Result};

/// Directory holding all instances.
pub const DEFAULT_INSTANCE_ROOT: &str = "/var/lib/pki";

/// Instance used when none is named.
pub const DEFAULT_INSTANCE_NAME: &str = "pki-tomcat";

/// A named server instance.
#[derive(Debug, Clone)]
pub struct Instance {
    name: String,
    base_dir: PathBuf,
}

impl Instance {
    /// Refer to an instance under the default instance root.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_root(DEFAULT_INSTANCE_ROOT, name)
    }

    /// Refer to an instance under a custom instance root.
    pub fn with_root(root: impl AsRef<Path>, name: impl Into<String>) -> Self {
        let name = name.into();
        let base_dir = root.as_ref().join(&name);
        Self { name, base_dir }
    }

    /// Instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instance base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Configuration directory.
    pub fn conf_dir(&self) -> PathBuf {
        self.base_dir.join("conf")
    }

    /// Path of the Tomcat descriptor.
    pub fn server_xml(&self) -> PathBuf {
        self.conf_dir().join("server.xml")
    }

    /// Check whether the instance exists.
    pub fn is_valid(&self) -> bool {
        self.base_dir.is_dir()
    }

    /// Load the instance's server configuration.
    pub fn load_server_config(&self) -> Result<ServerConfig> {
        if !self.is_valid() {
            return Err(Error::InvalidInstance {
                name: self.name.clone(),
            });
        }

        debug!("Loading instance {} from {}", self.name, self.base_dir.display());
        ServerConfig::load(self.server_xml())
    }
}
