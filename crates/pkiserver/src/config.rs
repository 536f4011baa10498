//! Server configuration document and connector repository.
//!
//! A [`ServerConfig`] owns the parsed `server.xml` of one instance. Connector
//! elements are children of the first `Service` element under the `Server`
//! root, or of the root itself when it has no `Service`, and are addressed by
//! their `name` attribute.
//!
//! None of the repository operations persist anything; callers make their
//! changes and then call [`ServerConfig::save`] once.
//!
//! # Example
//!
//! ```ignore
//! use pkiserver::attr::set_attr;
//! use pkiserver::config::ServerConfig;
//!
//! let mut config = ServerConfig::load("/var/lib/pki/pki-tomcat/conf/server.xml")?;
//! let connector = config.create_connector("Secure")?;
//! set_attr(connector, "port", "8443");
//! config.save()?;
//! ```

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use xmltree::{Element, EmitterConfig, XMLNode};

use crate::attr::get_attr;
use crate::error::{Error, Result};

/// Tag of the element that holds the connectors.
pub const SERVICE: &str = "Service";

/// Tag of connector elements.
pub const CONNECTOR: &str = "Connector";

/// Attribute carrying the connector ID.
pub const CONNECTOR_NAME: &str = "name";

/// A loaded server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    path: PathBuf,
    root: Element,
}

impl ServerConfig {
    /// Load a configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading {}", path.display());

        let file = fs::File::open(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(file, path)
    }

    /// Parse a configuration from a reader.
    ///
    /// `path` is where [`save`](Self::save) will write the document.
    pub fn parse<R: Read>(reader: R, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let root = Element::parse(reader).map_err(|source| Error::Parse {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, root })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document root.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Write the document back to its file.
    pub fn save(&self) -> Result<()> {
        info!("Storing {}", self.path.display());

        let mut buf = Vec::new();
        let emitter = EmitterConfig::new()
            .perform_indent(true)
            .indent_string("    ");
        self.root
            .write_with_config(&mut buf, emitter)
            .map_err(|e| Error::Write {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        buf.push(b'\n');

        fs::write(&self.path, buf).map_err(|e| Error::Write {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Element holding the connectors: the first `Service`, or the root
    /// itself when there is none.
    fn container(&self) -> &Element {
        self.root.get_child(SERVICE).unwrap_or(&self.root)
    }

    fn container_mut(&mut self) -> Result<&mut Element> {
        let Some(index) = self.root.children.iter().position(is_service) else {
            return Ok(&mut self.root);
        };

        self.root.children[index]
            .as_mut_element()
            .ok_or_else(|| Error::MissingElement {
                path: self.path.clone(),
                name: SERVICE.to_string(),
            })
    }

    /// All addressable connectors, keyed by name, in document order.
    pub fn connectors(&self) -> Vec<(&str, &Element)> {
        self.container()
            .children
            .iter()
            .filter_map(XMLNode::as_element)
            .filter(|e| e.name == CONNECTOR)
            .filter_map(|e| get_attr(e, CONNECTOR_NAME).map(|name| (name, e)))
            .collect()
    }

    /// Check whether a connector exists.
    pub fn has_connector(&self, name: &str) -> bool {
        self.connectors().iter().any(|(n, _)| *n == name)
    }

    /// Get a connector by name.
    pub fn connector(&self, name: &str) -> Result<&Element> {
        self.connectors()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, e)| e)
            .ok_or_else(|| not_found(name))
    }

    /// Get a connector by name for modification.
    pub fn connector_mut(&mut self, name: &str) -> Result<&mut Element> {
        self.container_mut()?
            .children
            .iter_mut()
            .filter_map(XMLNode::as_mut_element)
            .find(|e| is_connector(e, name))
            .ok_or_else(|| not_found(name))
    }

    /// Create a connector carrying only its name.
    ///
    /// The new element is placed right after the last existing connector, or
    /// at the start of the container when there is none.
    pub fn create_connector(&mut self, name: &str) -> Result<&mut Element> {
        if self.has_connector(name) {
            return Err(Error::ConnectorExists {
                name: name.to_string(),
            });
        }

        let container = self.container_mut()?;

        let index = container
            .children
            .iter()
            .rposition(|n| n.as_element().is_some_and(|e| e.name == CONNECTOR))
            .map_or(0, |i| i + 1);

        debug!("Creating connector {} at position {}", name, index);

        let mut connector = Element::new(CONNECTOR);
        connector
            .attributes
            .insert(CONNECTOR_NAME.to_string(), name.to_string());
        container.children.insert(index, XMLNode::Element(connector));

        container.children[index]
            .as_mut_element()
            .ok_or_else(|| not_found(name))
    }

    /// Remove a connector by name.
    pub fn remove_connector(&mut self, name: &str) -> Result<()> {
        let container = self.container_mut()?;

        let index = container
            .children
            .iter()
            .position(|n| n.as_element().is_some_and(|e| is_connector(e, name)))
            .ok_or_else(|| not_found(name))?;

        debug!("Removing connector {}", name);
        container.children.remove(index);

        Ok(())
    }
}

fn is_service(node: &XMLNode) -> bool {
    node.as_element().is_some_and(|e| e.name == SERVICE)
}

fn is_connector(element: &Element, name: &str) -> bool {
    element.name == CONNECTOR && get_attr(element, CONNECTOR_NAME) == Some(name)
}

fn not_found(name: &str) -> Error {
    Error::ConnectorNotFound {
        name: name.to_string(),
    }
}
