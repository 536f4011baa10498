//! Printable implementation for connectors.

use std::io::Write;

use xmltree::Element;

use crate::output::{OutputOptions, Printable, attrs_to_json, write_param};

/// Connector attributes and their labels, in display order.
const FIELDS: &[(&str, &str)] = &[
    ("name", "Connector ID"),
    ("port", "Port"),
    ("protocol", "Protocol"),
    ("scheme", "Scheme"),
    ("secure", "Secure"),
    ("SSLEnabled", "SSL Enabled"),
    ("sslImplementationName", "SSL Implementation"),
    ("sslVersionRangeStream", "SSL Version Range Stream"),
    ("sslVersionRangeDatagram", "SSL Version Range Datagram"),
    ("sslRangeCiphers", "SSL Range Ciphers"),
    ("certdbDir", "NSS Database Directory"),
    ("passwordClass", "NSS Password Class"),
    ("passwordFile", "NSS Password File"),
    ("serverCertNickFile", "Server Cert Nickname File"),
    ("keystoreFile", "Keystore File"),
    ("keystorePassFile", "Keystore Password File"),
    ("trustManagerClassName", "Trust Manager"),
];

/// A `Connector` element for display.
#[derive(Debug, Clone, Copy)]
pub struct ConnectorView<'a>(pub &'a Element);

impl Printable for ConnectorView<'_> {
    fn print_text<W: Write>(&self, w: &mut W, _opts: &OutputOptions) -> std::io::Result<()> {
        for (name, label) in FIELDS {
            write_param(w, self.0, name, label)?;
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(attrs_to_json(self.0))
    }
}
