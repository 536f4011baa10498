//! Printable implementations for SSL host and certificate blocks.

use std::io::Write;

use xmltree::Element;

use crate::output::{OutputOptions, Printable, attrs_to_json, write_param};
use crate::sslhost::{ssl_certificate_type, ssl_host_name};

const HOST_FIELDS: &[(&str, &str)] = &[
    ("sslProtocol", "SSL Protocol"),
    ("certificateVerification", "Certificate Verification"),
    ("trustManagerClassName", "Trust Manager"),
];

const CERT_FIELDS: &[(&str, &str)] = &[
    ("certificateFile", "Certificate File"),
    ("certificateKeyFile", "Key File"),
    ("certificateKeyAlias", "Key Alias"),
    ("certificateKeystoreType", "Keystore Type"),
    ("certificateKeystoreProvider", "Keystore Provider"),
    ("certificateKeystoreFile", "Keystore File"),
];

/// An `SSLHostConfig` element for display.
#[derive(Debug, Clone, Copy)]
pub struct SslHostView<'a>(pub &'a Element);

impl Printable for SslHostView<'_> {
    fn print_text<W: Write>(&self, w: &mut W, _opts: &OutputOptions) -> std::io::Result<()> {
        writeln!(w, "  Hostname: {}", ssl_host_name(self.0))?;
        for (name, label) in HOST_FIELDS {
            write_param(w, self.0, name, label)?;
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        let mut obj = attrs_to_json(self.0);
        obj.insert("hostName".into(), serde_json::json!(ssl_host_name(self.0)));
        serde_json::Value::Object(obj)
    }
}

/// A `Certificate` element for display.
#[derive(Debug, Clone, Copy)]
pub struct SslCertificateView<'a>(pub &'a Element);

impl Printable for SslCertificateView<'_> {
    fn print_text<W: Write>(&self, w: &mut W, _opts: &OutputOptions) -> std::io::Result<()> {
        writeln!(w, "  Type: {}", ssl_certificate_type(self.0))?;
        for (name, label) in CERT_FIELDS {
            write_param(w, self.0, name, label)?;
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        let mut obj = attrs_to_json(self.0);
        obj.insert("type".into(), serde_json::json!(ssl_certificate_type(self.0)));
        serde_json::Value::Object(obj)
    }
}
