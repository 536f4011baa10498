//! SSL host and certificate blocks nested under a connector.

use tracing::debug;
use xmltree::{Element, XMLNode};

use crate::attr::get_attr;

/// Tag of SSL host configuration elements.
pub const SSL_HOST_CONFIG: &str = "SSLHostConfig";

/// Tag of certificate elements.
pub const CERTIFICATE: &str = "Certificate";

/// Hostname of an SSL host block without a `hostName` attribute.
pub const DEFAULT_HOSTNAME: &str = "_default_";

/// Type of a certificate block without a `type` attribute.
pub const UNDEFINED_CERT_TYPE: &str = "UNDEFINED";

/// All SSL host blocks in a connector's subtree, in document order.
pub fn ssl_hosts(connector: &Element) -> Vec<&Element> {
    let mut found = Vec::new();
    collect_descendants(connector, SSL_HOST_CONFIG, &mut found);
    found
}

/// Find the first SSL host block serving `hostname`.
pub fn find_ssl_host<'a>(connector: &'a Element, hostname: &str) -> Option<&'a Element> {
    debug!("SSL Hosts:");
    ssl_hosts(connector).into_iter().find(|host| {
        let name = ssl_host_name(host);
        debug!("- {}", name);
        name == hostname
    })
}

/// Hostname an SSL host block serves.
pub fn ssl_host_name(host: &Element) -> &str {
    get_attr(host, "hostName").unwrap_or(DEFAULT_HOSTNAME)
}

/// All certificate blocks in an SSL host's subtree, in document order.
pub fn ssl_certificates(host: &Element) -> Vec<&Element> {
    let mut found = Vec::new();
    collect_descendants(host, CERTIFICATE, &mut found);
    found
}

/// Key type of a certificate block.
pub fn ssl_certificate_type(cert: &Element) -> &str {
    get_attr(cert, "type").unwrap_or(UNDEFINED_CERT_TYPE)
}

fn collect_descendants<'a>(element: &'a Element, tag: &str, found: &mut Vec<&'a Element>) {
    for child in element.children.iter().filter_map(XMLNode::as_element) {
        if child.name == tag {
            found.push(child);
        }
        collect_descendants(child, tag, found);
    }
}
