//! Connector attribute profiles.
//!
//! A connector runs on one of two TLS implementations. Each needs its own set
//! of attributes and the two sets must never be mixed on one element:
//!
//! | Type | `protocol` | TLS implementation | Key material |
//! |------|------------|--------------------|--------------|
//! | JSS  | `Http11Protocol` | `sslImplementationName` | NSS database only |
//! | JSSE | `Http11NioProtocol` | none | `keystore*`, `keyAlias`, trust manager |

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use xmltree::Element;

use crate::attr::{remove_attr, set_attr};
use crate::error::{Error, Result};

/// Password class for plain-text NSS password files.
pub const PLAIN_PASSWORD_CLASS: &str = "org.apache.tomcat.util.net.jss.PlainPasswordFile";

/// Protocol implementation used by JSS connectors.
pub const JSS_PROTOCOL: &str = "org.apache.coyote.http11.Http11Protocol";

/// TLS implementation used by JSS connectors.
pub const JSS_IMPLEMENTATION: &str = "org.apache.tomcat.util.net.jss.JSSImplementation";

/// Protocol implementation used by JSSE connectors.
pub const JSSE_PROTOCOL: &str = "org.dogtagpki.tomcat.Http11NioProtocol";

/// Keystore type used by JSSE connectors.
pub const JSSE_KEYSTORE_TYPE: &str = "pkcs12";

/// Key alias used by JSSE connectors.
pub const JSSE_KEY_ALIAS: &str = "sslserver";

/// Trust manager used by JSSE connectors.
pub const JSSE_TRUST_MANAGER: &str = "org.dogtagpki.tomcat.PKITrustManager";

/// Attributes that only JSSE connectors carry.
const JSSE_ONLY: &[&str] = &[
    "keystoreType",
    "keystoreFile",
    "keystorePassFile",
    "keyAlias",
    "trustManagerClassName",
];

/// TLS implementation behind a connector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectorType {
    /// Network Security Services via JSS.
    #[default]
    Jss,
    /// The JDK's own TLS stack.
    Jsse,
}

impl ConnectorType {
    /// Token used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jss => "JSS",
            Self::Jsse => "JSSE",
        }
    }
}

impl FromStr for ConnectorType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "JSS" => Ok(Self::Jss),
            "JSSE" => Ok(Self::Jsse),
            _ => Err(Error::InvalidConnectorType(s.to_string())),
        }
    }
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basic listener attributes supplied when adding a connector.
#[derive(Debug, Clone, Default)]
pub struct ConnectorParams {
    /// Listening port (`port`).
    pub port: Option<String>,
    /// Protocol handler class or name (`protocol`).
    pub protocol: Option<String>,
    /// URL scheme reported to applications (`scheme`).
    pub scheme: Option<String>,
    /// Whether requests are marked secure (`secure`).
    pub secure: Option<String>,
    /// Whether TLS is enabled on the listener (`SSLEnabled`).
    pub ssl_enabled: Option<String>,
}

impl ConnectorParams {
    /// Apply the supplied fields to a connector element.
    pub fn apply(&self, connector: &mut Element) {
        set_attr(connector, "port", self.port.clone());
        set_attr(connector, "protocol", self.protocol.clone());
        set_attr(connector, "scheme", self.scheme.clone());
        set_attr(connector, "secure", self.secure.clone());
        set_attr(connector, "SSLEnabled", self.ssl_enabled.clone());
    }
}

/// Key material locations supplied when switching a connector's type.
///
/// `None` leaves an attribute untouched, an empty string removes it.
#[derive(Debug, Clone, Default)]
pub struct TlsParams {
    /// NSS database directory (`certdbDir`).
    pub nss_database_dir: Option<String>,
    /// NSS password file (`passwordFile`).
    pub nss_password_file: Option<String>,
    /// File holding the server certificate nickname (`serverCertNickFile`).
    pub server_cert_nickname_file: Option<String>,
    /// PKCS #12 keystore, JSSE only (`keystoreFile`).
    pub keystore_file: Option<String>,
    /// Keystore password file, JSSE only (`keystorePassFile`).
    pub keystore_password_file: Option<String>,
}

/// Rewrite a connector's attributes for the given TLS implementation.
pub fn apply_connector_type(connector: &mut Element, kind: ConnectorType, params: &TlsParams) {
    debug!("Configuring connector as {}", kind);

    set_attr(connector, "certdbDir", params.nss_database_dir.clone());
    set_attr(connector, "passwordClass", PLAIN_PASSWORD_CLASS);
    set_attr(connector, "passwordFile", params.nss_password_file.clone());
    set_attr(
        connector,
        "serverCertNickFile",
        params.server_cert_nickname_file.clone(),
    );

    match kind {
        ConnectorType::Jss => {
            set_attr(connector, "protocol", JSS_PROTOCOL);
            set_attr(connector, "sslImplementationName", JSS_IMPLEMENTATION);

            for name in JSSE_ONLY {
                remove_attr(connector, name);
            }
        }
        ConnectorType::Jsse => {
            set_attr(connector, "protocol", JSSE_PROTOCOL);
            remove_attr(connector, "sslImplementationName");

            set_attr(connector, "keystoreType", JSSE_KEYSTORE_TYPE);
            set_attr(connector, "keystoreFile", params.keystore_file.clone());
            set_attr(
                connector,
                "keystorePassFile",
                params.keystore_password_file.clone(),
            );
            set_attr(connector, "keyAlias", JSSE_KEY_ALIAS);

            set_attr(connector, "trustManagerClassName", JSSE_TRUST_MANAGER);
        }
    }
}

/// Parse a type token and rewrite the connector.
///
/// The token is validated before the element is touched, so an unknown type
/// leaves the connector as it was.
pub fn apply_connector_type_str(
    connector: &mut Element,
    kind: &str,
    params: &TlsParams,
) -> Result<ConnectorType> {
    let kind: ConnectorType = kind.parse()?;
    apply_connector_type(connector, kind, params);
    Ok(kind)
}
