//! pki-server http-connector command implementation.

use std::io::{self, Write};

use clap::{Args, Subcommand};
use pkiserver::connector::{ConnectorParams, TlsParams, apply_connector_type_str};
use pkiserver::instance::Instance;
use pkiserver::output::{ConnectorView, OutputFormat, OutputOptions, Printable, print_matched};

use super::{cert, host};

#[derive(Args)]
pub struct ConnectorCmd {
    #[command(subcommand)]
    action: ConnectorAction,
}

#[derive(Subcommand)]
enum ConnectorAction {
    /// Add connector.
    Add {
        /// Connector ID.
        id: String,

        /// Port number.
        #[arg(long)]
        port: String,

        /// Protocol.
        #[arg(long)]
        protocol: Option<String>,

        /// Scheme.
        #[arg(long)]
        scheme: Option<String>,

        /// Secure (true|false).
        #[arg(long)]
        secure: Option<String>,

        /// SSL enabled (true|false).
        #[arg(long = "sslEnabled")]
        ssl_enabled: Option<String>,
    },

    /// Delete connector.
    Del {
        /// Connector ID.
        id: String,
    },

    /// Find connectors.
    Find,

    /// Show connector.
    Show {
        /// Connector ID.
        id: String,
    },

    /// Modify connector.
    Mod {
        /// Connector ID.
        id: String,

        /// Connector type: JSS (default), JSSE.
        #[arg(long = "type", default_value = "JSS")]
        kind: String,

        /// NSS database directory.
        #[arg(long)]
        nss_database_dir: Option<String>,

        /// NSS password file.
        #[arg(long)]
        nss_password_file: Option<String>,

        /// Key store file.
        #[arg(long)]
        keystore_file: Option<String>,

        /// Key store password file.
        #[arg(long)]
        keystore_password_file: Option<String>,

        /// Server certificate nickname file.
        #[arg(long)]
        server_cert_nickname_file: Option<String>,
    },

    /// SSL host configuration management commands.
    Host(host::HostCmd),

    /// SSL certificate configuration management commands.
    Cert(cert::CertCmd),
}

impl ConnectorCmd {
    pub fn run(
        self,
        instance: &Instance,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> anyhow::Result<()> {
        match self.action {
            ConnectorAction::Add {
                id,
                port,
                protocol,
                scheme,
                secure,
                ssl_enabled,
            } => {
                let params = ConnectorParams {
                    port: Some(port),
                    protocol,
                    scheme,
                    secure,
                    ssl_enabled,
                };
                Self::add(instance, &id, &params, format, opts)
            }
            ConnectorAction::Del { id } => Self::del(instance, &id),
            ConnectorAction::Find => Self::find(instance, format, opts),
            ConnectorAction::Show { id } => Self::show(instance, &id, format, opts),
            ConnectorAction::Mod {
                id,
                kind,
                nss_database_dir,
                nss_password_file,
                keystore_file,
                keystore_password_file,
                server_cert_nickname_file,
            } => {
                let params = TlsParams {
                    nss_database_dir,
                    nss_password_file,
                    server_cert_nickname_file,
                    keystore_file,
                    keystore_password_file,
                };
                Self::modify(instance, &id, &kind, &params, format, opts)
            }
            ConnectorAction::Host(cmd) => cmd.run(instance, format, opts),
            ConnectorAction::Cert(cmd) => cmd.run(instance, format, opts),
        }
    }

    fn add(
        instance: &Instance,
        id: &str,
        params: &ConnectorParams,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> anyhow::Result<()> {
        let mut config = instance.load_server_config()?;

        let connector = config.create_connector(id)?;
        params.apply(connector);

        config.save()?;

        let mut stdout = io::stdout().lock();
        ConnectorView(config.connector(id)?).print(&mut stdout, format, opts)?;
        stdout.flush()?;

        Ok(())
    }

    fn del(instance: &Instance, id: &str) -> anyhow::Result<()> {
        let mut config = instance.load_server_config()?;
        config.remove_connector(id)?;
        config.save()?;

        Ok(())
    }

    fn find(instance: &Instance, format: OutputFormat, opts: &OutputOptions) -> anyhow::Result<()> {
        let config = instance.load_server_config()?;

        let connectors: Vec<_> = config
            .connectors()
            .into_iter()
            .map(|(_, e)| ConnectorView(e))
            .collect();

        let mut stdout = io::stdout().lock();
        print_matched(&mut stdout, &connectors, format, opts)?;
        stdout.flush()?;

        Ok(())
    }

    fn show(
        instance: &Instance,
        id: &str,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> anyhow::Result<()> {
        let config = instance.load_server_config()?;
        let connector = config.connector(id)?;

        let mut stdout = io::stdout().lock();
        ConnectorView(connector).print(&mut stdout, format, opts)?;
        stdout.flush()?;

        Ok(())
    }

    fn modify(
        instance: &Instance,
        id: &str,
        kind: &str,
        params: &TlsParams,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> anyhow::Result<()> {
        let mut config = instance.load_server_config()?;

        let connector = config.connector_mut(id)?;
        apply_connector_type_str(connector, kind, params)?;

        config.save()?;

        let mut stdout = io::stdout().lock();
        ConnectorView(config.connector(id)?).print(&mut stdout, format, opts)?;
        stdout.flush()?;

        Ok(())
    }
}
