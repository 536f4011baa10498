//! pki-server http-connector cert command implementation.

use std::io::{self, Write};

use clap::{Args, Subcommand};
use pkiserver::Error;
use pkiserver::instance::Instance;
use pkiserver::output::{OutputFormat, OutputOptions, SslCertificateView, print_matched};
use pkiserver::sslhost::{find_ssl_host, ssl_certificates};

#[derive(Args)]
pub struct CertCmd {
    #[command(subcommand)]
    action: CertAction,
}

#[derive(Subcommand)]
enum CertAction {
    /// Find SSL certificate configurations.
    Find {
        /// Connector ID.
        connector_id: String,

        /// SSL hostname (_default_ for the default host).
        hostname: String,
    },
}

impl CertCmd {
    pub fn run(
        self,
        instance: &Instance,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> anyhow::Result<()> {
        match self.action {
            CertAction::Find {
                connector_id,
                hostname,
            } => Self::find(instance, &connector_id, &hostname, format, opts),
        }
    }

    fn find(
        instance: &Instance,
        connector_id: &str,
        hostname: &str,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> anyhow::Result<()> {
        let config = instance.load_server_config()?;
        let connector = config.connector(connector_id)?;

        let host = find_ssl_host(connector, hostname).ok_or_else(|| Error::SslHostNotFound {
            hostname: hostname.to_string(),
        })?;

        let certs: Vec<_> = ssl_certificates(host)
            .into_iter()
            .map(SslCertificateView)
            .collect();

        let mut stdout = io::stdout().lock();
        print_matched(&mut stdout, &certs, format, opts)?;
        stdout.flush()?;

        Ok(())
    }
}
