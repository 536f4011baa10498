//! pki-server http-connector host command implementation.

use std::io::{self, Write};

use clap::{Args, Subcommand};
use pkiserver::instance::Instance;
use pkiserver::output::{OutputFormat, OutputOptions, SslHostView, print_matched};
use pkiserver::sslhost::ssl_hosts;

#[derive(Args)]
pub struct HostCmd {
    #[command(subcommand)]
    action: HostAction,
}

#[derive(Subcommand)]
enum HostAction {
    /// Find SSL host configurations.
    Find {
        /// Connector ID.
        connector_id: String,
    },
}

impl HostCmd {
    pub fn run(
        self,
        instance: &Instance,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> anyhow::Result<()> {
        match self.action {
            HostAction::Find { connector_id } => Self::find(instance, &connector_id, format, opts),
        }
    }

    fn find(
        instance: &Instance,
        connector_id: &str,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> anyhow::Result<()> {
        let config = instance.load_server_config()?;
        let connector = config.connector(connector_id)?;

        let hosts: Vec<_> = ssl_hosts(connector).into_iter().map(SslHostView).collect();

        let mut stdout = io::stdout().lock();
        print_matched(&mut stdout, &hosts, format, opts)?;
        stdout.flush()?;

        Ok(())
    }
}
