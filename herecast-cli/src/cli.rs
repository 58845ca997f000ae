use clap::Parser;
use herecast_core::{IpApiClient, NwsClient, build_report};

/// Top-level CLI struct.
///
/// The tool takes no arguments: the caller's location is inferred from
/// the public address their requests originate from.
#[derive(Debug, Parser)]
#[command(name = "herecast", version, about = "Forecast for wherever you are")]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let geo = IpApiClient::default();
        let nws = NwsClient::default();

        let report = build_report(&geo, &nws).await?;
        println!("{report}");

        Ok(())
    }
}
