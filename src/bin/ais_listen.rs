//! Debugging tool: join the multicast group, decode every AIS sentence that
//! arrives and print it in the selected format.

use std::net::Ipv4Addr;
use std::time::Duration;

use clap::Parser;

use aisbridge::ais;
use aisbridge::config::NetworkConfig;
use aisbridge::net::AisReceiver;
use aisbridge::output::{OutputFormat, ReportOutput, create_formatter};

#[derive(Parser, Debug)]
#[command(name = "ais_listen")]
#[command(about = "Listen for AIS sentences on a multicast group and decode them", long_about = None)]
struct Args {
    /// Multicast group
    #[arg(long)]
    group: Option<Ipv4Addr>,

    /// UDP port
    #[arg(long)]
    port: Option<u16>,

    /// Local interface address to join the group on
    #[arg(long, default_value = "0.0.0.0")]
    interface: Ipv4Addr,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Replace numeric status fields with their descriptions
    #[arg(short, long)]
    descriptive: bool,

    /// Give up after this many seconds without traffic (0 = wait forever)
    #[arg(long, default_value = "0")]
    timeout: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let network = NetworkConfig::default();
    let group = args.group.unwrap_or(network.group);
    let port = args.port.unwrap_or(network.port);

    let receiver = AisReceiver::new(group, port, args.interface)?;
    if args.timeout > 0 {
        receiver.set_timeout(Some(Duration::from_secs(args.timeout)))?;
    }
    let formatter = create_formatter(args.format, args.descriptive);

    loop {
        let Some(sentence) = receiver.recv()? else {
            log::info!("no traffic for {} s, exiting", args.timeout);
            return Ok(());
        };
        match ais::decode(&sentence) {
            Ok(block) => {
                println!("{}", formatter.format(&ReportOutput { sentence, block }));
            }
            Err(e) => log::warn!("undecodable sentence {sentence:?}: {e}"),
        }
    }
}
