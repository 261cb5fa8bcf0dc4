//! Debugging tool: multicast two fixed-position AIS reports 10 s apart.
//!
//! Run `ais_listen` in another shell (possibly on another computer on the
//! same subnet), or add a UDP network connection in OpenCPN with the group
//! as the address. Start the listener first; datagrams sent before anyone
//! is listening are lost.

use std::net::Ipv4Addr;
use std::thread::sleep;
use std::time::Duration;

use clap::Parser;

use aisbridge::ais::{self, CommonNavigationBlock};
use aisbridge::config::NetworkConfig;
use aisbridge::net::AisSender;

#[derive(Parser, Debug)]
#[command(name = "ais_fake_tx")]
#[command(about = "Send two test AIS position reports over UDP multicast", long_about = None)]
struct Args {
    /// Multicast group
    #[arg(long)]
    group: Option<Ipv4Addr>,

    /// UDP port
    #[arg(long)]
    port: Option<u16>,

    /// MMSI for the first report
    #[arg(long, default_value = "123456789")]
    mmsi: u32,

    /// Seconds between the two reports
    #[arg(long, default_value = "10")]
    interval: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let network = NetworkConfig::default();
    let group = args.group.unwrap_or(network.group);
    let port = args.port.unwrap_or(network.port);

    let sender = AisSender::new(group, port, network.ttl)?;
    println!("multicasting test reports to {}", sender.destination());

    // Two berths in Portsmouth Olympic Harbour, Kingston
    let first = test_report(args.mmsi, -76.514_790, 44.215_940);
    let second = test_report(987_654_321, -76.514_775, 44.215_972);

    let framed = ais::encode(&first)?;
    println!("{framed}");
    sender.send(&framed)?;

    sleep(Duration::from_secs(args.interval));

    let framed = ais::encode(&second)?;
    println!("{framed}");
    sender.send(&framed)?;

    Ok(())
}

fn test_report(mmsi: u32, longitude: f64, latitude: f64) -> CommonNavigationBlock {
    CommonNavigationBlock {
        mmsi,
        nav_status: 0,
        longitude,
        latitude,
        timestamp: 15,
        ..Default::default()
    }
}
