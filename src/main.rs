use std::io::BufRead;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded};

use aisbridge::ais::{self, CommonNavigationBlock};
use aisbridge::config::{BridgeConfig, StationConfig};
use aisbridge::gps::{self, GpsFix};
use aisbridge::net::AisSender;

#[derive(Parser, Debug)]
#[command(name = "aisbridge")]
#[command(
    about = "Bridge NMEA-0183 GPS fixes on stdin into AIS position reports over UDP multicast",
    long_about = None
)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Station MMSI (overrides the config file)
    #[arg(long)]
    mmsi: Option<u32>,

    /// Multicast group (overrides the config file)
    #[arg(long)]
    group: Option<Ipv4Addr>,

    /// UDP port (overrides the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Also print each sentence to stdout
    #[arg(short, long)]
    echo: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BridgeConfig::load(path)?,
        None => BridgeConfig::default(),
    };
    if let Some(mmsi) = args.mmsi {
        config.station.mmsi = mmsi;
    }
    if let Some(group) = args.group {
        config.network.group = group;
    }
    if let Some(port) = args.port {
        config.network.port = port;
    }
    if args.echo {
        config.bridge.echo = true;
    }

    if config.station.mmsi == StationConfig::default().mmsi {
        log::warn!(
            "using the placeholder MMSI {}; set [station] mmsi before pointing a plotter at this",
            config.station.mmsi
        );
    }

    let (fix_tx, fix_rx) = bounded::<GpsFix>(10);
    std::thread::spawn(move || read_fixes(fix_tx));

    let sender = AisSender::new(config.network.group, config.network.port, config.network.ttl)?;
    log::info!("multicasting AIS reports to {}", sender.destination());

    run_bridge_loop(fix_rx, sender, config)
}

/// Read NMEA lines from stdin and hand the fixes to the encoder loop.
/// The serial or radio collaborator feeding stdin is outside this process.
fn read_fixes(fix_tx: Sender<GpsFix>) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("stdin read failed: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match gps::parse_line(&line) {
            Ok(Some(fix)) => {
                if fix_tx.send(fix).is_err() {
                    break;
                }
            }
            Ok(None) => {} // a sentence type this bridge does not use
            Err(e) => log::warn!("skipping NMEA line: {e}"),
        }
    }
}

fn run_bridge_loop(
    fix_rx: Receiver<GpsFix>,
    sender: AisSender,
    config: BridgeConfig,
) -> anyhow::Result<()> {
    let warn_timeout = Duration::from_secs_f32(config.bridge.fix_warning_timeout_secs);

    loop {
        match fix_rx.recv_timeout(warn_timeout) {
            // A fix that fails to encode (garbage slips through when the
            // NMEA line carries no checksum) or to send is dropped; the
            // next fix comes along in a second anyway.
            Ok(fix) => match send_report(&sender, &config, &fix) {
                Ok(()) => log::info!(
                    "sent report for {:.6},{:.6} at second {}",
                    fix.latitude,
                    fix.longitude,
                    fix.seconds
                ),
                Err(e) => log::warn!(
                    "dropping fix {:.6},{:.6}: {e}",
                    fix.latitude,
                    fix.longitude
                ),
            },
            Err(RecvTimeoutError::Timeout) => {
                log::warn!(
                    "no GPS fix for {:.0} s",
                    config.bridge.fix_warning_timeout_secs
                );
            }
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("fix source closed, shutting down");
                return Ok(());
            }
        }
    }
}

/// Encode one fix with the configured station identity and multicast it.
fn send_report(
    sender: &AisSender,
    config: &BridgeConfig,
    fix: &GpsFix,
) -> aisbridge::Result<()> {
    let block = report_from_fix(&config.station, fix);
    let framed = ais::encode(&block)?;
    sender.send(&framed)?;
    if config.bridge.echo {
        println!("{framed}");
    }
    Ok(())
}

/// Combine the configured station identity with one GPS fix.
fn report_from_fix(station: &StationConfig, fix: &GpsFix) -> CommonNavigationBlock {
    CommonNavigationBlock {
        mmsi: station.mmsi,
        nav_status: station.nav_status,
        raim: station.raim,
        radio_status: station.radio_status,
        latitude: fix.latitude,
        longitude: fix.longitude,
        timestamp: fix.seconds.min(59),
        speed_over_ground: fix.speed_knots.unwrap_or(1023.0),
        course_over_ground: fix.course_degrees.unwrap_or(3600.0),
        ..Default::default()
    }
}
