use std::error::Error as StdError;
use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use paceline::packet::Packet;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Reference packets baked in for a quick look at the output format
const DEMO_PACKETS: [&str; 3] = [
    "SWM 720 1 80 25 40",
    "RUN 15000 1 75",
    "WLK 9000 1 75 180",
];

/// per-sport workout summaries computed from raw sensor packets
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Computes distance, average speed, and calories burned for running, sports \
                  walking, and swimming packets, and prints one summary line per packet. \
                  Without any packets the built-in demo set is used."
)]
struct Cli {
    /// sensor packets, one per argument, e.g. "SWM 720 1 80 25 40"
    packets: Vec<String>,

    /// read packets from stdin instead, one per line
    #[clap(long, conflicts_with = "packets")]
    stdin: bool,

    /// print each summary as a JSON object instead of the report line
    #[clap(long)]
    json: bool,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn StdError>> {
    let packets = gather_packets(cli)?;
    info!(count = packets.len(), "processing sensor packets");

    for line in &packets {
        let workout = Packet::parse(line)?.into_workout()?;
        let summary = workout.summary();
        if cli.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!("{}", summary.message());
        }
    }

    Ok(())
}

fn gather_packets(cli: &Cli) -> Result<Vec<String>, Box<dyn StdError>> {
    if cli.stdin {
        let mut lines = Vec::new();
        for line in io::stdin().lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
        return Ok(lines);
    }

    if cli.packets.is_empty() {
        debug!("no packets given, falling back to the demo set");
        return Ok(DEMO_PACKETS.iter().map(|p| p.to_string()).collect());
    }

    Ok(cli.packets.clone())
}
