//! Example: One Poll Cycle
//!
//! This example queries an outside sensor and one or more room sensors
//! once and prints the humidity-mode and summer-mode recommendations.
//!
//! Run with: `cargo run --example poll_once -- <OUTSIDE_ADDRESS> <ROOM_ADDRESS>...`

use std::env;

use airing_core::{EvalConfig, Evaluator, ReportAssembler, TcpSensorLink};
use airing_types::SensorEndpoint;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <OUTSIDE_ADDRESS> <ROOM_ADDRESS>...", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} 192.168.178.31 192.168.178.35 192.168.178.36", args[0]);
        std::process::exit(1);
    }

    let outside = SensorEndpoint::new("outside", &args[1]);
    let rooms: Vec<_> = args[2..]
        .iter()
        .enumerate()
        .map(|(i, address)| SensorEndpoint::new(format!("room {}", i + 1), address))
        .collect();

    let config = EvalConfig::default();
    let report = ReportAssembler::new(config.language);
    let result = Evaluator::new(TcpSensorLink::default())
        .evaluate(&outside, &rooms, &config)
        .await;

    for error in &result.errors {
        println!("{error}");
    }

    if let Some(outside) = result.outside {
        println!(
            "outside: {:.2} °C, {:.2} %, {:.2} g/m³",
            outside.temperature_c, outside.relative_humidity_pct, outside.absolute_humidity
        );
    }

    for room in &result.rooms {
        println!(
            "{}: {:.2} °C, {:.2} %, {:.2} g/m³ ({:+.2} {}) -> {} / summer: {}",
            room.room.name,
            room.reading.temperature_c,
            room.reading.relative_humidity_pct,
            room.reading.absolute_humidity,
            room.abs_humidity_diff_outside,
            report.to_outside(),
            report.decision_label(room.decision),
            report.summer_label(room.summer),
        );
    }
}
