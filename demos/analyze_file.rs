//! Example: Analyze a single recording
//!
//! Usage:
//!   cargo run --release --example analyze_file -- [--json] [--mix average|first|dominant] <file>

use stagecoach_dsp::io::decoder::decode_file;
use stagecoach_dsp::preprocessing::channel_mixer::ChannelMixMode;
use stagecoach_dsp::{analyze_buffer, AnalysisConfig};
use std::env;
use std::time::Instant;

fn parse_mix(value: &str) -> Result<ChannelMixMode, Box<dyn std::error::Error>> {
    match value {
        "average" => Ok(ChannelMixMode::Average),
        "first" => Ok(ChannelMixMode::FirstChannel),
        "dominant" => Ok(ChannelMixMode::Dominant),
        other => Err(format!("Unknown mix mode '{}' (average|first|dominant)", other).into()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let mut json = false;
    let mut mix = ChannelMixMode::default();
    let mut path: Option<String> = None;

    while !args.is_empty() {
        let a = args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--mix" => {
                if args.is_empty() {
                    return Err("--mix requires a value".into());
                }
                mix = parse_mix(&args.remove(0))?;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: analyze_file [--json] [--mix average|first|dominant] <file>\n\
                     \n\
                     --json     Print the result as JSON\n\
                     --mix M    How to fold channels to mono (default: average)\n"
                );
                return Ok(());
            }
            _ => path = Some(a),
        }
    }

    let Some(path) = path else {
        eprintln!("ERROR: Provide an audio file path. Use --help for usage.");
        std::process::exit(2);
    };

    let t0 = Instant::now();
    let buffer = decode_file(&path, mix)?;
    let decode_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let t1 = Instant::now();
    let result = analyze_buffer(&buffer, AnalysisConfig::default())?;
    let analysis_ms = t1.elapsed().as_secs_f64() * 1000.0;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.descriptor_line());
    }

    eprintln!(
        "{}: {} samples at {} Hz, decode={:.1}ms analysis={:.1}ms",
        path,
        buffer.len(),
        buffer.sample_rate(),
        decode_ms,
        analysis_ms
    );

    Ok(())
}
