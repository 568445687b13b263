//! Example: Analyze multiple recordings in parallel
//!
//! Usage:
//!   cargo run --release --example analyze_batch -- [--jobs N] [--json] <file1> <file2> ...
//!
//! Notes:
//! - Parallelism is across files. Each file's meters run sequentially.
//! - Default workers: (available CPU threads - 1), keeping one core free for the system.

use rayon::prelude::*;
use serde::Serialize;
use stagecoach_dsp::io::decoder::decode_file;
use stagecoach_dsp::preprocessing::channel_mixer::ChannelMixMode;
use stagecoach_dsp::{analyze_buffer, AnalysisConfig, AnalysisResult};
use std::env;
use std::time::Instant;

#[derive(Serialize)]
struct ItemOut {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<AnalysisResult>,
    processing_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism().map(|v| v.get()).unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

fn analyze_one(path: &str, config: &AnalysisConfig) -> ItemOut {
    let t0 = Instant::now();
    let outcome = decode_file(path, ChannelMixMode::Average)
        .and_then(|buffer| analyze_buffer(&buffer, config.clone()));
    let processing_ms = t0.elapsed().as_secs_f64() * 1000.0;

    match outcome {
        Ok(result) => ItemOut {
            file: path.to_string(),
            result: Some(result),
            processing_ms,
            error: None,
        },
        Err(e) => ItemOut {
            file: path.to_string(),
            result: None,
            processing_ms,
            error: Some(e.to_string()),
        },
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut jobs: Option<usize> = None;
    let mut paths: Vec<String> = Vec::new();

    while !args.is_empty() {
        let a = args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--jobs" => {
                if args.is_empty() {
                    return Err("--jobs requires a value".into());
                }
                let v = args.remove(0).parse::<usize>()?;
                jobs = Some(std::cmp::max(1, v));
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: analyze_batch [--jobs N] [--json] <file1> <file2> ...\n\
                     \n\
                     --jobs N   Parallel workers (default: CPU-1)\n\
                     --json     Emit one JSON object per line (JSONL)\n"
                );
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    if paths.is_empty() {
        eprintln!("ERROR: Provide at least one audio file path. Use --help for usage.");
        std::process::exit(2);
    }

    let jobs = jobs.unwrap_or_else(default_jobs);
    eprintln!("Batch: {} files, jobs={}", paths.len(), jobs);

    let config = AnalysisConfig::default();

    let t0 = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    let outs: Vec<ItemOut> =
        pool.install(|| paths.par_iter().map(|path| analyze_one(path, &config)).collect());

    for (idx, o) in outs.iter().enumerate() {
        if json {
            println!("{}", serde_json::to_string(o)?);
            continue;
        }
        match (&o.result, &o.error) {
            (Some(result), _) => println!(
                "[{}/{}] {}: {} ({:.1}ms)",
                idx + 1,
                outs.len(),
                o.file,
                result,
                o.processing_ms
            ),
            (None, error) => println!(
                "[{}/{}] {}: ERROR: {}",
                idx + 1,
                outs.len(),
                o.file,
                error.as_deref().unwrap_or("unknown error")
            ),
        }
    }

    let ok = outs.iter().filter(|o| o.result.is_some()).count();
    eprintln!(
        "Done: ok={}/{} wall={:.0}ms",
        ok,
        outs.len(),
        t0.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
