// This file is an example of how to use the `fridge_vision` library.
// The main library entry point is `src/lib.rs`.
//
// Usage: fridge_vision [--config analyzer.json] [--seed N] <image>...

use anyhow::{Context, bail};
use fridge_vision::core_modules::random_source;
use fridge_vision::core_modules::utils::image_helper::image_helper;
use fridge_vision::config::defaults::CANVAS_SIZE;
use fridge_vision::{AnalyzerConfig, BatchAnalyzer, FoodAnalyzer, FrameJob};
use std::path::PathBuf;
use std::sync::Arc;

struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
    images: Vec<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        config: None,
        seed: None,
        images: Vec::new(),
    };
    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--config" => args.config = Some(raw.next().context("--config needs a path")?.into()),
            "--seed" => {
                let value = raw.next().context("--seed needs a number")?;
                args.seed = Some(
                    value
                        .parse::<u64>()
                        .with_context(|| format!("invalid seed {value}"))?,
                );
            }
            _ => args.images.push(arg.into()),
        }
    }
    if args.images.is_empty() {
        bail!("usage: fridge_vision [--config analyzer.json] [--seed N] <image>...");
    }
    Ok(args)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("Fridge Vision - Example Runner");
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => AnalyzerConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };
    let analyzer = Arc::new(FoodAnalyzer::new(config)?);

    if let [path] = args.images.as_slice() {
        let mut rng = match args.seed {
            Some(seed) => random_source::seeded(seed),
            None => random_source::from_entropy(),
        };
        let report = analyzer
            .analyze_image_file(path, &mut rng)
            .with_context(|| format!("analyzing {}", path.display()))?;
        println!("{}\n{}", path.display(), report.profile);
        println!("{}", serde_json::to_string_pretty(&report.items)?);
        return Ok(());
    }

    let batch = BatchAnalyzer::with_default_workers(Arc::clone(&analyzer));
    let mut jobs = Vec::with_capacity(args.images.len());
    for (index, path) in args.images.iter().enumerate() {
        let frame = image_helper::load_canonical(path)
            .with_context(|| format!("loading {}", path.display()))?;
        let mut job = FrameJob::new(frame, CANVAS_SIZE, CANVAS_SIZE);
        if let Some(seed) = args.seed {
            job = job.with_seed(seed.wrapping_add(index as u64));
        }
        jobs.push(job);
    }

    for (path, result) in args.images.iter().zip(batch.analyze_all(jobs).await) {
        let report = result.with_context(|| format!("analyzing {}", path.display()))?;
        println!("{}\n{}", path.display(), report.profile);
        for item in &report.items {
            println!(
                "  {:<12} {:>5.1}%  {:<6} {:>3}d  {}",
                item.name,
                item.confidence * 100.0,
                format!("{:?}", item.freshness),
                item.days_to_expiration,
                item.total_quantity
            );
        }
    }

    Ok(())
}
