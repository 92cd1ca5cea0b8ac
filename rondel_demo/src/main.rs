// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a pointer session on a radial slider and writes the final scene as SVG.
mod script;
mod svg;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rondel_core::RadialSlider;

use crate::svg::SvgPort;

#[derive(Parser, Debug)]
#[command(name = "rondel_demo", version, about, long_about = None)]
struct Cli {
    /// Slider configuration (JSON). Defaults to a five-track budget slider.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pointer events to replay (JSON array). Defaults to a short scripted drag.
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// Where to write the SVG.
    #[arg(short, long, default_value = "rondel_demo.svg")]
    out: PathBuf,

    /// Overrides the configured hit threshold.
    #[arg(long)]
    hit_threshold: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => script::load_config(path)?,
        None => script::default_config(),
    };
    if let Some(threshold) = cli.hit_threshold {
        config.hit_threshold = threshold;
    }
    let events = match &cli.events {
        Some(path) => script::load_events(path)?,
        None => script::default_events(),
    };

    let mut slider =
        RadialSlider::new(&config, SvgPort::new(&config)).context("invalid slider config")?;
    log::info!(
        "replaying {} events on {} tracks",
        events.len(),
        slider.tracks().len()
    );
    for (n, event) in events.into_iter().enumerate() {
        if !slider.handle_pointer(event) {
            log::warn!("event {n} ({:?}) had no effect", event.kind);
        }
    }

    std::fs::write(&cli.out, slider.port().to_svg_string())
        .with_context(|| format!("writing {}", cli.out.display()))?;
    log::info!("wrote {}", cli.out.display());

    for row in slider.legend_rows() {
        println!("{:>12}  {}", row.label, row.name);
    }
    println!("wrote {}", cli.out.display());
    Ok(())
}
