// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON slider configurations and pointer scripts.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use rondel_core::{
    DEFAULT_HANDLE_RADIUS, DEFAULT_HIT_THRESHOLD, DEFAULT_SURFACE_SIZE, DEFAULT_TRACK_NAME,
    PointerEvent, PointerKind, SliderConfig, Size, TrackSpec,
};
use serde::Deserialize;

/// On-disk shape of a slider configuration.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SliderFile {
    #[serde(default = "default_surface")]
    width: f64,
    #[serde(default = "default_surface")]
    height: f64,
    #[serde(default = "default_hit_threshold")]
    hit_threshold: f64,
    #[serde(default = "default_handle_radius")]
    handle_radius: f64,
    #[serde(default)]
    symbol: Option<String>,
    tracks: Vec<TrackFile>,
}

/// On-disk shape of one track.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TrackFile {
    radius: f64,
    min: f64,
    max: f64,
    #[serde(default = "default_step")]
    step: f64,
    #[serde(default)]
    initial_value: Option<f64>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

fn default_surface() -> f64 {
    DEFAULT_SURFACE_SIZE
}

fn default_hit_threshold() -> f64 {
    DEFAULT_HIT_THRESHOLD
}

fn default_handle_radius() -> f64 {
    DEFAULT_HANDLE_RADIUS
}

fn default_step() -> f64 {
    1.0
}

impl SliderFile {
    /// Converts to a core configuration. Colors are parsed here; numeric validation is
    /// left to the slider itself.
    pub(crate) fn into_config(self) -> Result<SliderConfig> {
        let mut config = SliderConfig::new(Size::new(self.width, self.height))
            .with_hit_threshold(self.hit_threshold)
            .with_handle_radius(self.handle_radius);
        config.symbol = self.symbol;
        for (index, track) in self.tracks.into_iter().enumerate() {
            let mut spec = TrackSpec::new(track.radius, track.min, track.max)
                .with_step(track.step)
                .with_name(track.name.unwrap_or_else(|| DEFAULT_TRACK_NAME.to_owned()));
            if let Some(value) = track.initial_value {
                spec = spec.with_initial_value(value);
            }
            if let Some(color) = track.color {
                spec = spec.with_color(
                    parse_css_color(&color).with_context(|| format!("track {index}: color"))?,
                );
            }
            config = config.with_track(spec);
        }
        Ok(config)
    }
}

fn parse_css_color(s: &str) -> Result<Color> {
    let color = parse_color(s).map_err(|e| anyhow!("invalid color {s:?}: {e}"))?;
    Ok(color.to_alpha_color::<Srgb>())
}

/// One scripted pointer event.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub(crate) struct EventRecord {
    kind: EventKind,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum EventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl From<EventRecord> for PointerEvent {
    fn from(record: EventRecord) -> Self {
        let kind = match record.kind {
            EventKind::Down => PointerKind::Down,
            EventKind::Move => PointerKind::Move,
            EventKind::Up => PointerKind::Up,
            EventKind::Cancel => PointerKind::Cancel,
        };
        Self::new(kind, (record.x, record.y))
    }
}

pub(crate) fn load_config(path: &Path) -> Result<SliderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let file: SliderFile = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    file.into_config()
}

pub(crate) fn load_events(path: &Path) -> Result<Vec<PointerEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading events {}", path.display()))?;
    parse_events(&text).with_context(|| format!("parsing events {}", path.display()))
}

pub(crate) fn parse_events(text: &str) -> Result<Vec<PointerEvent>> {
    let records: Vec<EventRecord> = serde_json::from_str(text)?;
    Ok(records.into_iter().map(PointerEvent::from).collect())
}

/// A five-track budget slider, like the classic demo page.
pub(crate) fn default_config() -> SliderConfig {
    const TRACKS: [(&str, f64, f64, &str); 5] = [
        ("Transportation", 50.0, 1000.0, "#6f2c91"),
        ("Food", 90.0, 1000.0, "#0094d9"),
        ("Insurance", 130.0, 1000.0, "#00a650"),
        ("Entertainment", 170.0, 1000.0, "#ff8c00"),
        ("Health care", 210.0, 1000.0, "#ee3a35"),
    ];
    let mut config = SliderConfig::default().with_symbol("$");
    for (i, (name, radius, max, color)) in TRACKS.into_iter().enumerate() {
        let color = parse_css_color(color).unwrap_or(Color::BLACK);
        config = config.with_track(
            TrackSpec::new(radius, 0.0, max)
                .with_step(10.0)
                .with_initial_value(100.0 * i as f64)
                .with_color(color)
                .with_name(name),
        );
    }
    config
}

/// Grabs the "Food" ring at three o'clock, swings it half a turn, lets go, then starts
/// and cancels a drag on the outer ring.
pub(crate) fn default_events() -> Vec<PointerEvent> {
    let c = DEFAULT_SURFACE_SIZE * 0.5;
    vec![
        PointerEvent::down((c + 90.0, c)),
        PointerEvent::moved((c + 64.0, c + 64.0)),
        PointerEvent::moved((c, c + 90.0)),
        PointerEvent::moved((c - 64.0, c + 64.0)),
        PointerEvent::up((c - 64.0, c + 64.0)),
        PointerEvent::down((c, c - 210.0)),
        PointerEvent::moved((c + 210.0, c)),
        PointerEvent::cancel(),
        // Released outside any ring; ignored.
        PointerEvent::up((c, c)),
    ]
}
