// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A retained SVG scene that implements [`RenderPort`].

use std::fmt::Write as _;

use kurbo::{Arc, BezPath, Point, Rect, Shape, Size, Vec2};
use peniko::Color;
use peniko::color::palette::css;
use rondel_core::{Geometry, RenderPort, SliderConfig, ValueRange, format_value};

const ARC_WIDTH: f64 = 8.0;
const ARC_OPACITY: f32 = 0.45;
const LEGEND_GAP: f64 = 24.0;
const LEGEND_ROW_HEIGHT: f64 = 24.0;
const LEGEND_SWATCH: f64 = 14.0;
const LEGEND_FONT_SIZE: f64 = 14.0;
const LEGEND_WIDTH: f64 = 220.0;

#[derive(Clone, Debug)]
struct TrackNode {
    radius: f64,
    color: Color,
    range: ValueRange,
    name: String,
    drawn: bool,
    handle: Option<Point>,
    value: f64,
    active: bool,
}

/// Scene state for one slider, updated only through [`RenderPort`] calls.
#[derive(Debug)]
pub(crate) struct SvgPort {
    size: Size,
    geometry: Geometry,
    handle_radius: f64,
    symbol: Option<String>,
    tracks: Vec<TrackNode>,
}

impl SvgPort {
    /// Prepares an empty scene for `config`.
    ///
    /// Ranges and names are static display data; everything that moves arrives through the
    /// port.
    pub(crate) fn new(config: &SliderConfig) -> Self {
        let layout = config.layout();
        let tracks = config
            .tracks
            .iter()
            .map(|t| TrackNode {
                radius: t.radius,
                color: t.color,
                range: ValueRange::new(t.min, t.max, t.step),
                name: t.name.clone(),
                drawn: false,
                handle: None,
                value: t.initial_value,
                active: false,
            })
            .collect();
        Self {
            size: layout.size,
            geometry: Geometry::new(layout.center),
            handle_radius: layout.handle_radius,
            symbol: config.symbol.clone(),
            tracks,
        }
    }

    fn node(&mut self, index: usize) -> Option<&mut TrackNode> {
        let node = self.tracks.get_mut(index);
        if node.is_none() {
            log::warn!("render notification for unknown track {index}");
        }
        node
    }

    /// Full document bounds: the slider surface plus the legend column.
    fn view_box(&self) -> Rect {
        let legend_height = LEGEND_ROW_HEIGHT * self.tracks.len() as f64 + LEGEND_GAP;
        Rect::new(
            0.0,
            0.0,
            self.size.width + LEGEND_GAP + LEGEND_WIDTH,
            self.size.height.max(legend_height),
        )
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self.view_box();
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        );

        // Rings first, then value arcs, then handles on top.
        for (index, node) in self.tracks.iter().enumerate().filter(|(_, n)| n.drawn) {
            let center = self.geometry.center();
            let _ = write!(
                out,
                r#"<circle data-circle="{index}" cx="{}" cy="{}" r="{}" fill="none""#,
                center.x, center.y, node.radius
            );
            write_paint_attr(&mut out, "stroke", css::BLACK);
            out.push_str("/>\n");
        }
        for (index, node) in self.tracks.iter().enumerate().filter(|(_, n)| n.drawn) {
            if let Some(d) = self.value_arc(node) {
                let _ = write!(
                    out,
                    r#"<path data-arc="{index}" d="{d}" fill="none" stroke-width="{ARC_WIDTH}""#
                );
                write_paint_attr(&mut out, "stroke", node.color.with_alpha(ARC_OPACITY));
                out.push_str("/>\n");
            }
        }
        for (index, node) in self.tracks.iter().enumerate() {
            let Some(handle) = node.handle else {
                continue;
            };
            let _ = write!(
                out,
                r#"<circle data-point="{index}" cx="{}" cy="{}" r="{}""#,
                handle.x, handle.y, self.handle_radius
            );
            write_paint_attr(&mut out, "fill", node.color);
            if node.active {
                out.push_str(r#" stroke="black" stroke-width="2""#);
            }
            out.push_str("/>\n");
        }

        self.write_legend(&mut out);
        out.push_str("</svg>\n");
        out
    }

    /// Arc from the top of the ring, clockwise, up to the track's current value.
    fn value_arc(&self, node: &TrackNode) -> Option<String> {
        let sweep = node.range.angle_of(node.value).to_radians();
        if sweep <= 0.0 {
            return None;
        }
        let arc = Arc::new(
            self.geometry.center(),
            Vec2::new(node.radius, node.radius),
            -core::f64::consts::FRAC_PI_2,
            sweep,
            0.0,
        );
        let path: BezPath = arc.path_elements(0.1).collect();
        Some(path.to_svg())
    }

    fn write_legend(&self, out: &mut String) {
        let x = self.size.width + LEGEND_GAP;
        for (index, node) in self.tracks.iter().enumerate() {
            let y = LEGEND_GAP + index as f64 * LEGEND_ROW_HEIGHT;
            let label = format_value(node.value, node.range.step, self.symbol.as_deref());
            let _ = write!(
                out,
                r#"<rect data-color="{index}" x="{x}" y="{}" width="{LEGEND_SWATCH}" height="{LEGEND_SWATCH}""#,
                y - LEGEND_SWATCH * 0.5
            );
            write_paint_attr(out, "fill", node.color);
            out.push_str("/>\n");
            let _ = writeln!(
                out,
                r#"<text data-value="{index}" x="{}" y="{y}" font-size="{LEGEND_FONT_SIZE}" dominant-baseline="middle">{}</text>"#,
                x + LEGEND_SWATCH + 8.0,
                escape_xml(&label)
            );
            let _ = writeln!(
                out,
                r#"<text data-name="{index}" x="{}" y="{y}" font-size="{LEGEND_FONT_SIZE}" dominant-baseline="middle">{}</text>"#,
                x + LEGEND_SWATCH + 80.0,
                escape_xml(&node.name)
            );
        }
    }
}

impl RenderPort for SvgPort {
    fn track_drawn(&mut self, index: usize, radius: f64, color: Color) {
        if let Some(node) = self.node(index) {
            node.radius = radius;
            node.color = color;
            node.drawn = true;
        }
    }

    fn handle_moved(&mut self, index: usize, position: Point) {
        if let Some(node) = self.node(index) {
            node.handle = Some(position);
        }
    }

    fn value_changed(&mut self, index: usize, value: f64) {
        if let Some(node) = self.node(index) {
            node.value = value;
        }
    }

    fn active_changed(&mut self, index: usize, active: bool) {
        if let Some(node) = self.node(index) {
            node.active = active;
        }
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (fill, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o:.3}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
