// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the rating demos.
//!
//! [`SvgPainter`] renders a rating row to SVG markup using the default star,
//! standing in for a real rendering backend.

use std::fmt::Write as _;

use kurbo::{Point, Rect};
use peniko::Color;
use understory_rating::icon::{IconPainter, IconParams, StarIcon};

/// Installs a `tracing` subscriber honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Paints stars into an SVG document.
#[derive(Debug, Default)]
pub struct SvgPainter {
    body: String,
    clips: Vec<Rect>,
    open_groups: usize,
}

impl SvgPainter {
    /// Creates an empty painter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps everything painted so far into an SVG document of the given size.
    pub fn finish(self, width: f64, height: f64) -> String {
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
        )
        .unwrap();
        if !self.clips.is_empty() {
            out.push_str("<defs>\n");
            for (i, clip) in self.clips.iter().enumerate() {
                writeln!(
                    out,
                    r#"<clipPath id="fill{i}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
                    clip.x0,
                    clip.y0,
                    clip.width(),
                    clip.height()
                )
                .unwrap();
            }
            out.push_str("</defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

impl IconPainter for SvgPainter {
    fn paint_icon(&mut self, origin: Point, params: &IconParams<'_>) {
        let path = StarIcon::path(origin, params.size);
        writeln!(
            self.body,
            r#"<path d="{}" fill="{}"/>"#,
            path.to_svg(),
            hex(params.color)
        )
        .unwrap();
    }

    fn push_clip(&mut self, clip: Rect) {
        writeln!(
            self.body,
            r#"<g clip-path="url(#fill{})">"#,
            self.clips.len()
        )
        .unwrap();
        self.clips.push(clip);
        self.open_groups += 1;
    }

    fn pop_clip(&mut self) {
        if self.open_groups > 0 {
            self.body.push_str("</g>\n");
            self.open_groups -= 1;
        }
    }
}
