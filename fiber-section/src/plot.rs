//! Section plots
//!
//! Draws a [`FiberSection`] as SVG: patches filled per palette entry with
//! their fiber grid, bars as circles scaled to bar area. Local `z` runs
//! horizontally (positive to the left) and local `y` vertically.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};
use crate::geometry::Point;
use crate::section::FiberSection;

/// Colours for a section plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// One colour per patch in emission order, reused cyclically
    pub patch_colors: Vec<String>,
    pub bar_color: String,
    pub grid_color: String,
}

impl Default for Palette {
    /// Core, then the four cover patches
    fn default() -> Self {
        Self {
            patch_colors: ["red", "lightgrey", "gold", "white", "white"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            bar_color: "black".to_string(),
            grid_color: "dimgrey".to_string(),
        }
    }
}

impl Palette {
    pub fn patch_color(&self, index: usize) -> &str {
        if self.patch_colors.is_empty() {
            "none"
        } else {
            &self.patch_colors[index % self.patch_colors.len()]
        }
    }
}

/// Receives assembled sections for visual checking
pub trait Plotter {
    fn plot(&mut self, section: &FiberSection, palette: &Palette) -> SectionResult<()>;
}

/// Renders sections to SVG documents
#[derive(Debug, Clone)]
pub struct SvgPlotter {
    /// Drawing size of the longer section side in pixels
    pub size_px: f64,
    /// Blank border in pixels
    pub margin_px: f64,
    last: Option<String>,
}

impl Default for SvgPlotter {
    fn default() -> Self {
        Self {
            size_px: 400.0,
            margin_px: 20.0,
            last: None,
        }
    }
}

impl SvgPlotter {
    pub fn new(size_px: f64) -> Self {
        Self {
            size_px,
            ..Self::default()
        }
    }

    /// SVG of the most recent plot
    pub fn svg(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Write the most recent plot to a file
    pub fn save(&self, path: impl AsRef<Path>) -> SectionResult<()> {
        let svg = self
            .last
            .as_deref()
            .ok_or_else(|| SectionError::InvalidInput("nothing plotted yet".to_string()))?;
        fs::write(path.as_ref(), svg)?;
        debug!("section plot written to {}", path.as_ref().display());
        Ok(())
    }

    /// Render a section to an SVG string
    pub fn render(&self, section: &FiberSection, palette: &Palette) -> SectionResult<String> {
        let (lo, hi) = section.bounds().ok_or_else(|| {
            SectionError::InvalidGeometry(format!("section {} has no patches", section.tag))
        })?;
        let span_y = hi[0] - lo[0];
        let span_z = hi[1] - lo[1];
        let longest = span_y.max(span_z);
        if !(longest > 0.0) {
            return Err(SectionError::InvalidGeometry(format!(
                "section {} has zero extent",
                section.tag
            )));
        }

        let scale = self.size_px / longest;
        let m = self.margin_px;
        let to_px = |p: &Point| ((hi[1] - p[1]) * scale + m, (hi[0] - p[0]) * scale + m);
        let width = span_z * scale + 2.0 * m;
        let height = span_y * scale + 2.0 * m;

        let mut svg = String::new();
        let mut draw = || -> std::fmt::Result {
            writeln!(
                svg,
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.1}" height="{:.1}" viewBox="0 0 {:.1} {:.1}">"#,
                width, height, width, height
            )?;
            writeln!(svg, "  <title>Fiber section {}</title>", section.tag)?;

            for (index, patch) in section.patches.iter().enumerate() {
                let points = patch
                    .vertices
                    .iter()
                    .map(|v| {
                        let (x, y) = to_px(v);
                        format!("{:.2},{:.2}", x, y)
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(
                    svg,
                    r#"  <polygon points="{}" fill="{}" stroke="black" stroke-width="1"/>"#,
                    points,
                    palette.patch_color(index)
                )?;
                for (a, b) in patch.grid_lines() {
                    let (x1, y1) = to_px(&a);
                    let (x2, y2) = to_px(&b);
                    writeln!(
                        svg,
                        r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="0.5"/>"#,
                        x1, y1, x2, y2, palette.grid_color
                    )?;
                }
            }

            for (center, area) in section.bars() {
                let (cx, cy) = to_px(&center);
                let r = ((area / std::f64::consts::PI).sqrt() * scale).max(1.5);
                writeln!(
                    svg,
                    r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
                    cx, cy, r, palette.bar_color
                )?;
            }
            writeln!(svg, "</svg>")
        };
        draw().map_err(|e| SectionError::InvalidInput(e.to_string()))?;
        Ok(svg)
    }
}

impl Plotter for SvgPlotter {
    fn plot(&mut self, section: &FiberSection, palette: &Palette) -> SectionResult<()> {
        self.last = Some(self.render(section, palette)?);
        Ok(())
    }
}
