//! 2D warehouse floor plan: category-colored rack rectangles, aisle bands, a
//! grid and a legend, described in data units for a canvas renderer.
//!
//! This model is independent of the 3D rack rows; it has its own units and
//! its own rack records.

use fnv::FnvHashMap;
use glam::Vec2;

use crate::constants::*;
use crate::error::{LayoutError, Result};

/// The handful of named colors the floor plan uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    LightBlue,
    LightGreen,
    Salmon,
    Gray,
    LightGray,
    Yellow,
    Black,
}

impl NamedColor {
    /// CSS color keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            NamedColor::LightBlue => "lightblue",
            NamedColor::LightGreen => "lightgreen",
            NamedColor::Salmon => "salmon",
            NamedColor::Gray => "gray",
            NamedColor::LightGray => "lightgray",
            NamedColor::Yellow => "yellow",
            NamedColor::Black => "black",
        }
    }

    /// sRGB in 0..1, matching the CSS keyword.
    pub fn rgb(self) -> [f32; 3] {
        let [r, g, b] = match self {
            NamedColor::LightBlue => [173, 216, 230],
            NamedColor::LightGreen => [144, 238, 144],
            NamedColor::Salmon => [250, 128, 114],
            NamedColor::Gray => [128, 128, 128],
            NamedColor::LightGray => [211, 211, 211],
            NamedColor::Yellow => [255, 255, 0],
            NamedColor::Black => [0, 0, 0],
        };
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
    }
}

/// Category -> fill color, in legend order.
#[derive(Clone, Debug)]
pub struct Palette {
    entries: Vec<(String, NamedColor)>,
    index: FnvHashMap<String, usize>,
    fallback: NamedColor,
}

impl Palette {
    pub fn new(entries: Vec<(String, NamedColor)>, fallback: NamedColor) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();
        Self {
            entries,
            index,
            fallback,
        }
    }

    /// Unknown categories fall back to gray.
    pub fn color_for(&self, category: &str) -> NamedColor {
        self.index
            .get(category)
            .map(|&i| self.entries[i].1)
            .unwrap_or(self.fallback)
    }

    pub fn entries(&self) -> &[(String, NamedColor)] {
        &self.entries
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            vec![
                ("storage".to_string(), NamedColor::LightBlue),
                ("pickup".to_string(), NamedColor::LightGreen),
                ("shipping".to_string(), NamedColor::Salmon),
            ],
            NamedColor::Gray,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloorRack {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub depth: f32,
    pub category: String,
}

impl FloorRack {
    pub fn new(id: &str, x: f32, y: f32, width: f32, depth: f32, category: &str) -> Self {
        Self {
            id: id.to_string(),
            x,
            y,
            width,
            depth,
            category: category.to_string(),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.depth / 2.0)
    }

    fn validate(&self) -> Result<()> {
        if !(self.x.is_finite() && self.y.is_finite()) {
            return Err(LayoutError::InvalidRack {
                id: self.id.clone(),
                reason: "position is not finite",
            });
        }
        if !(self.width.is_finite() && self.width > 0.0 && self.depth.is_finite() && self.depth > 0.0) {
            return Err(LayoutError::InvalidRack {
                id: self.id.clone(),
                reason: "width and depth must be positive",
            });
        }
        Ok(())
    }
}

/// The four demo racks.
pub fn sample_racks() -> Vec<FloorRack> {
    vec![
        FloorRack::new("R1", 10.0, 10.0, 5.0, 2.0, "storage"),
        FloorRack::new("R2", 20.0, 10.0, 5.0, 2.0, "storage"),
        FloorRack::new("R3", 40.0, 25.0, 8.0, 3.0, "pickup"),
        FloorRack::new("R4", 60.0, 25.0, 8.0, 3.0, "pickup"),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorPlanOptions {
    pub warehouse_length: f32,
    pub warehouse_width: f32,
    pub show_grid: bool,
    pub highlight_aisles: bool,
}

impl Default for FloorPlanOptions {
    fn default() -> Self {
        Self {
            warehouse_length: FLOOR_LENGTH,
            warehouse_width: FLOOR_WIDTH,
            show_grid: true,
            highlight_aisles: true,
        }
    }
}

/// Full-length horizontal highlight between two Y values.
#[derive(Clone, Debug, PartialEq)]
pub struct AisleBand {
    pub y0: f32,
    pub y1: f32,
    pub color: NamedColor,
    pub alpha: f32,
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RackRect {
    pub id: String,
    pub origin: Vec2,
    pub size: Vec2,
    pub fill: NamedColor,
    pub edge: NamedColor,
    pub line_width: f32,
    pub label_anchor: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    pub color: NamedColor,
    pub line_width: f32,
    pub dash: [f32; 2],
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            color: NamedColor::LightGray,
            line_width: 0.5,
            dash: [4.0, 2.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: NamedColor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloorPlan {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Data extent, `[0, length] x [0, width]`.
    pub extent: Vec2,
    pub bands: Vec<AisleBand>,
    pub racks: Vec<RackRect>,
    pub grid: Option<GridStyle>,
    pub legend: Vec<LegendEntry>,
}

impl FloorPlan {
    pub fn x_ticks(&self) -> Vec<f32> {
        nice_ticks(0.0, self.extent.x, 10)
    }

    pub fn y_ticks(&self) -> Vec<f32> {
        nice_ticks(0.0, self.extent.y, 10)
    }
}

/// Describe the floor plan for `racks`; draw order is bands, then racks.
pub fn draw_warehouse_layout(
    racks: &[FloorRack],
    options: &FloorPlanOptions,
    palette: &Palette,
) -> Result<FloorPlan> {
    for (name, value) in [
        ("warehouse_length", options.warehouse_length),
        ("warehouse_width", options.warehouse_width),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(LayoutError::InvalidParameter { name, value });
        }
    }

    let bands: Vec<AisleBand> = if options.highlight_aisles {
        AISLE_BANDS
            .iter()
            .enumerate()
            .map(|(i, &(y0, y1))| AisleBand {
                y0,
                y1,
                color: NamedColor::Yellow,
                alpha: AISLE_BAND_ALPHA,
                label: (i == 0).then(|| MAIN_AISLE_LABEL.to_string()),
            })
            .collect()
    } else {
        Vec::new()
    };

    let mut rects = Vec::with_capacity(racks.len());
    for rack in racks {
        rack.validate()?;
        rects.push(RackRect {
            id: rack.id.clone(),
            origin: Vec2::new(rack.x, rack.y),
            size: Vec2::new(rack.width, rack.depth),
            fill: palette.color_for(&rack.category),
            edge: NamedColor::Black,
            line_width: 1.0,
            label_anchor: rack.center(),
        });
    }

    let legend = palette
        .entries()
        .iter()
        .map(|(label, color)| LegendEntry {
            label: label.clone(),
            color: *color,
        })
        .collect();

    log::debug!("floor plan: {} racks, {} aisle bands", rects.len(), bands.len());
    Ok(FloorPlan {
        title: "Warehouse Layout".to_string(),
        x_label: "Length (units)".to_string(),
        y_label: "Width (units)".to_string(),
        extent: Vec2::new(options.warehouse_length, options.warehouse_width),
        bands,
        racks: rects,
        grid: options.show_grid.then(GridStyle::default),
        legend,
    })
}

/// Step of 1, 2 or 5 times a power of ten giving roughly `target` intervals.
pub fn nice_step(span: f32, target: usize) -> f32 {
    if !(span.is_finite() && span > 0.0) || target == 0 {
        return 1.0;
    }
    let raw = span / target as f32;
    let magnitude = 10f32.powf(raw.log10().floor());
    let norm = raw / magnitude;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick values covering `[lo, hi]` inclusive at a nice step.
pub fn nice_ticks(lo: f32, hi: f32, target: usize) -> Vec<f32> {
    let step = nice_step(hi - lo, target);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step + 1e-4).floor() as i64;
    (first..=last).map(|i| i as f32 * step).collect()
}

/// Data -> pixel mapping with equal aspect, centred inside the margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotTransform {
    pub scale: f32,
    /// Pixel position of data (0, 0).
    pub origin_px: Vec2,
    pub extent: Vec2,
}

impl PlotTransform {
    /// `margins` are left, top, right, bottom in pixels.
    pub fn fit(extent: Vec2, canvas_px: Vec2, margins: [f32; 4]) -> Self {
        let [left, top, right, bottom] = margins;
        let avail = Vec2::new(
            (canvas_px.x - left - right).max(1.0),
            (canvas_px.y - top - bottom).max(1.0),
        );
        let scale = (avail.x / extent.x.max(1e-6)).min(avail.y / extent.y.max(1e-6));
        let used = extent * scale;
        let pad = (avail - used) * 0.5;
        Self {
            scale,
            origin_px: Vec2::new(left + pad.x, top + pad.y + used.y),
            extent,
        }
    }

    #[inline]
    pub fn to_px(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.origin_px.x + p.x * self.scale,
            self.origin_px.y - p.y * self.scale,
        )
    }

    #[inline]
    pub fn len_px(&self, units: f32) -> f32 {
        units * self.scale
    }

    /// Pixel rect (x, y, w, h) with y at the top edge, as canvas APIs want.
    pub fn rect_px(&self, origin: Vec2, size: Vec2) -> [f32; 4] {
        let top_left = self.to_px(Vec2::new(origin.x, origin.y + size.y));
        [top_left.x, top_left.y, size.x * self.scale, size.y * self.scale]
    }

    /// Pixel rect of the whole plot area.
    pub fn plot_area_px(&self) -> [f32; 4] {
        self.rect_px(Vec2::ZERO, self.extent)
    }
}
