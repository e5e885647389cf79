//! Rack row placement along the depth axis (X), bay partitioning along the
//! aisle (Y) and beam bands along the height (Z).

use crate::config::WarehouseParams;
use crate::error::Result;

/// Direction a rack's pallet-accessible front faces along X.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    /// Toward increasing X ("right").
    PositiveX,
    /// Toward decreasing X ("left").
    NegativeX,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rack {
    pub id: u32,
    pub x_start: f32,
    pub x_end: f32,
    pub facing: Facing,
    /// Single-sided racks stand against a wall at either end of the building.
    pub single_sided: bool,
}

impl Rack {
    /// X coordinate of the face pallets are loaded from.
    #[inline]
    pub fn front_x(&self) -> f32 {
        match self.facing {
            Facing::PositiveX => self.x_end,
            Facing::NegativeX => self.x_start,
        }
    }

    /// X span of the front upright/beam line for members `thickness` deep.
    pub fn front_span(&self, thickness: f32) -> (f32, f32) {
        match self.facing {
            Facing::PositiveX => (self.x_end - thickness, self.x_end),
            Facing::NegativeX => (self.x_start, self.x_start + thickness),
        }
    }

    /// X span of the back upright/beam line for members `thickness` deep.
    pub fn back_span(&self, thickness: f32) -> (f32, f32) {
        match self.facing {
            Facing::PositiveX => (self.x_start, self.x_start + thickness),
            Facing::NegativeX => (self.x_end - thickness, self.x_end),
        }
    }
}

/// Place rack rows left to right.
///
/// Layout is one single-sided rack facing +X, then `back_to_back_pairs`
/// pairs (a -X rack, the separation gap, a +X rack), then a closing
/// single-sided rack facing -X. The aisle width is added exactly once after
/// every rack that completes an aisle: the first rack and the second rack of
/// each pair.
pub fn generate_rack_rows(params: &WarehouseParams) -> Result<Vec<Rack>> {
    params.validate()?;

    let depth = params.bay_depth;
    let mut racks = Vec::with_capacity(params.rack_count());
    let mut x = 0.0_f32;
    let mut place = |id: u32, facing: Facing, single_sided: bool, x: &mut f32| {
        racks.push(Rack {
            id,
            x_start: *x,
            x_end: *x + depth,
            facing,
            single_sided,
        });
        *x += depth;
    };

    place(1, Facing::PositiveX, true, &mut x);
    x += params.aisle_width;
    for pair in 0..params.back_to_back_pairs as u32 {
        place(2 + 2 * pair, Facing::NegativeX, false, &mut x);
        x += params.separation;
        place(3 + 2 * pair, Facing::PositiveX, false, &mut x);
        x += params.aisle_width;
    }
    let last_id = params.rack_count() as u32;
    place(last_id, Facing::NegativeX, true, &mut x);

    log::debug!(
        "placed {} racks spanning x=[0, {:.1}]",
        racks.len(),
        racks.last().map(|r| r.x_end).unwrap_or(0.0)
    );
    Ok(racks)
}

/// Y positions of the `n + 1` bay boundaries, `0, w, 2w, ..., n*w`.
pub fn bay_boundaries(bays: usize, bay_width: f32) -> Vec<f32> {
    (0..=bays).map(|i| i as f32 * bay_width).collect()
}

/// One slot along the aisle. Bay numbers start at 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bay {
    pub number: usize,
    pub y_start: f32,
    pub y_end: f32,
}

impl Bay {
    #[inline]
    pub fn center_y(&self) -> f32 {
        0.5 * (self.y_start + self.y_end)
    }
}

pub fn bays(bays: usize, bay_width: f32) -> impl Iterator<Item = Bay> {
    (1..=bays).map(move |number| Bay {
        number,
        y_start: (number - 1) as f32 * bay_width,
        y_end: number as f32 * bay_width,
    })
}

/// Beam slab of a raised level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamBand {
    pub level: char,
    pub z_bottom: f32,
    pub z_top: f32,
}

/// Beam bands for every raised level, bottom to top.
pub fn beam_bands(params: &WarehouseParams) -> Vec<BeamBand> {
    params
        .levels
        .iter()
        .filter(|l| !l.is_floor())
        .map(|l| BeamBand {
            level: l.name,
            z_bottom: l.elevation,
            z_top: l.elevation + params.beam_thickness,
        })
        .collect()
}
