//! Typed layout parameters.
//!
//! Every value defaults to the constants in [`crate::constants`]; callers that
//! want a different warehouse build a [`WarehouseParams`] by hand and run
//! [`WarehouseParams::validate`] (the layout builders do this for you).

use crate::constants::*;
use crate::error::{LayoutError, Result};

/// A named height band. `elevation` is the top of the beam pallets rest on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Level {
    pub name: char,
    pub elevation: f32,
}

impl Level {
    /// Floor levels carry no beam.
    #[inline]
    pub fn is_floor(&self) -> bool {
        self.elevation <= 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WarehouseParams {
    pub bays_per_row: usize,
    pub bay_width: f32,
    pub bay_depth: f32,
    pub aisle_width: f32,
    pub separation: f32,
    pub back_to_back_pairs: usize,
    pub beam_thickness: f32,
    pub rack_height: f32,
    pub upright_half_width: f32,
    pub levels: Vec<Level>,
}

impl Default for WarehouseParams {
    fn default() -> Self {
        Self {
            bays_per_row: BAYS_PER_ROW,
            bay_width: BAY_WIDTH,
            bay_depth: BAY_DEPTH,
            aisle_width: AISLE_WIDTH,
            separation: SEPARATION,
            back_to_back_pairs: BACK_TO_BACK_PAIRS,
            beam_thickness: BEAM_THICKNESS,
            rack_height: RACK_HEIGHT,
            upright_half_width: UPRIGHT_HALF_WIDTH,
            levels: LEVELS
                .iter()
                .map(|&(name, elevation)| Level { name, elevation })
                .collect(),
        }
    }
}

impl WarehouseParams {
    /// Total rack rows: one single-sided rack at each end plus the pairs.
    #[inline]
    pub fn rack_count(&self) -> usize {
        2 + 2 * self.back_to_back_pairs
    }

    /// Length of a rack row along the aisle.
    #[inline]
    pub fn row_length(&self) -> f32 {
        self.bays_per_row as f32 * self.bay_width
    }

    pub fn level(&self, name: char) -> Option<&Level> {
        self.levels.iter().find(|l| l.name == name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bays_per_row == 0 {
            return Err(LayoutError::NoBays);
        }
        positive("bay_width", self.bay_width)?;
        positive("bay_depth", self.bay_depth)?;
        positive("beam_thickness", self.beam_thickness)?;
        positive("rack_height", self.rack_height)?;
        positive("upright_half_width", self.upright_half_width)?;
        non_negative("aisle_width", self.aisle_width)?;
        non_negative("separation", self.separation)?;
        if 2.0 * self.beam_thickness > self.bay_depth {
            return Err(LayoutError::InvalidParameter {
                name: "beam_thickness",
                value: self.beam_thickness,
            });
        }

        let mut prev: Option<f32> = None;
        for level in &self.levels {
            non_negative("level elevation", level.elevation)?;
            if let Some(p) = prev {
                if level.elevation <= p {
                    return Err(LayoutError::LevelsNotIncreasing { level: level.name });
                }
            }
            prev = Some(level.elevation);
            if !level.is_floor() {
                let top = level.elevation + self.beam_thickness;
                if top > self.rack_height {
                    return Err(LayoutError::LevelAboveRack {
                        level: level.name,
                        top,
                        height: self.rack_height,
                    });
                }
            }
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidParameter { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidParameter { name, value })
    }
}

/// Which side of its aisle a rack stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AisleSide {
    Left,
    Right,
}

impl AisleSide {
    pub fn code(self) -> char {
        match self {
            AisleSide::Left => 'L',
            AisleSide::Right => 'R',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RackAddress {
    pub rack_id: u32,
    pub aisle: String,
    pub side: AisleSide,
}

impl RackAddress {
    /// Location code printed on a bay, e.g. `C-L-4`.
    pub fn bay_code(&self, bay_number: usize) -> String {
        format!("{}-{}-{}", self.aisle, self.side.code(), bay_number)
    }
}

/// Explicit rack id -> (aisle, side) mapping used for bay address labels.
#[derive(Clone, Debug, PartialEq)]
pub struct RackAddressing {
    entries: Vec<RackAddress>,
}

impl RackAddressing {
    pub fn new(entries: Vec<RackAddress>) -> Self {
        Self { entries }
    }

    /// Racks 1..=count walk aisles A, A, B, B, ... alternating left/right sides.
    pub fn sequential(rack_count: usize) -> Self {
        let entries = (0..rack_count)
            .map(|i| RackAddress {
                rack_id: i as u32 + 1,
                aisle: aisle_name(i / 2),
                side: if i % 2 == 0 {
                    AisleSide::Left
                } else {
                    AisleSide::Right
                },
            })
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, rack_id: u32) -> Result<&RackAddress> {
        self.entries
            .iter()
            .find(|e| e.rack_id == rack_id)
            .ok_or(LayoutError::MissingAddress { rack_id })
    }

    pub fn entries(&self) -> &[RackAddress] {
        &self.entries
    }
}

impl Default for RackAddressing {
    fn default() -> Self {
        Self::sequential(2 + 2 * BACK_TO_BACK_PAIRS)
    }
}

// A..Z, then AA, AB, ... like spreadsheet columns
fn aisle_name(mut index: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push((b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    out.iter().rev().collect()
}
