use thiserror::Error;

/// Errors raised while building a rack layout or floor plan.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("parameter `{name}` has invalid value {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("a rack row needs at least one bay")]
    NoBays,

    #[error("level {level} does not sit above the level below it")]
    LevelsNotIncreasing { level: char },

    #[error("beam at level {level} tops out at {top} which exceeds rack height {height}")]
    LevelAboveRack { level: char, top: f32, height: f32 },

    #[error("no aisle/side address configured for rack {rack_id}")]
    MissingAddress { rack_id: u32 },

    #[error("floor-plan rack {id}: {reason}")]
    InvalidRack { id: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
