pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod floorplan;
pub mod geometry;
pub mod layout;
pub mod scene;

#[cfg(feature = "gpu")]
pub mod gpu;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::{LayoutError, Result};
pub use floorplan::*;
pub use geometry::*;
pub use layout::*;
pub use scene::*;
