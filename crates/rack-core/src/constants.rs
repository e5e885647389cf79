// Warehouse geometry and styling constants shared by the native and web frontends.
// All lengths are inches.

// Rack row layout
pub const BAYS_PER_ROW: usize = 10;
pub const BAY_WIDTH: f32 = 101.0; // along the aisle (Y)
pub const BAY_DEPTH: f32 = 50.0; // across the aisle (X)
pub const AISLE_WIDTH: f32 = 128.0;
pub const SEPARATION: f32 = 18.0; // gap between back-to-back racks
pub const BACK_TO_BACK_PAIRS: usize = 5;

// Structure
pub const BEAM_THICKNESS: f32 = 4.0;
pub const RACK_HEIGHT: f32 = 287.0;
pub const UPRIGHT_HALF_WIDTH: f32 = 2.0; // uprights span boundary +/- this along Y

// Level name and top-of-beam elevation; A is the floor
pub const LEVELS: [(char, f32); 7] = [
    ('A', 0.0),
    ('B', 52.0),
    ('C', 99.0),
    ('D', 145.0),
    ('E', 191.0),
    ('F', 237.0),
    ('G', 283.0),
];

// Label anchors
pub const BAY_LABEL_Z: f32 = 5.0;
pub const LEVEL_LABEL_Y: f32 = 50.0; // inside the first bay
pub const LEVEL_LABEL_LIFT: f32 = 5.0;

// Member styling (rgb, opacity)
pub const UPRIGHT_RGB: [f32; 3] = [0.5, 0.5, 0.5]; // gray
pub const UPRIGHT_OPACITY: f32 = 0.7;
pub const BEAM_RGB: [f32; 3] = [0.0, 0.0, 1.0]; // blue
pub const BEAM_OPACITY: f32 = 0.5;
pub const LABEL_MARKER_RGBA: [f32; 4] = [0.95, 0.85, 0.2, 1.0];
pub const LABEL_MARKER_SIZE_PX: f32 = 6.0;

// Camera framing, expressed like a plotly scene eye: direction from the scene centre
pub const CAMERA_EYE_DIRECTION: [f32; 3] = [1.5, 1.5, 0.5];
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;

// Floor plan defaults (arbitrary units)
pub const FLOOR_LENGTH: f32 = 100.0;
pub const FLOOR_WIDTH: f32 = 50.0;
pub const AISLE_BANDS: [(f32, f32); 2] = [(15.0, 20.0), (35.0, 40.0)];
pub const AISLE_BAND_ALPHA: f32 = 0.2;
pub const MAIN_AISLE_LABEL: &str = "Main Aisle";
